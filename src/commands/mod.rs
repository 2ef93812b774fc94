// Tauri command handlers - one file per domain
pub mod auth;
pub mod products;
pub mod settings;
pub mod testimonials;
