// Data models (structs)
pub mod product;
pub mod settings;
pub mod testimonial;
pub mod user;

pub use product::*;
pub use settings::*;
pub use testimonial::*;
pub use user::*;
