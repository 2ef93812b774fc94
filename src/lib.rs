mod auth;
mod commands;
mod file_manager;
mod logging;
mod models;
mod store;
mod utils;

use auth::AuthManager;
use commands::{
    auth::{get_auth_status, login, logout},
    products::{
        add_product, delete_product, featured_products, get_product, list_categories,
        list_products, products_by_category, search_products, update_product,
    },
    settings::{get_settings, update_settings},
    testimonials::{add_testimonial, delete_testimonial, list_testimonials, update_testimonial},
};
use file_manager::initialize_json_file;
use models::{Product, Settings, Testimonial, User};
use std::sync::Arc;
use store::Store;
use tauri::Manager;
use tauri_plugin_log::{Target, TargetKind};
use utils::{
    get_logs_dir, get_products_json_path, get_session_json_path, get_settings_json_path,
    get_testimonials_json_path, get_users_json_path, initialize_data_directories,
};

fn initialize_app_data() -> Result<(), String> {
    // Create directory structure
    initialize_data_directories()?;

    // Initialize JSON files with seed content
    initialize_json_file(&get_products_json_path(), &Product::seed_catalog())?;
    initialize_json_file(&get_testimonials_json_path(), &Testimonial::seed_testimonials())?;
    initialize_json_file(&get_users_json_path(), &User::seed_users())?;
    initialize_json_file(&get_settings_json_path(), &Settings::default())?;

    println!("App data initialized successfully");
    Ok(())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    if let Err(e) = initialize_app_data() {
        eprintln!("Failed to initialize app data: {}", e);
    }

    let store = Arc::new(Store::load(
        get_products_json_path(),
        get_testimonials_json_path(),
    ));
    let auth_manager = Arc::new(AuthManager::load(
        get_users_json_path(),
        get_session_json_path(),
    ));

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(
            tauri_plugin_log::Builder::new()
                .targets([
                    Target::new(TargetKind::Stdout),
                    Target::new(TargetKind::Folder {
                        path: get_logs_dir(),
                        file_name: None,
                    }),
                ])
                .level(log::LevelFilter::Info)
                .build(),
        )
        .plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
            // Another instance tried to launch - show and focus the existing window
            if let Some(window) = app.get_webview_window("main") {
                let _ = window.show();
                let _ = window.unminimize();
                let _ = window.set_focus();
            }
        }))
        .manage(store)
        .manage(auth_manager)
        .setup(|_app| {
            logging::cleanup_old_logs();
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Catalog commands
            list_products,
            get_product,
            products_by_category,
            featured_products,
            search_products,
            list_categories,
            add_product,
            update_product,
            delete_product,
            // Testimonial commands
            list_testimonials,
            add_testimonial,
            update_testimonial,
            delete_testimonial,
            // Auth commands
            login,
            logout,
            get_auth_status,
            // Settings commands
            get_settings,
            update_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
