// Settings command handlers - shop display preferences in file storage
use crate::file_manager::{read_json_file, write_json_file};
use crate::models::Settings;
use crate::utils::get_settings_json_path;
use log::debug;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateSettingsParams {
    pub shop_name: Option<String>,
    pub tagline: Option<String>,
    pub currency_symbol: Option<String>,
}

/// Get current settings from the JSON file
#[tauri::command]
pub fn get_settings() -> Result<Settings, String> {
    let path = get_settings_json_path();

    if !path.exists() {
        return Ok(Settings::default());
    }

    read_json_file(&path)
}

/// Update settings with partial update support
#[tauri::command]
pub fn update_settings(settings: UpdateSettingsParams) -> Result<Settings, String> {
    let path = get_settings_json_path();

    let mut current_settings: Settings = if path.exists() {
        read_json_file(&path)?
    } else {
        Settings::default()
    };

    if let Some(shop_name) = settings.shop_name {
        current_settings.shop_name = shop_name;
    }
    if let Some(tagline) = settings.tagline {
        current_settings.tagline = tagline;
    }
    if let Some(currency_symbol) = settings.currency_symbol {
        current_settings.currency_symbol = currency_symbol;
    }

    write_json_file(&path, &current_settings)?;

    debug!("Updated settings: {:?}", current_settings);

    Ok(current_settings)
}
