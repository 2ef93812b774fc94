// Settings data models
use serde::{Deserialize, Serialize};

/// Shop display preferences, editable from the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub shop_name: String,
    pub tagline: String,
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shop_name: String::from("Sweet Delights"),
            tagline: String::from("Freshly baked happiness, every day"),
            currency_symbol: String::from("$"),
        }
    }
}
