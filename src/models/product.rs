// Product data models
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Per-serving nutrition facts shown on the product detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: f64,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition_info: Option<NutritionInfo>,
    pub created_at: DateTime<Utc>,
}

/// Form payload for creating or editing a product. Ids and creation
/// timestamps are assigned by the store, never by the form.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: f64,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
    #[serde(default)]
    pub nutrition_info: Option<NutritionInfo>,
}

impl Product {
    pub fn new(id: String, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: coerce_price_value(draft.price),
            category: draft.category,
            image: draft.image,
            featured: draft.featured,
            ingredients: draft.ingredients,
            nutrition_info: draft.nutrition_info,
            created_at: Utc::now(),
        }
    }

    /// Built-in catalog used when the products file is missing or corrupt
    pub fn seed_catalog() -> Vec<Product> {
        vec![
            Product {
                id: "1".to_string(),
                name: "Chocolate Croissant".to_string(),
                description: "Buttery, flaky croissant filled with rich chocolate.".to_string(),
                price: 4.99,
                category: "Pastries".to_string(),
                image: "https://images.pexels.com/photos/3892469/pexels-photo-3892469.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string(),
                featured: true,
                ingredients: Some(string_vec(&["Flour", "Butter", "Chocolate", "Sugar", "Yeast"])),
                nutrition_info: Some(NutritionInfo { calories: 320, protein: 5, carbs: 35, fat: 18 }),
                created_at: seed_date(2023, 1, 15),
            },
            Product {
                id: "2".to_string(),
                name: "Sourdough Bread".to_string(),
                description: "Artisanal sourdough bread with a crispy crust and tender crumb.".to_string(),
                price: 6.99,
                category: "Bread".to_string(),
                image: "https://images.pexels.com/photos/920220/pexels-photo-920220.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string(),
                featured: true,
                ingredients: Some(string_vec(&["Flour", "Water", "Salt", "Sourdough Starter"])),
                nutrition_info: Some(NutritionInfo { calories: 160, protein: 6, carbs: 32, fat: 1 }),
                created_at: seed_date(2023, 2, 10),
            },
            Product {
                id: "3".to_string(),
                name: "Blueberry Muffin".to_string(),
                description: "Soft muffin loaded with fresh blueberries.".to_string(),
                price: 3.99,
                category: "Muffins".to_string(),
                image: "https://images.pexels.com/photos/5386673/pexels-photo-5386673.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string(),
                featured: false,
                ingredients: Some(string_vec(&["Flour", "Sugar", "Blueberries", "Butter", "Eggs"])),
                nutrition_info: Some(NutritionInfo { calories: 280, protein: 4, carbs: 36, fat: 12 }),
                created_at: seed_date(2023, 1, 20),
            },
            Product {
                id: "4".to_string(),
                name: "Raspberry Tart".to_string(),
                description: "Buttery tart shell filled with pastry cream and topped with fresh raspberries.".to_string(),
                price: 5.99,
                category: "Desserts".to_string(),
                image: "https://images.pexels.com/photos/1126359/pexels-photo-1126359.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string(),
                featured: true,
                ingredients: Some(string_vec(&["Flour", "Butter", "Sugar", "Raspberries", "Cream"])),
                nutrition_info: Some(NutritionInfo { calories: 340, protein: 4, carbs: 38, fat: 19 }),
                created_at: seed_date(2023, 3, 5),
            },
            Product {
                id: "5".to_string(),
                name: "Cinnamon Roll".to_string(),
                description: "Soft rolls with a cinnamon-sugar swirl and cream cheese frosting.".to_string(),
                price: 4.49,
                category: "Pastries".to_string(),
                image: "https://images.pexels.com/photos/267308/pexels-photo-267308.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string(),
                featured: false,
                ingredients: Some(string_vec(&["Flour", "Sugar", "Cinnamon", "Butter", "Cream Cheese"])),
                nutrition_info: Some(NutritionInfo { calories: 420, protein: 6, carbs: 58, fat: 19 }),
                created_at: seed_date(2023, 2, 25),
            },
            Product {
                id: "6".to_string(),
                name: "Baguette".to_string(),
                description: "Traditional French baguette with a crispy crust and airy interior.".to_string(),
                price: 3.49,
                category: "Bread".to_string(),
                image: "https://images.pexels.com/photos/1387070/pexels-photo-1387070.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string(),
                featured: false,
                ingredients: Some(string_vec(&["Flour", "Water", "Salt", "Yeast"])),
                nutrition_info: Some(NutritionInfo { calories: 150, protein: 6, carbs: 29, fat: 1 }),
                created_at: seed_date(2023, 1, 5),
            },
        ]
    }
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn seed_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// Coerces whatever is stored under `price` into a finite number.
/// Non-numeric, non-finite and missing values all load as 0.
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let price = match &value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(coerce_price_value(price))
}

pub(crate) fn coerce_price_value(price: f64) -> f64 {
    if price.is_finite() {
        price
    } else {
        0.0
    }
}
