// Product catalog command handlers
use crate::models::{Product, ProductDraft};
use crate::store::Store;
use log::info;
use std::sync::Arc;
use tauri::State;

#[tauri::command]
pub fn list_products(store: State<'_, Arc<Store>>) -> Result<Vec<Product>, String> {
    Ok(store.products())
}

/// `None` when no product has that id; the detail page renders its own
/// not-found view
#[tauri::command]
pub fn get_product(store: State<'_, Arc<Store>>, id: String) -> Result<Option<Product>, String> {
    Ok(store.product_by_id(&id))
}

#[tauri::command]
pub fn products_by_category(
    store: State<'_, Arc<Store>>,
    category: String,
) -> Result<Vec<Product>, String> {
    Ok(store.products_by_category(&category))
}

#[tauri::command]
pub fn featured_products(store: State<'_, Arc<Store>>) -> Result<Vec<Product>, String> {
    Ok(store.featured_products())
}

#[tauri::command]
pub fn search_products(
    store: State<'_, Arc<Store>>,
    query: String,
) -> Result<Vec<Product>, String> {
    Ok(store.search_products(&query))
}

/// Unique category labels for the filter bar on the products page
#[tauri::command]
pub fn list_categories(store: State<'_, Arc<Store>>) -> Result<Vec<String>, String> {
    Ok(store.categories())
}

#[tauri::command]
pub fn add_product(
    store: State<'_, Arc<Store>>,
    draft: ProductDraft,
) -> Result<Product, String> {
    let product = store.add_product(draft)?;
    info!("Added product {}: {}", product.id, product.name);
    Ok(product)
}

#[tauri::command]
pub fn update_product(
    store: State<'_, Arc<Store>>,
    product: Product,
) -> Result<Product, String> {
    let id = product.id.clone();
    match store.update_product(product)? {
        Some(updated) => {
            info!("Updated product {}", updated.id);
            Ok(updated)
        }
        None => Err(format!("Product not found: {}", id)),
    }
}

#[tauri::command]
pub fn delete_product(store: State<'_, Arc<Store>>, id: String) -> Result<(), String> {
    if store.delete_product(&id)? {
        info!("Deleted product {}", id);
        Ok(())
    } else {
        Err(format!("Product not found: {}", id))
    }
}
