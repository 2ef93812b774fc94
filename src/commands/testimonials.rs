// Testimonial command handlers
use crate::models::{Testimonial, TestimonialDraft};
use crate::store::Store;
use log::info;
use std::sync::Arc;
use tauri::State;

#[tauri::command]
pub fn list_testimonials(store: State<'_, Arc<Store>>) -> Result<Vec<Testimonial>, String> {
    Ok(store.testimonials())
}

#[tauri::command]
pub fn add_testimonial(
    store: State<'_, Arc<Store>>,
    draft: TestimonialDraft,
) -> Result<Testimonial, String> {
    let testimonial = store.add_testimonial(draft)?;
    info!("Added testimonial {} from {}", testimonial.id, testimonial.name);
    Ok(testimonial)
}

#[tauri::command]
pub fn update_testimonial(
    store: State<'_, Arc<Store>>,
    testimonial: Testimonial,
) -> Result<Testimonial, String> {
    let id = testimonial.id.clone();
    match store.update_testimonial(testimonial)? {
        Some(updated) => {
            info!("Updated testimonial {}", updated.id);
            Ok(updated)
        }
        None => Err(format!("Testimonial not found: {}", id)),
    }
}

#[tauri::command]
pub fn delete_testimonial(store: State<'_, Arc<Store>>, id: String) -> Result<(), String> {
    if store.delete_testimonial(&id)? {
        info!("Deleted testimonial {}", id);
        Ok(())
    } else {
        Err(format!("Testimonial not found: {}", id))
    }
}
