// In-memory store over the persisted catalog collections.
//
// The JSON documents on disk are the source of truth; the vectors here are
// an eagerly synchronized cache. Every mutation persists the full updated
// collection first and only then swaps the cache, so a failed write leaves
// memory matching what is actually stored.

use crate::file_manager::{load_or_seed, write_json_file};
use crate::models::product::coerce_price_value;
use crate::models::{Product, ProductDraft, Testimonial, TestimonialDraft};
use chrono::Utc;
use log::debug;
use parking_lot::RwLock;
use std::path::PathBuf;

pub struct Store {
    products_path: PathBuf,
    testimonials_path: PathBuf,
    products: RwLock<Vec<Product>>,
    testimonials: RwLock<Vec<Testimonial>>,
}

impl Store {
    /// Loads both collections, seeding them when missing or corrupt
    pub fn load(products_path: PathBuf, testimonials_path: PathBuf) -> Self {
        let products: Vec<Product> = load_or_seed(&products_path, Product::seed_catalog());
        let testimonials: Vec<Testimonial> =
            load_or_seed(&testimonials_path, Testimonial::seed_testimonials());

        debug!(
            "Store loaded: {} products, {} testimonials",
            products.len(),
            testimonials.len()
        );

        Self {
            products_path,
            testimonials_path,
            products: RwLock::new(products),
            testimonials: RwLock::new(testimonials),
        }
    }

    // Products

    pub fn add_product(&self, draft: ProductDraft) -> Result<Product, String> {
        let mut products = self.products.write();

        let id = next_id(|candidate| products.iter().any(|p| p.id == candidate));
        let product = Product::new(id, draft);

        let mut updated = products.clone();
        updated.push(product.clone());
        write_json_file(&self.products_path, &updated)?;
        *products = updated;

        Ok(product)
    }

    /// Replaces the record whose id matches, keeping the stored creation
    /// timestamp. `Ok(None)` when no record has that id; nothing is written.
    pub fn update_product(&self, incoming: Product) -> Result<Option<Product>, String> {
        let mut products = self.products.write();

        let Some(pos) = products.iter().position(|p| p.id == incoming.id) else {
            return Ok(None);
        };

        let mut record = incoming;
        record.price = coerce_price_value(record.price);
        record.created_at = products[pos].created_at;

        let mut updated = products.clone();
        updated[pos] = record.clone();
        write_json_file(&self.products_path, &updated)?;
        *products = updated;

        Ok(Some(record))
    }

    /// `Ok(false)` when no record has that id; the collection is unchanged
    pub fn delete_product(&self, id: &str) -> Result<bool, String> {
        let mut products = self.products.write();

        let Some(pos) = products.iter().position(|p| p.id == id) else {
            return Ok(false);
        };

        let mut updated = products.clone();
        updated.remove(pos);
        write_json_file(&self.products_path, &updated)?;
        *products = updated;

        Ok(true)
    }

    pub fn products(&self) -> Vec<Product> {
        self.products.read().clone()
    }

    pub fn product_by_id(&self, id: &str) -> Option<Product> {
        self.products.read().iter().find(|p| p.id == id).cloned()
    }

    pub fn products_by_category(&self, category: &str) -> Vec<Product> {
        self.products
            .read()
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    pub fn featured_products(&self) -> Vec<Product> {
        self.products
            .read()
            .iter()
            .filter(|p| p.featured)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring match against name, description or category
    pub fn search_products(&self, query: &str) -> Vec<Product> {
        let needle = query.to_lowercase();
        self.products
            .read()
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Unique category labels in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let products = self.products.read();
        let mut categories: Vec<String> = Vec::new();
        for product in products.iter() {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }

    // Testimonials

    pub fn add_testimonial(&self, draft: TestimonialDraft) -> Result<Testimonial, String> {
        let mut testimonials = self.testimonials.write();

        let id = next_id(|candidate| testimonials.iter().any(|t| t.id == candidate));
        let testimonial = Testimonial::new(id, draft);

        let mut updated = testimonials.clone();
        updated.push(testimonial.clone());
        write_json_file(&self.testimonials_path, &updated)?;
        *testimonials = updated;

        Ok(testimonial)
    }

    pub fn update_testimonial(
        &self,
        incoming: Testimonial,
    ) -> Result<Option<Testimonial>, String> {
        let mut testimonials = self.testimonials.write();

        let Some(pos) = testimonials.iter().position(|t| t.id == incoming.id) else {
            return Ok(None);
        };

        let mut record = incoming;
        record.date = testimonials[pos].date;

        let mut updated = testimonials.clone();
        updated[pos] = record.clone();
        write_json_file(&self.testimonials_path, &updated)?;
        *testimonials = updated;

        Ok(Some(record))
    }

    pub fn delete_testimonial(&self, id: &str) -> Result<bool, String> {
        let mut testimonials = self.testimonials.write();

        let Some(pos) = testimonials.iter().position(|t| t.id == id) else {
            return Ok(false);
        };

        let mut updated = testimonials.clone();
        updated.remove(pos);
        write_json_file(&self.testimonials_path, &updated)?;
        *testimonials = updated;

        Ok(true)
    }

    pub fn testimonials(&self) -> Vec<Testimonial> {
        self.testimonials.read().clone()
    }
}

/// Timestamp-derived id, bumped until unique within the collection so two
/// adds in the same millisecond cannot collide
fn next_id<F>(is_taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut candidate = Utc::now().timestamp_millis();
    let mut id = candidate.to_string();
    while is_taken(&id) {
        candidate += 1;
        id = candidate.to_string();
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_data_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "sweet-delights-store-{}-{}-{}",
            tag,
            std::process::id(),
            nanos
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn temp_store(tag: &str) -> (Store, PathBuf) {
        let dir = temp_data_dir(tag);
        let store = Store::load(dir.join("products.json"), dir.join("testimonials.json"));
        (store, dir)
    }

    fn draft(name: &str, category: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            description: "A test bake".to_string(),
            price: 2.5,
            category: category.to_string(),
            image: String::new(),
            featured: false,
            ingredients: None,
            nutrition_info: None,
        }
    }

    #[test]
    fn test_first_load_seeds_catalog() {
        let (store, dir) = temp_store("seeds");
        assert_eq!(store.products().len(), 6);
        assert_eq!(store.testimonials().len(), 4);
        assert!(dir.join("products.json").exists());
        assert!(dir.join("testimonials.json").exists());
    }

    #[test]
    fn test_add_assigns_unique_id_and_timestamp() {
        let (store, dir) = temp_store("add");
        let before = Utc::now();

        let product = store.add_product(draft("Pretzel", "Bread")).unwrap();

        assert!(!product.id.is_empty());
        assert!(product.created_at >= before);
        let products = store.products();
        assert_eq!(products.len(), 7);
        assert_eq!(products.iter().filter(|p| p.id == product.id).count(), 1);

        // The write is visible to a fresh load of the same files
        let reloaded = Store::load(dir.join("products.json"), dir.join("testimonials.json"));
        assert!(reloaded.product_by_id(&product.id).is_some());
    }

    #[test]
    fn test_add_twice_in_same_millisecond_keeps_ids_unique() {
        let (store, _dir) = temp_store("add-twice");
        let first = store.add_product(draft("Eclair", "Pastries")).unwrap();
        let second = store.add_product(draft("Macaron", "Pastries")).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_update_preserves_id_and_created_at() {
        let (store, _dir) = temp_store("update");
        let original = store.product_by_id("1").unwrap();

        let mut edited = original.clone();
        edited.name = "Dark Chocolate Croissant".to_string();
        edited.price = 5.49;
        edited.created_at = Utc::now();

        let updated = store.update_product(edited).unwrap().unwrap();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);

        let fetched = store.product_by_id("1").unwrap();
        assert_eq!(fetched.name, "Dark Chocolate Croissant");
        assert_eq!(fetched.price, 5.49);
        assert_eq!(fetched.created_at, original.created_at);
    }

    #[test]
    fn test_update_unknown_id_changes_nothing() {
        let (store, _dir) = temp_store("update-miss");
        let mut ghost = store.product_by_id("1").unwrap();
        ghost.id = "does-not-exist".to_string();
        ghost.name = "Ghost".to_string();

        assert!(store.update_product(ghost).unwrap().is_none());
        assert_eq!(store.products().len(), 6);
        assert!(store.products().iter().all(|p| p.name != "Ghost"));
    }

    #[test]
    fn test_update_coerces_non_finite_price() {
        let (store, _dir) = temp_store("update-price");
        let mut edited = store.product_by_id("1").unwrap();
        edited.price = f64::NAN;

        let updated = store.update_product(edited).unwrap().unwrap();
        assert_eq!(updated.price, 0.0);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let (store, _dir) = temp_store("delete");
        assert!(store.delete_product("1").unwrap());
        assert_eq!(store.products().len(), 5);
        assert!(store.product_by_id("1").is_none());
    }

    #[test]
    fn test_delete_unknown_id_leaves_collection_unchanged() {
        let (store, _dir) = temp_store("delete-miss");
        assert!(!store.delete_product("does-not-exist").unwrap());
        assert_eq!(store.products().len(), 6);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let (store, _dir) = temp_store("search");

        let hits = store.search_products("choc");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Chocolate Croissant");

        // Matches across name, description and category
        let bread_hits = store.search_products("BREAD");
        assert!(bread_hits.iter().any(|p| p.name == "Sourdough Bread"));
        assert!(bread_hits.iter().any(|p| p.name == "Baguette"));
    }

    #[test]
    fn test_category_filter_is_exact_match() {
        let (store, _dir) = temp_store("category");
        assert_eq!(store.products_by_category("Bread").len(), 2);
        assert!(store.products_by_category("bread").is_empty());
    }

    #[test]
    fn test_featured_filter() {
        let (store, _dir) = temp_store("featured");
        let featured = store.featured_products();
        assert_eq!(featured.len(), 3);
        assert!(featured.iter().all(|p| p.featured));
    }

    #[test]
    fn test_categories_unique_in_first_seen_order() {
        let (store, _dir) = temp_store("categories");
        assert_eq!(
            store.categories(),
            vec!["Pastries", "Bread", "Muffins", "Desserts"]
        );
    }

    #[test]
    fn test_corrupt_products_file_yields_seed_catalog() {
        let dir = temp_data_dir("corrupt");
        fs::write(dir.join("products.json"), "[{\"id\": oops").unwrap();

        let store = Store::load(dir.join("products.json"), dir.join("testimonials.json"));
        assert_eq!(store.products().len(), 6);
    }

    #[test]
    fn test_corrupt_stored_price_reads_as_zero() {
        let dir = temp_data_dir("bad-price");
        fs::write(
            dir.join("products.json"),
            r#"[{"id":"9","name":"Mystery Pie","description":"","price":"ask us","category":"Desserts","image":"","created_at":"2023-05-01T00:00:00Z"}]"#,
        )
        .unwrap();

        let store = Store::load(dir.join("products.json"), dir.join("testimonials.json"));
        let pie = store.product_by_id("9").unwrap();
        assert_eq!(pie.price, 0.0);
    }

    #[test]
    fn test_testimonial_crud_round_trip() {
        let (store, _dir) = temp_store("testimonials");

        let added = store
            .add_testimonial(TestimonialDraft {
                name: "Priya Patel".to_string(),
                position: None,
                content: "Best muffins in town".to_string(),
                image: None,
                rating: 4,
            })
            .unwrap();
        assert_eq!(store.testimonials().len(), 5);

        let mut edited = added.clone();
        edited.rating = 5;
        edited.date = Utc::now();
        let updated = store.update_testimonial(edited).unwrap().unwrap();
        assert_eq!(updated.rating, 5);
        assert_eq!(updated.date, added.date);

        assert!(store.delete_testimonial(&added.id).unwrap());
        assert_eq!(store.testimonials().len(), 4);
        assert!(!store.delete_testimonial(&added.id).unwrap());
    }
}
