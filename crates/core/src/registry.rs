//! In-memory shoe registry.
//!
//! The registry owns the full collection of records for the process
//! lifetime. It assigns identifiers from a monotonically increasing counter
//! starting at 1; identifiers are never reused or reassigned, and insertion
//! order is preserved. There is no persistence.

use chrono::Utc;

use crate::types::{ShoeId, ShoePayload, ShoeRecord, SizeValue};

/// Errors returned by registry lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No record exists with the given identifier.
    #[error("no shoe with id {0}")]
    NotFound(ShoeId),
}

/// The in-memory collection of shoe records.
///
/// All five operations are synchronous single steps over the owned `Vec`;
/// callers are responsible for wrapping the registry in a lock when it is
/// shared across request handlers.
#[derive(Debug)]
pub struct ShoeRegistry {
    shoes: Vec<ShoeRecord>,
    next_id: i64,
}

impl Default for ShoeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ShoeRegistry {
    /// Create an empty registry. The first allocated identifier is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            shoes: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a record from the payload and append it to the collection.
    ///
    /// `brand`, `model`, `size`, `color`, and `price` are stored as given
    /// (absent stays absent). `stock` defaults to 0 and `tags` to empty when
    /// the payload does not carry a usable value. The creation timestamp is
    /// captured here and never changes afterwards.
    pub fn create(&mut self, payload: ShoePayload) -> ShoeRecord {
        let record = ShoeRecord {
            id: ShoeId::new(self.next_id),
            brand: payload.brand,
            model: payload.model,
            size: payload.size,
            color: payload.color,
            price: payload.price,
            stock: payload.stock.unwrap_or(0),
            tags: payload.tags.unwrap_or_default(),
            created_at: Utc::now(),
        };
        self.next_id += 1;
        self.shoes.push(record.clone());
        record
    }

    /// Look up a record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no record has that id.
    pub fn get(&self, id: ShoeId) -> Result<&ShoeRecord, RegistryError> {
        self.shoes
            .iter()
            .find(|shoe| shoe.id == id)
            .ok_or(RegistryError::NotFound(id))
    }

    /// All records in insertion order.
    #[must_use]
    pub fn list(&self) -> &[ShoeRecord] {
        &self.shoes
    }

    /// Overwrite fields of an existing record in place.
    ///
    /// Two-tier presence rule: text and price fields overwrite only when the
    /// incoming value is non-empty / non-zero, so an empty brand or a zero
    /// price leaves the stored value untouched. `stock` overwrites whenever
    /// the payload carries a valid integer (zero included) and `tags`
    /// whenever it carries a sequence (empty included). `created_at` never
    /// changes.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no record has that id.
    pub fn update(&mut self, id: ShoeId, payload: ShoePayload) -> Result<&ShoeRecord, RegistryError> {
        let shoe = self
            .shoes
            .iter_mut()
            .find(|shoe| shoe.id == id)
            .ok_or(RegistryError::NotFound(id))?;

        if let Some(brand) = payload.brand.filter(|s| !s.is_empty()) {
            shoe.brand = Some(brand);
        }
        if let Some(model) = payload.model.filter(|s| !s.is_empty()) {
            shoe.model = Some(model);
        }
        if let Some(size) = payload.size.filter(SizeValue::is_set) {
            shoe.size = Some(size);
        }
        if let Some(color) = payload.color.filter(|s| !s.is_empty()) {
            shoe.color = Some(color);
        }
        if let Some(price) = payload.price.filter(|p| !p.is_zero()) {
            shoe.price = Some(price);
        }
        if let Some(stock) = payload.stock {
            shoe.stock = stock;
        }
        if let Some(tags) = payload.tags {
            shoe.tags = tags;
        }

        Ok(shoe)
    }

    /// Remove a record from the collection and return it.
    ///
    /// Removal never shifts the identifiers of the remaining records, and
    /// the counter keeps advancing, so a removed id is never reissued.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no record has that id.
    pub fn remove(&mut self, id: ShoeId) -> Result<ShoeRecord, RegistryError> {
        let index = self
            .shoes
            .iter()
            .position(|shoe| shoe.id == id)
            .ok_or(RegistryError::NotFound(id))?;
        Ok(self.shoes.remove(index))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> ShoePayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut registry = ShoeRegistry::new();
        let first = registry.create(ShoePayload::default());
        let second = registry.create(ShoePayload::default());
        let third = registry.create(ShoePayload::default());

        assert_eq!(first.id, ShoeId::new(1));
        assert!(second.id > first.id);
        assert!(third.id > second.id);
    }

    #[test]
    fn test_removed_ids_are_never_reused() {
        let mut registry = ShoeRegistry::new();
        let first = registry.create(ShoePayload::default());
        registry.create(ShoePayload::default());
        registry.remove(first.id).unwrap();

        let next = registry.create(ShoePayload::default());
        assert_eq!(next.id, ShoeId::new(3));
    }

    #[test]
    fn test_create_defaults() {
        let mut registry = ShoeRegistry::new();
        let record = registry.create(payload(json!({ "brand": "Nike" })));

        assert_eq!(record.brand.as_deref(), Some("Nike"));
        assert_eq!(record.stock, 0);
        assert!(record.tags.is_empty());
        assert!(record.price.is_none());
    }

    #[test]
    fn test_create_with_stock_and_tags() {
        let mut registry = ShoeRegistry::new();
        let record = registry.create(payload(json!({ "stock": 5, "tags": ["sale"] })));

        assert_eq!(record.stock, 5);
        assert_eq!(record.tags, vec!["sale".to_string()]);
    }

    #[test]
    fn test_get_returns_created_record() {
        let mut registry = ShoeRegistry::new();
        let created = registry.create(payload(json!({ "model": "Air" })));

        assert_eq!(registry.get(created.id).unwrap(), &created);
        assert_eq!(
            registry.get(ShoeId::new(99)),
            Err(RegistryError::NotFound(ShoeId::new(99)))
        );
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut registry = ShoeRegistry::new();
        registry.create(payload(json!({ "brand": "a" })));
        registry.create(payload(json!({ "brand": "b" })));
        registry.create(payload(json!({ "brand": "c" })));
        registry.remove(ShoeId::new(2)).unwrap();

        let brands: Vec<_> = registry
            .list()
            .iter()
            .map(|shoe| shoe.brand.clone().unwrap())
            .collect();
        assert_eq!(brands, vec!["a", "c"]);
    }

    #[test]
    fn test_update_overwrites_truthy_fields() {
        let mut registry = ShoeRegistry::new();
        let created = registry.create(payload(json!({ "brand": "Nike", "price": 100 })));

        let updated = registry
            .update(created.id, payload(json!({ "brand": "Adidas", "price": 80 })))
            .unwrap();
        assert_eq!(updated.brand.as_deref(), Some("Adidas"));
        assert_eq!(updated.price, Some(Decimal::from(80)));
    }

    #[test]
    fn test_update_skips_empty_and_zero_values() {
        let mut registry = ShoeRegistry::new();
        let created = registry.create(payload(json!({ "brand": "Nike", "price": 100 })));

        let updated = registry
            .update(created.id, payload(json!({ "brand": "", "price": 0 })))
            .unwrap();
        assert_eq!(updated.brand.as_deref(), Some("Nike"));
        assert_eq!(updated.price, Some(Decimal::from(100)));
    }

    #[test]
    fn test_update_stock_zero_and_empty_tags_apply() {
        let mut registry = ShoeRegistry::new();
        let created = registry.create(payload(json!({ "stock": 5, "tags": ["sale"] })));

        let updated = registry
            .update(created.id, payload(json!({ "stock": 0, "tags": [] })))
            .unwrap();
        assert_eq!(updated.stock, 0);
        assert!(updated.tags.is_empty());
    }

    #[test]
    fn test_update_preserves_created_at() {
        let mut registry = ShoeRegistry::new();
        let created = registry.create(ShoePayload::default());
        let created_at = created.created_at;

        let updated = registry
            .update(created.id, payload(json!({ "brand": "Nike" })))
            .unwrap();
        assert_eq!(updated.created_at, created_at);
    }

    #[test]
    fn test_update_missing_record() {
        let mut registry = ShoeRegistry::new();
        assert_eq!(
            registry.update(ShoeId::new(1), ShoePayload::default()),
            Err(RegistryError::NotFound(ShoeId::new(1)))
        );
    }

    #[test]
    fn test_remove_returns_record_and_get_misses_afterwards() {
        let mut registry = ShoeRegistry::new();
        let created = registry.create(payload(json!({ "brand": "Nike" })));

        let removed = registry.remove(created.id).unwrap();
        assert_eq!(removed, created);
        assert_eq!(
            registry.get(created.id),
            Err(RegistryError::NotFound(created.id))
        );
        assert!(registry.list().is_empty());
    }
}
