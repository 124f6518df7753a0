use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use catalogfx_core::catalog::ItemDraft;

/// Request body for creating or replacing an item.
///
/// `id` is only meaningful on PUT, where it must match the path when present.
#[derive(Debug, Deserialize)]
pub struct ItemPayload {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub origin_currency: String,
}

impl ItemPayload {
    /// Returns true if the body carries an id different from `path_id`.
    pub fn conflicts_with(&self, path_id: Uuid) -> bool {
        self.id.is_some_and(|id| id != path_id)
    }

    pub fn into_draft(self) -> ItemDraft {
        ItemDraft::new(self.name, self.price, self.origin_currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decimal_price_keeps_its_digits() {
        let payload: ItemPayload =
            serde_json::from_str(r#"{"name":"Pen","price":1.1,"origin_currency":"USD"}"#).unwrap();

        assert_eq!(payload.price, dec!(1.1));
        assert_eq!(payload.into_draft(), ItemDraft::new("Pen", dec!(1.1), "USD"));
    }

    #[test]
    fn test_missing_id_never_conflicts() {
        let payload: ItemPayload = serde_json::from_str(r#"{"price":"3"}"#).unwrap();

        assert!(!payload.conflicts_with(Uuid::new_v4()));
        assert!(payload.name.is_empty());
    }

    #[test]
    fn test_mismatched_id_conflicts() {
        let id = Uuid::new_v4();
        let payload = ItemPayload {
            id: Some(id),
            name: "Pen".to_string(),
            price: dec!(1),
            origin_currency: "USD".to_string(),
        };

        assert!(!payload.conflicts_with(id));
        assert!(payload.conflicts_with(Uuid::new_v4()));
    }
}
