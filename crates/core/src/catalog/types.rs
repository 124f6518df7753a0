use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::conversion::ConversionResult;

/// A catalog item priced in its origin currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    /// ISO 4217 code of the currency `price` is expressed in.
    pub origin_currency: String,
}

impl CatalogItem {
    /// Creates a new item with a freshly generated ID.
    pub fn new(name: impl Into<String>, price: Decimal, origin_currency: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            origin_currency: origin_currency.into(),
        }
    }

    /// Sets a specific ID for this item (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Overwrites every mutable field from `draft`, keeping the identity.
    pub fn apply(&mut self, draft: ItemDraft) {
        self.name = draft.name;
        self.price = draft.price;
        self.origin_currency = draft.origin_currency;
    }
}

/// The client-supplied fields of an item, before an identity is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    #[serde(default)]
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub origin_currency: String,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, price: Decimal, origin_currency: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            origin_currency: origin_currency.into(),
        }
    }

    /// Turns the draft into a persisted-shape item with the given ID.
    pub fn into_item(self, id: Uuid) -> CatalogItem {
        CatalogItem {
            id,
            name: self.name,
            price: self.price,
            origin_currency: self.origin_currency,
        }
    }
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

/// Query filter for listing catalog items.
///
/// Every criterion is optional; absent criteria match all items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFilter {
    /// Restricts the result to these IDs when non-empty.
    #[serde(default)]
    pub ids: Vec<Uuid>,
    /// Case-insensitive substring of the item name.
    #[serde(default)]
    pub name: Option<String>,
    /// Exact price match.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Exact origin currency match.
    #[serde(default)]
    pub origin_currency: Option<String>,
    /// Currencies every returned item is converted into.
    #[serde(default)]
    pub target_currencies: Vec<String>,
    /// 1-indexed page number.
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for ItemFilter {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            name: None,
            price: None,
            origin_currency: None,
            target_currencies: Vec::new(),
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl ItemFilter {
    pub fn with_ids(mut self, ids: impl IntoIterator<Item = Uuid>) -> Self {
        self.ids = ids.into_iter().collect();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_origin_currency(mut self, code: impl Into<String>) -> Self {
        self.origin_currency = Some(code.into());
        self
    }

    pub fn with_target_currencies<S: Into<String>>(
        mut self,
        codes: impl IntoIterator<Item = S>,
    ) -> Self {
        self.target_currencies = codes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// The name criterion, ignoring empty strings.
    pub fn name_criterion(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// The origin currency criterion, ignoring empty strings.
    pub fn origin_criterion(&self) -> Option<&str> {
        self.origin_currency.as_deref().filter(|c| !c.is_empty())
    }

    /// Number of items to skip before the requested page.
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.page_size as usize)
    }

    /// Maximum number of items on the requested page.
    pub fn limit(&self) -> usize {
        self.page_size as usize
    }

    /// Target currencies with duplicates removed, first occurrence wins.
    pub fn distinct_targets(&self) -> Vec<&str> {
        let mut seen = Vec::with_capacity(self.target_currencies.len());
        for code in &self.target_currencies {
            if !seen.contains(&code.as_str()) {
                seen.push(code.as_str());
            }
        }
        seen
    }
}

/// A catalog item together with its price converted into the requested currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedItem {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub origin_currency: String,
    pub conversions: Vec<ConversionResult>,
}

impl EnrichedItem {
    pub fn new(item: CatalogItem, conversions: Vec<ConversionResult>) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            origin_currency: item.origin_currency,
            conversions,
        }
    }
}

/// One page of a filtered result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of items matching the filter, before pagination.
    pub total_items: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_items: u64, page: u32, page_size: u32) -> Self {
        Self {
            items,
            total_items,
            page,
            page_size,
        }
    }
}

/// The storage-level page: items plus the unpaginated match count.
///
/// Cached as a single blob so the two halves can never be read out of step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPage {
    pub items: Vec<CatalogItem>,
    pub total_items: u64,
}

impl ItemPage {
    pub fn new(items: Vec<CatalogItem>, total_items: u64) -> Self {
        Self { items, total_items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_filter_defaults() {
        let filter = ItemFilter::default();

        assert_eq!(filter.page, 1);
        assert_eq!(filter.page_size, 10);
        assert!(filter.ids.is_empty());
        assert!(filter.target_currencies.is_empty());
    }

    #[test]
    fn test_filter_deserialize_applies_defaults() {
        let filter: ItemFilter = serde_json::from_str(r#"{"name":"lamp"}"#).unwrap();

        assert_eq!(filter.name.as_deref(), Some("lamp"));
        assert_eq!(filter.page, 1);
        assert_eq!(filter.page_size, 10);
    }

    #[test]
    fn test_filter_offset_and_limit() {
        let filter = ItemFilter::default().with_page(3, 25);

        assert_eq!(filter.offset(), 50);
        assert_eq!(filter.limit(), 25);
    }

    #[test]
    fn test_filter_offset_saturates() {
        let filter = ItemFilter::default().with_page(u32::MAX, u32::MAX);

        assert_eq!(
            filter.offset(),
            (u32::MAX as usize - 1).saturating_mul(u32::MAX as usize)
        );
    }

    #[test]
    fn test_filter_empty_strings_are_not_criteria() {
        let filter = ItemFilter::default()
            .with_name("")
            .with_origin_currency("");

        assert_eq!(filter.name_criterion(), None);
        assert_eq!(filter.origin_criterion(), None);
    }

    #[test]
    fn test_distinct_targets_keeps_first_occurrence() {
        let filter = ItemFilter::default().with_target_currencies(["USD", "EUR", "USD", "BRL"]);

        assert_eq!(filter.distinct_targets(), vec!["USD", "EUR", "BRL"]);
    }

    #[test]
    fn test_apply_draft_preserves_id() {
        let id = Uuid::new_v4();
        let mut item = CatalogItem::new("Old", dec!(1), "USD").with_id(id);

        item.apply(ItemDraft::new("New", dec!(2.50), "BRL"));

        assert_eq!(item.id, id);
        assert_eq!(item.name, "New");
        assert_eq!(item.price, dec!(2.50));
        assert_eq!(item.origin_currency, "BRL");
    }
}
