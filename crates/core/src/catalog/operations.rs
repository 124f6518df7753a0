use super::types::{CatalogItem, ItemFilter, ItemPage};

/// Returns true if the item satisfies every criterion of the filter.
///
/// Pagination fields are ignored here.
pub fn matches_filter(item: &CatalogItem, filter: &ItemFilter) -> bool {
    if !filter.ids.is_empty() && !filter.ids.contains(&item.id) {
        return false;
    }
    if let Some(name) = filter.name_criterion() {
        if !item.name.to_lowercase().contains(&name.to_lowercase()) {
            return false;
        }
    }
    if let Some(price) = filter.price {
        if item.price != price {
            return false;
        }
    }
    if let Some(code) = filter.origin_criterion() {
        if item.origin_currency != code {
            return false;
        }
    }
    true
}

/// Sorts items into listing order: by name, then by ID.
pub fn sort_items(items: &mut [CatalogItem]) {
    items.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
}

/// Filters, orders and paginates items.
///
/// `total_items` counts every match before the page window is applied.
pub fn apply_filter<'a>(
    items: impl IntoIterator<Item = &'a CatalogItem>,
    filter: &ItemFilter,
) -> ItemPage {
    let mut matching: Vec<CatalogItem> = items
        .into_iter()
        .filter(|item| matches_filter(item, filter))
        .cloned()
        .collect();
    sort_items(&mut matching);

    let total_items = matching.len() as u64;
    let items = matching
        .into_iter()
        .skip(filter.offset())
        .take(filter.limit())
        .collect();

    ItemPage::new(items, total_items)
}
