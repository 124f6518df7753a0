use crate::catalog::ItemFilter;

/// Cache key for the rate table.
pub const RATES_KEY: &str = "rates";

/// Cache key for the symbol table.
pub const SYMBOLS_KEY: &str = "symbols";

/// Prefix shared by every cached catalog page.
pub const ITEM_PAGE_PREFIX: &str = "catalog:items";

/// Returns the cache key for the page of items selected by `filter`.
///
/// Filters that select the same stored page map to the same key: the id
/// list is sorted and de-duplicated, the name is lowercased, the price is
/// normalized and empty strings count as absent. Target currencies are not
/// part of the key since they do not change which items are stored.
///
/// # Examples
///
/// ```
/// use catalogfx_core::cache::item_page_key;
/// use catalogfx_core::catalog::ItemFilter;
///
/// let filter = ItemFilter::default().with_name("Lamp").with_page(2, 5);
/// assert_eq!(
///     item_page_key(&filter),
///     "catalog:items:ids=0::name=lamp:price=:origin=:page=2:size=5"
/// );
/// ```
pub fn item_page_key(filter: &ItemFilter) -> String {
    let mut ids: Vec<String> = filter.ids.iter().map(|id| id.to_string()).collect();
    ids.sort_unstable();
    ids.dedup();

    let name = filter
        .name_criterion()
        .map(str::to_lowercase)
        .unwrap_or_default();
    let price = filter
        .price
        .map(|p| p.normalize().to_string())
        .unwrap_or_default();
    let origin = filter.origin_criterion().unwrap_or_default();

    format!(
        "{}:ids={}:{}:name={}:price={}:origin={}:page={}:size={}",
        ITEM_PAGE_PREFIX,
        ids.len(),
        ids.join(","),
        name,
        price,
        origin,
        filter.page,
        filter.page_size
    )
}
