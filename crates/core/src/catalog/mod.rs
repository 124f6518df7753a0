mod error;
mod http_mapping;
mod operations;
mod types;
mod validation;

pub use error::{CatalogError, Result, ValidationErrors, ValidationIssue};
pub use http_mapping::catalog_error_to_status_code;
pub use operations::{apply_filter, matches_filter, sort_items};
pub use types::{CatalogItem, EnrichedItem, ItemDraft, ItemFilter, ItemPage, Page};
pub use validation::{
    check_filter_currencies, check_filter_fields, check_item_currency, check_item_fields,
    filter_needs_symbols, is_currency_code, item_needs_symbols,
};
