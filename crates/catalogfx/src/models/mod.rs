mod item;
mod list_query;

pub use item::ItemPayload;
pub use list_query::ListItemsQuery;
