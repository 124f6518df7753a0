mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{item_page_key, ITEM_PAGE_PREFIX, RATES_KEY, SYMBOLS_KEY};
pub use serialization::{deserialize_value, serialize_value, SerializationError};
pub use traits::Cache;
