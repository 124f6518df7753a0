//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! Prices are stored as normalized decimal text so equal prices compare
//! equal in SQL regardless of scale.

use std::str::FromStr;

use rusqlite::Row;
use rust_decimal::Decimal;
use uuid::Uuid;

use catalogfx_core::catalog::CatalogItem;

/// Convert a SQLite row to a CatalogItem.
///
/// Expected columns: id, name, price, origin_currency
pub fn row_to_item(row: &Row) -> rusqlite::Result<CatalogItem> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let price: String = row.get(2)?;
    let origin_currency: String = row.get(3)?;

    Ok(CatalogItem {
        id: parse_uuid(&id)?,
        name,
        price: parse_price(&price)?,
        origin_currency,
    })
}

/// Formats a price for storage.
pub fn format_price(price: Decimal) -> String {
    price.normalize().to_string()
}

fn parse_uuid(s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn parse_price(s: &str) -> rusqlite::Result<Decimal> {
    Decimal::from_str(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })
}
