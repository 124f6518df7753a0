//! SQLite schema definitions and SQL query builders.
//!
//! Pure data and string building, no I/O.

use rusqlite::functions::{Context, FunctionFlags};
use rusqlite::types::Value;

use catalogfx_core::catalog::ItemFilter;

use super::conversions::format_price;

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    price TEXT NOT NULL,
    origin_currency TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_items_name_id ON items(name, id);
CREATE INDEX IF NOT EXISTS idx_items_origin_currency ON items(origin_currency);
"#;

pub const INSERT_ITEM: &str = r#"
INSERT INTO items (id, name, price, origin_currency)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const SELECT_ITEM_BY_ID: &str = r#"
SELECT id, name, price, origin_currency
FROM items
WHERE id = ?1
"#;

pub const SELECT_ALL_ITEMS: &str = r#"
SELECT id, name, price, origin_currency
FROM items
ORDER BY name ASC, id ASC
"#;

pub const UPDATE_ITEM: &str = r#"
UPDATE items
SET name = ?2, price = ?3, origin_currency = ?4
WHERE id = ?1
"#;

pub const DELETE_ITEM: &str = r#"
DELETE FROM items
WHERE id = ?1
"#;

/// Name of the Unicode-aware lowercase function registered on every connection.
///
/// SQLite's built-in `lower()` only folds ASCII.
pub const FOLD_CASE_FN: &str = "fold_case";

/// Flags for [`FOLD_CASE_FN`]: same input, same output.
pub fn fold_case_flags() -> FunctionFlags {
    FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC
}

/// Body of [`FOLD_CASE_FN`]. `NULL` stays `NULL`.
pub fn fold_case(ctx: &Context<'_>) -> rusqlite::Result<Option<String>> {
    let text: Option<String> = ctx.get(0)?;
    Ok(text.map(|t| t.to_lowercase()))
}

/// A `WHERE` clause for an [`ItemFilter`] with its positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterClause {
    pub sql: String,
    pub params: Vec<Value>,
}

impl FilterClause {
    /// `SELECT COUNT(*)` over every matching row.
    pub fn count_sql(&self) -> String {
        format!("SELECT COUNT(*) FROM items{}", self.sql)
    }

    /// The matching rows of one page, in listing order.
    ///
    /// Expects the limit and offset to be bound after [`params`](Self::params).
    pub fn page_sql(&self) -> String {
        format!(
            "SELECT id, name, price, origin_currency FROM items{} \
             ORDER BY name ASC, id ASC LIMIT ? OFFSET ?",
            self.sql
        )
    }
}

/// Builds the `WHERE` clause selecting the items that match `filter`.
///
/// Pagination and target currencies are not part of the clause.
pub fn filter_clause(filter: &ItemFilter) -> FilterClause {
    let mut conditions = Vec::new();
    let mut params = Vec::new();

    if !filter.ids.is_empty() {
        let placeholders = vec!["?"; filter.ids.len()].join(", ");
        conditions.push(format!("id IN ({placeholders})"));
        params.extend(filter.ids.iter().map(|id| Value::Text(id.to_string())));
    }
    if let Some(name) = filter.name_criterion() {
        conditions.push(format!("instr({FOLD_CASE_FN}(name), ?) > 0"));
        params.push(Value::Text(name.to_lowercase()));
    }
    if let Some(price) = filter.price {
        conditions.push("price = ?".to_string());
        params.push(Value::Text(format_price(price)));
    }
    if let Some(code) = filter.origin_criterion() {
        conditions.push("origin_currency = ?".to_string());
        params.push(Value::Text(code.to_string()));
    }

    let sql = if conditions.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    };

    FilterClause { sql, params }
}
