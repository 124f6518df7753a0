//! SQLite repository implementation.
//!
//! Implements `catalogfx_core::storage::ItemRepository` using SQLite.

use async_trait::async_trait;
use rusqlite::types::Value;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use catalogfx_core::catalog::{CatalogItem, ItemFilter, ItemPage};
use catalogfx_core::storage::{ItemRepository, RepositoryError, Result};

use super::conversions::{format_price, row_to_item};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema::{self, filter_clause};

const ENTITY: &str = "CatalogItem";

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-backed item storage.
pub struct SqliteItemRepository {
    conn: Connection,
}

impl SqliteItemRepository {
    /// Opens (or creates) a file-based database and ensures the schema exists.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a repository over a private in-memory database.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.create_scalar_function(
                schema::FOLD_CASE_FN,
                1,
                schema::fold_case_flags(),
                schema::fold_case,
            )
            .map_err(wrap_err)?;
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn add(&self, item: &CatalogItem) -> Result<CatalogItem> {
        let id = item.id.to_string();
        let name = item.name.clone();
        let price = format_price(item.price);
        let origin_currency = item.origin_currency.clone();

        self.conn
            .call({
                let id = id.clone();
                move |conn| {
                    conn.execute(
                        schema::INSERT_ITEM,
                        rusqlite::params![id, name, price, origin_currency],
                    )
                    .map_err(wrap_err)?;
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, ENTITY, id))?;

        Ok(item.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<CatalogItem>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ITEM_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([&id_str], row_to_item) {
                    Ok(item) => Ok(Some(item)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, ENTITY, id.to_string()))
    }

    async fn list_all(&self) -> Result<Vec<CatalogItem>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_ITEMS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_item).map_err(wrap_err)?;

                let mut items = Vec::new();
                for row_result in rows {
                    items.push(row_result.map_err(wrap_err)?);
                }
                Ok(items)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))
    }

    async fn update(&self, item: &CatalogItem) -> Result<()> {
        let id = item.id.to_string();
        let name = item.name.clone();
        let price = format_price(item.price);
        let origin_currency = item.origin_currency.clone();
        let item_id = id.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_ITEM,
                        rusqlite::params![id, name, price, origin_currency],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, ENTITY, item_id))
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_ITEM, [&id_str])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, ENTITY, id.to_string()))
    }

    async fn query_filtered_with_count(&self, filter: &ItemFilter) -> Result<ItemPage> {
        let clause = filter_clause(filter);
        let limit = Value::Integer(i64::try_from(filter.limit()).unwrap_or(i64::MAX));
        // Offsets past i64::MAX are still past the end of any table.
        let offset = Value::Integer(i64::try_from(filter.offset()).unwrap_or(i64::MAX));

        self.conn
            .call(move |conn| {
                // One read transaction so the count and the page agree.
                let tx = conn.transaction().map_err(wrap_err)?;

                let total: i64 = tx
                    .query_row(
                        &clause.count_sql(),
                        rusqlite::params_from_iter(clause.params.iter()),
                        |row| row.get(0),
                    )
                    .map_err(wrap_err)?;

                let mut items = Vec::new();
                {
                    let mut stmt = tx.prepare(&clause.page_sql()).map_err(wrap_err)?;
                    let params = clause.params.iter().chain([&limit, &offset]);
                    let rows = stmt
                        .query_map(rusqlite::params_from_iter(params), row_to_item)
                        .map_err(wrap_err)?;
                    for row_result in rows {
                        items.push(row_result.map_err(wrap_err)?);
                    }
                }

                tx.commit().map_err(wrap_err)?;
                Ok(ItemPage::new(items, total.max(0) as u64))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))
    }
}
