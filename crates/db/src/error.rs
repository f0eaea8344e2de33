use anistream_core::types::DbId;

/// Failure raised by the row store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Connection, protocol, or query failure reported by sqlx.
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    /// A primary-key lookup matched more than one row.
    #[error("{table} returned {count} rows for primary key {id}")]
    Integrity {
        table: &'static str,
        id: DbId,
        count: usize,
    },
}

impl StoreError {
    /// Collapse the result of a primary-key lookup into at most one row.
    pub fn expect_unique<T>(
        table: &'static str,
        id: DbId,
        mut rows: Vec<T>,
    ) -> Result<Option<T>, StoreError> {
        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop()),
            count => Err(StoreError::Integrity { table, id, count }),
        }
    }
}
