use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Category not found: {id}")]
    CategoryNotFound { id: i64 },

    #[error("Product not found: {id}")]
    ProductNotFound { id: i64 },

    #[error("Category {id} is still referenced by {product_count} product(s)")]
    CategoryInUse { id: i64, product_count: u64 },

    #[error("Integrity error: {message}")]
    Integrity { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Database error: {0}")]
    Database(DbErr),
}

impl Error {
    /// True for the delete guard and for engine-level foreign key violations.
    #[must_use]
    pub const fn is_integrity(&self) -> bool {
        matches!(self, Self::CategoryInUse { .. } | Self::Integrity { .. })
    }

    /// True when the operation targeted an id that does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CategoryNotFound { .. } | Self::ProductNotFound { .. }
        )
    }
}

impl From<DbErr> for Error {
    fn from(value: DbErr) -> Self {
        match value.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => Self::Conflict { message },
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => Self::Integrity { message },
            _ => Self::Database(value),
        }
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
