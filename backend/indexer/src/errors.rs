//! Application-wide error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexerError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    /// A non-retryable JSON-RPC failure (bad request, unknown method, or a
    /// response with neither result nor error).
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// An event that could not be decoded; carries the ledger it came from
    /// so it can be found again.
    #[error("unparseable event at ledger {ledger}: {reason}")]
    EventParse { ledger: i64, reason: String },
}

pub type Result<T> = std::result::Result<T, IndexerError>;
