use thiserror::Error;

/// Failures surfaced by a weather record repository.
///
/// The message is for server-side logs only and never reaches a caller.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Connection could not be obtained or the statement ran out of time.
    #[error("backing store unavailable: {0}")]
    Unavailable(String),

    /// The store answered but the statement or row mapping failed.
    #[error("query failed: {0}")]
    Query(String),
}

// SQLSTATE 57014 is query_canceled (statement_timeout); class 08 is
// connection exception; 57P* covers admin/crash shutdown.
fn is_unavailable_sqlstate(code: &str) -> bool {
    code == "57014" || code.starts_with("08") || code.starts_with("57P")
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => StoreError::Unavailable(err.to_string()),
            sqlx::Error::Database(db)
                if db.code().as_deref().is_some_and(is_unavailable_sqlstate) =>
            {
                StoreError::Unavailable(err.to_string())
            }
            _ => StoreError::Query(err.to_string()),
        }
    }
}
