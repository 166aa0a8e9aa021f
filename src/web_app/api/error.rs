// web_app/api/error.rs - Server-side error taxonomy

use leptos::prelude::ServerFnError;

use crate::web_app::model::NOT_AUTHENTICATED;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database pool not available")]
    PoolUnavailable,

    #[error("{}", NOT_AUTHENTICATED)]
    NotAuthenticated,

    #[error("{what} {id} not found")]
    NotFound { what: &'static str, id: i32 },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Log the failure before it is handed to the client
    ///
    /// The conversion into `ServerFnError` keeps only the message, so
    /// server functions pass errors through here first.
    pub fn log(self) -> Self {
        match &self {
            StoreError::Database(e) => tracing::error!("Database error: {}", e),
            other => tracing::debug!("Request failed: {}", other),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::model::is_not_authenticated;

    #[test]
    fn test_not_authenticated_is_recognised_by_clients() {
        let err: ServerFnError = StoreError::NotAuthenticated.into();
        assert!(is_not_authenticated(&err));
    }

    #[test]
    fn test_other_errors_are_not_auth_errors() {
        let err: ServerFnError = StoreError::NotFound { what: "product", id: 9 }.into();
        assert!(!is_not_authenticated(&err));
        assert!(err.to_string().contains("product 9 not found"));
    }

    #[test]
    fn test_log_keeps_the_error() {
        let err = StoreError::NotFound { what: "user", id: 3 }.log();
        assert!(matches!(err, StoreError::NotFound { what: "user", id: 3 }));
    }

    #[test]
    fn test_database_error_message() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("database error"));
    }
}
