use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::derive::Display;
use serde_json::json;

// every handler funnels failures through this taxonomy; the response body
// carries a short message, raw driver errors stay in the server log
#[derive(Debug, Display)]
pub enum ServiceError {
    #[display("{_0}")]
    Validation(String),

    #[display("{_0} already exists")]
    Duplicate(&'static str),

    #[display("{_0} not found")]
    NotFound(&'static str),

    #[display("Database error")]
    Storage(sqlx::Error),
}

impl ServiceError {
    // classify a failed insert: a unique-key conflict becomes Duplicate,
    // anything else stays a storage failure
    pub fn classify_write(err: sqlx::Error, subject: &'static str) -> Self {
        if err
            .as_database_error()
            .is_some_and(|db_err| db_err.is_unique_violation())
        {
            ServiceError::Duplicate(subject)
        } else {
            ServiceError::Storage(err)
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Duplicate(_) => StatusCode::CONFLICT,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        ServiceError::Storage(err)
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        if let ServiceError::Storage(ref err) = self {
            tracing::error!("storage failure: {err}");
        }

        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
