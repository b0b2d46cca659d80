use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Error type returned by handlers. Variants map one-to-one onto the
/// user-visible failure modes; everything else collapses into `Internal`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Email or username already registered")]
    DuplicateIdentity,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    Unauthenticated,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Error generating report")]
    Generation,

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateIdentity => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Generation => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            // Postgres unique_violation
            if db.code().as_deref() == Some("23505") {
                return Self::DuplicateIdentity;
            }
        }
        tracing::error!(error = %err, "database error");
        Self::Internal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(ApiError::DuplicateIdentity.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::Unauthenticated.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::NotFound("Report").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Generation.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn generation_error_hides_cause() {
        // The client-facing message stays generic regardless of the
        // underlying I/O failure.
        assert_eq!(ApiError::Generation.to_string(), "Error generating report");
    }
}
