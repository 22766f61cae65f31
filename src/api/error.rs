use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

use crate::domain::auth::AuthError;
use crate::domain::menu::MenuError;
use crate::domain::order::OrderError;

// ============================================================================
// API Errors
// ============================================================================
//
// Every domain failure maps to exactly one status code. Internal details are
// logged, never returned to the client.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("{0}")]
    ValidationFailed(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Order id and code do not match")]
    NoMatch,

    #[error("Email is already registered")]
    EmailTaken,

    #[error("Internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'static str>,
    error: &'static str,
    message: String,
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::MalformedPayload(_) => "malformed_payload",
            ApiError::ValidationFailed(_) => "validation_failed",
            ApiError::InvalidCredentials => "invalid_credentials",
            ApiError::NoMatch => "no_match",
            ApiError::EmailTaken => "email_taken",
            ApiError::Internal => "internal_error",
        }
    }

    fn internal(error: &dyn std::error::Error) -> Self {
        tracing::error!(error = %error, "Request failed");
        ApiError::Internal
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedPayload(_) | ApiError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials | ApiError::NoMatch => StatusCode::UNAUTHORIZED,
            ApiError::EmailTaken => StatusCode::CONFLICT,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = match self {
            ApiError::NoMatch => Some("failed"),
            _ => None,
        };

        HttpResponse::build(self.status_code()).json(ErrorBody {
            success: false,
            status,
            error: self.kind(),
            message: self.to_string(),
        })
    }
}

impl From<MenuError> for ApiError {
    fn from(e: MenuError) -> Self {
        if e.is_validation() {
            ApiError::ValidationFailed(e.to_string())
        } else {
            ApiError::internal(&e)
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        if e.is_validation() {
            ApiError::ValidationFailed(e.to_string())
        } else {
            ApiError::internal(&e)
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthError::EmailTaken => ApiError::EmailTaken,
            ref other if other.is_validation() => ApiError::ValidationFailed(other.to_string()),
            other => ApiError::internal(&other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::ValidationFailed("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::NoMatch.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(ApiError::Internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_domain_errors_map_one_to_one() {
        let e: ApiError = OrderError::EmptyItems.into();
        assert!(matches!(e, ApiError::ValidationFailed(_)));

        let e: ApiError = OrderError::Store(StoreError::Database(sqlx::Error::PoolClosed)).into();
        assert!(matches!(e, ApiError::Internal));

        let e: ApiError = MenuError::MissingField("name").into();
        assert_eq!(e.to_string(), "Missing required field: name");

        let e: ApiError = AuthError::InvalidCredentials.into();
        assert!(matches!(e, ApiError::InvalidCredentials));

        let e: ApiError = AuthError::Hashing("boom".into()).into();
        assert!(matches!(e, ApiError::Internal));
    }

    #[test]
    fn test_internal_error_hides_details() {
        let e: ApiError = MenuError::Store(StoreError::Corrupt("secret detail".into())).into();
        assert!(!e.to_string().contains("secret detail"));
    }
}
