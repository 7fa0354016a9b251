//! Conversion of domain failures into HTTP responses.
//!
//! Every handler returns `Result<HttpResponse, ApiError>`; the status code
//! is derived from the error's [`ErrorKind`] and the body always has the
//! shape `{error, message, timestamp}`.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use re_core::errors::{AuthError, DomainError, ErrorKind, TokenError, ValidationError};
use re_shared::{error_codes, ErrorResponse, PaginationError};
use thiserror::Error;

/// Error returned by every HTTP handler
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] DomainError);

impl ApiError {
    /// Malformed request that never reached the domain layer
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(DomainError::Validation {
            message: message.into(),
        })
    }

    pub fn domain(&self) -> &DomainError {
        &self.0
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        Self(error.into())
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        Self(error.into())
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        Self(error.into())
    }
}

impl From<PaginationError> for ApiError {
    fn from(error: PaginationError) -> Self {
        Self(error.into())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        Self::bad_request(format!("Invalid fields: {}", fields.join(", ")))
    }
}

/// HTTP status for each error kind
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::UploadFailed => StatusCode::BAD_GATEWAY,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(self.0.kind())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self.0.kind() {
            ErrorKind::Internal | ErrorKind::UploadFailed => {
                tracing::error!(error = %self.0, status = status.as_u16(), "Request failed")
            }
            _ => tracing::debug!(error = %self.0, status = status.as_u16(), "Request rejected"),
        }

        HttpResponse::build(status).json(ErrorResponse::new(
            self.0.error_code(),
            self.0.public_message(),
        ))
    }
}

/// Fallback for unmatched routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (DomainError::required("email"), StatusCode::BAD_REQUEST),
            (AuthError::EmailAlreadyRegistered.into(), StatusCode::CONFLICT),
            (AuthError::AccountNotFound.into(), StatusCode::NOT_FOUND),
            (AuthError::InvalidCredentials.into(), StatusCode::UNAUTHORIZED),
            (AuthError::AccountInactive.into(), StatusCode::FORBIDDEN),
            (TokenError::TokenExpired.into(), StatusCode::UNAUTHORIZED),
            (
                DomainError::UploadFailed {
                    message: "timeout".to_string(),
                },
                StatusCode::BAD_GATEWAY,
            ),
            (DomainError::internal("db down"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(ApiError::from(error).status_code(), expected);
        }
    }

    #[actix_web::test]
    async fn test_internal_details_are_not_exposed() {
        let response = ApiError::from(DomainError::internal("password=hunter2")).error_response();
        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "INTERNAL_ERROR");
        assert!(!json["message"].as_str().unwrap().contains("hunter2"));
        assert!(json["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_error_body_carries_machine_code() {
        let response = ApiError::from(AuthError::InsufficientRole {
            role: "CUSTOMER".to_string(),
        })
        .error_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "INSUFFICIENT_ROLE");
    }
}
