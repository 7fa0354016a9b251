//! Caller identity resolution for bearer-protected routes

use re_core::errors::AuthError;
use re_shared::validation::{normalize_email, not_blank};

use super::error::ApiError;
use crate::middleware::AuthContext;

/// Resolve the acting identity of a protected request.
///
/// The token subject is the caller. An `email` supplied in the query or
/// path is accepted only when it names the same account.
pub fn resolve_caller(auth: &AuthContext, claimed: Option<&str>) -> Result<String, ApiError> {
    let caller = normalize_email(&auth.email);
    match claimed.filter(|email| not_blank(email)) {
        Some(email) if normalize_email(email) != caller => {
            tracing::warn!(jti = %auth.jti, "Request email does not match bearer identity");
            Err(AuthError::IdentityMismatch.into())
        }
        _ => Ok(caller),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use re_core::domain::entities::Role;

    fn context(email: &str) -> AuthContext {
        AuthContext {
            email: email.to_string(),
            role: Role::Customer,
            jti: "test-jti".to_string(),
        }
    }

    #[test]
    fn test_missing_email_uses_token_subject() {
        let caller = resolve_caller(&context("a@x.com"), None).unwrap();
        assert_eq!(caller, "a@x.com");

        let caller = resolve_caller(&context("a@x.com"), Some("  ")).unwrap();
        assert_eq!(caller, "a@x.com");
    }

    #[test]
    fn test_matching_email_is_case_insensitive() {
        let caller = resolve_caller(&context("a@x.com"), Some(" A@X.com ")).unwrap();
        assert_eq!(caller, "a@x.com");
    }

    #[test]
    fn test_mismatched_email_is_forbidden() {
        let err = resolve_caller(&context("a@x.com"), Some("b@x.com")).unwrap_err();
        assert_eq!(err.domain().error_code(), "IDENTITY_MISMATCH");
    }
}
