use std::sync::Arc;

use re_shared::validation::{mask_email, normalize_email};

use crate::domain::entities::{Account, Role};
use crate::errors::{AuthError, DomainResult};
use crate::repositories::AccountRepository;

/// Role-based guard over the account store
#[derive(Clone)]
pub struct AuthorizationGate {
    accounts: Arc<dyn AccountRepository>,
}

impl AuthorizationGate {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }

    /// Resolve `email` to an account holding one of `allowed` roles.
    ///
    /// # Errors
    ///
    /// * `AccountNotFound` - no account for this email
    /// * `InsufficientRole` - the stored role is not in `allowed`
    /// * `AccountInactive` - the account is deactivated
    pub async fn require(&self, email: &str, allowed: &[Role]) -> DomainResult<Account> {
        let email = normalize_email(email);
        let account = self
            .accounts
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        if !account.has_role(allowed) {
            tracing::warn!(
                email = %mask_email(&email),
                role = %account.role,
                "Caller role not permitted"
            );
            return Err(AuthError::InsufficientRole {
                role: account.role.to_string(),
            }
            .into());
        }

        if !account.is_active {
            tracing::warn!(email = %mask_email(&email), "Inactive account rejected");
            return Err(AuthError::AccountInactive.into());
        }

        Ok(account)
    }
}
