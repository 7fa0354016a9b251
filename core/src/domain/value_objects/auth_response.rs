//! Account-facing response value objects.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Account, EmployeeProfile, Role, RoleProfile};

/// Public view of an account: identity and role only
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountSummary {
    pub email: String,
    pub role: Role,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            email: account.email.clone(),
            role: account.role,
        }
    }
}

/// Authentication response returned after a successful login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Signed session token
    pub token: String,

    /// Token lifetime in seconds
    pub expires_in: i64,

    pub account: AccountSummary,
}

/// Account summary merged with the role profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetails {
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub profile: RoleProfile,
}

/// Result of a manager creating an employee
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeCreated {
    pub account: AccountSummary,
    pub employee: EmployeeProfile,
}
