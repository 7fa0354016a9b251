//! Main account service implementation

use std::sync::Arc;

use re_shared::validation::{is_valid_email, mask_email, normalize_email, not_blank};
use uuid::Uuid;

use crate::domain::entities::{
    Account, CustomerProfile, EmployeeProfile, ManagerProfile, ProfileContact, Role, RoleProfile,
};
use crate::domain::value_objects::{AccountSummary, AuthResponse, EmployeeCreated, ProfileDetails};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{AccountRepository, ProfileRepository};
use crate::services::authorization::AuthorizationGate;
use crate::services::password::{PasswordHasher, MAX_PASSWORD_BYTES};
use crate::services::token::TokenService;

use super::types::{CreateEmployeeInput, RegisterInput};

/// Account service managing credentials and role profiles
pub struct AccountService {
    /// Credential store
    accounts: Arc<dyn AccountRepository>,
    /// Role profile store
    profiles: Arc<dyn ProfileRepository>,
    /// Password hashing collaborator
    hasher: Arc<dyn PasswordHasher>,
    /// Session token issuer
    tokens: Arc<TokenService>,
    /// Role guard
    gate: AuthorizationGate,
}

impl AccountService {
    /// Create a new account service
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        profiles: Arc<dyn ProfileRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<TokenService>,
    ) -> Self {
        let gate = AuthorizationGate::new(Arc::clone(&accounts));
        Self {
            accounts,
            profiles,
            hasher,
            tokens,
            gate,
        }
    }

    /// Register a customer or manager account together with its role profile
    ///
    /// Employees cannot self-register; they are created by a manager through
    /// [`create_employee`](Self::create_employee).
    ///
    /// # Errors
    ///
    /// * `ValidationErr` - missing or malformed fields, or role EMPLOYEE
    /// * `Auth(EmailAlreadyRegistered)` - the email is taken
    pub async fn register(&self, input: RegisterInput) -> DomainResult<AccountSummary> {
        let email = validate_credentials(&input.email, &input.password)?;

        let role = match input.role.as_deref().filter(|r| not_blank(r)) {
            None => Role::Customer,
            Some(raw) => parse_role(raw)?,
        };
        if role == Role::Employee {
            return Err(ValidationError::RoleNotAllowed {
                role: role.to_string(),
            }
            .into());
        }

        let name = required(input.name, "name")?;
        let phone = required(input.phone, "phone")?;
        // Customers carry an address, managers a department
        let role_field = match role {
            Role::Customer => required(input.address, "address")?,
            _ => required(input.department, "department")?,
        };

        if self.accounts.exists_by_email(&email).await? {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = self.hash_password(input.password).await?;
        let account = Account::new(email.clone(), password_hash, role)
            .with_active(input.is_active.unwrap_or(true));
        let account = self.accounts.create(account).await?;

        let profile = match role {
            Role::Customer => RoleProfile::Customer(CustomerProfile {
                id: Uuid::new_v4(),
                account_id: account.id,
                name,
                email: email.clone(),
                phone,
                address: role_field,
            }),
            _ => RoleProfile::Manager(ManagerProfile {
                id: Uuid::new_v4(),
                account_id: account.id,
                name,
                email: email.clone(),
                phone,
                department: role_field,
            }),
        };
        self.create_profile_or_rollback(&account, profile).await?;

        tracing::info!(
            email = %mask_email(&email),
            role = %account.role,
            "Account registered"
        );

        Ok(AccountSummary::from(&account))
    }

    /// Verify credentials and issue a session token
    ///
    /// # Errors
    ///
    /// * `ValidationErr` - email or password missing
    /// * `Auth(AccountNotFound)` - unknown email
    /// * `Auth(InvalidCredentials)` - password mismatch
    /// * `Auth(AccountInactive)` - account deactivated
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        if !not_blank(email) {
            return Err(DomainError::required("email"));
        }
        if password.is_empty() {
            return Err(DomainError::required("password"));
        }
        let email = normalize_email(email);

        let account = self
            .accounts
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        // bcrypt would truncate longer input
        if password.len() > MAX_PASSWORD_BYTES
            || !self.verify_password(password, &account.password_hash).await?
        {
            tracing::warn!(email = %mask_email(&email), "Login rejected: bad password");
            return Err(AuthError::InvalidCredentials.into());
        }

        if !account.is_active {
            tracing::warn!(email = %mask_email(&email), "Login rejected: inactive account");
            return Err(AuthError::AccountInactive.into());
        }

        let (token, claims) = self.tokens.issue(&account)?;
        tracing::info!(email = %mask_email(&email), jti = %claims.jti, "Session issued");

        Ok(AuthResponse {
            token,
            expires_in: claims.expires_in(),
            account: AccountSummary::from(&account),
        })
    }

    /// Public identity and role of an account
    pub async fn get_profile(&self, email: &str) -> DomainResult<AccountSummary> {
        let account = self.find_account(email).await?;
        Ok(AccountSummary::from(&account))
    }

    /// Account summary merged with the role profile fields
    pub async fn get_profile_details(&self, email: &str) -> DomainResult<ProfileDetails> {
        let account = self.find_account(email).await?;
        let profile = self
            .profiles
            .find_by_account(account.id)
            .await?
            .ok_or(AuthError::ProfileNotFound)?;

        Ok(ProfileDetails {
            email: account.email,
            role: account.role,
            is_active: account.is_active,
            profile,
        })
    }

    /// Update the contact fields of an account's role profile
    ///
    /// Address only applies to customer profiles.
    pub async fn set_profile(&self, email: &str, contact: ProfileContact) -> DomainResult<RoleProfile> {
        if !not_blank(&contact.name) {
            return Err(DomainError::required("name"));
        }
        if !not_blank(&contact.phone) {
            return Err(DomainError::required("phone"));
        }

        let account = self.find_account(email).await?;
        let mut profile = self
            .profiles
            .find_by_account(account.id)
            .await?
            .ok_or(AuthError::ProfileNotFound)?;

        let contact = ProfileContact {
            name: contact.name.trim().to_string(),
            phone: contact.phone.trim().to_string(),
            address: contact
                .address
                .filter(|a| not_blank(a))
                .map(|a| a.trim().to_string()),
        };
        profile.apply_contact(contact);

        let updated = self.profiles.update(profile).await?;
        tracing::info!(email = %mask_email(&account.email), "Profile updated");
        Ok(updated)
    }

    /// Create an employee account on behalf of a manager
    ///
    /// The new employee's profile records the manager's account id.
    pub async fn create_employee(
        &self,
        manager_email: &str,
        input: CreateEmployeeInput,
    ) -> DomainResult<EmployeeCreated> {
        let manager = self.gate.require(manager_email, &[Role::Manager]).await?;

        let email = validate_credentials(&input.email, &input.password)?;
        if let Some(raw) = input.role.as_deref().filter(|r| not_blank(r)) {
            let role = parse_role(raw)?;
            if role != Role::Employee {
                return Err(ValidationError::RoleNotAllowed {
                    role: role.to_string(),
                }
                .into());
            }
        }
        let name = required(input.name, "name")?;
        let phone = required(input.phone, "phone")?;
        let department = required(input.department, "department")?;

        if self.accounts.exists_by_email(&email).await? {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = self.hash_password(input.password).await?;
        let account = Account::new(email.clone(), password_hash, Role::Employee)
            .with_active(input.is_active.unwrap_or(true));
        let account = self.accounts.create(account).await?;

        let employee = EmployeeProfile {
            id: Uuid::new_v4(),
            account_id: account.id,
            name,
            email: email.clone(),
            phone,
            department,
            manager_id: manager.id,
        };
        self.create_profile_or_rollback(&account, RoleProfile::Employee(employee.clone()))
            .await?;

        tracing::info!(
            manager = %mask_email(&manager.email),
            employee = %mask_email(&email),
            "Employee created"
        );

        Ok(EmployeeCreated {
            account: AccountSummary::from(&account),
            employee,
        })
    }

    async fn find_account(&self, email: &str) -> DomainResult<Account> {
        let email = normalize_email(email);
        self.accounts
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AuthError::AccountNotFound.into())
    }

    /// Writes the profile; on failure the freshly created account is removed
    async fn create_profile_or_rollback(
        &self,
        account: &Account,
        profile: RoleProfile,
    ) -> DomainResult<RoleProfile> {
        match self.profiles.create(profile).await {
            Ok(profile) => Ok(profile),
            Err(error) => {
                tracing::error!(
                    email = %mask_email(&account.email),
                    error = %error,
                    "Profile write failed, removing account"
                );
                if let Err(cleanup) = self.accounts.delete(account.id).await {
                    tracing::error!(
                        account_id = %account.id,
                        error = %cleanup,
                        "Account rollback failed"
                    );
                }
                Err(error)
            }
        }
    }

    async fn hash_password(&self, password: String) -> DomainResult<String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::internal(format!("Hashing task failed: {}", e)))?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> DomainResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        let hash = hash.to_string();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("Verification task failed: {}", e)))?
    }
}

/// Checks email and password presence and email format; returns the normalized email
fn validate_credentials(email: &str, password: &str) -> DomainResult<String> {
    if !not_blank(email) {
        return Err(DomainError::required("email"));
    }
    if password.is_empty() {
        return Err(DomainError::required("password"));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(ValidationError::OutOfRange {
            field: "password".to_string(),
            constraint: format!("at most {} bytes", MAX_PASSWORD_BYTES),
        }
        .into());
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail.into());
    }
    Ok(normalize_email(email))
}

fn required(value: Option<String>, field: &str) -> DomainResult<String> {
    match value {
        Some(v) if not_blank(&v) => Ok(v.trim().to_string()),
        _ => Err(DomainError::required(field)),
    }
}

fn parse_role(raw: &str) -> DomainResult<Role> {
    raw.parse::<Role>().map_err(|_| {
        ValidationError::InvalidFormat {
            field: "role".to_string(),
        }
        .into()
    })
}
