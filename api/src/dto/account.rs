use re_core::domain::entities::ProfileContact;
use re_core::services::{CreateEmployeeInput, RegisterInput};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /register`.
///
/// Every field is optional at the wire level so that missing values are
/// reported by the account service with a field-specific code.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(max = 254))]
    pub email: Option<String>,
    #[validate(length(max = 72))]
    pub password: Option<String>,
    /// MANAGER or CUSTOMER; defaults to CUSTOMER
    pub role: Option<String>,
    pub is_active: Option<bool>,
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 30))]
    pub phone: Option<String>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
    #[validate(length(max = 100))]
    pub department: Option<String>,
}

impl From<RegisterRequest> for RegisterInput {
    fn from(request: RegisterRequest) -> Self {
        Self {
            email: request.email.unwrap_or_default(),
            password: request.password.unwrap_or_default(),
            role: request.role,
            is_active: request.is_active,
            name: request.name,
            phone: request.phone,
            address: request.address,
            department: request.department,
        }
    }
}

/// Body of `POST /login`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(max = 254))]
    pub email: Option<String>,
    #[validate(length(max = 72))]
    pub password: Option<String>,
}

/// Body of `POST /createProfile`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProfileRequest {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
    #[validate(length(max = 30))]
    pub phone: Option<String>,
}

impl From<ProfileRequest> for ProfileContact {
    fn from(request: ProfileRequest) -> Self {
        Self {
            name: request.name.unwrap_or_default(),
            phone: request.phone.unwrap_or_default(),
            address: request.address,
        }
    }
}

/// Body of `POST /createEmployee`.
///
/// The employee's address may be sent as `employeeEmail` or `email`;
/// `employeeEmail` wins when both are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[validate(length(max = 254))]
    pub employee_email: Option<String>,
    #[validate(length(max = 254))]
    pub email: Option<String>,
    #[validate(length(max = 72))]
    pub password: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 30))]
    pub phone: Option<String>,
    #[validate(length(max = 100))]
    pub department: Option<String>,
}

impl From<CreateEmployeeRequest> for CreateEmployeeInput {
    fn from(request: CreateEmployeeRequest) -> Self {
        Self {
            email: request.employee_email.or(request.email).unwrap_or_default(),
            password: request.password.unwrap_or_default(),
            role: request.role,
            is_active: request.is_active,
            name: request.name,
            phone: request.phone,
            department: request.department,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_uses_camel_case() {
        let request: RegisterRequest = serde_json::from_value(serde_json::json!({
            "email": "m@x.com",
            "password": "pw",
            "role": "MANAGER",
            "isActive": false,
            "department": "Sales"
        }))
        .unwrap();

        let input = RegisterInput::from(request);
        assert_eq!(input.is_active, Some(false));
        assert_eq!(input.department.as_deref(), Some("Sales"));
        assert!(input.address.is_none());
    }

    #[test]
    fn test_employee_email_takes_precedence() {
        let request: CreateEmployeeRequest = serde_json::from_value(serde_json::json!({
            "email": "fallback@x.com",
            "employeeEmail": "e@x.com",
            "password": "pw"
        }))
        .unwrap();
        assert_eq!(CreateEmployeeInput::from(request).email, "e@x.com");

        let request: CreateEmployeeRequest =
            serde_json::from_value(serde_json::json!({ "email": "e2@x.com" })).unwrap();
        assert_eq!(CreateEmployeeInput::from(request).email, "e2@x.com");
    }

    #[test]
    fn test_overlong_fields_fail_validation() {
        let request = LoginRequest {
            email: Some(format!("{}@x.com", "a".repeat(300))),
            password: Some("pw".to_string()),
        };
        assert!(request.validate().is_err());
    }
}
