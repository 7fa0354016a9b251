//! Input types for account operations

/// Fields accepted by public registration
#[derive(Debug, Clone, Default)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    /// Defaults to CUSTOMER when absent
    pub role: Option<String>,
    /// Defaults to active when absent
    pub is_active: Option<bool>,
    pub name: Option<String>,
    pub phone: Option<String>,
    /// Customer profiles only
    pub address: Option<String>,
    /// Manager profiles only
    pub department: Option<String>,
}

/// Fields a manager supplies when creating an employee
#[derive(Debug, Clone, Default)]
pub struct CreateEmployeeInput {
    pub email: String,
    pub password: String,
    /// Must be EMPLOYEE when present
    pub role: Option<String>,
    pub is_active: Option<bool>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
}
