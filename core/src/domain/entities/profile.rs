//! Role profiles: the per-role personal record attached to an account.
//!
//! Each account owns exactly one profile whose variant matches its role.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::Role;

/// Profile of a customer account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    pub id: Uuid,
    pub account_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Profile of a manager account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerProfile {
    pub id: Uuid,
    pub account_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
}

/// Profile of an employee account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    pub id: Uuid,
    pub account_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    /// Account id of the manager who created this employee
    pub manager_id: Uuid,
}

/// Contact fields editable through the profile update operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileContact {
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
}

/// A role profile of any kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleProfile {
    Employee(EmployeeProfile),
    Manager(ManagerProfile),
    Customer(CustomerProfile),
}

impl RoleProfile {
    /// Role this profile belongs to
    pub fn role(&self) -> Role {
        match self {
            RoleProfile::Customer(_) => Role::Customer,
            RoleProfile::Manager(_) => Role::Manager,
            RoleProfile::Employee(_) => Role::Employee,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            RoleProfile::Customer(p) => p.id,
            RoleProfile::Manager(p) => p.id,
            RoleProfile::Employee(p) => p.id,
        }
    }

    pub fn account_id(&self) -> Uuid {
        match self {
            RoleProfile::Customer(p) => p.account_id,
            RoleProfile::Manager(p) => p.account_id,
            RoleProfile::Employee(p) => p.account_id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            RoleProfile::Customer(p) => &p.name,
            RoleProfile::Manager(p) => &p.name,
            RoleProfile::Employee(p) => &p.name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            RoleProfile::Customer(p) => &p.email,
            RoleProfile::Manager(p) => &p.email,
            RoleProfile::Employee(p) => &p.email,
        }
    }

    pub fn phone(&self) -> &str {
        match self {
            RoleProfile::Customer(p) => &p.phone,
            RoleProfile::Manager(p) => &p.phone,
            RoleProfile::Employee(p) => &p.phone,
        }
    }

    /// Replaces the contact fields.
    ///
    /// Address only exists on customer profiles and is ignored elsewhere.
    pub fn apply_contact(&mut self, contact: ProfileContact) {
        match self {
            RoleProfile::Customer(p) => {
                p.name = contact.name;
                p.phone = contact.phone;
                if let Some(address) = contact.address {
                    p.address = address;
                }
            }
            RoleProfile::Manager(p) => {
                p.name = contact.name;
                p.phone = contact.phone;
            }
            RoleProfile::Employee(p) => {
                p.name = contact.name;
                p.phone = contact.phone;
            }
        }
    }
}
