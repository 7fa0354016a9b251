//! Deposit orders enriched with related records for listing.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{DepositOrder, Property, RoleProfile};

/// Name, email and phone taken from a role profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<&RoleProfile> for ContactDetails {
    fn from(profile: &RoleProfile) -> Self {
        Self {
            name: profile.name().to_string(),
            email: profile.email().to_string(),
            phone: profile.phone().to_string(),
        }
    }
}

/// A customer's deposit order with lookups resolved.
///
/// `property` is `None` when the referenced property no longer exists;
/// `owner` is `None` when the owner has no profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DepositOrderDetails {
    #[serde(flatten)]
    pub order: DepositOrder,
    pub property: Option<Property>,
    pub owner: Option<ContactDetails>,
}

/// An order as shown to staff, with the booking customer's contact.
///
/// `customer` is `None` when the customer has no profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaffDepositOrder {
    #[serde(flatten)]
    pub order: DepositOrder,
    pub customer: Option<ContactDetails>,
}
