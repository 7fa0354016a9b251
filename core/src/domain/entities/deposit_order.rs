//! Deposit orders booked by customers against a property.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Payment status of a deposit order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DepositStatus {
    Paid,
    #[default]
    Pending,
    Cancelled,
}

impl DepositStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DepositStatus::Paid => "PAID",
            DepositStatus::Pending => "PENDING",
            DepositStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for DepositStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DepositStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PAID" => Ok(DepositStatus::Paid),
            "PENDING" => Ok(DepositStatus::Pending),
            "CANCELLED" => Ok(DepositStatus::Cancelled),
            other => Err(format!("unknown deposit status: {}", other)),
        }
    }
}

/// Deposit order entity. Orders are immutable once booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositOrder {
    pub id: Uuid,
    /// Account id of the booking customer
    pub customer_id: Uuid,
    pub property_id: Uuid,
    /// Deposit in whole currency units
    pub deposit_amount: i64,
    pub status: DepositStatus,
    pub created_at: DateTime<Utc>,
}

impl DepositOrder {
    /// Books a new pending order stamped with the current time
    pub fn new(customer_id: Uuid, property_id: Uuid, deposit_amount: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id,
            property_id,
            deposit_amount,
            status: DepositStatus::Pending,
            created_at: Utc::now(),
        }
    }
}
