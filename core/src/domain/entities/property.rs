//! Property listings managed by brokerage staff.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Listing status of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PropertyStatus {
    #[default]
    Listed,
    Sold,
    Delisted,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Listed => "LISTED",
            PropertyStatus::Sold => "SOLD",
            PropertyStatus::Delisted => "DELISTED",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LISTED" => Ok(PropertyStatus::Listed),
            "SOLD" => Ok(PropertyStatus::Sold),
            "DELISTED" => Ok(PropertyStatus::Delisted),
            other => Err(format!("unknown property status: {}", other)),
        }
    }
}

/// Ordering for property listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertySort {
    /// Most expensive first
    #[default]
    PriceDesc,
    PriceAsc,
}

impl FromStr for PropertySort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "desc" | "price_desc" | "-price" => Ok(PropertySort::PriceDesc),
            "asc" | "price_asc" | "price" => Ok(PropertySort::PriceAsc),
            other => Err(format!("unknown sort order: {}", other)),
        }
    }
}

/// Property entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: Uuid,
    pub address: String,
    /// Asking price in whole currency units
    pub price: i64,
    /// Floor area in square metres
    pub area: f64,
    pub status: PropertyStatus,
    /// URL returned by the image store
    pub image_url: String,
    /// Account id of the staff member who listed the property
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    pub fn new(
        address: String,
        price: i64,
        area: f64,
        status: PropertyStatus,
        image_url: String,
        owner_id: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            address,
            price,
            area,
            status,
            image_url,
            owner_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges the supplied fields of a partial update
    pub fn apply(&mut self, patch: PropertyPatch) {
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(area) = patch.area {
            self.area = area;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update of a property; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyPatch {
    pub address: Option<String>,
    pub price: Option<i64>,
    pub area: Option<f64>,
    pub status: Option<PropertyStatus>,
}

impl PropertyPatch {
    pub fn is_empty(&self) -> bool {
        self.address.is_none() && self.price.is_none() && self.area.is_none() && self.status.is_none()
    }
}
