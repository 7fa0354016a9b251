use serde::{Deserialize, Serialize};

/// Body of `POST /createDepositOrder`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepositOrderRequest {
    pub property_id: Option<String>,
    pub deposit_amount: Option<i64>,
}
