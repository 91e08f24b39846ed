use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The wrapper every REST response arrives in. `response` is only meaningful when `success` is
/// true; [`crate::DwollaApi`] never hands it out without checking.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub response: Option<Value>,
}

impl Envelope {
    pub(crate) fn failure(message: String) -> Self {
        Self { success: false, message, response: None }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    /// Only present on full account information: "Personal" or "Commercial".
    #[serde(rename = "Type", default)]
    pub account_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NearbyUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub delta: f64,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoWithdrawalStatus {
    pub enabled: bool,
    #[serde(default)]
    pub funding_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transaction {
    pub id: i64,
    pub amount: f64,
    #[serde(default)]
    pub date: String,
    #[serde(rename = "Type", default)]
    pub transaction_type: String,
    #[serde(default)]
    pub user_type: String,
    #[serde(default)]
    pub destination_id: String,
    #[serde(default)]
    pub destination_name: String,
    #[serde(default)]
    pub source_id: String,
    #[serde(default)]
    pub source_name: String,
    /// Empty until the transaction clears.
    #[serde(default)]
    pub clearing_date: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub fees: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionStats {
    pub transactions_count: i64,
    pub transactions_total: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Refund {
    pub transaction_id: i64,
    #[serde(default)]
    pub refund_date: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserRef {
    pub id: String,
    pub name: String,
    #[serde(rename = "Type", default)]
    pub user_type: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MoneyRequest {
    pub id: i64,
    pub source: UserRef,
    pub destination: UserRef,
    pub amount: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub date_requested: String,
    #[serde(default)]
    pub status: Option<String>,
    /// Transaction id, once the request has been fulfilled.
    #[serde(default)]
    pub transaction: Option<i64>,
    #[serde(default)]
    pub cancelled_by: Option<Value>,
    #[serde(default)]
    pub date_cancelled: Option<String>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestFulfillment {
    pub id: i64,
    pub request_id: i64,
    pub amount: f64,
    #[serde(default)]
    pub sent_date: String,
    #[serde(default)]
    pub clearing_date: String,
    #[serde(default)]
    pub status: String,
    pub source: UserRef,
    pub destination: UserRef,
}

/// Reply from the token endpoint. This endpoint does not use the response envelope and follows
/// OAuth naming instead.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccessTokenSet {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub refresh_expires_in: Option<i64>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub account_id: Option<String>,
}
