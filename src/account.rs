use log::*;
use serde_json::Value;

use crate::{
    api::{decode, DwollaApi},
    data_objects::{AccountInfo, AutoWithdrawalStatus, NearbyUser},
    error::DwollaApiError,
};

impl DwollaApi {
    /// Retrieves the public account information for the given account ID. Authenticates with
    /// the application keys, not an OAuth token.
    pub fn basic_info(&self, account_id: &str) -> Result<AccountInfo, DwollaApiError> {
        if account_id.trim().is_empty() {
            return Err(DwollaApiError::missing("basic_info", "account_id"));
        }
        let params = self.with_keys();
        decode(self.get(&format!("/users/{account_id}"), &params)?)
    }

    /// Retrieves the full account information for the user the OAuth token belongs to.
    pub fn full_info(&self, alternate_token: Option<&str>) -> Result<AccountInfo, DwollaApiError> {
        let params = self.with_token(alternate_token);
        decode(self.get("/users/", &params)?)
    }

    pub fn balance(&self, alternate_token: Option<&str>) -> Result<f64, DwollaApiError> {
        let params = self.with_token(alternate_token);
        let value = self.get("/balance/", &params)?;
        value.as_f64().ok_or_else(|| DwollaApiError::Json(format!("Expected a numeric balance, got {value}")))
    }

    /// Lists users near the given coordinates.
    pub fn nearby(&self, latitude: f64, longitude: f64) -> Result<Vec<NearbyUser>, DwollaApiError> {
        let mut params = self.with_keys();
        params.insert("latitude".to_string(), Value::from(latitude));
        params.insert("longitude".to_string(), Value::from(longitude));
        decode(self.get("/users/nearby", &params)?)
    }

    // The endpoint path spells it "auto_withdrawl"; that is what the server expects.
    pub fn auto_withdrawal_status(&self, alternate_token: Option<&str>) -> Result<AutoWithdrawalStatus, DwollaApiError> {
        let params = self.with_token(alternate_token);
        decode(self.get("/accounts/features/auto_withdrawl", &params)?)
    }

    /// Enables or disables automatic withdrawal into the given funding source. Returns the
    /// server's status line.
    pub fn toggle_auto_withdrawal(
        &self,
        enabled: bool,
        funding_id: &str,
        alternate_token: Option<&str>,
    ) -> Result<String, DwollaApiError> {
        if funding_id.trim().is_empty() {
            return Err(DwollaApiError::missing("toggle_auto_withdrawal", "funding_id"));
        }
        let mut params = self.with_token(alternate_token);
        params.insert("enabled".to_string(), Value::from(enabled));
        params.insert("fundingId".to_string(), Value::from(funding_id));
        debug!("Toggling auto-withdrawal to {enabled} for funding source {funding_id}");
        decode(self.post("/accounts/features/auto_withdrawl", &params)?)
    }
}
