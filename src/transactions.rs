use log::*;
use serde_json::Value;

use crate::{
    api::{decode, DwollaApi, Params},
    data_objects::{Refund, Transaction, TransactionStats},
    error::DwollaApiError,
    helpers::merge,
};

impl DwollaApi {
    /// Sends money to the given destination user. Returns the transaction id of the sent funds.
    ///
    /// `extra` is merged over the assembled parameters, so optional upstream fields (`notes`,
    /// `facilitatorAmount`, ...) can be supplied without widening the signature.
    pub fn send(&self, destination_id: &str, amount: f64, extra: Params) -> Result<i64, DwollaApiError> {
        if destination_id.trim().is_empty() {
            return Err(DwollaApiError::missing("send", "destination_id"));
        }
        if amount <= 0.0 {
            return Err(DwollaApiError::InvalidAmount(amount));
        }
        let mut params = self.with_token(None);
        params.insert("pin".to_string(), Value::from(self.config().pin.reveal().clone()));
        params.insert("destinationId".to_string(), Value::from(destination_id));
        params.insert("amount".to_string(), Value::from(amount));
        merge(&mut params, extra);
        debug!("Sending {amount} to {destination_id}");
        let value = self.post("/transactions/send", &params)?;
        let id = value.as_i64().ok_or_else(|| DwollaApiError::Json(format!("Expected a transaction id, got {value}")))?;
        info!("Sent {amount} to {destination_id}. Transaction id: {id}");
        Ok(id)
    }

    /// Lists transactions for the user the stored OAuth token belongs to.
    pub fn transactions(&self, extra: Params) -> Result<Vec<Transaction>, DwollaApiError> {
        let mut params = self.with_token(None);
        merge(&mut params, self.with_keys());
        merge(&mut params, extra);
        decode(self.get("/transactions", &params)?)
    }

    pub fn transaction_info(&self, transaction_id: &str) -> Result<Transaction, DwollaApiError> {
        if transaction_id.trim().is_empty() {
            return Err(DwollaApiError::missing("transaction_info", "transaction_id"));
        }
        let mut params = self.with_token(None);
        merge(&mut params, self.with_keys());
        decode(self.get(&format!("/transactions/{transaction_id}"), &params)?)
    }

    /// Refunds funds, completely or partially, to the sender of an earlier transaction.
    pub fn refund(
        &self,
        transaction_id: &str,
        funding_source: &str,
        amount: f64,
        extra: Params,
    ) -> Result<Refund, DwollaApiError> {
        if transaction_id.trim().is_empty() {
            return Err(DwollaApiError::missing("refund", "transaction_id"));
        }
        if funding_source.trim().is_empty() {
            return Err(DwollaApiError::missing("refund", "funding_source"));
        }
        if amount <= 0.0 {
            return Err(DwollaApiError::InvalidAmount(amount));
        }
        let mut params = self.with_token(None);
        params.insert("pin".to_string(), Value::from(self.config().pin.reveal().clone()));
        params.insert("fundsSource".to_string(), Value::from(funding_source));
        params.insert("transactionId".to_string(), Value::from(transaction_id));
        params.insert("amount".to_string(), Value::from(amount));
        merge(&mut params, extra);
        debug!("Refunding {amount} on transaction {transaction_id}");
        decode(self.post("/transactions/refund", &params)?)
    }

    /// Retrieves transaction statistics for the user the stored OAuth token belongs to.
    pub fn transaction_stats(&self, extra: Params) -> Result<TransactionStats, DwollaApiError> {
        let mut params = self.with_token(None);
        merge(&mut params, extra);
        decode(self.get("/transactions/stats", &params)?)
    }
}
