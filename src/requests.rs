use log::*;
use serde_json::Value;

use crate::{
    api::{decode, DwollaApi, Params},
    data_objects::{MoneyRequest, RequestFulfillment},
    error::DwollaApiError,
    helpers::merge,
};

impl DwollaApi {
    /// Requests money from the given source user. Returns the id of the submitted request.
    pub fn create_request(&self, source_id: &str, amount: f64, extra: Params) -> Result<i64, DwollaApiError> {
        if source_id.trim().is_empty() {
            return Err(DwollaApiError::missing("create_request", "source_id"));
        }
        if amount <= 0.0 {
            return Err(DwollaApiError::InvalidAmount(amount));
        }
        let mut params = self.with_token(None);
        params.insert("sourceId".to_string(), Value::from(source_id));
        params.insert("amount".to_string(), Value::from(amount));
        merge(&mut params, extra);
        debug!("Requesting {amount} from {source_id}");
        let value = self.post("/requests/", &params)?;
        let id = value.as_i64().ok_or_else(|| DwollaApiError::Json(format!("Expected a request id, got {value}")))?;
        info!("Requested {amount} from {source_id}. Request id: {id}");
        Ok(id)
    }

    /// Lists pending money requests for the user the stored OAuth token belongs to.
    pub fn requests(&self, extra: Params) -> Result<Vec<MoneyRequest>, DwollaApiError> {
        let mut params = self.with_token(None);
        merge(&mut params, extra);
        decode(self.get("/requests", &params)?)
    }

    pub fn request_info(&self, request_id: &str) -> Result<MoneyRequest, DwollaApiError> {
        if request_id.trim().is_empty() {
            return Err(DwollaApiError::missing("request_info", "request_id"));
        }
        let params = self.with_token(None);
        decode(self.get(&format!("/requests/{request_id}"), &params)?)
    }

    /// Cancels a pending money request. The reply carries no stable shape, so the raw payload
    /// is returned.
    pub fn cancel_request(&self, request_id: &str) -> Result<Value, DwollaApiError> {
        if request_id.trim().is_empty() {
            return Err(DwollaApiError::missing("cancel_request", "request_id"));
        }
        let params = self.with_token(None);
        self.post(&format!("/requests/{request_id}/cancel"), &params)
    }

    /// Fulfills a pending money request for the given amount.
    pub fn fulfill_request(
        &self,
        request_id: &str,
        amount: f64,
        extra: Params,
    ) -> Result<RequestFulfillment, DwollaApiError> {
        if request_id.trim().is_empty() {
            return Err(DwollaApiError::missing("fulfill_request", "request_id"));
        }
        if amount <= 0.0 {
            return Err(DwollaApiError::InvalidAmount(amount));
        }
        let mut params = self.with_token(None);
        params.insert("pin".to_string(), Value::from(self.config().pin.reveal().clone()));
        params.insert("amount".to_string(), Value::from(amount));
        merge(&mut params, extra);
        debug!("Fulfilling request {request_id} with {amount}");
        decode(self.post(&format!("/requests/{request_id}/fulfill"), &params)?)
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::test_utils::{api_with, success_body, test_config, MockTransport, RecordingTransport};

    #[test]
    fn create_request_posts_source_and_amount() {
        let transport = RecordingTransport::replying(200, success_body(json!(640)));
        let api = api_with(transport.clone());
        let id = api.create_request("812-111-1111", 5.00, Params::new()).unwrap();
        assert_eq!(id, 640);
        assert_eq!(transport.last_path(), "/oauth/rest/requests/");
        assert_eq!(transport.last_body_param("oauth_token"), Some(json!("stored-token")));
        assert_eq!(transport.last_body_param("sourceId"), Some(json!("812-111-1111")));
        assert_eq!(transport.last_body_param("amount"), Some(json!(5.0)));
    }

    #[test]
    fn create_request_requires_a_source() {
        let mut mock = MockTransport::new();
        mock.expect_send().times(0);
        let api = DwollaApi::with_transport(test_config(), Arc::new(mock));
        let err = api.create_request("", 5.00, Params::new()).unwrap_err();
        assert!(matches!(err, DwollaApiError::MissingParameter { method: "create_request", param: "source_id" }));
    }

    #[test]
    fn requests_list_pending_requests() {
        let body = success_body(json!([{
            "Id": 640,
            "Source": {"Id": "812-693-9484", "Name": "S", "Type": "Dwolla"},
            "Destination": {"Id": "812-706-1396", "Name": "J", "Type": "Dwolla"},
            "Amount": 5.0,
            "Notes": "",
            "DateRequested": "2014-07-23T21:49:06Z"
        }]));
        let transport = RecordingTransport::replying(200, body);
        let api = api_with(transport.clone());
        let requests = api.requests(Params::new()).unwrap();
        assert_eq!(transport.last_path(), "/oauth/rest/requests");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].id, 640);
    }

    #[test]
    fn request_info_targets_the_request_path() {
        let body = success_body(json!({
            "Id": 640,
            "Source": {"Id": "a", "Name": "S"},
            "Destination": {"Id": "b", "Name": "J"},
            "Amount": 5.0
        }));
        let transport = RecordingTransport::replying(200, body);
        let api = api_with(transport.clone());
        let request = api.request_info("640").unwrap();
        assert_eq!(transport.last_path(), "/oauth/rest/requests/640");
        assert_eq!(request.amount, 5.0);
    }

    #[test]
    fn cancel_request_posts_to_the_cancel_path() {
        let transport = RecordingTransport::replying(200, success_body(json!("")));
        let api = api_with(transport.clone());
        let reply = api.cancel_request("640").unwrap();
        assert_eq!(transport.last_path(), "/oauth/rest/requests/640/cancel");
        assert_eq!(transport.last_body_param("oauth_token"), Some(json!("stored-token")));
        assert_eq!(reply, json!(""));
    }

    #[test]
    fn fulfill_request_posts_pin_and_amount() {
        let body = success_body(json!({
            "Id": 1000, "RequestId": 640, "Amount": 5.0, "SentDate": "2014-07-23T21:49:06Z",
            "Status": "pending",
            "Source": {"Id": "a", "Name": "S"},
            "Destination": {"Id": "b", "Name": "J"}
        }));
        let transport = RecordingTransport::replying(200, body);
        let api = api_with(transport.clone());
        let fulfillment = api.fulfill_request("640", 5.00, Params::new()).unwrap();
        assert_eq!(transport.last_path(), "/oauth/rest/requests/640/fulfill");
        assert_eq!(transport.last_body_param("pin"), Some(json!("1234")));
        assert_eq!(transport.last_body_param("amount"), Some(json!(5.0)));
        assert_eq!(fulfillment.request_id, 640);
    }

    #[test]
    fn fulfill_request_validates_before_any_network_call() {
        let transport = Arc::new(RecordingTransport::new());
        let api = api_with(transport.clone());
        assert!(api.fulfill_request("", 5.0, Params::new()).is_err());
        assert!(api.fulfill_request("640", 0.0, Params::new()).is_err());
        assert_eq!(transport.request_count(), 0);
    }
}
