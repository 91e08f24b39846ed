use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use mockall::mock;
use serde_json::{json, Value};
use url::Url;

use crate::{
    api::DwollaApi,
    config::DwollaConfig,
    secret::Secret,
    transport::{HttpRequest, HttpResponse, HttpTransport, TransportError},
};

mock! {
    pub Transport {}
    impl HttpTransport for Transport {
        fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
    }
}

/// Transport double that records every request and replays canned replies, oldest first.
/// With no canned reply queued it answers 200 with an empty success envelope.
pub struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    replies: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self { requests: Mutex::new(Vec::new()), replies: Mutex::new(VecDeque::new()) }
    }

    pub fn replying(status: u16, body: impl Into<String>) -> Arc<Self> {
        let transport = Self::new();
        transport.push_reply(status, body);
        Arc::new(transport)
    }

    pub fn push_reply(&self, status: u16, body: impl Into<String>) {
        self.replies.lock().unwrap().push_back(Ok(HttpResponse { status, body: body.into() }));
    }

    pub fn push_failure(&self, message: &str) {
        self.replies.lock().unwrap().push_back(Err(TransportError(message.to_string())));
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().expect("no requests were recorded")
    }

    pub fn last_path(&self) -> String {
        Url::parse(&self.last_request().url).unwrap().path().to_string()
    }

    pub fn last_query_param(&self, key: &str) -> Option<String> {
        let url = Url::parse(&self.last_request().url).unwrap();
        url.query_pairs().find(|(k, _)| k == key).map(|(_, v)| v.into_owned())
    }

    pub fn last_body_param(&self, key: &str) -> Option<Value> {
        let request = self.last_request();
        let body: Value = serde_json::from_str(request.body.as_deref()?).ok()?;
        body.get(key).cloned()
    }
}

impl HttpTransport for RecordingTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse { status: 200, body: success_body(Value::Null) }))
    }
}

pub fn success_body(response: Value) -> String {
    json!({"Success": true, "Message": "Success", "Response": response}).to_string()
}

pub fn failure_body(message: &str) -> String {
    json!({"Success": false, "Message": message, "Response": null}).to_string()
}

pub fn test_config() -> DwollaConfig {
    DwollaConfig {
        client_id: "app-key-1".to_string(),
        client_secret: Secret::new("app-secret-1".to_string()),
        oauth_token: Secret::new("stored-token".to_string()),
        pin: Secret::new("1234".to_string()),
        sandbox: true,
        ..Default::default()
    }
}

pub fn api_with(transport: Arc<RecordingTransport>) -> DwollaApi {
    DwollaApi::with_transport(test_config(), transport)
}
