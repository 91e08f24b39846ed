use std::sync::Arc;

use log::*;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{
    config::{DwollaConfig, DEFAULT_POSTFIX},
    data_objects::Envelope,
    error::DwollaApiError,
    helpers::query_string,
    transport::{HttpRequest, HttpTransport, ReqwestTransport, Verb},
};

/// Request parameters: string keys mapped to scalar or array values.
pub type Params = Map<String, Value>;

/// Client for the payments REST API.
///
/// One instance talks to exactly one host (sandbox or production), selected by its
/// [`DwollaConfig`] at construction. Instances are cheap to clone and safe to share across
/// threads; the configuration is immutable for the lifetime of the instance.
#[derive(Clone)]
pub struct DwollaApi {
    config: DwollaConfig,
    transport: Arc<dyn HttpTransport>,
}

impl DwollaApi {
    pub fn new(config: DwollaConfig) -> Result<Self, DwollaApiError> {
        let transport = Arc::new(ReqwestTransport::new()?);
        Ok(Self { config, transport })
    }

    /// Builds a client on a caller-supplied transport instead of the built-in one.
    pub fn with_transport(config: DwollaConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &DwollaConfig {
        &self.config
    }

    pub fn url(&self, path: &str, postfix: Option<&str>) -> String {
        format!("{}{}{path}", self.config.host(), postfix.unwrap_or(DEFAULT_POSTFIX))
    }

    pub fn get(&self, path: &str, query: &Params) -> Result<Value, DwollaApiError> {
        self.execute(Verb::Get, path, query, None, true)
    }

    pub fn post(&self, path: &str, params: &Params) -> Result<Value, DwollaApiError> {
        self.execute(Verb::Post, path, params, None, true)
    }

    pub fn put(&self, path: &str, params: &Params) -> Result<Value, DwollaApiError> {
        self.execute(Verb::Put, path, params, None, true)
    }

    pub fn delete(&self, path: &str, query: &Params) -> Result<Value, DwollaApiError> {
        self.execute(Verb::Delete, path, query, None, true)
    }

    /// Issues a single request and unwraps the response envelope.
    ///
    /// GET and DELETE serialize `params` into the query string; POST and PUT into a JSON body
    /// with a matching `Content-Length`. With `parse_envelope` off, the decoded body is
    /// returned as-is; this is what the token endpoints need, since they reply outside the
    /// envelope.
    ///
    /// A non-200 status is folded into a synthetic failure envelope, so every protocol error
    /// surfaces through the same path as an API-reported one.
    pub fn execute(
        &self,
        verb: Verb,
        path: &str,
        params: &Params,
        postfix: Option<&str>,
        parse_envelope: bool,
    ) -> Result<Value, DwollaApiError> {
        let mut url = self.url(path, postfix);
        let mut headers = vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
        ];
        let body = if verb.has_body() {
            let encoded = serde_json::to_string(params).map_err(|e| DwollaApiError::Json(e.to_string()))?;
            headers.push(("Content-Length".to_string(), encoded.len().to_string()));
            Some(encoded)
        } else {
            if !params.is_empty() {
                url = format!("{url}?{}", query_string(params));
            }
            None
        };
        debug!("{verb} request to {url}");
        if let Some(body) = &body {
            trace!("Request body: {body}");
        }
        let request = HttpRequest { verb, url, headers, body };
        let response = self.transport.send(&request).map_err(|e| {
            debug!("No response from server: {e}");
            DwollaApiError::NoResponse(e.to_string())
        })?;
        if response.status != 200 {
            debug!("Expected 200 OK, but the server responded with {}", response.status);
            trace!("Response body: {}", response.body);
            let synthetic = Envelope::failure(format!("Request failed. Server responded with: {}", response.status));
            return unwrap_envelope(synthetic);
        }
        let decoded = serde_json::from_str::<Value>(&response.body).map_err(|e| DwollaApiError::Json(e.to_string()))?;
        if !parse_envelope {
            return Ok(decoded);
        }
        let envelope = serde_json::from_value::<Envelope>(decoded).map_err(|e| DwollaApiError::Json(e.to_string()))?;
        unwrap_envelope(envelope)
    }

    /// The stored OAuth token, or the caller's override for this one call.
    pub(crate) fn token(&self, alternate_token: Option<&str>) -> String {
        alternate_token.map(str::to_string).unwrap_or_else(|| self.config.oauth_token.reveal().clone())
    }

    pub(crate) fn with_token(&self, alternate_token: Option<&str>) -> Params {
        let mut params = Params::new();
        params.insert("oauth_token".to_string(), Value::from(self.token(alternate_token)));
        params
    }

    pub(crate) fn with_keys(&self) -> Params {
        let mut params = Params::new();
        params.insert("client_id".to_string(), Value::from(self.config.client_id.clone()));
        params.insert("client_secret".to_string(), Value::from(self.config.client_secret.reveal().clone()));
        params
    }
}

fn unwrap_envelope(envelope: Envelope) -> Result<Value, DwollaApiError> {
    if envelope.success {
        Ok(envelope.response.unwrap_or(Value::Null))
    } else {
        debug!("The API reported an error: {}", envelope.message);
        if let Some(response) = &envelope.response {
            trace!("Server response: {response}");
        }
        Err(DwollaApiError::Api(envelope.message))
    }
}

pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, DwollaApiError> {
    serde_json::from_value(value).map_err(|e| DwollaApiError::Json(e.to_string()))
}
