use std::{fmt, str::FromStr, time::Duration};

use log::*;
use reqwest::{blocking::Client, Method};
use thiserror::Error;

use crate::error::DwollaApiError;

/// Connect timeout and overall budget for a single call. There are no retries.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// The HTTP verbs the API accepts. Anything else is rejected before a request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }

    /// POST and PUT carry a JSON body. GET and DELETE carry a query string only.
    pub fn has_body(&self) -> bool {
        matches!(self, Verb::Post | Verb::Put)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = DwollaApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Verb::Get),
            "POST" => Ok(Verb::Post),
            "PUT" => Ok(Verb::Put),
            "DELETE" => Ok(Verb::Delete),
            _ => {
                debug!("Unsupported HTTP verb: {s}");
                Err(DwollaApiError::UnsupportedVerb(s.to_string()))
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub verb: Verb,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// The single seam between the envelope adapter and the network.
///
/// Implementations must apply [`REQUEST_TIMEOUT`] to both the connect phase and the overall
/// exchange, and follow redirects. A `TransportError` means no usable response was produced;
/// non-200 statuses are returned as ordinary responses.
pub trait HttpTransport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Production transport backed by a blocking reqwest client.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, DwollaApiError> {
        let client = Client::builder()
            .connect_timeout(REQUEST_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DwollaApiError::Initialization(e.to_string()))?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.verb {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
            Verb::Delete => Method::DELETE,
        };
        let mut req = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            req = req.body(body.clone());
        }
        let response = req.send().map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|e| TransportError(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verbs_parse_case_insensitively() {
        assert_eq!("get".parse::<Verb>().unwrap(), Verb::Get);
        assert_eq!("POST".parse::<Verb>().unwrap(), Verb::Post);
        assert_eq!("Put".parse::<Verb>().unwrap(), Verb::Put);
        assert_eq!("DELETE".parse::<Verb>().unwrap(), Verb::Delete);
    }

    #[test]
    fn unsupported_verbs_are_rejected() {
        let err = "PATCH".parse::<Verb>().unwrap_err();
        assert!(matches!(err, DwollaApiError::UnsupportedVerb(v) if v == "PATCH"));
    }

    #[test]
    fn only_post_and_put_carry_a_body() {
        assert!(!Verb::Get.has_body());
        assert!(!Verb::Delete.has_body());
        assert!(Verb::Post.has_body());
        assert!(Verb::Put.has_body());
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let request = HttpRequest {
            verb: Verb::Post,
            url: "https://uat.dwolla.com/".to_string(),
            headers: vec![("Content-Length".to_string(), "42".to_string())],
            body: None,
        };
        assert_eq!(request.header("content-length"), Some("42"));
        assert_eq!(request.header("Accept"), None);
    }
}
