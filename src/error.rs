use thiserror::Error;

#[derive(Debug, Error)]
pub enum DwollaApiError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("Unsupported HTTP verb: {0}")]
    UnsupportedVerb(String),
    #[error("{method}() requires the `{param}` parameter")]
    MissingParameter { method: &'static str, param: &'static str },
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),
    #[error("No response from server. {0}")]
    NoResponse(String),
    #[error("Could not deserialize JSON: {0}")]
    Json(String),
    #[error("{0}")]
    Api(String),
}

impl DwollaApiError {
    pub fn missing(method: &'static str, param: &'static str) -> Self {
        Self::MissingParameter { method, param }
    }
}
