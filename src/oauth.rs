use log::*;
use serde_json::Value;
use urlencoding::encode;

use crate::{
    api::{decode, DwollaApi},
    config::OAUTH_POSTFIX,
    data_objects::AccessTokenSet,
    error::DwollaApiError,
    transport::Verb,
};

impl DwollaApi {
    /// Builds the URL of the permissions page to send a user to. No network call is made.
    pub fn auth_url(&self, redirect: Option<&str>) -> String {
        let config = self.config();
        let mut url = format!(
            "{}{OAUTH_POSTFIX}/authenticate?client_id={}&response_type=code&scope={}",
            config.host(),
            encode(&config.client_id),
            encode(&config.oauth_scope)
        );
        if let Some(redirect) = redirect {
            url.push_str("&redirect_uri=");
            url.push_str(&encode(redirect));
        }
        url
    }

    /// Exchanges an authorization code for an access/refresh token pair. The `redirect` must
    /// match the one used to generate the authorization URL, if any.
    pub fn request_token(&self, code: &str, redirect: Option<&str>) -> Result<AccessTokenSet, DwollaApiError> {
        if code.trim().is_empty() {
            return Err(DwollaApiError::missing("request_token", "code"));
        }
        let mut params = self.with_keys();
        params.insert("grant_type".to_string(), Value::from("authorization_code"));
        params.insert("code".to_string(), Value::from(code));
        if let Some(redirect) = redirect {
            params.insert("redirect_uri".to_string(), Value::from(redirect));
        }
        debug!("Exchanging an authorization code for an access token");
        let value = self.execute(Verb::Get, "/token", &params, Some(OAUTH_POSTFIX), false)?;
        token_set(value)
    }

    /// Exchanges a refresh token for a new access/refresh token pair.
    pub fn refresh_token(&self, refresh_token: &str) -> Result<AccessTokenSet, DwollaApiError> {
        if refresh_token.trim().is_empty() {
            return Err(DwollaApiError::missing("refresh_token", "refresh_token"));
        }
        let mut params = self.with_keys();
        params.insert("grant_type".to_string(), Value::from("refresh_token"));
        params.insert("refresh_token".to_string(), Value::from(refresh_token));
        debug!("Refreshing an access token");
        let value = self.execute(Verb::Get, "/token", &params, Some(OAUTH_POSTFIX), false)?;
        token_set(value)
    }
}

// The token endpoint replies outside the envelope; refusals arrive as {error, error_description}.
fn token_set(value: Value) -> Result<AccessTokenSet, DwollaApiError> {
    if let Some(description) = value.get("error_description").and_then(Value::as_str) {
        debug!("Token exchange refused: {description}");
        return Err(DwollaApiError::Api(description.to_string()));
    }
    decode(value)
}
