use std::env;

use log::*;

use crate::secret::Secret;

pub const PRODUCTION_HOST: &str = "https://www.dwolla.com/";
pub const SANDBOX_HOST: &str = "https://uat.dwolla.com/";

/// Path prefix for the REST endpoints. OAuth endpoints live under [`OAUTH_POSTFIX`] instead.
pub const DEFAULT_POSTFIX: &str = "oauth/rest";
pub const OAUTH_POSTFIX: &str = "oauth/v2";

pub const DEFAULT_OAUTH_SCOPE: &str = "send|transactions|balance|request|accountinfofull";

/// Credentials and host selection for a [`crate::DwollaApi`] instance.
///
/// The configuration is fixed at construction. Create a second instance if you need to talk to
/// the API with different credentials or against the other host.
#[derive(Debug, Clone, PartialEq)]
pub struct DwollaConfig {
    /// The application key.
    pub client_id: String,
    /// The application secret.
    pub client_secret: Secret<String>,
    /// The OAuth token used for account-scoped calls.
    pub oauth_token: Secret<String>,
    /// The account PIN. Required for calls that move money.
    pub pin: Secret<String>,
    pub oauth_scope: String,
    /// When true, calls go to the sandbox host instead of production.
    pub sandbox: bool,
}

impl Default for DwollaConfig {
    fn default() -> Self {
        Self {
            client_id: String::default(),
            client_secret: Secret::default(),
            oauth_token: Secret::default(),
            pin: Secret::default(),
            oauth_scope: DEFAULT_OAUTH_SCOPE.to_string(),
            sandbox: true,
        }
    }
}

impl DwollaConfig {
    pub fn new_from_env_or_default() -> Self {
        let client_id = env::var("DWOLLA_CLIENT_ID").unwrap_or_else(|_| {
            warn!("DWOLLA_CLIENT_ID not set, using an empty application key");
            String::default()
        });
        let client_secret = Secret::new(env::var("DWOLLA_CLIENT_SECRET").unwrap_or_else(|_| {
            warn!("DWOLLA_CLIENT_SECRET not set, using an empty application secret");
            String::default()
        }));
        let oauth_token = Secret::new(env::var("DWOLLA_OAUTH_TOKEN").unwrap_or_else(|_| {
            warn!("DWOLLA_OAUTH_TOKEN not set, using an empty OAuth token");
            String::default()
        }));
        let pin = Secret::new(env::var("DWOLLA_PIN").unwrap_or_else(|_| {
            warn!("DWOLLA_PIN not set, using an empty PIN");
            String::default()
        }));
        let oauth_scope = env::var("DWOLLA_OAUTH_SCOPE").unwrap_or_else(|_| {
            warn!("DWOLLA_OAUTH_SCOPE not set, using {DEFAULT_OAUTH_SCOPE} as default");
            DEFAULT_OAUTH_SCOPE.to_string()
        });
        let sandbox = env::var("DWOLLA_SANDBOX").map(|s| &s != "0" && &s != "false").unwrap_or_else(|_| {
            warn!("DWOLLA_SANDBOX not set, using the sandbox host");
            true
        });
        Self { client_id, client_secret, oauth_token, pin, oauth_scope, sandbox }
    }

    pub fn host(&self) -> &'static str {
        if self.sandbox {
            SANDBOX_HOST
        } else {
            PRODUCTION_HOST
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sandbox_flag_selects_host() {
        let sandbox = DwollaConfig { sandbox: true, ..Default::default() };
        assert_eq!(sandbox.host(), "https://uat.dwolla.com/");
        let production = DwollaConfig { sandbox: false, ..Default::default() };
        assert_eq!(production.host(), "https://www.dwolla.com/");
    }

    #[test]
    fn default_config_targets_sandbox() {
        let config = DwollaConfig::default();
        assert!(config.sandbox);
        assert_eq!(config.oauth_scope, DEFAULT_OAUTH_SCOPE);
    }
}
