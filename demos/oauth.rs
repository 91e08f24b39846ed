//! Quick-start for the OAuth flow: generate a permissions URL, exchange the resulting
//! authorization code for a token pair, then refresh it.
//!
//! Configure credentials through the `DWOLLA_*` environment variables before running.

use dwolla_tools::{DwollaApi, DwollaConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let api = DwollaApi::new(DwollaConfig::new_from_env_or_default())?;

    // Step 1: send the user to the permissions page. The redirect catches the `code` parameter.
    println!("Visit: {}", api.auth_url(Some("http://localhost:8080/catch")));

    // Step 2: exchange the code from the redirect for an access/refresh token pair.
    let tokens = api.request_token("PASTE-CODE-HERE", Some("http://localhost:8080/catch"))?;
    println!("Access token: {}", tokens.access_token);

    // Step 3: exchange the expiring refresh token for a fresh pair.
    if let Some(refresh) = tokens.refresh_token {
        let renewed = api.refresh_token(&refresh)?;
        println!("Refreshed access token: {}", renewed.access_token);
    }
    Ok(())
}
