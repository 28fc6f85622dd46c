use reqwest::Client;

use crate::{
    config,
    error::{CatalogError, Result},
    types::Token,
};

/// Requests an app access token with the OAuth 2.0 client-credentials flow.
///
/// Posts `grant_type=client_credentials` to the configured token URL,
/// authenticating with HTTP Basic auth built from the client id and secret.
///
/// # Arguments
///
/// * `client_id` - Client id of the registered Spotify application
/// * `client_secret` - Client secret of the registered Spotify application
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Token whose `access_token` is sent as `Authorization: Bearer`
/// - `Err(CatalogError::Auth)` - The token endpoint rejected the request
/// - `Err(CatalogError::Http)` - Network error or undecodable response
///
/// # Token Lifetime
///
/// The token is valid for `expires_in` seconds and is never refreshed.
///
/// # Example
///
/// ```
/// let token = request_token(&config::spotify_client_id()?, &config::spotify_client_secret()?).await?;
/// let transport = HttpTransport::new(token.access_token);
/// ```
pub async fn request_token(client_id: &str, client_secret: &str) -> Result<Token> {
    request_token_from(&config::spotify_apitoken_url(), client_id, client_secret).await
}

/// Same as [`request_token`] against an explicit token URL.
pub async fn request_token_from(
    token_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<Token> {
    let client = Client::new();
    let response = client
        .post(token_url)
        .basic_auth(client_id, Some(client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CatalogError::Auth {
            status: status.as_u16(),
            body,
        });
    }

    Ok(response.json::<Token>().await?)
}
