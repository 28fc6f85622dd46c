use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config, error,
    spotify::{self, HttpTransport},
};

/// Requests an app token with the configured client credentials and returns
/// a transport carrying it. Exits the program when either step fails.
pub async fn transport() -> HttpTransport {
    let (client_id, client_secret) =
        match (config::spotify_client_id(), config::spotify_client_secret()) {
            (Ok(id), Ok(secret)) => (id, secret),
            (Err(e), _) | (_, Err(e)) => {
                error!("{}. Add it to your environment or .env file.", e);
            }
        };

    let pb = spinner("Requesting access token...");
    let token = spotify::auth::request_token(&client_id, &client_secret).await;
    pb.finish_and_clear();

    match token {
        Ok(token) => HttpTransport::new(token.access_token),
        Err(e) => {
            error!("Failed to obtain access token. Err: {}", e);
        }
    }
}

pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
