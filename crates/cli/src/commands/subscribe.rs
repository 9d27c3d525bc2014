//! Send one newsletter signup through the configured backend.

use petcare_storefront::config::NewsletterConfig;
use petcare_storefront::newsletter::NewsletterClient;
use tracing::info;

/// Subscribe `email` and log the backend's answer.
///
/// # Errors
///
/// Returns an error if `NEWSLETTER_API_BASE_URL` is missing or invalid, or
/// if the signup fails.
pub async fn run(email: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = NewsletterConfig::from_env()?;
    let client = NewsletterClient::new(&config)?;
    info!(endpoint = %client.endpoint(), "Subscribing");

    match client.subscribe(email).await {
        Ok(subscription) => {
            info!("{}", subscription.toast_message());
            Ok(())
        }
        Err(e) => Err(e.toast_message().into()),
    }
}
