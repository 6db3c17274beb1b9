use payments_api::config::Config;
use payments_api::http_server;
use payments_api::payment_service::{PaymentGateway, StripeGateway};
use std::error::Error;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    // Initialize logging
    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("INFO")))
        .init();

    let config = match Config::from_file("config.yaml") {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Could not load config.yaml, using defaults");
            Config::default()
        }
    };

    let secret_key = config
        .stripe_secret_key()
        .map_err(|_| "STRIPE_SECRET_KEY environment variable is not set")?;
    let gateway: Arc<dyn PaymentGateway> = Arc::new(StripeGateway::new(secret_key));

    http_server::start_http_server(gateway, config.http_host(), config.http_port()).await?;

    tracing::info!("Application shutting down");
    Ok(())
}
