use anyhow::{Context, Result};
use storefront::{StorefrontClient, StorefrontConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront=info,storefront_check=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load .env for local dev (if present)
    if dotenvy::dotenv().is_ok() {
        tracing::info!("Loaded .env");
    }

    let ping = std::env::args().skip(1).any(|arg| arg == "--ping");

    let config = match std::env::var("STOREFRONT_CONFIG") {
        Ok(path) => StorefrontConfig::from_file(&path)
            .with_context(|| format!("failed to load config from {}", path))?,
        Err(_) => StorefrontConfig::from_env()?,
    };

    let client = StorefrontClient::new(&config.shopify).context("failed to build storefront client")?;
    tracing::info!("Storefront endpoint: {}", client.endpoint());

    if ping {
        let shop = client.get_shop().await.context("storefront ping failed")?;
        tracing::info!(
            "Connected to shop: {} ({})",
            shop.name,
            shop.primary_domain.map(|d| d.url).unwrap_or_default()
        );
    }

    Ok(())
}
