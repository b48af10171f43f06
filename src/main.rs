use clap::Parser;
use selro_orders_proxy::utils::logger;
use selro_orders_proxy::{serve, ProxyError, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real environment variables win over it
    dotenvy::dotenv().ok();

    let config = ServerConfig::parse();

    logger::init_logger(config.verbose, config.log_json);

    tracing::info!("Starting selro-orders-proxy");
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    let settings = match config.into_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            if matches!(e, ProxyError::MissingConfigError { .. }) {
                eprintln!("💡 Please set SELRO_KEY, SELRO_SECRET, and API_AUTH_TOKEN.");
            }
            std::process::exit(1);
        }
    };

    serve(settings).await?;

    Ok(())
}
