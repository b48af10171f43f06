use crate::adapters::selro::{SelroCredentials, DEFAULT_SELRO_API_URL};
use crate::core::paginator::DEFAULT_MAX_PAGES;
use crate::utils::error::{ProxyError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_required_field, validate_url, Validate,
};
use clap::Parser;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Startup configuration. Every flag can also be given through the
/// environment (or a `.env` file, loaded by the binary before parsing).
#[derive(Clone, Parser)]
#[command(name = "selro-orders-proxy")]
#[command(about = "Authenticated proxy that returns all Selro orders as clean JSON")]
pub struct ServerConfig {
    #[arg(long, env = "SELRO_KEY", hide_env_values = true)]
    pub selro_key: Option<String>,

    #[arg(long, env = "SELRO_SECRET", hide_env_values = true)]
    pub selro_secret: Option<String>,

    /// Bearer token inbound callers must present.
    #[arg(long, env = "API_AUTH_TOKEN", hide_env_values = true)]
    pub api_auth_token: Option<String>,

    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    #[arg(long, env = "SELRO_API_URL", default_value = DEFAULT_SELRO_API_URL)]
    pub selro_api_url: String,

    #[arg(long, env = "MAX_PAGES", default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: u32,

    /// Pause between two upstream page requests, in milliseconds.
    #[arg(long, env = "PAGE_DELAY_MS", default_value_t = 1000)]
    pub page_delay_ms: u64,

    #[arg(long, env = "LOG_JSON", help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| if value.is_some() { "***" } else { "<unset>" };
        f.debug_struct("ServerConfig")
            .field("selro_key", &redact(&self.selro_key))
            .field("selro_secret", &redact(&self.selro_secret))
            .field("api_auth_token", &redact(&self.api_auth_token))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("selro_api_url", &self.selro_api_url)
            .field("max_pages", &self.max_pages)
            .field("page_delay_ms", &self.page_delay_ms)
            .field("log_json", &self.log_json)
            .field("verbose", &self.verbose)
            .finish()
    }
}

/// Validated, read-only settings shared by every request.
#[derive(Debug, Clone)]
pub struct ProxySettings {
    pub credentials: SelroCredentials,
    pub auth_token: String,
    pub bind_addr: SocketAddr,
    pub selro_api_url: String,
    pub max_pages: u32,
    pub page_delay: Duration,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| ProxyError::InvalidConfigValueError {
                field: "HOST".to_string(),
                value: self.host.clone(),
                reason: format!("Invalid IP address: {}", e),
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn into_settings(self) -> Result<ProxySettings> {
        self.validate()?;

        let bind_addr = self.bind_addr()?;
        let key = validate_required_field("SELRO_KEY", &self.selro_key)?.clone();
        let secret = validate_required_field("SELRO_SECRET", &self.selro_secret)?.clone();
        let auth_token = validate_required_field("API_AUTH_TOKEN", &self.api_auth_token)?.clone();

        Ok(ProxySettings {
            credentials: SelroCredentials { key, secret },
            auth_token,
            bind_addr,
            selro_api_url: self.selro_api_url,
            max_pages: self.max_pages,
            page_delay: Duration::from_millis(self.page_delay_ms),
        })
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        let required = [
            ("SELRO_KEY", &self.selro_key),
            ("SELRO_SECRET", &self.selro_secret),
            ("API_AUTH_TOKEN", &self.api_auth_token),
        ];
        for (field, value) in required {
            let value = validate_required_field(field, value)?;
            validate_non_empty_string(field, value)?;
        }

        validate_url("SELRO_API_URL", &self.selro_api_url)?;
        validate_range("MAX_PAGES", self.max_pages, 1, 1000)?;
        self.bind_addr()?;

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}
