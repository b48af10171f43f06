use crate::domain::model::OrderPage;
use crate::domain::ports::OrderSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::fmt;

pub const DEFAULT_SELRO_API_URL: &str = "https://api.selro.com/8/orders";

/// Selro API credentials. The upstream only accepts them as query parameters.
#[derive(Clone)]
pub struct SelroCredentials {
    pub key: String,
    pub secret: String,
}

impl fmt::Debug for SelroCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelroCredentials")
            .field("key", &"***")
            .field("secret", &"***")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct SelroClient {
    client: Client,
    base_url: String,
    credentials: SelroCredentials,
}

impl SelroClient {
    pub fn with_base_url(base_url: impl Into<String>, credentials: SelroCredentials) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            credentials,
        }
    }
}

#[async_trait]
impl OrderSource for SelroClient {
    async fn fetch_page(&self, status: &str, page: u32, page_size: u32) -> Result<OrderPage> {
        let page = page.to_string();
        let page_size = page_size.to_string();

        // reqwest errors carry the request URL; strip it so the secret never
        // reaches logs or clients.
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("key", self.credentials.key.as_str()),
                ("secret", self.credentials.secret.as_str()),
                ("page", page.as_str()),
                ("pagesize", page_size.as_str()),
                ("status", status),
            ])
            .send()
            .await
            .map_err(|e| e.without_url())?;

        tracing::debug!("Selro API response status: {}", response.status());

        let response = response.error_for_status().map_err(|e| e.without_url())?;
        let body: Value = response.json().await.map_err(|e| e.without_url())?;

        Ok(OrderPage::from_body(body))
    }
}
