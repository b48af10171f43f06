use crate::domain::model::OrderPage;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Anything that can serve one page of orders for a status filter.
#[async_trait]
pub trait OrderSource: Send + Sync {
    async fn fetch_page(&self, status: &str, page: u32, page_size: u32) -> Result<OrderPage>;
}
