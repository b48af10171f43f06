use crate::domain::model::{AggregateResponse, OrderRecord};
use crate::domain::ports::OrderSource;
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Duration;

/// Records requested per upstream call. A shorter page ends pagination.
pub const PAGE_SIZE: u32 = 100;
pub const DEFAULT_MAX_PAGES: u32 = 100;
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_secs(1);

/// Walks the upstream page by page and concatenates the results.
///
/// The paginator is immutable; every call to [`Paginator::fetch_all`] runs
/// its own loop with its own accumulator.
#[derive(Clone)]
pub struct Paginator {
    source: Arc<dyn OrderSource>,
    page_delay: Duration,
}

impl Paginator {
    pub fn new(source: Arc<dyn OrderSource>) -> Self {
        Self::with_page_delay(source, DEFAULT_PAGE_DELAY)
    }

    pub fn with_page_delay(source: Arc<dyn OrderSource>, page_delay: Duration) -> Self {
        Self { source, page_delay }
    }

    /// Fetches every order with `status`, up to `max_pages` pages.
    ///
    /// Stops on an empty page, on a short page, or silently once `max_pages`
    /// pages were read. The first upstream error aborts the loop and is
    /// returned as is.
    pub async fn fetch_all(&self, status: &str, max_pages: u32) -> Result<AggregateResponse> {
        let mut all_orders: Vec<OrderRecord> = Vec::new();
        let mut page = 1;

        while page <= max_pages {
            tracing::debug!("📡 Fetching {} orders, page {}", status, page);

            let result = match self.source.fetch_page(status, page, PAGE_SIZE).await {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!("❌ Error fetching page {} from Selro API: {}", page, e);
                    return Err(e);
                }
            };

            if result.is_empty() {
                tracing::debug!("Page {} is empty, no more orders", page);
                break;
            }

            let returned = result.len();
            all_orders.extend(result.orders);

            if returned < PAGE_SIZE as usize {
                tracing::debug!("Page {} returned {} orders, last page reached", page, returned);
                break;
            }

            page += 1;
            if page > max_pages {
                tracing::warn!(
                    "⚠️ Stopped after {} pages; more {} orders may exist upstream",
                    max_pages,
                    status
                );
                break;
            }

            tokio::time::sleep(self.page_delay).await;
        }

        tracing::info!("📦 Fetched {} {} orders", all_orders.len(), status);
        Ok(AggregateResponse::from_orders(all_orders))
    }
}
