pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::selro::{SelroClient, SelroCredentials};
pub use app::server::{build_router, serve, AppState};
pub use config::{ProxySettings, ServerConfig};
pub use crate::core::{paginator::Paginator, sanitizer::clean};
pub use utils::error::{ProxyError, Result};
