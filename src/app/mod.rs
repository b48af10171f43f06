// Application layer: the inbound HTTP surface.

pub mod auth;
pub mod handlers;
pub mod server;
