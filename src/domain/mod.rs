// Domain layer: order models and the upstream port. No HTTP or framework types here.

pub mod model;
pub mod ports;
