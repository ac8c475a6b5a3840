// Domain layer: models, diagnostic events and ports (interfaces).

pub mod events;
pub mod model;
pub mod ports;
