// Domain layer: puzzle model and ports. Only std/serde here.

pub mod model;
pub mod ports;
