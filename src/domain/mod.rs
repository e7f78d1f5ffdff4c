// Domain layer: launcher models and the process-spawning port.

pub mod model;
pub mod ports;
