// Domain layer: scan models and ports. No dependencies beyond std/serde/chrono.

pub mod model;
pub mod ports;
