// Domain layer: capability and model types plus the ports checks run against.

pub mod model;
pub mod ports;
