// Domain layer: shared constants and the ports the demonstrations are written against.

pub mod model;
pub mod ports;
