// Domain layer: value types and the function port. No I/O.

pub mod model;
pub mod ports;
