// Domain layer: header models and ports (interfaces). No I/O happens here.

pub mod model;
pub mod ports;
