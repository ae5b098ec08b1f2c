// Domain layer: plain models and ports (interfaces). No file system access here.

pub mod model;
pub mod ports;
