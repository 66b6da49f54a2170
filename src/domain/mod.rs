// Domain layer: content records, the built-in data set and the ports the pipeline runs against.

pub mod content;
pub mod model;
pub mod ports;
