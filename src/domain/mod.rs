// Domain layer: records and the ports (capability traits) the pipeline is composed from.

pub mod model;
pub mod ports;
