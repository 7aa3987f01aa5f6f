// Domain layer: the frequency table and the ports the tracker depends on.

pub mod model;
pub mod ports;
