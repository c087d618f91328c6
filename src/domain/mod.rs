// Domain layer: the transformer capability and type references. No I/O here.

pub mod model;
pub mod ports;
