// Domain layer: form models, the service catalog, and the capabilities the
// controllers depend on. No transport or terminal code lives here.

pub mod catalog;
pub mod model;
pub mod ports;
