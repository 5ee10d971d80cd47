// Adapters layer: concrete implementations of the domain ports (relay over
// HTTP, terminal feedback, in-memory recorders).

pub mod console;
pub mod http;
pub mod memory;
