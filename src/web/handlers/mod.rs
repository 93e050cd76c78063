// HTTP handlers, one module per concern.

pub mod analyze;
pub mod meta;
