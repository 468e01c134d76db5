//! Observability for the storefront pipeline.

mod logging;

pub use logging::*;
