//! Core abstractions for the storefront page-assembly pipeline.
//!
//! This crate holds the request-scoped vocabulary shared by every other
//! crate in the workspace:
//! - `RequestContext` - typed request context with route/query params
//! - `Locale` - the resolved storefront locale and the locale-segment guard
//! - `RouteError` - the route failure taxonomy and its HTTP mapping
//! - `TimingContext` - request timing marks for observability

mod context;
mod error;
mod lifecycle;
mod locale;

pub use context::*;
pub use error::*;
pub use lifecycle::*;
pub use locale::*;
