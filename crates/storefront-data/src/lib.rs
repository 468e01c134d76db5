//! Commerce backend boundary.
//!
//! This crate owns the contract with the commerce backend:
//! - typed entities for each mandatory page record
//! - `CommerceClient`, the query trait where absence is a value (`Ok(None)`),
//!   never an error
//! - cursor pagination variables for listing queries
//! - the deferred-phase policy: `DeferredValue` and the `recover` combinator
//!   that converts any fetch failure into absence

mod client;
mod deferred;
mod entities;
mod pagination;

pub use client::*;
pub use deferred::*;
pub use entities::*;
pub use pagination::*;
