//! Process-wide app configuration.

use storefront_builder::{DefaultDocuments, ElementRegistry};

/// Immutable configuration constructed once at process start and passed
/// by reference into every request-handling call.
///
/// Concurrent requests read it freely; nothing here is mutated after
/// startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Installed components, keyed by PascalCase identifier.
    pub registry: ElementRegistry,
    /// Static default documents per page type.
    pub defaults: DefaultDocuments,
}

impl AppConfig {
    /// Create the app configuration.
    pub fn new(registry: ElementRegistry, defaults: DefaultDocuments) -> Self {
        Self { registry, defaults }
    }
}
