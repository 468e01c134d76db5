//! Element registry and per-request component resolution.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::document::{Entity, PageDocument};

/// A renderable component implementation.
///
/// Implementations live outside the pipeline; the registry only hands them
/// through to the render step.
pub trait ElementRenderer: Send + Sync {
    /// Render the given entity's markup.
    fn render(&self, entity: &Entity) -> String;
}

/// Process-wide catalog of installed components, keyed by PascalCase
/// identifier.
///
/// Built once at startup and passed by reference into request handling;
/// never mutated per request.
#[derive(Clone, Default)]
pub struct ElementRegistry {
    entries: BTreeMap<String, Arc<dyn ElementRenderer>>,
}

impl ElementRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component under its PascalCase identifier.
    pub fn register(
        mut self,
        name: impl Into<String>,
        renderer: Arc<dyn ElementRenderer>,
    ) -> Self {
        self.entries.insert(name.into(), renderer);
        self
    }

    /// Look up a component by identifier.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ElementRenderer>> {
        self.entries.get(name)
    }

    /// Whether a component identifier is installed.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Installed identifiers, in stable order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for ElementRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementRegistry")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Transform a kebab-case element id into its PascalCase component
/// identifier: `"hero-banner"` -> `"HeroBanner"`, `"cta"` -> `"Cta"`.
pub fn pascal_case(element_id: &str) -> String {
    element_id
        .split('-')
        .filter(|token| !token.is_empty())
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Narrow the registry down to the components a page document actually
/// needs.
///
/// Duplicate entities collapse; element ids with no installed component
/// are silently dropped (the document may reference components not yet
/// deployed here). The result is identical for any entity iteration order
/// and carries no render-order guarantee.
pub fn resolve_elements(document: &PageDocument, registry: &ElementRegistry) -> ElementRegistry {
    let needed: BTreeSet<String> = document
        .entities
        .values()
        .map(|entity| pascal_case(&entity.element_id))
        .collect();

    ElementRegistry {
        entries: registry
            .entries
            .iter()
            .filter(|(name, _)| needed.contains(*name))
            .map(|(name, renderer)| (name.clone(), Arc::clone(renderer)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Placeholder;

    impl ElementRenderer for Placeholder {
        fn render(&self, entity: &Entity) -> String {
            format!("<section data-element=\"{}\"></section>", entity.element_id)
        }
    }

    fn registry_of(names: &[&str]) -> ElementRegistry {
        names.iter().fold(ElementRegistry::new(), |reg, name| {
            reg.register(*name, Arc::new(Placeholder))
        })
    }

    #[test]
    fn test_pascal_case_mappings() {
        assert_eq!(pascal_case("hero-banner"), "HeroBanner");
        assert_eq!(pascal_case("cta"), "Cta");
        assert_eq!(pascal_case("featured-product-grid"), "FeaturedProductGrid");
    }

    #[test]
    fn test_duplicate_entities_collapse() {
        let registry = registry_of(&["HeroBanner", "Cta"]);
        let document = PageDocument::new("p", "P")
            .with_entity("a", Entity::new("hero-banner"))
            .with_entity("b", Entity::new("hero-banner"));

        let resolved = resolve_elements(&document, &registry);
        assert_eq!(resolved.keys().collect::<Vec<_>>(), vec!["HeroBanner"]);
    }

    #[test]
    fn test_unknown_element_is_silently_dropped() {
        let registry = registry_of(&["HeroBanner"]);
        let document = PageDocument::new("p", "P")
            .with_entity("a", Entity::new("hero-banner"))
            .with_entity("b", Entity::new("not-installed-here"));

        let resolved = resolve_elements(&document, &registry);
        assert_eq!(resolved.len(), 1);
        assert!(resolved.contains("HeroBanner"));
    }

    #[test]
    fn test_resolution_is_order_independent() {
        let registry = registry_of(&["HeroBanner", "Cta", "Newsletter"]);
        let forward = PageDocument::new("p", "P")
            .with_entity("a", Entity::new("hero-banner"))
            .with_entity("b", Entity::new("cta"))
            .with_entity("c", Entity::new("newsletter"));
        let reversed = PageDocument::new("p", "P")
            .with_entity("c", Entity::new("newsletter"))
            .with_entity("b", Entity::new("cta"))
            .with_entity("a", Entity::new("hero-banner"));

        let from_forward: Vec<_> = resolve_elements(&forward, &registry).keys().map(String::from).collect();
        let from_reversed: Vec<_> = resolve_elements(&reversed, &registry).keys().map(String::from).collect();
        assert_eq!(from_forward, from_reversed);
        assert_eq!(from_forward, vec!["Cta", "HeroBanner", "Newsletter"]);
    }

    #[test]
    fn test_resolved_set_is_subset_of_registry() {
        let registry = registry_of(&["HeroBanner", "Cta"]);
        let document = PageDocument::new("p", "P")
            .with_entity("a", Entity::new("cta"));

        let resolved = resolve_elements(&document, &registry);
        for key in resolved.keys() {
            assert!(registry.contains(key));
        }
    }
}
