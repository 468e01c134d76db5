//! Static per-page-type default documents.
//!
//! Each page type has a fallback document the builder merges under
//! whatever it authored, so a page renders sensibly before the merchant
//! customizes it.

use storefront_core::PageType;

use crate::document::{Entity, PageDocument};

/// The static default document for each page type.
///
/// Constructed once at process start as part of the app configuration;
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct DefaultDocuments {
    pub home: PageDocument,
    pub article: PageDocument,
    pub collection: PageDocument,
    pub page: PageDocument,
    pub product: PageDocument,
}

impl DefaultDocuments {
    /// The default document for a page type.
    pub fn for_page_type(&self, page_type: PageType) -> &PageDocument {
        match page_type {
            PageType::Home => &self.home,
            PageType::Article => &self.article,
            PageType::Collection => &self.collection,
            PageType::Page => &self.page,
            PageType::Product => &self.product,
        }
    }
}

impl Default for DefaultDocuments {
    fn default() -> Self {
        Self {
            home: PageDocument::new("default-home", "Home")
                .with_entity("hero", Entity::new("hero-banner"))
                .with_entity("featured", Entity::new("featured-collections"))
                .with_entity("newsletter", Entity::new("newsletter")),
            article: PageDocument::new("default-article", "Article")
                .with_entity("content", Entity::new("article-content")),
            collection: PageDocument::new("default-collection", "Collection")
                .with_entity("header", Entity::new("collection-header"))
                .with_entity("grid", Entity::new("product-grid")),
            page: PageDocument::new("default-page", "Page")
                .with_entity("content", Entity::new("rich-text")),
            product: PageDocument::new("default-product", "Product")
                .with_entity("gallery", Entity::new("product-gallery"))
                .with_entity("info", Entity::new("product-information")),
        }
    }
}
