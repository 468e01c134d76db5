//! Page-builder collaborator contract.

use async_trait::async_trait;
use storefront_core::{PageType, RouteParams};
use storefront_data::CommerceData;
use storefront_seo::MetaTag;

use crate::document::PageDocument;

/// A page document as loaded from the builder service, with the
/// server-rendered CSS the builder generated for it.
#[derive(Debug, Clone, Default)]
pub struct BuiltDocument {
    pub document: PageDocument,
    pub css_content: String,
}

/// The critical-phase output for a page.
///
/// Constructed once per request; consumed by the SEO assembler, the
/// stream assembler, and the render step.
#[derive(Debug, Clone)]
pub struct PageLoadResult {
    pub page_document: PageDocument,
    pub commerce_data: CommerceData,
    pub css_content: String,
}

/// The page-builder service boundary.
///
/// `load_page_document` is expected to merge the authored document over
/// the supplied default (see [`PageDocument::merged_with`]); a failure
/// here is a 500-class condition since no page can render without its
/// document.
#[async_trait]
pub trait PageBuilder: Send + Sync {
    /// Load the page document for a page type, merged with the static
    /// default document.
    async fn load_page_document(
        &self,
        page_type: PageType,
        params: &RouteParams,
        default_document: &PageDocument,
    ) -> anyhow::Result<BuiltDocument>;

    /// The builder's own metadata tags for a loaded page.
    fn page_meta(&self, result: &PageLoadResult) -> Vec<MetaTag>;
}
