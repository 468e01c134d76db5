//! Commerce backend query contract.

use async_trait::async_trait;
use storefront_core::Locale;

use crate::entities::{
    Article, BlogListing, CollectionDetail, ContentPage, ProductDetail, Recommendation,
};
use crate::pagination::PaginationVariables;

/// Per-entity query operations against the commerce backend.
///
/// Every lookup is keyed by handle and parameterized by the resolved
/// locale. A missing record is `Ok(None)` - absence is an expected value,
/// never an error. `Err` is reserved for the backend failing outright
/// (transport, malformed response), which is a 500-class condition.
#[async_trait]
pub trait CommerceClient: Send + Sync {
    /// Look up an article by its blog handle and article handle.
    async fn article_by_handle(
        &self,
        locale: &Locale,
        blog_handle: &str,
        handle: &str,
    ) -> anyhow::Result<Option<Article>>;

    /// List blogs with cursor pagination.
    async fn blogs(
        &self,
        locale: &Locale,
        pagination: &PaginationVariables,
    ) -> anyhow::Result<BlogListing>;

    /// Look up a collection by handle.
    async fn collection_by_handle(
        &self,
        locale: &Locale,
        handle: &str,
    ) -> anyhow::Result<Option<CollectionDetail>>;

    /// Look up a content page by handle.
    async fn page_by_handle(
        &self,
        locale: &Locale,
        handle: &str,
    ) -> anyhow::Result<Option<ContentPage>>;

    /// Look up a product by handle.
    async fn product_by_handle(
        &self,
        locale: &Locale,
        handle: &str,
    ) -> anyhow::Result<Option<ProductDetail>>;

    /// Fetch recommendations for a product. Non-mandatory; only ever called
    /// from the deferred phase.
    async fn product_recommendations(
        &self,
        locale: &Locale,
        handle: &str,
    ) -> anyhow::Result<Vec<Recommendation>>;
}
