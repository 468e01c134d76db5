//! Head metadata assembly across the matched-route chain.

use storefront_builder::{PageBuilder, PageLoadResult};
use storefront_seo::{merge, to_meta_tags, MetaTag, SeoPayload};

/// Build the final head metadata for a page.
///
/// The builder's own tags come first, then the merged SEO contributions
/// of the matched routes (ordered least specific first, as the router
/// matched them).
pub fn route_meta(
    builder: &dyn PageBuilder,
    result: &PageLoadResult,
    matches: &[SeoPayload],
) -> Vec<MetaTag> {
    let mut tags = builder.page_meta(result);
    tags.extend(to_meta_tags(&merge(matches)));
    tags
}
