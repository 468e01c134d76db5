//! Blog listing loader.

use storefront_builder::ElementRegistry;
use storefront_core::{verify_locale_segment, RequestContext, RouteError};
use storefront_data::{CommerceClient, PaginationVariables};
use storefront_streaming::ResponseEnvelope;

use crate::headers::route_headers;
use crate::loader::{envelope_error, RouteResponse};

/// Blogs are listed ten at a time.
const PAGE_BY: u32 = 10;

/// Assemble the blog index.
///
/// A plain listing: no page-builder document, no deferred phase. A
/// backend failure here is a 500-class condition since the listing is
/// the whole page.
pub async fn loader<'a>(
    ctx: &'a RequestContext,
    client: &'a dyn CommerceClient,
) -> Result<RouteResponse<'a>, RouteError> {
    verify_locale_segment(ctx.param("locale"), &ctx.locale)?;

    let pagination = PaginationVariables::from_query(&ctx.query, PAGE_BY);
    let listing = client.blogs(&ctx.locale, &pagination).await?;

    let mut envelope = ResponseEnvelope::new();
    envelope
        .insert_resolved("blogs", &listing)
        .map_err(envelope_error)?;

    Ok(RouteResponse {
        headers: route_headers(),
        envelope,
        elements: ElementRegistry::new(),
        seo: None,
    })
}
