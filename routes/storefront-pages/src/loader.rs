//! Shared loader machinery for the page routes.

use std::future::Future;

use storefront_builder::{ElementRegistry, PageBuilder, PageLoadResult};
use storefront_core::{PageType, RequestContext, RouteError};
use storefront_data::CommerceData;
use storefront_seo::SeoPayload;
use storefront_streaming::{ResponseEnvelope, StreamError};

use crate::config::AppConfig;

/// Everything a route loader hands back for one request.
pub struct RouteResponse<'a> {
    /// Response headers for this route.
    pub headers: Vec<(String, String)>,
    /// The streamable response envelope.
    pub envelope: ResponseEnvelope<'a>,
    /// Registry entries the page's document actually needs, for the
    /// render step.
    pub elements: ElementRegistry,
    /// This route's contribution to the SEO match chain, if any.
    pub seo: Option<SeoPayload>,
}

/// Get a route parameter the route cannot function without.
///
/// Absence is an invariant violation - a misconfigured route, not a
/// runtime 404.
pub fn require_param<'c>(
    ctx: &'c RequestContext,
    name: &'static str,
) -> Result<&'c str, RouteError> {
    ctx.param(name).ok_or(RouteError::MissingParam(name))
}

/// Await the critical data for a page: the builder document and the
/// mandatory commerce entity, fetched concurrently.
///
/// Both fetches must complete before this returns. `fetch_entity`
/// resolving to `None` is a not-found outcome for the whole request.
pub async fn load_critical_data<F>(
    page_type: PageType,
    ctx: &RequestContext,
    config: &AppConfig,
    builder: &dyn PageBuilder,
    fetch_entity: F,
) -> Result<PageLoadResult, RouteError>
where
    F: Future<Output = anyhow::Result<Option<CommerceData>>>,
{
    let default_document = config.defaults.for_page_type(page_type);
    let (built, entity) = futures::join!(
        builder.load_page_document(page_type, &ctx.params, default_document),
        fetch_entity,
    );

    let built = built?;
    let commerce_data = entity?.ok_or(RouteError::NotFound)?;

    Ok(PageLoadResult {
        page_document: built.document,
        commerce_data,
        css_content: built.css_content,
    })
}

/// Build the envelope's critical portion from a page load result.
///
/// Keys mirror what the render layer consumes: `pageData`,
/// `shopifyData`, `cssContent`, and the route's `seo` payload.
pub fn assemble_envelope<'a>(
    result: &PageLoadResult,
    seo: Option<&SeoPayload>,
) -> Result<ResponseEnvelope<'a>, RouteError> {
    let mut envelope = ResponseEnvelope::new();
    envelope
        .insert_resolved("pageData", &result.page_document)
        .map_err(envelope_error)?;
    envelope
        .insert_resolved("shopifyData", &result.commerce_data)
        .map_err(envelope_error)?;
    envelope
        .insert_resolved("cssContent", &result.css_content)
        .map_err(envelope_error)?;
    if let Some(seo) = seo {
        envelope.insert_resolved("seo", seo).map_err(envelope_error)?;
    }
    Ok(envelope)
}

pub(crate) fn envelope_error(err: StreamError) -> RouteError {
    RouteError::Backend(anyhow::Error::new(err))
}
