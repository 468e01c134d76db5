//! Article page loader.

use storefront_builder::{resolve_elements, PageBuilder};
use storefront_core::{verify_locale_segment, PageType, RequestContext, RouteError};
use storefront_data::{CommerceClient, CommerceData};
use storefront_seo::payload;

use crate::config::AppConfig;
use crate::headers::route_headers;
use crate::loader::{assemble_envelope, load_critical_data, require_param, RouteResponse};

/// Assemble an article page.
///
/// Articles are nested under a blog, so both the blog handle and the
/// article handle are required route params.
pub async fn loader<'a>(
    ctx: &'a RequestContext,
    config: &AppConfig,
    builder: &dyn PageBuilder,
    client: &'a dyn CommerceClient,
) -> Result<RouteResponse<'a>, RouteError> {
    verify_locale_segment(ctx.param("locale"), &ctx.locale)?;

    let blog_handle = require_param(ctx, "blog_handle")?;
    let handle = require_param(ctx, "handle")?;

    let critical = load_critical_data(PageType::Article, ctx, config, builder, async {
        Ok(client
            .article_by_handle(&ctx.locale, blog_handle, handle)
            .await?
            .map(|article| CommerceData::Article { article }))
    })
    .await?;

    let seo = match &critical.commerce_data {
        CommerceData::Article { article } => Some(payload::article(article, &ctx.url)),
        _ => None,
    };

    let envelope = assemble_envelope(&critical, seo.as_ref())?;
    let elements = resolve_elements(&critical.page_document, &config.registry);

    Ok(RouteResponse {
        headers: route_headers(),
        envelope,
        elements,
        seo,
    })
}
