//! Home page loader.

use storefront_builder::{resolve_elements, PageBuilder};
use storefront_core::{verify_locale_segment, PageType, RequestContext, RouteError};
use storefront_data::CommerceData;
use storefront_seo::payload;

use crate::config::AppConfig;
use crate::headers::route_headers;
use crate::loader::{assemble_envelope, load_critical_data, RouteResponse};

/// Assemble the home page.
///
/// The home page has no mandatory commerce entity; its critical phase is
/// the builder document alone.
pub async fn loader<'a>(
    ctx: &'a RequestContext,
    config: &AppConfig,
    builder: &dyn PageBuilder,
) -> Result<RouteResponse<'a>, RouteError> {
    verify_locale_segment(ctx.param("locale"), &ctx.locale)?;

    let critical = load_critical_data(PageType::Home, ctx, config, builder, async {
        Ok(Some(CommerceData::Home {}))
    })
    .await?;

    let seo = payload::home(&ctx.url);
    let envelope = assemble_envelope(&critical, Some(&seo))?;
    let elements = resolve_elements(&critical.page_document, &config.registry);

    Ok(RouteResponse {
        headers: route_headers(),
        envelope,
        elements,
        seo: Some(seo),
    })
}
