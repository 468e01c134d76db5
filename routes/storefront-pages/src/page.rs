//! Merchant content page loader.

use storefront_builder::{resolve_elements, PageBuilder};
use storefront_core::{verify_locale_segment, PageType, RequestContext, RouteError};
use storefront_data::{CommerceClient, CommerceData};
use storefront_seo::payload;

use crate::config::AppConfig;
use crate::headers::route_headers;
use crate::loader::{assemble_envelope, load_critical_data, require_param, RouteResponse};

/// Assemble a merchant-authored content page.
pub async fn loader<'a>(
    ctx: &'a RequestContext,
    config: &AppConfig,
    builder: &dyn PageBuilder,
    client: &'a dyn CommerceClient,
) -> Result<RouteResponse<'a>, RouteError> {
    verify_locale_segment(ctx.param("locale"), &ctx.locale)?;

    let handle = require_param(ctx, "handle")?;

    let critical = load_critical_data(PageType::Page, ctx, config, builder, async {
        Ok(client
            .page_by_handle(&ctx.locale, handle)
            .await?
            .map(|page| CommerceData::Page { page }))
    })
    .await?;

    let seo = match &critical.commerce_data {
        CommerceData::Page { page } => Some(payload::page(page, &ctx.url)),
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
