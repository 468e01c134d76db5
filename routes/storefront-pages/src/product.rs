//! Product page loader.

use storefront_builder::{resolve_elements, PageBuilder};
use storefront_core::{verify_locale_segment, PageType, RequestContext, RouteError};
use storefront_data::{recover, CommerceClient, CommerceData};
use storefront_observability::StructuredLogger;
use storefront_seo::payload;

use crate::config::AppConfig;
use crate::headers::route_headers;
use crate::loader::{assemble_envelope, load_critical_data, require_param, RouteResponse};

/// Assemble a product page.
///
/// Recommendations are deferred: they are built before the critical
/// await and stream in after the initial chunk. A recommendations
/// failure settles the key as absent and never touches the response
/// status.
pub async fn loader<'a>(
    ctx: &'a RequestContext,
    config: &AppConfig,
    builder: &dyn PageBuilder,
    client: &'a dyn CommerceClient,
) -> Result<RouteResponse<'a>, RouteError> {
    verify_locale_segment(ctx.param("locale"), &ctx.locale)?;

    let handle = require_param(ctx, "handle")?;
    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_page_type("product")
        .with_route(&ctx.path);

    // Deferred work is constructed up front so it never gates the
    // critical phase.
    let deferred_locale = ctx.locale.clone();
    let deferred_handle = handle.to_string();
    let recommendations = async move {
        recover(client.product_recommendations(&deferred_locale, &deferred_handle))
            .await
            .into_option()
            .and_then(|recs| serde_json::to_value(recs).ok())
    };

    let critical = load_critical_data(PageType::Product, ctx, config, builder, async {
        Ok(client
            .product_by_handle(&ctx.locale, handle)
            .await?
            .map(|product_detail| CommerceData::Product { product_detail }))
    })
    .await
    .map_err(|err| {
        if err.is_not_found() {
            logger
                .warn_builder("product not found")
                .field("handle", handle)
                .emit();
        }
        err
    })?;

    let seo = match &critical.commerce_data {
        CommerceData::Product { product_detail } => {
            Some(payload::product(&product_detail.product, &ctx.url))
        }
        _ => None,
    };

    let mut envelope = assemble_envelope(&critical, seo.as_ref())?;
    envelope.push_deferred("recommendations", recommendations);

    let elements = resolve_elements(&critical.page_document, &config.registry);
    logger
        .info_builder("product page assembled")
        .field("handle", handle)
        .field_i64("elements", elements.len() as i64)
        .emit();

    Ok(RouteResponse {
        headers: route_headers(),
        envelope,
        elements,
        seo,
    })
}
