//! Collection page loader.

use serde_json::json;
use storefront_builder::{resolve_elements, PageBuilder};
use storefront_core::{verify_locale_segment, PageType, RequestContext, RouteError};
use storefront_data::{CommerceClient, CommerceData};
use storefront_observability::StructuredLogger;
use storefront_seo::payload;

use crate::config::AppConfig;
use crate::headers::route_headers;
use crate::loader::{
    assemble_envelope, envelope_error, load_critical_data, require_param, RouteResponse,
};

/// Assemble a collection page.
pub async fn loader<'a>(
    ctx: &'a RequestContext,
    config: &AppConfig,
    builder: &dyn PageBuilder,
    client: &'a dyn CommerceClient,
) -> Result<RouteResponse<'a>, RouteError> {
    verify_locale_segment(ctx.param("locale"), &ctx.locale)?;

    let handle = require_param(ctx, "handle")?;
    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_page_type("collection")
        .with_route(&ctx.path);

    let critical = load_critical_data(PageType::Collection, ctx, config, builder, async {
        Ok(client
            .collection_by_handle(&ctx.locale, handle)
            .await?
            .map(|collection_detail| CommerceData::Collection { collection_detail }))
    })
    .await
    .map_err(|err| {
        if err.is_not_found() {
            logger
                .warn_builder("collection not found")
                .field("handle", handle)
                .emit();
        }
        err
    })?;

    let seo = match &critical.commerce_data {
        CommerceData::Collection { collection_detail } => Some(payload::collection(
            &collection_detail.collection,
            &ctx.url,
        )),
        _ => None,
    };

    let mut envelope = assemble_envelope(&critical, seo.as_ref())?;

    // Analytics view payload for the storefront's collection tracking.
    if let CommerceData::Collection { collection_detail } = &critical.commerce_data {
        envelope
            .insert_resolved(
                "analytics",
                json!({
                    "collection": {
                        "id": &collection_detail.collection.id,
                        "handle": &collection_detail.collection.handle,
                    }
                }),
            )
            .map_err(envelope_error)?;
    }

    let elements = resolve_elements(&critical.page_document, &config.registry);

    Ok(RouteResponse {
        headers: route_headers(),
        envelope,
        elements,
        seo,
    })
}
