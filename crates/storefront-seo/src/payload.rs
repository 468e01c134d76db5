//! Per-content-kind SEO payload builders and the route-match merge.

use serde::{Deserialize, Serialize};
use serde_json::json;
use storefront_data::{Article, Collection, ContentPage, Product};

use crate::head::{LinkTag, MetaTag};

/// SEO data contributed by one matched route.
///
/// Singular fields are overridden by more specific matches; list fields
/// accumulate across the whole chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub structured_data: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkTag>,
}

impl SeoPayload {
    /// A payload with just a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}

/// SEO payload for the home page.
pub fn home(url: &str) -> SeoPayload {
    SeoPayload {
        title: Some("Home".to_string()),
        description: None,
        url: Some(url.to_string()),
        structured_data: Vec::new(),
        links: vec![LinkTag::canonical(url)],
    }
}

/// SEO payload for an article page.
pub fn article(article: &Article, url: &str) -> SeoPayload {
    let title = article
        .seo
        .title
        .clone()
        .unwrap_or_else(|| article.title.clone());
    let description = article.seo.description.clone().or_else(|| article.excerpt.clone());

    SeoPayload {
        structured_data: vec![json!({
            "@context": "https://schema.org",
            "@type": "Article",
            "headline": &title,
            "url": url,
            "author": &article.author,
            "datePublished": &article.published_at,
        })],
        title: Some(title),
        description,
        url: Some(url.to_string()),
        links: vec![LinkTag::canonical(url)],
    }
}

/// SEO payload for a collection page.
pub fn collection(collection: &Collection, url: &str) -> SeoPayload {
    let title = collection
        .seo
        .title
        .clone()
        .unwrap_or_else(|| collection.title.clone());
    let description = collection
        .seo
        .description
        .clone()
        .or_else(|| collection.description.clone());

    SeoPayload {
        structured_data: vec![json!({
            "@context": "https://schema.org",
            "@type": "CollectionPage",
            "name": &title,
            "url": url,
        })],
        title: Some(title),
        description,
        url: Some(url.to_string()),
        links: vec![LinkTag::canonical(url)],
    }
}

/// SEO payload for a merchant content page.
pub fn page(page: &ContentPage, url: &str) -> SeoPayload {
    let title = page.seo.title.clone().unwrap_or_else(|| page.title.clone());

    SeoPayload {
        title: Some(title),
        description: page.seo.description.clone(),
        url: Some(url.to_string()),
        structured_data: Vec::new(),
        links: vec![LinkTag::canonical(url)],
    }
}

/// SEO payload for a product page.
pub fn product(product: &Product, url: &str) -> SeoPayload {
    let title = product
        .seo
        .title
        .clone()
        .unwrap_or_else(|| product.title.clone());
    let description = product
        .seo
        .description
        .clone()
        .or_else(|| product.description.clone());

    let offer = product.price.as_ref().map(|price| {
        json!({
            "@type": "Offer",
            "price": &price.amount,
            "priceCurrency": &price.currency_code,
        })
    });

    SeoPayload {
        structured_data: vec![json!({
            "@context": "https://schema.org",
            "@type": "Product",
            "name": &title,
            "url": url,
            "brand": &product.vendor,
            "offers": offer,
        })],
        title: Some(title),
        description,
        url: Some(url.to_string()),
        links: vec![LinkTag::canonical(url)],
    }
}

/// Merge the payloads of the matched-route chain into one.
///
/// The slice is ordered outermost (least specific) first. Singular fields
/// take the last present value; list fields concatenate least-specific
/// first.
pub fn merge(matches: &[SeoPayload]) -> SeoPayload {
    let mut merged = SeoPayload::default();
    for payload in matches {
        if payload.title.is_some() {
            merged.title = payload.title.clone();
        }
        if payload.description.is_some() {
            merged.description = payload.description.clone();
        }
        if payload.url.is_some() {
            merged.url = payload.url.clone();
        }
        merged
            .structured_data
            .extend(payload.structured_data.iter().cloned());
        merged.links.extend(payload.links.iter().cloned());
    }
    merged
}

/// Render a merged payload into the head metadata array.
pub fn to_meta_tags(payload: &SeoPayload) -> Vec<MetaTag> {
    let mut tags = Vec::new();

    if let Some(title) = &payload.title {
        tags.push(MetaTag::title(title.clone()));
    }
    if let Some(description) = &payload.description {
        tags.push(MetaTag::meta("description", description.clone()));
    }
    for link in &payload.links {
        tags.push(MetaTag::link(link.clone()));
    }
    for block in &payload.structured_data {
        tags.push(MetaTag::json_ld(block.clone()));
    }

    tags
}
