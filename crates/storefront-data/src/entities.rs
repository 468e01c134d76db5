//! Commerce entity types.
//!
//! One struct per mandatory backend record, shaped the way the storefront
//! API returns them. All types serialize camelCase since they land in the
//! response envelope verbatim.

use serde::{Deserialize, Serialize};

/// SEO fields carried on individual backend records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitySeo {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// An image reference on a backend record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
}

/// A blog article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub content_html: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub seo: EntitySeo,
}

/// A blog (container of articles), as returned by the listing query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub seo: EntitySeo,
}

/// Cursor info for a paginated connection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionPageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    #[serde(default)]
    pub start_cursor: Option<String>,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

/// A page of blogs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogListing {
    pub nodes: Vec<Blog>,
    pub page_info: ConnectionPageInfo,
}

/// A collection record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub seo: EntitySeo,
}

/// The collection payload as the envelope carries it
/// (`shopifyData.collectionDetail.collection`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionDetail {
    pub collection: Collection,
}

/// A merchant-authored content page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPage {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub seo: EntitySeo,
}

/// A product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub featured_image: Option<Image>,
    #[serde(default)]
    pub price: Option<MoneyAmount>,
    #[serde(default)]
    pub seo: EntitySeo,
}

/// The product payload as the envelope carries it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub product: Product,
}

/// An amount in a given currency, as the backend quotes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyAmount {
    pub amount: String,
    pub currency_code: String,
}

/// A recommended product (deferred, below-the-fold data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub featured_image: Option<Image>,
    #[serde(default)]
    pub price: Option<MoneyAmount>,
}

/// The mandatory commerce payload for a page type, shaped per page kind.
///
/// Serializes untagged so the envelope's `shopifyData` key carries exactly
/// the nested shape each page's render layer expects. Serialize-only: the
/// pipeline constructs this, it never parses it back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommerceData {
    /// The home page has no mandatory backend entity.
    Home {},
    Article {
        article: Article,
    },
    #[serde(rename_all = "camelCase")]
    Collection {
        collection_detail: CollectionDetail,
    },
    Page {
        page: ContentPage,
    },
    #[serde(rename_all = "camelCase")]
    Product {
        product_detail: ProductDetail,
    },
}

impl CommerceData {
    /// Short name of the payload kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            CommerceData::Home {} => "home",
            CommerceData::Article { .. } => "article",
            CommerceData::Collection { .. } => "collection",
            CommerceData::Page { .. } => "page",
            CommerceData::Product { .. } => "product",
        }
    }
}
