//! End-to-end pipeline tests with in-memory collaborators.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use storefront_builder::{
    BuiltDocument, ElementRegistry, ElementRenderer, Entity, PageBuilder, PageDocument,
    PageLoadResult,
};
use storefront_core::{Locale, PageType, RequestContext, RouteError, RouteParams, TimingContext};
use storefront_data::{
    Article, BlogListing, CollectionDetail, CommerceClient, ContentPage, EntitySeo,
    PaginationVariables, Product, ProductDetail, Recommendation,
};
use storefront_pages::{route_meta, AppConfig, RouteResponse};
use storefront_seo::{MetaTag, SeoPayload};
use storefront_streaming::{stream_envelope, EnvelopeSink, PENDING_MANIFEST_KEY};

struct Placeholder;

impl ElementRenderer for Placeholder {
    fn render(&self, entity: &Entity) -> String {
        format!("<section data-element=\"{}\"></section>", entity.element_id)
    }
}

fn test_config() -> AppConfig {
    let registry = ElementRegistry::new()
        .register("HeroBanner", Arc::new(Placeholder))
        .register("FeaturedCollections", Arc::new(Placeholder))
        .register("Newsletter", Arc::new(Placeholder))
        .register("ProductGallery", Arc::new(Placeholder))
        .register("ProductInformation", Arc::new(Placeholder))
        .register("CollectionHeader", Arc::new(Placeholder))
        .register("ProductGrid", Arc::new(Placeholder))
        .register("RichText", Arc::new(Placeholder))
        .register("ArticleContent", Arc::new(Placeholder));
    AppConfig::new(registry, Default::default())
}

struct FakeBuilder;

#[async_trait]
impl PageBuilder for FakeBuilder {
    async fn load_page_document(
        &self,
        _page_type: PageType,
        _params: &RouteParams,
        default_document: &PageDocument,
    ) -> anyhow::Result<BuiltDocument> {
        let authored = PageDocument::new("authored-doc", "Authored")
            .with_entity("hero", Entity::new("hero-banner"));
        Ok(BuiltDocument {
            document: authored.merged_with(default_document),
            css_content: ".hero{display:grid}".to_string(),
        })
    }

    fn page_meta(&self, _result: &PageLoadResult) -> Vec<MetaTag> {
        vec![MetaTag::meta("generator", "page-builder")]
    }
}

#[derive(Default)]
struct FakeCommerce {
    products: HashMap<String, ProductDetail>,
    collections: HashMap<String, CollectionDetail>,
    pages: HashMap<String, ContentPage>,
    articles: HashMap<(String, String), Article>,
    listing: BlogListing,
    recommendations: Vec<Recommendation>,
    fail_recommendations: bool,
    queries: AtomicUsize,
    last_pagination: Mutex<Option<PaginationVariables>>,
}

impl FakeCommerce {
    fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CommerceClient for FakeCommerce {
    async fn article_by_handle(
        &self,
        _locale: &Locale,
        blog_handle: &str,
        handle: &str,
    ) -> anyhow::Result<Option<Article>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .articles
            .get(&(blog_handle.to_string(), handle.to_string()))
            .cloned())
    }

    async fn blogs(
        &self,
        _locale: &Locale,
        pagination: &PaginationVariables,
    ) -> anyhow::Result<BlogListing> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        *self.last_pagination.lock().unwrap() = Some(pagination.clone());
        Ok(self.listing.clone())
    }

    async fn collection_by_handle(
        &self,
        _locale: &Locale,
        handle: &str,
    ) -> anyhow::Result<Option<CollectionDetail>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.collections.get(handle).cloned())
    }

    async fn page_by_handle(
        &self,
        _locale: &Locale,
        handle: &str,
    ) -> anyhow::Result<Option<ContentPage>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.pages.get(handle).cloned())
    }

    async fn product_by_handle(
        &self,
        _locale: &Locale,
        handle: &str,
    ) -> anyhow::Result<Option<ProductDetail>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.products.get(handle).cloned())
    }

    async fn product_recommendations(
        &self,
        _locale: &Locale,
        _handle: &str,
    ) -> anyhow::Result<Vec<Recommendation>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.fail_recommendations {
            anyhow::bail!("recommendations service unavailable");
        }
        Ok(self.recommendations.clone())
    }
}

fn widget() -> ProductDetail {
    ProductDetail {
        product: Product {
            id: "gid://shop/Product/1".to_string(),
            handle: "widget".to_string(),
            title: "Widget".to_string(),
            description: Some("A very good widget".to_string()),
            vendor: Some("Acme".to_string()),
            featured_image: None,
            price: None,
            seo: EntitySeo::default(),
        },
    }
}

fn commerce_with_widget() -> FakeCommerce {
    let mut commerce = FakeCommerce::default();
    commerce.products.insert("widget".to_string(), widget());
    commerce.recommendations = vec![Recommendation {
        id: "gid://shop/Product/2".to_string(),
        handle: "gadget".to_string(),
        title: "Gadget".to_string(),
        featured_image: None,
        price: None,
    }];
    commerce
}

fn request(path: &str) -> RequestContext {
    RequestContext::new(path, Locale::new("en", "us"))
        .with_url(format!("https://shop.example{}", path))
}

async fn collect_chunks(response: RouteResponse<'_>) -> Vec<Value> {
    let (tx, mut rx) = futures::channel::mpsc::unbounded();
    let mut sink = EnvelopeSink::new(tx, TimingContext::new());
    stream_envelope(response.envelope, &mut sink).await.unwrap();

    let mut chunks = Vec::new();
    while let Ok(Some(bytes)) = rx.try_next() {
        chunks.push(serde_json::from_slice(&bytes).unwrap());
    }
    chunks
}

#[tokio::test]
async fn locale_mismatch_serves_404_without_backend_query() {
    let config = test_config();
    let commerce = commerce_with_widget();
    let ctx = request("/fr-ca/products/widget")
        .with_param("locale", "fr-ca")
        .with_param("handle", "widget");

    let err = storefront_pages::product::loader(&ctx, &config, &FakeBuilder, &commerce)
        .await
        .err()
        .expect("locale mismatch must fail");

    assert_eq!(err.status(), http::StatusCode::NOT_FOUND);
    assert_eq!(commerce.query_count(), 0);
}

#[tokio::test]
async fn missing_handle_is_an_invariant_violation() {
    let config = test_config();
    let commerce = commerce_with_widget();
    let ctx = request("/products");

    let err = storefront_pages::product::loader(&ctx, &config, &FakeBuilder, &commerce)
        .await
        .err()
        .expect("missing handle must fail");

    assert!(matches!(err, RouteError::MissingParam("handle")));
    assert_eq!(err.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn missing_product_yields_not_found_not_a_panic() {
    let config = test_config();
    let commerce = commerce_with_widget();
    let ctx = request("/products/missing-sku").with_param("handle", "missing-sku");

    let err = storefront_pages::product::loader(&ctx, &config, &FakeBuilder, &commerce)
        .await
        .err()
        .expect("absent entity must be a not-found outcome");

    assert!(matches!(err, RouteError::NotFound));
    assert_eq!(err.status(), http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn product_page_streams_critical_then_recommendations() {
    let config = test_config();
    let commerce = commerce_with_widget();
    let ctx = request("/products/widget").with_param("handle", "widget");

    let response = storefront_pages::product::loader(&ctx, &config, &FakeBuilder, &commerce)
        .await
        .unwrap();

    assert!(!response.elements.is_empty());
    let chunks = collect_chunks(response).await;

    assert_eq!(chunks.len(), 2);
    let initial = &chunks[0];
    assert_eq!(initial["pageData"]["id"], "authored-doc");
    assert_eq!(
        initial["shopifyData"]["productDetail"]["product"]["handle"],
        "widget"
    );
    assert_eq!(initial["cssContent"], ".hero{display:grid}");
    assert_eq!(initial["seo"]["title"], "Widget");
    assert_eq!(initial[PENDING_MANIFEST_KEY], serde_json::json!(["recommendations"]));

    assert_eq!(chunks[1]["recommendations"][0]["handle"], "gadget");
}

#[tokio::test]
async fn failing_recommendations_never_abort_the_response() {
    let config = test_config();
    let mut commerce = commerce_with_widget();
    commerce.fail_recommendations = true;
    let ctx = request("/products/widget").with_param("handle", "widget");

    let response = storefront_pages::product::loader(&ctx, &config, &FakeBuilder, &commerce)
        .await
        .expect("deferred failure must not surface");

    let chunks = collect_chunks(response).await;
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[1]["recommendations"], Value::Null);
}

#[tokio::test]
async fn collection_page_carries_analytics_payload() {
    let config = test_config();
    let mut commerce = FakeCommerce::default();
    commerce.collections.insert(
        "summer".to_string(),
        CollectionDetail {
            collection: storefront_data::Collection {
                id: "gid://shop/Collection/7".to_string(),
                handle: "summer".to_string(),
                title: "Summer".to_string(),
                description: None,
                image: None,
                seo: EntitySeo::default(),
            },
        },
    );
    let ctx = request("/collections/summer").with_param("handle", "summer");

    let response = storefront_pages::collection::loader(&ctx, &config, &FakeBuilder, &commerce)
        .await
        .unwrap();
    assert_eq!(
        response.seo.as_ref().and_then(|s| s.title.as_deref()),
        Some("Summer")
    );

    let chunks = collect_chunks(response).await;
    assert_eq!(chunks[0]["analytics"]["collection"]["handle"], "summer");
    assert_eq!(
        chunks[0]["shopifyData"]["collectionDetail"]["collection"]["id"],
        "gid://shop/Collection/7"
    );
}

#[tokio::test]
async fn blog_listing_passes_pagination_variables() {
    let mut commerce = FakeCommerce::default();
    commerce.listing = BlogListing {
        nodes: vec![storefront_data::Blog {
            handle: "news".to_string(),
            title: "News".to_string(),
            seo: EntitySeo::default(),
        }],
        page_info: Default::default(),
    };
    let ctx = request("/blogs").with_query_param("cursor", "abc");

    let response = storefront_pages::blogs::loader(&ctx, &commerce).await.unwrap();
    let chunks = collect_chunks(response).await;

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0]["blogs"]["nodes"][0]["handle"], "news");

    let seen = commerce.last_pagination.lock().unwrap().clone().unwrap();
    assert_eq!(seen.first, Some(10));
    assert_eq!(seen.end_cursor.as_deref(), Some("abc"));
}

#[tokio::test]
async fn home_page_narrows_registry_to_document_elements() {
    let config = test_config();
    let ctx = request("/");

    let response = storefront_pages::home::loader(&ctx, &config, &FakeBuilder)
        .await
        .unwrap();

    let keys: Vec<_> = response.elements.keys().map(String::from).collect();
    assert!(keys.contains(&"HeroBanner".to_string()));
    assert!(keys.contains(&"Newsletter".to_string()));
    assert!(!keys.contains(&"ProductGallery".to_string()));
}

#[tokio::test]
async fn article_loader_requires_both_handles() {
    let config = test_config();
    let commerce = FakeCommerce::default();
    let ctx = request("/blogs/news/hello").with_param("handle", "hello");

    let err = storefront_pages::article::loader(&ctx, &config, &FakeBuilder, &commerce)
        .await
        .err()
        .expect("missing blog handle must fail");
    assert!(matches!(err, RouteError::MissingParam("blog_handle")));
}

#[tokio::test]
async fn meta_assembly_prefers_most_specific_match() {
    let config = test_config();
    let commerce = commerce_with_widget();
    let ctx = request("/products/widget").with_param("handle", "widget");

    let response = storefront_pages::product::loader(&ctx, &config, &FakeBuilder, &commerce)
        .await
        .unwrap();
    let product_seo = response.seo.clone().unwrap();

    // Rebuild the critical result the way the render step sees it.
    let critical = PageLoadResult {
        page_document: PageDocument::new("authored-doc", "Authored"),
        commerce_data: storefront_data::CommerceData::Product {
            product_detail: widget(),
        },
        css_content: String::new(),
    };

    let site = SeoPayload::titled("Acme Store");
    let tags = route_meta(&FakeBuilder, &critical, &[site, product_seo]);

    assert!(matches!(&tags[0], MetaTag::Meta { name, .. } if name == "generator"));
    assert!(tags
        .iter()
        .any(|tag| matches!(tag, MetaTag::Title { content } if content == "Widget")));
}
