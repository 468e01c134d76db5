//! Shared route cache headers.

use std::time::Duration;

/// Who may cache the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheScope {
    /// Cacheable by CDN and browser.
    Public,
    /// Browser only.
    Private,
    /// No caching.
    #[default]
    None,
}

impl CacheScope {
    fn directive(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::None => "no-store",
        }
    }
}

/// Cache policy for a storefront route.
#[derive(Debug, Clone)]
pub struct RouteCachePolicy {
    scope: CacheScope,
    max_age: Duration,
    swr: Option<Duration>,
}

impl RouteCachePolicy {
    /// Publicly cacheable for the given duration.
    pub fn public(max_age: Duration) -> Self {
        Self {
            scope: CacheScope::Public,
            max_age,
            swr: None,
        }
    }

    /// Serve stale while revalidating for the given duration.
    pub fn with_swr(mut self, swr: Duration) -> Self {
        self.swr = Some(swr);
        self
    }

    /// Render the Cache-Control header value.
    pub fn cache_control_header(&self) -> String {
        if self.scope == CacheScope::None {
            return "no-store".to_string();
        }
        let mut value = format!("{}, max-age={}", self.scope.directive(), self.max_age.as_secs());
        if let Some(swr) = self.swr {
            value.push_str(&format!(", stale-while-revalidate={}", swr.as_secs()));
        }
        value
    }
}

/// The cache headers every storefront page route shares.
pub fn route_headers() -> Vec<(String, String)> {
    let policy = RouteCachePolicy::public(Duration::from_secs(60)).with_swr(Duration::from_secs(30));
    vec![
        (
            "content-type".to_string(),
            "text/html; charset=utf-8".to_string(),
        ),
        ("Cache-Control".to_string(), policy.cache_control_header()),
    ]
}
