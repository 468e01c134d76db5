//! Route failure taxonomy.

use http::StatusCode;

/// Failures that can abort the critical phase of a request.
///
/// Deferred-phase failures never appear here; they are absorbed into
/// absent values before they can reach a route boundary.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// The backend has no matching content for a well-formed handle.
    /// Recovered into a 404 response.
    #[error("no matching content for this route")]
    NotFound,

    /// The requested locale segment disagrees with the resolved locale.
    /// Surfaced identically to `NotFound` so locale-routing internals
    /// never leak.
    #[error("locale segment '{0}' does not match the resolved storefront locale")]
    LocaleMismatch(String),

    /// A route parameter required to look up the mandatory entity is
    /// missing. Indicates a misconfigured route, not user input.
    #[error("missing route param: {0}")]
    MissingParam(&'static str),

    /// The page-builder or commerce backend failed outright (transport,
    /// deserialization). Distinct from absence, which is `NotFound`.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl RouteError {
    /// Map the failure to the HTTP status served at the route boundary.
    ///
    /// Not-found and locale-mismatch both produce a bodiless 404; an
    /// invariant violation or backend failure is a 500-class error.
    pub fn status(&self) -> StatusCode {
        match self {
            RouteError::NotFound | RouteError::LocaleMismatch(_) => StatusCode::NOT_FOUND,
            RouteError::MissingParam(_) | RouteError::Backend(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether this failure is an expected, user-recoverable outcome.
    pub fn is_not_found(&self) -> bool {
        self.status() == StatusCode::NOT_FOUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(RouteError::NotFound.status(), StatusCode::NOT_FOUND);
        assert!(RouteError::NotFound.is_not_found());
    }

    #[test]
    fn test_locale_mismatch_is_indistinguishable_from_not_found() {
        let err = RouteError::LocaleMismatch("fr-ca".to_string());
        assert_eq!(err.status(), RouteError::NotFound.status());
    }

    #[test]
    fn test_missing_param_is_fatal() {
        let err = RouteError::MissingParam("handle");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_backend_failure_is_fatal() {
        let err = RouteError::Backend(anyhow::anyhow!("connection refused"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
