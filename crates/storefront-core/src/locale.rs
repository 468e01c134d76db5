//! Resolved storefront locale and the locale-segment guard.

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// The storefront's resolved `(language, country)` pair.
///
/// The default locale is served unprefixed; a URL prefix is only valid when
/// it names a non-default locale the storefront actually resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// ISO language code (e.g., "en").
    pub language: String,
    /// ISO country code (e.g., "us").
    pub country: String,
}

impl Locale {
    /// Create a new locale.
    pub fn new(language: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            country: country.into(),
        }
    }

    /// The URL prefix form, lowercased: `"{language}-{country}"`.
    pub fn prefix(&self) -> String {
        format!("{}-{}", self.language, self.country).to_lowercase()
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// Validate a route's optional locale path segment against the resolved
/// storefront locale.
///
/// An absent segment always passes. A present segment must equal the
/// resolved prefix (compared case-insensitively); anything else is a
/// not-found outcome so the default locale never gets a second indexable
/// URL under a literal prefix.
pub fn verify_locale_segment(segment: Option<&str>, locale: &Locale) -> Result<(), RouteError> {
    match segment {
        None => Ok(()),
        Some(seg) if seg.to_lowercase() == locale.prefix() => Ok(()),
        Some(seg) => Err(RouteError::LocaleMismatch(seg.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_segment_passes() {
        let locale = Locale::new("en", "us");
        assert!(verify_locale_segment(None, &locale).is_ok());
    }

    #[test]
    fn test_matching_segment_passes_case_insensitively() {
        let locale = Locale::new("en", "us");
        assert!(verify_locale_segment(Some("en-us"), &locale).is_ok());
        assert!(verify_locale_segment(Some("EN-US"), &locale).is_ok());
        assert!(verify_locale_segment(Some("En-Us"), &locale).is_ok());
    }

    #[test]
    fn test_mismatched_segment_is_rejected() {
        let locale = Locale::new("en", "us");
        let err = verify_locale_segment(Some("fr-ca"), &locale).unwrap_err();
        assert!(matches!(err, RouteError::LocaleMismatch(_)));
        assert_eq!(err.status(), http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_rejects_iff_lowercased_segment_differs() {
        let locale = Locale::new("EN", "US");
        // Prefix is lowercased on the resolved side too.
        assert!(verify_locale_segment(Some("en-us"), &locale).is_ok());
        assert!(verify_locale_segment(Some("en-gb"), &locale).is_err());
    }
}
