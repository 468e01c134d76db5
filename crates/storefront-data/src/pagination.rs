//! Cursor pagination variables for listing queries.

use serde::{Deserialize, Serialize};
use storefront_core::QueryParams;

/// Variables for a cursor-paginated connection query.
///
/// Built from the request's `cursor` and `direction` query params: paging
/// backwards sets `last`/`before`, anything else pages forwards with
/// `first`/`after`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_cursor: Option<String>,
}

impl PaginationVariables {
    /// Extract pagination variables from query params with the given page
    /// size.
    pub fn from_query(query: &QueryParams, page_by: u32) -> Self {
        let cursor = query.get("cursor").cloned();
        let backwards = query
            .get("direction")
            .map(|d| d.as_str() == "previous")
            .unwrap_or(false);

        if backwards {
            Self {
                first: None,
                last: Some(page_by),
                start_cursor: cursor,
                end_cursor: None,
            }
        } else {
            Self {
                first: Some(page_by),
                last: None,
                start_cursor: None,
                end_cursor: cursor,
            }
        }
    }
}
