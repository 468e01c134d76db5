//! SEO payload assembly for storefront pages.
//!
//! One payload builder per content kind (see [`payload`]), plus the merge
//! step that folds the ordered route-match chain into the final head
//! metadata (see [`merge`] and [`to_meta_tags`]).

mod head;
pub mod payload;

pub use head::*;
pub use payload::{merge, to_meta_tags, SeoPayload};
