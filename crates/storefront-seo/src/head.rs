//! Head metadata tag vocabulary.

use serde::{Deserialize, Serialize};

/// A `<link>` tag contribution (canonical URLs, alternates).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkTag {
    pub rel: String,
    pub href: String,
}

impl LinkTag {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }

    /// A canonical link for the given URL.
    pub fn canonical(href: impl Into<String>) -> Self {
        Self::new("canonical", href)
    }
}

/// One tag in the page head metadata array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "camelCase")]
pub enum MetaTag {
    Title { content: String },
    Meta { name: String, content: String },
    Link { rel: String, href: String },
    JsonLd { data: serde_json::Value },
}

impl MetaTag {
    pub fn title(content: impl Into<String>) -> Self {
        MetaTag::Title {
            content: content.into(),
        }
    }

    pub fn meta(name: impl Into<String>, content: impl Into<String>) -> Self {
        MetaTag::Meta {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn link(tag: LinkTag) -> Self {
        MetaTag::Link {
            rel: tag.rel,
            href: tag.href,
        }
    }

    pub fn json_ld(data: serde_json::Value) -> Self {
        MetaTag::JsonLd { data }
    }

    /// Render this tag to head HTML.
    pub fn render(&self) -> String {
        match self {
            MetaTag::Title { content } => format!("<title>{}</title>", escape(content)),
            MetaTag::Meta { name, content } => format!(
                r#"<meta name="{}" content="{}">"#,
                escape(name),
                escape(content)
            ),
            MetaTag::Link { rel, href } => {
                format!(r#"<link rel="{}" href="{}">"#, escape(rel), escape(href))
            }
            MetaTag::JsonLd { data } => format!(
                r#"<script type="application/ld+json">{}</script>"#,
                serde_json::to_string(data).unwrap_or_else(|_| "{}".to_string())
            ),
        }
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
