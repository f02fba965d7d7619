//! Draft document types.

use serde::{Deserialize, Serialize};

/// Front matter of a draft document.
///
/// Every field is optional in the source file; absent fields take the
/// defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontMatter {
    /// Page title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Single category name.
    #[serde(default = "default_category")]
    pub category: String,

    /// Tags for the page.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Short summary.
    #[serde(default)]
    pub summary: String,

    /// Where the document came from.
    #[serde(default)]
    pub source: String,

    /// Whether the draft is cleared for publishing.
    #[serde(default)]
    pub publish: bool,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: default_title(),
            category: default_category(),
            tags: Vec::new(),
            summary: String::new(),
            source: String::new(),
            publish: false,
        }
    }
}

fn default_title() -> String {
    "Untitled".to_string()
}

fn default_category() -> String {
    "Uncategorized".to_string()
}

/// A parsed draft: front matter plus the post-processed body.
#[derive(Debug, Clone)]
pub struct Draft {
    pub front_matter: FrontMatter,
    pub body: String,
}
