//! Notion API request types.

use std::collections::BTreeMap;

use serde::Serialize;

use draftpress_core::Draft;

/// Pinned API version header value.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Maximum characters of body text carried in the page property and the
/// paragraph block; Notion rejects longer rich-text items.
pub const BODY_CHAR_LIMIT: usize = 2000;

/// `POST /v1/pages` request body.
#[derive(Debug, Serialize)]
pub struct CreatePageRequest {
    pub parent: Parent,
    pub properties: BTreeMap<String, PropertyValue>,
    pub children: Vec<Block>,
}

/// Parent database reference.
#[derive(Debug, Serialize)]
pub struct Parent {
    pub database_id: String,
}

/// Typed page property values.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Title { title: Vec<RichText> },
    Select { select: SelectOption },
    MultiSelect { multi_select: Vec<SelectOption> },
    RichText { rich_text: Vec<RichText> },
}

#[derive(Debug, Serialize)]
pub struct SelectOption {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct RichText {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: TextContent,
}

#[derive(Debug, Serialize)]
pub struct TextContent {
    pub content: String,
}

impl RichText {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: TextContent {
                content: content.into(),
            },
        }
    }
}

/// Page content block.
#[derive(Debug, Serialize)]
pub struct Block {
    pub object: String,
    #[serde(rename = "type")]
    pub block_type: String,
    pub paragraph: Paragraph,
}

#[derive(Debug, Serialize)]
pub struct Paragraph {
    pub rich_text: Vec<RichText>,
}

impl Block {
    pub fn paragraph(content: impl Into<String>) -> Self {
        Self {
            object: "block".to_string(),
            block_type: "paragraph".to_string(),
            paragraph: Paragraph {
                rich_text: vec![RichText::new(content)],
            },
        }
    }
}

impl CreatePageRequest {
    /// Map a parsed draft onto the target database's page schema.
    ///
    /// The body excerpt is truncated identically for the `Full Text OCR`
    /// property and the single paragraph block.
    pub fn from_draft(database_id: &str, draft: &Draft) -> Self {
        let fm = &draft.front_matter;
        let excerpt = truncate_chars(&draft.body, BODY_CHAR_LIMIT);

        let mut properties = BTreeMap::new();
        properties.insert(
            "Title".to_string(),
            PropertyValue::Title {
                title: vec![RichText::new(&fm.title)],
            },
        );
        properties.insert(
            "Category".to_string(),
            PropertyValue::Select {
                select: SelectOption {
                    name: fm.category.clone(),
                },
            },
        );
        properties.insert(
            "Tags".to_string(),
            PropertyValue::MultiSelect {
                multi_select: fm
                    .tags
                    .iter()
                    .map(|t| SelectOption { name: t.clone() })
                    .collect(),
            },
        );
        properties.insert(
            "Summary".to_string(),
            PropertyValue::RichText {
                rich_text: vec![RichText::new(&fm.summary)],
            },
        );
        properties.insert(
            "Source".to_string(),
            PropertyValue::RichText {
                rich_text: vec![RichText::new(&fm.source)],
            },
        );
        properties.insert(
            "Full Text OCR".to_string(),
            PropertyValue::RichText {
                rich_text: vec![RichText::new(excerpt)],
            },
        );

        Self {
            parent: Parent {
                database_id: database_id.to_string(),
            },
            properties,
            children: vec![Block::paragraph(excerpt)],
        }
    }
}

/// First `max` characters of `s`, never splitting a character.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
