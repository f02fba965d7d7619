//! Front-matter parser for draft files.

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;

use crate::document::{Draft, FrontMatter};
use crate::error::ParseError;

/// Parser for markdown drafts with a `---` delimited front-matter block.
pub struct DraftParser;

impl DraftParser {
    /// Parse draft content into front matter and body.
    ///
    /// The content must split into at least three segments on `---`: anything
    /// before the opening delimiter, the YAML metadata block, and the body.
    /// The body keeps any later `---` occurrences.
    pub fn parse(content: &str) -> Result<Draft, ParseError> {
        let mut segments = content.splitn(3, "---");
        let _preamble = segments.next();
        let metadata = segments.next().ok_or(ParseError::MissingFrontMatter)?;
        let body = segments.next().ok_or(ParseError::MissingFrontMatter)?;

        let front_matter: FrontMatter =
            serde_yml::from_str(metadata).map_err(|e| ParseError::Yaml(e.to_string()))?;

        Ok(Draft {
            front_matter,
            body: Self::clean_body(body),
        })
    }

    /// Trim the body and drop a leading "## Full text OCR" heading if present.
    ///
    /// OCR pipelines prefix the extracted text with that heading; the page
    /// content should start with the text itself.
    fn clean_body(raw: &str) -> String {
        let body = raw.trim();
        let mut lines = body.lines();
        if let Some(first) = lines.next() {
            if first.trim().to_lowercase().starts_with("## full text ocr") {
                return lines.collect::<Vec<_>>().join("\n").trim().to_string();
            }
        }
        body.to_string()
    }
}
