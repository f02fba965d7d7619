//! Draft parsing errors.

use thiserror::Error;

/// Errors produced while parsing a draft document.
///
/// Both variants are treated as format skips by callers, never escalated.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The content does not contain a delimited front-matter block.
    #[error("missing front matter delimiters")]
    MissingFrontMatter,

    /// The front-matter block is not valid YAML.
    #[error("failed to parse YAML front matter: {0}")]
    Yaml(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_front_matter_display() {
        let err = ParseError::MissingFrontMatter;
        assert!(err.to_string().contains("front matter"));
    }

    #[test]
    fn test_yaml_error_display() {
        let err = ParseError::Yaml("unexpected end of input".to_string());
        assert!(err.to_string().contains("unexpected end of input"));
    }
}
