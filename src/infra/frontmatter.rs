//! Frontmatter generation for new notes and splitting for display.

use chrono::{DateTime, Local, SecondsFormat};
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Metadata block at the top of a note.
///
/// Only `created` is written by the store; anything else a user adds by
/// hand is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Frontmatter {
    pub created: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// A note's content with its frontmatter separated from the body.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedNote<'a> {
    pub frontmatter: Frontmatter,
    pub body: &'a str,
}

/// Errors during frontmatter parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing opening frontmatter delimiter '---'")]
    MissingOpeningDelimiter,

    #[error("missing closing frontmatter delimiter '---'")]
    MissingClosingDelimiter,

    #[error("invalid YAML in frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

/// Builds the initial content of a freshly created note.
///
/// # Format
/// ```text
/// ---
/// created: 2024-01-15T10:30:00.000000+01:00
/// ---
///
/// # Note Title
///
/// ```
pub fn new_note_content(title: &str, created: DateTime<Local>) -> String {
    format!(
        "---\ncreated: {}\n---\n\n# {}\n\n",
        created.to_rfc3339_opts(SecondsFormat::Micros, false),
        title
    )
}

/// Parses the leading `---` delimited YAML block of a note.
///
/// # Errors
///
/// Returns `ParseError` if:
/// - The content doesn't start with `---`
/// - There's no closing `---` delimiter
/// - The YAML between delimiters is invalid
pub fn parse(content: &str) -> Result<ParsedNote<'_>, ParseError> {
    let after_opening = if content.starts_with("---\r\n") {
        5
    } else if content.starts_with("---\n") {
        4
    } else if content == "---" {
        return Err(ParseError::MissingClosingDelimiter);
    } else {
        return Err(ParseError::MissingOpeningDelimiter);
    };

    let yaml_and_rest = &content[after_opening..];
    let closing_pos = find_closing_delimiter(yaml_and_rest)?;
    let yaml = &yaml_and_rest[..closing_pos];

    let after_closing = &yaml_and_rest[closing_pos..];
    let body = after_closing
        .strip_prefix("---\r\n")
        .or_else(|| after_closing.strip_prefix("---\n"))
        .unwrap_or(&after_closing[3..]);

    let frontmatter = if yaml.trim().is_empty() {
        Frontmatter::default()
    } else {
        serde_yaml::from_str(yaml)?
    };

    Ok(ParsedNote { frontmatter, body })
}

/// Separates frontmatter from the body, falling back to the whole content
/// as body when there is no well-formed block.
pub fn split(content: &str) -> ParsedNote<'_> {
    parse(content).unwrap_or(ParsedNote {
        frontmatter: Frontmatter::default(),
        body: content,
    })
}

/// Finds the byte offset of a line consisting of exactly `---`.
fn find_closing_delimiter(content: &str) -> Result<usize, ParseError> {
    let mut pos = 0;
    for line in content.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            return Ok(pos);
        }
        pos += line.len();
    }
    Err(ParseError::MissingClosingDelimiter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn test_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn new_note_content_has_expected_layout() {
        let content = new_note_content("Project Plan", test_time());
        let lines: Vec<&str> = content.split('\n').collect();

        assert_eq!(lines[0], "---");
        assert!(lines[1].starts_with("created: 2024-01-15T10:30:00.000000"));
        assert_eq!(lines[2], "---");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "# Project Plan");
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn new_note_content_keeps_literal_title() {
        let content = new_note_content("Q1/Q2 Review", test_time());
        assert!(content.contains("# Q1/Q2 Review\n"));
    }

    #[test]
    fn parse_round_trips_generated_content() {
        let content = new_note_content("Ideas", test_time());
        let parsed = parse(&content).unwrap();

        assert!(
            parsed
                .frontmatter
                .created
                .as_deref()
                .is_some_and(|c| c.starts_with("2024-01-15T10:30:00"))
        );
        assert_eq!(parsed.body, "\n# Ideas\n\n");
    }

    #[test]
    fn parse_keeps_user_fields() {
        let content = "---\ncreated: 2024-01-01\ntags: [a, b]\n---\nbody";
        let parsed = parse(content).unwrap();
        assert!(parsed.frontmatter.extra.contains_key("tags"));
        assert_eq!(parsed.body, "body");
    }

    #[test]
    fn parse_accepts_crlf() {
        let content = "---\r\ncreated: x\r\n---\r\nbody";
        let parsed = parse(content).unwrap();
        assert_eq!(parsed.frontmatter.created.as_deref(), Some("x"));
        assert_eq!(parsed.body, "body");
    }

    #[test]
    fn parse_accepts_delimiter_at_eof() {
        let parsed = parse("---\ncreated: x\n---").unwrap();
        assert_eq!(parsed.body, "");
    }

    #[test]
    fn parse_rejects_missing_opening() {
        assert!(matches!(
            parse("# Just a heading"),
            Err(ParseError::MissingOpeningDelimiter)
        ));
    }

    #[test]
    fn parse_rejects_missing_closing() {
        assert!(matches!(
            parse("---\ncreated: x\nno end"),
            Err(ParseError::MissingClosingDelimiter)
        ));
    }

    #[test]
    fn parse_rejects_invalid_yaml() {
        assert!(matches!(
            parse("---\n: : :\n  - [\n---\nbody"),
            Err(ParseError::InvalidYaml(_))
        ));
    }

    #[test]
    fn split_falls_back_to_whole_content() {
        let content = "plain text with [[Link]]";
        let parsed = split(content);
        assert_eq!(parsed.frontmatter, Frontmatter::default());
        assert_eq!(parsed.body, content);
    }
}
