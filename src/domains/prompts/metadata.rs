//! Inline metadata parsing for prompt files.
//!
//! A prompt file may start with `key:value` lines:
//!
//! ```text
//! lang:golang
//! title:Error handling rules
//!
//! # Error handling
//! ...
//! ```
//!
//! The block ends at the first blank line or the first line that is not a
//! `key:value` pair. A blank terminator is dropped; any other terminator is
//! the first line of the content.

use std::collections::HashMap;

/// Metadata key overriding the prompt description.
pub const TITLE_KEY: &str = "title";

/// Metadata key setting the prompt language tag.
pub const LANG_KEY: &str = "lang";

/// Result of splitting a prompt file into metadata and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPrompt<'a> {
    /// Every `key:value` pair of the leading block. Later keys overwrite earlier ones.
    pub metadata: HashMap<String, String>,

    /// The content following the metadata block.
    pub content: &'a str,
}

impl ParsedPrompt<'_> {
    /// The non-empty `title` value, if any.
    pub fn title(&self) -> Option<&str> {
        self.get(TITLE_KEY)
    }

    /// The non-empty `lang` value, if any.
    pub fn language(&self) -> Option<&str> {
        self.get(LANG_KEY)
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.metadata
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    InMetadata,
    InContent,
}

/// Split `content` into its leading metadata block and the remaining content.
pub fn parse(content: &str) -> ParsedPrompt<'_> {
    let mut metadata = HashMap::new();
    let mut state = State::InMetadata;
    let mut offset = 0;
    let mut consumed_any = false;

    while state == State::InMetadata && offset < content.len() {
        let rest = &content[offset..];
        let (line, next) = match rest.find('\n') {
            Some(i) => (&rest[..i], offset + i + 1),
            None => (rest, content.len()),
        };

        match parse_pair(line) {
            Some((key, value)) => {
                metadata.insert(key.to_string(), value.to_string());
                consumed_any = true;
                offset = next;
            }
            None => {
                // A blank terminator after real metadata belongs to the block.
                if consumed_any && line.trim().is_empty() {
                    offset = next;
                }
                state = State::InContent;
            }
        }
    }

    ParsedPrompt {
        metadata,
        content: &content[offset..],
    }
}

/// Parse one `key:value` line. Returns `None` for blank or non-matching lines.
fn parse_pair(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    Some((key, value.trim()))
}

/// Derive a description from the first non-blank content line, stripping a
/// leading markdown heading marker.
pub fn description_from_content(content: &str) -> Option<String> {
    let line = content.lines().map(str::trim).find(|l| !l.is_empty())?;

    let stripped = line.trim_start_matches(['#', ' ']).trim();
    if stripped.is_empty() {
        Some(line.to_string())
    } else {
        Some(stripped.to_string())
    }
}
