//! Tag-based documentation comment parsing
//!
//! Turns the body of a `/** ... */` comment into a [`DocComment`]: the free
//! description text followed by `@tag` entries. Parameter-like tags are read as
//! `@param {type} name description` where both the type and the description are
//! optional and the name may be written `[name]` or `[name=default]`.

use crate::models::doc::{DocComment, DocTag};
use thiserror::Error;

/// Tags whose text is `{type} name description`
const NAMED_TAGS: &[&str] = &["param", "arg", "argument", "property", "prop", "typedef"];

/// Tags whose text is `{type} description`
const TYPED_TAGS: &[&str] = &["returns", "return", "throws", "exception", "type", "yields", "yield"];

/// Reasons a documentation comment could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocCommentError {
    #[error("unclosed type expression in @{tag}")]
    UnclosedType { tag: String },

    #[error("unclosed optional name in @{tag}")]
    UnclosedName { tag: String },

    #[error("@{tag} is missing a name")]
    MissingName { tag: String },

    #[error("empty tag title")]
    EmptyTitle,
}

/// Parser for documentation comment bodies
#[derive(Debug, Default, Clone, Copy)]
pub struct DocCommentParser;

impl DocCommentParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a comment body (the text between `/*` and `*/`)
    pub fn parse(&self, body: &str) -> Result<DocComment, DocCommentError> {
        let mut description = Vec::new();
        let mut raw_tags: Vec<String> = Vec::new();

        for line in unwrap_lines(body) {
            let trimmed = line.trim_start();
            if trimmed.starts_with('@') {
                raw_tags.push(trimmed.to_string());
            } else if let Some(current) = raw_tags.last_mut() {
                current.push('\n');
                current.push_str(trimmed);
            } else {
                description.push(line);
            }
        }

        let tags = raw_tags
            .iter()
            .map(|raw| parse_tag(raw))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DocComment {
            description: description.join("\n").trim().to_string(),
            tags,
        })
    }
}

/// Strip the leading `*` decoration from every line of a block comment body
fn unwrap_lines(body: &str) -> impl Iterator<Item = &str> {
    body.lines().map(|line| {
        let line = line.trim_start();
        let line = line.trim_start_matches('*');
        let line = line.strip_prefix(' ').unwrap_or(line);
        line.trim_end()
    })
}

fn parse_tag(raw: &str) -> Result<DocTag, DocCommentError> {
    let text = &raw[1..];
    let title_end = text
        .find(|c: char| c.is_whitespace() || c == '{')
        .unwrap_or(text.len());
    let title = &text[..title_end];
    if title.is_empty() {
        return Err(DocCommentError::EmptyTitle);
    }

    let mut tag = DocTag {
        title: title.to_string(),
        ..DocTag::default()
    };
    let mut rest = text[title_end..].trim_start();

    if NAMED_TAGS.contains(&title) || TYPED_TAGS.contains(&title) {
        if rest.starts_with('{') {
            let (type_name, remainder) = take_type(rest).ok_or_else(|| DocCommentError::UnclosedType {
                tag: title.to_string(),
            })?;
            tag.type_name = Some(type_name);
            rest = remainder.trim_start();
        }
    }

    if NAMED_TAGS.contains(&title) {
        let (name, remainder) = take_name(rest, &mut tag)?;
        if name.is_empty() {
            return Err(DocCommentError::MissingName { tag: title.to_string() });
        }
        tag.name = Some(name);
        rest = remainder.trim_start();
        rest = rest.strip_prefix("- ").unwrap_or(rest);
    }

    let description = rest.trim();
    if !description.is_empty() {
        tag.description = Some(description.to_string());
    }

    Ok(tag)
}

/// Split `{type} rest` at the brace matching the opening one
fn take_type(text: &str) -> Option<(String, &str)> {
    let mut depth = 0usize;
    for (offset, c) in text.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let type_name = text[1..offset].split_whitespace().collect::<Vec<_>>().join(" ");
                    return Some((type_name, &text[offset + 1..]));
                }
            }
            _ => {}
        }
    }
    None
}

/// Read the name of a named tag, handling `[name]` and `[name=default]`
fn take_name<'t>(text: &'t str, tag: &mut DocTag) -> Result<(String, &'t str), DocCommentError> {
    if let Some(bracketed) = text.strip_prefix('[') {
        let close = bracketed.find(']').ok_or_else(|| DocCommentError::UnclosedName {
            tag: tag.title.clone(),
        })?;
        let inner = &bracketed[..close];
        tag.optional = true;

        let name = match inner.split_once('=') {
            Some((name, default_value)) => {
                tag.default_value = Some(default_value.trim().to_string());
                name.trim()
            }
            None => inner.trim(),
        };
        return Ok((name.to_string(), &bracketed[close + 1..]));
    }

    let end = text.find(char::is_whitespace).unwrap_or(text.len());
    Ok((text[..end].to_string(), &text[end..]))
}
