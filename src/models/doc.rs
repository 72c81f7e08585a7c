//! Parsed documentation comments

use serde::{Deserialize, Serialize};

/// Tag titles that document a function parameter
pub const PARAM_TAG_TITLES: &[&str] = &["param", "arg", "argument"];

/// Description and ordered tags of a `/** ... */` comment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocComment {
    pub description: String,
    pub tags: Vec<DocTag>,
}

/// A single `@tag` of a documentation comment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocTag {
    /// Tag title without the `@`, e.g. `param`
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Set for `[name]` and `[name=default]`
    #[serde(default)]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl DocComment {
    /// Tags with the given title, in declaration order
    pub fn tags_titled<'a>(&'a self, title: &'a str) -> impl Iterator<Item = &'a DocTag> + 'a {
        self.tags.iter().filter(move |tag| tag.title == title)
    }

    /// `@param` / `@arg` / `@argument` tags in declaration order
    pub fn param_tags(&self) -> impl Iterator<Item = &DocTag> {
        self.tags.iter().filter(|tag| tag.is_param())
    }

    /// The parameter tag naming `name` exactly
    pub fn param_tag(&self, name: &str) -> Option<&DocTag> {
        self.param_tags().find(|tag| tag.name.as_deref() == Some(name))
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_empty() && self.tags.is_empty()
    }
}

impl DocTag {
    pub fn is_param(&self) -> bool {
        PARAM_TAG_TITLES.contains(&self.title.as_str())
    }
}
