//! Class, method and parameter descriptors produced by the extractor

use super::doc::{DocComment, DocTag};
use super::syntax::MethodKind;
use serde::{Deserialize, Serialize};

/// A documented class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<DocComment>,
    pub methods: Vec<MethodDescriptor>,
}

impl ClassDescriptor {
    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|method| method.name == name)
    }

    pub fn constructor(&self) -> Option<&MethodDescriptor> {
        self.methods
            .iter()
            .find(|method| method.kind == MethodKind::Constructor)
    }

    pub fn description(&self) -> Option<&str> {
        self.documentation
            .as_ref()
            .map(|doc| doc.description.as_str())
            .filter(|description| !description.is_empty())
    }
}

/// A documented method, constructor or accessor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    pub kind: MethodKind,
    pub is_static: bool,
    pub is_async: bool,
    pub parameters: Vec<ParameterDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<DocComment>,
}

impl MethodDescriptor {
    pub fn description(&self) -> Option<&str> {
        self.documentation
            .as_ref()
            .map(|doc| doc.description.as_str())
            .filter(|description| !description.is_empty())
    }

    /// Tags of the method's documentation with the given title
    pub fn tags<'a>(&'a self, title: &'a str) -> Vec<&'a DocTag> {
        self.documentation
            .as_ref()
            .map(|doc| doc.tags_titled(title).collect())
            .unwrap_or_default()
    }
}

/// Declared shape of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterShape {
    /// A plain binding name
    Simple,
    /// `{ a, b }`
    Object,
    /// `[a, b]`
    Array,
}

/// A parameter of a method, merged with its `@param` tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Binding name for simple parameters; for destructured parameters the name
    /// given by the documentation, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub shape: ParameterShape,
    pub is_rest: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Named sub-bindings of a destructured parameter, in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<ParameterValue>,
}

impl ParameterDescriptor {
    pub fn new(shape: ParameterShape) -> Self {
        Self {
            name: None,
            shape,
            is_rest: false,
            default_value: None,
            type_name: None,
            description: None,
            values: Vec::new(),
        }
    }

    pub fn is_destructured(&self) -> bool {
        self.shape != ParameterShape::Simple
    }

    pub fn value(&self, name: &str) -> Option<&ParameterValue> {
        self.values.iter().find(|value| value.name == name)
    }

    /// Copy the type and description of a matching tag
    pub fn document(&mut self, tag: &DocTag) {
        self.type_name = tag.type_name.clone();
        self.description = tag.description.clone();
        if self.default_value.is_none() {
            self.default_value = tag.default_value.clone();
        }
    }
}

/// One named binding of a destructured parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterValue {
    pub name: String,
    pub is_rest: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ParameterValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_rest: false,
            default_value: None,
            type_name: None,
            description: None,
        }
    }

    pub fn document(&mut self, tag: &DocTag) {
        self.type_name = tag.type_name.clone();
        self.description = tag.description.clone();
        if self.default_value.is_none() {
            self.default_value = tag.default_value.clone();
        }
    }
}
