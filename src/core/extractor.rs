//! Class, method and parameter extraction
//!
//! Walks an annotated syntax tree and describes every class it defines,
//! merging the structure found in the tree with the `@param` tags of the
//! attached documentation comments. Tags are matched to parameters by name:
//!
//! - a tag naming a plain parameter documents it;
//! - a tag naming a destructured value, directly or as `prefix.value`,
//!   documents that value;
//! - a tag `prefix` whose dotted children name values of a destructured
//!   parameter names and documents the parameter itself.

use crate::models::descriptor::{
    ClassDescriptor, MethodDescriptor, ParameterDescriptor, ParameterShape, ParameterValue,
};
use crate::models::doc::{DocComment, DocTag};
use crate::models::syntax::{MethodKind, NodeKind, SyntaxNode};
use std::path::Path;
use tracing::debug;

/// Name given to classes nothing names
pub const ANONYMOUS_CLASS: &str = "<anonymous>";

/// Name given to methods with a computed key
pub const COMPUTED_METHOD: &str = "<computed>";

/// What the enclosing node knows about a class directly below it
#[derive(Clone, Copy, Default)]
struct Enclosing<'t> {
    name: Option<&'t str>,
    doc: Option<&'t DocComment>,
}

/// Extracts class descriptors from annotated syntax trees
#[derive(Debug, Default, Clone, Copy)]
pub struct ClassAnalyzer;

impl ClassAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Describe the classes of one file in the order they appear
    pub fn analyze(&self, ast: &SyntaxNode, project_root: &Path, file_name: &Path) -> Vec<ClassDescriptor> {
        let mut classes = Vec::new();
        self.visit(ast, Enclosing::default(), &mut classes);

        debug!(
            file = %project_root.join(file_name).display(),
            classes = classes.len(),
            "extracted class descriptors"
        );
        classes
    }

    fn visit<'t>(&self, node: &'t SyntaxNode, enclosing: Enclosing<'t>, classes: &mut Vec<ClassDescriptor>) {
        match &node.kind {
            NodeKind::Class { id, super_class, body } => {
                let name = id
                    .as_deref()
                    .or(enclosing.name)
                    .unwrap_or(ANONYMOUS_CLASS)
                    .to_string();
                classes.push(ClassDescriptor {
                    name,
                    extends: super_class.as_deref().and_then(expression_path),
                    documentation: node.doc_comment().or(enclosing.doc).cloned(),
                    methods: body.iter().filter_map(|member| self.method(member)).collect(),
                });

                for child in node.children() {
                    self.visit(child, Enclosing::default(), classes);
                }
            }
            NodeKind::Export { is_default, declaration } => {
                if let Some(declaration) = declaration {
                    let enclosing = Enclosing {
                        name: is_default.then_some("default"),
                        doc: node.doc_comment().or(enclosing.doc),
                    };
                    self.visit(declaration, enclosing, classes);
                }
            }
            NodeKind::VariableDeclaration { declarations, .. } => {
                let doc = node.doc_comment().or(enclosing.doc);
                for declarator in declarations {
                    let NodeKind::VariableDeclarator { id, init } = &declarator.kind else {
                        self.visit(declarator, Enclosing::default(), classes);
                        continue;
                    };
                    self.visit(id, Enclosing::default(), classes);
                    if let Some(init) = init {
                        let enclosing = Enclosing {
                            name: id.identifier_name(),
                            doc: declarator.doc_comment().or(doc),
                        };
                        self.visit(init, enclosing, classes);
                    }
                }
            }
            NodeKind::ExpressionStatement { expression } => {
                let enclosing = Enclosing {
                    name: None,
                    doc: node.doc_comment(),
                };
                self.visit(expression, enclosing, classes);
            }
            NodeKind::Assignment { left, right, .. } => {
                self.visit(left, Enclosing::default(), classes);
                let enclosing = Enclosing {
                    name: assignment_target_name(left),
                    doc: enclosing.doc,
                };
                self.visit(right, enclosing, classes);
            }
            NodeKind::Property { key, value, .. } => {
                let enclosing = Enclosing {
                    name: key.as_deref(),
                    doc: node.doc_comment(),
                };
                self.visit(value, enclosing, classes);
            }
            _ => {
                for child in node.children() {
                    self.visit(child, Enclosing::default(), classes);
                }
            }
        }
    }

    fn method(&self, member: &SyntaxNode) -> Option<MethodDescriptor> {
        let (key, kind, is_static, function) = match &member.kind {
            NodeKind::MethodDefinition {
                key,
                kind,
                is_static,
                value,
            } => (key, *kind, *is_static, value.as_ref()),
            NodeKind::PropertyDefinition {
                key,
                is_static,
                value: Some(value),
            } if matches!(value.kind, NodeKind::Function { .. }) => {
                (key, MethodKind::Method, *is_static, value.as_ref())
            }
            _ => return None,
        };
        let NodeKind::Function { is_async, params, .. } = &function.kind else {
            return None;
        };

        let documentation = member.doc_comment().or(function.doc_comment()).cloned();
        let mut parameters: Vec<ParameterDescriptor> = params.iter().map(parameter).collect();
        if let Some(doc) = &documentation {
            document_parameters(&mut parameters, doc);
        }

        Some(MethodDescriptor {
            name: key.clone().unwrap_or_else(|| COMPUTED_METHOD.to_string()),
            kind,
            is_static,
            is_async: *is_async,
            parameters,
            documentation,
        })
    }
}

/// Dotted source path of `Base` or `mixins.Base`
fn expression_path(node: &SyntaxNode) -> Option<String> {
    match &node.kind {
        NodeKind::Identifier { name } => Some(name.clone()),
        NodeKind::Member {
            computed: false,
            object,
            property,
        } => {
            let object = expression_path(object)?;
            let property = property.identifier_name()?;
            Some(format!("{}.{}", object, property))
        }
        _ => None,
    }
}

/// `Thing` for both `Thing = ...` and `module.exports.Thing = ...`
fn assignment_target_name(target: &SyntaxNode) -> Option<&str> {
    match &target.kind {
        NodeKind::Identifier { name } => Some(name),
        NodeKind::Member {
            computed: false,
            property,
            ..
        } => property.identifier_name(),
        _ => None,
    }
}

/// Structural description of one parameter node
fn parameter(node: &SyntaxNode) -> ParameterDescriptor {
    match &node.kind {
        NodeKind::Identifier { name } => ParameterDescriptor {
            name: Some(name.clone()),
            ..ParameterDescriptor::new(ParameterShape::Simple)
        },
        NodeKind::AssignmentPattern {
            left, default_text, ..
        } => ParameterDescriptor {
            default_value: Some(default_text.clone()),
            ..parameter(left)
        },
        NodeKind::RestElement { argument } => ParameterDescriptor {
            is_rest: true,
            ..parameter(argument)
        },
        NodeKind::ObjectPattern { properties, rest } => {
            let mut values: Vec<ParameterValue> = properties.iter().filter_map(object_value).collect();
            values.extend(rest.as_deref().and_then(rest_value));
            ParameterDescriptor {
                values,
                ..ParameterDescriptor::new(ParameterShape::Object)
            }
        }
        NodeKind::ArrayPattern { elements, rest } => {
            let mut values: Vec<ParameterValue> = elements.iter().filter_map(binding_value).collect();
            values.extend(rest.as_deref().and_then(rest_value));
            ParameterDescriptor {
                values,
                ..ParameterDescriptor::new(ParameterShape::Array)
            }
        }
        _ => ParameterDescriptor::new(ParameterShape::Simple),
    }
}

fn object_value(property: &SyntaxNode) -> Option<ParameterValue> {
    let NodeKind::Property { key, value, .. } = &property.kind else {
        return None;
    };
    let mut parameter_value = binding_value(value);
    match (key, parameter_value.as_mut()) {
        (Some(key), Some(parameter_value)) => parameter_value.name = key.clone(),
        (Some(key), None) => parameter_value = Some(ParameterValue::new(key.clone())),
        (None, _) => {}
    }
    parameter_value
}

/// Value for a binding that is a name, optionally with a default
fn binding_value(binding: &SyntaxNode) -> Option<ParameterValue> {
    match &binding.kind {
        NodeKind::Identifier { name } => Some(ParameterValue::new(name.clone())),
        NodeKind::AssignmentPattern {
            left, default_text, ..
        } => {
            let mut value = binding_value(left)?;
            value.default_value = Some(default_text.clone());
            Some(value)
        }
        _ => None,
    }
}

fn rest_value(rest: &SyntaxNode) -> Option<ParameterValue> {
    let NodeKind::RestElement { argument } = &rest.kind else {
        return None;
    };
    let mut value = binding_value(argument)?;
    value.is_rest = true;
    Some(value)
}

/// Match the parameter tags of `doc` to `parameters` by name
fn document_parameters(parameters: &mut [ParameterDescriptor], doc: &DocComment) {
    let tags: Vec<&DocTag> = doc.param_tags().collect();
    let mut used_prefixes: Vec<&str> = Vec::new();

    for parameter in parameters.iter_mut() {
        if !parameter.is_destructured() {
            if let Some(tag) = parameter.name.as_deref().and_then(|name| doc.param_tag(name)) {
                parameter.document(tag);
            }
            continue;
        }

        let prefix_tag = tags.iter().copied().find(|tag| {
            let Some(prefix) = tag.name.as_deref() else {
                return false;
            };
            !prefix.contains('.')
                && !used_prefixes.contains(&prefix)
                && parameter
                    .values
                    .iter()
                    .any(|value| doc.param_tag(&format!("{}.{}", prefix, value.name)).is_some())
        });
        let prefix = prefix_tag.and_then(|tag| tag.name.as_deref());
        if let (Some(tag), Some(prefix)) = (prefix_tag, prefix) {
            used_prefixes.push(prefix);
            parameter.name = Some(prefix.to_string());
            parameter.document(tag);
        }

        for value in &mut parameter.values {
            let tag = doc.param_tag(&value.name).or_else(|| {
                prefix.and_then(|prefix| doc.param_tag(&format!("{}.{}", prefix, value.name)))
            });
            if let Some(tag) = tag {
                value.document(tag);
            }
        }
    }
}
