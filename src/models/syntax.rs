//! Owned, typed JavaScript syntax tree
//!
//! The parser lowers the arena-allocated oxc AST into this tree so that it can
//! outlive the allocator, be annotated with comments and be serialized with the
//! rest of the analysis. Every [`NodeKind`] variant declares its child fields,
//! and [`SyntaxNode::children`] / [`SyntaxNode::children_mut`] always yield them
//! in source order.

use super::doc::DocComment;
use serde::{Deserialize, Serialize};

/// Byte offsets of a node or comment inside its file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Slice the covered text out of `source`, or an empty string when the span
    /// does not fit the text
    pub fn source_text<'s>(&self, source: &'s str) -> &'s str {
        source
            .get(self.start as usize..self.end as usize)
            .unwrap_or_default()
    }
}

/// Kind of a source comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentKind {
    /// `// ...`
    Line,
    /// `/* ... */`, including `/** ... */` documentation comments
    Block,
}

/// A comment token taken from the parser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub kind: CommentKind,
    /// Comment body without the `//`, `/*` and `*/` delimiters
    pub text: String,
    pub span: Span,
    /// Parsed documentation; only ever set on block comments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<DocComment>,
}

impl Comment {
    pub fn line(text: impl Into<String>, span: Span) -> Self {
        Self {
            kind: CommentKind::Line,
            text: text.into(),
            span,
            doc: None,
        }
    }

    pub fn block(text: impl Into<String>, span: Span) -> Self {
        Self {
            kind: CommentKind::Block,
            text: text.into(),
            span,
            doc: None,
        }
    }

    pub fn is_block(&self) -> bool {
        self.kind == CommentKind::Block
    }

    /// `/** ... */`
    pub fn is_doc_block(&self) -> bool {
        self.is_block() && self.text.starts_with('*')
    }
}

/// Kind of a class method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Constructor,
    Method,
    Get,
    Set,
}

impl std::fmt::Display for MethodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MethodKind::Constructor => write!(f, "constructor"),
            MethodKind::Method => write!(f, "method"),
            MethodKind::Get => write!(f, "get"),
            MethodKind::Set => write!(f, "set"),
        }
    }
}

/// A node of the syntax tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxNode {
    /// Source offsets; `None` marks a purely structural node that never
    /// receives comments itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    pub kind: NodeKind,
    /// Comments attached by the comment attacher
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
}

/// Node kinds with their child fields
///
/// Only the constructs the documentation extractor looks at get a dedicated
/// variant; every other statement or expression is kept as [`NodeKind::Other`]
/// with its children, so comments nested inside it still find their nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeKind {
    Program {
        body: Vec<SyntaxNode>,
    },
    Block {
        body: Vec<SyntaxNode>,
    },
    ExpressionStatement {
        expression: Box<SyntaxNode>,
    },
    VariableDeclaration {
        kind: String,
        declarations: Vec<SyntaxNode>,
    },
    VariableDeclarator {
        id: Box<SyntaxNode>,
        init: Option<Box<SyntaxNode>>,
    },
    Return {
        argument: Option<Box<SyntaxNode>>,
    },
    If {
        test: Box<SyntaxNode>,
        consequent: Box<SyntaxNode>,
        alternate: Option<Box<SyntaxNode>>,
    },
    Export {
        is_default: bool,
        declaration: Option<Box<SyntaxNode>>,
    },
    Class {
        id: Option<String>,
        super_class: Option<Box<SyntaxNode>>,
        body: Vec<SyntaxNode>,
    },
    MethodDefinition {
        key: Option<String>,
        kind: MethodKind,
        is_static: bool,
        value: Box<SyntaxNode>,
    },
    PropertyDefinition {
        key: Option<String>,
        is_static: bool,
        value: Option<Box<SyntaxNode>>,
    },
    Function {
        id: Option<String>,
        is_async: bool,
        is_generator: bool,
        is_arrow: bool,
        params: Vec<SyntaxNode>,
        body: Vec<SyntaxNode>,
    },
    Assignment {
        operator: String,
        left: Box<SyntaxNode>,
        right: Box<SyntaxNode>,
    },
    Call {
        is_new: bool,
        callee: Box<SyntaxNode>,
        arguments: Vec<SyntaxNode>,
    },
    Member {
        computed: bool,
        object: Box<SyntaxNode>,
        property: Box<SyntaxNode>,
    },
    Identifier {
        name: String,
    },
    StringLiteral {
        value: String,
    },
    Literal {
        raw: String,
    },
    Object {
        properties: Vec<SyntaxNode>,
    },
    Array {
        elements: Vec<SyntaxNode>,
    },
    /// Object literal member or object pattern member; for shorthand members
    /// `value` is the binding itself
    Property {
        key: Option<String>,
        shorthand: bool,
        value: Box<SyntaxNode>,
    },
    Spread {
        argument: Box<SyntaxNode>,
    },
    ObjectPattern {
        properties: Vec<SyntaxNode>,
        rest: Option<Box<SyntaxNode>>,
    },
    /// Array pattern; holes (`[, b]`) are not represented
    ArrayPattern {
        elements: Vec<SyntaxNode>,
        rest: Option<Box<SyntaxNode>>,
    },
    AssignmentPattern {
        left: Box<SyntaxNode>,
        right: Box<SyntaxNode>,
        /// Source text of the default value
        default_text: String,
    },
    RestElement {
        argument: Box<SyntaxNode>,
    },
    Other {
        label: String,
        children: Vec<SyntaxNode>,
    },
}

impl SyntaxNode {
    /// Create a node covering `span`
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self {
            span: Some(span),
            kind,
            comments: Vec::new(),
        }
    }

    /// Create a structural node without source offsets
    pub fn structural(kind: NodeKind) -> Self {
        Self {
            span: None,
            kind,
            comments: Vec::new(),
        }
    }

    /// Start offset, if this node has one
    pub fn start(&self) -> Option<u32> {
        self.span.map(|span| span.start)
    }

    /// Name of an identifier node
    pub fn identifier_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Identifier { name } => Some(name),
            _ => None,
        }
    }

    /// The right-hand side of `target = value;` when this node is such an
    /// expression statement
    pub fn assignment_value_mut(&mut self) -> Option<&mut SyntaxNode> {
        match &mut self.kind {
            NodeKind::ExpressionStatement { expression } => match &mut expression.kind {
                NodeKind::Assignment { right, .. } => Some(right.as_mut()),
                _ => None,
            },
            _ => None,
        }
    }

    /// The documentation of the closest `/** ... */` comment attached to this
    /// node, or of the closest plain block comment when there is none
    pub fn doc_comment(&self) -> Option<&DocComment> {
        let mut blocks = self.comments.iter().rev().filter(|comment| comment.is_block());
        blocks
            .clone()
            .find(|comment| comment.is_doc_block())
            .or_else(|| blocks.next())
            .and_then(|comment| comment.doc.as_ref())
    }

    /// Child nodes in source order
    pub fn children(&self) -> Vec<&SyntaxNode> {
        let mut children: Vec<&SyntaxNode> = Vec::new();
        match &self.kind {
            NodeKind::Program { body } | NodeKind::Block { body } => children.extend(body),
            NodeKind::ExpressionStatement { expression } => children.push(expression.as_ref()),
            NodeKind::VariableDeclaration { declarations, .. } => children.extend(declarations),
            NodeKind::VariableDeclarator { id, init } => {
                children.push(id.as_ref());
                children.extend(init.as_deref());
            }
            NodeKind::Return { argument } => children.extend(argument.as_deref()),
            NodeKind::If { test, consequent, alternate } => {
                children.push(test.as_ref());
                children.push(consequent.as_ref());
                children.extend(alternate.as_deref());
            }
            NodeKind::Export { declaration, .. } => children.extend(declaration.as_deref()),
            NodeKind::Class { super_class, body, .. } => {
                children.extend(super_class.as_deref());
                children.extend(body);
            }
            NodeKind::MethodDefinition { value, .. } => children.push(value.as_ref()),
            NodeKind::PropertyDefinition { value, .. } => children.extend(value.as_deref()),
            NodeKind::Function { params, body, .. } => {
                children.extend(params);
                children.extend(body);
            }
            NodeKind::Assignment { left, right, .. } => {
                children.push(left.as_ref());
                children.push(right.as_ref());
            }
            NodeKind::Call { callee, arguments, .. } => {
                children.push(callee.as_ref());
                children.extend(arguments);
            }
            NodeKind::Member { object, property, .. } => {
                children.push(object.as_ref());
                children.push(property.as_ref());
            }
            NodeKind::Object { properties } => children.extend(properties),
            NodeKind::Array { elements } => children.extend(elements),
            NodeKind::Property { value, .. } => children.push(value.as_ref()),
            NodeKind::Spread { argument } | NodeKind::RestElement { argument } => {
                children.push(argument.as_ref())
            }
            NodeKind::ObjectPattern { properties, rest } => {
                children.extend(properties);
                children.extend(rest.as_deref());
            }
            NodeKind::ArrayPattern { elements, rest } => {
                children.extend(elements);
                children.extend(rest.as_deref());
            }
            NodeKind::AssignmentPattern { left, right, .. } => {
                children.push(left.as_ref());
                children.push(right.as_ref());
            }
            NodeKind::Other { children: nested, .. } => children.extend(nested),
            NodeKind::Identifier { .. } | NodeKind::StringLiteral { .. } | NodeKind::Literal { .. } => {}
        }
        children
    }

    /// Mutable child nodes in source order
    pub fn children_mut(&mut self) -> Vec<&mut SyntaxNode> {
        let mut children: Vec<&mut SyntaxNode> = Vec::new();
        match &mut self.kind {
            NodeKind::Program { body } | NodeKind::Block { body } => children.extend(body),
            NodeKind::ExpressionStatement { expression } => children.push(expression.as_mut()),
            NodeKind::VariableDeclaration { declarations, .. } => children.extend(declarations),
            NodeKind::VariableDeclarator { id, init } => {
                children.push(id.as_mut());
                children.extend(init.as_deref_mut());
            }
            NodeKind::Return { argument } => children.extend(argument.as_deref_mut()),
            NodeKind::If { test, consequent, alternate } => {
                children.push(test.as_mut());
                children.push(consequent.as_mut());
                children.extend(alternate.as_deref_mut());
            }
            NodeKind::Export { declaration, .. } => children.extend(declaration.as_deref_mut()),
            NodeKind::Class { super_class, body, .. } => {
                children.extend(super_class.as_deref_mut());
                children.extend(body);
            }
            NodeKind::MethodDefinition { value, .. } => children.push(value.as_mut()),
            NodeKind::PropertyDefinition { value, .. } => children.extend(value.as_deref_mut()),
            NodeKind::Function { params, body, .. } => {
                children.extend(params);
                children.extend(body);
            }
            NodeKind::Assignment { left, right, .. } => {
                children.push(left.as_mut());
                children.push(right.as_mut());
            }
            NodeKind::Call { callee, arguments, .. } => {
                children.push(callee.as_mut());
                children.extend(arguments);
            }
            NodeKind::Member { object, property, .. } => {
                children.push(object.as_mut());
                children.push(property.as_mut());
            }
            NodeKind::Object { properties } => children.extend(properties),
            NodeKind::Array { elements } => children.extend(elements),
            NodeKind::Property { value, .. } => children.push(value.as_mut()),
            NodeKind::Spread { argument } | NodeKind::RestElement { argument } => {
                children.push(argument.as_mut())
            }
            NodeKind::ObjectPattern { properties, rest } => {
                children.extend(properties);
                children.extend(rest.as_deref_mut());
            }
            NodeKind::ArrayPattern { elements, rest } => {
                children.extend(elements);
                children.extend(rest.as_deref_mut());
            }
            NodeKind::AssignmentPattern { left, right, .. } => {
                children.push(left.as_mut());
                children.push(right.as_mut());
            }
            NodeKind::Other { children: nested, .. } => children.extend(nested),
            NodeKind::Identifier { .. } | NodeKind::StringLiteral { .. } | NodeKind::Literal { .. } => {}
        }
        children
    }

    /// Count the comments attached anywhere in this subtree
    pub fn attached_comment_count(&self) -> usize {
        self.comments.len()
            + self
                .children()
                .into_iter()
                .map(SyntaxNode::attached_comment_count)
                .sum::<usize>()
    }
}
