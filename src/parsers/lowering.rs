//! Lowering of the oxc AST into the owned syntax tree
//!
//! The oxc AST lives in an arena that is dropped as soon as a file has been
//! parsed. [`TreeLowering`] walks it once and builds a [`SyntaxNode`] tree that
//! keeps the constructs the extractor needs and, for everything else, the
//! spans and children the comment attacher needs.

use crate::models::syntax::{MethodKind, NodeKind, Span, SyntaxNode};
use oxc_ast::ast::*;
use oxc_span::GetSpan;

fn span_of(span: oxc_span::Span) -> Span {
    Span::new(span.start, span.end)
}

/// Converts one parsed program into a [`SyntaxNode`] tree
pub struct TreeLowering<'s> {
    source: &'s str,
}

impl<'s> TreeLowering<'s> {
    /// `source` must be the text the program was parsed from
    pub fn new(source: &'s str) -> Self {
        Self { source }
    }

    pub fn lower_program(&self, program: &Program<'_>) -> SyntaxNode {
        let mut body = self.lower_directives(&program.directives);
        body.extend(program.body.iter().map(|stmt| self.lower_statement(stmt)));

        SyntaxNode::new(NodeKind::Program { body }, span_of(program.span))
    }

    fn lower_directives(&self, directives: &[Directive<'_>]) -> Vec<SyntaxNode> {
        directives
            .iter()
            .map(|directive| self.other("Directive", directive.span, Vec::new()))
            .collect()
    }

    fn lower_statements(&self, statements: &[Statement<'_>]) -> Vec<SyntaxNode> {
        statements.iter().map(|stmt| self.lower_statement(stmt)).collect()
    }

    fn lower_statement(&self, stmt: &Statement<'_>) -> SyntaxNode {
        match stmt {
            Statement::BlockStatement(block) => self.lower_block(block),
            Statement::ExpressionStatement(expr_stmt) => SyntaxNode::new(
                NodeKind::ExpressionStatement {
                    expression: Box::new(self.lower_expression(&expr_stmt.expression)),
                },
                span_of(expr_stmt.span),
            ),
            Statement::VariableDeclaration(var_decl) => self.lower_variable_declaration(var_decl),
            Statement::FunctionDeclaration(func) => self.lower_function(func),
            Statement::ClassDeclaration(class) => self.lower_class(class),
            Statement::ReturnStatement(ret) => SyntaxNode::new(
                NodeKind::Return {
                    argument: ret
                        .argument
                        .as_ref()
                        .map(|arg| Box::new(self.lower_expression(arg))),
                },
                span_of(ret.span),
            ),
            Statement::IfStatement(if_stmt) => SyntaxNode::new(
                NodeKind::If {
                    test: Box::new(self.lower_expression(&if_stmt.test)),
                    consequent: Box::new(self.lower_statement(&if_stmt.consequent)),
                    alternate: if_stmt
                        .alternate
                        .as_ref()
                        .map(|alt| Box::new(self.lower_statement(alt))),
                },
                span_of(if_stmt.span),
            ),
            Statement::ExportNamedDeclaration(decl) => SyntaxNode::new(
                NodeKind::Export {
                    is_default: false,
                    declaration: decl
                        .declaration
                        .as_ref()
                        .map(|declaration| Box::new(self.lower_declaration(declaration))),
                },
                span_of(decl.span),
            ),
            Statement::ExportDefaultDeclaration(decl) => {
                let declaration = match &decl.declaration {
                    ExportDefaultDeclarationKind::FunctionDeclaration(func) => self.lower_function(func),
                    ExportDefaultDeclarationKind::ClassDeclaration(class) => self.lower_class(class),
                    other => match other.as_expression() {
                        Some(expr) => self.lower_expression(expr),
                        None => self.other("TypeDeclaration", other.span(), Vec::new()),
                    },
                };
                SyntaxNode::new(
                    NodeKind::Export {
                        is_default: true,
                        declaration: Some(Box::new(declaration)),
                    },
                    span_of(decl.span),
                )
            }
            Statement::ThrowStatement(throw) => self.other(
                "ThrowStatement",
                throw.span,
                vec![self.lower_expression(&throw.argument)],
            ),
            Statement::TryStatement(try_stmt) => {
                let mut children = vec![self.lower_block(&try_stmt.block)];
                if let Some(handler) = &try_stmt.handler {
                    children.push(self.other(
                        "CatchClause",
                        handler.span,
                        vec![self.lower_block(&handler.body)],
                    ));
                }
                if let Some(finalizer) = &try_stmt.finalizer {
                    children.push(self.lower_block(finalizer));
                }
                self.other("TryStatement", try_stmt.span, children)
            }
            Statement::ForStatement(for_stmt) => {
                let mut children = Vec::new();
                if let Some(init) = &for_stmt.init {
                    match init {
                        ForStatementInit::VariableDeclaration(var_decl) => {
                            children.push(self.lower_variable_declaration(var_decl))
                        }
                        other => children.extend(other.as_expression().map(|e| self.lower_expression(e))),
                    }
                }
                children.extend(for_stmt.test.as_ref().map(|e| self.lower_expression(e)));
                children.extend(for_stmt.update.as_ref().map(|e| self.lower_expression(e)));
                children.push(self.lower_statement(&for_stmt.body));
                self.other("ForStatement", for_stmt.span, children)
            }
            Statement::ForInStatement(for_in) => self.other(
                "ForInStatement",
                for_in.span,
                vec![
                    self.lower_expression(&for_in.right),
                    self.lower_statement(&for_in.body),
                ],
            ),
            Statement::ForOfStatement(for_of) => self.other(
                "ForOfStatement",
                for_of.span,
                vec![
                    self.lower_expression(&for_of.right),
                    self.lower_statement(&for_of.body),
                ],
            ),
            Statement::WhileStatement(while_stmt) => self.other(
                "WhileStatement",
                while_stmt.span,
                vec![
                    self.lower_expression(&while_stmt.test),
                    self.lower_statement(&while_stmt.body),
                ],
            ),
            Statement::DoWhileStatement(do_while) => self.other(
                "DoWhileStatement",
                do_while.span,
                vec![
                    self.lower_statement(&do_while.body),
                    self.lower_expression(&do_while.test),
                ],
            ),
            Statement::SwitchStatement(switch) => {
                let mut children = vec![self.lower_expression(&switch.discriminant)];
                for case in &switch.cases {
                    let mut case_children = Vec::new();
                    case_children.extend(case.test.as_ref().map(|e| self.lower_expression(e)));
                    case_children.extend(self.lower_statements(&case.consequent));
                    children.push(self.other("SwitchCase", case.span, case_children));
                }
                self.other("SwitchStatement", switch.span, children)
            }
            Statement::LabeledStatement(labeled) => self.other(
                "LabeledStatement",
                labeled.span,
                vec![self.lower_statement(&labeled.body)],
            ),
            Statement::WithStatement(with) => self.other(
                "WithStatement",
                with.span,
                vec![
                    self.lower_expression(&with.object),
                    self.lower_statement(&with.body),
                ],
            ),
            other => self.other("Statement", other.span(), Vec::new()),
        }
    }

    fn lower_block(&self, block: &BlockStatement<'_>) -> SyntaxNode {
        SyntaxNode::new(
            NodeKind::Block {
                body: self.lower_statements(&block.body),
            },
            span_of(block.span),
        )
    }

    fn lower_declaration(&self, declaration: &Declaration<'_>) -> SyntaxNode {
        match declaration {
            Declaration::VariableDeclaration(var_decl) => self.lower_variable_declaration(var_decl),
            Declaration::FunctionDeclaration(func) => self.lower_function(func),
            Declaration::ClassDeclaration(class) => self.lower_class(class),
            other => self.other("TypeDeclaration", other.span(), Vec::new()),
        }
    }

    fn lower_variable_declaration(&self, var_decl: &VariableDeclaration<'_>) -> SyntaxNode {
        let declarations = var_decl
            .declarations
            .iter()
            .map(|declarator| {
                SyntaxNode::new(
                    NodeKind::VariableDeclarator {
                        id: Box::new(self.lower_binding_pattern(&declarator.id)),
                        init: declarator
                            .init
                            .as_ref()
                            .map(|init| Box::new(self.lower_expression(init))),
                    },
                    span_of(declarator.span),
                )
            })
            .collect();

        SyntaxNode::new(
            NodeKind::VariableDeclaration {
                kind: var_decl.kind.as_str().to_string(),
                declarations,
            },
            span_of(var_decl.span),
        )
    }

    fn lower_class(&self, class: &Class<'_>) -> SyntaxNode {
        let body = class
            .body
            .body
            .iter()
            .map(|element| self.lower_class_element(element))
            .collect();

        SyntaxNode::new(
            NodeKind::Class {
                id: class.id.as_ref().map(|id| id.name.to_string()),
                super_class: class
                    .super_class
                    .as_ref()
                    .map(|expr| Box::new(self.lower_expression(expr))),
                body,
            },
            span_of(class.span),
        )
    }

    fn lower_class_element(&self, element: &ClassElement<'_>) -> SyntaxNode {
        match element {
            ClassElement::MethodDefinition(method) => {
                let kind = match method.kind {
                    MethodDefinitionKind::Constructor => MethodKind::Constructor,
                    MethodDefinitionKind::Method => MethodKind::Method,
                    MethodDefinitionKind::Get => MethodKind::Get,
                    MethodDefinitionKind::Set => MethodKind::Set,
                };
                SyntaxNode::new(
                    NodeKind::MethodDefinition {
                        key: property_key_name(&method.key),
                        kind,
                        is_static: method.r#static,
                        value: Box::new(self.lower_function(&method.value)),
                    },
                    span_of(method.span),
                )
            }
            ClassElement::PropertyDefinition(property) => SyntaxNode::new(
                NodeKind::PropertyDefinition {
                    key: property_key_name(&property.key),
                    is_static: property.r#static,
                    value: property
                        .value
                        .as_ref()
                        .map(|value| Box::new(self.lower_expression(value))),
                },
                span_of(property.span),
            ),
            ClassElement::StaticBlock(block) => {
                self.other("StaticBlock", block.span, self.lower_statements(&block.body))
            }
            other => self.other("ClassElement", other.span(), Vec::new()),
        }
    }

    fn lower_function(&self, func: &Function<'_>) -> SyntaxNode {
        let body = func
            .body
            .as_ref()
            .map(|body| self.lower_function_body(body))
            .unwrap_or_default();

        SyntaxNode::new(
            NodeKind::Function {
                id: func.id.as_ref().map(|id| id.name.to_string()),
                is_async: func.r#async,
                is_generator: func.generator,
                is_arrow: false,
                params: self.lower_params(&func.params),
                body,
            },
            span_of(func.span),
        )
    }

    fn lower_arrow(&self, arrow: &ArrowFunctionExpression<'_>) -> SyntaxNode {
        SyntaxNode::new(
            NodeKind::Function {
                id: None,
                is_async: arrow.r#async,
                is_generator: false,
                is_arrow: true,
                params: self.lower_params(&arrow.params),
                body: self.lower_function_body(&arrow.body),
            },
            span_of(arrow.span),
        )
    }

    fn lower_function_body(&self, body: &FunctionBody<'_>) -> Vec<SyntaxNode> {
        let mut statements = self.lower_directives(&body.directives);
        statements.extend(self.lower_statements(&body.statements));
        statements
    }

    fn lower_params(&self, params: &FormalParameters<'_>) -> Vec<SyntaxNode> {
        let mut lowered: Vec<SyntaxNode> = params
            .items
            .iter()
            .map(|param| self.lower_binding_pattern(&param.pattern))
            .collect();
        lowered.extend(params.rest.as_ref().map(|rest| self.lower_rest(rest)));
        lowered
    }

    fn lower_rest(&self, rest: &BindingRestElement<'_>) -> SyntaxNode {
        SyntaxNode::new(
            NodeKind::RestElement {
                argument: Box::new(self.lower_binding_pattern(&rest.argument)),
            },
            span_of(rest.span),
        )
    }

    fn lower_binding_pattern(&self, pattern: &BindingPattern<'_>) -> SyntaxNode {
        match &pattern.kind {
            BindingPatternKind::BindingIdentifier(id) => SyntaxNode::new(
                NodeKind::Identifier {
                    name: id.name.to_string(),
                },
                span_of(id.span),
            ),
            BindingPatternKind::ObjectPattern(object) => {
                let properties = object
                    .properties
                    .iter()
                    .map(|property| {
                        SyntaxNode::new(
                            NodeKind::Property {
                                key: if property.computed {
                                    None
                                } else {
                                    property_key_name(&property.key)
                                },
                                shorthand: property.shorthand,
                                value: Box::new(self.lower_binding_pattern(&property.value)),
                            },
                            span_of(property.span),
                        )
                    })
                    .collect();

                SyntaxNode::new(
                    NodeKind::ObjectPattern {
                        properties,
                        rest: object.rest.as_ref().map(|rest| Box::new(self.lower_rest(rest))),
                    },
                    span_of(object.span),
                )
            }
            BindingPatternKind::ArrayPattern(array) => SyntaxNode::new(
                NodeKind::ArrayPattern {
                    elements: array
                        .elements
                        .iter()
                        .flatten()
                        .map(|element| self.lower_binding_pattern(element))
                        .collect(),
                    rest: array.rest.as_ref().map(|rest| Box::new(self.lower_rest(rest))),
                },
                span_of(array.span),
            ),
            BindingPatternKind::AssignmentPattern(assignment) => SyntaxNode::new(
                NodeKind::AssignmentPattern {
                    left: Box::new(self.lower_binding_pattern(&assignment.left)),
                    right: Box::new(self.lower_expression(&assignment.right)),
                    default_text: span_of(assignment.right.span())
                        .source_text(self.source)
                        .to_string(),
                },
                span_of(assignment.span),
            ),
        }
    }

    fn lower_expression(&self, expr: &Expression<'_>) -> SyntaxNode {
        match expr {
            Expression::Identifier(id) => SyntaxNode::new(
                NodeKind::Identifier {
                    name: id.name.to_string(),
                },
                span_of(id.span),
            ),
            Expression::StringLiteral(lit) => SyntaxNode::new(
                NodeKind::StringLiteral {
                    value: lit.value.to_string(),
                },
                span_of(lit.span),
            ),
            Expression::BooleanLiteral(_)
            | Expression::NullLiteral(_)
            | Expression::NumericLiteral(_)
            | Expression::BigIntLiteral(_)
            | Expression::RegExpLiteral(_) => self.literal(expr.span()),
            Expression::TemplateLiteral(template) => self.other(
                "TemplateLiteral",
                template.span,
                template
                    .expressions
                    .iter()
                    .map(|e| self.lower_expression(e))
                    .collect(),
            ),
            Expression::ClassExpression(class) => self.lower_class(class),
            Expression::FunctionExpression(func) => self.lower_function(func),
            Expression::ArrowFunctionExpression(arrow) => self.lower_arrow(arrow),
            Expression::AssignmentExpression(assign) => SyntaxNode::new(
                NodeKind::Assignment {
                    operator: assign.operator.as_str().to_string(),
                    left: Box::new(self.lower_assignment_target(&assign.left)),
                    right: Box::new(self.lower_expression(&assign.right)),
                },
                span_of(assign.span),
            ),
            Expression::CallExpression(call) => SyntaxNode::new(
                NodeKind::Call {
                    is_new: false,
                    callee: Box::new(self.lower_expression(&call.callee)),
                    arguments: self.lower_arguments(&call.arguments),
                },
                span_of(call.span),
            ),
            Expression::NewExpression(new) => SyntaxNode::new(
                NodeKind::Call {
                    is_new: true,
                    callee: Box::new(self.lower_expression(&new.callee)),
                    arguments: self.lower_arguments(&new.arguments),
                },
                span_of(new.span),
            ),
            Expression::ObjectExpression(object) => SyntaxNode::new(
                NodeKind::Object {
                    properties: object
                        .properties
                        .iter()
                        .map(|property| self.lower_object_property(property))
                        .collect(),
                },
                span_of(object.span),
            ),
            Expression::ArrayExpression(array) => SyntaxNode::new(
                NodeKind::Array {
                    elements: array
                        .elements
                        .iter()
                        .filter_map(|element| match element {
                            ArrayExpressionElement::SpreadElement(spread) => Some(self.lower_spread(spread)),
                            ArrayExpressionElement::Elision(_) => None,
                            other => other.as_expression().map(|e| self.lower_expression(e)),
                        })
                        .collect(),
                },
                span_of(array.span),
            ),
            Expression::StaticMemberExpression(member) => {
                self.lower_static_member(member)
            }
            Expression::ComputedMemberExpression(member) => SyntaxNode::new(
                NodeKind::Member {
                    computed: true,
                    object: Box::new(self.lower_expression(&member.object)),
                    property: Box::new(self.lower_expression(&member.expression)),
                },
                span_of(member.span),
            ),
            Expression::PrivateFieldExpression(member) => SyntaxNode::new(
                NodeKind::Member {
                    computed: false,
                    object: Box::new(self.lower_expression(&member.object)),
                    property: Box::new(SyntaxNode::new(
                        NodeKind::Identifier {
                            name: format!("#{}", member.field.name),
                        },
                        span_of(member.field.span),
                    )),
                },
                span_of(member.span),
            ),
            Expression::ParenthesizedExpression(paren) => self.lower_expression(&paren.expression),
            Expression::SequenceExpression(sequence) => self.other(
                "SequenceExpression",
                sequence.span,
                sequence
                    .expressions
                    .iter()
                    .map(|e| self.lower_expression(e))
                    .collect(),
            ),
            Expression::BinaryExpression(binary) => self.other(
                "BinaryExpression",
                binary.span,
                vec![
                    self.lower_expression(&binary.left),
                    self.lower_expression(&binary.right),
                ],
            ),
            Expression::LogicalExpression(logical) => self.other(
                "LogicalExpression",
                logical.span,
                vec![
                    self.lower_expression(&logical.left),
                    self.lower_expression(&logical.right),
                ],
            ),
            Expression::ConditionalExpression(conditional) => self.other(
                "ConditionalExpression",
                conditional.span,
                vec![
                    self.lower_expression(&conditional.test),
                    self.lower_expression(&conditional.consequent),
                    self.lower_expression(&conditional.alternate),
                ],
            ),
            Expression::UnaryExpression(unary) => self.other(
                "UnaryExpression",
                unary.span,
                vec![self.lower_expression(&unary.argument)],
            ),
            Expression::AwaitExpression(await_expr) => self.other(
                "AwaitExpression",
                await_expr.span,
                vec![self.lower_expression(&await_expr.argument)],
            ),
            Expression::YieldExpression(yield_expr) => self.other(
                "YieldExpression",
                yield_expr.span,
                yield_expr
                    .argument
                    .iter()
                    .map(|e| self.lower_expression(e))
                    .collect(),
            ),
            Expression::TaggedTemplateExpression(tagged) => self.other(
                "TaggedTemplateExpression",
                tagged.span,
                vec![self.lower_expression(&tagged.tag)],
            ),
            Expression::ChainExpression(chain) => {
                let children = match &chain.expression {
                    ChainElement::CallExpression(call) => vec![SyntaxNode::new(
                        NodeKind::Call {
                            is_new: false,
                            callee: Box::new(self.lower_expression(&call.callee)),
                            arguments: self.lower_arguments(&call.arguments),
                        },
                        span_of(call.span),
                    )],
                    ChainElement::StaticMemberExpression(member) => vec![self.lower_static_member(member)],
                    _ => Vec::new(),
                };
                self.other("ChainExpression", chain.span, children)
            }
            other => self.other("Expression", other.span(), Vec::new()),
        }
    }

    fn lower_static_member(&self, member: &StaticMemberExpression<'_>) -> SyntaxNode {
        SyntaxNode::new(
            NodeKind::Member {
                computed: false,
                object: Box::new(self.lower_expression(&member.object)),
                property: Box::new(SyntaxNode::new(
                    NodeKind::Identifier {
                        name: member.property.name.to_string(),
                    },
                    span_of(member.property.span),
                )),
            },
            span_of(member.span),
        )
    }

    fn lower_assignment_target(&self, target: &AssignmentTarget<'_>) -> SyntaxNode {
        match target {
            AssignmentTarget::AssignmentTargetIdentifier(id) => SyntaxNode::new(
                NodeKind::Identifier {
                    name: id.name.to_string(),
                },
                span_of(id.span),
            ),
            AssignmentTarget::StaticMemberExpression(member) => self.lower_static_member(member),
            AssignmentTarget::ComputedMemberExpression(member) => SyntaxNode::new(
                NodeKind::Member {
                    computed: true,
                    object: Box::new(self.lower_expression(&member.object)),
                    property: Box::new(self.lower_expression(&member.expression)),
                },
                span_of(member.span),
            ),
            other => self.other("AssignmentTarget", other.span(), Vec::new()),
        }
    }

    fn lower_arguments(&self, arguments: &[Argument<'_>]) -> Vec<SyntaxNode> {
        arguments
            .iter()
            .filter_map(|argument| match argument {
                Argument::SpreadElement(spread) => Some(self.lower_spread(spread)),
                other => other.as_expression().map(|e| self.lower_expression(e)),
            })
            .collect()
    }

    fn lower_spread(&self, spread: &SpreadElement<'_>) -> SyntaxNode {
        SyntaxNode::new(
            NodeKind::Spread {
                argument: Box::new(self.lower_expression(&spread.argument)),
            },
            span_of(spread.span),
        )
    }

    fn lower_object_property(&self, property: &ObjectPropertyKind<'_>) -> SyntaxNode {
        match property {
            ObjectPropertyKind::ObjectProperty(property) => SyntaxNode::new(
                NodeKind::Property {
                    key: if property.computed {
                        None
                    } else {
                        property_key_name(&property.key)
                    },
                    shorthand: property.shorthand,
                    value: Box::new(self.lower_expression(&property.value)),
                },
                span_of(property.span),
            ),
            ObjectPropertyKind::SpreadProperty(spread) => self.lower_spread(spread),
        }
    }

    fn literal(&self, span: oxc_span::Span) -> SyntaxNode {
        SyntaxNode::new(
            NodeKind::Literal {
                raw: span_of(span).source_text(self.source).to_string(),
            },
            span_of(span),
        )
    }

    fn other(&self, label: &str, span: oxc_span::Span, children: Vec<SyntaxNode>) -> SyntaxNode {
        SyntaxNode::new(
            NodeKind::Other {
                label: label.to_string(),
                children,
            },
            span_of(span),
        )
    }
}

/// Static name of a property key; `#name` for private keys
fn property_key_name(key: &PropertyKey<'_>) -> Option<String> {
    match key {
        PropertyKey::PrivateIdentifier(id) => Some(format!("#{}", id.name)),
        other => other.static_name().map(|name| name.to_string()),
    }
}
