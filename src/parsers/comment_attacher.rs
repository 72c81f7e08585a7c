//! Attachment of source comments to syntax tree nodes
//!
//! Comments are attached in a single preorder pass: every comment that ends
//! before a node starts is given to that node, unless an earlier node already
//! took it. A comment in front of `target = value;` belongs to `value`, which is
//! how `module.exports = class { ... }` gets its class documentation.

use crate::models::syntax::{Comment, SyntaxNode};
use std::collections::VecDeque;

/// Attaches a sorted comment list to a syntax tree
pub struct CommentAttacher;

impl CommentAttacher {
    /// Attach `comments` to the nodes of `tree` and return the comments that
    /// follow the last node and found no owner
    pub fn attach(tree: &mut SyntaxNode, mut comments: Vec<Comment>) -> Vec<Comment> {
        // stable, so already sorted input is left as is
        comments.sort_by_key(|comment| comment.span.start);

        let mut queue = VecDeque::from(comments);
        Self::visit(tree, &mut queue);
        queue.into()
    }

    fn visit(node: &mut SyntaxNode, queue: &mut VecDeque<Comment>) {
        if queue.is_empty() {
            return;
        }

        if let Some(start) = node.start() {
            while queue.front().is_some_and(|comment| comment.span.end < start) {
                let Some(comment) = queue.pop_front() else {
                    break;
                };
                match node.assignment_value_mut() {
                    Some(value) => value.comments.push(comment),
                    None => node.comments.push(comment),
                }
            }
        }

        for child in node.children_mut() {
            if queue.is_empty() {
                break;
            }
            Self::visit(child, queue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::syntax::{NodeKind, Span};

    fn ident(name: &str, start: u32) -> SyntaxNode {
        SyntaxNode::new(
            NodeKind::Identifier { name: name.to_string() },
            Span::new(start, start + name.len() as u32),
        )
    }

    fn statement(expression: SyntaxNode) -> SyntaxNode {
        let span = expression.span.unwrap_or(Span::new(0, 0));
        SyntaxNode::new(
            NodeKind::ExpressionStatement {
                expression: Box::new(expression),
            },
            span,
        )
    }

    fn program(body: Vec<SyntaxNode>, end: u32) -> SyntaxNode {
        SyntaxNode::new(NodeKind::Program { body }, Span::new(0, end))
    }

    #[test]
    fn test_comments_go_to_the_next_node() {
        let mut tree = program(vec![statement(ident("a", 10)), statement(ident("b", 30))], 40);
        let comments = vec![
            Comment::block("first", Span::new(0, 8)),
            Comment::line("second", Span::new(15, 25)),
        ];

        let leftover = CommentAttacher::attach(&mut tree, comments);

        assert!(leftover.is_empty());
        let NodeKind::Program { body } = &tree.kind else {
            panic!("expected program");
        };
        assert_eq!(body[0].comments.len(), 1);
        assert_eq!(body[0].comments[0].text, "first");
        assert_eq!(body[1].comments.len(), 1);
        assert_eq!(body[1].comments[0].text, "second");
    }

    #[test]
    fn test_each_comment_is_attached_once() {
        // the statement and its expression share a start offset
        let mut tree = program(vec![statement(ident("value", 20))], 30);
        let comments = vec![
            Comment::block("a", Span::new(0, 5)),
            Comment::block("b", Span::new(6, 12)),
        ];

        let leftover = CommentAttacher::attach(&mut tree, comments);

        assert!(leftover.is_empty());
        assert_eq!(tree.attached_comment_count(), 2);
        let NodeKind::Program { body } = &tree.kind else {
            panic!("expected program");
        };
        assert_eq!(body[0].comments.len(), 2);
        assert!(body[0].children()[0].comments.is_empty());
    }

    #[test]
    fn test_comment_before_assignment_goes_to_value() {
        let assignment = SyntaxNode::new(
            NodeKind::Assignment {
                operator: "=".to_string(),
                left: Box::new(ident("exportsValue", 12)),
                right: Box::new(ident("Thing", 27)),
            },
            Span::new(12, 32),
        );
        let mut tree = program(vec![statement(assignment)], 33);

        CommentAttacher::attach(&mut tree, vec![Comment::block("* docs ", Span::new(0, 11))]);

        let NodeKind::Program { body } = &mut tree.kind else {
            panic!("expected program");
        };
        assert!(body[0].comments.is_empty());
        let value = body[0].assignment_value_mut().unwrap();
        assert_eq!(value.comments.len(), 1);
        assert_eq!(value.comments[0].text, "* docs ");
    }

    #[test]
    fn test_trailing_comments_are_left_over() {
        let mut tree = program(vec![statement(ident("a", 0))], 20);
        let comments = vec![Comment::line("trailing", Span::new(5, 15))];

        let leftover = CommentAttacher::attach(&mut tree, comments);

        assert_eq!(leftover.len(), 1);
        assert_eq!(tree.attached_comment_count(), 0);
    }

    #[test]
    fn test_structural_nodes_do_not_take_comments() {
        let block = SyntaxNode::structural(NodeKind::Block {
            body: vec![ident("inner", 10)],
        });
        let mut tree = program(vec![block], 20);

        CommentAttacher::attach(&mut tree, vec![Comment::block("note", Span::new(1, 8))]);

        let NodeKind::Program { body } = &tree.kind else {
            panic!("expected program");
        };
        assert!(body[0].comments.is_empty());
        assert_eq!(body[0].children()[0].comments.len(), 1);
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let mut tree = program(vec![statement(ident("a", 10)), statement(ident("b", 30))], 40);
        let comments = vec![
            Comment::line("late", Span::new(15, 25)),
            Comment::block("early", Span::new(0, 8)),
        ];

        CommentAttacher::attach(&mut tree, comments);

        let NodeKind::Program { body } = &tree.kind else {
            panic!("expected program");
        };
        assert_eq!(body[0].comments[0].text, "early");
        assert_eq!(body[1].comments[0].text, "late");
    }
}
