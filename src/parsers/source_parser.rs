//! JavaScript source parser using OXC
//!
//! Parses a file with `oxc_parser`, lowers the result into an owned
//! [`SyntaxNode`] tree, parses every block comment as documentation and
//! attaches the comments to the tree.

use super::comment_attacher::CommentAttacher;
use super::doc_comment::DocCommentParser;
use super::lowering::TreeLowering;
use crate::core::discovery::decode_source;
use crate::error::{DocwalkError, Result};
use crate::models::syntax::{Comment, Span, SyntaxNode};
use oxc_allocator::Allocator;
use oxc_parser::{ParseOptions, Parser};
use oxc_span::SourceType;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// A parsed file with its comments attached
#[derive(Debug, Clone)]
pub struct ParsedSource {
    pub ast: SyntaxNode,
    /// Parser diagnostics; the tree is the parser's recovered tree when non-empty
    pub parse_errors: Vec<String>,
    /// Comments after the last node, which have no owner
    pub dropped_comments: usize,
}

impl ParsedSource {
    pub fn has_errors(&self) -> bool {
        !self.parse_errors.is_empty()
    }
}

/// Source parser using OXC
pub struct SourceParser {
    parse_options: ParseOptions,
    doc_parser: DocCommentParser,
}

impl SourceParser {
    /// Create a new source parser
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions {
                parse_regular_expression: true,
                ..ParseOptions::default()
            },
            doc_parser: DocCommentParser::new(),
        }
    }

    /// Read and parse a file
    pub fn parse_file(&self, path: &Path) -> Result<ParsedSource> {
        let bytes = fs::read(path).map_err(|e| DocwalkError::file_read_error(path, e))?;
        let source = decode_source(path, bytes);
        Ok(self.parse(&source, path))
    }

    /// Parse `source`; `path` only selects the source type and labels log output
    pub fn parse(&self, source: &str, path: &Path) -> ParsedSource {
        let source_type = SourceType::from_path(path).unwrap_or_default();
        let allocator = Allocator::default();

        let ret = Parser::new(&allocator, source, source_type)
            .with_options(self.parse_options.clone())
            .parse();

        let parse_errors: Vec<String> = ret.errors.iter().map(|e| format!("{}", e)).collect();
        if ret.panicked {
            warn!(path = %path.display(), "parser gave up, analysing an empty program");
        }
        for error in &parse_errors {
            warn!(path = %path.display(), "parse error: {}", error);
        }

        let mut ast = TreeLowering::new(source).lower_program(&ret.program);

        let comments = ret
            .program
            .comments
            .iter()
            .map(|comment| {
                let span = Span::new(comment.span.start, comment.span.end);
                if comment.is_block() {
                    self.block_comment(span, source, path)
                } else {
                    let raw = span.source_text(source);
                    Comment::line(raw.strip_prefix("//").unwrap_or(raw), span)
                }
            })
            .collect();

        let dropped = CommentAttacher::attach(&mut ast, comments);
        debug!(
            path = %path.display(),
            attached = ast.attached_comment_count(),
            dropped = dropped.len(),
            "parsed source"
        );

        ParsedSource {
            ast,
            parse_errors,
            dropped_comments: dropped.len(),
        }
    }

    fn block_comment(&self, span: Span, source: &str, path: &Path) -> Comment {
        let raw = span.source_text(source);
        let text = raw
            .strip_prefix("/*")
            .and_then(|body| body.strip_suffix("*/"))
            .unwrap_or(raw);

        let mut comment = Comment::block(text, span);
        match self.doc_parser.parse(text) {
            Ok(doc) => comment.doc = Some(doc),
            Err(e) => debug!(
                path = %path.display(),
                offset = span.start,
                "ignoring malformed documentation comment: {}",
                e
            ),
        }
        comment
    }
}

impl Default for SourceParser {
    fn default() -> Self {
        Self::new()
    }
}
