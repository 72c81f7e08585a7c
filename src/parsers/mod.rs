//! Parsing functionality for JavaScript sources
//!
//! This module turns source text into a syntax tree annotated with its
//! documentation comments: the OXC-backed source parser, the lowering into the
//! owned tree, the documentation comment parser and the comment attacher.

pub mod comment_attacher;
pub mod doc_comment;
pub mod lowering;
pub mod source_parser;

pub use comment_attacher::CommentAttacher;
pub use doc_comment::{DocCommentError, DocCommentParser};
pub use lowering::TreeLowering;
pub use source_parser::{ParsedSource, SourceParser};
