//! # markup-sdk: Extensible Markup Processing
//!
//! markup-sdk turns lightweight markup into an abstract syntax tree and
//! renders that tree to HTML. The reference syntax is a small markdown subset
//! (headings, bullet lists, bold spans, plain text), and every stage is open
//! to extension.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source Text → Tokenizer → TokenStream → Parser (interpreter chain) → Node tree → HTML
//! ```
//!
//! ### Stage 1: Tokenization
//!
//! The [`tokenizer`] module splits raw text into a flat sequence of tokens.
//! Registered matchers recognize markers; anything they skip is collected
//! into text tokens, so the token values always join back into the input.
//!
//! ### Stage 2: Parsing
//!
//! The [`analyzer`] module walks a [`TokenStream`](analyzer::TokenStream)
//! with a chain of [`Interpreter`](analyzer::Interpreter)s ordered by
//! priority. The first interpreter that can start at a position consumes the
//! construct there; tokens nobody claims are skipped. Parsing never fails on
//! malformed markup.
//!
//! ### Stage 3: Rendering
//!
//! The [`ast`] module holds the node model. Each node renders itself and its
//! children through [`Node::to_html`], escaping all text content.
//!
//! ## Coordination
//!
//! [`Markup`] wires a tokenizer and a parser together, optionally from a
//! [`config::MarkupConfig`]. [`to_html`] is the one-call shortcut for the
//! default markdown preset.
//!
//! ```
//! let html = markup_sdk::to_html("# Hello **World**\n").unwrap();
//! assert_eq!(html, "<h1>Hello <strong>World</strong></h1>\n");
//! ```
//!
//! ## Extending
//!
//! New syntax plugs in at three points: a token matcher for a new
//! [`TokenKind::Custom`](tokenizer::TokenKind::Custom) kind, an interpreter
//! for the construct, and if needed a [`NodeSpec`](ast::NodeSpec) for a new
//! node type with its own attribute schema and rendering.

pub mod analyzer;
pub mod ast;
pub mod config;
pub mod error;
pub mod markup;
pub mod tokenizer;

// Re-exports
pub use ast::{Node, NodeError, NodeKind, NodeType};
pub use error::*;
pub use markup::Markup;

/// Renders `input` with the default markdown preset.
pub fn to_html(input: &str) -> MarkupResult<String> {
    Markup::default().to_html(input)
}
