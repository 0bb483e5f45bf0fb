//! # Core Interpreter Definitions
//!
//! This module defines the [`Interpreter`] interface and the error types that
//! form the foundation of the interpreter chain.

use std::fmt;

use thiserror::Error;

use super::{parser::ParsingContext, stream::TokenStream};
use crate::ast::{Node, NodeError};

/// A unit that recognizes one markup construct and turns it into a node.
///
/// Interpreters are stateless and reusable. The [`Parser`](super::Parser)
/// keeps them ordered by descending [`priority`](Interpreter::priority) and, at
/// every position, dispatches to the first one whose
/// [`can_start`](Interpreter::can_start) answers `true`.
pub trait Interpreter: fmt::Debug + Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Whether this interpreter can start at the stream's current position.
    ///
    /// Look-ahead only: the stream is borrowed immutably and never advanced.
    fn can_start(&self, stream: &TokenStream) -> bool;

    /// Consumes the construct starting at the current position.
    ///
    /// Only called after [`can_start`](Interpreter::can_start) returned `true`.
    /// Must advance the stream by at least one token and return exactly one
    /// node. Nested content is parsed through `context`.
    fn consume(&self, stream: &mut TokenStream, context: &ParsingContext<'_>)
        -> ParseResult<Node>;

    /// Dispatch priority; higher runs first.
    fn priority(&self) -> i32;
}

/// Error type for parsing operations.
///
/// Unrecognized markup is never an error: tokens no interpreter wants are
/// skipped. Errors are reserved for resource limits and interpreter bugs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Nesting went deeper than the configured maximum
    #[error("Nesting depth limit of {limit} exceeded at token {position}")]
    DepthExceeded { limit: usize, position: usize },
    /// An interpreter built an invalid node
    #[error("Node error: {0}")]
    Node(#[from] NodeError),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
