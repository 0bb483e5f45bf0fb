//! # Interpreter-Chain Parser
//!
//! The [`Parser`] owns a registry of [`Interpreter`]s sorted by descending
//! priority and drives them over a [`TokenStream`] to build a document tree.
//!
//! ## Dispatch
//!
//! [`Parser::parse_step`] walks the registry in order and hands the stream to
//! the first interpreter whose `can_start` accepts the current position. When
//! nobody accepts, it returns `None` without touching the stream.
//!
//! ## Recursion
//!
//! Interpreters that own a delimited region (a heading line, a bold span, a
//! list item) parse their content by calling back into the parser through the
//! [`ParsingContext`] they receive. Each such call runs one level deeper; the
//! context refuses to go past [`ParserConfig::max_depth`].
//!
//! ## Termination
//!
//! Every loop that drives dispatch skips exactly one token whenever dispatch
//! yields nothing, so parsing always terminates and stray markers are dropped.

use std::cmp::Reverse;

use tracing::{debug, trace, warn};

use super::{
    core::{Interpreter, ParseError, ParseResult},
    stream::TokenStream,
};
use crate::{ast::Node, config::ParserConfig, tokenizer::Token};

#[derive(Debug, Default)]
pub struct Parser {
    interpreters: Vec<Box<dyn Interpreter>>,
    config: ParserConfig,
}

impl Parser {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            interpreters: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Adds an interpreter and re-sorts the registry by descending priority.
    ///
    /// The sort is stable: among equal priorities, earlier registrations run first.
    pub fn register<I>(&mut self, interpreter: I)
    where
        I: Interpreter + 'static,
    {
        self.register_boxed(Box::new(interpreter));
    }

    pub fn register_boxed(&mut self, interpreter: Box<dyn Interpreter>) {
        debug!(
            name = interpreter.name(),
            priority = interpreter.priority(),
            "registered interpreter"
        );
        self.interpreters.push(interpreter);
        self.interpreters
            .sort_by_key(|interpreter| Reverse(interpreter.priority()));
    }

    pub fn register_interpreters<I>(&mut self, interpreters: I)
    where
        I: IntoIterator<Item = Box<dyn Interpreter>>,
    {
        for interpreter in interpreters {
            self.register_boxed(interpreter);
        }
    }

    /// Registered interpreters in dispatch order.
    pub fn interpreters(&self) -> impl Iterator<Item = &dyn Interpreter> {
        self.interpreters.iter().map(|interpreter| interpreter.as_ref())
    }

    pub fn interpreter_names(&self) -> Vec<&'static str> {
        self.interpreters().map(|interpreter| interpreter.name()).collect()
    }

    /// Root context for driving dispatch by hand.
    pub fn context(&self) -> ParsingContext<'_> {
        ParsingContext::new(self)
    }

    /// Parses the whole stream into a document node.
    ///
    /// Tokens at which no interpreter can start are skipped one at a time.
    #[tracing::instrument(level = "debug", skip_all, fields(tokens = stream.len()))]
    pub fn parse(&self, stream: &mut TokenStream) -> ParseResult<Node> {
        let context = self.context();
        let mut document = Node::document();

        while !stream.is_end() {
            match self.parse_step(stream, &context)? {
                Some(node) => document.add_child(node)?,
                None => skip_token(stream),
            }
        }

        debug!(children = document.children().len(), "parsed document");
        Ok(document)
    }

    pub fn parse_tokens(&self, tokens: Vec<Token>) -> ParseResult<Node> {
        self.parse(&mut TokenStream::new(tokens))
    }

    /// Parses one node at the current position with the first interpreter
    /// that can start there.
    ///
    /// Returns `None`, leaving the stream untouched, when no interpreter can.
    pub fn parse_step(
        &self,
        stream: &mut TokenStream,
        context: &ParsingContext<'_>,
    ) -> ParseResult<Option<Node>> {
        let Some(interpreter) = self
            .interpreters
            .iter()
            .find(|interpreter| interpreter.can_start(stream))
        else {
            return Ok(None);
        };

        let start = stream.position();
        let nested = context.descend(start)?;
        trace!(
            interpreter = interpreter.name(),
            position = start,
            depth = nested.depth(),
            "dispatching"
        );

        let node = interpreter.consume(stream, &nested)?;
        if stream.position() == start {
            warn!(
                interpreter = interpreter.name(),
                position = start,
                "interpreter consumed no tokens, forcing progress"
            );
            stream.advance();
        }
        Ok(Some(node))
    }
}

/// The parser and nesting depth seen by an interpreter while it consumes.
///
/// Interpreters use it to parse nested content without re-implementing the
/// dispatch loop.
#[derive(Debug, Clone, Copy)]
pub struct ParsingContext<'p> {
    parser: &'p Parser,
    depth: usize,
}

impl<'p> ParsingContext<'p> {
    pub fn new(parser: &'p Parser) -> Self {
        Self { parser, depth: 0 }
    }

    pub fn parser(&self) -> &'p Parser {
        self.parser
    }

    /// Number of interpreters currently consuming above this point.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Parses the next node from the current position, if any interpreter can.
    pub fn parse_next(&self, stream: &mut TokenStream) -> ParseResult<Option<Node>> {
        self.parser.parse_step(stream, self)
    }

    /// Parses nodes until the stream ends or `stop` accepts the position.
    ///
    /// A token at which no interpreter can start is skipped. The token that
    /// satisfied `stop` is left in the stream.
    pub fn parse_until<F>(&self, stream: &mut TokenStream, stop: F) -> ParseResult<Vec<Node>>
    where
        F: Fn(&TokenStream) -> bool,
    {
        let mut nodes = Vec::new();
        while !stream.is_end() && !stop(stream) {
            match self.parse_next(stream)? {
                Some(node) => nodes.push(node),
                None => skip_token(stream),
            }
        }
        Ok(nodes)
    }

    fn descend(&self, position: usize) -> ParseResult<ParsingContext<'p>> {
        let limit = self.parser.config.max_depth;
        if self.depth >= limit {
            warn!(limit, position, "nesting depth limit exceeded");
            return Err(ParseError::DepthExceeded { limit, position });
        }
        Ok(Self {
            parser: self.parser,
            depth: self.depth + 1,
        })
    }
}

fn skip_token(stream: &mut TokenStream) {
    if let Some(token) = stream.current() {
        debug!(
            position = stream.position(),
            kind = %token.kind(),
            "no interpreter matched, skipping token"
        );
    }
    stream.advance();
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        analyzer::interpreters::{
            BoldInterpreter, HeadingInterpreter, ListInterpreter, TextInterpreter,
        },
        tokenizer::TokenKind,
    };

    fn sym(kind: TokenKind) -> Token {
        Token::symbol(kind)
    }

    #[test]
    fn test_registry_sorted_by_priority_with_stable_ties() {
        let mut parser = Parser::default();
        parser.register(TextInterpreter::default());
        parser.register(BoldInterpreter);
        parser.register(ListInterpreter);
        parser.register(HeadingInterpreter);

        assert_eq!(
            parser.interpreter_names(),
            vec!["list", "heading", "bold", "text"]
        );
    }

    #[test]
    fn test_empty_stream_parses_to_empty_document() {
        let mut parser = Parser::default();
        parser.register(TextInterpreter::default());
        let document = parser.parse_tokens(vec![]).unwrap();
        assert!(document.children().is_empty());
    }

    #[test]
    fn test_unmatched_tokens_are_skipped() {
        let mut parser = Parser::default();
        parser.register(TextInterpreter::default());
        let document = parser
            .parse_tokens(vec![
                Token::text("a"),
                sym(TokenKind::Newline),
                sym(TokenKind::Hash),
                Token::text("b"),
            ])
            .unwrap();

        let contents: Vec<&str> = document
            .children()
            .iter()
            .filter_map(Node::content)
            .collect();
        assert_eq!(contents, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_step_without_match_leaves_stream() {
        let parser = Parser::default();
        let mut stream = TokenStream::new(vec![Token::text("Hello")]);
        let node = parser.parse_step(&mut stream, &parser.context()).unwrap();
        assert!(node.is_none());
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_parse_until_stops_before_condition() {
        let mut parser = Parser::default();
        parser.register(TextInterpreter::default());
        let mut stream = TokenStream::new(vec![
            Token::text("Hello"),
            Token::text("World"),
            sym(TokenKind::Newline),
            Token::text("End"),
        ]);

        let nodes = parser
            .context()
            .parse_until(&mut stream, |s| s.current_is(TokenKind::Newline))
            .unwrap();

        assert_eq!(nodes, vec![Node::text("HelloWorld")]);
        assert!(stream.current_is(TokenKind::Newline));
    }

    #[test]
    fn test_parse_until_skips_unmatched_tokens() {
        let mut parser = Parser::default();
        parser.register(TextInterpreter::default());
        let mut stream = TokenStream::new(vec![
            sym(TokenKind::Hash),
            Token::text("x"),
            sym(TokenKind::Hash),
        ]);

        let nodes = parser.context().parse_until(&mut stream, |_| false).unwrap();
        assert_eq!(nodes, vec![Node::text("x")]);
        assert!(stream.is_end());
    }

    #[test]
    fn test_depth_limit() {
        // "# **x**" nests document > heading > bold > text.
        let tokens = vec![
            sym(TokenKind::Hash),
            sym(TokenKind::Space),
            sym(TokenKind::Asterisk),
            sym(TokenKind::Asterisk),
            Token::text("x"),
            sym(TokenKind::Asterisk),
            sym(TokenKind::Asterisk),
        ];
        let build = |max_depth| {
            let mut parser = Parser::new(ParserConfig { max_depth });
            parser.register(HeadingInterpreter);
            parser.register(BoldInterpreter);
            parser.register(TextInterpreter::default());
            parser
        };

        let err = build(2).parse_tokens(tokens.clone()).unwrap_err();
        assert!(matches!(err, ParseError::DepthExceeded { limit: 2, .. }));

        let document = build(3).parse_tokens(tokens).unwrap();
        assert_eq!(document.to_html(), "<h1><strong>x</strong></h1>\n");
    }
}
