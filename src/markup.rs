//! The tokenizer and parser wired together as one markup language.

use tracing::debug;

use crate::{
    analyzer::{
        interpreters, BoldInterpreter, HeadingInterpreter, Interpreter, ListInterpreter, Parser,
        TextInterpreter, TokenStream,
    },
    ast::Node,
    config::MarkupConfig,
    tokenizer::{NewlineMatcher, SymbolMatcher, TokenMatcher, Tokenizer},
    MarkupResult,
};

/// A configured markup language: a [`Tokenizer`] plus a [`Parser`].
///
/// [`Markup::default`] recognizes the full markdown subset. Extensions get at
/// both halves through [`tokenizer_mut`](Markup::tokenizer_mut) and
/// [`parser_mut`](Markup::parser_mut).
#[derive(Debug)]
pub struct Markup {
    tokenizer: Tokenizer,
    parser: Parser,
}

impl Default for Markup {
    fn default() -> Self {
        let mut parser = Parser::default();
        parser.register_interpreters(interpreters::markdown());
        Self::new(Tokenizer::markdown(), parser)
    }
}

impl Markup {
    pub fn new(tokenizer: Tokenizer, parser: Parser) -> Self {
        Self { tokenizer, parser }
    }

    /// Builds the markdown preset with only the constructs `config` enables.
    ///
    /// Markers of a disabled construct are not tokenized, so they read as
    /// plain text.
    pub fn markdown(config: &MarkupConfig) -> MarkupResult<Self> {
        let syntax = &config.syntax;

        let mut matchers: Vec<Box<dyn TokenMatcher>> = Vec::new();
        if syntax.headings {
            matchers.push(Box::new(SymbolMatcher::hash()));
        }
        matchers.push(Box::new(SymbolMatcher::space()));
        matchers.push(Box::new(NewlineMatcher::new()));
        if syntax.lists || syntax.bold {
            matchers.push(Box::new(SymbolMatcher::asterisk()));
        }
        if syntax.lists {
            matchers.push(Box::new(SymbolMatcher::hyphen()));
        }
        let mut tokenizer = Tokenizer::new();
        tokenizer.register_all(matchers)?;

        let mut interpreters: Vec<Box<dyn Interpreter>> = Vec::new();
        if syntax.headings {
            interpreters.push(Box::new(HeadingInterpreter));
        }
        if syntax.lists {
            interpreters.push(Box::new(ListInterpreter));
        }
        if syntax.bold {
            interpreters.push(Box::new(BoldInterpreter));
        }
        interpreters.push(Box::new(TextInterpreter::default()));
        let mut parser = Parser::new(config.parser.clone());
        parser.register_interpreters(interpreters);

        debug!(
            matchers = ?tokenizer.kinds(),
            interpreters = ?parser.interpreter_names(),
            "built markdown preset"
        );
        Ok(Self::new(tokenizer, parser))
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn tokenizer_mut(&mut self) -> &mut Tokenizer {
        &mut self.tokenizer
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    pub fn parser_mut(&mut self) -> &mut Parser {
        &mut self.parser
    }

    /// Tokenizes and parses `input` into a document node.
    #[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
    pub fn parse(&self, input: &str) -> MarkupResult<Node> {
        let mut stream = TokenStream::new(self.tokenizer.tokenize(input));
        Ok(self.parser.parse(&mut stream)?)
    }

    pub fn to_html(&self, input: &str) -> MarkupResult<String> {
        Ok(self.parse(input)?.to_html())
    }
}
