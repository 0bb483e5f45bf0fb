use crate::{
    analyzer::{
        core::{Interpreter, ParseResult},
        parser::ParsingContext,
        stream::TokenStream,
    },
    ast::Node,
    tokenizer::TokenKind,
};

use super::TEXT_PRIORITY;

/// Merges a run of allow-listed tokens into one text node.
///
/// The default allow-list is `[Text, Space]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInterpreter {
    kinds: Vec<TokenKind>,
}

impl Default for TextInterpreter {
    fn default() -> Self {
        Self::with_kinds([TokenKind::Text, TokenKind::Space])
    }
}

impl TextInterpreter {
    pub fn with_kinds(kinds: impl IntoIterator<Item = TokenKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    pub fn kinds(&self) -> &[TokenKind] {
        &self.kinds
    }

    fn accepts(&self, stream: &TokenStream) -> bool {
        stream
            .current()
            .is_some_and(|token| self.kinds.contains(&token.kind()))
    }
}

impl Interpreter for TextInterpreter {
    fn name(&self) -> &'static str {
        "text"
    }

    fn can_start(&self, stream: &TokenStream) -> bool {
        self.accepts(stream)
    }

    fn consume(&self, stream: &mut TokenStream, _context: &ParsingContext<'_>) -> ParseResult<Node> {
        let mut content = String::new();
        while self.accepts(stream) {
            if let Some(token) = stream.current() {
                content.push_str(token.value());
            }
            stream.advance();
        }
        Ok(Node::text(content))
    }

    fn priority(&self) -> i32 {
        TEXT_PRIORITY
    }
}
