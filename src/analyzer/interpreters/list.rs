use crate::{
    analyzer::{
        core::{Interpreter, ParseResult},
        parser::ParsingContext,
        stream::TokenStream,
    },
    ast::Node,
    tokenizer::TokenKind,
};

use super::LIST_PRIORITY;

/// Consecutive `* item` / `- item` lines, collected into one list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListInterpreter;

fn at_item_start(stream: &TokenStream) -> bool {
    (stream.current_is(TokenKind::Asterisk) || stream.current_is(TokenKind::Hyphen))
        && stream.peek_is(1, TokenKind::Space)
}

impl ListInterpreter {
    fn consume_item(
        &self,
        stream: &mut TokenStream,
        context: &ParsingContext<'_>,
    ) -> ParseResult<Node> {
        // marker, then the single separating space
        stream.advance();
        stream.advance();

        let mut item = Node::list_item();
        item.extend_children(context.parse_until(stream, |s| s.current_is(TokenKind::Newline))?)?;
        if stream.current_is(TokenKind::Newline) {
            stream.advance();
        }
        Ok(item)
    }
}

impl Interpreter for ListInterpreter {
    fn name(&self) -> &'static str {
        "list"
    }

    fn can_start(&self, stream: &TokenStream) -> bool {
        at_item_start(stream)
    }

    fn consume(&self, stream: &mut TokenStream, context: &ParsingContext<'_>) -> ParseResult<Node> {
        let mut list = Node::list();
        while at_item_start(stream) {
            list.add_child(self.consume_item(stream, context)?)?;
        }
        Ok(list)
    }

    fn priority(&self) -> i32 {
        LIST_PRIORITY
    }
}
