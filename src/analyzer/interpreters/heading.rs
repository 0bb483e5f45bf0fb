use crate::{
    analyzer::{
        core::{Interpreter, ParseResult},
        parser::ParsingContext,
        stream::TokenStream,
    },
    ast::Node,
    tokenizer::TokenKind,
};

use super::HEADING_PRIORITY;

/// `# Title` through `###### Title`, up to the end of the line.
///
/// The level is the length of the `#` run; it is not capped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadingInterpreter;

fn hash_run(stream: &TokenStream) -> usize {
    (0..)
        .take_while(|&offset| stream.peek_is(offset, TokenKind::Hash))
        .count()
}

impl Interpreter for HeadingInterpreter {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn can_start(&self, stream: &TokenStream) -> bool {
        let level = hash_run(stream);
        level > 0 && stream.peek_is(level, TokenKind::Space)
    }

    fn consume(&self, stream: &mut TokenStream, context: &ParsingContext<'_>) -> ParseResult<Node> {
        let mut level: u32 = 0;
        while stream.current_is(TokenKind::Hash) {
            level = level.saturating_add(1);
            stream.advance();
        }
        if stream.current_is(TokenKind::Space) {
            stream.advance();
        }

        let mut heading = Node::heading(level);
        heading.extend_children(
            context.parse_until(stream, |s| s.current_is(TokenKind::Newline))?,
        )?;
        if stream.current_is(TokenKind::Newline) {
            stream.advance();
        }
        Ok(heading)
    }

    fn priority(&self) -> i32 {
        HEADING_PRIORITY
    }
}
