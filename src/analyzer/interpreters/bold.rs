use crate::{
    analyzer::{
        core::{Interpreter, ParseResult},
        parser::ParsingContext,
        stream::TokenStream,
    },
    ast::Node,
    tokenizer::TokenKind,
};

use super::BOLD_PRIORITY;

/// `**strong**` spans. Never starts without a closing `**` somewhere ahead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoldInterpreter;

fn at_delimiter(stream: &TokenStream, offset: usize) -> bool {
    stream.peek_is(offset, TokenKind::Asterisk) && stream.peek_is(offset + 1, TokenKind::Asterisk)
}

fn has_closing_delimiter(stream: &TokenStream) -> bool {
    (2..stream.remaining()).any(|offset| at_delimiter(stream, offset))
}

impl Interpreter for BoldInterpreter {
    fn name(&self) -> &'static str {
        "bold"
    }

    fn can_start(&self, stream: &TokenStream) -> bool {
        at_delimiter(stream, 0) && has_closing_delimiter(stream)
    }

    fn consume(&self, stream: &mut TokenStream, context: &ParsingContext<'_>) -> ParseResult<Node> {
        stream.advance();
        stream.advance();

        let mut bold = Node::bold();
        bold.extend_children(context.parse_until(stream, |s| at_delimiter(s, 0))?)?;
        if at_delimiter(stream, 0) {
            stream.advance();
            stream.advance();
        }
        Ok(bold)
    }

    fn priority(&self) -> i32 {
        BOLD_PRIORITY
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::analyzer::interpreters::test_util::{parse, stream};

    #[test]
    fn test_can_start_requires_closing_pair() {
        assert!(BoldInterpreter.can_start(&stream("**x**")));
        assert!(BoldInterpreter.can_start(&stream("**a b** c")));
        assert!(!BoldInterpreter.can_start(&stream("**unterminated")));
        assert!(!BoldInterpreter.can_start(&stream("**x*")));
        assert!(!BoldInterpreter.can_start(&stream("*x**")));
    }

    #[test]
    fn test_closing_pair_may_be_on_a_later_line() {
        assert!(BoldInterpreter.can_start(&stream("**a\nb**")));
    }

    #[test]
    fn test_bold_in_text() {
        let document = parse("This is **important** text");
        assert_eq!(
            document.to_html(),
            "This is <strong>important</strong> text"
        );
    }

    #[test]
    fn test_unterminated_bold_drops_markers() {
        let document = parse("**Unclosed bold");
        assert_eq!(document.to_html(), "Unclosed bold");
    }

    #[test]
    fn test_empty_bold() {
        assert_eq!(parse("****").to_html(), "<strong></strong>");
    }
}
