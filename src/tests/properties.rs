use proptest::prelude::*;

use crate::{
    analyzer::{interpreters, Parser, TokenStream},
    ast::escape_html,
    tokenizer::{TokenKind, Tokenizer},
    Markup,
};

fn marker_soup() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just("#"),
            Just("*"),
            Just("-"),
            Just(" "),
            Just("\n"),
            Just("\r\n"),
            Just("a"),
            Just("字"),
        ],
        0..64,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn tokenize_is_lossless(input in any::<String>()) {
        let tokens = Tokenizer::markdown().tokenize(&input);
        let joined: String = tokens.iter().map(|token| token.value()).collect();
        prop_assert_eq!(joined, input);
    }

    #[test]
    fn text_tokens_are_never_adjacent(input in marker_soup()) {
        let tokens = Tokenizer::markdown().tokenize(&input);
        for pair in tokens.windows(2) {
            prop_assert!(!(pair[0].is(TokenKind::Text) && pair[1].is(TokenKind::Text)));
        }
        prop_assert!(tokens.iter().all(|token| !token.value().is_empty()));
    }

    #[test]
    fn parse_always_makes_progress(input in marker_soup()) {
        let mut parser = Parser::default();
        parser.register_interpreters(interpreters::markdown());
        let context = parser.context();
        let mut stream = TokenStream::new(Tokenizer::markdown().tokenize(&input));

        while !stream.is_end() {
            let before = stream.position();
            if parser.parse_step(&mut stream, &context).unwrap().is_none() {
                stream.advance();
            }
            prop_assert!(stream.position() > before);
            prop_assert!(stream.position() <= stream.len());
        }
    }

    #[test]
    fn parse_never_fails_on_marker_soup(input in marker_soup()) {
        let document = Markup::default().parse(&input).unwrap();
        prop_assert_eq!(document.node_type(), "document");
    }

    #[test]
    fn plain_text_renders_as_escaped_self(input in "[a-zA-Z0-9&<>\"' ]{0,40}") {
        let html = Markup::default().to_html(&input).unwrap();
        prop_assert_eq!(html, escape_html(&input).into_owned());
    }
}
