use markup_sdk::{
    analyzer::{
        BoldInterpreter, HeadingInterpreter, Interpreter, ListInterpreter, Parser,
        TextInterpreter, TokenStream,
    },
    tokenizer::{TokenKind, Tokenizer},
    Node, NodeType,
};
use pretty_assertions::assert_eq;

fn stream(input: &str) -> TokenStream {
    TokenStream::new(Tokenizer::markdown().tokenize(input))
}

fn parser_with(interpreters: Vec<Box<dyn Interpreter>>) -> Parser {
    let mut parser = Parser::default();
    parser.register_interpreters(interpreters);
    parser
}

#[test]
fn it_counts_heading_levels() {
    let parser = parser_with(vec![
        Box::new(HeadingInterpreter),
        Box::new(TextInterpreter::default()),
    ]);
    for level in 1..=7 {
        let input = format!("{} Title", "#".repeat(level));
        let document = parser.parse(&mut stream(&input)).unwrap();
        assert_eq!(document.children()[0].level(), Some(level as u32));
    }
}

#[test]
fn it_consumes_heading_newline() {
    let parser = parser_with(vec![
        Box::new(HeadingInterpreter),
        Box::new(TextInterpreter::default()),
    ]);
    let context = parser.context();
    let mut stream = stream("# A\nB");

    let heading = context.parse_next(&mut stream).unwrap().unwrap();
    assert!(heading.is(NodeType::Heading));
    assert_eq!(stream.current().map(|t| t.value()), Some("B"));
}

#[test]
fn it_builds_list_items_in_order() {
    let parser = parser_with(vec![
        Box::new(ListInterpreter),
        Box::new(TextInterpreter::default()),
    ]);
    let document = parser.parse(&mut stream("* a\n* b")).unwrap();

    let list = &document.children()[0];
    assert!(list.is(NodeType::List));
    assert_eq!(list.children().len(), 2);
    for (item, expected) in list.children().iter().zip(["a", "b"]) {
        assert!(item.is(NodeType::ListItem));
        assert_eq!(item.children(), &[Node::text(expected)]);
    }
}

#[test]
fn it_separates_lists_split_by_text() {
    let parser = parser_with(vec![
        Box::new(ListInterpreter),
        Box::new(TextInterpreter::default()),
    ]);
    let document = parser.parse(&mut stream("- a\nbreak\n- b")).unwrap();
    let types: Vec<&str> = document.children().iter().map(Node::node_type).collect();
    assert_eq!(types, vec!["list", "text", "list"]);
}

#[test]
fn it_parses_bold_with_text() {
    let parser = parser_with(vec![
        Box::new(BoldInterpreter),
        Box::new(TextInterpreter::default()),
    ]);
    let document = parser.parse(&mut stream("**bold**")).unwrap();

    let mut bold = Node::bold();
    bold.add_child(Node::text("bold")).unwrap();
    assert_eq!(document.children(), &[bold]);
}

#[test]
fn it_leaves_can_start_side_effect_free() {
    let interpreters: Vec<Box<dyn Interpreter>> = vec![
        Box::new(HeadingInterpreter),
        Box::new(ListInterpreter),
        Box::new(BoldInterpreter),
        Box::new(TextInterpreter::default()),
    ];
    for input in ["# h", "* l", "**b**", "t", "**"] {
        let stream = stream(input);
        let before = stream.clone();
        for interpreter in &interpreters {
            interpreter.can_start(&stream);
        }
        assert_eq!(stream, before);
    }
}

#[test]
fn it_extends_text_allow_list() {
    let parser = parser_with(vec![Box::new(TextInterpreter::with_kinds([
        TokenKind::Text,
        TokenKind::Space,
        TokenKind::Hyphen,
    ]))]);
    let document = parser.parse(&mut stream("well-known - term")).unwrap();
    assert_eq!(document.children(), &[Node::text("well-known - term")]);
}
