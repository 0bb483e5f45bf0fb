use markup_sdk::{
    ast::{AttributeKind, AttributeValue, NodeError},
    Node, NodeType,
};
use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

#[test]
fn it_exposes_schema_per_type() {
    let schemas: Vec<(String, Vec<(&str, AttributeKind)>)> = NodeType::iter()
        .map(|node_type| {
            let node = Node::new(node_type);
            let schema = node.schema().iter().map(|s| (s.name, s.kind)).collect();
            (node_type.to_string(), schema)
        })
        .collect();

    assert_eq!(
        schemas,
        vec![
            ("document".to_string(), vec![]),
            ("heading".to_string(), vec![("level", AttributeKind::Integer)]),
            ("bold".to_string(), vec![]),
            ("list".to_string(), vec![]),
            ("list_item".to_string(), vec![]),
            ("text".to_string(), vec![("content", AttributeKind::String)]),
        ]
    );
}

#[test]
fn it_reads_unset_attributes_as_none() {
    let list = Node::list();
    assert_eq!(list.attribute("level"), None);
    assert_eq!(list.attribute("anything"), None);
}

#[test]
fn it_rejects_schema_violations() {
    let mut text = Node::text("a");
    match text.set_attribute("content", 1_i64) {
        Err(NodeError::SchemaViolation {
            node_type,
            attribute,
            ..
        }) => {
            assert_eq!(node_type, "text");
            assert_eq!(attribute, "content");
        }
        other => panic!("expected schema violation, got {other:?}"),
    }
    assert!(text.set_attribute("level", 1_i64).is_err());
    assert_eq!(text.attribute("content"), Some(AttributeValue::from("a")));
}

#[test]
fn it_renders_heading_level_from_attribute() {
    let mut heading = Node::new(NodeType::Heading);
    heading.set_attribute("level", 4_i64).unwrap();
    heading.add_child(Node::text("Deep")).unwrap();
    assert_eq!(heading.to_html(), "<h4>Deep</h4>\n");
}

#[test]
fn it_escapes_text_content() {
    let text = Node::text(r#"<script>alert("x & y's")</script>"#);
    assert_eq!(
        text.to_html(),
        "&lt;script&gt;alert(&quot;x &amp; y&#039;s&quot;)&lt;/script&gt;"
    );
}
