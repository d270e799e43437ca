use super::common::{base_parse, element, first_element};
use insta::assert_snapshot;
use vue_template_parser::{
    cast,
    node::{ElemProp, ElementChildNode, TagType, TextChild},
    util::ast_print::AstString,
    Namespace, NodeRef, Position, Range,
};

#[test]
fn test_single_element() {
    let parsed = base_parse("<div></div>");
    assert!(parsed.errors.is_empty());
    assert_eq!(parsed.node.children.len(), 1);
    let div = first_element(&parsed.node);
    assert_eq!(div.tag_name, "div");
    assert_eq!(div.tag_type, TagType::Element);
    assert_eq!(div.namespace, Namespace::Html);
    assert!(div.attributes.is_empty());
    assert!(div.children.is_empty());
    assert!(!div.is_self_closing);
    assert_eq!(
        div.range,
        Range::new(Position::new(0, 0), Position::new(0, 11))
    );
}

#[test]
fn test_attributes() {
    let parsed = base_parse(
        r#"<div class=foo style="color: red;" data-text="\>" required data-empty=""></div>"#,
    );
    assert!(parsed.errors.is_empty());
    let div = first_element(&parsed.node);
    let attrs: Vec<_> = div
        .attributes
        .iter()
        .map(|p| {
            let a = cast!(p, ElemProp::Attr);
            (a.name.as_str(), a.value.as_deref(), a.quote)
        })
        .collect();
    assert_eq!(
        attrs,
        vec![
            ("class", Some("foo"), None),
            ("style", Some("color: red;"), Some('"')),
            ("data-text", Some(">"), Some('"')),
            ("required", None, None),
            ("data-empty", Some(""), Some('"')),
        ]
    );
    let class = div.attribute("class").unwrap();
    assert_eq!(
        class.range,
        Range::new(Position::new(0, 5), Position::new(0, 14))
    );
}

#[test]
fn test_component_tag() {
    let parsed = base_parse("<MyComponent><img></MyComponent>");
    assert!(parsed.errors.is_empty());
    let comp = first_element(&parsed.node);
    assert_eq!(comp.tag_type, TagType::Component);
    assert_eq!(comp.children.len(), 1);
    let img = element(&comp.children[0]);
    assert_eq!(img.tag_type, TagType::Element);
    assert!(img.is_self_closing);
    assert!(img.children.is_empty());
}

#[test]
fn test_tag_types() {
    let parsed = base_parse("<template><slot/><my-button/><br>x</template>");
    assert!(parsed.errors.is_empty());
    let template = first_element(&parsed.node);
    assert_eq!(template.tag_type, TagType::Template);
    let types: Vec<_> = template
        .children
        .iter()
        .filter_map(ElementChildNode::as_element)
        .map(|e| (e.tag_type, e.is_self_closing))
        .collect();
    assert_eq!(
        types,
        vec![
            (TagType::Slot, true),
            (TagType::Component, true),
            (TagType::Element, true),
        ]
    );
    // br never swallows the following text
    assert!(matches!(template.children[3], ElementChildNode::Text(_)));
}

#[test]
fn test_void_elements() {
    let void_tags = [
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
        "source", "track", "wbr",
    ];
    for tag in void_tags {
        let source = format!("<div><{}>text</div>", tag);
        let parsed = base_parse(&source);
        assert!(parsed.errors.is_empty(), "{}", source);
        let div = first_element(&parsed.node);
        assert_eq!(div.children.len(), 2, "{}", source);
        let void = element(&div.children[0]);
        assert_eq!(void.tag_name, tag);
        assert!(void.is_self_closing, "{}", source);
        assert!(void.children.is_empty(), "{}", source);
        assert!(matches!(div.children[1], ElementChildNode::Text(_)));
    }
}

#[test]
fn test_namespace() {
    let parsed = base_parse(
        "<svg><foreignObject><div></div></foreignObject><title>t</title></svg><math><mi></mi></math>",
    );
    assert!(parsed.errors.is_empty());
    let svg = first_element(&parsed.node);
    assert_eq!(svg.namespace, Namespace::Svg);
    let foreign = element(&svg.children[0]);
    assert_eq!(foreign.tag_name, "foreignObject");
    assert_eq!(foreign.namespace, Namespace::Svg);
    assert_eq!(element(&foreign.children[0]).namespace, Namespace::Html);
    let title = element(&svg.children[1]);
    assert_eq!(title.namespace, Namespace::Svg);
    let math = element(&parsed.node.children[1]);
    assert_eq!(math.namespace, Namespace::MathMl);
    assert_eq!(element(&math.children[0]).namespace, Namespace::MathMl);
}

#[test]
fn test_rcdata_and_rawtext() {
    let parsed = base_parse("<textarea>a &lt; <b></b></textarea><script>if (a < b) {{ x }}</script>");
    assert!(parsed.errors.is_empty());
    let textarea = first_element(&parsed.node);
    assert_eq!(textarea.children.len(), 1);
    let text = cast!(&textarea.children[0], ElementChildNode::Text);
    assert_eq!(text.decoded(), "a < <b></b>");
    assert_eq!(text.children.len(), 3);
    let script = element(&parsed.node.children[1]);
    let text = cast!(&script.children[0], ElementChildNode::Text);
    assert_eq!(text.children.len(), 1);
    let literal = cast!(&text.children[0], TextChild::Literal);
    assert_eq!(literal.value, "if (a < b) {{ x }}");
}

#[test]
fn test_interpolation_past_tag_open() {
    let parsed = base_parse("<div>{{ a < b }}</div>");
    assert!(parsed.errors.is_empty());
    let div = first_element(&parsed.node);
    assert_eq!(div.children.len(), 1);
    let text = cast!(&div.children[0], ElementChildNode::Text);
    let interpolation = cast!(&text.children[0], TextChild::Interpolation);
    assert_eq!(interpolation.value, " a < b ");
    assert!(interpolation.expression.is_some());
}

#[test]
fn test_unclosed_child() {
    let parsed = base_parse("<div><span></div>");
    assert!(parsed.errors.is_empty());
    let div = first_element(&parsed.node);
    let span = element(&div.children[0]);
    assert!(span.children.is_empty());
    assert_eq!(
        span.range,
        Range::new(Position::new(0, 5), Position::new(0, 11))
    );
    assert_eq!(div.range.end, Position::new(0, 17));
}

#[test]
fn test_bogus_comment() {
    let parsed = base_parse(r#"<!DOCTYPE html><?xml version="1.0"?><!-- real -->"#);
    assert!(parsed.errors.is_empty());
    let contents: Vec<_> = parsed
        .node
        .children
        .iter()
        .map(|n| {
            let c = cast!(n, ElementChildNode::Comment);
            (c.content.as_str(), c.is_bogus)
        })
        .collect();
    assert_eq!(
        contents,
        vec![
            ("DOCTYPE html", true),
            (r#"?xml version="1.0"?"#, true),
            (" real ", false),
        ]
    );
}

#[test]
fn test_cdata() {
    let parsed = base_parse("<svg><![CDATA[a<b]]></svg>");
    assert!(parsed.errors.is_empty());
    let svg = first_element(&parsed.node);
    assert_eq!(svg.children.len(), 1);
    let text = cast!(&svg.children[0], ElementChildNode::Text);
    assert_eq!(text.decoded(), "a<b");
}

#[test]
fn test_node_at() {
    let parsed = base_parse("<div id=\"a\">\n  hi {{ x }}\n</div>");
    let root = &parsed.node;
    let attr = root.node_at(Position::new(0, 6));
    assert!(matches!(attr, Some(NodeRef::Attribute(a)) if a.name == "id"));
    let interpolation = root.node_at(Position::new(1, 7));
    assert!(matches!(interpolation, Some(NodeRef::Interpolation(i)) if i.value == " x "));
    let div = root.node_at(Position::new(2, 3));
    assert!(matches!(div, Some(NodeRef::Element(e)) if e.tag_name == "div"));
    assert!(root.node_at(Position::new(5, 0)).is_none());
}

#[test]
fn test_print_ast() {
    let parsed = base_parse("<div id=\"app\">\n  <span v-if=\"ok\">{{ msg }}</span>\n</div>");
    assert_snapshot!(parsed.node.ast_string(0), @r###"
    Root 0:0..2:6
      Element div 0:0..2:6
        Attribute id="app" 0:5..0:13
        Text 0:14..1:2
          Literal "\n  " 0:14..1:2
        Element span 1:2..1:34
          Directive if="ok" 1:8..1:17
          Text 1:18..1:27
            Interpolation " msg " 1:18..1:27
        Text 1:34..2:0
          Literal "\n" 1:34..2:0
    "###);
}
