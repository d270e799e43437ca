use super::common::{base_parse, first_element, get_errors};
use vue_template_parser::{
    cast,
    node::{ElemProp, ElementChildNode},
    ParserErrorKind as K, Position, Range,
};

#[test]
fn test_abrupt_closing_of_comment() {
    let cases = [
        ("<template><!--></template>", vec![K::AbruptClosingOfEmptyComment]),
        ("<template><!---></template>", vec![K::AbruptClosingOfEmptyComment]),
        ("<template><!----></template>", vec![]),
    ];
    for (case, expected) in cases {
        assert_eq!(get_errors(case), expected, "{}", case);
    }
}

#[test]
fn test_eof_errors() {
    let cases = [
        ("<!-- a", vec![K::EofInComment]),
        ("<!--", vec![K::EofInComment]),
        ("{{ a", vec![K::EofInInterpolation]),
        ("<![CDATA[x", vec![K::EofInCdata]),
        ("<", vec![K::EofBeforeTagName]),
        ("</", vec![K::EofBeforeTagName]),
        ("<div a=\"b", vec![K::EofInAttribute, K::EofInClosingTag]),
        ("<div", vec![K::EofInClosingTag]),
        ("<div v-", vec![K::EofInDirective, K::EofInClosingTag]),
        ("<div>a</div", vec![K::EofInClosingTag]),
    ];
    for (case, expected) in cases {
        assert_eq!(get_errors(case), expected, "{}", case);
    }
}

#[test]
fn test_tag_errors() {
    let cases = [
        ("< div>", vec![K::InvalidFirstCharacterInTagName]),
        ("</>", vec![K::MissingEndTagName]),
        ("</ div>", vec![K::InvalidFirstCharacterInTagName]),
        ("</div>", vec![K::UnexpectedEndTag]),
        ("<div/ ></div>", vec![K::UnexpectedSolidusInTag]),
        ("<div a=1 =b></div>", vec![K::UnexpectedEqualsSignBeforeAttribute]),
        ("<!-- a --!>", vec![K::IncorrectlyClosedComment]),
    ];
    for (case, expected) in cases {
        assert_eq!(get_errors(case), expected, "{}", case);
    }
}

#[test]
fn test_error_range() {
    let parsed = base_parse("<div>\n</p></div>");
    assert_eq!(parsed.errors.len(), 1);
    let error = &parsed.errors[0];
    assert_eq!(error.kind, K::UnexpectedEndTag);
    assert_eq!(
        error.range,
        Range::new(Position::new(1, 0), Position::new(1, 4))
    );
    let div = first_element(&parsed.node);
    let comment = cast!(&div.children[1], ElementChildNode::Comment);
    assert!(comment.is_bogus);
    assert_eq!(comment.content, "p");
}

#[test]
fn test_unknown_tag_start_is_text() {
    let parsed = base_parse("a < b");
    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(
        parsed.errors[0].range,
        Range::new(Position::new(0, 3), Position::new(0, 4))
    );
    assert_eq!(parsed.node.children.len(), 2);
    let texts: Vec<_> = parsed
        .node
        .children
        .iter()
        .map(|n| cast!(n, ElementChildNode::Text).decoded())
        .collect();
    assert_eq!(texts, vec!["a ", "< b"]);
}

#[test]
fn test_duplicate_attribute() {
    let parsed = base_parse(r#"<div id="a" class="c" id="b"></div>"#);
    let kinds: Vec<_> = parsed.errors.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![K::DuplicateAttribute]);
    assert_eq!(
        parsed.errors[0].range,
        Range::new(Position::new(0, 22), Position::new(0, 28))
    );
    let div = first_element(&parsed.node);
    let ids: Vec<_> = div
        .attributes
        .iter()
        .map(|p| cast!(p, ElemProp::Attr))
        .filter(|a| a.name == "id")
        .map(|a| a.value.as_deref())
        .collect();
    assert_eq!(ids, vec![Some("a"), Some("b")]);
}

#[test]
fn test_comment_nul_replaced() {
    let parsed = base_parse("<!--a\0b-->");
    assert!(parsed.errors.is_empty());
    let comment = cast!(&parsed.node.children[0], ElementChildNode::Comment);
    assert_eq!(comment.content, "a\u{fffd}b");
}

#[test]
fn test_error_code() {
    let errors = base_parse("{{").errors;
    assert_eq!(errors[0].kind.code(), "EOF_IN_INTERPOLATION");
}
