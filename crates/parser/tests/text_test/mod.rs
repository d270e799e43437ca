use super::common::TestErrorHandler;
use vue_template_parser::{
    cast,
    node::{ReferenceType, TextChild},
    parse_text, ParseOption, Parser, ParserErrorKind as K, Position, Range,
};

#[test]
fn test_named_reference() {
    let parsed = parse_text("a &amp; b");
    assert!(parsed.errors.is_empty());
    let children = &parsed.node.children;
    assert_eq!(children.len(), 3);
    assert_eq!(cast!(&children[0], TextChild::Literal).value, "a ");
    let amp = cast!(&children[1], TextChild::CharacterReference);
    assert_eq!(amp.value, "&");
    assert_eq!(amp.raw, "&amp;");
    assert_eq!(amp.reference_type, ReferenceType::Named);
    assert_eq!(
        amp.range,
        Range::new(Position::new(0, 2), Position::new(0, 7))
    );
    assert_eq!(cast!(&children[2], TextChild::Literal).value, " b");
}

#[test]
fn test_unknown_reference() {
    let parsed = parse_text("a &bogus; b");
    let kinds: Vec<_> = parsed.errors.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![K::UnknownNamedCharacterReference]);
    assert_eq!(
        parsed.errors[0].range,
        Range::new(Position::new(0, 2), Position::new(0, 9))
    );
    let children = &parsed.node.children;
    assert_eq!(children.len(), 1);
    assert_eq!(cast!(&children[0], TextChild::Literal).value, "a &bogus; b");
}

#[test]
fn test_numeric_reference() {
    let parsed = parse_text("&#x41;&#66;&#X63;");
    assert!(parsed.errors.is_empty());
    assert_eq!(parsed.node.decoded(), "ABc");
    let types: Vec<_> = parsed
        .node
        .children
        .iter()
        .map(|c| cast!(c, TextChild::CharacterReference).reference_type)
        .collect();
    assert_eq!(
        types,
        vec![ReferenceType::Hex, ReferenceType::Numeric, ReferenceType::Hex]
    );
}

#[test]
fn test_reference_errors() {
    let cases = [
        ("&#0;", "\u{fffd}", vec![K::NullCharacterReference]),
        ("&#128;", "\u{20ac}", vec![K::ControlCharacterReference]),
        ("&#xD800;", "\u{fffd}", vec![K::SurrogateCharacterReference]),
        (
            "&#x110000;",
            "\u{fffd}",
            vec![K::OutsideUnicodeRangeCharacterReference],
        ),
        ("&amp", "&", vec![K::MissingSemicolonCharacterReference]),
        ("&#65 x", "A x", vec![K::MissingSemicolonCharacterReference]),
        (
            "&#xFDD0;",
            "\u{fdd0}",
            vec![K::NoncharacterCharacterReference],
        ),
        (
            "&#x1FFFF;",
            "\u{1ffff}",
            vec![K::NoncharacterCharacterReference],
        ),
        ("&AMP;", "&", vec![]),
    ];
    for (case, decoded, expected) in cases {
        let parsed = parse_text(case);
        let kinds: Vec<_> = parsed.errors.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, expected, "{}", case);
        assert_eq!(parsed.node.decoded(), decoded, "{}", case);
    }
}

#[test]
fn test_numeric_reference_without_semicolon() {
    let parsed = parse_text("&#65 x");
    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(
        parsed.errors[0].range,
        Range::new(Position::new(0, 0), Position::new(0, 4))
    );
    let children = &parsed.node.children;
    assert_eq!(children.len(), 2);
    let reference = cast!(&children[0], TextChild::CharacterReference);
    assert_eq!(reference.raw, "&#65");
    assert_eq!(reference.reference_type, ReferenceType::Numeric);
    assert_eq!(cast!(&children[1], TextChild::Literal).value, " x");
}

#[test]
fn test_markup_is_plain_text() {
    let parsed = parse_text("<b>x</b>");
    assert!(parsed.errors.is_empty());
    assert_eq!(parsed.node.children.len(), 1);
    assert_eq!(parsed.node.decoded(), "<b>x</b>");
}

#[test]
fn test_interpolation() {
    let parsed = parse_text("x &lt; {{ y + 1 }}!");
    assert!(parsed.errors.is_empty());
    assert_eq!(parsed.node.children.len(), 5);
    let interpolation = cast!(&parsed.node.children[3], TextChild::Interpolation);
    assert_eq!(interpolation.value, " y + 1 ");
    assert_eq!(interpolation.raw, "{{ y + 1 }}");
    assert!(interpolation.expression.is_some());
    assert_eq!(parsed.node.decoded(), "x < {{ y + 1 }}!");
}

#[test]
fn test_unclosed_interpolation() {
    let parsed = parse_text("a {{ b");
    let kinds: Vec<_> = parsed.errors.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![K::EofInInterpolation]);
    let interpolation = cast!(&parsed.node.children[1], TextChild::Interpolation);
    assert_eq!(interpolation.value, " b");
}

#[test]
fn test_custom_delimiters() {
    let parser = Parser::new(ParseOption::default().with_delimiters("${", "}"));
    let parsed = parser.parse_text::<(), _>("x ${ a } {{ b }}", TestErrorHandler);
    assert!(parsed.errors.is_empty());
    let children = &parsed.node.children;
    assert_eq!(children.len(), 3);
    assert_eq!(cast!(&children[1], TextChild::Interpolation).value, " a ");
    assert_eq!(cast!(&children[2], TextChild::Literal).value, " {{ b }}");
}

#[test]
fn test_without_expression() {
    let parser = Parser::new(ParseOption::default().without_expression());
    let parsed = parser.parse_text::<(), _>("{{ a }}", TestErrorHandler);
    let interpolation = cast!(&parsed.node.children[0], TextChild::Interpolation);
    assert!(interpolation.expression.is_none());
}

#[test]
fn test_multibyte_range() {
    let parsed = parse_text("é\n&amp;");
    let amp = cast!(&parsed.node.children[1], TextChild::CharacterReference);
    assert_eq!(
        amp.range,
        Range::new(Position::new(1, 0), Position::new(1, 5))
    );
    assert_eq!(
        parsed.node.range,
        Range::new(Position::new(0, 0), Position::new(1, 5))
    );
}
