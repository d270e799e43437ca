use super::common::base_parse;
use proptest::prelude::*;
use vue_template_parser::{
    node::{ElemProp, ElementChildNode, TextNode},
    parse_text,
    position::LineIndex,
    Range,
};

fn assert_within(parent: &Range, child: &Range) {
    assert!(child.start <= child.end, "inverted {:?}", child);
    assert!(parent.contains_range(child), "{:?} not in {:?}", child, parent);
}

fn check_text(text: &TextNode) {
    let mut last = text.range.start;
    for child in &text.children {
        assert_within(&text.range, child.range());
        assert!(last <= child.range().start);
        last = child.range().end;
    }
}

fn check_prop(parent: &Range, prop: &ElemProp) {
    assert_within(parent, prop.range());
    if let ElemProp::Dir(dir) = prop {
        if let Some(arg) = &dir.argument {
            assert_within(&dir.range, &arg.range);
        }
        for modifier in &dir.modifiers {
            assert_within(&dir.range, &modifier.range);
        }
        if let Some(expr) = &dir.expression {
            assert_within(&dir.range, &expr.range);
        }
    }
}

fn check_children(parent: &Range, children: &[ElementChildNode]) {
    let mut last = parent.start;
    for child in children {
        let range = child.range();
        assert_within(parent, range);
        assert!(last <= range.start, "siblings overlap at {:?}", range);
        last = range.end;
        match child {
            ElementChildNode::Element(e) => {
                for prop in &e.attributes {
                    check_prop(&e.range, prop);
                }
                if e.is_self_closing {
                    assert!(e.children.is_empty());
                }
                check_children(&e.range, &e.children);
            }
            ElementChildNode::Text(t) => check_text(t),
            ElementChildNode::Comment(_) => (),
        }
    }
}

fn template_piece() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "<div>", "</div>", "<p ", "</p>", "<br>", "<img/>", "<svg>", "</svg>", "<textarea>",
        "</textarea>", "<script>", "</script>", "<MyComp>", "</MyComp>", "<", "</", ">", "/>",
        "<!--", "-->", "--!>", "<!", "<?", "<![CDATA[", "]]>", "{{", "}}", "&amp;", "&bogus;",
        "&#", "&#x1F600;", "&", ";", " ", "\n", "a", "é", "=", "\"", "'", "\\", "v-if",
        "v-for=\"x in y\"", "@click", ":", "#", ".", "[", "]", "v-", "id=", "x",
    ])
}

fn template() -> impl Strategy<Value = String> {
    prop::collection::vec(template_piece(), 0..24).prop_map(|pieces| pieces.concat())
}

proptest! {
    #[test]
    fn parse_is_total(source in "\\PC{0,64}") {
        let parsed = base_parse(&source);
        check_children(&parsed.node.range, &parsed.node.children);
    }

    #[test]
    fn ranges_nest(source in template()) {
        let parsed = base_parse(&source);
        let root = &parsed.node;
        let index = LineIndex::new(&source);
        prop_assert_eq!(root.range, index.range_of(0, source.len()));
        check_children(&root.range, &root.children);
        for error in &parsed.errors {
            assert_within(&root.range, &error.range);
        }
    }

    #[test]
    fn parse_text_covers_source(source in template()) {
        let parsed = parse_text(&source);
        check_text(&parsed.node);
        let index = LineIndex::new(&source);
        prop_assert_eq!(parsed.node.range, index.range_of(0, source.len()));
    }

    #[test]
    fn offsets_round_trip(source in "[a-z\n\r é]{0,40}") {
        let index = LineIndex::new(&source);
        for offset in 0..=source.len() {
            prop_assert_eq!(index.offset_at(index.position_at(offset)), offset);
        }
    }
}
