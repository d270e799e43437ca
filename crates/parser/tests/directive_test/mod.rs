use super::common::{base_parse, first_element, get_errors};
use vue_template_parser::{
    cast,
    node::{DirectiveNode, DirectiveSemantics, ElemProp},
    ParserErrorKind as K, Position, Range,
};

fn directives(source: &str) -> Vec<DirectiveNode> {
    let parsed = base_parse(source);
    first_element(&parsed.node)
        .attributes
        .iter()
        .map(|p| cast!(p, ElemProp::Dir).clone())
        .collect()
}

fn single_directive(source: &str) -> DirectiveNode {
    let mut dirs = directives(source);
    assert_eq!(dirs.len(), 1, "{}", source);
    dirs.remove(0)
}

#[test]
fn test_on_and_bind() {
    let source = r#"<fetch v-on:start.delayed="onStart" :url="'//example.com'">"#;
    assert!(get_errors(source).is_empty());
    let dirs = directives(source);
    assert_eq!(dirs.len(), 2);

    let on = &dirs[0];
    assert_eq!(on.name, "on");
    assert!(!on.is_shorthand);
    assert_eq!(on.static_argument(), Some("start"));
    assert!(on.has_modifier("delayed"));
    assert_eq!(on.modifiers.len(), 1);
    match &on.semantics {
        DirectiveSemantics::On { handler } => {
            assert_eq!(handler.as_ref().unwrap().text(), "onStart")
        }
        other => panic!("unexpected semantics {:?}", other),
    }
    assert_eq!(
        on.range,
        Range::new(Position::new(0, 7), Position::new(0, 35))
    );
    assert_eq!(
        on.modifiers[0].range,
        Range::new(Position::new(0, 17), Position::new(0, 25))
    );

    let bind = &dirs[1];
    assert_eq!(bind.name, "bind");
    assert!(bind.is_shorthand);
    assert_eq!(bind.static_argument(), Some("url"));
    let expr = bind.expression.as_ref().unwrap();
    assert_eq!(expr.value, "'//example.com'");
    assert_eq!(expr.quote, Some('"'));
    assert!(matches!(
        bind.semantics,
        DirectiveSemantics::Bind { value: Some(_) }
    ));
}

#[test]
fn test_shorthands() {
    let dirs = directives(r#"<div @click="go" #default :title="t"></div>"#);
    let names: Vec<_> = dirs
        .iter()
        .map(|d| (d.name.as_str(), d.static_argument(), d.is_shorthand))
        .collect();
    assert_eq!(
        names,
        vec![
            ("on", Some("click"), true),
            ("slot", Some("default"), true),
            ("bind", Some("title"), true),
        ]
    );
}

#[test]
fn test_dynamic_argument() {
    let dir = single_directive(r#"<div v-bind:[key]="value"></div>"#);
    let arg = dir.argument.as_ref().unwrap();
    assert!(arg.is_dynamic);
    assert_eq!(arg.value, "key");
    assert!(arg.expression.is_some());
    assert_eq!(dir.static_argument(), None);
    assert_eq!(
        arg.range,
        Range::new(Position::new(0, 12), Position::new(0, 17))
    );
}

#[test]
fn test_dynamic_argument_with_spaces() {
    let source = r#"<div :[a + b]="x"></div>"#;
    assert!(get_errors(source).is_empty());
    let dir = single_directive(source);
    let arg = dir.argument.as_ref().unwrap();
    assert!(arg.is_dynamic);
    assert_eq!(arg.value, "a + b");
    assert!(arg.expression.is_some());
    assert_eq!(
        arg.range,
        Range::new(Position::new(0, 6), Position::new(0, 13))
    );
    assert_eq!(dir.expression.as_ref().unwrap().value, "x");
}

#[test]
fn test_unclosed_dynamic_argument() {
    let source = r#"<div :[key="x"></div>"#;
    assert!(get_errors(source).is_empty());
    let dir = single_directive(source);
    let arg = dir.argument.as_ref().unwrap();
    assert!(arg.is_dynamic);
    assert_eq!(arg.value, "key");
    assert_eq!(
        arg.range,
        Range::new(Position::new(0, 6), Position::new(0, 10))
    );
    assert_eq!(dir.expression.as_ref().unwrap().value, "x");
}

#[test]
fn test_dynamic_argument_never_duplicates() {
    let errors = get_errors(r#"<div :[a]="x" :[a]="y"></div>"#);
    assert!(errors.is_empty());
    let errors = get_errors(r#"<div :a="x" v-bind:a="y"></div>"#);
    assert_eq!(errors, vec![K::DuplicateAttribute]);
}

#[test]
fn test_modifiers() {
    let dir = single_directive(r#"<form @submit.stop.prevent="save"></form>"#);
    let modifiers: Vec<_> = dir.modifiers.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(modifiers, vec!["stop", "prevent"]);

    let dir = single_directive("<input v-model.trim>");
    assert_eq!(dir.name, "model");
    assert!(dir.argument.is_none());
    assert!(dir.has_modifier("trim"));
    assert!(dir.expression.is_none());
}

#[test]
fn test_illegal_modifier() {
    assert_eq!(
        get_errors(r#"<div @click.a$b="x"></div>"#),
        vec![K::IllegalDirectiveModifier]
    );
    assert_eq!(
        get_errors(r#"<div @click.="x"></div>"#),
        vec![K::IllegalDirectiveModifier]
    );
    let dir = single_directive(r#"<div @click.bad!.ok="x"></div>"#);
    let modifiers: Vec<_> = dir.modifiers.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(modifiers, vec!["ok"]);
}

#[test]
fn test_v_for() {
    let dir = single_directive(r#"<li v-for="(item, index) in items"></li>"#);
    match &dir.semantics {
        DirectiveSemantics::For {
            left,
            right,
            scope_identifiers,
        } => {
            assert_eq!(left.as_ref().unwrap().len(), 2);
            assert_eq!(right.as_ref().unwrap().text().trim(), "items");
            assert_eq!(scope_identifiers, &vec!["item", "index"]);
        }
        other => panic!("unexpected semantics {:?}", other),
    }

    let dir = single_directive(r#"<li v-for="{ id, name: label } of list"></li>"#);
    assert_eq!(dir.semantics.scope_identifiers(), ["id", "label"]);

    let dir = single_directive(r#"<li v-for="{ a, ...rest } in list"></li>"#);
    assert_eq!(dir.semantics.scope_identifiers(), ["a", "rest"]);
}

#[test]
fn test_v_for_without_keyword() {
    let dir = single_directive(r#"<li v-for="items"></li>"#);
    assert!(matches!(
        dir.semantics,
        DirectiveSemantics::For { left: None, right: None, .. }
    ));
}

#[test]
fn test_v_slot_scope() {
    let dir = single_directive(r#"<template #item="{ item, index }"></template>"#);
    assert_eq!(dir.name, "slot");
    assert_eq!(dir.semantics.scope_identifiers(), ["item", "index"]);

    let dir = single_directive(r#"<template #default="{ item = 1, ...others }"></template>"#);
    assert_eq!(dir.semantics.scope_identifiers(), ["item", "others"]);

    let dir = single_directive("<template v-slot></template>");
    assert!(matches!(
        dir.semantics,
        DirectiveSemantics::Slot { params: None, .. }
    ));
}

#[test]
fn test_v_model() {
    let dir = single_directive(r#"<input v-model="form.name">"#);
    match &dir.semantics {
        DirectiveSemantics::Model { value } => {
            assert_eq!(value.as_ref().unwrap().text().trim(), "form.name")
        }
        other => panic!("unexpected semantics {:?}", other),
    }
}

#[test]
fn test_conditionals() {
    let dirs = directives(r#"<p v-if="a" v-else-if="b" v-else v-show="c"></p>"#);
    let kinds: Vec<_> = dirs
        .iter()
        .map(|d| match &d.semantics {
            DirectiveSemantics::If { condition } => ("if", condition.is_some()),
            DirectiveSemantics::ElseIf { condition } => ("else-if", condition.is_some()),
            DirectiveSemantics::Else => ("else", true),
            DirectiveSemantics::Show { condition } => ("show", condition.is_some()),
            _ => ("other", false),
        })
        .collect();
    assert_eq!(
        kinds,
        vec![("if", true), ("else-if", true), ("else", true), ("show", true)]
    );
}

#[test]
fn test_unparsable_expression_is_not_an_error() {
    let source = r#"<p v-if="a b" v-text="x" v-html="y" v-focus></p>"#;
    assert!(get_errors(source).is_empty());
    let dirs = directives(source);
    assert!(matches!(
        dirs[0].semantics,
        DirectiveSemantics::If { condition: None }
    ));
    assert_eq!(dirs[0].expression.as_ref().unwrap().value, "a b");
    assert!(matches!(dirs[1].semantics, DirectiveSemantics::Text { content: Some(_) }));
    assert!(matches!(dirs[2].semantics, DirectiveSemantics::Html { content: Some(_) }));
    assert!(matches!(dirs[3].semantics, DirectiveSemantics::Custom));
}

#[test]
fn test_not_directive() {
    let parsed = base_parse("<div v-If=\"a\" vue=\"b\"></div>");
    let div = first_element(&parsed.node);
    assert!(div
        .attributes
        .iter()
        .all(|p| matches!(p, ElemProp::Attr(_))));
}
