use vue_template_parser::{
    cast,
    node::{ElementChildNode, ElementNode, RootNode},
    ErrorHandler, ParseOption, Parsed, Parser, ParserErrorKind,
};

#[derive(Clone)]
pub struct TestErrorHandler;
impl ErrorHandler for TestErrorHandler {}

pub fn base_parse(s: &str) -> Parsed<RootNode> {
    Parser::new(ParseOption::default()).parse(s, TestErrorHandler)
}

pub fn get_errors(s: &str) -> Vec<ParserErrorKind> {
    base_parse(s).errors.into_iter().map(|e| e.kind).collect()
}

pub fn element(node: &ElementChildNode) -> &ElementNode {
    cast!(node, ElementChildNode::Element)
}

/// the first root child, which must be an element
pub fn first_element(root: &RootNode) -> &ElementNode {
    element(&root.children[0])
}
