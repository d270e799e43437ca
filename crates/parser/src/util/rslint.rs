use rslint_parser::{ast::Expr, parse_expr, AstNode, SyntaxKind, SyntaxNode, SyntaxNodeExt};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Parsed JavaScript code embedded in a template.
/// It can be an expression or a pattern extracted from one, e.g. a function parameter.
// SyntaxNode is reference counted without atomics, so trees are not Send.
#[derive(Clone)]
pub struct Expression {
    node: SyntaxNode,
}

impl Expression {
    pub fn new(node: SyntaxNode) -> Self {
        Self { node }
    }
    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }
    pub fn kind(&self) -> SyntaxKind {
        self.node.kind()
    }
    pub fn text(&self) -> String {
        self.node.text().to_string()
    }
    /// typed view, None for patterns
    pub fn as_expr(&self) -> Option<Expr> {
        self.node.try_to()
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.kind(), self.text())
    }
}

#[cfg(feature = "serde")]
impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text())
    }
}

pub fn parse_js_expr(text: &str) -> Option<Expression> {
    use std::ops::Range;
    let parsed = parse_expr(text, 0);
    if !parsed.errors().is_empty() {
        return None;
    }
    // range should be equal after removing trailing trivia(comment/whitespace)
    // otherwise the text is not a single expression
    parsed
        .syntax()
        .try_to()
        .filter(|n: &Expr| {
            let r: Range<usize> = Range::from(n.syntax().trimmed_range());
            r.end - r.start == text.trim().len()
        })
        .map(|n| Expression::new(n.syntax().clone()))
}

/// Parameters of the first function found in `expr`.
pub fn function_params(expr: &Expression) -> Option<Vec<Expression>> {
    let list = expr
        .syntax()
        .descendants()
        .find(|n| n.kind() == SyntaxKind::PARAMETER_LIST)?;
    Some(list.children().map(Expression::new).collect())
}

/// Left hand side of an assignment expression.
pub fn assignment_target(expr: &Expression) -> Option<Expression> {
    let node = expr.syntax();
    if node.kind() != SyntaxKind::ASSIGN_EXPR {
        return None;
    }
    node.first_child().map(Expression::new)
}

/// Names bound by parameter patterns, in source order.
pub fn bound_identifiers(patterns: &[Expression]) -> Vec<String> {
    let mut names = vec![];
    for pattern in patterns {
        collect_names(pattern.syntax(), &mut names);
    }
    names
}

fn collect_names(node: &SyntaxNode, names: &mut Vec<String>) {
    match node.kind() {
        SyntaxKind::NAME => names.push(node.text().to_string().trim().to_string()),
        // `{ key: value }` binds value only
        SyntaxKind::KEY_VALUE_PATTERN => {
            for child in node.children().skip(1) {
                collect_names(&child, names);
            }
        }
        // default values bind nothing
        SyntaxKind::ASSIGN_PATTERN => {
            if let Some(child) = node.first_child() {
                collect_names(&child, names);
            }
        }
        _ => {
            for child in node.children() {
                collect_names(&child, names);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cast;
    use rslint_parser::ast::BinOp;

    #[test]
    fn test_no_panic() {
        let a = parse_js_expr("a + b").unwrap();
        let expr = cast!(a.as_expr().unwrap(), Expr::BinExpr);
        let a = expr.lhs().unwrap();
        let b = expr.rhs().unwrap();
        assert_eq!(a.syntax().text(), "a");
        assert_eq!(expr.op().unwrap(), BinOp::Plus);
        assert_eq!(b.syntax().text(), "b");
    }

    #[test]
    fn test_invalid_expr() {
        assert!(parse_js_expr("(a + b + c, d, e,f)").is_some());
        assert!(parse_js_expr("a..b").is_none());
        assert!(parse_js_expr("a // b").is_none());
        assert!(parse_js_expr("a b").is_none());
        assert!(parse_js_expr(" a + b ").is_some());
        assert!(parse_js_expr("a **** b").is_none());
        assert!(parse_js_expr("a; ddd;").is_none());
        assert!(parse_js_expr("if (a) {b} else {c}").is_none());
    }

    fn param_names(src: &str) -> Vec<String> {
        let expr = parse_js_expr(src).unwrap();
        let params = function_params(&expr).unwrap();
        bound_identifiers(&params)
    }

    #[test]
    fn test_bound_identifiers() {
        assert_eq!(param_names("(item) => {}"), vec!["item"]);
        assert_eq!(param_names("(item, index) => {}"), vec!["item", "index"]);
        assert_eq!(param_names("({ a, b: c }) => {}"), vec!["a", "c"]);
        assert_eq!(param_names("([x, y]) => {}"), vec!["x", "y"]);
        assert_eq!(param_names("function (a, b = c) {}"), vec!["a", "b"]);
    }

    #[test]
    fn test_assignment_target() {
        let expr = parse_js_expr("foo.bar = 0").unwrap();
        let target = assignment_target(&expr).unwrap();
        assert_eq!(target.text().trim(), "foo.bar");
        let expr = parse_js_expr("foo").unwrap();
        assert!(assignment_target(&expr).is_none());
    }
}
