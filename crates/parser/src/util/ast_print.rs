//! Indented, line per node dump of a syntax tree.
//! Used by snapshot tests and the CLI.

use crate::node::{
    CommentNode, DirectiveNode, ElemProp, ElementChildNode, ElementNode, RootNode, TextChild,
    TextNode,
};

pub trait AstString {
    fn ast_string(&self, level: usize) -> String;
}

fn indent(level: usize) -> String {
    "  ".repeat(level)
}

fn join_lines<I: IntoIterator<Item = String>>(head: String, lines: I) -> String {
    lines.into_iter().fold(head, |mut ret, line| {
        ret.push('\n');
        ret.push_str(&line);
        ret
    })
}

impl<T> AstString for RootNode<T> {
    fn ast_string(&self, level: usize) -> String {
        let root_string = format!("{}Root {}", indent(level), self.range);
        let children = self.children.iter().map(|n| n.ast_string(level + 1));
        join_lines(root_string, children)
    }
}

impl<T> AstString for ElementChildNode<T> {
    fn ast_string(&self, level: usize) -> String {
        match self {
            ElementChildNode::Element(element) => element.ast_string(level),
            ElementChildNode::Text(text) => text.ast_string(level),
            ElementChildNode::Comment(comment) => comment.ast_string(level),
        }
    }
}

impl<T> AstString for ElementNode<T> {
    fn ast_string(&self, level: usize) -> String {
        let mut head = format!("{}Element {} {}", indent(level), self.tag_name, self.range);
        if self.is_self_closing {
            head += " self-closing";
        }
        let props = self.attributes.iter().map(|p| p.ast_string(level + 1));
        let children = self.children.iter().map(|n| n.ast_string(level + 1));
        join_lines(head, props.chain(children))
    }
}

impl<T> AstString for ElemProp<T> {
    fn ast_string(&self, level: usize) -> String {
        match self {
            ElemProp::Attr(attr) => {
                let value = match &attr.value {
                    Some(v) => format!("={:?}", v),
                    None => String::new(),
                };
                format!("{}Attribute {}{} {}", indent(level), attr.name, value, attr.range)
            }
            ElemProp::Dir(dir) => dir.ast_string(level),
        }
    }
}

impl<T> AstString for DirectiveNode<T> {
    fn ast_string(&self, level: usize) -> String {
        let mut ret = format!("{}Directive {}", indent(level), self.name);
        if let Some(arg) = &self.argument {
            if arg.is_dynamic {
                ret += &format!(":[{}]", arg.value);
            } else {
                ret += &format!(":{}", arg.value);
            }
        }
        for modifier in &self.modifiers {
            ret.push('.');
            ret.push_str(&modifier.name);
        }
        if let Some(expr) = &self.expression {
            ret += &format!("={:?}", expr.value);
        }
        ret += &format!(" {}", self.range);
        ret
    }
}

impl<T> AstString for TextNode<T> {
    fn ast_string(&self, level: usize) -> String {
        let head = format!("{}Text {}", indent(level), self.range);
        let children = self.children.iter().map(|c| c.ast_string(level + 1));
        join_lines(head, children)
    }
}

impl<T> AstString for TextChild<T> {
    fn ast_string(&self, level: usize) -> String {
        let prefix = indent(level);
        match self {
            TextChild::Literal(l) => format!("{}Literal {:?} {}", prefix, l.value, l.range),
            TextChild::CharacterReference(c) => {
                format!("{}Reference {} {:?} {}", prefix, c.raw, c.value, c.range)
            }
            TextChild::Interpolation(i) => {
                format!("{}Interpolation {:?} {}", prefix, i.value, i.range)
            }
        }
    }
}

impl<T> AstString for CommentNode<T> {
    fn ast_string(&self, level: usize) -> String {
        let kind = if self.is_bogus { "BogusComment" } else { "Comment" };
        format!("{}{} {:?} {}", indent(level), kind, self.content, self.range)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parse;

    #[test]
    fn test_print_tree() {
        let parsed = parse("<p :a.b=\"c\">x &lt; {{ y }}</p><!--z-->");
        let expected = r#"Root 0:0..0:38
  Element p 0:0..0:30
    Directive bind:a.b="c" 0:3..0:11
    Text 0:12..0:26
      Literal "x " 0:12..0:14
      Reference &lt; "<" 0:14..0:18
      Literal " " 0:18..0:19
      Interpolation " y " 0:19..0:26
  Comment "z" 0:30..0:38"#;
        assert_eq!(parsed.node.ast_string(0), expected);
    }
}
