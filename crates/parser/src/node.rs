//! Syntax tree produced by the parser.
//!
//! Every node owns its subtree and carries its source [`Range`] plus an optional
//! `data` payload. The parser never writes `data`: it is reserved for annotation
//! passes run by consumers, e.g. through a [`NodeVisitor`].
//! Nodes never point back at their parents.

use super::{util::rslint::Expression, Namespace, Position, Range};
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::Serialize;

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone)]
pub struct RootNode<T = ()> {
    pub children: Vec<ElementChildNode<T>>,
    pub range: Range,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub data: Option<T>,
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
#[derive(Debug, Clone)]
pub enum ElementChildNode<T = ()> {
    Element(ElementNode<T>),
    Text(TextNode<T>),
    Comment(CommentNode<T>),
}

impl<T> ElementChildNode<T> {
    pub fn range(&self) -> &Range {
        match self {
            ElementChildNode::Element(e) => &e.range,
            ElementChildNode::Text(t) => &t.range,
            ElementChildNode::Comment(c) => &c.range,
        }
    }
    pub fn as_element(&self) -> Option<&ElementNode<T>> {
        match self {
            ElementChildNode::Element(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagType {
    /// native HTML or SVG element
    Element,
    Component,
    Template,
    Slot,
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone)]
pub struct ElementNode<T = ()> {
    pub tag_name: String,
    pub tag_type: TagType,
    pub namespace: Namespace,
    /// attributes and directives in source order
    pub attributes: Vec<ElemProp<T>>,
    pub children: Vec<ElementChildNode<T>>,
    pub is_self_closing: bool,
    pub range: Range,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub data: Option<T>,
}

impl<T> ElementNode<T> {
    pub fn attribute(&self, name: &str) -> Option<&AttributeNode<T>> {
        self.attributes.iter().find_map(|prop| match prop {
            ElemProp::Attr(attr) if attr.name == name => Some(attr),
            _ => None,
        })
    }
    pub fn directive(&self, name: &str) -> Option<&DirectiveNode<T>> {
        self.attributes.iter().find_map(|prop| match prop {
            ElemProp::Dir(dir) if dir.name == name => Some(dir),
            _ => None,
        })
    }
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
#[derive(Debug, Clone)]
pub enum ElemProp<T = ()> {
    #[cfg_attr(feature = "serde", serde(rename = "Attribute"))]
    Attr(AttributeNode<T>),
    #[cfg_attr(feature = "serde", serde(rename = "Directive"))]
    Dir(DirectiveNode<T>),
}

impl<T> ElemProp<T> {
    pub fn range(&self) -> &Range {
        match self {
            ElemProp::Attr(a) => &a.range,
            ElemProp::Dir(d) => &d.range,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone)]
pub struct AttributeNode<T = ()> {
    pub name: String,
    /// None for boolean attributes like `required`
    pub value: Option<String>,
    pub quote: Option<char>,
    pub range: Range,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub data: Option<T>,
}

/// Directive has
/// v-name:arg.modifier="expr"
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone)]
pub struct DirectiveNode<T = ()> {
    /// canonical name without prefix, e.g. `bind` for both `v-bind:` and `:`
    pub name: String,
    pub is_shorthand: bool,
    pub argument: Option<DirectiveArgument<T>>,
    pub modifiers: SmallVec<[DirectiveModifier<T>; 2]>,
    pub expression: Option<DirectiveExpression<T>>,
    pub semantics: DirectiveSemantics,
    pub range: Range,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub data: Option<T>,
}

impl<T> DirectiveNode<T> {
    pub fn has_modifier(&self, name: &str) -> bool {
        self.modifiers.iter().any(|m| m.name == name)
    }
    /// argument text when it is static
    pub fn static_argument(&self) -> Option<&str> {
        self.argument
            .as_ref()
            .filter(|a| !a.is_dynamic)
            .map(|a| a.value.as_str())
    }
}

/// Directive supports two forms
/// static and dynamic
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone)]
pub struct DirectiveArgument<T = ()> {
    /// `click` in `@click`, or `foo + bar` in `:[foo + bar]`
    pub value: String,
    pub is_dynamic: bool,
    /// parsed dynamic argument
    pub expression: Option<Expression>,
    pub range: Range,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub data: Option<T>,
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone)]
pub struct DirectiveModifier<T = ()> {
    pub name: String,
    pub range: Range,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub data: Option<T>,
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone)]
pub struct DirectiveExpression<T = ()> {
    /// raw right hand side text, quotes stripped
    pub value: String,
    pub quote: Option<char>,
    pub range: Range,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub data: Option<T>,
}

/// Parsed payload of the directives with known meaning.
/// Fields stay `None` when the embedded code does not parse.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
#[derive(Debug, Clone)]
pub enum DirectiveSemantics {
    For {
        /// parameters of the alias list, e.g. `(item, index)`
        left: Option<Vec<Expression>>,
        right: Option<Expression>,
        scope_identifiers: Vec<String>,
    },
    If {
        condition: Option<Expression>,
    },
    ElseIf {
        condition: Option<Expression>,
    },
    Else,
    Show {
        condition: Option<Expression>,
    },
    On {
        handler: Option<Expression>,
    },
    Bind {
        value: Option<Expression>,
    },
    Model {
        /// assignable target
        value: Option<Expression>,
    },
    Slot {
        params: Option<Vec<Expression>>,
        scope_identifiers: Vec<String>,
    },
    Text {
        content: Option<Expression>,
    },
    Html {
        content: Option<Expression>,
    },
    Custom,
}

impl DirectiveSemantics {
    /// identifiers the directive brings into scope of its element
    pub fn scope_identifiers(&self) -> &[String] {
        match self {
            DirectiveSemantics::For {
                scope_identifiers, ..
            }
            | DirectiveSemantics::Slot {
                scope_identifiers, ..
            } => scope_identifiers,
            _ => &[],
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone)]
pub struct TextNode<T = ()> {
    pub children: Vec<TextChild<T>>,
    pub range: Range,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub data: Option<T>,
}

impl<T> TextNode<T> {
    /// text with references decoded and interpolations kept verbatim
    pub fn decoded(&self) -> String {
        let mut ret = String::new();
        for child in &self.children {
            match child {
                TextChild::Literal(l) => ret.push_str(&l.value),
                TextChild::CharacterReference(c) => ret.push_str(&c.value),
                TextChild::Interpolation(i) => ret.push_str(&i.raw),
            }
        }
        ret
    }
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
#[derive(Debug, Clone)]
pub enum TextChild<T = ()> {
    Literal(LiteralNode<T>),
    #[cfg_attr(feature = "serde", serde(rename = "CharacterReferenceLiteral"))]
    CharacterReference(CharacterReferenceNode<T>),
    Interpolation(InterpolationNode<T>),
}

impl<T> TextChild<T> {
    pub fn range(&self) -> &Range {
        match self {
            TextChild::Literal(l) => &l.range,
            TextChild::CharacterReference(c) => &c.range,
            TextChild::Interpolation(i) => &i.range,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone)]
pub struct LiteralNode<T = ()> {
    pub value: String,
    pub range: Range,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub data: Option<T>,
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceType {
    Named,
    Hex,
    Numeric,
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone)]
pub struct CharacterReferenceNode<T = ()> {
    /// decoded text
    pub value: String,
    /// source text, e.g. `&amp;`
    pub raw: String,
    pub reference_type: ReferenceType,
    pub range: Range,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub data: Option<T>,
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone)]
pub struct InterpolationNode<T = ()> {
    /// code between the delimiters
    pub value: String,
    /// full source text including delimiters
    pub raw: String,
    pub expression: Option<Expression>,
    pub range: Range,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub data: Option<T>,
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone)]
pub struct CommentNode<T = ()> {
    pub content: String,
    /// `<!DOCTYPE>`, `<?xml>` or markup recovered as comment
    pub is_bogus: bool,
    pub range: Range,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub data: Option<T>,
}

/// Borrowed view of any node.
#[derive(Debug)]
pub enum NodeRef<'n, T = ()> {
    Element(&'n ElementNode<T>),
    Attribute(&'n AttributeNode<T>),
    Directive(&'n DirectiveNode<T>),
    Text(&'n TextNode<T>),
    Literal(&'n LiteralNode<T>),
    CharacterReference(&'n CharacterReferenceNode<T>),
    Interpolation(&'n InterpolationNode<T>),
    Comment(&'n CommentNode<T>),
}

impl<'n, T> Clone for NodeRef<'n, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'n, T> Copy for NodeRef<'n, T> {}

impl<'n, T> NodeRef<'n, T> {
    pub fn range(&self) -> &'n Range {
        match *self {
            NodeRef::Element(n) => &n.range,
            NodeRef::Attribute(n) => &n.range,
            NodeRef::Directive(n) => &n.range,
            NodeRef::Text(n) => &n.range,
            NodeRef::Literal(n) => &n.range,
            NodeRef::CharacterReference(n) => &n.range,
            NodeRef::Interpolation(n) => &n.range,
            NodeRef::Comment(n) => &n.range,
        }
    }
}

impl<'n, T> From<&'n ElementChildNode<T>> for NodeRef<'n, T> {
    fn from(node: &'n ElementChildNode<T>) -> Self {
        match node {
            ElementChildNode::Element(e) => NodeRef::Element(e),
            ElementChildNode::Text(t) => NodeRef::Text(t),
            ElementChildNode::Comment(c) => NodeRef::Comment(c),
        }
    }
}

impl<'n, T> From<&'n ElemProp<T>> for NodeRef<'n, T> {
    fn from(prop: &'n ElemProp<T>) -> Self {
        match prop {
            ElemProp::Attr(a) => NodeRef::Attribute(a),
            ElemProp::Dir(d) => NodeRef::Directive(d),
        }
    }
}

impl<'n, T> From<&'n TextChild<T>> for NodeRef<'n, T> {
    fn from(child: &'n TextChild<T>) -> Self {
        match child {
            TextChild::Literal(l) => NodeRef::Literal(l),
            TextChild::CharacterReference(c) => NodeRef::CharacterReference(c),
            TextChild::Interpolation(i) => NodeRef::Interpolation(i),
        }
    }
}

impl<T> RootNode<T> {
    /// Innermost node whose range contains `position`.
    /// The first match wins when sibling ranges touch.
    pub fn node_at(&self, position: Position) -> Option<NodeRef<'_, T>> {
        if !self.range.contains(position) {
            return None;
        }
        find_in_children(&self.children, position)
    }
}

fn find_in_children<T>(
    children: &[ElementChildNode<T>],
    position: Position,
) -> Option<NodeRef<'_, T>> {
    let child = children.iter().find(|c| c.range().contains(position))?;
    Some(match child {
        ElementChildNode::Element(e) => {
            let prop = e.attributes.iter().find(|p| p.range().contains(position));
            if let Some(prop) = prop {
                NodeRef::from(prop)
            } else {
                find_in_children(&e.children, position).unwrap_or(NodeRef::Element(e))
            }
        }
        ElementChildNode::Text(t) => t
            .children
            .iter()
            .find(|c| c.range().contains(position))
            .map_or(NodeRef::Text(t), NodeRef::from),
        ElementChildNode::Comment(c) => NodeRef::Comment(c),
    })
}

/// Mutable access to a node right after it is parsed.
pub enum NodeMut<'n, T = ()> {
    Element(&'n mut ElementNode<T>),
    Attribute(&'n mut AttributeNode<T>),
    Directive(&'n mut DirectiveNode<T>),
    Text(&'n mut TextNode<T>),
    Literal(&'n mut LiteralNode<T>),
    CharacterReference(&'n mut CharacterReferenceNode<T>),
    Interpolation(&'n mut InterpolationNode<T>),
    Comment(&'n mut CommentNode<T>),
}

impl<'n, T> NodeMut<'n, T> {
    pub fn range(&self) -> Range {
        match self {
            NodeMut::Element(n) => n.range,
            NodeMut::Attribute(n) => n.range,
            NodeMut::Directive(n) => n.range,
            NodeMut::Text(n) => n.range,
            NodeMut::Literal(n) => n.range,
            NodeMut::CharacterReference(n) => n.range,
            NodeMut::Interpolation(n) => n.range,
            NodeMut::Comment(n) => n.range,
        }
    }
    pub fn data_mut(&mut self) -> &mut Option<T> {
        match self {
            NodeMut::Element(n) => &mut n.data,
            NodeMut::Attribute(n) => &mut n.data,
            NodeMut::Directive(n) => &mut n.data,
            NodeMut::Text(n) => &mut n.data,
            NodeMut::Literal(n) => &mut n.data,
            NodeMut::CharacterReference(n) => &mut n.data,
            NodeMut::Interpolation(n) => &mut n.data,
            NodeMut::Comment(n) => &mut n.data,
        }
    }
}

/// Receives every node synchronously, in document order, as soon as it is complete.
/// Text children are reported before their text node and
/// an element is reported after its closing tag.
pub trait NodeVisitor<T> {
    fn on_node_parsed(&mut self, _node: NodeMut<'_, T>) {}
}

/// Visitor that does nothing.
pub struct NoopVisitor;
impl<T> NodeVisitor<T> for NoopVisitor {}

impl<T, F> NodeVisitor<T> for F
where
    F: FnMut(NodeMut<'_, T>),
{
    fn on_node_parsed(&mut self, node: NodeMut<'_, T>) {
        self(node)
    }
}
