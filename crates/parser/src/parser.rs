//! Recursive descent template parser.
//! The canonical parsing strategy should adhere to the spec below.
//! https://html.spec.whatwg.org/multipage/parsing.html#tokenization
//! Unlike a browser, it never builds a DOM: every construct becomes a node with its
//! source range, and malformed markup degrades to comments or text with an error recorded.

use super::{
    context::{next_char_len, ElementFrame, ParserContext},
    directive::{is_directive_start, parse_directive},
    error::{ErrorHandler, ParserError, ParserErrorKind as ErrorKind},
    node::{
        AttributeNode, CharacterReferenceNode, CommentNode, DirectiveNode, ElemProp,
        ElementChildNode, ElementNode, InterpolationNode, LiteralNode, NodeMut, NodeVisitor,
        NoopVisitor, ReferenceType, RootNode, TextChild, TextNode,
    },
    options::{get_text_mode, ParseOption, TextMode},
    util::{
        decode_html::{decode_code_point, find_named_ref, match_char_ref, parse_code_point},
        get_tag_type, is_closing_tag, non_whitespace,
    },
};
use rustc_hash::FxHashSet;
use std::marker::PhantomData;
use tracing::debug;

/// A parse result: the tree and every error met, in source order.
#[derive(Debug)]
pub struct Parsed<N> {
    pub node: N,
    pub errors: Vec<ParserError>,
}

pub struct Parser {
    option: ParseOption,
}

impl Parser {
    pub fn new(option: ParseOption) -> Self {
        Self { option }
    }

    pub fn parse<T, E>(&self, source: &str, err_handle: E) -> Parsed<RootNode<T>>
    where
        E: ErrorHandler,
    {
        self.parse_with(source, err_handle, NoopVisitor)
    }

    /// Parses a template and reports every node to `visitor` as soon as it is complete.
    pub fn parse_with<T, E, V>(&self, source: &str, err_handle: E, visitor: V) -> Parsed<RootNode<T>>
    where
        E: ErrorHandler,
        V: NodeVisitor<T>,
    {
        let mut builder = AstBuilder::new(source, &self.option, err_handle, visitor);
        let node = builder.build_root();
        let errors = builder.ctx.take_errors();
        debug!(
            nodes = builder.node_count,
            errors = errors.len(),
            "template parsed"
        );
        Parsed { node, errors }
    }

    /// Parses the whole source as one text node in DATA mode.
    /// Markup is not recognized, so `<` is plain text.
    pub fn parse_text<T, E>(&self, source: &str, err_handle: E) -> Parsed<TextNode<T>>
    where
        E: ErrorHandler,
    {
        self.parse_text_with(source, err_handle, NoopVisitor)
    }

    pub fn parse_text_with<T, E, V>(
        &self,
        source: &str,
        err_handle: E,
        visitor: V,
    ) -> Parsed<TextNode<T>>
    where
        E: ErrorHandler,
        V: NodeVisitor<T>,
    {
        let mut builder = AstBuilder::new(source, &self.option, err_handle, visitor);
        let node = builder.parse_text_until(TextMode::Data, source.len());
        let errors = builder.ctx.take_errors();
        debug!(
            nodes = builder.node_count,
            errors = errors.len(),
            "text parsed"
        );
        Parsed { node, errors }
    }
}

struct AstBuilder<'a, T, E, V>
where
    E: ErrorHandler,
    V: NodeVisitor<T>,
{
    ctx: ParserContext<'a, E>,
    visitor: V,
    node_count: usize,
    pd: PhantomData<fn() -> T>,
}

impl<'a, T, E, V> AstBuilder<'a, T, E, V>
where
    E: ErrorHandler,
    V: NodeVisitor<T>,
{
    fn new(source: &'a str, option: &'a ParseOption, err_handle: E, visitor: V) -> Self {
        Self {
            ctx: ParserContext::new(source, option, err_handle),
            visitor,
            node_count: 0,
            pd: PhantomData,
        }
    }

    fn notify(&mut self, node: NodeMut<'_, T>) {
        self.node_count += 1;
        self.visitor.on_node_parsed(node);
    }

    fn build_root(&mut self) -> RootNode<T> {
        let children = self.parse_children(TextMode::Data);
        let range = self.ctx.range_of(0, self.ctx.full_source().len());
        RootNode {
            children,
            range,
            data: None,
        }
    }

    /// pushes the frame for the duration of `f`
    fn with_ancestor<R>(&mut self, frame: ElementFrame, f: impl FnOnce(&mut Self) -> R) -> R {
        self.ctx.push_ancestor(frame);
        let ret = f(self);
        self.ctx.pop_ancestor();
        ret
    }

    fn parse_children(&mut self, mode: TextMode) -> Vec<ElementChildNode<T>> {
        let mut nodes = vec![];
        while !self.ctx.is_terminal(mode) {
            let start = self.ctx.offset();
            let src = self.ctx.source();
            if mode == TextMode::Data && src.starts_with('<') {
                if starts_with_ignore_case(src, "<![CDATA[") {
                    let children = self.parse_cdata();
                    nodes.extend(children);
                } else if let Some(node) = self.parse_element_like() {
                    nodes.push(node);
                }
                // markup consumed, or dropped after an error
                if self.ctx.offset() != start {
                    continue;
                }
            }
            let text = self.parse_text_node(mode);
            nodes.push(ElementChildNode::Text(text));
        }
        nodes
    }

    // https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state
    fn parse_element_like(&mut self) -> Option<ElementChildNode<T>> {
        let src = self.ctx.source();
        debug_assert!(src.starts_with('<'));
        let start = self.ctx.offset();
        if src.starts_with("<!--") {
            Some(ElementChildNode::Comment(self.parse_comment()))
        } else if src.starts_with("<!") || src.starts_with("<?") {
            Some(ElementChildNode::Comment(self.parse_bogus_comment()))
        } else if src.starts_with("</") {
            self.parse_unexpected_end_tag()
        } else if src.len() == 1 {
            self.ctx.emit_error(ErrorKind::EofBeforeTagName, None, None);
            None
        } else if src[1..].starts_with(|c: char| c.is_ascii_alphabetic()) {
            Some(ElementChildNode::Element(self.parse_element()))
        } else {
            // left to text parsing
            let char_end = start + 1 + next_char_len(&src[1..]);
            self.ctx.emit_error(
                ErrorKind::InvalidFirstCharacterInTagName,
                Some(start + 1),
                Some(char_end),
            );
            None
        }
    }

    // an end tag reaching here closes no open element
    // https://html.spec.whatwg.org/multipage/parsing.html#end-tag-open-state
    fn parse_unexpected_end_tag(&mut self) -> Option<ElementChildNode<T>> {
        let src = self.ctx.source();
        let start = self.ctx.offset();
        if src.len() == 2 {
            self.ctx.emit_error(ErrorKind::EofBeforeTagName, Some(start), Some(start + 2));
            return None;
        }
        if src.starts_with("</>") {
            self.ctx.advance_by(3);
            self.ctx.emit_error(ErrorKind::MissingEndTagName, Some(start), None);
            return None;
        }
        if !src[2..].starts_with(|c: char| c.is_ascii_alphabetic()) {
            let char_end = start + 2 + next_char_len(&src[2..]);
            self.ctx.emit_error(
                ErrorKind::InvalidFirstCharacterInTagName,
                Some(start + 2),
                Some(char_end),
            );
            return Some(ElementChildNode::Comment(self.parse_bogus_comment()));
        }
        let comment = self.parse_bogus_comment();
        self.ctx.emit_error(ErrorKind::UnexpectedEndTag, Some(start), None);
        Some(ElementChildNode::Comment(comment))
    }

    fn parse_element(&mut self) -> ElementNode<T> {
        debug_assert!(self.ctx.source().starts_with('<'));
        let start = self.ctx.offset();
        let option = self.ctx.option;
        self.ctx.advance_by(1);
        let name_len = self
            .ctx
            .source()
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'-')
            .count();
        let tag_name = self.ctx.advance_by(name_len).to_string();
        let namespace = (option.get_namespace)(&tag_name, self.ctx.parent());
        let mode = get_text_mode(&tag_name, namespace);
        let mut frame = ElementFrame::new(tag_name.clone(), namespace);
        let attributes = self.parse_attributes(&mut frame);
        let mut is_self_closing = false;
        if self.ctx.is_eof() {
            self.ctx
                .emit_error(ErrorKind::EofInClosingTag, Some(start), None);
        } else if self.ctx.source().starts_with("/>") {
            self.ctx.advance_by(2);
            is_self_closing = true;
        } else {
            debug_assert!(self.ctx.source().starts_with('>'));
            self.ctx.advance_by(1);
        }
        // void elements never have children
        if (option.is_void_tag)(&tag_name) {
            is_self_closing = true;
        }
        let children = if is_self_closing {
            vec![]
        } else {
            let children = self.with_ancestor(frame, |b| b.parse_children(mode));
            self.parse_closing_tag(&tag_name);
            children
        };
        let mut element = ElementNode {
            tag_type: get_tag_type(&tag_name),
            tag_name,
            namespace,
            attributes,
            children,
            is_self_closing,
            range: self.ctx.range_from(start),
            data: None,
        };
        self.notify(NodeMut::Element(&mut element));
        element
    }

    // https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state
    fn parse_attributes(&mut self, frame: &mut ElementFrame) -> Vec<ElemProp<T>> {
        let mut props = vec![];
        let mut seen = FxHashSet::default();
        loop {
            self.ctx.advance_spaces();
            let src = self.ctx.source();
            if src.is_empty() || src.starts_with('>') || src.starts_with("/>") {
                return props;
            }
            if src.starts_with('/') {
                self.ctx
                    .emit_error(ErrorKind::UnexpectedSolidusInTag, None, None);
                self.ctx.advance_by(1);
                continue;
            }
            let start = self.ctx.offset();
            let mut prop = match self.parse_attribute_like() {
                Some(prop) => prop,
                None => continue,
            };
            if let Some(key) = prop_key(&prop) {
                if !seen.insert(key) {
                    self.ctx
                        .emit_error(ErrorKind::DuplicateAttribute, Some(start), None);
                }
            }
            match &mut prop {
                ElemProp::Attr(attr) => {
                    frame
                        .attributes
                        .push((attr.name.clone(), attr.value.clone()));
                    self.notify(NodeMut::Attribute(attr));
                }
                ElemProp::Dir(dir) => self.notify(NodeMut::Directive(dir)),
            }
            props.push(prop);
        }
    }

    /// always consumes input, returns None for dropped attributes
    fn parse_attribute_like(&mut self) -> Option<ElemProp<T>> {
        if is_directive_start(self.ctx.source()) {
            parse_directive(&mut self.ctx).map(ElemProp::Dir)
        } else {
            self.parse_attribute().map(ElemProp::Attr)
        }
    }

    // https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state
    fn parse_attribute(&mut self) -> Option<AttributeNode<T>> {
        let src = self.ctx.source();
        debug_assert!(src.starts_with(is_valid_name_char));
        let start = self.ctx.offset();
        // first char can be `=`
        let first = next_char_len(src);
        let name_len = src[first..]
            .find(|c: char| !semi_valid_attr_name(c))
            .map_or(src.len(), |i| i + first);
        let name = self.ctx.advance_by(name_len);
        let value = parse_attribute_value(&mut self.ctx);
        // case like <tag =="value"/>
        if name.starts_with('=') {
            self.ctx.emit_error(
                ErrorKind::UnexpectedEqualsSignBeforeAttribute,
                Some(start),
                Some(start + 1),
            );
            return None;
        }
        let (value, quote) = match value {
            Some(v) => (Some(v.value), v.quote),
            None => (None, None),
        };
        Some(AttributeNode {
            name: name.to_string(),
            value,
            quote,
            range: self.ctx.range_from(start),
            data: None,
        })
    }

    fn parse_closing_tag(&mut self, tag_name: &str) {
        let src = self.ctx.source();
        // unclosed element is closed by an ancestor's end tag or EOF
        if !is_closing_tag(src, tag_name) {
            return;
        }
        let start = self.ctx.offset();
        self.ctx.advance_by(2 + tag_name.len());
        let rest = self.ctx.source();
        match rest.find('>') {
            Some(i) => {
                self.ctx.advance_by(i + 1);
            }
            None => {
                self.ctx.advance_by(rest.len());
                self.ctx
                    .emit_error(ErrorKind::EofInClosingTag, Some(start), None);
            }
        }
    }

    // https://html.spec.whatwg.org/multipage/parsing.html#comment-start-state
    fn parse_comment(&mut self) -> CommentNode<T> {
        debug_assert!(self.ctx.source().starts_with("<!--"));
        let start = self.ctx.offset();
        self.ctx.advance_by(4);
        let src = self.ctx.source();
        let content = if src.starts_with('>') {
            // <!-->
            self.ctx.advance_by(1);
            self.ctx
                .emit_error(ErrorKind::AbruptClosingOfEmptyComment, Some(start), None);
            String::new()
        } else if src.starts_with("->") {
            // <!--->
            self.ctx.advance_by(2);
            self.ctx
                .emit_error(ErrorKind::AbruptClosingOfEmptyComment, Some(start), None);
            String::new()
        } else if src == "-" || src.is_empty() {
            self.ctx.advance_by(src.len());
            self.ctx.emit_error(ErrorKind::EofInComment, Some(start), None);
            String::new()
        } else {
            let len = [src.find("-->"), src.find("--!>")]
                .iter()
                .flatten()
                .copied()
                .min()
                .unwrap_or(src.len());
            let content = self.ctx.advance_by(len).replace('\0', "\u{fffd}");
            let rest = self.ctx.source();
            if rest.starts_with("-->") {
                self.ctx.advance_by(3);
            } else if rest.starts_with("--!>") {
                let end = self.ctx.offset();
                self.ctx.emit_error(
                    ErrorKind::IncorrectlyClosedComment,
                    Some(end),
                    Some(end + 4),
                );
                self.ctx.advance_by(4);
            } else {
                self.ctx.emit_error(ErrorKind::EofInComment, Some(start), None);
            }
            content
        };
        let mut comment = CommentNode {
            content,
            is_bogus: false,
            range: self.ctx.range_from(start),
            data: None,
        };
        self.notify(NodeMut::Comment(&mut comment));
        comment
    }

    #[cold]
    #[inline(never)]
    fn parse_bogus_comment(&mut self) -> CommentNode<T> {
        /* /^<(?:[\!\?]|\/[^a-z>])/i from Vue's parseBogusComment
        ^            // starts with
        <            // a < followed by
        (?:          // a non-capturing group of
         [\!\?]      // a char of ! or ?
         |           // or
         \/          // a slash, unmatched end tags are bogus here too
        )
        */
        let src = self.ctx.source();
        debug_assert!(src.starts_with("<!") || src.starts_with("<?") || src.starts_with("</"));
        let start = self.ctx.offset();
        // <? keeps its question mark in content
        let opener = if src.starts_with("<?") { 1 } else { 2 };
        self.ctx.advance_by(opener);
        let rest = self.ctx.source();
        let len = rest.find('>').unwrap_or(rest.len());
        let content = self.ctx.advance_by(len).to_string();
        if !self.ctx.is_eof() {
            self.ctx.advance_by(1);
        }
        let mut comment = CommentNode {
            content,
            is_bogus: true,
            range: self.ctx.range_from(start),
            data: None,
        };
        self.notify(NodeMut::Comment(&mut comment));
        comment
    }

    /// CDATA children are spliced into the enclosing element.
    #[cold]
    #[inline(never)]
    fn parse_cdata(&mut self) -> Vec<ElementChildNode<T>> {
        debug_assert!(starts_with_ignore_case(self.ctx.source(), "<![CDATA["));
        let start = self.ctx.offset();
        self.ctx.advance_by(9);
        let children = self.parse_children(TextMode::CData);
        if self.ctx.source().starts_with("]]>") {
            self.ctx.advance_by(3);
        } else if self.ctx.is_eof() {
            self.ctx.emit_error(ErrorKind::EofInCdata, Some(start), None);
        }
        children
    }

    fn parse_text_node(&mut self, mode: TextMode) -> TextNode<T> {
        let src = self.ctx.source();
        let first = next_char_len(src);
        let len = match mode {
            TextMode::Data => src[first..].find('<').map_or(src.len(), |i| i + first),
            TextMode::RcData | TextMode::RawText => self.ctx.find_appropriate_end(),
            TextMode::CData => {
                let parent_end = self.ctx.find_appropriate_end();
                src.find("]]>").map_or(parent_end, |i| i.min(parent_end))
            }
        };
        // a text node always makes progress
        let end = self.ctx.offset() + len.max(first);
        self.parse_text_until(mode, end)
    }

    /// `end` bounds literals only, an interpolation may run past it.
    fn parse_text_until(&mut self, mode: TextMode, end: usize) -> TextNode<T> {
        let start = self.ctx.offset();
        let decode = matches!(mode, TextMode::Data | TextMode::RcData);
        let mut children = vec![];
        while self.ctx.offset() < end {
            let src = self.ctx.source();
            if decode && self.is_interpolation_start(src) {
                let interpolation = self.parse_interpolation();
                children.push(TextChild::Interpolation(interpolation));
                continue;
            }
            if decode && src.starts_with('&') {
                if let Some(reference) = self.parse_character_reference() {
                    children.push(TextChild::CharacterReference(reference));
                    continue;
                }
            }
            let literal = self.parse_literal(end, decode);
            children.push(TextChild::Literal(literal));
        }
        let mut text = TextNode {
            children,
            range: self.ctx.range_from(start),
            data: None,
        };
        self.notify(NodeMut::Text(&mut text));
        text
    }

    fn is_interpolation_start(&self, src: &str) -> bool {
        let open = &self.ctx.option.delimiters.0;
        !open.is_empty() && src.starts_with(open.as_str())
    }

    fn parse_interpolation(&mut self) -> InterpolationNode<T> {
        let option = self.ctx.option;
        let (open, close) = &option.delimiters;
        debug_assert!(self.ctx.source().starts_with(open.as_str()));
        let start = self.ctx.offset();
        self.ctx.advance_by(open.len());
        let src = self.ctx.source();
        let len = src.find(close.as_str()).unwrap_or(src.len());
        let value_start = self.ctx.offset();
        let value = self.ctx.advance_by(len);
        if !close.is_empty() && self.ctx.source().starts_with(close.as_str()) {
            self.ctx.advance_by(close.len());
        } else {
            self.ctx
                .emit_error(ErrorKind::EofInInterpolation, Some(start), None);
        }
        let raw = &self.ctx.full_source()[start..self.ctx.offset()];
        let mut interpolation = InterpolationNode {
            value: value.to_string(),
            raw: raw.to_string(),
            expression: self.ctx.parse_expression(value, value_start),
            range: self.ctx.range_from(start),
            data: None,
        };
        self.notify(NodeMut::Interpolation(&mut interpolation));
        interpolation
    }

    /// None if the source does not start with a decodable reference
    // https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state
    fn parse_character_reference(&mut self) -> Option<CharacterReferenceNode<T>> {
        let src = self.ctx.source();
        let matched = match_char_ref(src)?;
        let (value, error) = match matched.reference_type {
            ReferenceType::Named => {
                let table = self.ctx.option.named_character_references;
                (find_named_ref(table, matched.body)?.to_string(), None)
            }
            ReferenceType::Hex | ReferenceType::Numeric => {
                let radix = if matched.reference_type == ReferenceType::Hex {
                    16
                } else {
                    10
                };
                let (c, error) = decode_code_point(parse_code_point(matched.body, radix));
                (c.to_string(), error)
            }
        };
        let start = self.ctx.offset();
        let raw = self.ctx.advance_by(matched.raw.len());
        if let Some(kind) = error {
            self.ctx.emit_error(kind, Some(start), None);
        }
        if !matched.terminated {
            self.ctx
                .emit_error(ErrorKind::MissingSemicolonCharacterReference, Some(start), None);
        }
        let mut reference = CharacterReferenceNode {
            value,
            raw: raw.to_string(),
            reference_type: matched.reference_type,
            range: self.ctx.range_from(start),
            data: None,
        };
        self.notify(NodeMut::CharacterReference(&mut reference));
        Some(reference)
    }

    /// Consumes at least one char up to `end`, stopping before an interpolation
    /// or a decodable reference. Unknown references stay in the literal.
    fn parse_literal(&mut self, end: usize, decode: bool) -> LiteralNode<T> {
        let start = self.ctx.offset();
        let open_first = self.ctx.option.delimiters.0.chars().next();
        while self.ctx.offset() < end {
            let at_start = self.ctx.offset() == start;
            let src = self.ctx.source();
            if decode && !at_start && self.is_interpolation_start(src) {
                break;
            }
            if decode && src.starts_with('&') {
                match match_char_ref(src) {
                    Some(m) if m.reference_type == ReferenceType::Named => {
                        let table = self.ctx.option.named_character_references;
                        if find_named_ref(table, m.body).is_some() {
                            if !at_start {
                                break;
                            }
                        } else {
                            let ref_start = self.ctx.offset();
                            self.ctx.emit_error(
                                ErrorKind::UnknownNamedCharacterReference,
                                Some(ref_start),
                                Some(ref_start + m.raw.len()),
                            );
                            self.ctx.advance_by(m.raw.len());
                            continue;
                        }
                    }
                    Some(_) if !at_start => break,
                    _ => (),
                }
            }
            let rest = &src[..end - self.ctx.offset()];
            let step = if decode {
                let first = next_char_len(rest);
                rest[first..]
                    .find(|c: char| c == '&' || Some(c) == open_first)
                    .map_or(rest.len(), |i| i + first)
            } else {
                rest.len()
            };
            self.ctx.advance_by(step);
        }
        let value = &self.ctx.full_source()[start..self.ctx.offset()];
        let mut literal = LiteralNode {
            value: value.to_string(),
            range: self.ctx.range_from(start),
            data: None,
        };
        self.notify(NodeMut::Literal(&mut literal));
        literal
    }
}

/// A quoted or unquoted value after `=`.
pub(crate) struct AttributeValue {
    pub value: String,
    pub quote: Option<char>,
    /// offset of the value, quote included
    pub start: usize,
}

/// Parses `= value` if the cursor, after optional whitespace, is at `=`.
/// Nothing is consumed otherwise.
// https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-value-state
pub(crate) fn parse_attribute_value<E: ErrorHandler>(
    ctx: &mut ParserContext<'_, E>,
) -> Option<AttributeValue> {
    let src = ctx.source();
    let spaces = src.find(non_whitespace).unwrap_or(src.len());
    if !src[spaces..].starts_with('=') {
        return None;
    }
    ctx.advance_by(spaces + 1);
    ctx.advance_spaces();
    let start = ctx.offset();
    let src = ctx.source();
    let quote = src.chars().next().filter(|&c| c == '"' || c == '\'');
    let value = if let Some(q) = quote {
        ctx.advance_by(1);
        let body = ctx.source();
        match find_closing_quote(body, q) {
            Some(i) => {
                let raw = ctx.advance_by(i);
                ctx.advance_by(1);
                unescape(raw, q)
            }
            None => {
                let raw = ctx.advance_by(body.len());
                ctx.emit_error(ErrorKind::EofInAttribute, Some(start), None);
                unescape(raw, q)
            }
        }
    } else {
        // https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state
        let len = src
            .find(|c: char| c.is_ascii_whitespace() || c == '/' || c == '>')
            .unwrap_or(src.len());
        ctx.advance_by(len).to_string()
    };
    Some(AttributeValue {
        value,
        quote,
        start,
    })
}

/// index of the first `quote` not escaped by a backslash
fn find_closing_quote(s: &str, quote: char) -> Option<usize> {
    let mut chars = s.char_indices();
    while let Some((i, c)) = chars.next() {
        if c == quote {
            return Some(i);
        }
        if c == '\\' {
            // skip escaped char
            chars.next();
        }
    }
    None
}

/// removes the backslash of `\"` and `\>`
fn unescape(raw: &str, quote: char) -> String {
    let mut ret = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next == quote || next == '>' {
                    ret.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        ret.push(c);
    }
    ret
}

/// key for duplicate detection, dynamic arguments never collide
fn prop_key<T>(prop: &ElemProp<T>) -> Option<String> {
    match prop {
        ElemProp::Attr(attr) => Some(attr.name.clone()),
        ElemProp::Dir(dir) => directive_key(dir),
    }
}

fn directive_key<T>(dir: &DirectiveNode<T>) -> Option<String> {
    match &dir.argument {
        None => Some(format!("v-{}", dir.name)),
        Some(arg) if !arg.is_dynamic => Some(format!("v-{}:{}", dir.name, arg.value)),
        Some(_) => None,
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .map_or(false, |p| p.eq_ignore_ascii_case(prefix))
}

// `< ' "` are not valid but counted as semi valid
// to leniently recover from a parsing error
#[inline]
fn semi_valid_attr_name(c: char) -> bool {
    is_valid_name_char(c) && c != '='
}

#[inline]
fn is_valid_name_char(c: char) -> bool {
    !c.is_ascii_whitespace() && c != '/' && c != '>'
}
