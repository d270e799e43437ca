//! The parser's single mutable cursor.
//! It owns the position in source, the ancestor stack and the error list.
//! Grammar code in [`parser`](crate::parser) and [`directive`](crate::directive)
//! only reads and moves the source through it.

use super::{
    error::{ErrorHandler, ParserError, ParserErrorKind},
    options::{ParseOption, TextMode},
    position::LineIndex,
    util::{is_closing_tag, non_whitespace},
    Expression, Namespace, Position, Range,
};
use tracing::trace;

/// What the parser remembers of an open element.
#[derive(Debug, Clone)]
pub struct ElementFrame {
    pub tag_name: String,
    pub namespace: Namespace,
    /// attribute names and values seen on the opening tag
    pub attributes: Vec<(String, Option<String>)>,
}

impl ElementFrame {
    pub fn new(tag_name: String, namespace: Namespace) -> Self {
        Self {
            tag_name,
            namespace,
            attributes: vec![],
        }
    }
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_deref())
    }
}

pub struct ParserContext<'a, E: ErrorHandler> {
    full_source: &'a str,
    offset: usize,
    line_index: LineIndex,
    pub option: &'a ParseOption,
    ancestors: Vec<ElementFrame>,
    errors: Vec<ParserError>,
    err_handle: E,
}

// NB: prefer `let src = self.source()` only before any advance_by call.
// A slice taken earlier does not move with the cursor.
impl<'a, E: ErrorHandler> ParserContext<'a, E> {
    pub fn new(source: &'a str, option: &'a ParseOption, err_handle: E) -> Self {
        Self {
            full_source: source,
            offset: 0,
            line_index: LineIndex::new(source),
            option,
            ancestors: vec![],
            errors: vec![],
            err_handle,
        }
    }

    /// remaining source
    pub fn source(&self) -> &'a str {
        &self.full_source[self.offset..]
    }
    pub fn full_source(&self) -> &'a str {
        self.full_source
    }
    pub fn offset(&self) -> usize {
        self.offset
    }
    pub fn is_eof(&self) -> bool {
        self.offset >= self.full_source.len()
    }
    pub fn position(&self) -> Position {
        self.line_index.position_at(self.offset)
    }
    pub fn position_at(&self, offset: usize) -> Position {
        self.line_index.position_at(offset)
    }
    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }
    /// range from `start` offset to the cursor
    pub fn range_from(&self, start: usize) -> Range {
        self.line_index.range_of(start, self.offset)
    }
    pub fn range_of(&self, start: usize, end: usize) -> Range {
        self.line_index.range_of(start, end)
    }

    /// Moves the cursor forward and returns the consumed text.
    /// The step is clamped to the end of source.
    pub fn advance_by(&mut self, size: usize) -> &'a str {
        let start = self.offset;
        self.offset = (start + size).min(self.full_source.len());
        debug_assert!(self.full_source.is_char_boundary(self.offset));
        &self.full_source[start..self.offset]
    }

    /// Consumes the next char, if any.
    pub fn advance_char(&mut self) -> &'a str {
        let size = next_char_len(self.source());
        self.advance_by(size)
    }

    /// Skips ascii whitespace and returns how many bytes were skipped.
    pub fn advance_spaces(&mut self) -> usize {
        let src = self.source();
        let len = src.find(non_whitespace).unwrap_or(src.len());
        if len != 0 {
            self.advance_by(len);
        }
        len
    }

    /// Records an error.
    /// Without `start` the error spans the next char,
    /// without `end` it spans from `start` to the cursor.
    pub fn emit_error(&mut self, kind: ParserErrorKind, start: Option<usize>, end: Option<usize>) {
        let (start, end) = match (start, end) {
            (None, _) => (self.offset, self.offset + next_char_len(self.source())),
            (Some(s), None) => (s, self.offset),
            (Some(s), Some(e)) => (s, e),
        };
        let error = ParserError::new(kind, self.position(), self.range_of(start, end));
        self.err_handle.on_error(error.clone());
        self.errors.push(error);
    }

    pub fn take_errors(&mut self) -> Vec<ParserError> {
        std::mem::take(&mut self.errors)
    }

    /// Runs the embedded code parser, a failure only leaves a trace.
    pub fn parse_expression(&self, code: &str, start: usize) -> Option<Expression> {
        if code.trim().is_empty() {
            return None;
        }
        let parse = self.option.parse_expression;
        let expr = parse(code);
        if expr.is_none() {
            trace!(code, offset = start, "cannot parse embedded expression");
        }
        expr
    }

    pub fn parent(&self) -> Option<&ElementFrame> {
        self.ancestors.last()
    }
    pub fn push_ancestor(&mut self, frame: ElementFrame) {
        self.ancestors.push(frame);
    }
    pub fn pop_ancestor(&mut self) -> Option<ElementFrame> {
        self.ancestors.pop()
    }

    /// Tells whether the children loop in `mode` should stop at the cursor.
    pub fn is_terminal(&self, mode: TextMode) -> bool {
        let src = self.source();
        if src.is_empty() {
            return true;
        }
        match mode {
            // recover mismatched nesting by checking every open element
            TextMode::Data => {
                src.starts_with("</")
                    && self
                        .ancestors
                        .iter()
                        .rev()
                        .any(|a| is_closing_tag(src, &a.tag_name))
            }
            TextMode::RcData | TextMode::RawText => self.is_parent_closing_tag(src),
            TextMode::CData => src.starts_with("]]>") || self.is_parent_closing_tag(src),
        }
    }

    fn is_parent_closing_tag(&self, src: &str) -> bool {
        self.parent()
            .map_or(false, |p| is_closing_tag(src, &p.tag_name))
    }

    /// offset in remaining source of the innermost parent's closing tag, or its length
    pub fn find_appropriate_end(&self) -> usize {
        let src = self.source();
        let tag = match self.parent() {
            Some(p) => &p.tag_name,
            None => return src.len(),
        };
        src.match_indices("</")
            .map(|(i, _)| i)
            .find(|&i| is_closing_tag(&src[i..], tag))
            .unwrap_or(src.len())
    }
}

/// byte length of the first char, 0 for empty string
pub fn next_char_len(s: &str) -> usize {
    s.chars().next().map_or(0, char::len_utf8)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::VecErrorHandler;

    #[test]
    fn test_advance() {
        let option = ParseOption::default();
        let mut ctx = ParserContext::new("ab \n c", &option, VecErrorHandler::default());
        assert_eq!(ctx.advance_by(2), "ab");
        assert_eq!(ctx.advance_spaces(), 3);
        assert_eq!(ctx.position(), Position::new(1, 1));
        assert_eq!(ctx.source(), "c");
        assert_eq!(ctx.advance_by(10), "c");
        assert!(ctx.is_eof());
        assert_eq!(ctx.advance_char(), "");
    }

    #[test]
    fn test_emit_error_defaults() {
        let option = ParseOption::default();
        let handler = VecErrorHandler::default();
        let mut ctx = ParserContext::new("héllo", &option, &handler);
        ctx.advance_by(1);
        ctx.emit_error(ParserErrorKind::EofInComment, None, None);
        ctx.advance_by(2);
        ctx.emit_error(ParserErrorKind::EofInCdata, Some(0), None);
        let errors = ctx.take_errors();
        assert_eq!(errors.len(), 2);
        // one char range, é takes two bytes
        assert_eq!(
            errors[0].range,
            Range::new(Position::new(0, 1), Position::new(0, 3))
        );
        assert_eq!(
            errors[1].range,
            Range::new(Position::new(0, 0), Position::new(0, 3))
        );
        assert_eq!(errors[1].position, Position::new(0, 3));
        assert_eq!(handler.errors().len(), 2);
    }

    #[test]
    fn test_terminal() {
        let option = ParseOption::default();
        let mut ctx = ParserContext::new("</DIV></span>", &option, VecErrorHandler::default());
        assert!(!ctx.is_terminal(TextMode::Data));
        ctx.push_ancestor(ElementFrame::new("div".into(), Namespace::Html));
        ctx.push_ancestor(ElementFrame::new("span".into(), Namespace::Html));
        // any ancestor closes DATA
        assert!(ctx.is_terminal(TextMode::Data));
        // only the parent closes RAWTEXT
        assert!(!ctx.is_terminal(TextMode::RawText));
        assert_eq!(ctx.find_appropriate_end(), 6);
    }
}
