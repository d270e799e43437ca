use super::{Position, Range};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::Serialize;

#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum ParserErrorKind {
    // https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state
    UnknownNamedCharacterReference,
    NullCharacterReference,
    OutsideUnicodeRangeCharacterReference,
    SurrogateCharacterReference,
    NoncharacterCharacterReference,
    ControlCharacterReference,
    MissingSemicolonCharacterReference,

    EofInInterpolation,
    EofInComment,
    EofInCdata,
    EofBeforeTagName,
    EofInClosingTag,
    EofInAttribute,
    EofInDirective,

    AbruptClosingOfEmptyComment,
    IncorrectlyClosedComment,

    MissingEndTagName,
    InvalidFirstCharacterInTagName,
    UnexpectedSolidusInTag,
    DuplicateAttribute,
    UnexpectedEqualsSignBeforeAttribute,
    UnexpectedEndTag,
    IllegalDirectiveModifier,
}

impl ParserErrorKind {
    /// Stable identifier of the error kind.
    pub fn code(&self) -> &'static str {
        use ParserErrorKind::*;
        match *self {
            UnknownNamedCharacterReference => "UNKNOWN_NAMED_CHARACTER_REFERENCE",
            NullCharacterReference => "NULL_CHARACTER_REFERENCE",
            OutsideUnicodeRangeCharacterReference => "OUTSIDE_UNICODE_RANGE_CHARACTER_REFERENCE",
            SurrogateCharacterReference => "SURROGATE_CHARACTER_REFERENCE",
            NoncharacterCharacterReference => "NONCHARACTER_CHARACTER_REFERENCE",
            ControlCharacterReference => "CONTROL_CHARACTER_REFERENCE",
            MissingSemicolonCharacterReference => "MISSING_SEMICOLON_CHARACTER_REFERENCE",
            EofInInterpolation => "EOF_IN_INTERPOLATION",
            EofInComment => "EOF_IN_COMMENT",
            EofInCdata => "EOF_IN_CDATA",
            EofBeforeTagName => "EOF_BEFORE_TAG_NAME",
            EofInClosingTag => "EOF_IN_CLOSING_TAG",
            EofInAttribute => "EOF_IN_ATTRIBUTE",
            EofInDirective => "EOF_IN_DIRECTIVE",
            AbruptClosingOfEmptyComment => "ABRUPT_CLOSING_OF_EMPTY_COMMENT",
            IncorrectlyClosedComment => "INCORRECTLY_CLOSED_COMMENT",
            MissingEndTagName => "MISSING_END_TAG_NAME",
            InvalidFirstCharacterInTagName => "INVALID_FIRST_CHARACTER_IN_TAG_NAME",
            UnexpectedSolidusInTag => "UNEXPECTED_SOLIDUS_IN_TAG",
            DuplicateAttribute => "DUPLICATE_ATTRIBUTE",
            UnexpectedEqualsSignBeforeAttribute => "UNEXPECTED_EQUALS_SIGN_BEFORE_ATTRIBUTE",
            UnexpectedEndTag => "UNEXPECTED_END_TAG",
            IllegalDirectiveModifier => "ILLEGAL_DIRECTIVE_MODIFIER",
        }
    }
}

#[cold]
#[inline(never)]
fn msg(kind: &ParserErrorKind) -> &'static str {
    use ParserErrorKind::*;
    match *kind {
        UnknownNamedCharacterReference => "Unknown named character reference.",
        NullCharacterReference => "Null character reference.",
        OutsideUnicodeRangeCharacterReference => {
            "Character reference outside of the Unicode range."
        }
        SurrogateCharacterReference => "Character reference to a surrogate.",
        NoncharacterCharacterReference => "Character reference to a noncharacter.",
        ControlCharacterReference => "Character reference to a control character.",
        MissingSemicolonCharacterReference => "Character reference is missing a semicolon.",
        EofInInterpolation => "Interpolation end sign was not found.",
        EofInComment => "Unexpected EOF in comment.",
        EofInCdata => "Unexpected EOF in CDATA section.",
        EofBeforeTagName => "Unexpected EOF in tag.",
        EofInClosingTag => "Unexpected EOF before the tag is closed.",
        EofInAttribute => "Unexpected EOF in attribute value.",
        EofInDirective => "Unexpected EOF in directive.",
        AbruptClosingOfEmptyComment => "Illegal comment.",
        IncorrectlyClosedComment => "Incorrectly closed comment.",
        MissingEndTagName => "End tag name was expected.",
        InvalidFirstCharacterInTagName => "Illegal tag name. Use '&lt;' to print '<'.",
        UnexpectedSolidusInTag => "Illegal '/' in tags.",
        DuplicateAttribute => "Duplicate attribute.",
        UnexpectedEqualsSignBeforeAttribute => "Attribute name was expected before '='.",
        UnexpectedEndTag => "Invalid end tag.",
        IllegalDirectiveModifier => "Directive modifier must be alphanumeric.",
    }
}

impl fmt::Display for ParserErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(msg(self))
    }
}

/// A recoverable template syntax error.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ParserError {
    pub kind: ParserErrorKind,
    /// cursor position when the error was emitted
    pub position: Position,
    /// the offending source
    pub range: Range,
}

impl ParserError {
    pub fn new(kind: ParserErrorKind, position: Position, range: Range) -> Self {
        Self {
            kind,
            position,
            range,
        }
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for ParserError {}

/// This trait handles error occured in parsing.
/// The parser keeps its own ordered error list, so a handler is only
/// needed for streaming errors to another consumer.
/// Rc/RefCell is a good way to implement ErrorHandler if
/// collecting errors in a parse is desired.
pub trait ErrorHandler {
    // cannot use mut ref due to borrow semantics
    // use RefCell as implementation
    fn on_error(&self, _: ParserError) {}
}

impl<E: ErrorHandler + ?Sized> ErrorHandler for &E {
    fn on_error(&self, e: ParserError) {
        (**self).on_error(e)
    }
}

/// Ignores every error.
#[derive(Clone, Copy, Default)]
pub struct NoopErrorHandler;
impl ErrorHandler for NoopErrorHandler {}

#[derive(Clone, Default)]
pub struct VecErrorHandler {
    errors: Rc<RefCell<Vec<ParserError>>>,
}

impl VecErrorHandler {
    pub fn errors(&self) -> Vec<ParserError> {
        self.errors.borrow().clone()
    }
}

impl ErrorHandler for VecErrorHandler {
    fn on_error(&self, e: ParserError) {
        self.errors.borrow_mut().push(e);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_vec_handler_shares_errors() {
        let handler = VecErrorHandler::default();
        let cloned = handler.clone();
        let range = Range::default();
        cloned.on_error(ParserError::new(
            ParserErrorKind::EofInComment,
            Position::default(),
            range,
        ));
        let errors = handler.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind.code(), "EOF_IN_COMMENT");
        assert_eq!(errors[0].to_string(), "Unexpected EOF in comment.");
    }
}
