//! Error tolerant parser for Vue templates.
//!
//! The parser turns template source into a concrete syntax tree whose nodes all carry
//! precise [`Range`]s, so that editor tooling can map positions back to source.
//! Malformed markup never aborts a parse: errors are collected and a best effort tree
//! is always returned.

use std::cmp::Ordering;
use std::fmt;

pub mod context;
pub mod directive;
pub mod error;
pub mod node;
pub mod options;
pub mod parser;
pub mod position;
pub mod util;

pub use error::{ErrorHandler, ParserError, ParserErrorKind, VecErrorHandler};
pub use node::{NodeMut, NodeRef, NodeVisitor, RootNode, TextNode};
pub use options::ParseOption;
pub use parser::{Parsed, Parser};
pub use util::rslint::Expression;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A location in the template source.
/// Both fields are 0-indexed, `character` counts bytes from the line start.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then(self.character.cmp(&other.character))
    }
}

/// A half open selection of the template source.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
    /// Both ends are inclusive, a cursor right after a node still touches it.
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }
    pub fn contains_range(&self, inner: &Range) -> bool {
        self.start <= inner.start && inner.end <= self.end
    }
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// namespace for HTML/SVG/MathML tag
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Namespace {
    Html,
    Svg,
    MathMl,
}

impl Default for Namespace {
    fn default() -> Self {
        Namespace::Html
    }
}

/// Parses a whole template with the default [`ParseOption`].
pub fn parse(source: &str) -> Parsed<RootNode> {
    Parser::new(ParseOption::default()).parse(source, VecErrorHandler::default())
}

/// Parses `source` as a single text node in DATA mode.
pub fn parse_text(source: &str) -> Parsed<TextNode> {
    Parser::new(ParseOption::default()).parse_text(source, VecErrorHandler::default())
}

#[macro_export]
macro_rules! cast {
    ($target: expr, $pat: path) => {{
        if let $pat(a) = $target {
            a
        } else {
            panic!("mismatch variant when cast to {}", stringify!($pat));
        }
    }};
}
