//! Directive micro grammar.
//! v-name:arg.mod1.mod2="expr" with `:`, `@` and `#` shorthands for bind, on and slot.
//! After the shape is read, known directives get their code parsed into
//! [`DirectiveSemantics`].

use super::{
    context::ParserContext,
    error::{ErrorHandler, ParserErrorKind as ErrorKind},
    node::{
        DirectiveArgument, DirectiveExpression, DirectiveModifier, DirectiveNode,
        DirectiveSemantics,
    },
    parser::parse_attribute_value,
    util::rslint::{assignment_target, bound_identifiers, function_params},
    Expression,
};
use smallvec::SmallVec;

fn shorthand_name(c: char) -> Option<&'static str> {
    match c {
        ':' => Some("bind"),
        '@' => Some("on"),
        '#' => Some("slot"),
        _ => None,
    }
}

#[inline]
fn is_directive_name_char(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-'
}

#[inline]
fn is_arg_end(c: char) -> bool {
    c.is_ascii_whitespace() || matches!(c, '=' | '.' | '/' | '>')
}

/// Tests if an attribute starting at `src` is a directive.
/// `v-` must be followed by a lowercase name, or nothing.
pub fn is_directive_start(src: &str) -> bool {
    if src.starts_with(|c: char| shorthand_name(c).is_some()) {
        return true;
    }
    match src.strip_prefix("v-") {
        Some(rest) => rest.is_empty() || rest.bytes().next().map_or(false, is_directive_name_char),
        None => false,
    }
}

/// Parses one directive. Returns None when the source ends right after its prefix.
pub fn parse_directive<T, E: ErrorHandler>(
    ctx: &mut ParserContext<'_, E>,
) -> Option<DirectiveNode<T>> {
    let src = ctx.source();
    debug_assert!(is_directive_start(src));
    let start = ctx.offset();
    if matches!(src, "v-" | ":" | "@" | "#") {
        ctx.advance_by(src.len());
        ctx.emit_error(ErrorKind::EofInDirective, Some(start), None);
        return None;
    }
    let shorthand = src.chars().next().and_then(shorthand_name);
    let (name, has_argument) = match shorthand {
        Some(name) => {
            ctx.advance_by(1);
            (name.to_string(), true)
        }
        None => {
            ctx.advance_by(2);
            let len = ctx
                .source()
                .bytes()
                .take_while(|&b| is_directive_name_char(b))
                .count();
            let name = ctx.advance_by(len).to_string();
            let has_argument = ctx.source().starts_with(':');
            if has_argument {
                ctx.advance_by(1);
            }
            (name, has_argument)
        }
    };
    let argument = if has_argument {
        parse_argument(ctx)
    } else {
        None
    };
    let modifiers = parse_modifiers(ctx);
    let expression = parse_attribute_value(ctx).map(|v| DirectiveExpression {
        value: v.value,
        quote: v.quote,
        range: ctx.range_from(v.start),
        data: None,
    });
    let semantics = analyze(ctx, &name, expression.as_ref());
    Some(DirectiveNode {
        name,
        is_shorthand: shorthand.is_some(),
        argument,
        modifiers,
        expression,
        semantics,
        range: ctx.range_from(start),
        data: None,
    })
}

fn parse_argument<T, E: ErrorHandler>(
    ctx: &mut ParserContext<'_, E>,
) -> Option<DirectiveArgument<T>> {
    let src = ctx.source();
    let start = ctx.offset();
    if src.starts_with('[') {
        // dynamic argument :[key], without `]` it ends like an attribute name
        let body = &src[1..];
        let unclosed_end = |c: char| c.is_ascii_whitespace() || matches!(c, '=' | '/' | '>');
        let len = body
            .find(']')
            .or_else(|| body.find(unclosed_end))
            .unwrap_or(body.len());
        ctx.advance_by(1);
        let value = ctx.advance_by(len);
        if ctx.source().starts_with(']') {
            ctx.advance_by(1);
        } else if ctx.is_eof() {
            ctx.emit_error(ErrorKind::EofInDirective, Some(start), None);
        }
        return Some(DirectiveArgument {
            value: value.to_string(),
            is_dynamic: true,
            expression: ctx.parse_expression(value, start + 1),
            range: ctx.range_from(start),
            data: None,
        });
    }
    let len = src.find(is_arg_end).unwrap_or(src.len());
    if len == 0 {
        return None;
    }
    let value = ctx.advance_by(len);
    Some(DirectiveArgument {
        value: value.to_string(),
        is_dynamic: false,
        expression: None,
        range: ctx.range_from(start),
        data: None,
    })
}

fn parse_modifiers<T, E: ErrorHandler>(
    ctx: &mut ParserContext<'_, E>,
) -> SmallVec<[DirectiveModifier<T>; 2]> {
    let mut modifiers = SmallVec::new();
    while ctx.source().starts_with('.') {
        let start = ctx.offset();
        ctx.advance_by(1);
        let src = ctx.source();
        let len = src.bytes().take_while(u8::is_ascii_alphanumeric).count();
        let well_ended = src[len..]
            .chars()
            .next()
            .map_or(true, |c| c.is_ascii_whitespace() || matches!(c, '=' | '.' | '/' | '>'));
        if len > 0 && well_ended {
            let name = ctx.advance_by(len);
            modifiers.push(DirectiveModifier {
                name: name.to_string(),
                range: ctx.range_from(start),
                data: None,
            });
        } else if src.is_empty() {
            ctx.emit_error(ErrorKind::EofInDirective, Some(start), None);
        } else {
            let bad = src.find(is_arg_end).unwrap_or(src.len());
            ctx.advance_by(bad);
            ctx.emit_error(ErrorKind::IllegalDirectiveModifier, Some(start), None);
        }
    }
    modifiers
}

/// Parses the code of known directives.
/// Failures leave the fields empty, the raw text is kept on the node.
fn analyze<T, E: ErrorHandler>(
    ctx: &ParserContext<'_, E>,
    name: &str,
    expression: Option<&DirectiveExpression<T>>,
) -> DirectiveSemantics {
    // quote of a quoted value is one byte
    let (code, offset) = match expression {
        Some(e) => {
            let offset = ctx.line_index().offset_at(e.range.start) + e.quote.map_or(0, |_| 1);
            (e.value.as_str(), offset)
        }
        None => ("", ctx.offset()),
    };
    let parse = |code: &str| ctx.parse_expression(code, offset);
    match name {
        "for" => analyze_for(code, parse),
        "if" => DirectiveSemantics::If {
            condition: parse(code),
        },
        "else-if" => DirectiveSemantics::ElseIf {
            condition: parse(code),
        },
        "else" => DirectiveSemantics::Else,
        "show" => DirectiveSemantics::Show {
            condition: parse(code),
        },
        "on" => DirectiveSemantics::On {
            handler: parse(code),
        },
        "bind" => DirectiveSemantics::Bind { value: parse(code) },
        "model" => {
            let value = if code.trim().is_empty() {
                None
            } else {
                parse(&format!("{} = 0", code)).and_then(|e| assignment_target(&e))
            };
            DirectiveSemantics::Model { value }
        }
        "slot" => {
            let params = if code.trim().is_empty() {
                None
            } else {
                parse(&format!("function ({}) {{}}", code)).and_then(|e| function_params(&e))
            };
            let scope_identifiers = params.as_deref().map(bound_identifiers).unwrap_or_default();
            DirectiveSemantics::Slot {
                params,
                scope_identifiers,
            }
        }
        "text" => DirectiveSemantics::Text {
            content: parse(code),
        },
        "html" => DirectiveSemantics::Html {
            content: parse(code),
        },
        _ => DirectiveSemantics::Custom,
    }
}

fn analyze_for<F>(code: &str, parse: F) -> DirectiveSemantics
where
    F: Fn(&str) -> Option<Expression>,
{
    let (left, right) = match split_for(code) {
        Some(split) => split,
        None => {
            return DirectiveSemantics::For {
                left: None,
                right: None,
                scope_identifiers: vec![],
            }
        }
    };
    let alias = left.trim();
    let alias = alias
        .strip_prefix('(')
        .and_then(|a| a.strip_suffix(')'))
        .unwrap_or(alias);
    let left = parse(&format!("({}) => {{}}", alias)).and_then(|e| function_params(&e));
    let scope_identifiers = left.as_deref().map(bound_identifiers).unwrap_or_default();
    DirectiveSemantics::For {
        left,
        right: parse(right.trim()),
        scope_identifiers,
    }
}

/// Splits `alias in source` or `alias of source` at the first keyword surrounded by whitespace.
fn split_for(code: &str) -> Option<(&str, &str)> {
    let bytes = code.as_bytes();
    (0..bytes.len()).find_map(|i| {
        if !bytes[i].is_ascii_whitespace() {
            return None;
        }
        let rest = &bytes[i + 1..];
        let is_keyword = rest.starts_with(b"in") || rest.starts_with(b"of");
        if is_keyword && rest.get(2).map_or(false, u8::is_ascii_whitespace) {
            Some((&code[..i], &code[i + 3..]))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_directive_start() {
        assert!(is_directive_start(":foo"));
        assert!(is_directive_start("@click"));
        assert!(is_directive_start("#default"));
        assert!(is_directive_start("v-if"));
        assert!(is_directive_start("v-"));
        assert!(!is_directive_start("v-=x"));
        assert!(!is_directive_start("v-If"));
        assert!(!is_directive_start("class"));
        assert!(!is_directive_start("value"));
    }

    #[test]
    fn test_split_for() {
        assert_eq!(split_for("item in items"), Some(("item", " items")));
        assert_eq!(split_for("(a, b) of list"), Some(("(a, b)", " list")));
        assert_eq!(split_for("index in inner"), Some(("index", " inner")));
        assert_eq!(split_for("a\tof\tb"), Some(("a", "\tb")));
        assert_eq!(split_for("items"), None);
        assert_eq!(split_for("x inb"), None);
    }
}
