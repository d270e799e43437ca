//! Character reference recognition and decoding.
//! https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state

use crate::{error::ParserErrorKind as ErrorKind, node::ReferenceType};
use phf::Map;

/// A syntactically well formed character reference at the head of a source.
#[derive(Debug, PartialEq, Eq)]
pub struct CharRefMatch<'a> {
    /// full source text, e.g. `&amp;` or `&#x41`
    pub raw: &'a str,
    /// name or digits without prefix and semicolon
    pub body: &'a str,
    pub reference_type: ReferenceType,
    pub terminated: bool,
}

/// Matches `&(name|#x hex|#digits);?` at the start of `s`. Matching is ASCII case insensitive.
pub fn match_char_ref(s: &str) -> Option<CharRefMatch<'_>> {
    let src = s.strip_prefix('&')?;
    let count = |s: &str, pred: fn(&u8) -> bool| s.bytes().take_while(|b| pred(b)).count();
    let (prefix_len, body_len, reference_type) = if src.starts_with('#') {
        let hex = &src[1..];
        let hex_len = if hex.starts_with(&['x', 'X'][..]) {
            count(&hex[1..], u8::is_ascii_hexdigit)
        } else {
            0
        };
        if hex_len > 0 {
            (2, hex_len, ReferenceType::Hex)
        } else {
            (1, count(hex, u8::is_ascii_digit), ReferenceType::Numeric)
        }
    } else {
        (0, count(src, u8::is_ascii_alphanumeric), ReferenceType::Named)
    };
    if body_len == 0 {
        return None;
    }
    let body = &src[prefix_len..prefix_len + body_len];
    let end = 1 + prefix_len + body_len;
    let terminated = s[end..].starts_with(';');
    let len = if terminated { end + 1 } else { end };
    Some(CharRefMatch {
        raw: &s[..len],
        body,
        reference_type,
        terminated,
    })
}

/// Looks `name` up as `&name;`, then lowercased and uppercased.
pub fn find_named_ref(
    map: &'static Map<&'static str, &'static str>,
    name: &str,
) -> Option<&'static str> {
    let key = format!("&{};", name);
    map.get(key.as_str())
        .or_else(|| map.get(key.to_ascii_lowercase().as_str()))
        .or_else(|| map.get(key.to_ascii_uppercase().as_str()))
        .copied()
}

/// Parses digits of a numeric reference. Overflow saturates out of the unicode range.
pub fn parse_code_point(digits: &str, radix: u32) -> u32 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .try_fold(0u32, |acc, d| acc.checked_mul(radix)?.checked_add(d))
        .unwrap_or(0x110000)
}

/// Maps a numeric reference to its decoded char and the error it deserves, if any.
// https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state
pub fn decode_code_point(num: u32) -> (char, Option<ErrorKind>) {
    let (num, error) = match num {
        0 => (0xfffd, Some(ErrorKind::NullCharacterReference)),
        n if n > 0x10ffff => (0xfffd, Some(ErrorKind::OutsideUnicodeRangeCharacterReference)),
        0xd800..=0xdfff => (0xfffd, Some(ErrorKind::SurrogateCharacterReference)),
        0xfdd0..=0xfdef => (num, Some(ErrorKind::NoncharacterCharacterReference)),
        n if (n & 0xfffe) == 0xfffe => (n, Some(ErrorKind::NoncharacterCharacterReference)),
        0x80..=0x9f => (
            CCR_REPLACEMENTS[num as usize - 0x80],
            Some(ErrorKind::ControlCharacterReference),
        ),
        0x01..=0x08 | 0x0b | 0x0d..=0x1f | 0x7f => (num, Some(ErrorKind::ControlCharacterReference)),
        num => (num, None),
    };
    // surrogates are excluded above so every remaining value is a scalar
    (char::from_u32(num).unwrap_or('\u{fffd}'), error)
}

// https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state
const CCR_REPLACEMENTS: &[u32] = &[
    0x20ac, // 0x80
    0x81,   // 0x81, noop
    0x201a, // 0x82
    0x0192, // 0x83
    0x201e, // 0x84
    0x2026, // 0x85
    0x2020, // 0x86
    0x2021, // 0x87
    0x02c6, // 0x88
    0x2030, // 0x89
    0x0160, // 0x8a
    0x2039, // 0x8b
    0x0152, // 0x8c
    0x8d,   // 0x8d, noop
    0x017d, // 0x8e
    0x8f,   // 0x8f, noop
    0x90,   // 0x90, noop
    0x2018, // 0x91
    0x2019, // 0x92
    0x201c, // 0x93
    0x201d, // 0x94
    0x2022, // 0x95
    0x2013, // 0x96
    0x2014, // 0x97
    0x02dc, // 0x98
    0x2122, // 0x99
    0x0161, // 0x9a
    0x203a, // 0x9b
    0x0153, // 0x9c
    0x9d,   // 0x9d, noop
    0x017e, // 0x9e
    0x0178, // 0x9f
];

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::named_chars::NAMED_CHAR_REF;

    #[test]
    fn test_match_char_ref() {
        let m = match_char_ref("&amp; b").unwrap();
        assert_eq!(m.raw, "&amp;");
        assert_eq!(m.body, "amp");
        assert_eq!(m.reference_type, ReferenceType::Named);
        assert!(m.terminated);

        let m = match_char_ref("&#X41x").unwrap();
        assert_eq!(m.raw, "&#X41");
        assert_eq!(m.body, "41");
        assert_eq!(m.reference_type, ReferenceType::Hex);
        assert!(!m.terminated);

        let m = match_char_ref("&#65;").unwrap();
        assert_eq!(m.reference_type, ReferenceType::Numeric);
        assert_eq!(m.raw, "&#65;");

        assert!(match_char_ref("& b").is_none());
        assert!(match_char_ref("&#;").is_none());
        assert!(match_char_ref("&#xg").is_none());
        assert!(match_char_ref("amp;").is_none());
    }

    #[test]
    fn test_find_named_ref() {
        assert_eq!(find_named_ref(&NAMED_CHAR_REF, "amp"), Some("&"));
        assert_eq!(find_named_ref(&NAMED_CHAR_REF, "lt"), Some("<"));
        assert_eq!(find_named_ref(&NAMED_CHAR_REF, "NBSP"), Some("\u{a0}"));
        assert_eq!(find_named_ref(&NAMED_CHAR_REF, "bogus"), None);
    }

    #[test]
    fn test_decode_code_point() {
        assert_eq!(decode_code_point(0x41), ('A', None));
        assert_eq!(
            decode_code_point(0),
            ('\u{fffd}', Some(ErrorKind::NullCharacterReference))
        );
        assert_eq!(
            decode_code_point(0x110000),
            ('\u{fffd}', Some(ErrorKind::OutsideUnicodeRangeCharacterReference))
        );
        assert_eq!(
            decode_code_point(0xd800),
            ('\u{fffd}', Some(ErrorKind::SurrogateCharacterReference))
        );
        assert_eq!(
            decode_code_point(0x80),
            ('\u{20ac}', Some(ErrorKind::ControlCharacterReference))
        );
        assert_eq!(
            decode_code_point(0xfffe).1,
            Some(ErrorKind::NoncharacterCharacterReference)
        );
        assert_eq!(
            decode_code_point(0x0b),
            ('\u{b}', Some(ErrorKind::ControlCharacterReference))
        );
    }

    #[test]
    fn test_parse_code_point() {
        assert_eq!(parse_code_point("41", 16), 0x41);
        assert_eq!(parse_code_point("65", 10), 65);
        assert_eq!(parse_code_point("99999999999999", 10), 0x110000);
    }
}
