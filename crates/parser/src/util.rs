use super::node::TagType;

pub mod ast_print;
pub mod decode_html;
pub mod named_chars;
pub mod rslint;

pub fn non_whitespace(c: char) -> bool {
    !c.is_ascii_whitespace()
}

/// Tests if `source` starts with the end tag of `tag`, e.g. `</div>` or `</DIV `.
// https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-name-state
pub fn is_closing_tag(source: &str, tag: &str) -> bool {
    let name_end = 2 + tag.len();
    if !source.starts_with("</") {
        return false;
    }
    let name = match source.get(2..name_end) {
        Some(name) => name,
        None => return false,
    };
    name.eq_ignore_ascii_case(tag)
        && source[name_end..]
            .chars()
            .next()
            .map_or(true, |c| c.is_ascii_whitespace() || c == '/' || c == '>')
}

macro_rules! make_list {
    ( $($id: ident),* ) => {
        &[
            $(stringify!($id)),*
        ]
    }
}

// use simple contains for small str array
// benchmark shows linear scan takes at most 10ns
// while phf or bsearch takes 30ns
const HTML_TAGS: &[&str] = make_list![
    html, body, base, head, link, meta, style, title, address, article, aside, footer, header, h1,
    h2, h3, h4, h5, h6, hgroup, nav, section, div, dd, dl, dt, figcaption, figure, picture, hr,
    img, li, main, ol, p, pre, ul, a, b, abbr, bdi, bdo, br, cite, code, data, dfn, em, i, kbd,
    mark, q, rp, rt, rtc, ruby, s, samp, small, span, strong, sub, sup, time, u, var, wbr, area,
    audio, map, track, video, embed, object, param, source, canvas, script, noscript, del, ins,
    caption, col, colgroup, table, thead, tbody, td, th, tr, button, datalist, fieldset, form,
    input, label, legend, meter, optgroup, option, output, progress, select, textarea, details,
    dialog, menu, menuitem, summary, content, element, shadow, template, blockquote, iframe, tfoot
];
const SVG_TAGS: &[&str] = make_list![
    svg, animate, circle, clippath, cursor, defs, desc, ellipse, filter, foreignObject, g, glyph,
    image, line, marker, mask, path, pattern, polygon, polyline, rect, switch, symbol, text,
    textpath, tspan, use, view
];

pub fn is_html_tag(tag: &str) -> bool {
    HTML_TAGS.contains(&tag)
}

pub fn is_svg_tag(tag: &str) -> bool {
    // hyphenated names cannot go through make_list
    SVG_TAGS.contains(&tag) || tag == "font-face" || tag == "missing-glyph"
}

pub fn is_reserved_tag(tag: &str) -> bool {
    is_html_tag(tag) || is_svg_tag(tag)
}

pub fn get_tag_type(tag: &str) -> TagType {
    if tag == "slot" {
        return TagType::Slot;
    }
    if tag == "template" {
        return TagType::Template;
    }
    let is_plain = tag
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit());
    if is_plain && is_reserved_tag(tag) {
        TagType::Element
    } else {
        TagType::Component
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_tag_type() {
        assert_eq!(get_tag_type("div"), TagType::Element);
        assert_eq!(get_tag_type("svg"), TagType::Element);
        assert_eq!(get_tag_type("slot"), TagType::Slot);
        assert_eq!(get_tag_type("template"), TagType::Template);
        assert_eq!(get_tag_type("MyComponent"), TagType::Component);
        assert_eq!(get_tag_type("my-component"), TagType::Component);
        assert_eq!(get_tag_type("foreignObject"), TagType::Component);
        assert_eq!(get_tag_type("Div"), TagType::Component);
    }

    #[test]
    fn test_closing_tag() {
        assert!(is_closing_tag("</div>", "div"));
        assert!(is_closing_tag("</DIV >", "div"));
        assert!(is_closing_tag("</div", "div"));
        assert!(is_closing_tag("</div/>", "div"));
        assert!(!is_closing_tag("</divx>", "div"));
        assert!(!is_closing_tag("</di", "div"));
        assert!(!is_closing_tag("<div>", "div"));
    }

    #[test]
    fn test_reserved_tag() {
        assert!(is_reserved_tag("textarea"));
        assert!(is_reserved_tag("font-face"));
        assert!(!is_reserved_tag("fetch"));
    }
}
