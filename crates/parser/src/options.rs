use super::{
    context::ElementFrame,
    util::{named_chars::NAMED_CHAR_REF, rslint::parse_js_expr},
    Expression, Namespace,
};
use phf::Map;

/// TextMode represents different text scanning strategy.
/// e.g. Scanning in script/textarea/div are different.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TextMode {
    //         | Elements | Entities | End sign              | Inside of
    // DATA    | ✔        | ✔        | End tags of ancestors |
    // RCDATA  | ✘        | ✔        | End tag of the parent | <textarea>
    // RAWTEXT | ✘        | ✘        | End tag of the parent | <style>,<script>
    // CDATA   | ✘        | ✘        | ]]> or parent end tag | <![CDATA[
    Data,
    RcData,
    RawText,
    CData,
}

/// ParseOption defines the hooks used in parsing.
/// Hooks are plain function pointers so the option is cheap to clone and share.
#[derive(Clone)]
pub struct ParseOption {
    /// e.g. img, br and hr. A void element is always self closing.
    pub is_void_tag: fn(&str) -> bool,
    /// Decides the namespace of a new element from its tag name and the enclosing element.
    pub get_namespace: fn(&str, Option<&ElementFrame>) -> Namespace,
    /// Interpolation delimiters, `{{` and `}}` by default.
    pub delimiters: (String, String),
    /// Keys include the leading `&` and trailing `;`, e.g. `&amp;`.
    pub named_character_references: &'static Map<&'static str, &'static str>,
    /// Parses embedded JavaScript code. Returning None marks the code as unparsable.
    pub parse_expression: fn(&str) -> Option<Expression>,
}

impl Default for ParseOption {
    fn default() -> Self {
        Self {
            is_void_tag,
            get_namespace,
            delimiters: ("{{".into(), "}}".into()),
            named_character_references: &NAMED_CHAR_REF,
            parse_expression: parse_js_expr,
        }
    }
}

impl ParseOption {
    pub fn with_delimiters(mut self, open: &str, close: &str) -> Self {
        self.delimiters = (open.into(), close.into());
        self
    }
    /// Skips JavaScript parsing, every expression slot stays empty.
    pub fn without_expression(mut self) -> Self {
        self.parse_expression = |_| None;
        self
    }
}

pub fn is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

// https://html.spec.whatwg.org/multipage/parsing.html#tree-construction-dispatcher
pub fn get_namespace(tag: &str, parent: Option<&ElementFrame>) -> Namespace {
    let mut ns = parent.map_or(Namespace::Html, |p| p.namespace);
    if let Some(parent) = parent {
        let parent_tag = parent.tag_name.as_str();
        if parent_tag == "annotation-xml" {
            if tag == "svg" {
                return Namespace::Svg;
            }
            let encoding = parent.attribute("encoding");
            if matches!(encoding, Some("text/html" | "application/xml+html")) {
                ns = Namespace::Html;
            }
        } else if matches!(parent_tag, "mi" | "mo" | "mn" | "ms" | "mtext")
            && matches!(tag, "mglyph" | "malignmark")
        {
            ns = Namespace::Html;
        }
        if ns == Namespace::Svg && matches!(parent_tag, "foreignObject" | "desc" | "title") {
            ns = Namespace::Html;
        }
    }
    if ns == Namespace::Html {
        match tag {
            "svg" => return Namespace::Svg,
            "math" => return Namespace::MathMl,
            _ => (),
        }
    }
    ns
}

// https://html.spec.whatwg.org/multipage/parsing.html#parsing-html-fragments
pub fn get_text_mode(tag: &str, ns: Namespace) -> TextMode {
    if ns != Namespace::Html {
        return TextMode::Data;
    }
    const RC_DATA: &[&str] = &["title", "textarea"];
    const RAW_TEXT: &[&str] = &[
        "style", "xmp", "iframe", "noembed", "noframes", "script", "noscript",
    ];
    if RC_DATA.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
        TextMode::RcData
    } else if RAW_TEXT.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
        TextMode::RawText
    } else {
        TextMode::Data
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn frame(tag: &str, ns: Namespace) -> ElementFrame {
        ElementFrame::new(tag.into(), ns)
    }

    #[test]
    fn test_void_tag() {
        assert!(is_void_tag("img"));
        assert!(is_void_tag("wbr"));
        assert!(!is_void_tag("div"));
        assert!(!is_void_tag("IMG"));
    }

    #[test]
    fn test_namespace_switch() {
        assert_eq!(get_namespace("div", None), Namespace::Html);
        assert_eq!(get_namespace("svg", None), Namespace::Svg);
        assert_eq!(get_namespace("math", None), Namespace::MathMl);
        let svg = frame("svg", Namespace::Svg);
        assert_eq!(get_namespace("circle", Some(&svg)), Namespace::Svg);
        let foreign = frame("foreignObject", Namespace::Svg);
        assert_eq!(get_namespace("div", Some(&foreign)), Namespace::Html);
    }

    #[test]
    fn test_namespace_math() {
        let mi = frame("mi", Namespace::MathMl);
        assert_eq!(get_namespace("mglyph", Some(&mi)), Namespace::Html);
        assert_eq!(get_namespace("mrow", Some(&mi)), Namespace::MathMl);
        let mut annotation = frame("annotation-xml", Namespace::MathMl);
        assert_eq!(get_namespace("svg", Some(&annotation)), Namespace::Svg);
        assert_eq!(get_namespace("div", Some(&annotation)), Namespace::MathMl);
        annotation
            .attributes
            .push(("encoding".into(), Some("text/html".into())));
        assert_eq!(get_namespace("div", Some(&annotation)), Namespace::Html);
    }

    #[test]
    fn test_text_mode() {
        assert_eq!(get_text_mode("textarea", Namespace::Html), TextMode::RcData);
        assert_eq!(get_text_mode("TITLE", Namespace::Html), TextMode::RcData);
        assert_eq!(get_text_mode("script", Namespace::Html), TextMode::RawText);
        assert_eq!(get_text_mode("style", Namespace::Svg), TextMode::Data);
        assert_eq!(get_text_mode("div", Namespace::Html), TextMode::Data);
    }
}
