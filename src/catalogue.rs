//! Known element names
//!
//! A static catalogue of HTML and SVG element names for validation and
//! tooling. The builder never consults it: unknown names render verbatim.
//! Only the [`Renderer`](crate::Renderer) uses it, and only when validation
//! is switched on.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::builder::is_void_element;

const HTML_TAGS: &[&str] = &[
    "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base", "bb", "bdi",
    "bdo", "blockquote", "body", "br", "button", "canvas", "caption", "cite", "code", "col",
    "colgroup", "command", "commands", "data", "datalist", "dd", "del", "details", "dfn",
    "dialog", "div", "dl", "dt", "em", "embed", "fieldset", "figcaption", "figure", "footer",
    "form", "h1", "h2", "h3", "h4", "h5", "h6", "head", "header", "hgroup", "hr", "html", "i",
    "iframe", "img", "input", "ins", "kbd", "keygen", "label", "legend", "li", "link", "main",
    "map", "mark", "menu", "meta", "meter", "nav", "noscript", "object", "ol", "optgroup",
    "option", "output", "p", "param", "picture", "pre", "progress", "q", "rb", "rp", "rt",
    "rtc", "ruby", "s", "samp", "script", "section", "select", "small", "source", "span",
    "strong", "style", "sub", "summary", "sup", "table", "tag", "tbody", "td", "template",
    "textarea", "tfoot", "th", "thead", "time", "title", "tr", "track", "u", "ul", "var",
    "video", "wbr",
];

const SVG_TAGS: &[&str] = &[
    "animate", "animateMotion", "animateTransform", "circle", "clipPath", "defs", "desc",
    "ellipse", "feBlend", "feColorMatrix", "feComponentTransfer", "feComposite",
    "feConvolveMatrix", "feDiffuseLighting", "feDisplacementMap", "feDistantLight",
    "feDropShadow", "feFlood", "feFuncA", "feFuncB", "feFuncG", "feFuncR", "feGaussianBlur",
    "feImage", "feMerge", "feMergeNode", "feMorphology", "feOffset", "fePointLight",
    "feSpecularLighting", "feSpotLight", "feTile", "feTurbulence", "filter", "foreignObject",
    "g", "image", "line", "linearGradient", "marker", "mask", "metadata", "mpath", "path",
    "pattern", "polygon", "polyline", "radialGradient", "rect", "set", "stop", "svg",
    "switch", "symbol", "text", "textPath", "tspan", "use", "view",
];

static HTML_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| HTML_TAGS.iter().copied().collect());

static SVG_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| SVG_TAGS.iter().copied().collect());

/// Custom element names: lowercase ASCII start, at least one hyphen
static CUSTOM_ELEMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][a-z0-9._]*-[a-z0-9._-]*$").expect("Invalid custom element regex")
});

/// Classification of a tag name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// A void HTML element
    Void,
    Html,
    Svg,
    /// A valid custom element name
    Custom,
    Unknown,
}

impl TagKind {
    pub fn is_known(self) -> bool {
        matches!(self, TagKind::Void | TagKind::Html | TagKind::Svg)
    }
}

/// Classify a tag name against the catalogue
pub fn classify(name: &str) -> TagKind {
    if is_void_element(name) {
        TagKind::Void
    } else if HTML_SET.contains(name) {
        TagKind::Html
    } else if SVG_SET.contains(name) {
        TagKind::Svg
    } else if is_custom_element_name(name) {
        TagKind::Custom
    } else {
        TagKind::Unknown
    }
}

/// Whether `name` is a catalogued HTML or SVG element
pub fn is_known_tag(name: &str) -> bool {
    classify(name).is_known()
}

pub fn is_custom_element_name(name: &str) -> bool {
    CUSTOM_ELEMENT_REGEX.is_match(name)
}

/// All catalogued names, HTML first
pub fn known_tags() -> impl Iterator<Item = &'static str> {
    HTML_TAGS.iter().chain(SVG_TAGS.iter()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::VOID_ELEMENTS;

    #[test]
    fn test_classify() {
        assert_eq!(classify("div"), TagKind::Html);
        assert_eq!(classify("img"), TagKind::Void);
        assert_eq!(classify("feGaussianBlur"), TagKind::Svg);
        assert_eq!(classify("user-card"), TagKind::Custom);
        assert_eq!(classify("blink"), TagKind::Unknown);
    }

    #[test]
    fn test_void_elements_are_catalogued() {
        for name in VOID_ELEMENTS {
            assert!(is_known_tag(name), "{} missing from catalogue", name);
        }
    }

    #[test]
    fn test_custom_element_names() {
        assert!(is_custom_element_name("x-foo"));
        assert!(is_custom_element_name("my-element-2"));
        assert!(!is_custom_element_name("Foo-bar"));
        assert!(!is_custom_element_name("nohyphen"));
        assert!(!is_custom_element_name("-leading"));
    }

    #[test]
    fn test_svg_names_are_case_sensitive() {
        assert!(is_known_tag("clipPath"));
        assert!(!is_known_tag("clippath"));
    }

    #[test]
    fn test_known_tags_has_no_duplicates() {
        let all: Vec<_> = known_tags().collect();
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(all.len(), unique.len());
    }
}
