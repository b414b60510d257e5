//! Test utilities for rendered HTML
//!
//! Rendered output is compared byte-for-byte in most tests. These helpers
//! parse output with `dom_query` instead, for tests that care about what a
//! browser would see: decoded text, attribute values, element counts.

use dom_query::Document;

/// Normalize HTML by parsing and re-serializing it
///
/// Quote style and whitespace inside tags are normalized; attribute order is
/// kept.
///
/// ```
/// use html_jsx::test_utils::normalize_html;
///
/// assert_eq!(
///     normalize_html("<div  id='main' ><p>Hello</p></div>"),
///     normalize_html("<div id=\"main\"><p>Hello</p></div>"),
/// );
/// ```
pub fn normalize_html(html: &str) -> String {
    let doc = Document::from(html);
    doc.html().trim().to_string()
}

/// Assert that two HTML strings parse to the same document
#[macro_export]
macro_rules! assert_html_eq {
    ($left:expr, $right:expr) => {
        {
            let left_normalized = $crate::test_utils::normalize_html($left);
            let right_normalized = $crate::test_utils::normalize_html($right);

            if left_normalized != right_normalized {
                panic!(
                    "HTML assertion failed\n\nLeft (normalized):\n{}\n\nRight (normalized):\n{}\n\nOriginal left:\n{}\n\nOriginal right:\n{}",
                    left_normalized,
                    right_normalized,
                    $left,
                    $right
                );
            }
        }
    };
}

/// Like `assert_html_eq!` but returns a bool
pub fn html_eq(html1: &str, html2: &str) -> bool {
    normalize_html(html1) == normalize_html(html2)
}

/// Decoded text content of the document body, whitespace-collapsed
pub fn extract_text(html: &str) -> String {
    let doc = Document::from(html);
    let body = doc.select("body");

    let text = if body.nodes().is_empty() {
        doc.text()
    } else {
        body.text()
    };

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decoded attribute values of every element matching `selector`
pub fn extract_attrs_by_selector(html: &str, selector: &str, attr: &str) -> Vec<String> {
    let doc = Document::from(html);
    let selection = doc.select(selector);

    selection
        .nodes()
        .iter()
        .filter_map(|node| node.attr(attr).map(|v| v.to_string()))
        .collect()
}

/// Count elements matching a selector
pub fn count_elements(html: &str, selector: &str) -> usize {
    let doc = Document::from(html);
    doc.select(selector).nodes().len()
}

/// Check if HTML contains an element matching a selector
pub fn has_element(html: &str, selector: &str) -> bool {
    count_elements(html, selector) > 0
}
