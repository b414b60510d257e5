//! Integration tests for tagged-template rendering

use html_jsx::test_utils::{count_elements, extract_text};
use html_jsx::*;
use pretty_assertions::assert_eq;

#[test]
fn test_user_input_escaped() {
    let user_input = TemplateValue::from("<script>");
    assert_eq!(render(&["<p>", "</p>"], &[user_input]), "<p>&lt;script></p>");
}

#[test]
fn test_marker_emits_raw() {
    let value = TemplateValue::from("x' onmouseover='y");
    assert_eq!(
        render(&["<p id='!", "'></p>"], &[value]),
        "<p id='x' onmouseover='y'></p>"
    );
}

#[test]
fn test_hostile_input_stays_text() {
    let hostile = "<img src=x onerror=alert(1)>";
    let out = html!(["<div class='comment'>", "</div>"], hostile);

    assert_eq!(count_elements(&out, "img"), 0);
    assert_eq!(extract_text(&out), hostile);
}

#[test]
fn test_mixed_value_types() {
    let tags: Vec<&str> = vec!["<li>rust</li>", "<li>html</li>"];
    let out = html!(
        ["<article data-id='", "' data-draft='", "'><h1>", "</h1><ul>!", "</ul>", "</article>"],
        17,
        false,
        "Notes & Thoughts",
        tags,
        None::<String>
    );

    assert_eq!(
        out,
        "<article data-id='17' data-draft='false'><h1>Notes &amp; Thoughts</h1><ul><li>rust</li><li>html</li></ul></article>"
    );
}

#[test]
fn test_template_and_jsx_escape_identically() {
    let text = "Fish & \"Chips\" <'n'>";
    let from_template = html!(["<p>", "</p>"], text);
    let from_jsx = jsx("p", Props::new().children(Child::escaped(text))).into_ready().unwrap();
    assert_eq!(from_template, from_jsx);
}

#[test]
fn test_template_embeds_rendered_elements() {
    let item = jsx("li", Props::new().children("one")).into_ready().unwrap();
    let out = html!(["<ul>!", "</ul>"], item);
    assert_eq!(out, "<ul><li>one</li></ul>");
}

#[test]
fn test_explicit_policy_builder_matches_marker() {
    let value = "<em>hi</em>";
    let marker = render(&["<p>!", "</p>"], &[TemplateValue::from(value)]);
    let builder = Template::new().literal("<p>").raw(value).literal("</p>").finish();
    assert_eq!(marker, builder);

    let marker = render(&["<p>", "</p>"], &[TemplateValue::from(value)]);
    let builder = Template::new().literal("<p>").escaped(value).literal("</p>").finish();
    assert_eq!(marker, builder);
}

#[test]
fn test_owned_segments() {
    let parts = vec![String::from("<b>"), String::from("</b>")];
    assert_eq!(render(parts.as_slice(), &[TemplateValue::from(3.25)]), "<b>3.25</b>");
}
