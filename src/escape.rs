//! HTML escaping
//!
//! Four characters are significant enough to be escaped: `"`, `&`, `'` and
//! `<`. `>` is left alone; it cannot open markup in text or quoted attribute
//! position, and skipping it keeps output small.
//!
//! | char | entity   |
//! |------|----------|
//! | `"`  | `&quot;` |
//! | `&`  | `&amp;`  |
//! | `'`  | `&#39`   |
//! | `<`  | `&lt;`   |
//!
//! The apostrophe entity intentionally has no trailing semicolon; existing
//! output depends on that exact byte sequence.

use std::borrow::Cow;

use once_cell::sync::Lazy;

/// Entity lookup indexed by ASCII code point
static ENTITIES: Lazy<[Option<&'static str>; 128]> = Lazy::new(|| {
    let mut table = [None; 128];
    table[b'"' as usize] = Some("&quot;");
    table[b'&' as usize] = Some("&amp;");
    table[b'\'' as usize] = Some("&#39");
    table[b'<' as usize] = Some("&lt;");
    table
});

#[inline]
fn entity_for(byte: u8) -> Option<&'static str> {
    ENTITIES.get(byte as usize).copied().flatten()
}

/// Escape a string for use in HTML text or quoted attribute position
///
/// Returns the input borrowed when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use html_jsx::escape_html;
///
/// assert_eq!(escape_html("a<b&c\"d'e"), "a&lt;b&amp;c&quot;d&#39e");
/// assert_eq!(escape_html("1 > 0"), "1 > 0");
/// ```
pub fn escape_html(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();
    let first = match bytes.iter().position(|&b| entity_for(b).is_some()) {
        Some(pos) => pos,
        None => return Cow::Borrowed(input),
    };

    let mut out = String::with_capacity(input.len() + input.len() / 4 + 8);
    out.push_str(&input[..first]);
    escape_from(&input[first..], &mut out);
    Cow::Owned(out)
}

/// Escape `input` and append the result to `out`
pub fn escape_html_into(input: &str, out: &mut String) {
    escape_from(input, out);
}

fn escape_from(input: &str, out: &mut String) {
    // All four entities replace single ASCII bytes, so slicing at their
    // positions always lands on char boundaries.
    let mut last = 0;
    for (i, &b) in input.as_bytes().iter().enumerate() {
        if let Some(entity) = entity_for(b) {
            out.push_str(&input[last..i]);
            out.push_str(entity);
            last = i + 1;
        }
    }
    out.push_str(&input[last..]);
}
