//! Tagged-template rendering
//!
//! [`render`] interleaves literal segments with interpolated values. Values
//! are escaped unless the literal segment right before them ends with the
//! escape marker `!`, in which case the marker is dropped and the value is
//! emitted raw.
//!
//! ```
//! use html_jsx::{render, TemplateValue};
//!
//! let user = TemplateValue::from("<script>");
//! assert_eq!(render(&["<p>", "</p>"], &[user.clone()]), "<p>&lt;script></p>");
//! assert_eq!(render(&["<p>!", "</p>"], &[user]), "<p><script></p>");
//! ```
//!
//! [`Template`] is the same thing with the policy chosen per slot by method
//! call instead of by marker.

use std::borrow::Cow;

use crate::escape::escape_html_into;
use crate::value::Number;

/// Trailing character on a literal segment that disables escaping
pub const ESCAPE_MARKER: char = '!';

/// A value interpolated into a template
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateValue {
    Null,
    Str(String),
    Number(Number),
    Bool(bool),
    List(Vec<TemplateValue>),
}

/// Whether an interpolated value is escaped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapePolicy {
    Escape,
    Raw,
}

/// Render literal segments interleaved with values
///
/// Precondition: `parts.len() == values.len() + 1`. Callers that break it
/// get a defined but unspecified rendering: missing segments are empty and
/// surplus segments are appended in order.
pub fn render<S: AsRef<str>>(parts: &[S], values: &[TemplateValue]) -> String {
    let literal_len: usize = parts.iter().map(|p| p.as_ref().len()).sum();
    let mut out = String::with_capacity(literal_len + 16 * values.len());
    let mut parts_iter = parts.iter();

    for value in values {
        let segment = parts_iter.next().map(|p| p.as_ref()).unwrap_or("");
        let policy = match segment.strip_suffix(ESCAPE_MARKER) {
            Some(literal) => {
                out.push_str(literal);
                EscapePolicy::Raw
            }
            None => {
                out.push_str(segment);
                EscapePolicy::Escape
            }
        };
        write_value(value, policy, &mut out);
    }

    for rest in parts_iter {
        out.push_str(rest.as_ref());
    }
    out
}

/// Template builder with an explicit escape policy per value
///
/// ```
/// use html_jsx::Template;
///
/// let html = Template::new()
///     .literal("<a title='")
///     .escaped("Tom & Jerry")
///     .literal("'>")
///     .raw("<b>bold</b>")
///     .literal("</a>")
///     .finish();
/// assert_eq!(html, "<a title='Tom &amp; Jerry'><b>bold</b></a>");
/// ```
#[derive(Debug, Default, Clone)]
pub struct Template {
    out: String,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { out: String::with_capacity(capacity) }
    }

    /// Append literal markup as-is; the escape marker has no meaning here
    pub fn literal(mut self, text: &str) -> Self {
        self.out.push_str(text);
        self
    }

    pub fn escaped<V: Into<TemplateValue>>(self, value: V) -> Self {
        self.value(value, EscapePolicy::Escape)
    }

    pub fn raw<V: Into<TemplateValue>>(self, value: V) -> Self {
        self.value(value, EscapePolicy::Raw)
    }

    pub fn value<V: Into<TemplateValue>>(mut self, value: V, policy: EscapePolicy) -> Self {
        write_value(&value.into(), policy, &mut self.out);
        self
    }

    pub fn finish(self) -> String {
        self.out
    }
}

fn write_value(value: &TemplateValue, policy: EscapePolicy, out: &mut String) {
    match value {
        TemplateValue::Null => {}
        TemplateValue::Str(s) => write_text(s, policy, out),
        TemplateValue::List(items) => {
            let mut joined = String::new();
            for item in items {
                join_item(item, &mut joined);
            }
            write_text(&joined, policy, out);
        }
        // Numbers and booleans cannot carry markup
        TemplateValue::Number(n) => out.push_str(&n.to_string()),
        TemplateValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
    }
}

fn write_text(text: &str, policy: EscapePolicy, out: &mut String) {
    match policy {
        EscapePolicy::Escape => escape_html_into(text, out),
        EscapePolicy::Raw => out.push_str(text),
    }
}

fn join_item(item: &TemplateValue, out: &mut String) {
    match item {
        TemplateValue::Null => {}
        TemplateValue::Str(s) => out.push_str(s),
        TemplateValue::Number(n) => out.push_str(&n.to_string()),
        TemplateValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        // Nested lists take the comma-joined form
        TemplateValue::List(inner) => {
            for (i, nested) in inner.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                join_item(nested, out);
            }
        }
    }
}

impl TemplateValue {
    /// The value as it would appear in escaped position
    pub fn to_escaped_string(&self) -> String {
        let mut out = String::new();
        write_value(self, EscapePolicy::Escape, &mut out);
        out
    }
}

impl From<&str> for TemplateValue {
    fn from(v: &str) -> Self {
        TemplateValue::Str(v.to_string())
    }
}

impl From<String> for TemplateValue {
    fn from(v: String) -> Self {
        TemplateValue::Str(v)
    }
}

impl From<&String> for TemplateValue {
    fn from(v: &String) -> Self {
        TemplateValue::Str(v.clone())
    }
}

impl From<Cow<'_, str>> for TemplateValue {
    fn from(v: Cow<'_, str>) -> Self {
        TemplateValue::Str(v.into_owned())
    }
}

impl From<bool> for TemplateValue {
    fn from(v: bool) -> Self {
        TemplateValue::Bool(v)
    }
}

impl From<Number> for TemplateValue {
    fn from(v: Number) -> Self {
        TemplateValue::Number(v)
    }
}

macro_rules! template_from_number {
    ($($t:ty),*) => {
        $(impl From<$t> for TemplateValue {
            fn from(v: $t) -> Self {
                TemplateValue::Number(Number::from(v))
            }
        })*
    };
}

template_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize, f32, f64);

impl<T: Into<TemplateValue>> From<Option<T>> for TemplateValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(TemplateValue::Null)
    }
}

impl<T: Into<TemplateValue>> From<Vec<T>> for TemplateValue {
    fn from(v: Vec<T>) -> Self {
        TemplateValue::List(v.into_iter().map(Into::into).collect())
    }
}

/// Render a template from literal segments and values
///
/// Expands to [`render`]; each value goes through `TemplateValue::from`.
///
/// ```
/// use html_jsx::html;
///
/// let name = "<Ann>";
/// assert_eq!(html!(["<p>Hi ", "!</p>"], name), "<p>Hi &lt;Ann>!</p>");
/// assert_eq!(html!(["<div>!", "</div>"], "<b>ok</b>"), "<div><b>ok</b></div>");
/// assert_eq!(html!(["<hr>"]), "<hr>");
/// ```
#[macro_export]
macro_rules! html {
    ([$($part:expr),+ $(,)?] $(, $value:expr)*) => {
        $crate::render(
            &[$($part),+],
            &[$($crate::TemplateValue::from($value)),*],
        )
    };
}
