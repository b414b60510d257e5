//! Attribute serialization
//!
//! Turns an ordered attribute record into ` key='value'` pairs. Each pair
//! carries its own leading space, so an empty record serializes to `""`.
//!
//! # Security contract
//!
//! Attribute values are NOT entity-escaped. The only transformation applied
//! to string values is quote neutralization: every `'` becomes `"`, so a
//! value can never close its single-quoted attribute. Untrusted values that
//! must keep their exact text should be passed through
//! [`escape_html`](crate::escape_html) by the caller first. Text children are
//! held to the stronger, full-escaping contract; attributes intentionally are
//! not.

use std::borrow::Cow;

use crate::value::{format_timestamp, AttrValue, Props, CHILDREN_KEY};

const CLASS_KEY: &str = "class";

/// Replace every single quote with a double quote
///
/// This is normalization, not escaping: `it's` becomes `it"s`.
pub fn neutralize_quotes(value: &str) -> Cow<'_, str> {
    if value.contains('\'') {
        Cow::Owned(value.replace('\'', "\""))
    } else {
        Cow::Borrowed(value)
    }
}

/// Serialize attributes in iteration order
///
/// A `children` key is skipped.
///
/// ```
/// use html_jsx::{serialize_attributes, AttrValue};
///
/// let attrs = vec![
///     ("class", AttrValue::from("it's")),
///     ("disabled", AttrValue::from(true)),
///     ("hidden", AttrValue::from(false)),
///     ("tabindex", AttrValue::from(2)),
/// ];
/// let out = serialize_attributes(attrs.iter().map(|(k, v)| (*k, v)));
/// assert_eq!(out, " class='it\"s' disabled tabindex='2'");
/// ```
pub fn serialize_attributes<'a, I>(attrs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a AttrValue)>,
{
    let mut out = String::new();
    write_attributes(attrs, &mut out);
    out
}

/// Serialize the attributes of a props record
pub fn serialize_props(props: &Props) -> String {
    serialize_attributes(props.attrs())
}

/// Append serialized attributes to `out`
pub fn write_attributes<'a, I>(attrs: I, out: &mut String)
where
    I: IntoIterator<Item = (&'a str, &'a AttrValue)>,
{
    for (key, value) in attrs {
        if key == CLASS_KEY {
            write_class(value, out);
        } else if key != CHILDREN_KEY {
            write_attribute(key, value, out);
        }
    }
}

fn write_class(value: &AttrValue, out: &mut String) {
    let rendered: Cow<'_, str> = match value {
        AttrValue::Null => return,
        AttrValue::Str(s) => neutralize_quotes(s),
        // Lists use the plain comma-joined form, without quote neutralization
        AttrValue::ClassList(items) => Cow::Owned(items.join(",")),
        AttrValue::Number(n) => Cow::Owned(n.to_string()),
        AttrValue::Bool(b) => Cow::Owned(b.to_string()),
        AttrValue::Timestamp(t) => Cow::Owned(format_timestamp(t)),
        AttrValue::Other(v) => Cow::Owned(v.to_string()),
    };
    push_pair(CLASS_KEY, &rendered, out);
}

fn write_attribute(key: &str, value: &AttrValue, out: &mut String) {
    match value {
        AttrValue::Str(s) => push_pair(key, &neutralize_quotes(s), out),
        AttrValue::Bool(true) => {
            out.push(' ');
            out.push_str(key);
        }
        AttrValue::Bool(false) | AttrValue::Null => {}
        AttrValue::Timestamp(t) => push_pair(key, &format_timestamp(t), out),
        AttrValue::ClassList(items) => push_pair(key, &neutralize_quotes(&items.join(",")), out),
        AttrValue::Other(v) => push_pair(key, &neutralize_quotes(&v.to_string()), out),
        AttrValue::Number(n) => push_pair(key, &n.to_string(), out),
    }
}

#[inline]
fn push_pair(key: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(key);
    out.push_str("='");
    out.push_str(value);
    out.push('\'');
}
