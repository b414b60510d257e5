//! Props, attribute values and children
//!
//! This module defines the data flowing into the builder:
//!
//! - [`Props`] - the ordered attribute record plus its `children` slot
//! - [`AttrValue`] - the closed set of attribute value shapes
//! - [`Child`] - the recursive children union, including pending values
//! - [`Number`] - numeric values formatted the way a script runtime prints them
//! - [`IntoProps`] - conversion into [`Props`], derivable with `#[derive(IntoProps)]`
//!
//! # Ordering
//!
//! Attribute order in the output is insertion order into [`Props`]. Nothing is
//! re-sorted, and re-inserting a key keeps its first position.
//!
//! ```
//! use html_jsx::{jsx, Props};
//!
//! let props = Props::new().attr("id", "main").attr("class", "wide");
//! assert_eq!(jsx("div", props), "<div id='main' class='wide'></div>");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use futures::future::BoxFuture;
use futures::FutureExt;
use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};
use crate::escape::escape_html;
use crate::types::Element;

/// Reserved prop name routed to the children pipeline
pub const CHILDREN_KEY: &str = "children";

/// A numeric attribute or child value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) if x.is_nan() => f.write_str("NaN"),
            Number::Float(x) if x.is_infinite() => {
                f.write_str(if x > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // -0 prints as 0
            Number::Float(x) if x == 0.0 => f.write_str("0"),
            Number::Float(x) => write_float(x, f),
        }
    }
}

/// Shortest round-trip digits, laid out the way scripting runtimes print numbers:
/// plain decimal for exponents in `-7..21`, `d.ddde+n` / `d.ddde-n` otherwise.
fn write_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x < 0.0 {
        f.write_str("-")?;
    }
    let sci = format!("{:e}", x.abs());
    let (mantissa, exp) = match sci.split_once('e') {
        Some(pair) => pair,
        None => return f.write_str(&sci),
    };
    let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exp + 1;

    if k <= n && n <= 21 {
        f.write_str(&digits)?;
        for _ in 0..(n - k) {
            f.write_str("0")?;
        }
        Ok(())
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        write!(f, "{}.{}", int, frac)
    } else if -6 < n && n <= 0 {
        f.write_str("0.")?;
        for _ in 0..(-n) {
            f.write_str("0")?;
        }
        f.write_str(&digits)
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            write!(f, "{}e{}{}", lead, sign, (n - 1).abs())
        } else {
            write!(f, "{}.{}e{}{}", lead, rest, sign, (n - 1).abs())
        }
    }
}

macro_rules! number_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            fn from(v: $t) -> Self {
                Number::Int(v as i64)
            }
        })*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32, isize);

impl From<u64> for Number {
    fn from(v: u64) -> Self {
        i64::try_from(v).map(Number::Int).unwrap_or(Number::Float(v as f64))
    }
}

impl From<usize> for Number {
    fn from(v: usize) -> Self {
        Number::from(v as u64)
    }
}

impl From<f32> for Number {
    /// Keeps the `f32`'s own shortest digits so `0.1f32` stays `0.1`
    fn from(v: f32) -> Self {
        Number::Float(v.to_string().parse().unwrap_or(v as f64))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

impl From<&serde_json::Number> for Number {
    fn from(n: &serde_json::Number) -> Self {
        match n.as_i64() {
            Some(i) => Number::Int(i),
            None => Number::Float(n.as_f64().unwrap_or(f64::NAN)),
        }
    }
}

/// An attribute value
///
/// Each variant has its own serialization rule; see
/// [`serialize_attributes`](crate::serialize_attributes).
#[derive(Clone)]
pub enum AttrValue {
    Str(String),
    Number(Number),
    Bool(bool),
    Timestamp(DateTime<Utc>),
    ClassList(Vec<String>),
    Other(Arc<dyn fmt::Display + Send + Sync>),
    Null,
}

impl AttrValue {
    /// Wrap any displayable value; it is stringified at serialization time
    pub fn other<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        AttrValue::Other(Arc::new(value))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            AttrValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Plain string form, without any quoting or normalization
    ///
    /// `Null` has no string form.
    pub fn to_plain_string(&self) -> Option<String> {
        match self {
            AttrValue::Str(s) => Some(s.clone()),
            AttrValue::Number(n) => Some(n.to_string()),
            AttrValue::Bool(b) => Some(b.to_string()),
            AttrValue::Timestamp(t) => Some(format_timestamp(t)),
            AttrValue::ClassList(items) => Some(items.join(",")),
            AttrValue::Other(v) => Some(v.to_string()),
            AttrValue::Null => None,
        }
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix
pub(crate) fn format_timestamp(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl fmt::Debug for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(s) => f.debug_tuple("Str").field(s).finish(),
            AttrValue::Number(n) => f.debug_tuple("Number").field(n).finish(),
            AttrValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            AttrValue::Timestamp(t) => f.debug_tuple("Timestamp").field(t).finish(),
            AttrValue::ClassList(c) => f.debug_tuple("ClassList").field(c).finish(),
            AttrValue::Other(v) => f.debug_tuple("Other").field(&v.to_string()).finish(),
            AttrValue::Null => f.write_str("Null"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Str(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Str(v)
    }
}

impl From<&String> for AttrValue {
    fn from(v: &String) -> Self {
        AttrValue::Str(v.clone())
    }
}

impl From<Cow<'_, str>> for AttrValue {
    fn from(v: Cow<'_, str>) -> Self {
        AttrValue::Str(v.into_owned())
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<Number> for AttrValue {
    fn from(v: Number) -> Self {
        AttrValue::Number(v)
    }
}

macro_rules! attr_from_number {
    ($($t:ty),*) => {
        $(impl From<$t> for AttrValue {
            fn from(v: $t) -> Self {
                AttrValue::Number(Number::from(v))
            }
        })*
    };
}

attr_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize, f32, f64);

impl From<DateTime<Utc>> for AttrValue {
    fn from(v: DateTime<Utc>) -> Self {
        AttrValue::Timestamp(v)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(v: Vec<String>) -> Self {
        AttrValue::ClassList(v)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(v: Vec<&str>) -> Self {
        AttrValue::ClassList(v.into_iter().map(String::from).collect())
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(AttrValue::Null)
    }
}

impl From<&JsonValue> for AttrValue {
    fn from(v: &JsonValue) -> Self {
        match v {
            JsonValue::Null => AttrValue::Null,
            JsonValue::Bool(b) => AttrValue::Bool(*b),
            JsonValue::Number(n) => AttrValue::Number(Number::from(n)),
            JsonValue::String(s) => AttrValue::Str(s.clone()),
            JsonValue::Array(items) => AttrValue::ClassList(
                items
                    .iter()
                    .map(|item| match item {
                        JsonValue::String(s) => s.clone(),
                        JsonValue::Null => String::new(),
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            JsonValue::Object(_) => AttrValue::Str(v.to_string()),
        }
    }
}

/// A children value
///
/// Leaves are text, numbers, booleans and null; `List` nests arbitrarily.
/// `Pending` holds an unresolved asynchronous string, which turns every
/// enclosing element into a pending [`Element`].
///
/// Text is emitted verbatim. Use [`Child::escaped`] for untrusted text.
pub enum Child {
    Null,
    Text(String),
    Number(Number),
    Bool(bool),
    List(Vec<Child>),
    Pending(BoxFuture<'static, String>),
}

impl Child {
    /// Text that is HTML-escaped now, at construction
    pub fn escaped(text: &str) -> Self {
        Child::Text(escape_html(text).into_owned())
    }

    /// Text emitted as-is
    pub fn raw<S: Into<String>>(text: S) -> Self {
        Child::Text(text.into())
    }

    /// A child that resolves later
    pub fn pending<F>(fut: F) -> Self
    where
        F: Future<Output = String> + Send + 'static,
    {
        Child::Pending(fut.boxed())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Child::Null)
    }

    /// Whether this child, or any nested child, is pending
    pub fn is_pending(&self) -> bool {
        match self {
            Child::Pending(_) => true,
            Child::List(items) => items.iter().any(Child::is_pending),
            _ => false,
        }
    }
}

impl fmt::Debug for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Child::Null => f.write_str("Null"),
            Child::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Child::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Child::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Child::List(items) => f.debug_tuple("List").field(items).finish(),
            Child::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

impl Default for Child {
    fn default() -> Self {
        Child::Null
    }
}

impl From<&str> for Child {
    fn from(v: &str) -> Self {
        Child::Text(v.to_string())
    }
}

impl From<String> for Child {
    fn from(v: String) -> Self {
        Child::Text(v)
    }
}

impl From<&String> for Child {
    fn from(v: &String) -> Self {
        Child::Text(v.clone())
    }
}

impl From<Cow<'_, str>> for Child {
    fn from(v: Cow<'_, str>) -> Self {
        Child::Text(v.into_owned())
    }
}

impl From<bool> for Child {
    fn from(v: bool) -> Self {
        Child::Bool(v)
    }
}

impl From<Number> for Child {
    fn from(v: Number) -> Self {
        Child::Number(v)
    }
}

macro_rules! child_from_number {
    ($($t:ty),*) => {
        $(impl From<$t> for Child {
            fn from(v: $t) -> Self {
                Child::Number(Number::from(v))
            }
        })*
    };
}

child_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize, f32, f64);

impl From<()> for Child {
    fn from(_: ()) -> Self {
        Child::Null
    }
}

impl<T: Into<Child>> From<Option<T>> for Child {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Child::Null)
    }
}

impl<T: Into<Child>> From<Vec<T>> for Child {
    fn from(v: Vec<T>) -> Self {
        Child::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<Element> for Child {
    fn from(v: Element) -> Self {
        match v {
            Element::Ready(s) => Child::Text(s),
            Element::Pending(fut) => Child::Pending(fut),
        }
    }
}

impl From<AttrValue> for Child {
    fn from(v: AttrValue) -> Self {
        match v {
            AttrValue::Null => Child::Null,
            AttrValue::Str(s) => Child::Text(s),
            AttrValue::Number(n) => Child::Number(n),
            AttrValue::Bool(b) => Child::Bool(b),
            AttrValue::ClassList(items) => Child::List(items.into_iter().map(Child::Text).collect()),
            other => other.to_plain_string().map(Child::Text).unwrap_or(Child::Null),
        }
    }
}

impl From<&JsonValue> for Child {
    fn from(v: &JsonValue) -> Self {
        match v {
            JsonValue::Null => Child::Null,
            JsonValue::Bool(b) => Child::Bool(*b),
            JsonValue::Number(n) => Child::Number(Number::from(n)),
            JsonValue::String(s) => Child::Text(s.clone()),
            JsonValue::Array(items) => Child::List(items.iter().map(Child::from).collect()),
            JsonValue::Object(_) => Child::Text(v.to_string()),
        }
    }
}

/// The props record passed to elements and components
///
/// Attributes keep insertion order. The reserved `children` key never lands
/// in the attribute map; every insertion path routes it to the children slot.
#[derive(Debug, Default)]
pub struct Props {
    attrs: IndexMap<Cow<'static, str>, AttrValue>,
    children: Option<Child>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            attrs: IndexMap::with_capacity(capacity),
            children: None,
        }
    }

    /// Builder form of [`Props::insert`]
    pub fn attr<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<Cow<'static, str>>,
        V: Into<AttrValue>,
    {
        self.insert(key, value);
        self
    }

    /// Insert an attribute, routing `children` to the children slot
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<Cow<'static, str>>,
        V: Into<AttrValue>,
    {
        let key = key.into();
        let value = value.into();
        if key == CHILDREN_KEY {
            self.children = Some(Child::from(value));
        } else {
            self.attrs.insert(key, value);
        }
    }

    /// Set the children value, replacing any previous one
    pub fn children<C: Into<Child>>(mut self, children: C) -> Self {
        self.set_children(children);
        self
    }

    pub fn set_children<C: Into<Child>>(&mut self, children: C) {
        self.children = Some(children.into());
    }

    /// Append one child, promoting any existing scalar child to a list
    pub fn child<C: Into<Child>>(mut self, child: C) -> Self {
        self.push_child(child);
        self
    }

    pub fn push_child<C: Into<Child>>(&mut self, child: C) {
        let child = child.into();
        self.children = Some(match self.children.take() {
            None => Child::List(vec![child]),
            Some(Child::List(mut items)) => {
                items.push(child);
                Child::List(items)
            }
            Some(existing) => Child::List(vec![existing, child]),
        });
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttrValue::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    /// Remove an attribute, preserving the order of the rest
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.attrs.shift_remove(key)
    }

    pub fn get_children(&self) -> Option<&Child> {
        self.children.as_ref()
    }

    pub fn take_children(&mut self) -> Option<Child> {
        self.children.take()
    }

    /// Attributes in insertion order
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attrs.iter().map(|(k, v)| (k.as_ref(), v))
    }

    /// Number of attributes, not counting children
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Build props from a JSON object, keeping its key order
    ///
    /// A `children` key becomes the children value.
    pub fn from_json(value: &JsonValue) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::render_static("props must be a JSON object"))?;

        let mut props = Props::with_capacity(object.len());
        for (key, value) in object {
            if key == CHILDREN_KEY {
                props.children = Some(Child::from(value));
            } else {
                props.attrs.insert(Cow::Owned(key.clone()), AttrValue::from(value));
            }
        }
        Ok(props)
    }

    /// Parse a JSON document into props
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(json)?;
        Self::from_json(&value)
    }
}

impl<K, V> FromIterator<(K, V)> for Props
where
    K: Into<Cow<'static, str>>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}

/// Conversion into a [`Props`] record
///
/// Implemented for [`Props`], `()`, and any struct deriving `IntoProps`
/// (with the `derive` feature).
pub trait IntoProps {
    fn into_props(self) -> Props;
}

impl IntoProps for Props {
    fn into_props(self) -> Props {
        self
    }
}

impl IntoProps for () {
    fn into_props(self) -> Props {
        Props::new()
    }
}
