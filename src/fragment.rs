//! Children resolution
//!
//! Flattens a [`Child`] tree into one string. Null leaves become `""`,
//! booleans and numbers their string form, and text is copied verbatim; this
//! stage never escapes.
//!
//! When any leaf is pending the result is a pending [`Element`]. Pending
//! leaves are awaited together and reassembled by position, so completion
//! order never affects output order.

use futures::future::{self, BoxFuture, Either};
use futures::FutureExt;

use crate::types::Element;
use crate::value::{Child, Props};

/// Resolve a children value into an element
pub fn resolve_children(children: Child) -> Element {
    match children {
        Child::List(items) => resolve_sequence(items),
        Child::Pending(fut) => Element::Pending(fut),
        leaf => {
            let mut out = String::new();
            write_leaf(&leaf, &mut out);
            Element::Ready(out)
        }
    }
}

/// Resolve a sequence of children, concatenated without separators
pub fn resolve_sequence(items: Vec<Child>) -> Element {
    if !items.iter().any(Child::is_pending) {
        let mut out = String::new();
        for item in &items {
            write_ready(item, &mut out);
        }
        return Element::Ready(out);
    }

    let mut segments = Vec::with_capacity(items.len());
    let mut text = String::new();
    for item in items {
        flatten(item, &mut text, &mut segments);
    }
    if !text.is_empty() {
        segments.push(Segment::Text(text));
    }

    tracing::trace!(segments = segments.len(), "children pending, deferring concatenation");
    Element::Pending(assemble(segments))
}

/// The fragment component: its children, with no wrapping tag
pub fn fragment(mut props: Props) -> Element {
    match props.take_children() {
        Some(children) => resolve_children(children),
        None => Element::empty(),
    }
}

enum Segment {
    Text(String),
    Pending(BoxFuture<'static, String>),
}

fn flatten(child: Child, text: &mut String, segments: &mut Vec<Segment>) {
    match child {
        Child::List(items) => {
            for item in items {
                flatten(item, text, segments);
            }
        }
        Child::Pending(fut) => {
            if !text.is_empty() {
                segments.push(Segment::Text(std::mem::take(text)));
            }
            segments.push(Segment::Pending(fut));
        }
        leaf => write_leaf(&leaf, text),
    }
}

fn assemble(segments: Vec<Segment>) -> BoxFuture<'static, String> {
    let parts = segments.into_iter().map(|segment| match segment {
        Segment::Text(text) => Either::Left(future::ready(text)),
        Segment::Pending(fut) => Either::Right(fut),
    });
    future::join_all(parts).map(|parts| parts.concat()).boxed()
}

fn write_ready(child: &Child, out: &mut String) {
    match child {
        Child::List(items) => {
            for item in items {
                write_ready(item, out);
            }
        }
        leaf => write_leaf(leaf, out),
    }
}

fn write_leaf(leaf: &Child, out: &mut String) {
    match leaf {
        Child::Text(s) => out.push_str(s),
        Child::Number(n) => out.push_str(&n.to_string()),
        Child::Bool(true) => out.push_str("true"),
        Child::Bool(false) => out.push_str("false"),
        Child::Null | Child::List(_) | Child::Pending(_) => {}
    }
}
