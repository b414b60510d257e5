//! Element construction
//!
//! The two entry points a compiled component calls into:
//!
//! - [`jsx`] - one child expression (scalar or list)
//! - [`jsxs`] - children statically known to be a list
//!
//! Both produce identical output for equivalent input; `jsxs` just skips the
//! scalar-or-list check when it can.
//!
//! # Examples
//!
//! ```
//! use html_jsx::{escape_html, jsx, jsxs, Child, Props, Tag};
//!
//! let greeting = Tag::component(|props: Props| {
//!     let name = props.get_str("name").unwrap_or("stranger");
//!     jsx("p", Props::new().children(format!("Hello {}", escape_html(name))))
//! });
//!
//! let page = jsxs(
//!     "main",
//!     Props::new()
//!         .attr("class", "page")
//!         .child(jsx("img", Props::new().attr("src", "x.png")))
//!         .child(jsx(greeting, Props::new().attr("name", "<Ann>"))),
//! );
//!
//! assert_eq!(page, "<main class='page'><img src='x.png'><p>Hello &lt;Ann></p></main>");
//! ```

use crate::attributes::write_attributes;
use crate::fragment::{fragment, resolve_children, resolve_sequence};
use crate::types::{Element, Tag};
use crate::value::{Child, IntoProps, Props};

/// Elements that never get a closing tag or children
pub const VOID_ELEMENTS: [&str; 16] = [
    "meta", "link", "img", "br", "input", "hr", "area", "base", "col", "command", "embed",
    "keygen", "param", "source", "track", "wbr",
];

/// Whether `name` is a void element (case-sensitive)
pub fn is_void_element(name: &str) -> bool {
    matches!(
        name,
        "meta"
            | "link"
            | "img"
            | "br"
            | "input"
            | "hr"
            | "area"
            | "base"
            | "col"
            | "command"
            | "embed"
            | "keygen"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Build an element from a tag and its props
///
/// A literal tag name is emitted verbatim; it is not checked against any
/// catalogue. A component tag is called with the props and its result is
/// returned unchanged.
pub fn jsx<T, P>(tag: T, props: P) -> Element
where
    T: Into<Tag>,
    P: IntoProps,
{
    build(tag.into(), props.into_props(), ChildShape::Any)
}

/// Build an element whose children are statically a list
///
/// Output is identical to [`jsx`]; a scalar children value is still accepted.
pub fn jsxs<T, P>(tag: T, props: P) -> Element
where
    T: Into<Tag>,
    P: IntoProps,
{
    build(tag.into(), props.into_props(), ChildShape::Sequence)
}

#[derive(Clone, Copy)]
enum ChildShape {
    Any,
    Sequence,
}

fn build(tag: Tag, props: Props, shape: ChildShape) -> Element {
    match tag {
        Tag::Name(name) => build_literal(&name, props, shape),
        Tag::Component(component) => {
            tracing::trace!(component = component.name().unwrap_or("anonymous"), "calling component");
            component.call(props)
        }
        Tag::Fragment => fragment(props),
    }
}

fn build_literal(name: &str, mut props: Props, shape: ChildShape) -> Element {
    let mut open = String::with_capacity(name.len() * 2 + 16);
    open.push('<');
    open.push_str(name);
    write_attributes(props.attrs(), &mut open);

    if is_void_element(name) {
        open.push('>');
        return Element::Ready(open);
    }

    let children = match props.take_children() {
        None | Some(Child::Null) => {
            open.push_str("></");
            open.push_str(name);
            open.push('>');
            return Element::Ready(open);
        }
        Some(children) => children,
    };

    let body = match (shape, children) {
        (ChildShape::Sequence, Child::List(items)) => resolve_sequence(items),
        (_, children) => resolve_children(children),
    };

    open.push('>');
    match body {
        Element::Ready(body) => {
            open.reserve(body.len() + name.len() + 3);
            open.push_str(&body);
            push_close(name, &mut open);
            Element::Ready(open)
        }
        pending => {
            tracing::trace!(tag = name, "element pending on children");
            let mut close = String::with_capacity(name.len() + 3);
            push_close(name, &mut close);
            pending.map(move |body| {
                let mut out = open;
                out.push_str(&body);
                out.push_str(&close);
                out
            })
        }
    }
}

#[inline]
fn push_close(name: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}
