//! Server-side JSX runtime
//!
//! This crate renders component trees and tagged templates to HTML strings.
//! There is no virtual DOM: every element is built bottom-up by plain function
//! calls and the result is a `String` (or, when a child is still being
//! computed, a future resolving to one).
//!
//! # Entry points
//!
//! - [`jsx`] / [`jsxs`] - build an element from a [`Tag`] and [`Props`]
//! - [`escape_html`] - escape untrusted text
//! - [`render`] / [`html!`] - tagged templates with per-value escaping
//!
//! # Escaping discipline
//!
//! Escaping is explicit. Text children are inserted verbatim; wrap untrusted
//! text with [`Child::escaped`] or [`escape_html`]. Attribute values only get
//! quote neutralization (`'` becomes `"`), never entity escaping. Template
//! values are escaped unless their preceding segment ends with `!`.
//!
//! # Examples
//!
//! ```
//! use html_jsx::{jsx, jsxs, Child, Props, Tag};
//!
//! let card = Tag::component(|props: Props| {
//!     let title = props.get_str("title").unwrap_or_default();
//!     jsxs(
//!         "div",
//!         Props::new()
//!             .attr("class", "card")
//!             .child(jsx("h2", Props::new().children(Child::escaped(title))))
//!             .child(jsx("hr", Props::new())),
//!     )
//! });
//!
//! let html = jsx(card, Props::new().attr("title", "Fish & Chips"));
//! assert_eq!(html, "<div class='card'><h2>Fish &amp; Chips</h2><hr></div>");
//! ```

pub mod attributes;
pub mod builder;
pub mod catalogue;
pub mod error;
pub mod escape;
pub mod fragment;
pub mod renderer;
pub mod template;
pub mod test_utils;
pub mod types;
pub mod value;


// Re-export commonly used types
pub use attributes::{serialize_attributes, serialize_props};
pub use builder::{is_void_element, jsx, jsxs, VOID_ELEMENTS};
pub use catalogue::TagKind;
pub use error::{Error, Result};
pub use escape::escape_html;
pub use fragment::{fragment, resolve_children};
pub use renderer::Renderer;
pub use template::{render, EscapePolicy, Template, TemplateValue};
pub use types::{Component, Element, RenderConfig, Tag, ValidationMode};
pub use value::{AttrValue, Child, IntoProps, Number, Props};

#[cfg(feature = "derive")]
pub use html_jsx_macros::IntoProps;
