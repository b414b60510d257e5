//! Error handling for html-jsx
//!
//! The rendering core (`jsx`, `jsxs`, `escape_html`, `render`) never fails for
//! well-typed input, so none of those functions return this type. Errors only
//! surface from the opt-in layers around the core:
//!
//! - [`Error::UnknownTag`] - a tag name rejected by a strict [`Renderer`]
//! - [`Error::RenderError`] - a render request the validating renderer refused
//! - [`Error::ConfigError`] - an unusable [`RenderConfig`]
//! - [`Error::JsonError`] - JSON parsing for configs and JSON-sourced props
//!
//! # Usage
//!
//! ```rust,ignore
//! use html_jsx::{Error, Renderer, RenderConfig, Props};
//!
//! let renderer = Renderer::new(RenderConfig::strict());
//! match renderer.element("blink", Props::new()) {
//!     Ok(element) => println!("{}", element),
//!     Err(Error::UnknownTag(name)) => println!("refusing <{}>", name),
//!     Err(err) => println!("other error: {}", err),
//! }
//! ```
//!
//! Messages use `Cow<'static, str>` so static messages cost no allocation.
//!
//! [`Renderer`]: crate::Renderer
//! [`RenderConfig`]: crate::RenderConfig

use std::borrow::Cow;
use thiserror::Error;

/// Error type for the validating and configuration layers of html-jsx
#[derive(Error, Debug)]
pub enum Error {
    /// A tag name that is neither in the catalogue nor an allowed custom element
    #[error("Unknown tag: <{0}>")]
    UnknownTag(Cow<'static, str>),

    /// A render request that could not be honoured
    #[error("Render error: {0}")]
    RenderError(Cow<'static, str>),

    /// Invalid or inconsistent configuration
    #[error("Config error: {0}")]
    ConfigError(Cow<'static, str>),

    /// JSON parsing and conversion errors
    ///
    /// Automatically converted from `serde_json::Error`.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl Error {
    /// Create an unknown-tag error for the given name
    pub fn unknown_tag<S: Into<Cow<'static, str>>>(name: S) -> Self {
        Error::UnknownTag(name.into())
    }

    /// Create a render error with a static string
    pub fn render_static(msg: &'static str) -> Self {
        Error::RenderError(Cow::Borrowed(msg))
    }

    /// Create a render error with an owned string
    pub fn render_owned(msg: String) -> Self {
        Error::RenderError(Cow::Owned(msg))
    }

    /// Create a config error with a static string
    pub fn config_static(msg: &'static str) -> Self {
        Error::ConfigError(Cow::Borrowed(msg))
    }

    /// Create a config error with an owned string
    pub fn config_owned(msg: String) -> Self {
        Error::ConfigError(Cow::Owned(msg))
    }
}

/// Result type alias for html-jsx operations that can fail
pub type Result<T> = std::result::Result<T, Error>;
