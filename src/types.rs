//! Core runtime types and configuration
//!
//! # Key Types
//!
//! - [`Element`] - rendered output, ready or pending
//! - [`Tag`] - what to build: a literal element name, a component, or a fragment
//! - [`Component`] - a shareable `(Props) -> Element` function
//! - [`RenderConfig`] - options for the validating [`Renderer`](crate::Renderer)
//!
//! # Pending elements
//!
//! An element is a plain string unless one of its children is still being
//! computed. Once any child is pending the whole subtree is pending; awaiting
//! it yields the same string the synchronous path would have produced.
//!
//! ```
//! use html_jsx::{jsx, Child, Props};
//!
//! let element = jsx("p", Props::new().children(Child::pending(async { "later".to_string() })));
//! assert!(element.is_pending());
//! ```

use std::borrow::Cow;
use std::fmt;
use std::future::IntoFuture;
use std::sync::Arc;

use futures::future::{self, BoxFuture};
use futures::FutureExt;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::value::Props;

/// The output of a render call
pub enum Element {
    Ready(String),
    Pending(BoxFuture<'static, String>),
}

impl Element {
    pub fn empty() -> Self {
        Element::Ready(String::new())
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Element::Pending(_))
    }

    pub fn as_ready(&self) -> Option<&str> {
        match self {
            Element::Ready(s) => Some(s),
            Element::Pending(_) => None,
        }
    }

    /// The rendered string, if nothing is pending
    pub fn into_ready(self) -> Option<String> {
        match self {
            Element::Ready(s) => Some(s),
            Element::Pending(_) => None,
        }
    }

    /// Resolve to the final string, awaiting pending children if any
    pub async fn into_string(self) -> String {
        match self {
            Element::Ready(s) => s,
            Element::Pending(fut) => fut.await,
        }
    }

    /// Transform the eventual string, staying synchronous when possible
    pub fn map<F>(self, f: F) -> Element
    where
        F: FnOnce(String) -> String + Send + 'static,
    {
        match self {
            Element::Ready(s) => Element::Ready(f(s)),
            Element::Pending(fut) => Element::Pending(fut.map(f).boxed()),
        }
    }
}

impl IntoFuture for Element {
    type Output = String;
    type IntoFuture = BoxFuture<'static, String>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Element::Ready(s) => future::ready(s).boxed(),
            Element::Pending(fut) => fut,
        }
    }
}

impl Default for Element {
    fn default() -> Self {
        Element::empty()
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Ready(s) => f.debug_tuple("Ready").field(s).finish(),
            Element::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

impl From<String> for Element {
    fn from(s: String) -> Self {
        Element::Ready(s)
    }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Element::Ready(s.to_string())
    }
}

impl PartialEq<str> for Element {
    fn eq(&self, other: &str) -> bool {
        self.as_ready() == Some(other)
    }
}

impl PartialEq<&str> for Element {
    fn eq(&self, other: &&str) -> bool {
        self.as_ready() == Some(*other)
    }
}

impl PartialEq<String> for Element {
    fn eq(&self, other: &String) -> bool {
        self.as_ready() == Some(other.as_str())
    }
}

/// A component: a function from props to an element
///
/// Cloning is cheap; the function is reference counted.
#[derive(Clone)]
pub struct Component {
    name: Option<&'static str>,
    func: Arc<dyn Fn(Props) -> Element + Send + Sync>,
}

impl Component {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(Props) -> Element + Send + Sync + 'static,
    {
        Self { name: None, func: Arc::new(func) }
    }

    /// A component with a name used in log output
    pub fn named<F>(name: &'static str, func: F) -> Self
    where
        F: Fn(Props) -> Element + Send + Sync + 'static,
    {
        Self { name: Some(name), func: Arc::new(func) }
    }

    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    pub fn call(&self, props: Props) -> Element {
        (self.func)(props)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component").field("name", &self.name).finish()
    }
}

/// What the builder should produce
#[derive(Debug, Clone)]
pub enum Tag {
    /// A literal element name, emitted verbatim
    Name(Cow<'static, str>),
    /// A component, called with the props
    Component(Component),
    /// Children concatenated without any wrapping tag
    Fragment,
}

impl Tag {
    pub fn component<F>(func: F) -> Self
    where
        F: Fn(Props) -> Element + Send + Sync + 'static,
    {
        Tag::Component(Component::new(func))
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Tag::Name(name) => Some(name),
            _ => None,
        }
    }
}

impl From<&'static str> for Tag {
    fn from(name: &'static str) -> Self {
        Tag::Name(Cow::Borrowed(name))
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        Tag::Name(Cow::Owned(name))
    }
}

impl From<Cow<'static, str>> for Tag {
    fn from(name: Cow<'static, str>) -> Self {
        Tag::Name(name)
    }
}

impl From<Component> for Tag {
    fn from(component: Component) -> Self {
        Tag::Component(component)
    }
}

impl From<&Component> for Tag {
    fn from(component: &Component) -> Self {
        Tag::Component(component.clone())
    }
}

/// How the [`Renderer`](crate::Renderer) treats tag names outside the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// No checks; identical to calling `jsx` directly
    #[default]
    Off,
    /// Log unknown tags and render them anyway
    Warn,
    /// Reject unknown tags and malformed templates
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub(crate) validation: ValidationMode,
    pub(crate) allow_custom_elements: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            validation: ValidationMode::Off,
            allow_custom_elements: true,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the validation mode
    pub fn with_validation(mut self, mode: ValidationMode) -> Self {
        self.validation = mode;
        self
    }

    /// Accept hyphenated custom element names during validation
    pub fn with_custom_elements(mut self, enabled: bool) -> Self {
        self.allow_custom_elements = enabled;
        self
    }

    /// Reject anything outside the catalogue, custom elements included
    pub fn strict() -> Self {
        Self {
            validation: ValidationMode::Strict,
            allow_custom_elements: false,
        }
    }

    /// Render everything, logging what would have been rejected
    pub fn permissive() -> Self {
        Self {
            validation: ValidationMode::Warn,
            allow_custom_elements: true,
        }
    }

    /// Load a configuration from JSON; missing fields take their defaults
    ///
    /// ```
    /// use html_jsx::{RenderConfig, ValidationMode};
    ///
    /// let config = RenderConfig::from_json_str(r#"{"validation": "warn"}"#).unwrap();
    /// assert_eq!(config.validation(), ValidationMode::Warn);
    /// assert!(config.allow_custom_elements());
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(Error::config_static("render config must be a JSON object"));
        }
        Ok(serde_json::from_value(value)?)
    }

    // Accessors
    pub fn validation(&self) -> ValidationMode {
        self.validation
    }
    pub fn allow_custom_elements(&self) -> bool {
        self.allow_custom_elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.validation(), ValidationMode::Off);
        assert!(config.allow_custom_elements());
    }

    #[test]
    fn test_config_builders() {
        let config = RenderConfig::new()
            .with_validation(ValidationMode::Strict)
            .with_custom_elements(false);
        assert_eq!(config, RenderConfig::strict());
        assert_eq!(RenderConfig::permissive().validation(), ValidationMode::Warn);
    }

    #[test]
    fn test_config_from_json() {
        let config =
            RenderConfig::from_json_str(r#"{"validation": "strict", "allow_custom_elements": false}"#)
                .unwrap();
        assert_eq!(config, RenderConfig::strict());

        assert!(matches!(RenderConfig::from_json_str("3"), Err(Error::ConfigError(_))));
        assert!(matches!(
            RenderConfig::from_json_str(r#"{"validation": "loud"}"#),
            Err(Error::JsonError(_))
        ));
    }

    #[test]
    fn test_element_accessors() {
        let element = Element::from("<br>");
        assert!(!element.is_pending());
        assert_eq!(element, "<br>");
        assert_eq!(element.into_ready().as_deref(), Some("<br>"));
    }

    #[test]
    fn test_element_map_ready() {
        let element = Element::from("a").map(|s| s + "b");
        assert_eq!(element, "ab");
    }

    #[tokio::test]
    async fn test_element_map_pending() {
        let element = Element::Pending(async { "x".to_string() }.boxed()).map(|s| format!("[{}]", s));
        assert!(element.is_pending());
        assert_eq!(element.await, "[x]");
    }

    #[test]
    fn test_component_call() {
        let component = Component::named("Echo", |props: Props| {
            Element::Ready(props.get_str("msg").unwrap_or_default().to_string())
        });
        assert_eq!(component.name(), Some("Echo"));
        assert_eq!(component.call(Props::new().attr("msg", "hi")), "hi");
    }
}
