//! Validating renderer
//!
//! [`Renderer`] is an opt-in development aid that checks tag names against the
//! catalogue before handing them to [`jsx`] / [`jsxs`]. The core functions
//! never consult the catalogue. With validation off it is a thin pass-through.
//!
//! ```
//! use html_jsx::{Error, Props, RenderConfig, Renderer};
//!
//! let renderer = Renderer::new(RenderConfig::strict());
//! assert_eq!(renderer.element("p", Props::new()).unwrap(), "<p></p>");
//! assert!(matches!(renderer.element("blink", Props::new()), Err(Error::UnknownTag(_))));
//! ```

use tracing::{debug, warn};

use crate::builder::{jsx, jsxs};
use crate::catalogue::{classify, TagKind};
use crate::error::{Error, Result};
use crate::types::{Element, RenderConfig, Tag, ValidationMode};
use crate::value::IntoProps;

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        debug!(validation = ?config.validation(), custom = config.allow_custom_elements(), "renderer configured");
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Check a tag name against the catalogue under the configured mode
    ///
    /// Returns the tag's classification when it is accepted.
    pub fn validate_tag(&self, name: &str) -> Result<TagKind> {
        let kind = classify(name);
        let accepted = match kind {
            TagKind::Custom => self.config.allow_custom_elements(),
            TagKind::Unknown => false,
            _ => true,
        };

        if accepted {
            return Ok(kind);
        }

        match self.config.validation() {
            ValidationMode::Off => Ok(kind),
            ValidationMode::Warn => {
                warn!(tag = name, kind = ?kind, "rendering tag outside the catalogue");
                Ok(kind)
            }
            ValidationMode::Strict => Err(Error::unknown_tag(name.to_string())),
        }
    }

    /// [`jsx`] with the tag validated first
    pub fn element<T, P>(&self, tag: T, props: P) -> Result<Element>
    where
        T: Into<Tag>,
        P: IntoProps,
    {
        let tag = self.checked(tag.into())?;
        Ok(jsx(tag, props))
    }

    /// [`jsxs`] with the tag validated first
    pub fn elements<T, P>(&self, tag: T, props: P) -> Result<Element>
    where
        T: Into<Tag>,
        P: IntoProps,
    {
        let tag = self.checked(tag.into())?;
        Ok(jsxs(tag, props))
    }

    fn checked(&self, tag: Tag) -> Result<Tag> {
        if let Tag::Name(ref name) = tag {
            if self.config.validation() != ValidationMode::Off {
                self.validate_tag(name)?;
            }
        }
        Ok(tag)
    }
}
