//! Page document type definitions.
//!
//! A page document describes the rendered page this navigator drives: a
//! flat list of elements with their identifiers, class markers, hrefs, and
//! layout rectangles. All fields use `#[serde(default)]` so that partial
//! documents scan into inert configurations instead of failing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::viewport::Rect;

/// Class marker identifying a navigation link.
pub const NAV_LINK_CLASS: &str = "nav-link";

/// Class marker identifying a content section.
pub const SECTION_CLASS: &str = "section";

/// Element id of the "last login" display target.
pub const LAST_LOGIN_ID: &str = "last-login";

/// Errors raised while reading a page document.
#[derive(Debug, Error)]
pub enum PageDocumentError {
    /// The document is not valid JSON or has the wrong shape.
    #[error("malformed page document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Root structure of a page document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageDocument {
    /// Elements in document order.
    #[serde(default)]
    pub elements: Vec<PageElement>,
}

impl PageDocument {
    /// Parses a page document from JSON.
    ///
    /// # Errors
    /// Returns [`PageDocumentError::Malformed`] when the input is not valid
    /// JSON of the expected shape.
    pub fn from_json(input: &str) -> Result<Self, PageDocumentError> {
        Ok(serde_json::from_str(input)?)
    }
}

/// One rendered element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageElement {
    /// Element identifier, if any.
    #[serde(default)]
    pub id: Option<String>,
    /// Class markers on the element.
    #[serde(default)]
    pub classes: Vec<String>,
    /// Link reference, present on anchors.
    #[serde(default)]
    pub href: Option<String>,
    /// Layout rectangle, present on laid-out elements.
    #[serde(default)]
    pub rect: Option<Rect>,
}

impl PageElement {
    /// Returns true if the element carries the given class marker.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}
