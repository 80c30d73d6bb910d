//! Section identifiers and href fragment extraction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier correlating a content section with a navigation link.
///
/// Links and sections are matched by identifier equality only, never by
/// reference, so this is the one value shared across the page model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Parses a page-supplied identifier.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidIdentifier`] if the identifier is empty
    /// or whitespace-only.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidIdentifier(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts the section lookup key from a link href.
///
/// A well-formed navigation href is `#identifier`; the leading `#` is
/// stripped. A href without one is passed through verbatim and simply fails
/// the section lookup downstream — malformed hrefs are not validated.
#[must_use]
pub fn fragment_of(href: &str) -> &str {
    href.strip_prefix('#').unwrap_or(href)
}
