//! Page documents and the one-time startup scan.

mod document;
mod scan;

pub use document::{PageDocument, PageDocumentError, PageElement};
pub use scan::{scan_page, ScannedPage};
