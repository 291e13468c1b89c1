//! Core data types for registry results.

use roxmltree::Document;

use crate::error::Result;

/// How much of the SOAP response a call should yield.
///
/// Each remote call names the scope it wants; there is no process-wide
/// setting to toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseScope {
    /// Only the query result inside the response body.
    #[default]
    BodyOnly,
    /// The entire SOAP envelope, headers and all.
    FullEnvelope,
}

/// An XML document returned by the registry.
///
/// Owns the response text and guarantees, from construction on, that the
/// text parses and has a root element. A root with zero child records is a
/// valid "no matches" result; a document without a root is rejected here.
///
/// The registrations (or sub-elements selected by the query) are the
/// first-level children of the root element. The client never retains one
/// of these; each call produces a fresh document owned by the caller.
#[derive(Debug, Clone)]
pub struct ResultDocument {
    xml: String,
}

impl ResultDocument {
    /// Wrap registry response text, validating that it parses to a tree
    /// with a root element.
    pub fn new(xml: String) -> Result<Self> {
        Document::parse(&xml)?;
        Ok(Self { xml })
    }

    /// The raw XML text.
    #[must_use]
    pub fn xml(&self) -> &str {
        &self.xml
    }

    /// Parse into a navigable tree.
    #[must_use]
    #[allow(clippy::expect_used)] // Text is validated in the constructor
    pub fn document(&self) -> Document<'_> {
        Document::parse(&self.xml).expect("validated at construction")
    }
}
