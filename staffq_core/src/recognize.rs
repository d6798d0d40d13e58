//! Entity recognition seam.
//!
//! The recognizer is treated as an opaque capability that maps free text to
//! labeled spans. Keeping it behind a trait lets the extractor and
//! dispatcher run against a deterministic fake in tests instead of a real
//! model.

use serde::{Deserialize, Serialize};

/// Label attached to a recognized span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityLabel {
    /// Organization names ("Acme Corp").
    Organization,
    /// Product or product-category names.
    Product,
    /// Date expressions, absolute or spoken ("2021-01-01", "last week").
    Date,
}

impl EntityLabel {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Organization => "organization",
            Self::Product => "product",
            Self::Date => "date",
        }
    }
}

/// A labeled span of text recognized in a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// The matched text, verbatim.
    pub text: String,
    pub label: EntityLabel,
    /// Byte offset of the span in the source text.
    pub start: usize,
}

impl EntitySpan {
    #[must_use]
    pub fn new(text: impl Into<String>, label: EntityLabel, start: usize) -> Self {
        Self {
            text: text.into(),
            label,
            start,
        }
    }
}

/// Capability interface over an entity-recognition model.
///
/// Implementations return spans in document order.
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Vec<EntitySpan>;
}
