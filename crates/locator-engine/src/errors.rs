//! Error types for snapshot extraction and locator synthesis.

use browser_adapter::AdapterError;
use thiserror::Error;

/// Locator pipeline error enumeration.
#[derive(Debug, Error)]
pub enum LocatorError {
    /// The element reference no longer resolves to an attached element.
    /// Local to a single interaction; callers skip, never retry.
    #[error("element not found: {0}")]
    ElementNotFound(String),

    /// In-page evaluation failed at the adapter level.
    #[error("in-page evaluation failed: {0}")]
    Eval(#[from] AdapterError),

    /// The probe script returned a shape the engine cannot read.
    #[error("malformed probe result: {0}")]
    Malformed(String),
}

impl LocatorError {
    /// True when the failure concerns one stale element rather than the
    /// page or browser as a whole.
    pub fn is_element_local(&self) -> bool {
        matches!(self, LocatorError::ElementNotFound(_))
    }
}
