//! Error types surfaced by the browser adapter.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// High-level error categories surfaced by the adapter.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error, Serialize, Deserialize)]
pub enum AdapterErrorKind {
    #[error("browser launch failed")]
    LaunchFailed,
    #[error("navigation failed")]
    NavFailed,
    #[error("script evaluation failed")]
    EvalFailed,
    #[error("page is gone")]
    PageGone,
    #[error("internal adapter error")]
    Internal,
}

/// Enriched error metadata passed back to higher layers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdapterError {
    pub kind: AdapterErrorKind,
    pub hint: Option<String>,
}

impl AdapterError {
    pub fn new(kind: AdapterErrorKind) -> Self {
        Self { kind, hint: None }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Whether a caller could reasonably retry the failed operation.
    pub fn is_retriable(&self) -> bool {
        matches!(
            self.kind,
            AdapterErrorKind::NavFailed | AdapterErrorKind::EvalFailed
        )
    }
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(hint) = &self.hint {
            write!(f, ": {}", hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for AdapterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_hint() {
        let err = AdapterError::new(AdapterErrorKind::NavFailed).with_hint("dns lookup failed");
        assert_eq!(err.to_string(), "navigation failed: dns lookup failed");
    }

    #[test]
    fn launch_failures_are_not_retriable() {
        assert!(!AdapterError::new(AdapterErrorKind::LaunchFailed).is_retriable());
        assert!(AdapterError::new(AdapterErrorKind::EvalFailed).is_retriable());
    }
}
