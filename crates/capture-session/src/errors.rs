//! Session-level error taxonomy.

use locator_engine::LocatorError;
use thiserror::Error;

/// Capture lifecycle error enumeration.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// Provisioning, navigation, or observer arming failed; the session
    /// is Idle and no browser resource is left behind.
    #[error("capture start failed: {detail}")]
    StartFailed { detail: String },

    /// `stop()` without an active session.
    #[error("no active capture session to stop")]
    NoActiveSession,

    /// `fetch()` on an empty buffer. A soft empty-result condition, not
    /// a session failure.
    #[error("no actions captured yet")]
    NoActionsYet,

    /// A locator pipeline failure that was not element-local.
    #[error(transparent)]
    Locator(#[from] LocatorError),
}

impl CaptureError {
    pub fn start_failed(detail: impl Into<String>) -> Self {
        Self::StartFailed {
            detail: detail.into(),
        }
    }
}
