//! Instrumentation-hook capability.

use std::sync::Arc;

use async_trait::async_trait;
use browser_adapter::PageHandle;
use tracing::debug;

use crate::buffer::ActionSink;
use crate::errors::CaptureError;

/// External instrumentation armed once per session start.
///
/// An implementation wires page-side event capture (however it chooses)
/// and, per user interaction, drives [`crate::pipeline::capture_interaction`]
/// with the element reference and action metadata it observed, recording
/// through the sink. The session manager only arms it; it never
/// constructs one.
#[async_trait]
pub trait InteractionObserver: Send + Sync {
    async fn arm(&self, page: Arc<dyn PageHandle>, sink: ActionSink) -> Result<(), CaptureError>;
}

/// Placeholder observer: arms nothing and records nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

#[async_trait]
impl InteractionObserver for NoopObserver {
    async fn arm(&self, _page: Arc<dyn PageHandle>, _sink: ActionSink) -> Result<(), CaptureError> {
        debug!(
            target: "capture-session",
            "no instrumentation wired; interactions will not be recorded"
        );
        Ok(())
    }
}
