//! Per-interaction extract-then-synthesize pipeline.

use browser_adapter::PageHandle;
use capturekit_core_types::{ActionDetails, ActionRecord};
use locator_engine::{synthesize, ElementProbe, ElementRef, LocatorError};
use tracing::{debug, warn};

use crate::buffer::ActionSink;
use crate::errors::CaptureError;

/// Extract the target element's snapshot, synthesize its locator set, and
/// append the resulting record through the sink.
///
/// A stale element reference is reported and skipped — one vanished
/// element must never take the session down. Other failures (the page or
/// browser going away mid-evaluation) propagate to the observer.
pub async fn capture_interaction(
    page: &dyn PageHandle,
    target: &ElementRef,
    details: ActionDetails,
    sink: &ActionSink,
) -> Result<(), CaptureError> {
    let probe = ElementProbe::new(page, target);

    let snapshot = match probe.snapshot().await {
        Ok(snapshot) => snapshot,
        Err(err) if err.is_element_local() => {
            warn!(
                target: "capture-session",
                expression = target.expression(),
                "element vanished before extraction; skipping interaction"
            );
            return Ok(());
        }
        Err(err) => return Err(CaptureError::Locator(err)),
    };

    let locators = match synthesize(&snapshot, &probe).await {
        Ok(locators) => locators,
        Err(err @ LocatorError::ElementNotFound(_)) => {
            warn!(
                target: "capture-session",
                %err,
                "element vanished before synthesis; skipping interaction"
            );
            return Ok(());
        }
        Err(err) => return Err(CaptureError::Locator(err)),
    };

    debug!(
        target: "capture-session",
        kind = %details.kind,
        tag = %snapshot.tag_name,
        locators = locators.len(),
        "interaction captured"
    );

    sink.record(ActionRecord {
        action: details,
        locators,
    });
    Ok(())
}
