//! The in-memory action buffer and its append handle.

use std::sync::Arc;

use capturekit_core_types::ActionRecord;
use parking_lot::Mutex;
use tracing::warn;

/// Append-only record store with an armed/disarmed latch.
///
/// The latch enforces the session invariant that actions are appended
/// only while a session is Active: `start()` clears and arms the buffer,
/// `stop()` disarms it, and appends arriving after a disarm are dropped.
/// Appends and snapshot reads exclude each other per operation, so
/// readers always observe a consistent prefix.
#[derive(Default)]
pub struct ActionBuffer {
    inner: Mutex<BufferInner>,
}

#[derive(Default)]
struct BufferInner {
    records: Vec<ActionRecord>,
    armed: bool,
}

impl ActionBuffer {
    /// A disarmed, empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear accumulated records and accept appends again.
    pub(crate) fn rearm(&self) {
        let mut inner = self.inner.lock();
        inner.records.clear();
        inner.armed = true;
    }

    /// Stop accepting appends; accumulated records stay readable.
    pub(crate) fn disarm(&self) {
        self.inner.lock().armed = false;
    }

    fn append(&self, record: ActionRecord) -> bool {
        let mut inner = self.inner.lock();
        if !inner.armed {
            return false;
        }
        inner.records.push(record);
        true
    }

    /// Copy of the buffer contents in append order.
    pub fn snapshot(&self) -> Vec<ActionRecord> {
        self.inner.lock().records.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cloneable append handle handed to the instrumentation observer.
#[derive(Clone)]
pub struct ActionSink {
    buffer: Arc<ActionBuffer>,
}

impl ActionSink {
    pub(crate) fn new(buffer: Arc<ActionBuffer>) -> Self {
        Self { buffer }
    }

    /// Record one captured interaction. Dropped with a warning when the
    /// session is no longer Active.
    pub fn record(&self, record: ActionRecord) {
        if !self.buffer.append(record) {
            warn!(
                target: "capture-session",
                "dropping action recorded outside an active session"
            );
        }
    }
}
