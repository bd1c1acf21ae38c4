//! Capture session lifecycle.
//!
//! One session per process: `Idle --start(url)--> Active --stop()--> Idle`,
//! with `fetch()` a pure read in either state. The session owns the
//! browser resource exclusively — a handle exists iff the session is
//! Active — and the action buffer accepts appends only while Active.
//!
//! The instrumentation that turns live page interactions into recorded
//! actions is an external capability ([`InteractionObserver`]); this crate
//! arms it with the open page and an [`ActionSink`] and supplies the
//! per-interaction extract-then-synthesize pipeline it drives.

pub mod buffer;
pub mod errors;
pub mod observer;
pub mod pipeline;
pub mod session;

pub use buffer::{ActionBuffer, ActionSink};
pub use errors::CaptureError;
pub use observer::{InteractionObserver, NoopObserver};
pub use pipeline::capture_interaction;
pub use session::{CaptureSession, SessionState, DEFAULT_TARGET_URL};
