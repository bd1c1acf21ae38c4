//! Browser provisioning boundary for capturekit.
//!
//! The capture core never talks to a browser library directly. It consumes
//! the capability surface defined in [`port`] — launch a browser, open a
//! page, navigate it, evaluate scripts inside it, close it — and this crate
//! supplies the Chromium-backed implementation plus executable discovery
//! and launch configuration.

pub mod chromium;
pub mod config;
pub mod error;
pub mod port;

pub use chromium::ChromiumPort;
pub use config::AdapterConfig;
pub use error::{AdapterError, AdapterErrorKind};
pub use port::{BrowserHandle, BrowserPort, PageHandle};
