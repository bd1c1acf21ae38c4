//! Capability surface the capture core consumes.
//!
//! One trait per owned resource: `BrowserPort` provisions, `BrowserHandle`
//! owns a running browser process, `PageHandle` is a navigated tab. The
//! session manager holds these as trait objects so tests can substitute
//! in-memory fakes for the whole browser.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::AdapterConfig;
use crate::error::AdapterError;

/// Provisions browser processes.
#[async_trait]
pub trait BrowserPort: Send + Sync {
    async fn launch(&self, config: &AdapterConfig) -> Result<Box<dyn BrowserHandle>, AdapterError>;
}

/// An exclusively-owned running browser.
#[async_trait]
pub trait BrowserHandle: Send + Sync {
    /// Open a fresh page/tab.
    async fn new_page(&self) -> Result<Arc<dyn PageHandle>, AdapterError>;

    /// Release the browser process. Must leave no child process behind even
    /// when the graceful path fails.
    async fn close(&mut self) -> Result<(), AdapterError>;
}

/// A single page within a running browser.
#[async_trait]
pub trait PageHandle: Send + Sync {
    async fn goto(&self, url: &str) -> Result<(), AdapterError>;

    /// Evaluate a script inside the page and return its JSON value.
    /// Undefined results come back as `Value::Null`.
    async fn evaluate(&self, expression: &str) -> Result<Value, AdapterError>;
}
