//! capturekit — HTTP-controlled interaction capture with locator synthesis.
//!
//! The binary exposes a small HTTP surface over a single capture session:
//! `start-capture` provisions a browser and navigates it to a target URL,
//! `stop-capture` tears the browser down and returns everything recorded,
//! and `fetch-actions` reads the buffer without touching the session.
//! The actual capture semantics live in the workspace crates; this crate
//! is configuration, wiring, and the axum router.

pub mod config;
pub mod server;
