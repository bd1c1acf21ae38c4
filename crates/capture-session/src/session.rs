//! The single-session capture state machine.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use browser_adapter::{AdapterConfig, BrowserHandle, BrowserPort, PageHandle};
use capturekit_core_types::{ActionRecord, CaptureId};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{info, warn};
use url::Url;

use crate::buffer::{ActionBuffer, ActionSink};
use crate::errors::CaptureError;
use crate::observer::InteractionObserver;

/// Navigation target used when `start()` receives none.
pub const DEFAULT_TARGET_URL: &str = "https://example.com";

/// Session lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Active,
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Active => "active",
        }
    }
}

/// Owner of the capture lifecycle and the browser resource.
///
/// The interior is behind one async mutex, so lifecycle transitions are
/// serialized: two overlapping `start()` calls can never provision two
/// browsers under the same session. The browser handle is present iff
/// the state is Active.
pub struct CaptureSession {
    port: Arc<dyn BrowserPort>,
    observer: Arc<dyn InteractionObserver>,
    config: AdapterConfig,
    buffer: Arc<ActionBuffer>,
    inner: Mutex<SessionInner>,
    active: AtomicBool,
}

struct SessionInner {
    state: SessionState,
    browser: Option<Box<dyn BrowserHandle>>,
    page: Option<Arc<dyn PageHandle>>,
    capture_id: Option<CaptureId>,
}

impl CaptureSession {
    pub fn new(
        port: Arc<dyn BrowserPort>,
        observer: Arc<dyn InteractionObserver>,
        config: AdapterConfig,
    ) -> Self {
        Self {
            port,
            observer,
            config,
            buffer: Arc::new(ActionBuffer::new()),
            inner: Mutex::new(SessionInner {
                state: SessionState::Idle,
                browser: None,
                page: None,
                capture_id: None,
            }),
            active: AtomicBool::new(false),
        }
    }

    /// Cheap state read for health reporting; lifecycle methods rely on
    /// the interior lock, not this flag.
    pub fn state(&self) -> SessionState {
        if self.active.load(Ordering::SeqCst) {
            SessionState::Active
        } else {
            SessionState::Idle
        }
    }

    /// Start capturing against `url` (default when absent or empty).
    ///
    /// Restarting while Active releases the previous browser before any
    /// new provisioning, so at most one browser resource ever exists.
    /// Any failure on the way up tears down whatever was acquired and
    /// leaves the session Idle. Returns the navigated target URL.
    pub async fn start(&self, url: Option<&str>) -> Result<String, CaptureError> {
        let mut inner = self.inner.lock().await;

        if inner.state == SessionState::Active {
            info!(
                target: "capture-session",
                "start while active; releasing previous session first"
            );
            self.release_locked(&mut inner).await;
        }

        let target = match url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(raw) => {
                Url::parse(raw).map_err(|err| {
                    CaptureError::start_failed(format!("invalid target url: {err}"))
                })?;
                raw.to_string()
            }
            None => DEFAULT_TARGET_URL.to_string(),
        };

        let mut browser = self
            .port
            .launch(&self.config)
            .await
            .map_err(|err| CaptureError::start_failed(err.to_string()))?;

        let page = match browser.new_page().await {
            Ok(page) => page,
            Err(err) => {
                Self::release_browser(&mut browser).await;
                return Err(CaptureError::start_failed(err.to_string()));
            }
        };

        if let Err(err) = page.goto(&target).await {
            Self::release_browser(&mut browser).await;
            return Err(CaptureError::start_failed(err.to_string()));
        }

        self.buffer.rearm();
        let sink = ActionSink::new(Arc::clone(&self.buffer));
        if let Err(err) = self.observer.arm(Arc::clone(&page), sink).await {
            self.buffer.disarm();
            Self::release_browser(&mut browser).await;
            return Err(CaptureError::start_failed(err.to_string()));
        }

        let capture_id = CaptureId::new();
        info!(
            target: "capture-session",
            capture = %capture_id,
            url = %target,
            "capture session active"
        );

        inner.state = SessionState::Active;
        inner.browser = Some(browser);
        inner.page = Some(page);
        inner.capture_id = Some(capture_id);
        self.active.store(true, Ordering::SeqCst);

        Ok(target)
    }

    /// Stop the active session: disarm the buffer, release the browser,
    /// and return everything captured since the last `start()`.
    ///
    /// A close failure is reported but never blocks the transition to
    /// Idle. The buffer stays readable through `fetch()` until the next
    /// `start()`.
    pub async fn stop(&self) -> Result<Vec<ActionRecord>, CaptureError> {
        let mut inner = self.inner.lock().await;

        if inner.state != SessionState::Active {
            return Err(CaptureError::NoActiveSession);
        }

        let capture_id = inner.capture_id.take();
        self.release_locked(&mut inner).await;

        let records = self.buffer.snapshot();
        info!(
            target: "capture-session",
            capture = capture_id.as_ref().map(|id| id.0.as_str()).unwrap_or("unknown"),
            actions = records.len(),
            "capture session stopped"
        );
        Ok(records)
    }

    /// Snapshot of the current buffer; `NoActionsYet` when empty.
    pub fn fetch(&self) -> Result<Vec<ActionRecord>, CaptureError> {
        let records = self.buffer.snapshot();
        if records.is_empty() {
            return Err(CaptureError::NoActionsYet);
        }
        Ok(records)
    }

    /// Disarm the buffer, drop the page, close the browser, go Idle.
    async fn release_locked(&self, inner: &mut SessionInner) {
        self.buffer.disarm();
        inner.page = None;
        inner.state = SessionState::Idle;
        self.active.store(false, Ordering::SeqCst);
        if let Some(mut browser) = inner.browser.take() {
            Self::release_browser(&mut browser).await;
        }
    }

    async fn release_browser(browser: &mut Box<dyn BrowserHandle>) {
        if let Err(err) = browser.close().await {
            warn!(
                target: "capture-session",
                %err,
                "browser release reported an error"
            );
        }
    }
}
