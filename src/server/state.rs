use std::sync::Arc;

use capture_session::CaptureSession;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<CaptureSession>,
}

impl AppState {
    pub fn new(session: Arc<CaptureSession>) -> Self {
        Self { session }
    }
}
