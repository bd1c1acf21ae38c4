//! HTTP surface over the capture session.

mod router;
mod state;

pub use router::build_router;
pub use state::AppState;
