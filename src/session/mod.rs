mod dashboard_session;
mod errors;
mod state;

pub use dashboard_session::DashboardSession;
pub use errors::SessionError;
pub use state::{SessionEvent, SessionState};
