use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::ingest::{Ingestor, SelectedFile};
use crate::session::{SessionError, SessionEvent, SessionState};
use crate::types::IngestError;

/// Owns the current [`SessionState`] and publishes every transition.
///
/// Readers hold a `watch::Receiver` and only ever see whole snapshots, so a
/// dataset becomes visible all at once after parsing has finished.
pub struct DashboardSession {
    ingestor: Ingestor,
    state: watch::Sender<Arc<SessionState>>
}

impl DashboardSession {
    pub fn new(ingestor: Ingestor) -> Self {
        let (state, _) = watch::channel(Arc::new(SessionState::default()));

        Self { ingestor, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<SessionState>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> Arc<SessionState> {
        self.state.borrow().clone()
    }

    /// Applies a single event and publishes the resulting snapshot.
    pub fn dispatch(&self, event: SessionEvent) -> Arc<SessionState> {
        self.state.send_modify(|state| {
            *state = Arc::new(state.reduce(event));
        });

        self.snapshot()
    }

    /// Replaces the session's dataset with the contents of `file`.
    ///
    /// Ingest failures are recorded in the returned snapshot rather than
    /// returned as errors. The only error is a second upload started while
    /// one is still in flight. Dropping the returned future before it
    /// completes records the attempt as [`IngestError::Cancelled`].
    pub async fn upload(&self, file: Option<&SelectedFile>) -> Result<Arc<SessionState>, SessionError> {
        let file_name = file.map(|file| file.name().to_string());

        let started = self.state.send_if_modified(|state| {
            if !state.can_upload() {
                return false;
            }

            *state = Arc::new(state.reduce(SessionEvent::UploadStarted { file_name }));
            true
        });

        if !started {
            warn!("Rejected upload while another upload is in progress");
            return Err(SessionError::UploadInProgress)
        }

        let attempt = UploadAttempt { session: self, finished: false };

        let event = match self.ingestor.ingest(file).await {
            Ok(dataset) => {
                info!("Upload accepted with {} transactions", dataset.len());
                SessionEvent::UploadSucceeded(dataset)
            },
            Err(error) => {
                warn!("Upload rejected: {error}");
                SessionEvent::UploadFailed(error)
            }
        };

        Ok(attempt.finish(event))
    }
}

/// Resolves an in-flight upload exactly once, even if its future is dropped.
struct UploadAttempt<'a> {
    session: &'a DashboardSession,
    finished: bool
}

impl UploadAttempt<'_> {
    fn finish(mut self, event: SessionEvent) -> Arc<SessionState> {
        self.finished = true;
        self.session.dispatch(event)
    }
}

impl Drop for UploadAttempt<'_> {
    fn drop(&mut self) {
        if !self.finished {
            warn!("Upload dropped before completion");
            self.session.dispatch(SessionEvent::UploadFailed(IngestError::Cancelled));
        }
    }
}
