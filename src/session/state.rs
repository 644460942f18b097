use std::sync::Arc;

use tracing::debug;

use crate::aggregate::DashboardViews;
use crate::models::Dataset;
use crate::types::IngestError;

/// Something that happened to the session's upload lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    UploadStarted {
        file_name: Option<String>
    },
    UploadSucceeded(Dataset),
    UploadFailed(IngestError)
}

/// Immutable snapshot of everything the dashboard shows.
///
/// Snapshots are never edited. [`SessionState::reduce`] builds the next one from
/// the current one and an event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub dataset: Arc<Dataset>,
    pub error: Option<IngestError>,
    pub file_name: Option<String>,
    pub loading: bool
}

impl SessionState {
    /// Applies `event` and returns the resulting state.
    ///
    /// Starting an upload clears the previous dataset and error before anything
    /// is validated. A start while already loading, or a completion while idle,
    /// leaves the state untouched so each attempt resolves exactly once.
    pub fn reduce(&self, event: SessionEvent) -> SessionState {
        match (self.loading, event) {
            (false, SessionEvent::UploadStarted { file_name }) => SessionState {
                dataset: Arc::new(Dataset::empty()),
                error: None,
                file_name,
                loading: true
            },
            (true, SessionEvent::UploadSucceeded(dataset)) => SessionState {
                dataset: Arc::new(dataset),
                error: None,
                file_name: self.file_name.clone(),
                loading: false
            },
            (true, SessionEvent::UploadFailed(error)) => SessionState {
                dataset: Arc::new(Dataset::empty()),
                error: Some(error),
                file_name: self.file_name.clone(),
                loading: false
            },
            (loading, event) => {
                debug!("Ignoring {event:?} while loading={loading}");
                self.clone()
            }
        }
    }

    pub fn can_upload(&self) -> bool {
        !self.loading
    }

    /// Derives every dashboard view from the current dataset.
    pub fn views(&self) -> DashboardViews {
        DashboardViews::derive(&self.dataset)
    }
}
