// Street data loader - Runs the single street collection request
use crate::application::street_source::StreetSource;
use crate::domain::fetch_state::FetchState;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Owns the `FetchState` and is its only writer.
///
/// The sender is moved into the fetch task on activation, so one loader
/// issues at most one request and performs at most one transition.
pub struct StreetDataLoader {
    source: Arc<dyn StreetSource>,
    sender: Option<watch::Sender<FetchState>>,
    state: watch::Receiver<FetchState>,
    task: Option<JoinHandle<()>>,
}

impl StreetDataLoader {
    pub fn new(source: Arc<dyn StreetSource>) -> Self {
        let (sender, state) = watch::channel(FetchState::Pending);
        Self {
            source,
            sender: Some(sender),
            state,
            task: None,
        }
    }

    /// Start the request. Returns immediately; must be called inside a tokio runtime.
    pub fn activate(&mut self) {
        let Some(sender) = self.sender.take() else {
            tracing::debug!("Street loader already activated, ignoring");
            return;
        };

        let source = self.source.clone();
        self.task = Some(tokio::spawn(async move {
            let next = match source.fetch_streets().await {
                Ok(records) => {
                    tracing::info!("Loaded {} streets", records.len());
                    FetchState::Ready(records)
                }
                Err(e) => {
                    tracing::warn!("Street collection request failed: {}", e);
                    FetchState::Failed(e.to_string())
                }
            };
            sender.send_replace(next);
        }));
    }

    /// Abort an in-flight request. The state stays `Pending` and subscribers see the channel close.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            if !task.is_finished() {
                tracing::debug!("Cancelling in-flight street request");
            }
            task.abort();
        }
        // an unactivated loader can never transition either
        self.sender = None;
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.clone()
    }
}

impl Drop for StreetDataLoader {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
