use std::sync::Arc;
use std::time::{Duration, Instant};

use poll_promise::Promise;

use crate::domain::LaunchAssets;
use crate::services::LaunchSubmitter;
use crate::transform::SubmissionPayload;

/// What the review / result screens show about the launch request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded { tx_id: String },
    /// Collaborator error, verbatim. Confirm may be retried.
    Failed { message: String },
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Pending)
    }
}

#[derive(Debug, Clone)]
pub(super) struct SubmissionOutcome {
    pub(super) result: Result<String, String>,
    elapsed_time: Duration,
}

impl SubmissionOutcome {
    pub(super) fn elapsed_time(&self) -> Duration {
        self.elapsed_time
    }
}

/// Runs the collaborator on its own thread with a single-threaded runtime,
/// so the caller only ever polls.
pub(super) fn spawn_submission(
    submitter: Arc<dyn LaunchSubmitter>,
    payload: SubmissionPayload,
    assets: LaunchAssets,
) -> Promise<SubmissionOutcome> {
    Promise::spawn_thread("launch_submission", move || {
        let start_time = Instant::now();
        let result = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime
                .block_on(submitter.submit(payload, assets))
                .map_err(|e| format!("{e:#}")),
            Err(e) => Err(format!("Failed to start the submission runtime: {e}")),
        };
        SubmissionOutcome {
            result,
            elapsed_time: start_time.elapsed(),
        }
    })
}
