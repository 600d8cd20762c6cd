// Wizard state machine and its async submission
pub mod state;
pub mod submission;

use thiserror::Error;

use crate::domain::WizardStep;
use crate::transform::TransformError;

pub use state::{DraftFlag, LaunchWizard};
pub use submission::SubmissionState;

/// Misuse of the state machine. Input problems never land here; they are
/// reported through the wizard's `ValidationErrors`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("step {index} does not exist (this launch has {len} steps)")]
    StepOutOfRange { index: usize, len: usize },
    #[error("step {index} has not been reached yet (furthest is {furthest})")]
    NotVisited { index: usize, furthest: usize },
    #[error("step {target} cannot be reached from step {current}")]
    Unreachable { current: usize, target: usize },
    #[error("the result screen is only reached by confirming")]
    ResultRequiresSubmission,
    #[error("confirm is only available on the review step")]
    NotOnReview,
    #[error("the launch terms have not been acknowledged")]
    NotAcknowledged,
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("the {0} step has errors")]
    StepInvalid(WizardStep),
    #[error("could not build the launch request: {0}")]
    Transform(#[from] TransformError),
}
