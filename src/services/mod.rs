// Collaborators the wizard talks to
pub mod chain;
pub mod submitter;

pub use chain::{ChainIdentity, StaticChain};
pub use submitter::{DryRunSubmitter, LaunchSubmitter};
