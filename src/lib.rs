#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod domain;
pub mod fees;
pub mod services;
pub mod transform;
pub mod ui;
pub mod utils;
pub mod validation;
pub mod wizard;

use std::sync::Arc;
use std::time::Duration;

// Re-export commonly used types
pub use domain::{LaunchDraft, WizardStep};
pub use services::{ChainIdentity, DryRunSubmitter, LaunchSubmitter, StaticChain};
pub use transform::{SubmissionPayload, transform};
pub use ui::LaunchWizardApp;
pub use wizard::{LaunchWizard, WizardError};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Chain the launch targets; selects native coin, explorer and draft defaults
    #[arg(long, default_value_t = 1)]
    pub chain_id: u64,

    /// Simulated latency of the dry-run submitter, in milliseconds
    #[arg(long, default_value_t = 1500)]
    pub submit_delay_ms: u64,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(_cc: &eframe::CreationContext, args: &Cli) -> Box<dyn eframe::App> {
    let submitter = DryRunSubmitter::with_delay(Duration::from_millis(args.submit_delay_ms));
    let chain = StaticChain(args.chain_id);

    let app = LaunchWizardApp::new(Arc::new(submitter), &chain);
    Box::new(app)
}
