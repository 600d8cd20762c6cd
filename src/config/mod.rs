//! Configuration module for the launch wizard.

pub mod chains;
pub mod fees;
pub mod launch;

mod debug; // Private: callers go through crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use chains::{CHAINS, ChainDefaults, chain_defaults};
pub use fees::{FEES, FeeConfig};
pub use launch::{LAUNCH, LaunchConfig, SECONDS_PER_DAY, TOKEN_DECIMALS};
