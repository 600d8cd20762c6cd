use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::LaunchAssets;
use crate::transform::SubmissionPayload;

#[async_trait]
pub trait LaunchSubmitter: Send + Sync {
    /// Send the request (and any local media) off; returns a transaction id.
    async fn submit(&self, payload: SubmissionPayload, assets: LaunchAssets) -> Result<String>;

    /// A unique identifier for this implementation, shown in logs.
    fn signature(&self) -> &'static str;
}

/// Logs the request instead of sending it. Used when no signer is wired in.
#[derive(Debug, Clone, Default)]
pub struct DryRunSubmitter {
    /// Simulated network latency
    pub delay: Duration,
}

impl DryRunSubmitter {
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl LaunchSubmitter for DryRunSubmitter {
    async fn submit(&self, payload: SubmissionPayload, assets: LaunchAssets) -> Result<String> {
        let json = serde_json::to_string_pretty(&payload)
            .context("Failed to serialize launch payload")?;
        log::info!("🧪 Dry run launch request:\n{}", json);

        for file in [&assets.logo, &assets.banner, &assets.audio].into_iter().flatten() {
            log::info!("🧪 Would upload {} ({})", file.name, file.path.display());
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_submission {
            log::info!("{} finished for {}", self.signature(), payload.symbol);
        }

        Ok(format!(
            "dry-run-{}-{}",
            payload.symbol.to_lowercase(),
            payload.timestamp
        ))
    }

    fn signature(&self) -> &'static str {
        "Dry-run submitter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::chain_defaults;
    use crate::domain::{DeploymentMode, LaunchDraft, Profile, TaxMode};
    use crate::transform::{TransformContext, transform};

    #[test]
    fn dry_run_returns_symbol_and_timestamp() {
        let mut draft = LaunchDraft::with_defaults(&chain_defaults(1));
        draft.deployment_mode = Some(DeploymentMode::VirtualCurve);
        draft.tax_mode = Some(TaxMode::NoTax);
        draft.profile = Some(Profile::Zero);
        draft.basics.name = "Moon Cat".to_string();
        draft.basics.symbol = "MCAT".to_string();
        let ctx = TransformContext {
            token_address: None,
            timestamp: 42,
        };
        let payload = transform(&draft, &ctx).unwrap();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let tx_id = runtime
            .block_on(DryRunSubmitter::default().submit(payload, LaunchAssets::default()))
            .unwrap();
        assert_eq!(tx_id, "dry-run-mcat-42");
    }
}
