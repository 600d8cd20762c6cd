use std::sync::Arc;

use poll_promise::Promise;

use crate::config::ChainDefaults;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::{
    AssetKind, AssetSource, DeploymentMode, FieldId, FinalType, LaunchAssets, LaunchDraft,
    LpMode, Profile, StartMode, TaxMode, TradingMode, WizardStep, step_sequence,
};
use crate::fees::quote_fees;
use crate::services::{ChainIdentity, LaunchSubmitter};
use crate::transform::{TransformContext, transform};
use crate::utils::time_utils::now_timestamp;
use crate::validation::{ErrorKey, ValidationContext, ValidationErrors, validate_step_at};

use super::WizardError;
use super::submission::{SubmissionOutcome, SubmissionState, spawn_submission};

/// On/off switches on the draft that have no text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftFlag {
    RemoveHeader,
    Stealth,
    AutoBrand,
    V2Stealth,
    V2TaxDecay,
    V2LimitGrowth,
}

/// Owns the draft for the lifetime of one wizard session.
///
/// Edits never validate. Moving forward validates the step being left, and
/// the fee quote is refreshed at the one place choices that drive it change.
pub struct LaunchWizard {
    draft: LaunchDraft,
    step: usize,
    furthest_step: usize,
    errors: ValidationErrors,
    acknowledged: bool,
    submission: SubmissionState,
    submission_promise: Option<Promise<SubmissionOutcome>>,
    submitter: Arc<dyn LaunchSubmitter>,
    chain: ChainDefaults,
}

impl LaunchWizard {
    pub fn new(submitter: Arc<dyn LaunchSubmitter>, chain: &dyn ChainIdentity) -> Self {
        let chain = chain.defaults();
        let mut wizard = Self {
            draft: LaunchDraft::with_defaults(&chain),
            step: 0,
            furthest_step: 0,
            errors: ValidationErrors::default(),
            acknowledged: false,
            submission: SubmissionState::Idle,
            submission_promise: None,
            submitter,
            chain,
        };
        wizard.refresh_fees();
        wizard
    }

    /// Throw the draft away and start over with defaults.
    pub fn reset(&mut self) {
        if self.submission.is_pending() {
            log::warn!("Ignoring reset while a submission is in flight");
            return;
        }
        self.draft = LaunchDraft::with_defaults(&self.chain);
        self.step = 0;
        self.furthest_step = 0;
        self.errors.clear();
        self.acknowledged = false;
        self.submission = SubmissionState::Idle;
        self.refresh_fees();
    }

    pub fn draft(&self) -> &LaunchDraft {
        &self.draft
    }

    pub fn chain(&self) -> &ChainDefaults {
        &self.chain
    }

    pub fn steps(&self) -> &'static [WizardStep] {
        step_sequence(self.draft.deployment_mode)
    }

    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn current_step(&self) -> WizardStep {
        self.steps()
            .get(self.step)
            .copied()
            .unwrap_or(WizardStep::Deployment)
    }

    pub fn furthest_step(&self) -> usize {
        self.furthest_step
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn acknowledged(&self) -> bool {
        self.acknowledged
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_pending()
    }

    /// Explorer link for a finished submission.
    pub fn submission_link(&self) -> Option<String> {
        match &self.submission {
            SubmissionState::Succeeded { tx_id } => Some(self.chain.explorer_link(tx_id)),
            _ => None,
        }
    }

    // ----- Draft edits (never validate) -----

    pub fn update_field(&mut self, field: FieldId, value: impl Into<String>) {
        *self.draft.text_mut(field) = value.into();
    }

    pub fn set_start_mode(&mut self, mode: StartMode) {
        self.draft.basics.start_mode = mode;
    }

    pub fn set_lp_mode(&mut self, mode: LpMode) {
        self.draft.basics.lp_mode = mode;
    }

    pub fn set_final_type(&mut self, profile: Profile, final_type: FinalType) {
        self.draft.curves.final_settings_mut(profile).final_type = final_type;
    }

    pub fn set_trading_mode(&mut self, mode: TradingMode) {
        self.draft.v2.trading_mode = mode;
    }

    pub fn set_flag(&mut self, flag: DraftFlag, value: bool) {
        let slot = match flag {
            DraftFlag::RemoveHeader => &mut self.draft.basics.remove_header,
            DraftFlag::Stealth => &mut self.draft.basics.stealth,
            DraftFlag::AutoBrand => &mut self.draft.meta.auto_brand,
            DraftFlag::V2Stealth => &mut self.draft.v2.stealth.enabled,
            DraftFlag::V2TaxDecay => &mut self.draft.v2.tax_decay.enabled,
            DraftFlag::V2LimitGrowth => &mut self.draft.v2.limit_growth.enabled,
        };
        *slot = value;
    }

    pub fn flag(&self, flag: DraftFlag) -> bool {
        match flag {
            DraftFlag::RemoveHeader => self.draft.basics.remove_header,
            DraftFlag::Stealth => self.draft.basics.stealth,
            DraftFlag::AutoBrand => self.draft.meta.auto_brand,
            DraftFlag::V2Stealth => self.draft.v2.stealth.enabled,
            DraftFlag::V2TaxDecay => self.draft.v2.tax_decay.enabled,
            DraftFlag::V2LimitGrowth => self.draft.v2.limit_growth.enabled,
        }
    }

    /// Picking a file replaces the URL and vice versa.
    pub fn set_asset(&mut self, kind: AssetKind, source: AssetSource) {
        *self.draft.meta.asset_mut(kind) = source;
    }

    // ----- Choices that reshape the flow -----

    pub fn set_deployment_mode(&mut self, mode: DeploymentMode) {
        if self.draft.deployment_mode == Some(mode) {
            return;
        }
        self.draft.deployment_mode = Some(mode);
        self.step = self.step.min(self.steps().len() - 1);
        self.forget_later_steps();
        self.refresh_fees();
    }

    /// Clears the profile when it is not offered under the new tax mode.
    pub fn set_tax_mode(&mut self, tax_mode: TaxMode) {
        self.draft.tax_mode = Some(tax_mode);
        if let Some(profile) = self.draft.profile {
            if !profile.is_allowed_under(tax_mode) {
                self.draft.profile = None;

                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_step_transitions {
                    log::info!("Profile {} cleared, not offered with {}", profile, tax_mode);
                }
            }
        }
        self.forget_later_steps();
        self.refresh_fees();
    }

    pub fn set_profile(&mut self, profile: Profile) {
        self.draft.profile = Some(profile);
        self.forget_later_steps();
        self.refresh_fees();
    }

    /// The only writer of `draft.fees`.
    pub fn refresh_fees(&mut self) {
        self.draft.fees = quote_fees(
            self.draft.deployment_mode,
            self.draft.profile,
            self.draft.tax_mode,
        );

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_fee_refresh {
            log::info!("💰 Fees refreshed: {:?}", self.draft.fees);
        }
    }

    // Later answers depend on the one just changed, so they must be revisited.
    fn forget_later_steps(&mut self) {
        self.furthest_step = self.step;
    }

    // ----- Navigation -----

    /// Unconditional jump; clears the error map.
    pub fn go_to_step(&mut self, index: usize) -> Result<(), WizardError> {
        let len = self.steps().len();
        if index >= len {
            return Err(WizardError::StepOutOfRange { index, len });
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_step_transitions {
            log::info!(
                "➡️ Step {} -> {} ({})",
                self.step,
                index,
                self.steps()[index]
            );
        }

        self.step = index;
        self.furthest_step = self.furthest_step.max(index);
        self.errors.clear();
        Ok(())
    }

    /// Step-bar navigation: only steps already reached.
    pub fn jump_to_visited(&mut self, index: usize) -> Result<(), WizardError> {
        if index > self.furthest_step {
            return Err(WizardError::NotVisited {
                index,
                furthest: self.furthest_step,
            });
        }
        if self.steps().get(index) == Some(&WizardStep::Result) {
            return Err(WizardError::ResultRequiresSubmission);
        }
        self.go_to_step(index)
    }

    /// Validates the current step and moves to `target` when it passes.
    /// `Ok(false)` means the step has errors, now held in `errors()`.
    pub fn request_advance(&mut self, target: usize) -> Result<bool, WizardError> {
        self.request_advance_at(target, &ValidationContext::now())
    }

    pub fn request_advance_at(
        &mut self,
        target: usize,
        ctx: &ValidationContext,
    ) -> Result<bool, WizardError> {
        let steps = self.steps();
        match steps.get(target) {
            None => {
                return Err(WizardError::StepOutOfRange {
                    index: target,
                    len: steps.len(),
                });
            }
            Some(WizardStep::Result) => return Err(WizardError::ResultRequiresSubmission),
            Some(_) => {}
        }

        let reachable = (self.step + 1).max(self.furthest_step);
        if target > reachable {
            return Err(WizardError::Unreachable {
                current: self.step,
                target,
            });
        }

        let report = validate_step_at(self.current_step(), &self.draft, ctx);
        if !report.ok {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_validation_failures {
                log::info!("❌ {} blocked: {:?}", self.current_step(), report.errors);
            }
            self.errors = report.errors;
            return Ok(false);
        }

        self.go_to_step(target)?;
        Ok(true)
    }

    pub fn next(&mut self) -> Result<bool, WizardError> {
        self.next_at(&ValidationContext::now())
    }

    pub fn next_at(&mut self, ctx: &ValidationContext) -> Result<bool, WizardError> {
        // Without a deployment mode the sequence is a single step, so the
        // missing choice is reported ahead of the range check.
        if self.step + 1 >= self.steps().len() {
            let report = validate_step_at(self.current_step(), &self.draft, ctx);
            if !report.ok {
                self.errors = report.errors;
                return Ok(false);
            }
        }
        self.request_advance_at(self.step + 1, ctx)
    }

    /// Back-navigation never validates. No-op on the first and the result step.
    pub fn back(&mut self) -> bool {
        if self.step == 0 || self.current_step() == WizardStep::Result {
            return false;
        }
        self.go_to_step(self.step - 1).is_ok()
    }

    // ----- Submission -----

    pub fn set_acknowledged(&mut self, acknowledged: bool) {
        self.acknowledged = acknowledged;
    }

    pub fn can_confirm(&self) -> bool {
        self.current_step() == WizardStep::Review && self.acknowledged && !self.is_submitting()
    }

    /// Re-checks every step, builds the request and hands it to the submitter
    /// on a worker thread. Call `poll_submission` to pick up the outcome.
    pub fn confirm(&mut self, token_address: Option<String>) -> Result<(), WizardError> {
        self.confirm_at(token_address, &ValidationContext::now())
    }

    pub fn confirm_at(
        &mut self,
        token_address: Option<String>,
        ctx: &ValidationContext,
    ) -> Result<(), WizardError> {
        if self.current_step() != WizardStep::Review {
            return Err(WizardError::NotOnReview);
        }
        if !self.acknowledged {
            return Err(WizardError::NotAcknowledged);
        }
        if self.is_submitting() {
            return Err(WizardError::AlreadySubmitting);
        }

        for &step in self.steps() {
            let report = validate_step_at(step, &self.draft, ctx);
            if !report.ok {
                let first_problem = report.errors.iter().next().map(|(key, message)| match key {
                    ErrorKey::Step => message.clone(),
                    ErrorKey::Field(field) => format!("{}: {message}", field.label()),
                    ErrorKey::Asset(kind) => format!("{kind}: {message}"),
                });
                self.errors.clear();
                self.errors.step(match first_problem {
                    Some(problem) => {
                        format!("The {step} step needs attention before launching ({problem})")
                    }
                    None => format!("The {step} step needs attention before launching"),
                });
                return Err(WizardError::StepInvalid(step));
            }
        }

        let transform_ctx = TransformContext {
            token_address,
            timestamp: now_timestamp(),
        };
        let payload = transform(&self.draft, &transform_ctx)?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_payload {
            match serde_json::to_string_pretty(&payload) {
                Ok(json) => log::info!("📦 Launch payload:\n{}", json),
                Err(e) => log::warn!("Could not render payload: {}", e),
            }
        }

        let assets = self.local_assets();
        self.errors.clear();
        self.submission = SubmissionState::Pending;
        self.submission_promise = Some(spawn_submission(
            Arc::clone(&self.submitter),
            payload,
            assets,
        ));

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_submission {
            log::info!("🚀 Submission spawned via {}", self.submitter.signature());
        }
        Ok(())
    }

    /// Folds a finished submission into the state. Returns true when it did.
    pub fn poll_submission(&mut self) -> bool {
        let outcome = self
            .submission_promise
            .as_ref()
            .and_then(|promise| promise.ready().cloned());

        let Some(outcome) = outcome else {
            return false;
        };
        self.submission_promise = None;

        let elapsed = outcome.elapsed_time();
        match outcome.result {
            Ok(tx_id) => {
                log::info!("✅ Launch submitted in {:?}: {}", elapsed, tx_id);
                self.submission = SubmissionState::Succeeded { tx_id };
                self.acknowledged = false;
                let result_index = self
                    .steps()
                    .iter()
                    .position(|step| *step == WizardStep::Result);
                if let Some(index) = result_index {
                    if let Err(e) = self.go_to_step(index) {
                        log::error!("Could not show the result step: {}", e);
                    }
                }
            }
            Err(message) => {
                log::warn!("Launch submission failed: {}", message);
                self.submission = SubmissionState::Failed { message };
            }
        }
        true
    }

    fn local_assets(&self) -> LaunchAssets {
        let local = |kind: AssetKind| self.draft.meta.asset(kind).local_file().cloned();
        LaunchAssets {
            logo: local(AssetKind::Logo),
            banner: local(AssetKind::Banner),
            audio: local(AssetKind::Audio),
        }
    }
}
