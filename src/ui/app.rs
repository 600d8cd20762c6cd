use eframe::{Frame, egui};
use std::sync::Arc;
use std::time::Duration;

use crate::services::{ChainIdentity, LaunchSubmitter};
use crate::ui::ui_panels::{AssetInputs, WizardEvent};
use crate::ui::utils::setup_custom_visuals;
use crate::wizard::LaunchWizard;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Desktop shell around a [`LaunchWizard`].
///
/// Holds only what the wizard does not: the token address typed on the review
/// step, the raw media inputs, and the last navigation error. Nothing here is
/// persisted; closing the window discards the draft.
pub struct LaunchWizardApp {
    pub(super) wizard: LaunchWizard,
    pub(super) token_address: String,
    pub(super) asset_inputs: AssetInputs,
    pub(super) last_error: Option<String>,
}

impl LaunchWizardApp {
    pub fn new(submitter: Arc<dyn LaunchSubmitter>, chain: &dyn ChainIdentity) -> Self {
        Self::from_wizard(LaunchWizard::new(submitter, chain))
    }

    pub fn from_wizard(wizard: LaunchWizard) -> Self {
        Self {
            wizard,
            token_address: String::new(),
            asset_inputs: AssetInputs::default(),
            last_error: None,
        }
    }

    pub fn wizard(&self) -> &LaunchWizard {
        &self.wizard
    }

    pub(super) fn apply_events(&mut self, events: Vec<WizardEvent>) {
        for event in events {
            self.apply_event(event);
        }
    }

    pub fn apply_event(&mut self, event: WizardEvent) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("UI event: {:?}", event);
        }

        match event {
            WizardEvent::Field(field, value) => self.wizard.update_field(field, value),
            WizardEvent::DeploymentMode(mode) => self.wizard.set_deployment_mode(mode),
            WizardEvent::TaxMode(tax_mode) => self.wizard.set_tax_mode(tax_mode),
            WizardEvent::Profile(profile) => self.wizard.set_profile(profile),
            WizardEvent::StartMode(mode) => self.wizard.set_start_mode(mode),
            WizardEvent::LpMode(mode) => self.wizard.set_lp_mode(mode),
            WizardEvent::FinalType(profile, final_type) => {
                self.wizard.set_final_type(profile, final_type)
            }
            WizardEvent::TradingMode(mode) => self.wizard.set_trading_mode(mode),
            WizardEvent::Flag(flag, value) => self.wizard.set_flag(flag, value),
            WizardEvent::Asset(kind, source) => self.wizard.set_asset(kind, source),
            WizardEvent::AssetInput(kind, input) => *self.asset_inputs.get_mut(kind) = input,
            WizardEvent::TokenAddress(address) => self.token_address = address,
            WizardEvent::Acknowledge(value) => self.wizard.set_acknowledged(value),
            WizardEvent::JumpTo(index) => {
                let result = self.wizard.jump_to_visited(index);
                self.record(result);
            }
            WizardEvent::Back => {
                self.wizard.back();
                self.last_error = None;
            }
            WizardEvent::Next => {
                let result = self.wizard.next().map(|_| ());
                self.record(result);
            }
            WizardEvent::Confirm => {
                let address = self.token_address.trim();
                let address = (!address.is_empty()).then(|| address.to_string());
                let result = self.wizard.confirm(address);
                self.record(result);
            }
            WizardEvent::StartOver => {
                self.wizard.reset();
                self.token_address.clear();
                self.asset_inputs = AssetInputs::default();
                self.last_error = None;
            }
        }
    }

    fn record(&mut self, result: Result<(), crate::wizard::WizardError>) {
        self.last_error = match result {
            Ok(()) => None,
            // Per-step problems are already shown next to the inputs
            Err(crate::wizard::WizardError::StepInvalid(_)) => None,
            Err(e) => {
                log::warn!("Wizard refused action: {}", e);
                Some(e.to_string())
            }
        };
    }
}

impl eframe::App for LaunchWizardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_submission && self.wizard.is_submitting() {
            log::info!("Closing with a submission still in flight; its outcome is dropped.");
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        if self.wizard.poll_submission() {
            self.last_error = None;
        }
        if self.wizard.is_submitting() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        self.render_side_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssetKind, DeploymentMode, FieldId, WizardStep};
    use crate::services::{DryRunSubmitter, StaticChain};
    use crate::ui::ui_panels::{AssetInput, AssetInputMode};

    fn app() -> LaunchWizardApp {
        LaunchWizardApp::new(Arc::new(DryRunSubmitter::default()), &StaticChain(1))
    }

    #[test]
    fn next_without_a_choice_stays_put() {
        let mut app = app();
        app.apply_event(WizardEvent::Next);
        assert_eq!(app.wizard().current_step(), WizardStep::Deployment);
        assert!(app.wizard().errors().step_error().is_some());
        assert!(app.last_error.is_none(), "validation errors are not navigation errors");
    }

    #[test]
    fn events_drive_the_wizard() {
        let mut app = app();
        app.apply_event(WizardEvent::DeploymentMode(DeploymentMode::V2Launch));
        app.apply_event(WizardEvent::Next);
        assert_eq!(app.wizard().current_step(), WizardStep::Basics);

        app.apply_event(WizardEvent::Field(FieldId::Name, "Moon Cat".into()));
        assert_eq!(app.wizard().draft().basics.name, "Moon Cat");

        app.apply_event(WizardEvent::Back);
        assert_eq!(app.wizard().current_step(), WizardStep::Deployment);
    }

    #[test]
    fn refused_jump_is_reported() {
        let mut app = app();
        app.apply_event(WizardEvent::JumpTo(3));
        assert!(app.last_error.is_some());
        assert_eq!(app.wizard().step_index(), 0);
    }

    #[test]
    fn confirm_off_review_is_reported() {
        let mut app = app();
        app.apply_event(WizardEvent::Confirm);
        assert!(app.last_error.is_some());
    }

    #[test]
    fn start_over_clears_local_inputs() {
        let mut app = app();
        let input = AssetInput {
            mode: AssetInputMode::File,
            text: "/tmp/logo.png".to_string(),
        };
        app.apply_event(WizardEvent::Asset(AssetKind::Logo, input.source()));
        app.apply_event(WizardEvent::AssetInput(AssetKind::Logo, input));
        app.apply_event(WizardEvent::TokenAddress("0xabc".into()));
        assert!(app.wizard().draft().meta.logo.local_file().is_some());

        app.apply_event(WizardEvent::StartOver);
        assert!(app.token_address.is_empty());
        assert_eq!(app.asset_inputs.logo, AssetInput::default());
        assert!(app.wizard().draft().meta.logo.local_file().is_none());
    }
}
