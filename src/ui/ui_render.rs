use eframe::egui::{CentralPanel, Context, Frame, Margin, ScrollArea, SidePanel, TopBottomPanel, Ui};

use crate::domain::WizardStep;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{
    BasicsPanel, CurvePanel, DeploymentPanel, FeeSummaryPanel, MetadataPanel, NavigationPanel,
    Panel, ResultPanel, ReviewPanel, StepBarPanel, TaxProfilePanel, V2LimitsPanel,
    V2LiquidityPanel, WizardEvent,
};
use crate::wizard::SubmissionState;

use super::app::LaunchWizardApp;

impl LaunchWizardApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new().fill(UI_CONFIG.colors.side_panel);
        SidePanel::left("left_panel")
            .min_width(UI_CONFIG.side_panel_min_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let mut events = StepBarPanel::new(&self.wizard).render(ui);
                events.extend(FeeSummaryPanel::new(&self.wizard).render(ui));

                let chain = self.wizard.chain();
                ui.metric(UI_TEXT.network_label, chain.name, UI_CONFIG.colors.label);

                self.apply_events(events);
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .id_salt("wizard_step")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let mut events = self.step_panel_events(ui);
                        events.extend(NavigationPanel::new(&self.wizard).render(ui));
                        if let Some(error) = &self.last_error {
                            ui.label_error(error.as_str());
                        }
                        self.apply_events(events);
                    });
            });
    }

    fn step_panel_events(&self, ui: &mut Ui) -> Vec<WizardEvent> {
        let wizard = &self.wizard;
        match wizard.current_step() {
            WizardStep::Deployment => DeploymentPanel::new(wizard).render(ui),
            WizardStep::TaxProfile => TaxProfilePanel::new(wizard).render(ui),
            WizardStep::Basics => BasicsPanel::new(wizard).render(ui),
            WizardStep::Curve => CurvePanel::new(wizard).render(ui),
            WizardStep::V2Liquidity => V2LiquidityPanel::new(wizard).render(ui),
            WizardStep::V2Limits => V2LimitsPanel::new(wizard).render(ui),
            WizardStep::Metadata => MetadataPanel::new(wizard, &self.asset_inputs).render(ui),
            WizardStep::Review => ReviewPanel::new(wizard, &self.token_address).render(ui),
            WizardStep::Result => ResultPanel::new(wizard).render(ui),
        }
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let wizard = &self.wizard;
                    ui.metric(
                        "🧭 Step",
                        &format!(
                            "{}/{} {}",
                            wizard.step_index() + 1,
                            wizard.steps().len(),
                            wizard.current_step()
                        ),
                        UI_CONFIG.colors.label,
                    );
                    ui.separator();

                    if let Some(mode) = wizard.draft().deployment_mode {
                        ui.metric("🚀", &mode.to_string(), UI_CONFIG.colors.label);
                        ui.separator();
                    }
                    if let Some(profile) = wizard.draft().profile {
                        ui.metric("📈 Profile", &profile.to_string(), UI_CONFIG.colors.label);
                        ui.separator();
                    }

                    match wizard.submission() {
                        SubmissionState::Idle => {}
                        SubmissionState::Pending => {
                            ui.spinner();
                            ui.label_subdued(UI_TEXT.submitting_label);
                        }
                        SubmissionState::Succeeded { tx_id } => {
                            ui.metric("✅", tx_id, UI_CONFIG.colors.success);
                        }
                        SubmissionState::Failed { .. } => {
                            ui.label_error(UI_TEXT.submission_failed_label);
                        }
                    }
                });
            });
    }
}
