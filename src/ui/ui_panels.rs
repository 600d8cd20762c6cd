use std::fmt::Display;

use eframe::egui::{Button, Grid, RichText, ScrollArea, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::config::ChainDefaults;
use crate::domain::{
    AssetKind, AssetSource, DeploymentMode, FieldId, FinalType, LaunchDraft, LocalFile, LpMode,
    Profile, StartMode, TaxMode, TradingMode, WizardStep,
};
use crate::fees::FeeQuote;
use crate::transform::{TransformContext, transform};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{format_native, section_heading, spaced_separator};
use crate::utils::time_utils::{TimeUtils, epoch_sec_to_utc, parse_launch_date_time};
use crate::utils::safe_parse_u64;
use crate::validation::{ErrorKey, ValidationErrors};
use crate::wizard::{DraftFlag, LaunchWizard, SubmissionState};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Everything a step panel can ask of the wizard. Applied by the app after rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    Field(FieldId, String),
    DeploymentMode(DeploymentMode),
    TaxMode(TaxMode),
    Profile(Profile),
    StartMode(StartMode),
    LpMode(LpMode),
    FinalType(Profile, FinalType),
    TradingMode(TradingMode),
    Flag(DraftFlag, bool),
    Asset(AssetKind, AssetSource),
    AssetInput(AssetKind, AssetInput),
    TokenAddress(String),
    Acknowledge(bool),
    JumpTo(usize),
    Back,
    Next,
    Confirm,
    StartOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetInputMode {
    #[default]
    Url,
    File,
}

/// What the user typed into a media slot, kept so switching between URL and
/// file does not lose the text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetInput {
    pub mode: AssetInputMode,
    pub text: String,
}

impl AssetInput {
    pub fn source(&self) -> AssetSource {
        match self.mode {
            AssetInputMode::Url => AssetSource::remote(self.text.as_str()),
            AssetInputMode::File if self.text.trim().is_empty() => AssetSource::Unset,
            AssetInputMode::File => AssetSource::Local(LocalFile::from_path(self.text.trim())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AssetInputs {
    pub logo: AssetInput,
    pub banner: AssetInput,
    pub audio: AssetInput,
}

impl AssetInputs {
    pub fn get(&self, kind: AssetKind) -> &AssetInput {
        match kind {
            AssetKind::Logo => &self.logo,
            AssetKind::Banner => &self.banner,
            AssetKind::Audio => &self.audio,
        }
    }

    pub fn get_mut(&mut self, kind: AssetKind) -> &mut AssetInput {
        match kind {
            AssetKind::Logo => &mut self.logo,
            AssetKind::Banner => &mut self.banner,
            AssetKind::Audio => &mut self.audio,
        }
    }
}

/// Shared input rendering for the step forms.
struct StepForm<'a> {
    draft: &'a LaunchDraft,
    errors: &'a ValidationErrors,
    events: Vec<WizardEvent>,
}

impl<'a> StepForm<'a> {
    fn new(wizard: &'a LaunchWizard) -> Self {
        Self {
            draft: wizard.draft(),
            errors: wizard.errors(),
            events: Vec::new(),
        }
    }

    fn text(&mut self, ui: &mut Ui, field: FieldId) {
        ui.label(field.label());
        let mut value = self.draft.text(field).to_string();
        let response =
            ui.add(TextEdit::singleline(&mut value).desired_width(UI_CONFIG.text_field_width));
        if response.changed() {
            self.events.push(WizardEvent::Field(field, value));
        }
        ui.field_error(self.errors.field_error(field));
    }

    /// Text input for a duration in seconds, with a readable echo.
    fn seconds(&mut self, ui: &mut Ui, field: FieldId) {
        self.text(ui, field);
        if let Some(secs) = safe_parse_u64(self.draft.text(field)) {
            ui.label_subdued(format!("= {}", TimeUtils::seconds_to_string(secs)));
        }
    }

    fn flag(&mut self, ui: &mut Ui, flag: DraftFlag, current: bool, label: impl Into<String>) {
        let mut value = current;
        if ui.checkbox(&mut value, label.into()).changed() {
            self.events.push(WizardEvent::Flag(flag, value));
        }
    }

    fn step_error(&self, ui: &mut Ui) {
        if let Some(message) = self.errors.step_error() {
            ui.add_space(5.0);
            ui.label_error(message);
        }
    }

    fn final_settings(&mut self, ui: &mut Ui, profile: Profile, field: FieldId) {
        spaced_separator(ui);
        ui.label_subheader(UI_TEXT.final_type_label);
        let current = self.draft.curves.final_settings(profile).final_type;
        if let Some(final_type) = choice(ui, current) {
            self.events.push(WizardEvent::FinalType(profile, final_type));
        }
        if current == FinalType::Tax {
            self.text(ui, field);
        }
    }
}

/// Radio row over every variant; returns the new choice when it changed.
fn choice<T>(ui: &mut Ui, current: T) -> Option<T>
where
    T: Copy + PartialEq + Display + IntoEnumIterator,
{
    let mut selected = current;
    ui.horizontal(|ui| {
        for variant in T::iter() {
            ui.radio_value(&mut selected, variant, variant.to_string());
        }
    });
    (selected != current).then_some(selected)
}

/// Clickable list of the active step sequence; only visited steps are enabled.
pub struct StepBarPanel {
    steps: &'static [WizardStep],
    current: usize,
    furthest: usize,
    locked: bool,
}

impl StepBarPanel {
    pub fn new(wizard: &LaunchWizard) -> Self {
        Self {
            steps: wizard.steps(),
            current: wizard.step_index(),
            furthest: wizard.furthest_step(),
            locked: wizard.is_submitting() || wizard.current_step() == WizardStep::Result,
        }
    }
}

impl Panel for StepBarPanel {
    type Event = WizardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.steps_heading);

        for (index, step) in self.steps.iter().enumerate() {
            let enabled = !self.locked && index <= self.furthest && *step != WizardStep::Result;
            ui.add_enabled_ui(enabled, |ui| {
                let label = format!("{}. {}", index + 1, step);
                if ui.selectable_label(index == self.current, label).clicked()
                    && index != self.current
                {
                    events.push(WizardEvent::JumpTo(index));
                }
            });
        }
        ui.add_space(10.0);
        events
    }
}

/// Read-only fee breakdown for the side panel and the review step.
pub struct FeeSummaryPanel<'a> {
    draft: &'a LaunchDraft,
    chain: &'a ChainDefaults,
}

impl<'a> FeeSummaryPanel<'a> {
    pub fn new(wizard: &'a LaunchWizard) -> Self {
        Self {
            draft: wizard.draft(),
            chain: wizard.chain(),
        }
    }

    fn show_quote(&self, ui: &mut Ui, fees: &FeeQuote) {
        let color = UI_CONFIG.colors.amount;
        let symbol = self.chain.native_symbol;
        match (fees.creation, self.draft.deployment_mode) {
            (Some(creation), _) => ui.metric(
                UI_TEXT.creation_fee_label,
                &format_native(creation, symbol),
                color,
            ),
            (None, Some(DeploymentMode::V2Launch)) => {
                ui.metric(UI_TEXT.creation_fee_label, "none", color)
            }
            (None, _) => ui.label_subdued(UI_TEXT.choose_profile_first),
        }
        ui.metric(UI_TEXT.platform_fee_label, &fees.platform_pct_label(), color);
        if !fees.graduation_fee.is_zero() {
            ui.metric(
                UI_TEXT.graduation_fee_label,
                &format_native(fees.graduation_fee, symbol),
                color,
            );
        }

        let basics = &self.draft.basics;
        let mut addons = Vec::new();
        if basics.remove_header {
            addons.push(format!("headerless {}", format_native(fees.headerless_addon, symbol)));
        }
        if basics.stealth {
            addons.push(format!("stealth {}", format_native(fees.stealth_addon, symbol)));
        }
        if basics.lp_mode == LpMode::Lock {
            addons.push(format!("locker {}", format_native(fees.locker_fee, symbol)));
        }
        if !addons.is_empty() {
            ui.metric(UI_TEXT.addons_label, &addons.join(", "), color);
        }
        ui.metric(
            UI_TEXT.total_due_label,
            &format_native(fees.total_due(basics), symbol),
            UI_CONFIG.colors.heading,
        );
    }
}

impl<'a> Panel for FeeSummaryPanel<'a> {
    type Event = WizardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        section_heading(ui, UI_TEXT.fees_heading);
        self.show_quote(ui, &self.draft.fees);
        ui.add_space(10.0);
        Vec::new()
    }
}

pub struct DeploymentPanel<'a> {
    form: StepForm<'a>,
}

impl<'a> DeploymentPanel<'a> {
    pub fn new(wizard: &'a LaunchWizard) -> Self {
        Self {
            form: StepForm::new(wizard),
        }
    }
}

impl<'a> Panel for DeploymentPanel<'a> {
    type Event = WizardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        section_heading(ui, UI_TEXT.deployment_heading);
        let current = self.form.draft.deployment_mode;

        for mode in DeploymentMode::iter() {
            let help = match mode {
                DeploymentMode::VirtualCurve => UI_TEXT.deployment_help_curve,
                DeploymentMode::V2Launch => UI_TEXT.deployment_help_v2,
            };
            ui.group(|ui| {
                if ui
                    .selectable_label(current == Some(mode), mode.to_string())
                    .clicked()
                    && current != Some(mode)
                {
                    self.form.events.push(WizardEvent::DeploymentMode(mode));
                }
                ui.label_subdued(help);
            });
            ui.add_space(5.0);
        }

        self.form.step_error(ui);
        std::mem::take(&mut self.form.events)
    }
}

pub struct TaxProfilePanel<'a> {
    form: StepForm<'a>,
}

impl<'a> TaxProfilePanel<'a> {
    pub fn new(wizard: &'a LaunchWizard) -> Self {
        Self {
            form: StepForm::new(wizard),
        }
    }
}

fn profile_help(profile: Profile) -> &'static str {
    match profile {
        Profile::Zero => UI_TEXT.profile_help_zero,
        Profile::Super => UI_TEXT.profile_help_super,
        Profile::Basic => UI_TEXT.profile_help_basic,
        Profile::Advanced => UI_TEXT.profile_help_advanced,
    }
}

impl<'a> Panel for TaxProfilePanel<'a> {
    type Event = WizardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        section_heading(ui, UI_TEXT.tax_profile_heading);
        let draft = self.form.draft;

        ui.label_subheader(UI_TEXT.tax_mode_label);
        ui.horizontal(|ui| {
            for tax_mode in TaxMode::iter() {
                if ui
                    .selectable_label(draft.tax_mode == Some(tax_mode), tax_mode.to_string())
                    .clicked()
                    && draft.tax_mode != Some(tax_mode)
                {
                    self.form.events.push(WizardEvent::TaxMode(tax_mode));
                }
            }
        });

        spaced_separator(ui);
        ui.label_subheader(UI_TEXT.profile_label);
        for profile in Profile::iter() {
            let allowed = draft
                .tax_mode
                .is_some_and(|tax_mode| profile.is_allowed_under(tax_mode));
            ui.add_enabled_ui(allowed, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .selectable_label(draft.profile == Some(profile), profile.to_string())
                        .clicked()
                        && draft.profile != Some(profile)
                    {
                        self.form.events.push(WizardEvent::Profile(profile));
                    }
                    ui.label_subdued(profile_help(profile));
                });
            });
        }

        self.form.step_error(ui);
        std::mem::take(&mut self.form.events)
    }
}

pub struct BasicsPanel<'a> {
    form: StepForm<'a>,
    chain: &'a ChainDefaults,
}

impl<'a> BasicsPanel<'a> {
    pub fn new(wizard: &'a LaunchWizard) -> Self {
        Self {
            form: StepForm::new(wizard),
            chain: wizard.chain(),
        }
    }
}

impl<'a> Panel for BasicsPanel<'a> {
    type Event = WizardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        section_heading(ui, UI_TEXT.basics_heading);
        let draft = self.form.draft;
        let basics = &draft.basics;

        self.form.text(ui, FieldId::Name);
        self.form.text(ui, FieldId::Symbol);
        self.form.text(ui, FieldId::TotalSupply);
        if draft.deployment_mode == Some(DeploymentMode::VirtualCurve) {
            self.form.text(ui, FieldId::GradCap);
        }
        self.form.text(ui, FieldId::TokenCategory);

        spaced_separator(ui);
        ui.label_subheader(UI_TEXT.start_label);
        if let Some(mode) = choice(ui, basics.start_mode) {
            self.form.events.push(WizardEvent::StartMode(mode));
        }
        if basics.start_mode == StartMode::Schedule {
            self.form.text(ui, FieldId::LaunchDateTime);
            match parse_launch_date_time(&basics.launch_date_time) {
                Some(ts) => ui.label_subdued(epoch_sec_to_utc(ts)),
                None => ui.label_subdued("YYYY-MM-DD HH:MM (UTC)"),
            }
        }

        spaced_separator(ui);
        ui.label_subheader(UI_TEXT.liquidity_label);
        if let Some(mode) = choice(ui, basics.lp_mode) {
            self.form.events.push(WizardEvent::LpMode(mode));
        }
        if basics.lp_mode == LpMode::Lock {
            self.form.text(ui, FieldId::LockDays);
        }

        spaced_separator(ui);
        let symbol = self.chain.native_symbol;
        self.form.flag(
            ui,
            DraftFlag::RemoveHeader,
            basics.remove_header,
            format!(
                "{} (+{})",
                UI_TEXT.remove_header_label,
                format_native(draft.fees.headerless_addon, symbol)
            ),
        );
        self.form.flag(
            ui,
            DraftFlag::Stealth,
            basics.stealth,
            format!(
                "{} (+{})",
                UI_TEXT.stealth_label,
                format_native(draft.fees.stealth_addon, symbol)
            ),
        );

        self.form.step_error(ui);
        std::mem::take(&mut self.form.events)
    }
}

pub struct CurvePanel<'a> {
    form: StepForm<'a>,
}

impl<'a> CurvePanel<'a> {
    pub fn new(wizard: &'a LaunchWizard) -> Self {
        Self {
            form: StepForm::new(wizard),
        }
    }

    fn render_super(&mut self, ui: &mut Ui) {
        self.form.text(ui, FieldId::SuperMaxWallet);
        self.form.text(ui, FieldId::SuperMaxTx);
        ui.label_subdued(UI_TEXT.blank_means_no_limit);
        self.form
            .final_settings(ui, Profile::Super, FieldId::SuperFinalTax);
    }

    fn render_basic(&mut self, ui: &mut Ui) {
        ui.label_subheader(UI_TEXT.tax_schedule_label);
        self.form.text(ui, FieldId::BasicStartTax);
        self.form.seconds(ui, FieldId::BasicTaxDuration);

        spaced_separator(ui);
        ui.label_subheader(UI_TEXT.wallet_limits_label);
        self.form.text(ui, FieldId::BasicMaxWallet);
        self.form.seconds(ui, FieldId::BasicMaxWalletDuration);

        ui.label_subheader(UI_TEXT.tx_limits_label);
        self.form.text(ui, FieldId::BasicMaxTx);
        self.form.seconds(ui, FieldId::BasicMaxTxDuration);

        self.form
            .final_settings(ui, Profile::Basic, FieldId::BasicFinalTax);
    }

    fn render_advanced(&mut self, ui: &mut Ui) {
        ui.label_subheader(UI_TEXT.tax_schedule_label);
        self.form.text(ui, FieldId::AdvStartTax);
        self.form.text(ui, FieldId::AdvTaxStep);
        self.form.seconds(ui, FieldId::AdvTaxInterval);
        self.form.seconds(ui, FieldId::AdvRemoveAfter);
        self.form.text(ui, FieldId::AdvTaxReceiver);

        spaced_separator(ui);
        ui.label_subheader(UI_TEXT.wallet_limits_label);
        self.form.text(ui, FieldId::AdvMaxWalletStart);
        self.form.text(ui, FieldId::AdvMaxWalletStep);
        self.form.seconds(ui, FieldId::AdvMaxWalletInterval);

        ui.label_subheader(UI_TEXT.tx_limits_label);
        self.form.text(ui, FieldId::AdvMaxTxStart);
        self.form.text(ui, FieldId::AdvMaxTxStep);
        self.form.seconds(ui, FieldId::AdvMaxTxInterval);

        self.form
            .final_settings(ui, Profile::Advanced, FieldId::AdvFinalTax);
    }
}

impl<'a> Panel for CurvePanel<'a> {
    type Event = WizardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        section_heading(ui, UI_TEXT.curve_heading);

        match self.form.draft.profile {
            None => ui.label_subdued(UI_TEXT.choose_profile_first),
            Some(profile) => {
                ui.label_subdued(format!("{} - {}", profile, profile_help(profile)));
                ui.add_space(5.0);
                match profile {
                    Profile::Zero => {
                        self.form
                            .final_settings(ui, Profile::Zero, FieldId::ZeroFinalTax)
                    }
                    Profile::Super => self.render_super(ui),
                    Profile::Basic => self.render_basic(ui),
                    Profile::Advanced => self.render_advanced(ui),
                }
            }
        }

        self.form.step_error(ui);
        std::mem::take(&mut self.form.events)
    }
}

pub struct V2LiquidityPanel<'a> {
    form: StepForm<'a>,
    chain: &'a ChainDefaults,
}

impl<'a> V2LiquidityPanel<'a> {
    pub fn new(wizard: &'a LaunchWizard) -> Self {
        Self {
            form: StepForm::new(wizard),
            chain: wizard.chain(),
        }
    }
}

impl<'a> Panel for V2LiquidityPanel<'a> {
    type Event = WizardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        section_heading(ui, UI_TEXT.v2_liquidity_heading);
        let draft = self.form.draft;
        let v2 = &draft.v2;

        self.form.text(ui, FieldId::V2InitialLiquidity);
        ui.label_subdued(format!("Paid in {}", self.chain.native_symbol));
        self.form.text(ui, FieldId::V2LiquidityTokenPct);

        spaced_separator(ui);
        ui.label_subheader(UI_TEXT.trading_mode_label);
        if let Some(mode) = choice(ui, v2.trading_mode) {
            self.form.events.push(WizardEvent::TradingMode(mode));
        }
        if v2.trading_mode == TradingMode::Delayed {
            self.form.seconds(ui, FieldId::V2EnableDelay);
        }

        spaced_separator(ui);
        self.form.flag(
            ui,
            DraftFlag::V2Stealth,
            v2.stealth.enabled,
            UI_TEXT.v2_stealth_label,
        );
        if v2.stealth.enabled {
            self.form.text(ui, FieldId::V2ProtectedBlocks);
        }

        self.form.step_error(ui);
        std::mem::take(&mut self.form.events)
    }
}

pub struct V2LimitsPanel<'a> {
    form: StepForm<'a>,
}

impl<'a> V2LimitsPanel<'a> {
    pub fn new(wizard: &'a LaunchWizard) -> Self {
        Self {
            form: StepForm::new(wizard),
        }
    }
}

impl<'a> Panel for V2LimitsPanel<'a> {
    type Event = WizardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        section_heading(ui, UI_TEXT.v2_limits_heading);
        let draft = self.form.draft;
        let v2 = &draft.v2;

        self.form.text(ui, FieldId::V2BuyTax);
        self.form.text(ui, FieldId::V2SellTax);
        self.form.text(ui, FieldId::V2TaxReceiver);

        spaced_separator(ui);
        self.form.text(ui, FieldId::V2MaxWallet);
        self.form.text(ui, FieldId::V2MaxTx);
        ui.label_subdued(UI_TEXT.blank_means_no_limit);

        spaced_separator(ui);
        self.form.flag(
            ui,
            DraftFlag::V2TaxDecay,
            v2.tax_decay.enabled,
            UI_TEXT.tax_decay_label,
        );
        if v2.tax_decay.enabled {
            self.form.text(ui, FieldId::V2TaxDecayStep);
            self.form.seconds(ui, FieldId::V2TaxDecayInterval);
        }
        self.form.flag(
            ui,
            DraftFlag::V2LimitGrowth,
            v2.limit_growth.enabled,
            UI_TEXT.limit_growth_label,
        );
        if v2.limit_growth.enabled {
            self.form.text(ui, FieldId::V2LimitGrowthStep);
            self.form.seconds(ui, FieldId::V2LimitGrowthInterval);
        }

        self.form.step_error(ui);
        std::mem::take(&mut self.form.events)
    }
}

pub struct MetadataPanel<'a> {
    form: StepForm<'a>,
    asset_inputs: &'a AssetInputs,
}

impl<'a> MetadataPanel<'a> {
    pub fn new(wizard: &'a LaunchWizard, asset_inputs: &'a AssetInputs) -> Self {
        Self {
            form: StepForm::new(wizard),
            asset_inputs,
        }
    }

    fn render_asset(&mut self, ui: &mut Ui, kind: AssetKind) {
        let mut input = self.asset_inputs.get(kind).clone();
        let before = input.clone();

        ui.horizontal(|ui| {
            ui.label(kind.to_string());
            ui.radio_value(&mut input.mode, AssetInputMode::Url, UI_TEXT.asset_url_option);
            ui.radio_value(&mut input.mode, AssetInputMode::File, UI_TEXT.asset_file_option);
        });
        ui.add(TextEdit::singleline(&mut input.text).desired_width(UI_CONFIG.text_field_width));
        ui.field_error(self.form.errors.get(ErrorKey::Asset(kind)));

        if input != before {
            self.form
                .events
                .push(WizardEvent::Asset(kind, input.source()));
            self.form.events.push(WizardEvent::AssetInput(kind, input));
        }
    }
}

impl<'a> Panel for MetadataPanel<'a> {
    type Event = WizardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        section_heading(ui, UI_TEXT.metadata_heading);
        let draft = self.form.draft;
        let meta = &draft.meta;

        ui.label(FieldId::Description.label());
        let mut description = meta.description.clone();
        if ui
            .add(
                TextEdit::multiline(&mut description)
                    .desired_rows(4)
                    .desired_width(UI_CONFIG.text_field_width * 1.5),
            )
            .changed()
        {
            self.form
                .events
                .push(WizardEvent::Field(FieldId::Description, description));
        }
        ui.label_subdued(format!(
            "{}/{}",
            meta.description.chars().count(),
            crate::config::LAUNCH.metadata.max_description_chars
        ));
        ui.field_error(self.form.errors.field_error(FieldId::Description));

        spaced_separator(ui);
        ui.label_subheader(UI_TEXT.socials_label);
        self.form.text(ui, FieldId::Website);
        self.form.text(ui, FieldId::Telegram);
        self.form.text(ui, FieldId::Twitter);

        spaced_separator(ui);
        ui.label_subheader(UI_TEXT.media_label);
        for kind in AssetKind::iter() {
            self.render_asset(ui, kind);
        }
        self.form.flag(
            ui,
            DraftFlag::AutoBrand,
            meta.auto_brand,
            UI_TEXT.auto_brand_label,
        );

        self.form.step_error(ui);
        std::mem::take(&mut self.form.events)
    }
}

pub struct ReviewPanel<'a> {
    wizard: &'a LaunchWizard,
    token_address: &'a str,
}

impl<'a> ReviewPanel<'a> {
    pub fn new(wizard: &'a LaunchWizard, token_address: &'a str) -> Self {
        Self {
            wizard,
            token_address,
        }
    }

    fn render_summary(&self, ui: &mut Ui) {
        let draft = self.wizard.draft();
        let basics = &draft.basics;
        let or_dash = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());

        let mut rows = vec![
            ("Type", or_dash(draft.deployment_mode.map(|m| m.to_string()))),
            ("Name", format!("{} ({})", basics.name, basics.symbol)),
            ("Total supply", basics.total_supply.clone()),
        ];
        if draft.deployment_mode == Some(DeploymentMode::VirtualCurve) {
            rows.push(("Tax mode", or_dash(draft.tax_mode.map(|t| t.to_string()))));
            rows.push(("Profile", or_dash(draft.profile.map(|p| p.to_string()))));
            rows.push(("Graduation cap", basics.grad_cap.clone()));
        }
        rows.push(("Start", match basics.start_mode {
            StartMode::Now => StartMode::Now.to_string(),
            StartMode::Schedule => basics.launch_date_time.clone(),
        }));
        rows.push(("Liquidity", match basics.lp_mode {
            LpMode::Lock => format!("{} for {} days", LpMode::Lock, basics.lock_days),
            LpMode::Burn => LpMode::Burn.to_string(),
        }));

        Grid::new("review_summary_grid")
            .num_columns(2)
            .spacing([20.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                for (label, value) in rows {
                    ui.label_subdued(label);
                    ui.label(value);
                    ui.end_row();
                }
            });
    }

    fn render_preview(&self, ui: &mut Ui) {
        let ctx = TransformContext {
            token_address: Some(self.token_address.to_string()),
            timestamp: 0,
        };
        ui.collapsing(UI_TEXT.payload_preview_label, |ui| {
            match transform(self.wizard.draft(), &ctx) {
                Ok(payload) => match serde_json::to_string_pretty(&payload) {
                    Ok(json) => {
                        ScrollArea::vertical()
                            .max_height(240.)
                            .id_salt("payload_preview")
                            .show(ui, |ui| {
                                ui.monospace(json);
                            });
                    }
                    Err(e) => ui.label_error(e.to_string()),
                },
                Err(e) => ui.label_error(e.to_string()),
            }
        });
    }
}

impl<'a> Panel for ReviewPanel<'a> {
    type Event = WizardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.review_heading);

        self.render_summary(ui);
        spaced_separator(ui);
        FeeSummaryPanel::new(self.wizard).show_quote(ui, &self.wizard.draft().fees);

        spaced_separator(ui);
        ui.label(UI_TEXT.token_address_label);
        let mut address = self.token_address.to_string();
        if ui
            .add(TextEdit::singleline(&mut address).desired_width(UI_CONFIG.text_field_width * 1.5))
            .changed()
        {
            events.push(WizardEvent::TokenAddress(address));
        }
        self.render_preview(ui);

        spaced_separator(ui);
        let mut acknowledged = self.wizard.acknowledged();
        let submitting = self.wizard.is_submitting();
        if ui
            .add_enabled(
                !submitting,
                eframe::egui::Checkbox::new(&mut acknowledged, UI_TEXT.acknowledge_label),
            )
            .changed()
        {
            events.push(WizardEvent::Acknowledge(acknowledged));
        }

        if let Some(message) = self.wizard.errors().step_error() {
            ui.label_error(message);
        }
        match self.wizard.submission() {
            SubmissionState::Pending => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(UI_TEXT.submitting_label);
                });
            }
            SubmissionState::Failed { message } => {
                ui.label_error(format!("{}: {}", UI_TEXT.submission_failed_label, message));
            }
            SubmissionState::Idle | SubmissionState::Succeeded { .. } => {}
        }
        events
    }
}

pub struct ResultPanel<'a> {
    wizard: &'a LaunchWizard,
}

impl<'a> ResultPanel<'a> {
    pub fn new(wizard: &'a LaunchWizard) -> Self {
        Self { wizard }
    }
}

impl<'a> Panel for ResultPanel<'a> {
    type Event = WizardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.result_heading);

        if let SubmissionState::Succeeded { tx_id } = self.wizard.submission() {
            let draft = self.wizard.draft();
            ui.label(
                RichText::new(format!("{} ({})", draft.basics.name, draft.basics.symbol))
                    .color(UI_CONFIG.colors.success),
            );
            ui.add_space(5.0);
            ui.label_subdued(UI_TEXT.result_tx_label);
            ui.monospace(tx_id.as_str());
            if let Some(link) = self.wizard.submission_link() {
                ui.hyperlink_to(UI_TEXT.result_link_label, link);
            }
        }

        spaced_separator(ui);
        if ui.button(UI_TEXT.start_over_button).clicked() {
            events.push(WizardEvent::StartOver);
        }
        events
    }
}

/// Back / Next / Confirm row under every step.
pub struct NavigationPanel {
    step: WizardStep,
    index: usize,
    can_confirm: bool,
    submitting: bool,
}

impl NavigationPanel {
    pub fn new(wizard: &LaunchWizard) -> Self {
        Self {
            step: wizard.current_step(),
            index: wizard.step_index(),
            can_confirm: wizard.can_confirm(),
            submitting: wizard.is_submitting(),
        }
    }
}

impl Panel for NavigationPanel {
    type Event = WizardEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        if self.step == WizardStep::Result {
            return events;
        }

        spaced_separator(ui);
        ui.horizontal(|ui| {
            let can_go_back = self.index > 0 && !self.submitting;
            if ui
                .add_enabled(can_go_back, Button::new(UI_TEXT.back_button))
                .clicked()
            {
                events.push(WizardEvent::Back);
            }

            if self.step == WizardStep::Review {
                if ui
                    .add_enabled(self.can_confirm, Button::new(UI_TEXT.confirm_button))
                    .clicked()
                {
                    events.push(WizardEvent::Confirm);
                }
            } else if ui.button(UI_TEXT.next_button).clicked() {
                events.push(WizardEvent::Next);
            }
        });
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_input_modes_are_exclusive() {
        let mut input = AssetInput {
            mode: AssetInputMode::Url,
            text: "https://cdn.example.org/logo.png".to_string(),
        };
        assert_eq!(input.source().url(), Some("https://cdn.example.org/logo.png"));

        input.mode = AssetInputMode::File;
        assert!(input.source().url().is_none());
        assert!(input.source().local_file().is_some());

        input.text = "  ".to_string();
        assert_eq!(input.source(), AssetSource::Unset);
    }
}
