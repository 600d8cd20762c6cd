//! Validation rule engine.
//!
//! `validate_step` looks up every rule registered for a step (and, for the
//! curve step, for the draft's profile) and collects their messages. It never
//! mutates the draft; the wizard decides what to do with the report.

pub mod checks;
pub mod rules;

use std::collections::BTreeMap;

use crate::domain::{AssetKind, FieldId, LaunchDraft, WizardStep};
use crate::utils::time_utils::now_timestamp;

/// Where a message is shown: on the step as a whole, on a text field, or on a media slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKey {
    Step,
    Field(FieldId),
    Asset(AssetKind),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<ErrorKey, String>);

impl ValidationErrors {
    /// Keeps the first message reported for a key.
    pub fn insert(&mut self, key: ErrorKey, message: impl Into<String>) {
        self.0.entry(key).or_insert_with(|| message.into());
    }

    pub fn field(&mut self, field: FieldId, message: impl Into<String>) {
        self.insert(ErrorKey::Field(field), message);
    }

    pub fn step(&mut self, message: impl Into<String>) {
        self.insert(ErrorKey::Step, message);
    }

    pub fn get(&self, key: ErrorKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn field_error(&self, field: FieldId) -> Option<&str> {
        self.get(ErrorKey::Field(field))
    }

    pub fn step_error(&self) -> Option<&str> {
        self.get(ErrorKey::Step)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ErrorKey, &String)> {
        self.0.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub ok: bool,
    pub errors: ValidationErrors,
}

/// Inputs that are not part of the draft.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext {
    pub now_secs: i64,
}

impl ValidationContext {
    pub fn now() -> Self {
        Self {
            now_secs: now_timestamp(),
        }
    }
}

pub fn validate_step(step: WizardStep, draft: &LaunchDraft) -> ValidationReport {
    validate_step_at(step, draft, &ValidationContext::now())
}

pub fn validate_step_at(
    step: WizardStep,
    draft: &LaunchDraft,
    ctx: &ValidationContext,
) -> ValidationReport {
    let mut errors = ValidationErrors::default();
    for rule in rules::rules_for(step, draft.profile) {
        (rule.check)(draft, ctx, &mut errors);
    }
    ValidationReport {
        ok: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::chain_defaults;
    use crate::domain::{DeploymentMode, FinalType, LpMode, Profile, StartMode, TaxMode};

    fn draft() -> LaunchDraft {
        let mut draft = LaunchDraft::with_defaults(&chain_defaults(1));
        draft.deployment_mode = Some(DeploymentMode::VirtualCurve);
        draft.basics.name = "Moon Cat".to_string();
        draft.basics.symbol = "MCAT".to_string();
        draft
    }

    fn ctx() -> ValidationContext {
        ValidationContext {
            now_secs: 1_800_000_000,
        }
    }

    fn check(step: WizardStep, draft: &LaunchDraft) -> ValidationReport {
        validate_step_at(step, draft, &ctx())
    }

    #[test]
    fn deployment_mode_is_required() {
        let mut d = draft();
        d.deployment_mode = None;
        let report = check(WizardStep::Deployment, &d);
        assert!(!report.ok);
        assert!(report.errors.step_error().is_some());

        d.deployment_mode = Some(DeploymentMode::V2Launch);
        assert!(check(WizardStep::Deployment, &d).ok);
    }

    #[test]
    fn tax_profile_step_rejects_disallowed_combination() {
        let mut d = draft();
        d.tax_mode = Some(TaxMode::NoTax);
        d.profile = Some(Profile::Basic);
        let report = check(WizardStep::TaxProfile, &d);
        assert!(!report.ok);
        assert_eq!(report.errors.len(), 1, "single step-level error");
        assert!(report.errors.step_error().is_some());

        d.tax_mode = Some(TaxMode::Basic);
        assert!(check(WizardStep::TaxProfile, &d).ok);

        d.profile = None;
        assert!(!check(WizardStep::TaxProfile, &d).ok);
    }

    #[test]
    fn basics_defaults_pass_once_named() {
        assert!(check(WizardStep::Basics, &draft()).ok);
    }

    #[test]
    fn basics_requires_name_and_symbol() {
        let mut d = draft();
        d.basics.name = "  ".to_string();
        d.basics.symbol.clear();
        let report = check(WizardStep::Basics, &d);
        assert!(report.errors.field_error(FieldId::Name).is_some());
        assert!(report.errors.field_error(FieldId::Symbol).is_some());
    }

    #[test]
    fn grad_cap_above_supply_fails_on_grad_cap() {
        let mut d = draft();
        d.basics.total_supply = "1000".to_string();
        d.basics.grad_cap = "2000".to_string();
        let report = check(WizardStep::Basics, &d);
        assert!(!report.ok);
        assert!(report.errors.field_error(FieldId::GradCap).is_some());
        assert!(report.errors.field_error(FieldId::TotalSupply).is_none());

        d.basics.grad_cap = "1000".to_string();
        assert!(check(WizardStep::Basics, &d).ok);

        d.basics.grad_cap.clear();
        assert!(check(WizardStep::Basics, &d).ok, "grad cap is optional");
    }

    #[test]
    fn supply_must_be_a_positive_integer() {
        let mut d = draft();
        for bad in ["0", "", "1.5", "-10", "1e9"] {
            d.basics.total_supply = bad.to_string();
            let report = check(WizardStep::Basics, &d);
            assert!(
                report.errors.field_error(FieldId::TotalSupply).is_some(),
                "'{bad}' accepted"
            );
        }
    }

    #[test]
    fn lock_days_boundary() {
        let mut d = draft();
        d.basics.lp_mode = LpMode::Lock;
        d.basics.lock_days = "10".to_string();
        let report = check(WizardStep::Basics, &d);
        assert!(!report.ok);
        assert!(report.errors.field_error(FieldId::LockDays).is_some());

        d.basics.lock_days = "30".to_string();
        assert!(check(WizardStep::Basics, &d).ok);

        d.basics.lock_days = "10".to_string();
        d.basics.lp_mode = LpMode::Burn;
        assert!(check(WizardStep::Basics, &d).ok, "lock days ignored when burning");
    }

    #[test]
    fn scheduled_start_needs_a_future_date() {
        let mut d = draft();
        d.basics.start_mode = StartMode::Schedule;
        assert!(check(WizardStep::Basics, &d).errors.field_error(FieldId::LaunchDateTime).is_some());

        d.basics.launch_date_time = "2020-01-01 00:00".to_string();
        assert!(!check(WizardStep::Basics, &d).ok);

        d.basics.launch_date_time = "2030-01-01 00:00".to_string();
        assert!(check(WizardStep::Basics, &d).ok);
    }

    #[test]
    fn curve_step_without_profile_is_a_step_error() {
        let d = draft();
        let report = check(WizardStep::Curve, &d);
        assert!(!report.ok);
        assert!(report.errors.step_error().is_some());
    }

    #[test]
    fn final_tax_bounded_for_every_profile() {
        for (profile, field) in [
            (Profile::Zero, FieldId::ZeroFinalTax),
            (Profile::Super, FieldId::SuperFinalTax),
            (Profile::Basic, FieldId::BasicFinalTax),
            (Profile::Advanced, FieldId::AdvFinalTax),
        ] {
            let mut d = draft();
            d.profile = Some(profile);
            d.curves.advanced.tax_receiver = format!("0x{}", "ab".repeat(20));
            d.curves.final_settings_mut(profile).final_type = FinalType::Tax;
            d.curves.final_settings_mut(profile).final_tax = "6".to_string();
            let report = check(WizardStep::Curve, &d);
            assert!(report.errors.field_error(field).is_some(), "{profile} allowed 6%");

            d.curves.final_settings_mut(profile).final_tax = "5".to_string();
            let report = check(WizardStep::Curve, &d);
            assert!(report.ok, "{profile}: {:?}", report.errors);

            d.curves.final_settings_mut(profile).final_type = FinalType::NoTax;
            d.curves.final_settings_mut(profile).final_tax = "99".to_string();
            assert!(check(WizardStep::Curve, &d).ok, "{profile} ignores unused final tax");
        }
    }

    #[test]
    fn super_limits_may_be_blank() {
        let mut d = draft();
        d.profile = Some(Profile::Super);
        d.curves.super_curve.max_wallet.clear();
        d.curves.super_curve.max_tx.clear();
        assert!(check(WizardStep::Curve, &d).ok);

        d.curves.super_curve.max_wallet = "150".to_string();
        let report = check(WizardStep::Curve, &d);
        assert!(report.errors.field_error(FieldId::SuperMaxWallet).is_some());
    }

    #[test]
    fn basic_profile_rules() {
        let mut d = draft();
        d.profile = Some(Profile::Basic);
        assert!(check(WizardStep::Curve, &d).ok);

        d.curves.basic.start_tax = "101".to_string();
        d.curves.basic.tax_duration = "-5".to_string();
        d.curves.basic.max_wallet = "1.5".to_string();
        let report = check(WizardStep::Curve, &d);
        assert!(report.errors.field_error(FieldId::BasicStartTax).is_some());
        assert!(report.errors.field_error(FieldId::BasicTaxDuration).is_some());
        assert!(report.errors.field_error(FieldId::BasicMaxWallet).is_some());
    }

    #[test]
    fn advanced_step_requires_interval() {
        let mut d = draft();
        d.profile = Some(Profile::Advanced);
        d.curves.advanced.tax_receiver = format!("0x{}", "1f".repeat(20));
        d.curves.advanced.tax_step = "5".to_string();
        d.curves.advanced.tax_interval = String::new();
        let report = check(WizardStep::Curve, &d);
        assert!(!report.ok);
        assert!(report.errors.field_error(FieldId::AdvTaxInterval).is_some());

        d.curves.advanced.tax_interval = "300".to_string();
        let report = check(WizardStep::Curve, &d);
        assert!(report.ok, "{:?}", report.errors);
    }

    #[test]
    fn advanced_zero_step_needs_no_interval() {
        let mut d = draft();
        d.profile = Some(Profile::Advanced);
        d.curves.advanced.tax_receiver = format!("0x{}", "1f".repeat(20));
        d.curves.advanced.max_wallet_step = "0".to_string();
        d.curves.advanced.max_wallet_interval = "0".to_string();
        assert!(check(WizardStep::Curve, &d).ok);

        d.curves.advanced.max_tx_step = "0.1".to_string();
        d.curves.advanced.max_tx_interval = "0".to_string();
        let report = check(WizardStep::Curve, &d);
        assert!(report.errors.field_error(FieldId::AdvMaxTxInterval).is_some());
    }

    #[test]
    fn advanced_tax_receiver_must_be_an_address() {
        let mut d = draft();
        d.profile = Some(Profile::Advanced);
        let non_hex = format!("0x{}", "zz".repeat(20));
        for bad in ["", "0x123", "1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f", non_hex.as_str()] {
            d.curves.advanced.tax_receiver = bad.to_string();
            let report = check(WizardStep::Curve, &d);
            assert!(report.errors.field_error(FieldId::AdvTaxReceiver).is_some(), "'{bad}'");
        }
    }

    #[test]
    fn validation_does_not_touch_the_draft() {
        let mut d = draft();
        d.profile = Some(Profile::Advanced);
        let before = d.clone();
        let _ = check(WizardStep::Curve, &d);
        let _ = check(WizardStep::Basics, &d);
        assert_eq!(d, before);
    }
}
