//! Rule table: one entry per `(step, profile scope)`, each a plain function.
//! Supporting another profile means adding rows here, not new branches in
//! the wizard.

use crate::config::{LAUNCH, SECONDS_PER_DAY, TOKEN_DECIMALS};
use crate::domain::{
    AssetKind, DeploymentMode, FieldId, LaunchDraft, LpMode, Profile, StartMode, TradingMode,
    WizardStep,
};
use crate::utils::units::pow10;
use crate::utils::{parse_integer, safe_parse_decimal};
use crate::utils::time_utils::parse_launch_date_time;

use super::checks::{
    Presence, address, final_tax, is_http_url, limit_percent, percent_within,
    positive_whole_number, require_text, step_with_interval, whole_number,
};
use super::{ErrorKey, ValidationContext, ValidationErrors};

pub type StepValidator = fn(&LaunchDraft, &ValidationContext, &mut ValidationErrors);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    AnyProfile,
    /// Only runs when the draft's profile matches
    Profile(Profile),
}

pub struct Rule {
    pub step: WizardStep,
    pub scope: RuleScope,
    pub check: StepValidator,
}

pub const RULES: &[Rule] = &[
    Rule {
        step: WizardStep::Deployment,
        scope: RuleScope::AnyProfile,
        check: deployment_chosen,
    },
    Rule {
        step: WizardStep::TaxProfile,
        scope: RuleScope::AnyProfile,
        check: tax_mode_and_profile,
    },
    Rule {
        step: WizardStep::Basics,
        scope: RuleScope::AnyProfile,
        check: basics,
    },
    Rule {
        step: WizardStep::Curve,
        scope: RuleScope::AnyProfile,
        check: curve_profile_chosen,
    },
    Rule {
        step: WizardStep::Curve,
        scope: RuleScope::Profile(Profile::Zero),
        check: zero_curve,
    },
    Rule {
        step: WizardStep::Curve,
        scope: RuleScope::Profile(Profile::Super),
        check: super_curve,
    },
    Rule {
        step: WizardStep::Curve,
        scope: RuleScope::Profile(Profile::Basic),
        check: basic_curve,
    },
    Rule {
        step: WizardStep::Curve,
        scope: RuleScope::Profile(Profile::Advanced),
        check: advanced_curve,
    },
    Rule {
        step: WizardStep::V2Liquidity,
        scope: RuleScope::AnyProfile,
        check: v2_liquidity,
    },
    Rule {
        step: WizardStep::V2Limits,
        scope: RuleScope::AnyProfile,
        check: v2_limits,
    },
    Rule {
        step: WizardStep::Metadata,
        scope: RuleScope::AnyProfile,
        check: metadata,
    },
];

pub fn rules_for(step: WizardStep, profile: Option<Profile>) -> impl Iterator<Item = &'static Rule> {
    RULES.iter().filter(move |rule| {
        rule.step == step
            && match rule.scope {
                RuleScope::AnyProfile => true,
                RuleScope::Profile(scoped) => profile == Some(scoped),
            }
    })
}

fn deployment_chosen(draft: &LaunchDraft, _ctx: &ValidationContext, errors: &mut ValidationErrors) {
    if draft.deployment_mode.is_none() {
        errors.step("Choose a deployment type to continue");
    }
}

fn tax_mode_and_profile(
    draft: &LaunchDraft,
    _ctx: &ValidationContext,
    errors: &mut ValidationErrors,
) {
    match (draft.tax_mode, draft.profile) {
        (Some(tax_mode), Some(profile)) if profile.is_allowed_under(tax_mode) => {}
        (Some(tax_mode), Some(profile)) => {
            errors.step(format!(
                "The {profile} profile is not available with the \"{tax_mode}\" tax mode"
            ));
        }
        _ => errors.step("Choose a tax mode and a profile to continue"),
    }
}

fn basics(draft: &LaunchDraft, ctx: &ValidationContext, errors: &mut ValidationErrors) {
    let basics = &draft.basics;
    require_text(errors, FieldId::Name, &basics.name);
    require_text(errors, FieldId::Symbol, &basics.symbol);

    let max_digits = LAUNCH.numbers.max_supply_digits;
    let supply = match parse_integer(&basics.total_supply) {
        Ok(value) if pow10(max_digits).is_some_and(|limit| value >= limit) => {
            errors.field(
                FieldId::TotalSupply,
                format!("Total supply can have at most {max_digits} digits"),
            );
            None
        }
        Ok(value) if !value.is_zero() => Some(value),
        _ => {
            errors.field(
                FieldId::TotalSupply,
                "Total supply must be a positive whole number",
            );
            None
        }
    };

    // The graduation cap ends the curve, so V2 launches never read it
    let has_curve = draft.deployment_mode != Some(DeploymentMode::V2Launch);
    if has_curve && !basics.grad_cap.trim().is_empty() {
        match parse_integer(&basics.grad_cap) {
            Ok(cap) if cap.is_zero() => {
                errors.field(FieldId::GradCap, "Graduation cap must be greater than 0");
            }
            Ok(cap) => {
                if supply.is_some_and(|supply| cap > supply) {
                    errors.field(FieldId::GradCap, "Graduation cap cannot exceed total supply");
                }
            }
            Err(_) => errors.field(FieldId::GradCap, "Graduation cap must be a whole number"),
        }
    }

    if basics.start_mode == StartMode::Schedule {
        match parse_launch_date_time(&basics.launch_date_time) {
            None => errors.field(FieldId::LaunchDateTime, "Pick a launch date and time"),
            Some(ts) if ts < ctx.now_secs => {
                errors.field(FieldId::LaunchDateTime, "Launch time must be in the future");
            }
            Some(_) => {}
        }
    }

    if basics.lp_mode == LpMode::Lock {
        let min_days = LAUNCH.liquidity.min_lock_days;
        match whole_number(errors, FieldId::LockDays, &basics.lock_days, Presence::Required) {
            Some(days) if days < min_days => errors.field(
                FieldId::LockDays,
                format!("Liquidity must be locked for at least {min_days} days"),
            ),
            Some(days) if days.checked_mul(SECONDS_PER_DAY).is_none() => {
                errors.field(FieldId::LockDays, "Lock period is too long");
            }
            _ => {}
        }
    }
}

fn curve_profile_chosen(
    draft: &LaunchDraft,
    _ctx: &ValidationContext,
    errors: &mut ValidationErrors,
) {
    if draft.profile.is_none() {
        errors.step("Choose a profile before configuring the curve");
    }
}

fn zero_curve(draft: &LaunchDraft, _ctx: &ValidationContext, errors: &mut ValidationErrors) {
    final_tax(errors, FieldId::ZeroFinalTax, &draft.curves.zero.final_settings);
}

fn super_curve(draft: &LaunchDraft, _ctx: &ValidationContext, errors: &mut ValidationErrors) {
    let curve = &draft.curves.super_curve;
    limit_percent(errors, FieldId::SuperMaxWallet, &curve.max_wallet, Presence::Optional);
    limit_percent(errors, FieldId::SuperMaxTx, &curve.max_tx, Presence::Optional);
    final_tax(errors, FieldId::SuperFinalTax, &curve.final_settings);
}

fn basic_curve(draft: &LaunchDraft, _ctx: &ValidationContext, errors: &mut ValidationErrors) {
    let curve = &draft.curves.basic;
    percent_within(
        errors,
        FieldId::BasicStartTax,
        &curve.start_tax,
        0,
        u64::from(LAUNCH.taxes.max_curve_tax_pct),
        Presence::Required,
    );

    for (field, text) in [
        (FieldId::BasicTaxDuration, &curve.tax_duration),
        (FieldId::BasicMaxWalletDuration, &curve.max_wallet_duration),
        (FieldId::BasicMaxTxDuration, &curve.max_tx_duration),
    ] {
        whole_number(errors, field, text, Presence::Optional);
    }

    // Basic limits are whole percentages
    for (field, text) in [
        (FieldId::BasicMaxWallet, &curve.max_wallet),
        (FieldId::BasicMaxTx, &curve.max_tx),
    ] {
        if whole_number(errors, field, text, Presence::Optional).is_some_and(|pct| pct > 100) {
            errors.field(field, "Must be at most 100");
        }
    }

    final_tax(errors, FieldId::BasicFinalTax, &curve.final_settings);
}

fn advanced_curve(draft: &LaunchDraft, _ctx: &ValidationContext, errors: &mut ValidationErrors) {
    let curve = &draft.curves.advanced;
    percent_within(
        errors,
        FieldId::AdvStartTax,
        &curve.start_tax,
        0,
        u64::from(LAUNCH.taxes.max_curve_tax_pct),
        Presence::Required,
    );
    step_with_interval(
        errors,
        (FieldId::AdvTaxStep, &curve.tax_step),
        (FieldId::AdvTaxInterval, &curve.tax_interval),
        Presence::Optional,
    );

    limit_percent(errors, FieldId::AdvMaxWalletStart, &curve.max_wallet_start, Presence::Optional);
    step_with_interval(
        errors,
        (FieldId::AdvMaxWalletStep, &curve.max_wallet_step),
        (FieldId::AdvMaxWalletInterval, &curve.max_wallet_interval),
        Presence::Optional,
    );

    limit_percent(errors, FieldId::AdvMaxTxStart, &curve.max_tx_start, Presence::Optional);
    step_with_interval(
        errors,
        (FieldId::AdvMaxTxStep, &curve.max_tx_step),
        (FieldId::AdvMaxTxInterval, &curve.max_tx_interval),
        Presence::Optional,
    );

    whole_number(errors, FieldId::AdvRemoveAfter, &curve.remove_after, Presence::Optional);
    address(errors, FieldId::AdvTaxReceiver, &curve.tax_receiver);
    final_tax(errors, FieldId::AdvFinalTax, &curve.final_settings);
}

fn v2_liquidity(draft: &LaunchDraft, _ctx: &ValidationContext, errors: &mut ValidationErrors) {
    let v2 = &draft.v2;

    match safe_parse_decimal(&v2.initial_liquidity) {
        Some(amount) if amount.scale > TOKEN_DECIMALS => errors.field(
            FieldId::V2InitialLiquidity,
            format!("Use at most {TOKEN_DECIMALS} decimal places"),
        ),
        Some(amount) if amount.floor_scaled(TOKEN_DECIMALS).is_err() => {
            errors.field(FieldId::V2InitialLiquidity, "Initial liquidity is too large");
        }
        Some(amount) if !amount.is_zero() => {}
        _ => errors.field(
            FieldId::V2InitialLiquidity,
            "Initial liquidity must be a positive amount",
        ),
    }
    limit_percent(
        errors,
        FieldId::V2LiquidityTokenPct,
        &v2.liquidity_token_pct,
        Presence::Required,
    );

    if v2.trading_mode == TradingMode::Delayed {
        positive_whole_number(errors, FieldId::V2EnableDelay, &v2.enable_delay, Presence::Required);
    }
    if v2.stealth.enabled {
        positive_whole_number(
            errors,
            FieldId::V2ProtectedBlocks,
            &v2.stealth.protected_blocks,
            Presence::Required,
        );
    }
}

fn v2_limits(draft: &LaunchDraft, _ctx: &ValidationContext, errors: &mut ValidationErrors) {
    let v2 = &draft.v2;
    let max_tax = u64::from(LAUNCH.taxes.max_v2_tax_pct);

    let buy = percent_within(errors, FieldId::V2BuyTax, &v2.buy_tax, 0, max_tax, Presence::Optional);
    let sell = percent_within(errors, FieldId::V2SellTax, &v2.sell_tax, 0, max_tax, Presence::Optional);
    let taxed = [buy, sell]
        .into_iter()
        .any(|tax| tax.is_some_and(|value| !value.is_zero()));
    if taxed {
        address(errors, FieldId::V2TaxReceiver, &v2.tax_receiver);
    }

    limit_percent(errors, FieldId::V2MaxWallet, &v2.max_wallet, Presence::Optional);
    limit_percent(errors, FieldId::V2MaxTx, &v2.max_tx, Presence::Optional);

    if v2.tax_decay.enabled {
        step_with_interval(
            errors,
            (FieldId::V2TaxDecayStep, &v2.tax_decay.step),
            (FieldId::V2TaxDecayInterval, &v2.tax_decay.interval),
            Presence::Required,
        );
    }
    if v2.limit_growth.enabled {
        step_with_interval(
            errors,
            (FieldId::V2LimitGrowthStep, &v2.limit_growth.step),
            (FieldId::V2LimitGrowthInterval, &v2.limit_growth.interval),
            Presence::Required,
        );
    }
}

fn metadata(draft: &LaunchDraft, _ctx: &ValidationContext, errors: &mut ValidationErrors) {
    let meta = &draft.meta;
    let max_chars = LAUNCH.metadata.max_description_chars;
    if meta.description.chars().count() > max_chars {
        errors.field(
            FieldId::Description,
            format!("Keep the description under {max_chars} characters"),
        );
    }

    for (field, text) in [
        (FieldId::Website, &meta.website),
        (FieldId::Telegram, &meta.telegram),
        (FieldId::Twitter, &meta.twitter),
    ] {
        if !text.trim().is_empty() && !is_http_url(text) {
            errors.field(field, "Must be a full http(s):// link");
        }
    }

    for kind in [AssetKind::Logo, AssetKind::Banner, AssetKind::Audio] {
        if let Some(url) = meta.asset(kind).url() {
            if !is_http_url(url) {
                errors.insert(ErrorKey::Asset(kind), "Must be a full http(s):// link");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::chain_defaults;
    use crate::domain::AssetSource;
    use crate::transform::{TransformContext, transform};
    use crate::validation::validate_step_at;

    fn ctx() -> ValidationContext {
        ValidationContext { now_secs: 0 }
    }

    fn transform_ctx() -> TransformContext {
        TransformContext {
            token_address: None,
            timestamp: 0,
        }
    }

    fn v2_draft() -> LaunchDraft {
        let mut draft = LaunchDraft::with_defaults(&chain_defaults(56));
        draft.deployment_mode = Some(DeploymentMode::V2Launch);
        draft.basics.name = "Pair".to_string();
        draft.basics.symbol = "PAIR".to_string();
        draft.v2.initial_liquidity = "1.5".to_string();
        draft
    }

    #[test]
    fn each_curve_profile_has_its_own_rule() {
        for profile in [Profile::Zero, Profile::Super, Profile::Basic, Profile::Advanced] {
            let scoped = rules_for(WizardStep::Curve, Some(profile))
                .filter(|rule| rule.scope == RuleScope::Profile(profile))
                .count();
            assert_eq!(scoped, 1, "{profile}");
        }
        assert_eq!(rules_for(WizardStep::Curve, None).count(), 1);
        assert_eq!(rules_for(WizardStep::Review, Some(Profile::Zero)).count(), 0);
    }

    #[test]
    fn grad_cap_ignored_for_v2() {
        let mut draft = v2_draft();
        draft.basics.total_supply = "100".to_string();
        assert!(validate_step_at(WizardStep::Basics, &draft, &ctx()).ok);
    }

    #[test]
    fn v2_liquidity_rules() {
        let mut draft = v2_draft();
        assert!(validate_step_at(WizardStep::V2Liquidity, &draft, &ctx()).ok);

        draft.v2.initial_liquidity = "0".to_string();
        draft.v2.trading_mode = TradingMode::Delayed;
        draft.v2.stealth.enabled = true;
        let report = validate_step_at(WizardStep::V2Liquidity, &draft, &ctx());
        assert!(report.errors.field_error(FieldId::V2InitialLiquidity).is_some());
        assert!(report.errors.field_error(FieldId::V2EnableDelay).is_some());
        assert!(report.errors.field_error(FieldId::V2ProtectedBlocks).is_some());
    }

    #[test]
    fn v2_taxes_need_a_receiver() {
        let mut draft = v2_draft();
        assert!(validate_step_at(WizardStep::V2Limits, &draft, &ctx()).ok);

        draft.v2.sell_tax = "3".to_string();
        let report = validate_step_at(WizardStep::V2Limits, &draft, &ctx());
        assert!(report.errors.field_error(FieldId::V2TaxReceiver).is_some());

        draft.v2.tax_receiver = format!("0x{}", "0a".repeat(20));
        assert!(validate_step_at(WizardStep::V2Limits, &draft, &ctx()).ok);
    }

    #[test]
    fn v2_step_schedules_only_checked_when_enabled() {
        let mut draft = v2_draft();
        draft.v2.limit_growth.step = "1".to_string();
        assert!(validate_step_at(WizardStep::V2Limits, &draft, &ctx()).ok);

        draft.v2.limit_growth.enabled = true;
        let report = validate_step_at(WizardStep::V2Limits, &draft, &ctx());
        assert!(report.errors.field_error(FieldId::V2LimitGrowthInterval).is_some());
    }

    #[test]
    fn enabled_schedules_need_both_parts() {
        let mut draft = v2_draft();
        draft.v2.tax_decay.enabled = true;
        draft.v2.limit_growth.enabled = true;
        let report = validate_step_at(WizardStep::V2Limits, &draft, &ctx());
        for field in [
            FieldId::V2TaxDecayStep,
            FieldId::V2TaxDecayInterval,
            FieldId::V2LimitGrowthStep,
            FieldId::V2LimitGrowthInterval,
        ] {
            assert!(report.errors.field_error(field).is_some(), "{field:?} passed blank");
        }

        draft.v2.tax_decay.step = "1".to_string();
        draft.v2.tax_decay.interval = "60".to_string();
        draft.v2.limit_growth.step = "0.5".to_string();
        draft.v2.limit_growth.interval = "300".to_string();
        assert!(validate_step_at(WizardStep::V2Limits, &draft, &ctx()).ok);
        assert!(transform(&draft, &transform_ctx()).is_ok());
    }

    #[test]
    fn supply_digits_are_capped() {
        let mut draft = v2_draft();
        draft.basics.total_supply = "9".repeat(30);
        assert!(validate_step_at(WizardStep::Basics, &draft, &ctx()).ok);

        draft.basics.total_supply = format!("1{}", "0".repeat(30));
        let report = validate_step_at(WizardStep::Basics, &draft, &ctx());
        assert_eq!(
            report.errors.field_error(FieldId::TotalSupply),
            Some("Total supply can have at most 30 digits")
        );

        draft.basics.total_supply = format!("1{}", "0".repeat(60));
        assert!(!validate_step_at(WizardStep::Basics, &draft, &ctx()).ok);
    }

    #[test]
    fn lock_days_must_convert_to_seconds() {
        let mut draft = v2_draft();
        draft.basics.lock_days = u64::MAX.to_string();
        let report = validate_step_at(WizardStep::Basics, &draft, &ctx());
        assert_eq!(
            report.errors.field_error(FieldId::LockDays),
            Some("Lock period is too long")
        );
    }

    #[test]
    fn initial_liquidity_fits_token_decimals() {
        let mut draft = v2_draft();
        draft.v2.initial_liquidity = format!("0.{}1", "0".repeat(18));
        let report = validate_step_at(WizardStep::V2Liquidity, &draft, &ctx());
        assert_eq!(
            report.errors.field_error(FieldId::V2InitialLiquidity),
            Some("Use at most 18 decimal places")
        );

        draft.v2.initial_liquidity = "9".repeat(70);
        let report = validate_step_at(WizardStep::V2Liquidity, &draft, &ctx());
        assert_eq!(
            report.errors.field_error(FieldId::V2InitialLiquidity),
            Some("Initial liquidity is too large")
        );
    }

    #[test]
    fn largest_accepted_inputs_still_transform() {
        let fine = format!("99.{}", "9".repeat(18));

        let mut draft = v2_draft();
        draft.basics.total_supply = "9".repeat(30);
        draft.v2.liquidity_token_pct = fine.clone();
        draft.v2.max_wallet = fine.clone();
        draft.v2.max_tx = fine.clone();
        draft.v2.limit_growth.enabled = true;
        draft.v2.limit_growth.step = fine.clone();
        draft.v2.limit_growth.interval = "60".to_string();
        for step in [WizardStep::Basics, WizardStep::V2Liquidity, WizardStep::V2Limits] {
            let report = validate_step_at(step, &draft, &ctx());
            assert!(report.ok, "{step}: {:?}", report.errors);
        }
        assert!(transform(&draft, &transform_ctx()).is_ok());

        let mut curve = LaunchDraft::with_defaults(&chain_defaults(1));
        curve.deployment_mode = Some(DeploymentMode::VirtualCurve);
        curve.tax_mode = Some(crate::domain::TaxMode::NoTax);
        curve.profile = Some(Profile::Super);
        curve.basics.name = "Moon Cat".to_string();
        curve.basics.symbol = "MCAT".to_string();
        curve.basics.total_supply = "1000000000000".to_string();
        curve.curves.super_curve.max_wallet = format!("1.{}", "0".repeat(48));
        let report = validate_step_at(WizardStep::Curve, &curve, &ctx());
        assert!(report.errors.field_error(FieldId::SuperMaxWallet).is_some());

        curve.curves.super_curve.max_wallet = fine;
        assert!(validate_step_at(WizardStep::Curve, &curve, &ctx()).ok);
        assert!(transform(&curve, &transform_ctx()).is_ok());
    }

    #[test]
    fn metadata_links_must_be_urls() {
        let mut draft = v2_draft();
        draft.meta.website = "moon.io".to_string();
        draft.meta.logo = AssetSource::Remote("not a url".to_string());
        let report = validate_step_at(WizardStep::Metadata, &draft, &ctx());
        assert!(report.errors.field_error(FieldId::Website).is_some());
        assert!(report.errors.get(ErrorKey::Asset(AssetKind::Logo)).is_some());

        draft.meta.website = "https://moon.io".to_string();
        draft.meta.logo = AssetSource::remote("https://cdn.moon.io/logo.png");
        assert!(validate_step_at(WizardStep::Metadata, &draft, &ctx()).ok);
    }
}
