//! Draft to submission payload.
//!
//! `transform` is pure: the same draft and context always produce the same
//! payload. It assumes the draft already passed validation, so anything it
//! cannot convert is reported as a `TransformError` instead of being dropped
//! from the request.

use ruint::aliases::U256;
use thiserror::Error;

use crate::config::{LAUNCH, SECONDS_PER_DAY, TOKEN_DECIMALS};
use crate::domain::{
    AdvancedCurve, AssetKind, BasicCurve, DeploymentMode, FieldId, FinalSettings, FinalType,
    LaunchDraft, LpMode, Profile, StartMode, SuperCurve, TaxMode, TradingMode, V2Settings,
};
use crate::utils::time_utils::parse_launch_date_time;
use crate::utils::units::pow10;
use crate::utils::{
    NumberError, parse_integer, percent_of_supply_to_base_units, percent_to_bps, to_base_units,
};

use super::payload::{
    CurvePayload, FinalTaxPayload, LinksPayload, StepSchedulePayload, SubmissionPayload, V2Payload,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("deployment mode is not set")]
    MissingDeploymentMode,
    #[error("tax mode is not set")]
    MissingTaxMode,
    #[error("profile is not set")]
    MissingProfile,
    #[error("the {profile} profile cannot be used with the \"{tax_mode}\" tax mode")]
    ProfileNotAllowed { profile: Profile, tax_mode: TaxMode },
    #[error("{} is required", .0.id())]
    MissingField(FieldId),
    #[error("{}: {source}", .field.id())]
    InvalidField {
        field: FieldId,
        #[source]
        source: NumberError,
    },
    #[error("launch date '{0}' could not be read")]
    InvalidLaunchDate(String),
}

/// Values that come from outside the draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformContext {
    /// Pre-computed deployment address, if the submitter knows it up front
    pub token_address: Option<String>,
    pub timestamp: i64,
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn optional_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_seconds(text: &str) -> Result<u64, NumberError> {
    let value = parse_integer(text)?;
    crate::utils::units::u256_to_u64(value).ok_or(NumberError::Overflow)
}

fn required<T>(
    field: FieldId,
    text: &str,
    convert: impl Fn(&str) -> Result<T, NumberError>,
) -> Result<T, TransformError> {
    if is_blank(text) {
        return Err(TransformError::MissingField(field));
    }
    convert(text).map_err(|source| TransformError::InvalidField { field, source })
}

/// Blank input is "not provided" and maps to `None`, never to zero.
fn optional<T>(
    field: FieldId,
    text: &str,
    convert: impl Fn(&str) -> Result<T, NumberError>,
) -> Result<Option<T>, TransformError> {
    if is_blank(text) {
        return Ok(None);
    }
    required(field, text, convert).map(Some)
}

/// Converts percentages of the total supply into base-unit strings.
struct SupplyShare {
    supply: U256,
}

impl SupplyShare {
    fn of(&self, percent: &str) -> Result<String, NumberError> {
        percent_of_supply_to_base_units(percent, self.supply).map(|amount| amount.to_string())
    }
}

fn whole_tokens_to_base_units(text: &str) -> Result<U256, NumberError> {
    let tokens = parse_integer(text)?;
    let factor = pow10(TOKEN_DECIMALS).ok_or(NumberError::Overflow)?;
    tokens.checked_mul(factor).ok_or(NumberError::Overflow)
}

/// The receiving service has no category field, so the category rides in
/// front of the bio as a `[category]` tag.
pub fn compose_bio(category: &str, description: &str) -> Option<String> {
    let (open, close) = LAUNCH.category_tag;
    let description = description.trim();
    match optional_text(category) {
        Some(category) if description.is_empty() => Some(format!("{open}{category}{close}")),
        Some(category) => Some(format!("{open}{category}{close} {description}")),
        None => optional_text(description),
    }
}

fn final_tax(field: FieldId, settings: &FinalSettings) -> Result<FinalTaxPayload, TransformError> {
    let final_tax_bps = match settings.final_type {
        FinalType::Tax => Some(required(field, &settings.final_tax, percent_to_bps)?),
        FinalType::NoTax => None,
    };
    Ok(FinalTaxPayload { final_tax_bps })
}

fn super_curve(curve: &SuperCurve, share: &SupplyShare) -> Result<CurvePayload, TransformError> {
    Ok(CurvePayload::Super {
        max_wallet: optional(FieldId::SuperMaxWallet, &curve.max_wallet, |t| share.of(t))?,
        max_tx: optional(FieldId::SuperMaxTx, &curve.max_tx, |t| share.of(t))?,
        final_tax: final_tax(FieldId::SuperFinalTax, &curve.final_settings)?,
    })
}

fn basic_curve(curve: &BasicCurve, share: &SupplyShare) -> Result<CurvePayload, TransformError> {
    Ok(CurvePayload::Basic {
        start_tax_bps: required(FieldId::BasicStartTax, &curve.start_tax, percent_to_bps)?,
        tax_duration: optional(FieldId::BasicTaxDuration, &curve.tax_duration, parse_seconds)?,
        max_wallet: optional(FieldId::BasicMaxWallet, &curve.max_wallet, |t| share.of(t))?,
        max_wallet_duration: optional(
            FieldId::BasicMaxWalletDuration,
            &curve.max_wallet_duration,
            parse_seconds,
        )?,
        max_tx: optional(FieldId::BasicMaxTx, &curve.max_tx, |t| share.of(t))?,
        max_tx_duration: optional(FieldId::BasicMaxTxDuration, &curve.max_tx_duration, parse_seconds)?,
        final_tax: final_tax(FieldId::BasicFinalTax, &curve.final_settings)?,
    })
}

fn advanced_curve(
    curve: &AdvancedCurve,
    share: &SupplyShare,
) -> Result<CurvePayload, TransformError> {
    let tax_receiver = optional_text(&curve.tax_receiver)
        .ok_or(TransformError::MissingField(FieldId::AdvTaxReceiver))?;

    Ok(CurvePayload::Advanced {
        start_tax_bps: required(FieldId::AdvStartTax, &curve.start_tax, percent_to_bps)?,
        tax_step_bps: optional(FieldId::AdvTaxStep, &curve.tax_step, percent_to_bps)?,
        tax_interval: optional(FieldId::AdvTaxInterval, &curve.tax_interval, parse_seconds)?,
        max_wallet_start: optional(FieldId::AdvMaxWalletStart, &curve.max_wallet_start, |t| {
            share.of(t)
        })?,
        max_wallet_step: optional(FieldId::AdvMaxWalletStep, &curve.max_wallet_step, |t| {
            share.of(t)
        })?,
        max_wallet_interval: optional(
            FieldId::AdvMaxWalletInterval,
            &curve.max_wallet_interval,
            parse_seconds,
        )?,
        max_tx_start: optional(FieldId::AdvMaxTxStart, &curve.max_tx_start, |t| share.of(t))?,
        max_tx_step: optional(FieldId::AdvMaxTxStep, &curve.max_tx_step, |t| share.of(t))?,
        max_tx_interval: optional(FieldId::AdvMaxTxInterval, &curve.max_tx_interval, parse_seconds)?,
        remove_after: optional(FieldId::AdvRemoveAfter, &curve.remove_after, parse_seconds)?,
        tax_receiver,
        final_tax: final_tax(FieldId::AdvFinalTax, &curve.final_settings)?,
    })
}

fn curve_payload(draft: &LaunchDraft, share: &SupplyShare) -> Result<CurvePayload, TransformError> {
    let tax_mode = draft.tax_mode.ok_or(TransformError::MissingTaxMode)?;
    let profile = draft.profile.ok_or(TransformError::MissingProfile)?;
    if !profile.is_allowed_under(tax_mode) {
        return Err(TransformError::ProfileNotAllowed { profile, tax_mode });
    }

    let curves = &draft.curves;
    match profile {
        Profile::Zero => Ok(CurvePayload::Zero {
            final_tax: final_tax(FieldId::ZeroFinalTax, &curves.zero.final_settings)?,
        }),
        Profile::Super => super_curve(&curves.super_curve, share),
        Profile::Basic => basic_curve(&curves.basic, share),
        Profile::Advanced => advanced_curve(&curves.advanced, share),
    }
}

fn v2_payload(v2: &V2Settings, share: &SupplyShare) -> Result<V2Payload, TransformError> {
    let enable_delay = match v2.trading_mode {
        TradingMode::Delayed => Some(required(FieldId::V2EnableDelay, &v2.enable_delay, parse_seconds)?),
        TradingMode::Immediate | TradingMode::Manual => None,
    };

    let tax_decay = if v2.tax_decay.enabled {
        Some(StepSchedulePayload {
            step: required(FieldId::V2TaxDecayStep, &v2.tax_decay.step, percent_to_bps)?,
            interval: required(FieldId::V2TaxDecayInterval, &v2.tax_decay.interval, parse_seconds)?,
        })
    } else {
        None
    };

    let limit_growth = if v2.limit_growth.enabled {
        Some(StepSchedulePayload {
            step: required(FieldId::V2LimitGrowthStep, &v2.limit_growth.step, |t| share.of(t))?,
            interval: required(
                FieldId::V2LimitGrowthInterval,
                &v2.limit_growth.interval,
                parse_seconds,
            )?,
        })
    } else {
        None
    };

    let protected_blocks = if v2.stealth.enabled {
        Some(required(
            FieldId::V2ProtectedBlocks,
            &v2.stealth.protected_blocks,
            parse_seconds,
        )?)
    } else {
        None
    };

    Ok(V2Payload {
        trading_mode: v2.trading_mode,
        enable_delay,
        initial_liquidity_wei: required(FieldId::V2InitialLiquidity, &v2.initial_liquidity, |t| {
            to_base_units(t, TOKEN_DECIMALS).map(|wei| wei.to_string())
        })?,
        liquidity_tokens: required(FieldId::V2LiquidityTokenPct, &v2.liquidity_token_pct, |t| {
            share.of(t)
        })?,
        buy_tax_bps: optional(FieldId::V2BuyTax, &v2.buy_tax, percent_to_bps)?,
        sell_tax_bps: optional(FieldId::V2SellTax, &v2.sell_tax, percent_to_bps)?,
        tax_receiver: optional_text(&v2.tax_receiver),
        max_wallet: optional(FieldId::V2MaxWallet, &v2.max_wallet, |t| share.of(t))?,
        max_tx: optional(FieldId::V2MaxTx, &v2.max_tx, |t| share.of(t))?,
        tax_decay,
        limit_growth,
        protected_blocks,
    })
}

fn links(draft: &LaunchDraft) -> LinksPayload {
    let meta = &draft.meta;
    let remote = |kind: AssetKind| meta.asset(kind).url().map(str::to_string);
    LinksPayload {
        website: optional_text(&meta.website),
        telegram: optional_text(&meta.telegram),
        twitter: optional_text(&meta.twitter),
        logo_url: remote(AssetKind::Logo),
        banner_url: remote(AssetKind::Banner),
        audio_url: remote(AssetKind::Audio),
    }
}

pub fn transform(
    draft: &LaunchDraft,
    ctx: &TransformContext,
) -> Result<SubmissionPayload, TransformError> {
    let mode = draft
        .deployment_mode
        .ok_or(TransformError::MissingDeploymentMode)?;
    let basics = &draft.basics;

    let supply = required(FieldId::TotalSupply, &basics.total_supply, whole_tokens_to_base_units)?;
    let share = SupplyShare { supply };

    let (tax_mode, grad_cap, curve, v2) = match mode {
        DeploymentMode::VirtualCurve => (
            draft.tax_mode,
            optional(FieldId::GradCap, &basics.grad_cap, |t| {
                whole_tokens_to_base_units(t).map(|cap| cap.to_string())
            })?,
            Some(curve_payload(draft, &share)?),
            None,
        ),
        DeploymentMode::V2Launch => (None, None, None, Some(v2_payload(&draft.v2, &share)?)),
    };

    let start_time = match basics.start_mode {
        StartMode::Now => None,
        StartMode::Schedule => Some(
            parse_launch_date_time(&basics.launch_date_time)
                .ok_or_else(|| TransformError::InvalidLaunchDate(basics.launch_date_time.clone()))?,
        ),
    };

    let lock_seconds = match basics.lp_mode {
        LpMode::Lock => Some(required(FieldId::LockDays, &basics.lock_days, |t| {
            parse_seconds(t)?
                .checked_mul(SECONDS_PER_DAY)
                .ok_or(NumberError::Overflow)
        })?),
        LpMode::Burn => None,
    };

    let name = optional_text(&basics.name).ok_or(TransformError::MissingField(FieldId::Name))?;
    let symbol =
        optional_text(&basics.symbol).ok_or(TransformError::MissingField(FieldId::Symbol))?;

    Ok(SubmissionPayload {
        token_type: mode.token_type(),
        tax_mode,
        name,
        symbol,
        bio: compose_bio(&basics.token_category, &draft.meta.description),
        total_supply: supply.to_string(),
        grad_cap,
        start_time,
        lp_mode: basics.lp_mode,
        lock_seconds,
        remove_header: basics.remove_header,
        stealth: basics.stealth,
        curve,
        v2,
        links: links(draft),
        auto_brand: draft.meta.auto_brand,
        creation_fee_wei: draft.fees.creation.map(|fee| fee.to_string()),
        platform_fee_bps: draft.fees.platform_bps,
        token_address: ctx.token_address.as_deref().and_then(optional_text),
        timestamp: ctx.timestamp,
    })
}
