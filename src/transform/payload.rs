use serde::Serialize;

use crate::domain::{LpMode, Profile, TaxMode, TradingMode};

/// Request handed to the submission collaborator.
///
/// Amounts are base-unit (or wei) integers rendered as decimal strings so they
/// survive JSON without precision loss. Fields whose source input was left
/// blank are omitted, letting the receiving service apply its own defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    /// 0 = virtual curve, 1 = V2
    pub token_type: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_mode: Option<TaxMode>,
    pub name: String,
    pub symbol: String,
    /// Description with the category folded in as a `[category]` prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub total_supply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grad_cap: Option<String>,
    /// Epoch seconds; absent means "launch on confirmation"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    pub lp_mode: LpMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_seconds: Option<u64>,
    pub remove_header: bool,
    pub stealth: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<CurvePayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v2: Option<V2Payload>,
    #[serde(flatten)]
    pub links: LinksPayload,
    pub auto_brand: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_fee_wei: Option<String>,
    pub platform_fee_bps: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_address: Option<String>,
    /// Caller supplied, the only field allowed to differ between two runs
    pub timestamp: i64,
}

/// Post-curve tax, in basis points. Absent when the final type is "no tax".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalTaxPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_tax_bps: Option<u32>,
}

/// Profile-specific curve settings; the `profile` tag routes the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "profile", rename_all = "snake_case")]
pub enum CurvePayload {
    Zero {
        #[serde(flatten)]
        final_tax: FinalTaxPayload,
    },
    Super {
        #[serde(skip_serializing_if = "Option::is_none")]
        max_wallet: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_tx: Option<String>,
        #[serde(flatten)]
        final_tax: FinalTaxPayload,
    },
    Basic {
        start_tax_bps: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        tax_duration: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_wallet: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_wallet_duration: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_tx: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_tx_duration: Option<u64>,
        #[serde(flatten)]
        final_tax: FinalTaxPayload,
    },
    Advanced {
        start_tax_bps: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        tax_step_bps: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        tax_interval: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_wallet_start: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_wallet_step: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_wallet_interval: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_tx_start: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_tx_step: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_tx_interval: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        remove_after: Option<u64>,
        tax_receiver: String,
        #[serde(flatten)]
        final_tax: FinalTaxPayload,
    },
}

impl CurvePayload {
    pub fn profile(&self) -> Profile {
        match self {
            CurvePayload::Zero { .. } => Profile::Zero,
            CurvePayload::Super { .. } => Profile::Super,
            CurvePayload::Basic { .. } => Profile::Basic,
            CurvePayload::Advanced { .. } => Profile::Advanced,
        }
    }
}

/// A "change by `step` every `interval` seconds" schedule after conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepSchedulePayload<T> {
    pub step: T,
    pub interval: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct V2Payload {
    pub trading_mode: TradingMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_delay: Option<u64>,
    pub initial_liquidity_wei: String,
    /// Tokens paired into the pool, base units
    pub liquidity_tokens: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_tax_bps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sell_tax_bps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_receiver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_wallet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tx: Option<String>,
    /// Taxes fall by `step` bps per interval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_decay: Option<StepSchedulePayload<u32>>,
    /// Limits grow by `step` base units per interval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_growth: Option<StepSchedulePayload<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected_blocks: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinksPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}
