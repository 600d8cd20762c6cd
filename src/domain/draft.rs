//! The in-memory launch configuration edited across the wizard's steps.
//!
//! Text inputs are kept exactly as typed; parsing happens in validation and in
//! the request transformer so a half-typed value never loses characters.

use crate::config::ChainDefaults;
use crate::fees::FeeQuote;

use super::assets::{AssetKind, AssetSource};
use super::fields::FieldId;
use super::profile::{
    DeploymentMode, FinalType, LpMode, Profile, StartMode, TaxMode, TradingMode,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicsInput {
    pub name: String,
    pub symbol: String,
    /// Whole tokens
    pub total_supply: String,
    /// Whole tokens, optional
    pub grad_cap: String,
    pub token_category: String,
    pub start_mode: StartMode,
    /// Only read when `start_mode` is `Schedule`
    pub launch_date_time: String,
    pub lp_mode: LpMode,
    pub lock_days: String,
    pub remove_header: bool,
    pub stealth: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FinalSettings {
    pub final_type: FinalType,
    pub final_tax: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ZeroCurve {
    pub final_settings: FinalSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperCurve {
    pub max_wallet: String,
    pub max_tx: String,
    pub final_settings: FinalSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCurve {
    pub start_tax: String,
    pub tax_duration: String,
    pub max_wallet: String,
    pub max_wallet_duration: String,
    pub max_tx: String,
    pub max_tx_duration: String,
    pub final_settings: FinalSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvancedCurve {
    pub start_tax: String,
    pub tax_step: String,
    pub tax_interval: String,
    pub max_wallet_start: String,
    pub max_wallet_step: String,
    pub max_wallet_interval: String,
    pub max_tx_start: String,
    pub max_tx_step: String,
    pub max_tx_interval: String,
    pub remove_after: String,
    pub tax_receiver: String,
    pub final_settings: FinalSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveSettings {
    pub zero: ZeroCurve,
    pub super_curve: SuperCurve,
    pub basic: BasicCurve,
    pub advanced: AdvancedCurve,
}

impl CurveSettings {
    pub fn final_settings(&self, profile: Profile) -> &FinalSettings {
        match profile {
            Profile::Zero => &self.zero.final_settings,
            Profile::Super => &self.super_curve.final_settings,
            Profile::Basic => &self.basic.final_settings,
            Profile::Advanced => &self.advanced.final_settings,
        }
    }

    pub fn final_settings_mut(&mut self, profile: Profile) -> &mut FinalSettings {
        match profile {
            Profile::Zero => &mut self.zero.final_settings,
            Profile::Super => &mut self.super_curve.final_settings,
            Profile::Basic => &mut self.basic.final_settings,
            Profile::Advanced => &mut self.advanced.final_settings,
        }
    }
}

/// A "change by `step` every `interval` seconds" schedule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepSchedule {
    pub enabled: bool,
    pub step: String,
    pub interval: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StealthConfig {
    pub enabled: bool,
    pub protected_blocks: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct V2Settings {
    pub trading_mode: TradingMode,
    pub enable_delay: String,
    /// Native coin paired at launch
    pub initial_liquidity: String,
    pub liquidity_token_pct: String,
    pub buy_tax: String,
    pub sell_tax: String,
    pub tax_receiver: String,
    pub max_wallet: String,
    pub max_tx: String,
    pub tax_decay: StepSchedule,
    pub limit_growth: StepSchedule,
    pub stealth: StealthConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetaInput {
    pub description: String,
    pub website: String,
    pub telegram: String,
    pub twitter: String,
    pub logo: AssetSource,
    pub banner: AssetSource,
    pub audio: AssetSource,
    pub auto_brand: bool,
}

impl MetaInput {
    pub fn asset(&self, kind: AssetKind) -> &AssetSource {
        match kind {
            AssetKind::Logo => &self.logo,
            AssetKind::Banner => &self.banner,
            AssetKind::Audio => &self.audio,
        }
    }

    pub fn asset_mut(&mut self, kind: AssetKind) -> &mut AssetSource {
        match kind {
            AssetKind::Logo => &mut self.logo,
            AssetKind::Banner => &mut self.banner,
            AssetKind::Audio => &mut self.audio,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchDraft {
    pub deployment_mode: Option<DeploymentMode>,
    pub tax_mode: Option<TaxMode>,
    pub profile: Option<Profile>,
    pub basics: BasicsInput,
    pub curves: CurveSettings,
    pub v2: V2Settings,
    pub meta: MetaInput,
    /// Derived from deployment mode, profile and tax mode. Never edited directly.
    pub fees: FeeQuote,
}

impl LaunchDraft {
    pub fn with_defaults(chain: &ChainDefaults) -> Self {
        Self {
            deployment_mode: None,
            tax_mode: None,
            profile: None,
            basics: BasicsInput {
                name: String::new(),
                symbol: String::new(),
                total_supply: chain.default_total_supply.to_string(),
                grad_cap: chain.default_grad_cap.to_string(),
                token_category: String::new(),
                start_mode: StartMode::Now,
                launch_date_time: String::new(),
                lp_mode: LpMode::Lock,
                lock_days: "30".to_string(),
                remove_header: false,
                stealth: false,
            },
            curves: CurveSettings {
                zero: ZeroCurve::default(),
                super_curve: SuperCurve {
                    max_wallet: "2".to_string(),
                    max_tx: "1".to_string(),
                    final_settings: FinalSettings::default(),
                },
                basic: BasicCurve {
                    start_tax: "5".to_string(),
                    tax_duration: "3600".to_string(),
                    max_wallet: "2".to_string(),
                    max_wallet_duration: "3600".to_string(),
                    max_tx: "1".to_string(),
                    max_tx_duration: "3600".to_string(),
                    final_settings: FinalSettings::default(),
                },
                advanced: AdvancedCurve {
                    start_tax: "20".to_string(),
                    tax_step: "1".to_string(),
                    tax_interval: "60".to_string(),
                    max_wallet_start: "1".to_string(),
                    max_wallet_step: "0.5".to_string(),
                    max_wallet_interval: "300".to_string(),
                    max_tx_start: "0.5".to_string(),
                    max_tx_step: "0.25".to_string(),
                    max_tx_interval: "300".to_string(),
                    remove_after: "86400".to_string(),
                    tax_receiver: String::new(),
                    final_settings: FinalSettings::default(),
                },
            },
            v2: V2Settings {
                trading_mode: TradingMode::Immediate,
                enable_delay: String::new(),
                initial_liquidity: String::new(),
                liquidity_token_pct: "100".to_string(),
                buy_tax: "0".to_string(),
                sell_tax: "0".to_string(),
                tax_receiver: String::new(),
                max_wallet: String::new(),
                max_tx: String::new(),
                tax_decay: StepSchedule::default(),
                limit_growth: StepSchedule::default(),
                stealth: StealthConfig::default(),
            },
            meta: MetaInput::default(),
            fees: FeeQuote::default(),
        }
    }

    pub fn text(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.basics.name,
            FieldId::Symbol => &self.basics.symbol,
            FieldId::TotalSupply => &self.basics.total_supply,
            FieldId::GradCap => &self.basics.grad_cap,
            FieldId::TokenCategory => &self.basics.token_category,
            FieldId::LaunchDateTime => &self.basics.launch_date_time,
            FieldId::LockDays => &self.basics.lock_days,
            FieldId::ZeroFinalTax => &self.curves.zero.final_settings.final_tax,
            FieldId::SuperMaxWallet => &self.curves.super_curve.max_wallet,
            FieldId::SuperMaxTx => &self.curves.super_curve.max_tx,
            FieldId::SuperFinalTax => &self.curves.super_curve.final_settings.final_tax,
            FieldId::BasicStartTax => &self.curves.basic.start_tax,
            FieldId::BasicTaxDuration => &self.curves.basic.tax_duration,
            FieldId::BasicMaxWallet => &self.curves.basic.max_wallet,
            FieldId::BasicMaxWalletDuration => &self.curves.basic.max_wallet_duration,
            FieldId::BasicMaxTx => &self.curves.basic.max_tx,
            FieldId::BasicMaxTxDuration => &self.curves.basic.max_tx_duration,
            FieldId::BasicFinalTax => &self.curves.basic.final_settings.final_tax,
            FieldId::AdvStartTax => &self.curves.advanced.start_tax,
            FieldId::AdvTaxStep => &self.curves.advanced.tax_step,
            FieldId::AdvTaxInterval => &self.curves.advanced.tax_interval,
            FieldId::AdvMaxWalletStart => &self.curves.advanced.max_wallet_start,
            FieldId::AdvMaxWalletStep => &self.curves.advanced.max_wallet_step,
            FieldId::AdvMaxWalletInterval => &self.curves.advanced.max_wallet_interval,
            FieldId::AdvMaxTxStart => &self.curves.advanced.max_tx_start,
            FieldId::AdvMaxTxStep => &self.curves.advanced.max_tx_step,
            FieldId::AdvMaxTxInterval => &self.curves.advanced.max_tx_interval,
            FieldId::AdvRemoveAfter => &self.curves.advanced.remove_after,
            FieldId::AdvTaxReceiver => &self.curves.advanced.tax_receiver,
            FieldId::AdvFinalTax => &self.curves.advanced.final_settings.final_tax,
            FieldId::V2InitialLiquidity => &self.v2.initial_liquidity,
            FieldId::V2LiquidityTokenPct => &self.v2.liquidity_token_pct,
            FieldId::V2EnableDelay => &self.v2.enable_delay,
            FieldId::V2ProtectedBlocks => &self.v2.stealth.protected_blocks,
            FieldId::V2BuyTax => &self.v2.buy_tax,
            FieldId::V2SellTax => &self.v2.sell_tax,
            FieldId::V2TaxReceiver => &self.v2.tax_receiver,
            FieldId::V2MaxWallet => &self.v2.max_wallet,
            FieldId::V2MaxTx => &self.v2.max_tx,
            FieldId::V2TaxDecayStep => &self.v2.tax_decay.step,
            FieldId::V2TaxDecayInterval => &self.v2.tax_decay.interval,
            FieldId::V2LimitGrowthStep => &self.v2.limit_growth.step,
            FieldId::V2LimitGrowthInterval => &self.v2.limit_growth.interval,
            FieldId::Description => &self.meta.description,
            FieldId::Website => &self.meta.website,
            FieldId::Telegram => &self.meta.telegram,
            FieldId::Twitter => &self.meta.twitter,
        }
    }

    pub fn text_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::Name => &mut self.basics.name,
            FieldId::Symbol => &mut self.basics.symbol,
            FieldId::TotalSupply => &mut self.basics.total_supply,
            FieldId::GradCap => &mut self.basics.grad_cap,
            FieldId::TokenCategory => &mut self.basics.token_category,
            FieldId::LaunchDateTime => &mut self.basics.launch_date_time,
            FieldId::LockDays => &mut self.basics.lock_days,
            FieldId::ZeroFinalTax => &mut self.curves.zero.final_settings.final_tax,
            FieldId::SuperMaxWallet => &mut self.curves.super_curve.max_wallet,
            FieldId::SuperMaxTx => &mut self.curves.super_curve.max_tx,
            FieldId::SuperFinalTax => &mut self.curves.super_curve.final_settings.final_tax,
            FieldId::BasicStartTax => &mut self.curves.basic.start_tax,
            FieldId::BasicTaxDuration => &mut self.curves.basic.tax_duration,
            FieldId::BasicMaxWallet => &mut self.curves.basic.max_wallet,
            FieldId::BasicMaxWalletDuration => &mut self.curves.basic.max_wallet_duration,
            FieldId::BasicMaxTx => &mut self.curves.basic.max_tx,
            FieldId::BasicMaxTxDuration => &mut self.curves.basic.max_tx_duration,
            FieldId::BasicFinalTax => &mut self.curves.basic.final_settings.final_tax,
            FieldId::AdvStartTax => &mut self.curves.advanced.start_tax,
            FieldId::AdvTaxStep => &mut self.curves.advanced.tax_step,
            FieldId::AdvTaxInterval => &mut self.curves.advanced.tax_interval,
            FieldId::AdvMaxWalletStart => &mut self.curves.advanced.max_wallet_start,
            FieldId::AdvMaxWalletStep => &mut self.curves.advanced.max_wallet_step,
            FieldId::AdvMaxWalletInterval => &mut self.curves.advanced.max_wallet_interval,
            FieldId::AdvMaxTxStart => &mut self.curves.advanced.max_tx_start,
            FieldId::AdvMaxTxStep => &mut self.curves.advanced.max_tx_step,
            FieldId::AdvMaxTxInterval => &mut self.curves.advanced.max_tx_interval,
            FieldId::AdvRemoveAfter => &mut self.curves.advanced.remove_after,
            FieldId::AdvTaxReceiver => &mut self.curves.advanced.tax_receiver,
            FieldId::AdvFinalTax => &mut self.curves.advanced.final_settings.final_tax,
            FieldId::V2InitialLiquidity => &mut self.v2.initial_liquidity,
            FieldId::V2LiquidityTokenPct => &mut self.v2.liquidity_token_pct,
            FieldId::V2EnableDelay => &mut self.v2.enable_delay,
            FieldId::V2ProtectedBlocks => &mut self.v2.stealth.protected_blocks,
            FieldId::V2BuyTax => &mut self.v2.buy_tax,
            FieldId::V2SellTax => &mut self.v2.sell_tax,
            FieldId::V2TaxReceiver => &mut self.v2.tax_receiver,
            FieldId::V2MaxWallet => &mut self.v2.max_wallet,
            FieldId::V2MaxTx => &mut self.v2.max_tx,
            FieldId::V2TaxDecayStep => &mut self.v2.tax_decay.step,
            FieldId::V2TaxDecayInterval => &mut self.v2.tax_decay.interval,
            FieldId::V2LimitGrowthStep => &mut self.v2.limit_growth.step,
            FieldId::V2LimitGrowthInterval => &mut self.v2.limit_growth.interval,
            FieldId::Description => &mut self.meta.description,
            FieldId::Website => &mut self.meta.website,
            FieldId::Telegram => &mut self.meta.telegram,
            FieldId::Twitter => &mut self.meta.twitter,
        }
    }
}
