//! Creation and platform fees as pure functions of the launch choices.
//!
//! The wizard stores the resulting `FeeQuote` on the draft at the single
//! point where profile / tax mode / deployment mode change.

use ruint::aliases::U256;

use crate::config::FEES;
use crate::domain::{BasicsInput, DeploymentMode, LpMode, Profile, TaxMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeeQuote {
    /// `None` until a profile is chosen
    pub creation: Option<U256>,
    pub platform_bps: u32,
    pub headerless_addon: U256,
    pub stealth_addon: U256,
    /// Zero for launches without a curve
    pub graduation_fee: U256,
    pub locker_fee: U256,
}

impl FeeQuote {
    /// Amount due at creation for the chosen extras, in wei.
    pub fn total_due(&self, basics: &BasicsInput) -> U256 {
        let mut total = self.creation.unwrap_or(U256::ZERO);
        if basics.remove_header {
            total = total.saturating_add(self.headerless_addon);
        }
        if basics.stealth {
            total = total.saturating_add(self.stealth_addon);
        }
        if basics.lp_mode == LpMode::Lock {
            total = total.saturating_add(self.locker_fee);
        }
        total
    }

    pub fn platform_pct_label(&self) -> String {
        format!("{}.{:02}%", self.platform_bps / 100, self.platform_bps % 100)
    }
}

pub fn creation_fee(profile: Option<Profile>, tax_mode: Option<TaxMode>) -> Option<U256> {
    let wei = match profile? {
        Profile::Zero | Profile::Super => FEES.creation.untaxed_wei,
        Profile::Basic if tax_mode == Some(TaxMode::Basic) => FEES.creation.basic_taxed_wei,
        Profile::Basic => FEES.creation.basic_untaxed_wei,
        Profile::Advanced => FEES.creation.advanced_wei,
    };
    Some(U256::from(wei))
}

/// 100 bps = 1.0%
pub fn platform_fee_bps(profile: Option<Profile>) -> u32 {
    match profile {
        Some(Profile::Advanced) => FEES.platform.advanced_bps,
        Some(Profile::Basic) => FEES.platform.basic_bps,
        _ => FEES.platform.default_bps,
    }
}

pub fn quote_fees(
    deployment_mode: Option<DeploymentMode>,
    profile: Option<Profile>,
    tax_mode: Option<TaxMode>,
) -> FeeQuote {
    // A profile left over from a curve draft does not price a V2 launch
    let (creation, platform_bps, graduation_fee) = match deployment_mode {
        Some(DeploymentMode::V2Launch) => (None, FEES.platform.default_bps, U256::ZERO),
        Some(DeploymentMode::VirtualCurve) => (
            creation_fee(profile, tax_mode),
            platform_fee_bps(profile),
            U256::from(FEES.addons.graduation_wei),
        ),
        None => (creation_fee(profile, tax_mode), platform_fee_bps(profile), U256::ZERO),
    };

    FeeQuote {
        creation,
        platform_bps,
        headerless_addon: U256::from(FEES.addons.headerless_wei),
        stealth_addon: U256::from(FEES.addons.stealth_wei),
        graduation_fee,
        locker_fee: U256::from(FEES.addons.locker_wei),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::chain_defaults;
    use crate::domain::LaunchDraft;
    use crate::utils::to_base_units;

    fn eth(amount: &str) -> U256 {
        to_base_units(amount, 18).unwrap()
    }

    #[test]
    fn creation_fee_per_profile() {
        assert_eq!(creation_fee(Some(Profile::Zero), Some(TaxMode::NoTax)), Some(U256::ZERO));
        assert_eq!(creation_fee(Some(Profile::Super), Some(TaxMode::NoTax)), Some(U256::ZERO));
        assert_eq!(
            creation_fee(Some(Profile::Basic), Some(TaxMode::Basic)),
            Some(eth("0.003"))
        );
        // Untaxed Basic is only a preview price; the tax-profile step refuses NO_TAX + BASIC
        assert_eq!(creation_fee(Some(Profile::Basic), None), Some(eth("0.001")));
        assert_eq!(
            creation_fee(Some(Profile::Advanced), Some(TaxMode::Basic)),
            Some(eth("0.01"))
        );
        assert_eq!(creation_fee(None, Some(TaxMode::Basic)), None);
    }

    #[test]
    fn platform_fee_per_profile() {
        assert_eq!(platform_fee_bps(Some(Profile::Advanced)), 100);
        assert_eq!(platform_fee_bps(Some(Profile::Basic)), 60);
        assert_eq!(platform_fee_bps(Some(Profile::Zero)), 30);
        assert_eq!(platform_fee_bps(None), 30);
        let quote = quote_fees(None, Some(Profile::Basic), None);
        assert_eq!(quote.platform_pct_label(), "0.60%");
    }

    #[test]
    fn curve_fees_only_for_curves() {
        let curve = quote_fees(Some(DeploymentMode::VirtualCurve), None, None);
        let v2 = quote_fees(
            Some(DeploymentMode::V2Launch),
            Some(Profile::Advanced),
            Some(TaxMode::Basic),
        );
        assert_eq!(curve.graduation_fee, eth("0.1"));
        assert_eq!(v2.graduation_fee, U256::ZERO);
        assert_eq!(v2.creation, None, "V2 launches ignore curve profiles");
        assert_eq!(v2.platform_bps, 30);
    }

    #[test]
    fn total_due_adds_selected_extras() {
        let mut draft = LaunchDraft::with_defaults(&chain_defaults(1));
        let quote = quote_fees(
            Some(DeploymentMode::VirtualCurve),
            Some(Profile::Advanced),
            Some(TaxMode::Basic),
        );

        draft.basics.lp_mode = LpMode::Burn;
        assert_eq!(quote.total_due(&draft.basics), eth("0.01"));

        draft.basics.lp_mode = LpMode::Lock;
        draft.basics.remove_header = true;
        draft.basics.stealth = true;
        assert_eq!(quote.total_due(&draft.basics), eth("0.015"));
    }
}
