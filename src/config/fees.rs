//! Fee schedule constants. All amounts are in wei of the chain's native coin.

/// Creation fees, keyed by profile and tax mode
pub struct CreationFees {
    /// ZERO and SUPER launch for free
    pub untaxed_wei: u128,
    /// BASIC profile under the BASIC tax mode (0.003)
    pub basic_taxed_wei: u128,
    /// BASIC profile quoted under any other tax mode (0.001)
    pub basic_untaxed_wei: u128,
    /// ADVANCED profile (0.01)
    pub advanced_wei: u128,
}

/// Platform fee on curve trades, in basis points
pub struct PlatformFees {
    pub advanced_bps: u32,
    pub basic_bps: u32,
    pub default_bps: u32,
}

/// Optional extras added on top of the creation fee
pub struct AddonFees {
    pub headerless_wei: u128,
    pub stealth_wei: u128,
    pub locker_wei: u128,
    /// Charged when the curve graduates, shown for information only
    pub graduation_wei: u128,
}

/// The Master Fee Configuration
pub struct FeeConfig {
    pub creation: CreationFees,
    pub platform: PlatformFees,
    pub addons: AddonFees,
}

pub const FEES: FeeConfig = FeeConfig {
    creation: CreationFees {
        untaxed_wei: 0,
        basic_taxed_wei: 3_000_000_000_000_000,
        basic_untaxed_wei: 1_000_000_000_000_000,
        advanced_wei: 10_000_000_000_000_000,
    },
    platform: PlatformFees {
        advanced_bps: 100,
        basic_bps: 60,
        default_bps: 30,
    },
    addons: AddonFees {
        headerless_wei: 2_000_000_000_000_000,
        stealth_wei: 2_000_000_000_000_000,
        locker_wei: 1_000_000_000_000_000,
        graduation_wei: 100_000_000_000_000_000,
    },
};
