//! Business limits applied by the validation rules and the request transformer.

/// Decimals used for every launched token's base units.
pub const TOKEN_DECIMALS: u32 = 18;

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Limits for tax percentages
pub struct TaxLimits {
    /// Upper bound for the decaying curve tax (percentage)
    pub max_curve_tax_pct: u32,
    /// Upper bound for the post-curve tax when the final type is TAX (percentage)
    pub max_final_tax_pct: u32,
    /// Upper bound for V2 buy / sell taxes (percentage)
    pub max_v2_tax_pct: u32,
}

/// Liquidity handling limits
pub struct LiquidityLimits {
    /// Minimum lock period when the LP is locked rather than burnt
    pub min_lock_days: u64,
}

/// Free-text limits for the metadata step
pub struct MetadataLimits {
    pub max_description_chars: usize,
}

/// Bounds that keep every converted amount inside U256
pub struct NumberLimits {
    /// Fractional digits accepted on percentage inputs
    pub max_percent_decimals: u32,
    /// Digits accepted on the whole-token total supply
    pub max_supply_digits: u32,
}

/// The Master Launch Configuration
pub struct LaunchConfig {
    pub taxes: TaxLimits,
    pub liquidity: LiquidityLimits,
    pub metadata: MetadataLimits,
    pub numbers: NumberLimits,
    /// Hex digits after the `0x` prefix of an address
    pub address_hex_len: usize,
    /// Accepted formats for the scheduled launch date, tried in order (UTC)
    pub launch_date_formats: &'static [&'static str],
    /// Wraps the token category when it is folded into the bio: `[meme] bio`
    pub category_tag: (&'static str, &'static str),
}

pub const LAUNCH: LaunchConfig = LaunchConfig {
    taxes: TaxLimits {
        max_curve_tax_pct: 100,
        max_final_tax_pct: 5,
        max_v2_tax_pct: 100,
    },
    liquidity: LiquidityLimits { min_lock_days: 30 },
    metadata: MetadataLimits {
        max_description_chars: 1_000,
    },
    numbers: NumberLimits {
        max_percent_decimals: 18,
        max_supply_digits: 30,
    },
    address_hex_len: 40,
    launch_date_formats: &["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"],
    category_tag: ("[", "]"),
};
