use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Top-level launch style. Decides the step sequence and the payload `token_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentMode {
    #[strum(to_string = "Virtual curve")]
    VirtualCurve,
    #[strum(to_string = "V2 launch")]
    V2Launch,
}

impl DeploymentMode {
    pub fn token_type(self) -> u8 {
        match self {
            DeploymentMode::VirtualCurve => 0,
            DeploymentMode::V2Launch => 1,
        }
    }
}

/// Only meaningful for virtual-curve launches; constrains the selectable profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxMode {
    #[strum(to_string = "Taxed")]
    Basic,
    #[strum(to_string = "No tax")]
    NoTax,
}

impl TaxMode {
    pub fn allowed_profiles(self) -> &'static [Profile] {
        match self {
            TaxMode::NoTax => &[Profile::Zero, Profile::Super],
            TaxMode::Basic => &[Profile::Basic, Profile::Advanced],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    #[strum(to_string = "Zero")]
    Zero,
    #[strum(to_string = "Super")]
    Super,
    #[strum(to_string = "Basic")]
    Basic,
    #[strum(to_string = "Advanced")]
    Advanced,
}

impl Profile {
    pub fn is_allowed_under(self, tax_mode: TaxMode) -> bool {
        tax_mode.allowed_profiles().contains(&self)
    }
}

pub fn is_profile_allowed(profile: Profile, tax_mode: TaxMode) -> bool {
    profile.is_allowed_under(tax_mode)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, Display)]
pub enum StartMode {
    #[default]
    #[strum(to_string = "Launch now")]
    Now,
    #[strum(to_string = "Schedule")]
    Schedule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LpMode {
    #[default]
    #[strum(to_string = "Lock LP")]
    Lock,
    #[strum(to_string = "Burn LP")]
    Burn,
}

/// Tax regime once the curve's timed schedule ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, Display)]
pub enum FinalType {
    #[default]
    #[strum(to_string = "No tax")]
    NoTax,
    #[strum(to_string = "Fixed tax")]
    Tax,
}

/// How trading opens on a V2 launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TradingMode {
    #[default]
    #[strum(to_string = "Immediately")]
    Immediate,
    #[strum(to_string = "Manually")]
    Manual,
    #[strum(to_string = "After a delay")]
    Delayed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn untaxed_profiles_only_under_no_tax() {
        for profile in [Profile::Zero, Profile::Super] {
            assert!(is_profile_allowed(profile, TaxMode::NoTax));
            assert!(!is_profile_allowed(profile, TaxMode::Basic));
        }
        for profile in [Profile::Basic, Profile::Advanced] {
            assert!(is_profile_allowed(profile, TaxMode::Basic));
            assert!(!is_profile_allowed(profile, TaxMode::NoTax));
        }
    }

    #[test]
    fn every_profile_belongs_to_exactly_one_tax_mode() {
        for profile in Profile::iter() {
            let owners = TaxMode::iter()
                .filter(|mode| profile.is_allowed_under(*mode))
                .count();
            assert_eq!(owners, 1, "{profile} should have a single tax mode");
        }
    }

    #[test]
    fn token_type_per_deployment_mode() {
        assert_eq!(DeploymentMode::VirtualCurve.token_type(), 0);
        assert_eq!(DeploymentMode::V2Launch.token_type(), 1);
    }
}
