use strum_macros::{Display, EnumIter};

use super::profile::DeploymentMode;

/// Named wizard screens. The index a user sees is the position in the
/// sequence of the chosen deployment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum WizardStep {
    #[strum(to_string = "Type")]
    Deployment,
    #[strum(to_string = "Tax & profile")]
    TaxProfile,
    #[strum(to_string = "Basics")]
    Basics,
    #[strum(to_string = "Curve")]
    Curve,
    #[strum(to_string = "Liquidity")]
    V2Liquidity,
    #[strum(to_string = "Tax & limits")]
    V2Limits,
    #[strum(to_string = "Socials & media")]
    Metadata,
    #[strum(to_string = "Review")]
    Review,
    #[strum(to_string = "Result")]
    Result,
}

const UNDECIDED: &[WizardStep] = &[WizardStep::Deployment];

const VIRTUAL_CURVE: &[WizardStep] = &[
    WizardStep::Deployment,
    WizardStep::TaxProfile,
    WizardStep::Basics,
    WizardStep::Curve,
    WizardStep::Metadata,
    WizardStep::Review,
    WizardStep::Result,
];

const V2_LAUNCH: &[WizardStep] = &[
    WizardStep::Deployment,
    WizardStep::Basics,
    WizardStep::V2Liquidity,
    WizardStep::V2Limits,
    WizardStep::Metadata,
    WizardStep::Review,
    WizardStep::Result,
];

/// Linear step order; only step 0 exists until a deployment mode is chosen.
pub fn step_sequence(mode: Option<DeploymentMode>) -> &'static [WizardStep] {
    match mode {
        None => UNDECIDED,
        Some(DeploymentMode::VirtualCurve) => VIRTUAL_CURVE,
        Some(DeploymentMode::V2Launch) => V2_LAUNCH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequences_share_both_ends() {
        for mode in [DeploymentMode::VirtualCurve, DeploymentMode::V2Launch] {
            let steps = step_sequence(Some(mode));
            assert_eq!(steps.len(), 7);
            assert_eq!(steps.first(), Some(&WizardStep::Deployment));
            assert_eq!(steps.last(), Some(&WizardStep::Result));
        }
        assert_eq!(step_sequence(None), &[WizardStep::Deployment]);
    }
}
