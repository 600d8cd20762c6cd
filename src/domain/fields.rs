use strum_macros::{EnumIter, IntoStaticStr};

/// Every free-text input of the draft. The static string is the id used as
/// the error-map key and in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, IntoStaticStr)]
pub enum FieldId {
    #[strum(serialize = "basics.name")]
    Name,
    #[strum(serialize = "basics.symbol")]
    Symbol,
    #[strum(serialize = "basics.totalSupply")]
    TotalSupply,
    #[strum(serialize = "basics.gradCap")]
    GradCap,
    #[strum(serialize = "basics.tokenCategory")]
    TokenCategory,
    #[strum(serialize = "basics.launchDateTime")]
    LaunchDateTime,
    #[strum(serialize = "basics.lockDays")]
    LockDays,

    #[strum(serialize = "curves.zero.finalTax")]
    ZeroFinalTax,

    #[strum(serialize = "curves.super.maxWallet")]
    SuperMaxWallet,
    #[strum(serialize = "curves.super.maxTx")]
    SuperMaxTx,
    #[strum(serialize = "curves.super.finalTax")]
    SuperFinalTax,

    #[strum(serialize = "curves.basic.startTax")]
    BasicStartTax,
    #[strum(serialize = "curves.basic.taxDuration")]
    BasicTaxDuration,
    #[strum(serialize = "curves.basic.maxWallet")]
    BasicMaxWallet,
    #[strum(serialize = "curves.basic.maxWalletDuration")]
    BasicMaxWalletDuration,
    #[strum(serialize = "curves.basic.maxTx")]
    BasicMaxTx,
    #[strum(serialize = "curves.basic.maxTxDuration")]
    BasicMaxTxDuration,
    #[strum(serialize = "curves.basic.finalTax")]
    BasicFinalTax,

    #[strum(serialize = "curves.advanced.startTax")]
    AdvStartTax,
    #[strum(serialize = "curves.advanced.taxStep")]
    AdvTaxStep,
    #[strum(serialize = "curves.advanced.taxInterval")]
    AdvTaxInterval,
    #[strum(serialize = "curves.advanced.maxWStart")]
    AdvMaxWalletStart,
    #[strum(serialize = "curves.advanced.maxWStep")]
    AdvMaxWalletStep,
    #[strum(serialize = "curves.advanced.maxWInterval")]
    AdvMaxWalletInterval,
    #[strum(serialize = "curves.advanced.maxTStart")]
    AdvMaxTxStart,
    #[strum(serialize = "curves.advanced.maxTStep")]
    AdvMaxTxStep,
    #[strum(serialize = "curves.advanced.maxTInterval")]
    AdvMaxTxInterval,
    #[strum(serialize = "curves.advanced.removeAfter")]
    AdvRemoveAfter,
    #[strum(serialize = "curves.advanced.taxReceiver")]
    AdvTaxReceiver,
    #[strum(serialize = "curves.advanced.finalTax")]
    AdvFinalTax,

    #[strum(serialize = "v2.initialLiquidity")]
    V2InitialLiquidity,
    #[strum(serialize = "v2.liquidityTokenPct")]
    V2LiquidityTokenPct,
    #[strum(serialize = "v2.enableDelay")]
    V2EnableDelay,
    #[strum(serialize = "v2.protectedBlocks")]
    V2ProtectedBlocks,
    #[strum(serialize = "v2.buyTax")]
    V2BuyTax,
    #[strum(serialize = "v2.sellTax")]
    V2SellTax,
    #[strum(serialize = "v2.taxReceiver")]
    V2TaxReceiver,
    #[strum(serialize = "v2.maxWallet")]
    V2MaxWallet,
    #[strum(serialize = "v2.maxTx")]
    V2MaxTx,
    #[strum(serialize = "v2.taxDecayStep")]
    V2TaxDecayStep,
    #[strum(serialize = "v2.taxDecayInterval")]
    V2TaxDecayInterval,
    #[strum(serialize = "v2.limitGrowthStep")]
    V2LimitGrowthStep,
    #[strum(serialize = "v2.limitGrowthInterval")]
    V2LimitGrowthInterval,

    #[strum(serialize = "meta.description")]
    Description,
    #[strum(serialize = "meta.website")]
    Website,
    #[strum(serialize = "meta.telegram")]
    Telegram,
    #[strum(serialize = "meta.twitter")]
    Twitter,
}

impl FieldId {
    pub fn id(self) -> &'static str {
        self.into()
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Symbol => "Symbol",
            FieldId::TotalSupply => "Total supply",
            FieldId::GradCap => "Graduation cap",
            FieldId::TokenCategory => "Category",
            FieldId::LaunchDateTime => "Launch date (UTC)",
            FieldId::LockDays => "Lock days",
            FieldId::ZeroFinalTax
            | FieldId::SuperFinalTax
            | FieldId::BasicFinalTax
            | FieldId::AdvFinalTax => "Final tax %",
            FieldId::SuperMaxWallet | FieldId::BasicMaxWallet | FieldId::V2MaxWallet => {
                "Max wallet %"
            }
            FieldId::SuperMaxTx | FieldId::BasicMaxTx | FieldId::V2MaxTx => "Max tx %",
            FieldId::BasicStartTax | FieldId::AdvStartTax => "Start tax %",
            FieldId::BasicTaxDuration => "Tax duration (s)",
            FieldId::BasicMaxWalletDuration => "Max wallet duration (s)",
            FieldId::BasicMaxTxDuration => "Max tx duration (s)",
            FieldId::AdvTaxStep => "Tax decrease per step %",
            FieldId::AdvTaxInterval => "Tax step interval (s)",
            FieldId::AdvMaxWalletStart => "Max wallet start %",
            FieldId::AdvMaxWalletStep => "Max wallet increase per step %",
            FieldId::AdvMaxWalletInterval => "Max wallet step interval (s)",
            FieldId::AdvMaxTxStart => "Max tx start %",
            FieldId::AdvMaxTxStep => "Max tx increase per step %",
            FieldId::AdvMaxTxInterval => "Max tx step interval (s)",
            FieldId::AdvRemoveAfter => "Remove limits after (s)",
            FieldId::AdvTaxReceiver | FieldId::V2TaxReceiver => "Tax receiver",
            FieldId::V2InitialLiquidity => "Initial liquidity",
            FieldId::V2LiquidityTokenPct => "Supply paired %",
            FieldId::V2EnableDelay => "Enable trading after (s)",
            FieldId::V2ProtectedBlocks => "Protected blocks",
            FieldId::V2BuyTax => "Buy tax %",
            FieldId::V2SellTax => "Sell tax %",
            FieldId::V2TaxDecayStep => "Tax decrease per step %",
            FieldId::V2TaxDecayInterval => "Tax step interval (s)",
            FieldId::V2LimitGrowthStep => "Limit increase per step %",
            FieldId::V2LimitGrowthInterval => "Limit step interval (s)",
            FieldId::Description => "Description",
            FieldId::Website => "Website",
            FieldId::Telegram => "Telegram",
            FieldId::Twitter => "X / Twitter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn field_ids_are_unique() {
        let ids: HashSet<&str> = FieldId::iter().map(FieldId::id).collect();
        assert_eq!(ids.len(), FieldId::iter().count());
        assert_eq!(FieldId::AdvTaxInterval.id(), "curves.advanced.taxInterval");
    }
}
