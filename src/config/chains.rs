//! Per-network defaults picked from the chain identity collaborator.
//!
//! Nothing here feeds validation; the entries only seed the draft and label
//! amounts / links in the presenters.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainDefaults {
    pub chain_id: u64,
    pub name: &'static str,
    pub native_symbol: &'static str,
    /// Transaction link prefix, the tx id is appended verbatim
    pub explorer_tx_url: &'static str,
    pub default_total_supply: &'static str,
    pub default_grad_cap: &'static str,
}

impl ChainDefaults {
    pub fn explorer_link(&self, tx_id: &str) -> String {
        format!("{}{}", self.explorer_tx_url, tx_id)
    }
}

pub const CHAINS: &[ChainDefaults] = &[
    ChainDefaults {
        chain_id: 1,
        name: "Ethereum",
        native_symbol: "ETH",
        explorer_tx_url: "https://etherscan.io/tx/",
        default_total_supply: "1000000000",
        default_grad_cap: "800000000",
    },
    ChainDefaults {
        chain_id: 8453,
        name: "Base",
        native_symbol: "ETH",
        explorer_tx_url: "https://basescan.org/tx/",
        default_total_supply: "1000000000",
        default_grad_cap: "800000000",
    },
    ChainDefaults {
        chain_id: 56,
        name: "BNB Smart Chain",
        native_symbol: "BNB",
        explorer_tx_url: "https://bscscan.com/tx/",
        default_total_supply: "1000000000",
        default_grad_cap: "800000000",
    },
];

/// Used for unknown networks (test nets, local nodes)
pub const FALLBACK_CHAIN: ChainDefaults = ChainDefaults {
    chain_id: 0,
    name: "Unknown network",
    native_symbol: "ETH",
    explorer_tx_url: "https://etherscan.io/tx/",
    default_total_supply: "1000000000",
    default_grad_cap: "800000000",
};

pub fn chain_defaults(chain_id: u64) -> ChainDefaults {
    CHAINS
        .iter()
        .find(|chain| chain.chain_id == chain_id)
        .copied()
        .unwrap_or(FALLBACK_CHAIN)
}
