use crate::config::{ChainDefaults, chain_defaults};

/// Supplies the active network. Only used to pick default values.
pub trait ChainIdentity {
    fn chain_id(&self) -> u64;

    fn defaults(&self) -> ChainDefaults {
        chain_defaults(self.chain_id())
    }
}

/// A fixed network id, e.g. from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticChain(pub u64);

impl ChainIdentity for StaticChain {
    fn chain_id(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_chain_id() {
        assert_eq!(StaticChain(56).defaults().native_symbol, "BNB");
        assert_eq!(StaticChain(8453).defaults().name, "Base");
        assert_eq!(StaticChain(31337).defaults().chain_id, 0, "unknown networks fall back");
    }
}
