pub mod schedule;

pub use schedule::{FeeQuote, creation_fee, platform_fee_bps, quote_fees};
