pub mod time_utils;
pub mod units;

pub use time_utils::TimeUtils;
pub use units::{
    FixedDecimal, NumberError, from_base_units, parse_decimal, parse_integer,
    percent_of_supply_to_base_units, percent_to_bps, safe_parse_decimal, safe_parse_u64,
    to_base_units,
};
