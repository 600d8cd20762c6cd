//! Integer-only conversions between human-entered decimal strings and base units.
//!
//! Nothing in here touches floating point. Decimal strings are parsed into an
//! exact `mantissa / 10^scale` pair and every conversion truncates at the final
//! integer division, so a converted amount never exceeds the stated value.
//! Both `.` and `,` are accepted as the decimal separator.

use std::cmp::Ordering;

use ruint::aliases::U256;
use thiserror::Error;

/// Longest fractional part we accept; keeps `10^scale * 100` well inside U256.
pub const MAX_DECIMAL_SCALE: u32 = 60;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    #[error("malformed number: '{0}'")]
    MalformedNumber(String),
    #[error("'{input}' has more than {decimals} decimal places")]
    TooManyDecimals { input: String, decimals: u32 },
    #[error("arithmetic overflow")]
    Overflow,
}

/// An exact non-negative decimal: `mantissa / 10^scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDecimal {
    pub mantissa: U256,
    pub scale: u32,
}

impl FixedDecimal {
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    /// Compare against a whole number without leaving integer arithmetic.
    pub fn cmp_whole(&self, whole: u64) -> Ordering {
        match pow10(self.scale).and_then(|factor| U256::from(whole).checked_mul(factor)) {
            Some(rhs) => self.mantissa.cmp(&rhs),
            // `whole * 10^scale` does not fit, so it is larger than any mantissa we parsed
            None => Ordering::Less,
        }
    }

    /// True when `min <= self <= max`.
    pub fn within(&self, min: u64, max: u64) -> bool {
        self.cmp_whole(min) != Ordering::Less && self.cmp_whole(max) != Ordering::Greater
    }

    /// `floor(self * 10^decimals)`
    pub fn floor_scaled(&self, decimals: u32) -> Result<U256, NumberError> {
        if self.scale <= decimals {
            let factor = pow10(decimals - self.scale).ok_or(NumberError::Overflow)?;
            self.mantissa
                .checked_mul(factor)
                .ok_or(NumberError::Overflow)
        } else {
            let divisor = pow10(self.scale - decimals).ok_or(NumberError::Overflow)?;
            Ok(self.mantissa / divisor)
        }
    }
}

/// `10^exp`, or `None` once it no longer fits in 256 bits.
pub fn pow10(exp: u32) -> Option<U256> {
    let ten = U256::from(10u64);
    let mut acc = U256::from(1u64);
    for _ in 0..exp {
        acc = acc.checked_mul(ten)?;
    }
    Some(acc)
}

pub fn normalize_decimal(input: &str) -> String {
    input.trim().replace(',', ".")
}

fn accumulate_digits(digits: &str) -> Result<U256, NumberError> {
    let ten = U256::from(10u64);
    let mut acc = U256::ZERO;
    for byte in digits.bytes() {
        let digit = U256::from(u64::from(byte - b'0'));
        acc = acc
            .checked_mul(ten)
            .and_then(|shifted| shifted.checked_add(digit))
            .ok_or(NumberError::Overflow)?;
    }
    Ok(acc)
}

/// Parse `123`, `1.5`, `1,5`, `.5` or `5.` into an exact decimal.
/// Signs, exponents, grouping and inner whitespace are rejected.
pub fn parse_decimal(input: &str) -> Result<FixedDecimal, NumberError> {
    let normalized = normalize_decimal(input);
    let (int_part, frac_part) = normalized
        .split_once('.')
        .unwrap_or((normalized.as_str(), ""));

    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty()) || !is_digits(int_part) || !is_digits(frac_part)
    {
        return Err(NumberError::MalformedNumber(input.to_string()));
    }

    let scale = u32::try_from(frac_part.len()).map_err(|_| NumberError::Overflow)?;
    if scale > MAX_DECIMAL_SCALE {
        return Err(NumberError::TooManyDecimals {
            input: input.to_string(),
            decimals: MAX_DECIMAL_SCALE,
        });
    }

    let mut digits = String::with_capacity(int_part.len() + frac_part.len());
    digits.push_str(int_part);
    digits.push_str(frac_part);

    Ok(FixedDecimal {
        mantissa: accumulate_digits(&digits)?,
        scale,
    })
}

/// Parse a plain non-negative integer (no separators at all).
pub fn parse_integer(input: &str) -> Result<U256, NumberError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumberError::MalformedNumber(input.to_string()));
    }
    accumulate_digits(trimmed)
}

/// `None` for blank or unparsable input. Blank means "not provided", never zero.
pub fn safe_parse_decimal(input: &str) -> Option<FixedDecimal> {
    if input.trim().is_empty() {
        return None;
    }
    parse_decimal(input).ok()
}

/// `None` for blank, unparsable or out-of-range input.
pub fn safe_parse_u64(input: &str) -> Option<u64> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<u64>().ok()
}

/// Human amount to base units. Fails rather than rounds when the input carries
/// more fractional digits than the token has decimals.
pub fn to_base_units(human_amount: &str, decimals: u32) -> Result<U256, NumberError> {
    let value = parse_decimal(human_amount)?;
    if value.scale > decimals {
        return Err(NumberError::TooManyDecimals {
            input: human_amount.to_string(),
            decimals,
        });
    }
    value.floor_scaled(decimals)
}

pub fn from_base_units(value: U256, decimals: u32) -> String {
    let digits = value.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return digits;
    }

    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits)
    } else {
        digits
    };
    let (int_part, frac_part) = padded.split_at(padded.len() - decimals);
    let frac_part = frac_part.trim_end_matches('0');

    if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac_part}")
    }
}

/// `floor(total_supply * percent / 100)` using the exact scale of the input,
/// so `0.0000001` keeps all of its digits.
pub fn percent_of_supply_to_base_units(
    percent: &str,
    total_supply: U256,
) -> Result<U256, NumberError> {
    let pct = parse_decimal(percent)?;
    let denominator = pow10(pct.scale)
        .and_then(|factor| factor.checked_mul(U256::from(100u64)))
        .ok_or(NumberError::Overflow)?;
    let numerator = total_supply
        .checked_mul(pct.mantissa)
        .ok_or(NumberError::Overflow)?;
    Ok(numerator / denominator)
}

/// Percentage to basis points, truncating below 0.01%.
pub fn percent_to_bps(percent: &str) -> Result<u32, NumberError> {
    let bps = parse_decimal(percent)?.floor_scaled(2)?;
    u256_to_u64(bps)
        .and_then(|value| u32::try_from(value).ok())
        .ok_or(NumberError::Overflow)
}

pub fn u256_to_u64(value: U256) -> Option<u64> {
    let limbs = value.as_limbs();
    if limbs[1..].iter().all(|limb| *limb == 0) {
        Some(limbs[0])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(value: u128) -> U256 {
        U256::from(value)
    }

    fn supply(tokens: &str) -> U256 {
        to_base_units(tokens, 18).expect("valid supply")
    }

    #[test]
    fn parses_both_decimal_separators() {
        let dot = parse_decimal("12.75").unwrap();
        let comma = parse_decimal("12,75").unwrap();
        assert_eq!(dot, comma);
        assert_eq!(dot.mantissa, u(1275));
        assert_eq!(dot.scale, 2);
        assert_eq!(parse_decimal(".5").unwrap().mantissa, u(5));
        assert_eq!(parse_decimal("5.").unwrap().scale, 0);
    }

    #[test]
    fn rejects_malformed_numbers() {
        for bad in ["", " ", ".", "-1", "+1", "1e5", "1.2.3", "1 000", "abc", "0x10"] {
            assert!(
                matches!(parse_decimal(bad), Err(NumberError::MalformedNumber(_))),
                "'{bad}' should be malformed"
            );
        }
        assert!(parse_integer("1.0").is_err());
        assert!(parse_integer("").is_err());
        assert_eq!(parse_integer(" 42 ").unwrap(), u(42));
    }

    #[test]
    fn to_base_units_scales_and_rejects_excess_precision() {
        assert_eq!(to_base_units("1", 18).unwrap(), u(1_000_000_000_000_000_000));
        assert_eq!(to_base_units("0.003", 18).unwrap(), u(3_000_000_000_000_000));
        assert_eq!(to_base_units("1,5", 6).unwrap(), u(1_500_000));
        assert!(matches!(
            to_base_units("0.1234567", 6),
            Err(NumberError::TooManyDecimals { decimals: 6, .. })
        ));
        assert!(matches!(
            to_base_units("-3", 18),
            Err(NumberError::MalformedNumber(_))
        ));
    }

    #[test]
    fn from_base_units_formats_without_trailing_zeros() {
        assert_eq!(from_base_units(u(0), 18), "0");
        assert_eq!(from_base_units(u(1_500_000_000_000_000_000), 18), "1.5");
        assert_eq!(from_base_units(u(1), 18), "0.000000000000000001");
        assert_eq!(from_base_units(u(42), 0), "42");
        assert_eq!(from_base_units(u(3_000_000_000_000_000), 18), "0.003");
    }

    #[test]
    fn base_unit_round_trip_for_integers() {
        for x in [0u128, 1, 7, 1_000, 123_456_789_012_345_678_901_234_567] {
            for decimals in [0u32, 6, 18] {
                let human = from_base_units(u(x), decimals);
                assert_eq!(to_base_units(&human, decimals).unwrap(), u(x), "{x} @ {decimals}");
            }
        }
    }

    #[test]
    fn percent_of_supply_is_exact() {
        let total = supply("1000000000");
        let two_pct = percent_of_supply_to_base_units("2", total).unwrap();
        assert_eq!(two_pct, total / u(50));
        assert_eq!(two_pct, supply("20000000"));
    }

    #[test]
    fn percent_of_supply_keeps_digits_past_six_places() {
        // A 1e6 fixed-point scale would drop the trailing 1 entirely.
        let total = supply("1000000000000");
        let tiny = percent_of_supply_to_base_units("0.0000001", total).unwrap();
        assert_eq!(tiny, supply("1000"));
    }

    #[test]
    fn percent_of_supply_is_bounded_and_monotonic() {
        let total = supply("1000000000000") + u(7);
        let full = percent_of_supply_to_base_units("100", total).unwrap();
        assert_eq!(full, total);

        let mut previous = U256::ZERO;
        for pct in ["0", "0.001", "0.5", "1", "33.333333", "50", "99.9999999", "100"] {
            let value = percent_of_supply_to_base_units(pct, total).unwrap();
            assert!(value >= previous, "{pct} went backwards");
            assert!(value <= full, "{pct} exceeded supply");
            previous = value;
        }
    }

    #[test]
    fn percent_of_supply_truncates() {
        // 1/3 of 10 units is 3.33.., never 4
        let value = percent_of_supply_to_base_units("33.3333333", u(10)).unwrap();
        assert_eq!(value, u(3));
    }

    #[test]
    fn bps_conversion_truncates() {
        assert_eq!(percent_to_bps("5").unwrap(), 500);
        assert_eq!(percent_to_bps("0,6").unwrap(), 60);
        assert_eq!(percent_to_bps("12.345").unwrap(), 1234);
        assert_eq!(percent_to_bps("0").unwrap(), 0);
    }

    #[test]
    fn range_checks_stay_exact() {
        let five = parse_decimal("5").unwrap();
        let just_over = parse_decimal("5.000000001").unwrap();
        assert!(five.within(0, 5));
        assert!(!just_over.within(0, 5));
        assert_eq!(parse_decimal("100.0").unwrap().cmp_whole(100), Ordering::Equal);
    }

    #[test]
    fn safe_parsers_treat_blank_as_absent() {
        assert_eq!(safe_parse_u64(""), None);
        assert_eq!(safe_parse_u64("  "), None);
        assert_eq!(safe_parse_u64("12x"), None);
        assert_eq!(safe_parse_u64("300"), Some(300));
        assert!(safe_parse_decimal("").is_none());
        assert!(safe_parse_decimal("abc").is_none());
        assert!(safe_parse_decimal("0").is_some_and(|d| d.is_zero()));
    }
}
