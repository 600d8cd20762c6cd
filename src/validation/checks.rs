//! Field-level checks shared by the step rules. Each check records at most
//! one message per field and hands back the parsed value when it is usable.

use crate::config::LAUNCH;
use crate::domain::{FieldId, FinalSettings, FinalType};
use crate::utils::{FixedDecimal, parse_decimal, safe_parse_u64};

use super::ValidationErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    /// Blank means "not provided"
    Optional,
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// `0x` followed by exactly the configured number of hex digits.
pub fn is_address(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .is_some_and(|hex| {
            hex.len() == LAUNCH.address_hex_len && hex.bytes().all(|b| b.is_ascii_hexdigit())
        })
}

pub fn is_http_url(text: &str) -> bool {
    let trimmed = text.trim();
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    rest.is_some_and(|host| !host.is_empty() && !host.contains(char::is_whitespace))
}

pub fn require_text(errors: &mut ValidationErrors, field: FieldId, text: &str) {
    if is_blank(text) {
        errors.field(field, format!("{} is required", field.label()));
    }
}

/// Percentage in the inclusive range `[min, max]`.
pub fn percent_within(
    errors: &mut ValidationErrors,
    field: FieldId,
    text: &str,
    min: u64,
    max: u64,
    presence: Presence,
) -> Option<FixedDecimal> {
    if is_blank(text) {
        if presence == Presence::Required {
            errors.field(field, format!("{} is required", field.label()));
        }
        return None;
    }

    let max_decimals = LAUNCH.numbers.max_percent_decimals;
    match parse_decimal(text) {
        Ok(value) if value.scale > max_decimals => {
            errors.field(field, format!("Use at most {max_decimals} decimal places"));
            None
        }
        Ok(value) if value.within(min, max) => Some(value),
        Ok(_) => {
            errors.field(field, format!("Must be between {min} and {max}"));
            None
        }
        Err(_) => {
            errors.field(field, "Enter a number");
            None
        }
    }
}

/// Wallet / transaction limit: above 0, at most 100.
pub fn limit_percent(
    errors: &mut ValidationErrors,
    field: FieldId,
    text: &str,
    presence: Presence,
) -> Option<FixedDecimal> {
    let value = percent_within(errors, field, text, 0, 100, presence)?;
    if value.is_zero() {
        errors.field(field, "Must be above 0, leave blank for no limit");
        return None;
    }
    Some(value)
}

pub fn whole_number(
    errors: &mut ValidationErrors,
    field: FieldId,
    text: &str,
    presence: Presence,
) -> Option<u64> {
    if is_blank(text) {
        if presence == Presence::Required {
            errors.field(field, format!("{} is required", field.label()));
        }
        return None;
    }

    let parsed = safe_parse_u64(text);
    if parsed.is_none() {
        errors.field(field, "Must be a whole number of 0 or more");
    }
    parsed
}

pub fn positive_whole_number(
    errors: &mut ValidationErrors,
    field: FieldId,
    text: &str,
    presence: Presence,
) -> Option<u64> {
    match whole_number(errors, field, text, presence)? {
        0 => {
            errors.field(field, "Must be greater than 0");
            None
        }
        value => Some(value),
    }
}

/// A step above zero only makes sense with an interval above zero; the
/// error lands on the interval field. `presence` applies to both parts.
pub fn step_with_interval(
    errors: &mut ValidationErrors,
    step: (FieldId, &str),
    interval: (FieldId, &str),
    presence: Presence,
) {
    let step_value = percent_within(errors, step.0, step.1, 0, 100, presence);
    let interval_value = whole_number(errors, interval.0, interval.1, presence);

    let step_active = step_value.is_some_and(|value| !value.is_zero());
    if step_active && !interval_value.is_some_and(|secs| secs > 0) {
        errors.field(interval.0, "An interval above 0 is required when a step is set");
    }
}

pub fn address(errors: &mut ValidationErrors, field: FieldId, text: &str) {
    if !is_address(text) {
        errors.field(
            field,
            format!(
                "Must be a 0x address with {} hex characters",
                LAUNCH.address_hex_len
            ),
        );
    }
}

pub fn final_tax(errors: &mut ValidationErrors, field: FieldId, settings: &FinalSettings) {
    if settings.final_type == FinalType::Tax {
        percent_within(
            errors,
            field,
            &settings.final_tax,
            0,
            u64::from(LAUNCH.taxes.max_final_tax_pct),
            Presence::Required,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_shape() {
        assert!(is_address(&format!("0x{}", "aB".repeat(20))));
        assert!(!is_address(&format!("0x{}", "a".repeat(39))));
        assert!(!is_address(&format!("0x{}", "a".repeat(41))));
        assert!(!is_address(&"a".repeat(42)));
    }

    #[test]
    fn url_shape() {
        assert!(is_http_url("https://t.me/moon"));
        assert!(is_http_url("http://example.org"));
        assert!(!is_http_url("https://"));
        assert!(!is_http_url("ftp://example.org"));
        assert!(!is_http_url("https://exa mple.org"));
    }

    #[test]
    fn blank_optional_values_are_absent_not_zero() {
        let mut errors = ValidationErrors::default();
        assert!(whole_number(&mut errors, FieldId::LockDays, " ", Presence::Optional).is_none());
        assert!(limit_percent(&mut errors, FieldId::V2MaxTx, "", Presence::Optional).is_none());
        assert!(errors.is_empty());
    }

    #[test]
    fn zero_limit_is_rejected() {
        let mut errors = ValidationErrors::default();
        assert!(limit_percent(&mut errors, FieldId::V2MaxTx, "0", Presence::Optional).is_none());
        assert!(errors.field_error(FieldId::V2MaxTx).is_some());
    }

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = ValidationErrors::default();
        step_with_interval(
            &mut errors,
            (FieldId::AdvTaxStep, "2"),
            (FieldId::AdvTaxInterval, "soon"),
            Presence::Optional,
        );
        assert_eq!(
            errors.field_error(FieldId::AdvTaxInterval),
            Some("Must be a whole number of 0 or more")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn percent_decimals_are_capped() {
        let mut errors = ValidationErrors::default();
        let eighteen = format!("1.{}", "5".repeat(18));
        let nineteen = format!("1.{}", "5".repeat(19));
        assert!(limit_percent(&mut errors, FieldId::V2MaxTx, &eighteen, Presence::Required).is_some());
        assert!(errors.is_empty());

        assert!(limit_percent(&mut errors, FieldId::V2MaxTx, &nineteen, Presence::Required).is_none());
        assert_eq!(
            errors.field_error(FieldId::V2MaxTx),
            Some("Use at most 18 decimal places")
        );

        // Trailing zeros still count as written digits
        let padded = format!("1.{}", "0".repeat(48));
        assert!(percent_within(&mut errors, FieldId::V2BuyTax, &padded, 0, 100, Presence::Optional).is_none());
        assert!(errors.field_error(FieldId::V2BuyTax).is_some());
    }

    #[test]
    fn required_schedule_flags_blank_parts() {
        let mut errors = ValidationErrors::default();
        step_with_interval(
            &mut errors,
            (FieldId::V2TaxDecayStep, ""),
            (FieldId::V2TaxDecayInterval, " "),
            Presence::Required,
        );
        assert!(errors.field_error(FieldId::V2TaxDecayStep).is_some());
        assert!(errors.field_error(FieldId::V2TaxDecayInterval).is_some());
    }
}
