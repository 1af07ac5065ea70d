//! Conversion between typed-in NEAR amounts and yoctoNEAR base units
//!
//! Parsing is exact decimal arithmetic on the digits; no floating point is
//! involved, so any amount with at most 24 fractional digits converts
//! losslessly. Further digits are truncated.

use crate::error::ConversionError;
use crate::models::BaseUnits;

/// Number of fractional digits of one NEAR
pub const BASE_UNIT_DECIMALS: usize = 24;

pub const ONE_NEAR_IN_YOCTO: u128 = 10u128.pow(BASE_UNIT_DECIMALS as u32);

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Converts a decimal amount such as `"20"` or `"0.75"` to base units
pub fn to_base_units(amount: &str) -> Result<BaseUnits, ConversionError> {
    let text = amount.trim();
    if text.is_empty() {
        return Err(ConversionError::Empty);
    }
    if let Some(rest) = text.strip_prefix('-') {
        return if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit() || c == '.') {
            Err(ConversionError::NonNumeric(text.to_string()))
        } else {
            Err(ConversionError::Negative(text.to_string()))
        };
    }
    let unsigned = text.strip_prefix('+').unwrap_or(text);

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(ConversionError::NonNumeric(text.to_string()));
    }

    let overflow = || ConversionError::Overflow(text.to_string());

    let whole_units = if whole.is_empty() {
        0
    } else {
        whole
            .parse::<u128>()
            .map_err(|_| overflow())?
            .checked_mul(ONE_NEAR_IN_YOCTO)
            .ok_or_else(overflow)?
    };

    let kept = &fraction[..fraction.len().min(BASE_UNIT_DECIMALS)];
    let fraction_units = if kept.is_empty() {
        0
    } else {
        // At most 24 digits: always fits in u128
        let padded = format!("{:0<width$}", kept, width = BASE_UNIT_DECIMALS);
        padded.parse::<u128>().map_err(|_| overflow())?
    };

    whole_units
        .checked_add(fraction_units)
        .map(BaseUnits)
        .ok_or_else(overflow)
}

/// Renders base units as a NEAR amount without trailing zeros
pub fn format_base_units(units: BaseUnits) -> String {
    let whole = units.0 / ONE_NEAR_IN_YOCTO;
    let fraction = units.0 % ONE_NEAR_IN_YOCTO;
    if fraction == 0 {
        return whole.to_string();
    }
    let digits = format!("{:0>width$}", fraction, width = BASE_UNIT_DECIMALS);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_amounts() {
        assert_eq!(to_base_units("20").unwrap(), BaseUnits(20 * ONE_NEAR_IN_YOCTO));
        assert_eq!(to_base_units("0").unwrap(), BaseUnits(0));
    }

    #[test]
    fn test_fractional_amounts() {
        assert_eq!(
            to_base_units("0.5").unwrap(),
            BaseUnits(500_000_000_000_000_000_000_000)
        );
        assert_eq!(to_base_units(".25").unwrap(), BaseUnits(ONE_NEAR_IN_YOCTO / 4));
        assert_eq!(to_base_units("3.").unwrap(), BaseUnits(3 * ONE_NEAR_IN_YOCTO));
    }

    #[test]
    fn test_truncates_beyond_base_unit_precision() {
        let units = to_base_units("0.0000000000000000000000019").unwrap();
        assert_eq!(units, BaseUnits(1));
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(to_base_units(" 16 ").unwrap(), BaseUnits(16 * ONE_NEAR_IN_YOCTO));
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(to_base_units(""), Err(ConversionError::Empty));
        assert_eq!(
            to_base_units("abc"),
            Err(ConversionError::NonNumeric("abc".to_string()))
        );
        assert_eq!(
            to_base_units("1.2.3"),
            Err(ConversionError::NonNumeric("1.2.3".to_string()))
        );
        assert_eq!(
            to_base_units("."),
            Err(ConversionError::NonNumeric(".".to_string()))
        );
        assert_eq!(
            to_base_units("-5"),
            Err(ConversionError::Negative("-5".to_string()))
        );
        assert_eq!(
            to_base_units("1e3"),
            Err(ConversionError::NonNumeric("1e3".to_string()))
        );
    }

    #[test]
    fn test_overflow() {
        let huge = "1000000000000000"; // 10^15 NEAR exceeds u128 in yocto
        assert_eq!(
            to_base_units(huge),
            Err(ConversionError::Overflow(huge.to_string()))
        );
    }

    #[test]
    fn test_round_trip_up_to_six_decimals() {
        for amount in ["0", "1", "20", "0.5", "16.25", "1.000001", "123456.654321", "0.000001"] {
            let units = to_base_units(amount).unwrap();
            assert_eq!(format_base_units(units), amount, "round trip of {}", amount);
        }
    }
}
