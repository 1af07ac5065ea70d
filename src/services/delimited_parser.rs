//! Parsing of comma-delimited free-text fields
//!
//! Tokens are trimmed, so `"VIP, GENERAL"` yields `"GENERAL"` rather than
//! `" GENERAL"`. Blank input yields an empty list. Invalid numeric tokens stay
//! in place as errors so list lengths remain comparable.

use crate::error::ConversionError;

pub const DELIMITER: char = ',';

/// Splits `text` into trimmed tokens
pub fn split_tokens(text: &str) -> Vec<&str> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split(DELIMITER).map(str::trim).collect()
}

/// Parses every token with `parse`, preserving position
pub fn parse_with<T>(text: &str, parse: impl Fn(&str) -> T) -> Vec<T> {
    split_tokens(text).into_iter().map(parse).collect()
}

pub fn parse_strings(text: &str) -> Vec<String> {
    parse_with(text, str::to_string)
}

/// Parses a non-negative integer token
pub fn parse_count(token: &str) -> Result<u32, ConversionError> {
    if token.is_empty() {
        return Err(ConversionError::Empty);
    }
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if let Some(rest) = token.strip_prefix('-') {
        if is_digits(rest) {
            return Err(ConversionError::Negative(token.to_string()));
        }
        return Err(ConversionError::NonNumeric(token.to_string()));
    }
    let digits = token.strip_prefix('+').unwrap_or(token);
    if !is_digits(digits) {
        return Err(ConversionError::NonNumeric(token.to_string()));
    }
    digits
        .parse::<u32>()
        .map_err(|_| ConversionError::Overflow(token.to_string()))
}

pub fn parse_counts(text: &str) -> Vec<Result<u32, ConversionError>> {
    parse_with(text, parse_count)
}
