//! HTML form payloads and their lenient field parsing.

use serde::Deserialize;

use crate::application::services::ShortenInput;

/// Fields posted by the shortener form.
///
/// Every field arrives as text; missing fields default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub validity: String,
    #[serde(default)]
    pub custom_code: String,
}

impl ShortenForm {
    /// Converts the raw fields into a service request.
    ///
    /// The validity field is read with [`parse_validity_field`]; an empty
    /// custom code means none.
    pub fn into_input(self, default_validity: i64) -> ShortenInput {
        ShortenInput {
            validity_minutes: Some(parse_validity_field(&self.validity, default_validity)),
            custom_code: (!self.custom_code.is_empty()).then_some(self.custom_code),
            url: self.url,
        }
    }
}

/// Reads the leading integer of a form field.
///
/// Blank text, text without a leading integer and `0` all fall back to
/// `default`. Trailing garbage is ignored (`"45min"` is 45) and negative
/// numbers are kept so range validation can reject them.
pub fn parse_validity_field(raw: &str, default: i64) -> i64 {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<i64>() {
        Ok(0) | Err(_) => default,
        Ok(n) => sign * n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_validity_field("45", 30), 45);
        assert_eq!(parse_validity_field(" 120", 30), 120);
        assert_eq!(parse_validity_field("+60", 30), 60);
        assert_eq!(parse_validity_field("10080", 30), 10_080);
    }

    #[test]
    fn test_parse_falls_back_to_default() {
        assert_eq!(parse_validity_field("", 30), 30);
        assert_eq!(parse_validity_field("abc", 30), 30);
        assert_eq!(parse_validity_field("0", 30), 30);
        assert_eq!(parse_validity_field("-", 30), 30);
    }

    #[test]
    fn test_parse_keeps_leading_integer() {
        assert_eq!(parse_validity_field("45min", 30), 45);
        assert_eq!(parse_validity_field("7.5", 30), 7);
    }

    #[test]
    fn test_parse_keeps_negative() {
        assert_eq!(parse_validity_field("-5", 30), -5);
    }

    #[test]
    fn test_parse_overflow_falls_back() {
        assert_eq!(parse_validity_field("99999999999999999999999", 30), 30);
    }

    #[test]
    fn test_into_input() {
        let form = ShortenForm {
            url: "https://example.com".to_string(),
            validity: "".to_string(),
            custom_code: "".to_string(),
        };

        let input = form.into_input(30);

        assert_eq!(input.url, "https://example.com");
        assert_eq!(input.validity_minutes, Some(30));
        assert!(input.custom_code.is_none());
    }

    #[test]
    fn test_into_input_keeps_custom_code() {
        let form = ShortenForm {
            url: "https://example.com".to_string(),
            validity: "90".to_string(),
            custom_code: "Promo1".to_string(),
        };

        let input = form.into_input(30);

        assert_eq!(input.validity_minutes, Some(90));
        assert_eq!(input.custom_code.as_deref(), Some("Promo1"));
    }
}
