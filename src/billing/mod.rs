//! Card validation for the checkout form.
//!
//! All checks run client-side before a payment request leaves the page;
//! the backend re-validates, so nothing here is a security boundary. The
//! clock is a parameter so expiry behaviour is testable at fixed dates.

use chrono::{Datelike, NaiveDate};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
    Discover,
    Unknown,
}

impl CardBrand {
    pub fn label(&self) -> &'static str {
        match self {
            CardBrand::Visa => "Visa",
            CardBrand::Mastercard => "Mastercard",
            CardBrand::Amex => "American Express",
            CardBrand::Discover => "Discover",
            CardBrand::Unknown => "Card",
        }
    }

    /// Security code length for the brand: Amex prints four digits, the
    /// rest three.
    pub fn cvv_length(&self) -> usize {
        match self {
            CardBrand::Amex => 4,
            _ => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error("Enter the card number using 12 to 19 digits.")]
    BadLength,
    #[error("That card number doesn't look right. Check it and try again.")]
    BadChecksum,
    #[error("Enter the expiry as MM/YY.")]
    BadExpiryFormat,
    #[error("This card has expired.")]
    Expired,
    #[error("The security code doesn't match this card type.")]
    BadCvv,
}

/// Strips the separators users type into card fields.
pub fn normalize(number: &str) -> String {
    number
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Brand by issuer prefix, on the normalized number.
pub fn detect_brand(number: &str) -> CardBrand {
    let digits = normalize(number);
    if digits.starts_with('4') {
        return CardBrand::Visa;
    }
    if digits.starts_with("34") || digits.starts_with("37") {
        return CardBrand::Amex;
    }
    if let Ok(prefix2) = digits.get(..2).unwrap_or_default().parse::<u32>() {
        if (51..=55).contains(&prefix2) {
            return CardBrand::Mastercard;
        }
        if prefix2 == 65 {
            return CardBrand::Discover;
        }
    }
    if let Ok(prefix4) = digits.get(..4).unwrap_or_default().parse::<u32>() {
        if (2221..=2720).contains(&prefix4) {
            return CardBrand::Mastercard;
        }
        if prefix4 == 6011 {
            return CardBrand::Discover;
        }
    }
    if let Ok(prefix3) = digits.get(..3).unwrap_or_default().parse::<u32>() {
        if (644..=649).contains(&prefix3) {
            return CardBrand::Discover;
        }
    }
    CardBrand::Unknown
}

/// Luhn checksum over a digit string. Non-digits fail outright.
pub fn luhn_valid(number: &str) -> bool {
    let digits: Option<Vec<u32>> = number.chars().map(|c| c.to_digit(10)).collect();
    let Some(digits) = digits else {
        return false;
    };
    if digits.is_empty() {
        return false;
    }
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

/// Full number check: length window, then checksum. Returns the detected
/// brand so the form can adjust its CVV field.
pub fn validate_card_number(number: &str) -> Result<CardBrand, CardError> {
    let digits = normalize(number);
    if !(12..=19).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(CardError::BadLength);
    }
    if !luhn_valid(&digits) {
        return Err(CardError::BadChecksum);
    }
    Ok(detect_brand(&digits))
}

/// Parses an `MM/YY` (or `MM/YYYY`) field into month and full year.
pub fn parse_expiry(raw: &str) -> Result<(u32, i32), CardError> {
    let mut parts = raw.trim().splitn(2, '/');
    let month_part = parts.next().unwrap_or_default().trim();
    let year_part = parts.next().ok_or(CardError::BadExpiryFormat)?.trim();

    let month: u32 = month_part.parse().map_err(|_| CardError::BadExpiryFormat)?;
    let year: i32 = match year_part.len() {
        2 => 2000
            + year_part
                .parse::<i32>()
                .map_err(|_| CardError::BadExpiryFormat)?,
        4 => year_part.parse().map_err(|_| CardError::BadExpiryFormat)?,
        _ => return Err(CardError::BadExpiryFormat),
    };
    if !(1..=12).contains(&month) {
        return Err(CardError::BadExpiryFormat);
    }
    Ok((month, year))
}

/// A card is usable through the last day of its expiry month.
pub fn validate_expiry(month: u32, year: i32, today: NaiveDate) -> Result<(), CardError> {
    if !(1..=12).contains(&month) {
        return Err(CardError::BadExpiryFormat);
    }
    if (year, month) < (today.year(), today.month()) {
        return Err(CardError::Expired);
    }
    Ok(())
}

pub fn validate_cvv(cvv: &str, brand: CardBrand) -> Result<(), CardError> {
    if cvv.len() == brand.cvv_length() && cvv.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(CardError::BadCvv)
    }
}

/// Display grouping for a partially or fully typed number: 4-6-5 for
/// Amex, fours otherwise.
pub fn format_card_number(number: &str) -> String {
    let digits = normalize(number);
    let groups: &[usize] = match detect_brand(&digits) {
        CardBrand::Amex => &[4, 6, 5],
        _ => &[4, 4, 4, 4, 3],
    };
    let mut out = String::with_capacity(digits.len() + 4);
    let mut rest = digits.as_str();
    for &len in groups {
        if rest.is_empty() {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        let take = len.min(rest.len());
        out.push_str(&rest[..take]);
        rest = &rest[take..];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luhn_accepts_known_good_numbers() {
        for number in [
            "4111111111111111",  // Visa
            "4242424242424242",  // Visa
            "5555555555554444",  // Mastercard
            "2221000000000009",  // Mastercard (2-series)
            "378282246310005",   // Amex
            "6011111111111117",  // Discover
        ] {
            assert!(luhn_valid(number), "expected {} to pass", number);
        }
    }

    #[test]
    fn luhn_rejects_off_by_one_and_junk() {
        assert!(!luhn_valid("4111111111111112"));
        assert!(!luhn_valid("411111111111111a"));
        assert!(!luhn_valid(""));
    }

    #[test]
    fn brand_detection_by_prefix() {
        assert_eq!(detect_brand("4242 4242 4242 4242"), CardBrand::Visa);
        assert_eq!(detect_brand("5555555555554444"), CardBrand::Mastercard);
        assert_eq!(detect_brand("2221000000000009"), CardBrand::Mastercard);
        assert_eq!(detect_brand("378282246310005"), CardBrand::Amex);
        assert_eq!(detect_brand("371449635398431"), CardBrand::Amex);
        assert_eq!(detect_brand("6011111111111117"), CardBrand::Discover);
        assert_eq!(detect_brand("6457000000000000"), CardBrand::Discover);
        assert_eq!(detect_brand("9999999999999999"), CardBrand::Unknown);
    }

    #[test]
    fn card_number_validation_orders_length_before_checksum() {
        assert_eq!(validate_card_number("4242"), Err(CardError::BadLength));
        assert_eq!(
            validate_card_number("4111 1111 1111 1112"),
            Err(CardError::BadChecksum)
        );
        assert_eq!(
            validate_card_number("4111 1111 1111 1111"),
            Ok(CardBrand::Visa)
        );
    }

    #[test]
    fn expiry_parses_two_and_four_digit_years() {
        assert_eq!(parse_expiry("08/27"), Ok((8, 2027)));
        assert_eq!(parse_expiry("8/2027"), Ok((8, 2027)));
        assert_eq!(parse_expiry(" 12 / 30 "), Ok((12, 2030)));
        assert_eq!(parse_expiry("0827"), Err(CardError::BadExpiryFormat));
        assert_eq!(parse_expiry("13/27"), Err(CardError::BadExpiryFormat));
        assert_eq!(parse_expiry("08/271"), Err(CardError::BadExpiryFormat));
    }

    #[test]
    fn expiry_is_valid_through_its_own_month() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(validate_expiry(6, 2025, today), Ok(()));
        assert_eq!(validate_expiry(7, 2025, today), Ok(()));
        assert_eq!(validate_expiry(1, 2026, today), Ok(()));
        assert_eq!(validate_expiry(5, 2025, today), Err(CardError::Expired));
        assert_eq!(validate_expiry(12, 2024, today), Err(CardError::Expired));
    }

    #[test]
    fn cvv_length_follows_the_brand() {
        assert_eq!(validate_cvv("123", CardBrand::Visa), Ok(()));
        assert_eq!(validate_cvv("1234", CardBrand::Visa), Err(CardError::BadCvv));
        assert_eq!(validate_cvv("1234", CardBrand::Amex), Ok(()));
        assert_eq!(validate_cvv("123", CardBrand::Amex), Err(CardError::BadCvv));
        assert_eq!(validate_cvv("12x", CardBrand::Visa), Err(CardError::BadCvv));
        assert_eq!(validate_cvv("123", CardBrand::Unknown), Ok(()));
    }

    #[test]
    fn formatting_groups_by_brand() {
        assert_eq!(
            format_card_number("4242424242424242"),
            "4242 4242 4242 4242"
        );
        assert_eq!(format_card_number("378282246310005"), "3782 822463 10005");
        assert_eq!(format_card_number("4242 42"), "4242 42");
        assert_eq!(format_card_number(""), "");
    }
}
