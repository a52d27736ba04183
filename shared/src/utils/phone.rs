//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// International phone number regex (E.164 format)
static E164_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").unwrap());

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is valid (international E.164 format)
pub fn is_valid_phone_number(phone: &str) -> bool {
    let normalized = normalize_phone_number(phone);
    E164_REGEX.is_match(&normalized)
}

/// Mask a phone number for logging, keeping only the last 4 digits
/// (e.g. +15551234567 becomes +*******4567)
pub fn mask_phone_number(phone: &str) -> String {
    if phone.len() <= 4 {
        return "*".repeat(phone.len());
    }

    let visible_digits = 4;
    let masked_count = phone.len() - visible_digits;
    let last_digits = &phone[phone.len() - visible_digits..];

    if phone.starts_with('+') {
        format!("+{}{}", "*".repeat(masked_count - 1), last_digits)
    } else {
        format!("{}{}", "*".repeat(masked_count), last_digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("+1 555 123 4567"), "+15551234567");
        assert_eq!(normalize_phone_number("(555) 123-4567"), "5551234567");
        assert_eq!(normalize_phone_number("+44 20 7946 0958"), "+442079460958");
    }

    #[test]
    fn test_is_valid_phone_number() {
        assert!(is_valid_phone_number("+15551234567"));
        assert!(is_valid_phone_number("+442079460958"));
        // Missing leading '+'
        assert!(!is_valid_phone_number("15551234567"));
        // Leading zero after '+'
        assert!(!is_valid_phone_number("+05551234567"));
        // Too long for E.164
        assert!(!is_valid_phone_number("+1234567890123456"));
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("+15551234567"), "+*******4567");
        assert_eq!(mask_phone_number("5551234567"), "******4567");
        assert_eq!(mask_phone_number("123"), "***");
    }
}
