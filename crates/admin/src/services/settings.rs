//! Store settings normalization.

/// Normalize a WhatsApp number for `wa.me` links: strip everything that
/// isn't a digit, and prefix the Brazilian country code when the result
/// looks like a bare area-code number (10 or 11 digits).
#[must_use]
pub fn normalize_whatsapp_number(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 10 || digits.len() == 11 {
        return format!("55{digits}");
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_local_number_gets_country_code() {
        assert_eq!(
            normalize_whatsapp_number("(51) 99988-7766"),
            "5551999887766"
        );
        assert_eq!(normalize_whatsapp_number("5199887766"), "555199887766");
    }

    #[test]
    fn full_international_number_is_left_alone() {
        assert_eq!(normalize_whatsapp_number("5551999887766"), "5551999887766");
    }

    #[test]
    fn short_or_odd_lengths_are_just_digits() {
        assert_eq!(normalize_whatsapp_number("12345"), "12345");
        assert_eq!(normalize_whatsapp_number(""), "");
    }
}
