//! BRL currency display formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount as Brazilian Reais, e.g. `R$ 1.234,56`.
///
/// Two decimal places, comma as the decimal separator, dot as the
/// thousands separator (pt-BR conventions).
#[must_use]
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let rendered = format!("{rounded:.2}");

    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    // Group the integer digits in threes, right to left.
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let digits: Vec<char> = int_part.chars().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    format!("R$ {sign}{grouped},{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    #[test]
    fn formats_simple_amounts() {
        assert_eq!(format_brl(dec(0)), "R$ 0,00");
        assert_eq!(format_brl(dec(500)), "R$ 5,00");
        assert_eq!(format_brl(dec(12_930)), "R$ 129,30");
    }

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_brl(dec(123_456)), "R$ 1.234,56");
        assert_eq!(format_brl(dec(100_000_000)), "R$ 1.000.000,00");
    }

    #[test]
    fn rounds_to_two_decimal_places() {
        let amount = Decimal::new(12_345, 3); // 12.345
        assert_eq!(format_brl(amount), "R$ 12,35");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_brl(dec(-1_050)), "R$ -10,50");
    }
}
