use rust_decimal::{Decimal, RoundingStrategy};

/// Round to cents using commercial rounding (half away from zero).
///
/// Every designated rounding step in the late-fee and RVG computations goes
/// through this function.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as a German currency string, e.g. `3.000,00 €`.
///
/// The amount is rounded with [`round2`] first.
pub fn format_eur(amount: Decimal) -> String {
    let rounded = round2(amount);
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped},{frac_part} €")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round2(dec!(2.345)), dec!(2.35));
        assert_eq!(round2(dec!(2.344)), dec!(2.34));
        assert_eq!(round2(dec!(-2.345)), dec!(-2.35));
        assert_eq!(round2(dec!(0.005)), dec!(0.01));
    }

    #[test]
    fn not_bankers_rounding() {
        // Banker's rounding would give 0.02
        assert_eq!(round2(dec!(0.025)), dec!(0.03));
    }

    #[test]
    fn format_small_amount() {
        assert_eq!(format_eur(dec!(40)), "40,00 €");
        assert_eq!(format_eur(dec!(3.46)), "3,46 €");
        assert_eq!(format_eur(dec!(0)), "0,00 €");
    }

    #[test]
    fn format_groups_thousands() {
        assert_eq!(format_eur(dec!(3000)), "3.000,00 €");
        assert_eq!(format_eur(dec!(1043.46)), "1.043,46 €");
        assert_eq!(format_eur(dec!(1234567.891)), "1.234.567,89 €");
        assert_eq!(format_eur(dec!(100000)), "100.000,00 €");
    }

    #[test]
    fn format_negative() {
        assert_eq!(format_eur(dec!(-1500.5)), "-1.500,50 €");
    }
}
