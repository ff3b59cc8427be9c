use chrono::NaiveDate;

use crate::core::{MahnError, Result, days_between};

/// Refuse invoices issued less than `min_age_days` before `today`.
///
/// This gate looks at the invoice date, not the due date. An invoice
/// exactly `min_age_days` old passes.
pub fn check_invoice_age(
    invoice_date: NaiveDate,
    today: NaiveDate,
    min_age_days: u32,
) -> Result<()> {
    let age = days_between(invoice_date, today);
    if age < i64::from(min_age_days) {
        tracing::info!(
            %invoice_date,
            %today,
            age,
            min_age_days,
            "invoice too recent for a reminder"
        );
        return Err(MahnError::TooRecent {
            invoice_date,
            min_age_days,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn exactly_thirty_days_passes() {
        assert!(check_invoice_age(date(2024, 1, 1), date(2024, 1, 31), 30).is_ok());
    }

    #[test]
    fn twenty_nine_days_rejected() {
        let err = check_invoice_age(date(2024, 1, 2), date(2024, 1, 31), 30).unwrap_err();
        match err {
            MahnError::TooRecent {
                invoice_date,
                min_age_days,
            } => {
                assert_eq!(invoice_date, date(2024, 1, 2));
                assert_eq!(min_age_days, 30);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn future_invoice_rejected() {
        assert!(check_invoice_age(date(2024, 3, 1), date(2024, 2, 1), 30).is_err());
    }

    #[test]
    fn zero_threshold_accepts_same_day() {
        assert!(check_invoice_age(date(2024, 3, 1), date(2024, 3, 1), 0).is_ok());
    }
}
