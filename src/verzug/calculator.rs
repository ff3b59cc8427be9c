use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::core::{
    ClientClassification, LateFeeResult, MahnError, Result, StatutoryConfig, days_between, round2,
};

/// Whole days `today` lies past `due_date`; 0 on or before the due date.
pub fn days_overdue(due_date: NaiveDate, today: NaiveDate) -> u32 {
    let days = days_between(due_date, today).max(0);
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Compute default interest and flat fee with the base rate taken from
/// `config`.
pub fn compute_late_fee(
    total_amount: Decimal,
    due_date: NaiveDate,
    today: NaiveDate,
    classification: ClientClassification,
    config: &StatutoryConfig,
) -> Result<LateFeeResult> {
    compute_late_fee_with_rate(
        total_amount,
        due_date,
        today,
        classification,
        config.base_rate,
        config,
    )
}

/// Compute default interest and flat fee for an explicit base rate.
///
/// Interest is simple daily interest on a fixed `days_per_year` basis
/// (365 by default, no leap-year adjustment). It is rounded once, on the
/// final amount. Nothing accrues on the due date itself.
pub fn compute_late_fee_with_rate(
    total_amount: Decimal,
    due_date: NaiveDate,
    today: NaiveDate,
    classification: ClientClassification,
    base_rate: Decimal,
    config: &StatutoryConfig,
) -> Result<LateFeeResult> {
    if total_amount <= Decimal::ZERO {
        return Err(MahnError::InvalidInput(format!(
            "total amount must be positive, got {total_amount}"
        )));
    }
    if config.days_per_year == 0 {
        return Err(MahnError::Configuration(
            "days_per_year must be positive".into(),
        ));
    }

    let (surcharge, flat_fee) = match classification {
        ClientClassification::Company => (config.company_surcharge, config.company_flat_fee),
        ClientClassification::PrivateIndividual => (config.private_surcharge, Decimal::ZERO),
    };
    let annual_interest_rate = base_rate.checked_add(surcharge).ok_or_else(|| {
        MahnError::InvalidInput(format!("base rate {base_rate} is out of range"))
    })?;
    if annual_interest_rate < Decimal::ZERO {
        return Err(MahnError::InvalidInput(format!(
            "base rate {base_rate} yields negative interest rate {annual_interest_rate}"
        )));
    }

    let days = days_overdue(due_date, today);
    if days == 0 {
        tracing::debug!(%total_amount, %due_date, %today, "invoice not overdue");
        return Ok(LateFeeResult {
            classification,
            days_overdue: 0,
            base_rate,
            annual_interest_rate,
            interest_amount: Decimal::ZERO,
            flat_fee: Decimal::ZERO,
            new_total: total_amount,
        });
    }

    let raw_interest = total_amount
        .checked_mul(annual_interest_rate)
        .and_then(|v| v.checked_mul(Decimal::from(days)))
        .and_then(|v| v.checked_div(Decimal::from(config.days_per_year)))
        .ok_or_else(|| {
            MahnError::InvalidInput(format!("interest on {total_amount} overflows"))
        })?;
    let interest_amount = round2(raw_interest);
    let new_total = total_amount
        .checked_add(interest_amount)
        .and_then(|v| v.checked_add(flat_fee))
        .ok_or_else(|| {
            MahnError::InvalidInput(format!("new total for {total_amount} overflows"))
        })?;

    tracing::debug!(
        %classification,
        days_overdue = days,
        %annual_interest_rate,
        %interest_amount,
        %flat_fee,
        %new_total,
        "computed late fee"
    );

    Ok(LateFeeResult {
        classification,
        days_overdue: days,
        base_rate,
        annual_interest_rate,
        interest_amount,
        flat_fee,
        new_total,
    })
}
