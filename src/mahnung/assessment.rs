use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::demands::Demands;
use super::gate::check_invoice_age;
use crate::core::{
    ClientClassification, InvoiceSnapshot, LateFeeResult, Result, RvgFeeResult, StatutoryConfig,
};
use crate::rvg::{RvgOptions, RvgTable, compute_rvg_fee};
use crate::verzug::compute_late_fee;

/// Everything the reminder needs from the fee math.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub late_fee: LateFeeResult,
    /// Advisory lawyer-fee estimate on the new total.
    pub rvg: RvgFeeResult,
}

impl Assessment {
    /// Demand block for the reminder.
    pub fn demands(&self) -> Demands {
        let main_amount = self.late_fee.new_total - self.late_fee.total_late_fee();
        Demands::new(main_amount, &self.late_fee)
    }
}

/// Run the fee math for one reminder.
///
/// 1. Reject invoices younger than `config.min_invoice_age_days`.
/// 2. Compute interest and flat fee up to `today`.
/// 3. Estimate the RVG Geschäftsgebühr on the new total with
///    `config.gebuehrensatz`, Auslagenpauschale and VAT.
pub fn assess(
    invoice: &InvoiceSnapshot,
    classification: ClientClassification,
    today: NaiveDate,
    config: &StatutoryConfig,
    table: &RvgTable,
) -> Result<Assessment> {
    check_invoice_age(invoice.invoice_date, today, config.min_invoice_age_days)?;

    let late_fee = compute_late_fee(
        invoice.total_amount,
        invoice.due_date,
        today,
        classification,
        config,
    )?;
    let rvg = compute_rvg_fee(
        late_fee.new_total,
        config.gebuehrensatz,
        table,
        &RvgOptions::from_config(config),
    )?;

    tracing::info!(
        invoice_number = invoice.invoice_number.as_deref().unwrap_or("-"),
        %classification,
        days_overdue = late_fee.days_overdue,
        new_total = %late_fee.new_total,
        rvg_total = %rvg.total,
        "assessment complete"
    );

    Ok(Assessment { late_fee, rvg })
}
