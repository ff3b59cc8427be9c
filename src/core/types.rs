use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::dates::parse_date;
use super::error::MahnError;

/// Debtor classification; selects the statutory interest surcharge and
/// whether the Verzugspauschale applies (§ 288 BGB).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientClassification {
    /// Commercial debtor (Unternehmer): base rate + 9 points, flat fee due.
    #[serde(rename = "company")]
    Company,
    /// Consumer (Verbraucher): base rate + 5 points, no flat fee.
    #[serde(rename = "private")]
    PrivateIndividual,
}

impl ClientClassification {
    /// Short code used in stored cases (`company` / `private`).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::PrivateIndividual => "private",
        }
    }
}

impl fmt::Display for ClientClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ClientClassification {
    type Err = MahnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "company" => Ok(Self::Company),
            "private" => Ok(Self::PrivateIndividual),
            other => Err(MahnError::InvalidInput(format!(
                "unknown client classification '{other}'"
            ))),
        }
    }
}

/// Invoice figures the reminder is based on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSnapshot {
    /// Gross invoice amount (Rechnungsbetrag).
    pub total_amount: Decimal,
    /// Issue date (Rechnungsdatum).
    pub invoice_date: NaiveDate,
    /// Payment due date (Fälligkeitsdatum).
    pub due_date: NaiveDate,
    /// Invoice number (Rechnungsnummer).
    pub invoice_number: Option<String>,
    /// Debtor name.
    pub client_name: Option<String>,
    /// Debtor postal address.
    pub client_address: Option<String>,
}

impl InvoiceSnapshot {
    /// Snapshot with amount and dates only.
    pub fn new(total_amount: Decimal, invoice_date: NaiveDate, due_date: NaiveDate) -> Self {
        Self {
            total_amount,
            invoice_date,
            due_date,
            invoice_number: None,
            client_name: None,
            client_address: None,
        }
    }

    /// Build a snapshot from extracted text fields; dates go through
    /// [`parse_date`], so a malformed date is an `InvalidInput` error.
    pub fn from_extracted(
        total_amount: Decimal,
        invoice_date: &str,
        due_date: &str,
    ) -> Result<Self, MahnError> {
        let invoice_date = parse_date(invoice_date).map_err(|e| {
            MahnError::InvalidInput(format!("invoice date: {e}"))
        })?;
        let due_date = parse_date(due_date)
            .map_err(|e| MahnError::InvalidInput(format!("due date: {e}")))?;
        Ok(Self::new(total_amount, invoice_date, due_date))
    }

    /// Set the invoice number.
    pub fn invoice_number(mut self, number: impl Into<String>) -> Self {
        self.invoice_number = Some(number.into());
        self
    }

    /// Set debtor name and address.
    pub fn client(mut self, name: impl Into<String>, address: impl Into<String>) -> Self {
        self.client_name = Some(name.into());
        self.client_address = Some(address.into());
        self
    }
}

/// Outcome of a late-payment computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateFeeResult {
    /// Classification the figures were computed for.
    pub classification: ClientClassification,
    /// Whole days past the due date (0 if not yet due).
    pub days_overdue: u32,
    /// Basiszinssatz used, as a fraction.
    pub base_rate: Decimal,
    /// Base rate + surcharge, as a fraction.
    pub annual_interest_rate: Decimal,
    /// Accrued Verzugszinsen, rounded to cents.
    pub interest_amount: Decimal,
    /// Verzugspauschale (0 for private debtors or when not overdue).
    pub flat_fee: Decimal,
    /// Original amount + interest + flat fee.
    pub new_total: Decimal,
}

impl LateFeeResult {
    /// Interest plus flat fee.
    pub fn total_late_fee(&self) -> Decimal {
        self.interest_amount + self.flat_fee
    }

    pub fn is_overdue(&self) -> bool {
        self.days_overdue > 0
    }
}

/// One bracket of the RVG fee schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RvgTableRow {
    /// Inclusive upper bound of the Gegenstandswert bracket.
    pub upper_bound: Decimal,
    /// Base fee at Gebührensatz 1.0.
    pub fee10: Decimal,
}

impl RvgTableRow {
    pub const fn new(upper_bound: Decimal, fee10: Decimal) -> Self {
        Self { upper_bound, fee10 }
    }
}

/// Itemized RVG fee estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RvgFeeResult {
    /// Base fee at 1.0, possibly extrapolated beyond the table.
    pub fee1_0: Decimal,
    /// Base fee × Gebührensatz, rounded.
    pub fee: Decimal,
    /// Auslagenpauschale (capped).
    pub auslagen: Decimal,
    /// Fee + Auslagen.
    pub subtotal: Decimal,
    /// Value-added tax on the subtotal.
    pub vat: Decimal,
    /// Subtotal + VAT.
    pub total: Decimal,
    /// Number of extrapolation steps beyond the last bracket.
    pub extra_units: u32,
}
