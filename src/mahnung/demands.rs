use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{LateFeeResult, format_eur};

/// Demand block of a reminder, formatted as German currency strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demands {
    pub main_amount: String,
    pub interest_amount: String,
    /// Empty when no Verzugspauschale is owed.
    pub flat_fee: String,
    pub total_amount: String,
}

impl Demands {
    /// Format the figures of `late_fee` for an invoice of `main_amount`.
    pub fn new(main_amount: Decimal, late_fee: &LateFeeResult) -> Self {
        let flat_fee = if late_fee.flat_fee.is_zero() {
            String::new()
        } else {
            format_eur(late_fee.flat_fee)
        };
        Self {
            main_amount: format_eur(main_amount),
            interest_amount: format_eur(late_fee.interest_amount),
            flat_fee,
            total_amount: format_eur(late_fee.new_total),
        }
    }
}
