use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::table::RvgTable;
use crate::core::{
    AUSLAGEN_CAP, AUSLAGEN_RATE, INCREMENT_PER_50K, INCREMENT_STEP, MahnError, Result,
    RvgFeeResult, RvgTableRow, StatutoryConfig, VAT_RATE, round2,
};

/// Switches and rates for an RVG estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RvgOptions {
    /// Add the Auslagenpauschale (default: true).
    pub with_auslagen_pauschale: bool,
    /// Add VAT (default: true).
    pub with_vat: bool,
    /// §19 UStG small business: never charges VAT, overriding `with_vat`.
    pub is_kleinunternehmer: bool,
    /// Added to the last bracket's fee per started `increment_step`.
    pub increment_per_50k: Decimal,
    /// Claim-value step for the extrapolation (50,000 EUR).
    pub increment_step: Decimal,
    /// VAT rate as a fraction.
    pub vat_rate: Decimal,
    /// Auslagenpauschale as a fraction of the fee.
    pub auslagen_rate: Decimal,
    /// Upper limit of the Auslagenpauschale.
    pub auslagen_cap: Decimal,
}

impl Default for RvgOptions {
    fn default() -> Self {
        Self {
            with_auslagen_pauschale: true,
            with_vat: true,
            is_kleinunternehmer: false,
            increment_per_50k: INCREMENT_PER_50K,
            increment_step: INCREMENT_STEP,
            vat_rate: VAT_RATE,
            auslagen_rate: AUSLAGEN_RATE,
            auslagen_cap: AUSLAGEN_CAP,
        }
    }
}

impl RvgOptions {
    /// Default switches with rates taken from `config`.
    pub fn from_config(config: &StatutoryConfig) -> Self {
        Self {
            increment_per_50k: config.increment_per_50k,
            increment_step: config.increment_step,
            vat_rate: config.vat_rate,
            auslagen_rate: config.auslagen_rate,
            auslagen_cap: config.auslagen_cap,
            ..Self::default()
        }
    }

    /// Enable or disable VAT.
    pub fn with_vat(mut self, with_vat: bool) -> Self {
        self.with_vat = with_vat;
        self
    }

    /// Enable or disable the Auslagenpauschale.
    pub fn with_auslagen_pauschale(mut self, enabled: bool) -> Self {
        self.with_auslagen_pauschale = enabled;
        self
    }

    /// Mark the lawyer as Kleinunternehmer (no VAT).
    pub fn kleinunternehmer(mut self, is_kleinunternehmer: bool) -> Self {
        self.is_kleinunternehmer = is_kleinunternehmer;
        self
    }

    /// Set the fee increment per extrapolation step.
    pub fn increment_per_50k(mut self, increment: Decimal) -> Self {
        self.increment_per_50k = increment;
        self
    }

    fn charges_vat(&self) -> bool {
        self.with_vat && !self.is_kleinunternehmer
    }
}

/// Estimate the RVG fee for `claim_value` (Gegenstandswert) at
/// `fee_multiplier` (Gebührensatz).
///
/// Fee, Auslagen, subtotal, VAT and total are each rounded to cents as
/// they are computed, not once at the end.
pub fn compute_rvg_fee(
    claim_value: Decimal,
    fee_multiplier: Decimal,
    table: &RvgTable,
    options: &RvgOptions,
) -> Result<RvgFeeResult> {
    if claim_value <= Decimal::ZERO {
        return Err(MahnError::InvalidInput(format!(
            "claim value must be positive, got {claim_value}"
        )));
    }
    if fee_multiplier <= Decimal::ZERO {
        return Err(MahnError::InvalidInput(format!(
            "fee multiplier must be positive, got {fee_multiplier}"
        )));
    }
    if options.increment_step <= Decimal::ZERO {
        return Err(MahnError::Configuration(format!(
            "increment step must be positive, got {}",
            options.increment_step
        )));
    }

    let (fee1_0, extra_units) = match table.lookup(claim_value) {
        Some(row) => (row.fee10, 0),
        None => extrapolate(claim_value, table.max_row(), options)?,
    };

    let fee = fee1_0
        .checked_mul(fee_multiplier)
        .map(round2)
        .ok_or_else(|| overflow(claim_value))?;
    let auslagen = if options.with_auslagen_pauschale {
        options
            .auslagen_rate
            .checked_mul(fee)
            .map(round2)
            .ok_or_else(|| overflow(claim_value))?
            .min(options.auslagen_cap)
    } else {
        Decimal::ZERO
    };
    let subtotal = fee
        .checked_add(auslagen)
        .map(round2)
        .ok_or_else(|| overflow(claim_value))?;
    let vat = if options.charges_vat() {
        subtotal
            .checked_mul(options.vat_rate)
            .map(round2)
            .ok_or_else(|| overflow(claim_value))?
    } else {
        Decimal::ZERO
    };
    let total = subtotal
        .checked_add(vat)
        .map(round2)
        .ok_or_else(|| overflow(claim_value))?;

    tracing::debug!(
        %claim_value,
        %fee_multiplier,
        %fee1_0,
        extra_units,
        %fee,
        %auslagen,
        %vat,
        %total,
        "computed RVG fee"
    );

    Ok(RvgFeeResult {
        fee1_0,
        fee,
        auslagen,
        subtotal,
        vat,
        total,
        extra_units,
    })
}

/// Like [`compute_rvg_fee`], for a raw row list that may be unsorted.
pub fn compute_rvg_fee_from_rows(
    claim_value: Decimal,
    fee_multiplier: Decimal,
    rows: &[RvgTableRow],
    options: &RvgOptions,
) -> Result<RvgFeeResult> {
    let table = RvgTable::new(rows.to_vec())?;
    compute_rvg_fee(claim_value, fee_multiplier, &table, options)
}

fn extrapolate(
    claim_value: Decimal,
    max_row: &RvgTableRow,
    options: &RvgOptions,
) -> Result<(Decimal, u32)> {
    let excess = claim_value - max_row.upper_bound;
    let units = excess
        .checked_div(options.increment_step)
        .and_then(|steps| steps.ceil().to_u32())
        .ok_or_else(|| overflow(claim_value))?;
    let fee1_0 = options
        .increment_per_50k
        .checked_mul(Decimal::from(units))
        .and_then(|inc| inc.checked_add(max_row.fee10))
        .ok_or_else(|| overflow(claim_value))?;

    tracing::warn!(
        %claim_value,
        max_upper_bound = %max_row.upper_bound,
        extra_units = units,
        "claim value exceeds RVG table, extrapolating"
    );
    Ok((fee1_0, units))
}

fn overflow(claim_value: Decimal) -> MahnError {
    MahnError::InvalidInput(format!("claim value {claim_value} is out of range"))
}
