//! Statutory constants the fee computations depend on.
//!
//! The Basiszinssatz is published semi-annually by the Bundesbank
//! (1 January / 1 July), so none of these values live in the algorithms
//! themselves. Callers inject a [`StatutoryConfig`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::{MahnError, Result};

/// Basiszinssatz valid from 2024-01-01 (§ 247 BGB).
pub const BASISZINSSATZ_2024_H1: Decimal = dec!(0.0362);

/// Surcharge over the base rate for commercial debtors (§ 288 Abs. 2 BGB).
pub const COMPANY_SURCHARGE: Decimal = dec!(0.09);

/// Surcharge over the base rate for consumers (§ 288 Abs. 1 BGB).
pub const PRIVATE_SURCHARGE: Decimal = dec!(0.05);

/// Verzugspauschale for commercial debtors (§ 288 Abs. 5 BGB).
pub const VERZUGSPAUSCHALE: Decimal = dec!(40.00);

/// German standard VAT rate.
pub const VAT_RATE: Decimal = dec!(0.19);

/// Auslagenpauschale: 20 % of the fee ...
pub const AUSLAGEN_RATE: Decimal = dec!(0.20);

/// ... capped at 20 EUR (Nr. 7002 VV RVG).
pub const AUSLAGEN_CAP: Decimal = dec!(20.00);

/// Fee increment per started 50,000 EUR beyond the tabulated range.
pub const INCREMENT_PER_50K: Decimal = dec!(175);

/// Claim-value step for the extrapolation above the table.
pub const INCREMENT_STEP: Decimal = dec!(50_000);

/// 1.3 Geschäftsgebühr (Nr. 2300 VV RVG).
pub const GESCHAEFTSGEBUEHR: Decimal = dec!(1.3);

/// Statutory parameters for interest, flat fee and RVG estimates.
///
/// Rates are fractions (`0.0362` = 3.62 %). In a configuration document
/// `base_rate` and `company_flat_fee` are required; everything else
/// falls back to the current statutory value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatutoryConfig {
    pub base_rate: Decimal,
    #[serde(default = "default_company_surcharge")]
    pub company_surcharge: Decimal,
    #[serde(default = "default_private_surcharge")]
    pub private_surcharge: Decimal,
    pub company_flat_fee: Decimal,
    #[serde(default = "default_days_per_year")]
    pub days_per_year: u32,
    #[serde(default = "default_vat_rate")]
    pub vat_rate: Decimal,
    #[serde(default = "default_auslagen_rate")]
    pub auslagen_rate: Decimal,
    #[serde(default = "default_auslagen_cap")]
    pub auslagen_cap: Decimal,
    #[serde(default = "default_increment_per_50k")]
    pub increment_per_50k: Decimal,
    #[serde(default = "default_increment_step")]
    pub increment_step: Decimal,
    #[serde(default = "default_gebuehrensatz")]
    pub gebuehrensatz: Decimal,
    #[serde(default = "default_min_invoice_age_days")]
    pub min_invoice_age_days: u32,
}

fn default_company_surcharge() -> Decimal {
    COMPANY_SURCHARGE
}
fn default_private_surcharge() -> Decimal {
    PRIVATE_SURCHARGE
}
fn default_days_per_year() -> u32 {
    365
}
fn default_vat_rate() -> Decimal {
    VAT_RATE
}
fn default_auslagen_rate() -> Decimal {
    AUSLAGEN_RATE
}
fn default_auslagen_cap() -> Decimal {
    AUSLAGEN_CAP
}
fn default_increment_per_50k() -> Decimal {
    INCREMENT_PER_50K
}
fn default_increment_step() -> Decimal {
    INCREMENT_STEP
}
fn default_gebuehrensatz() -> Decimal {
    GESCHAEFTSGEBUEHR
}
fn default_min_invoice_age_days() -> u32 {
    30
}

impl Default for StatutoryConfig {
    fn default() -> Self {
        Self {
            base_rate: BASISZINSSATZ_2024_H1,
            company_surcharge: COMPANY_SURCHARGE,
            private_surcharge: PRIVATE_SURCHARGE,
            company_flat_fee: VERZUGSPAUSCHALE,
            days_per_year: default_days_per_year(),
            vat_rate: VAT_RATE,
            auslagen_rate: AUSLAGEN_RATE,
            auslagen_cap: AUSLAGEN_CAP,
            increment_per_50k: INCREMENT_PER_50K,
            increment_step: INCREMENT_STEP,
            gebuehrensatz: GESCHAEFTSGEBUEHR,
            min_invoice_age_days: default_min_invoice_age_days(),
        }
    }
}

impl StatutoryConfig {
    /// Default configuration with a different Basiszinssatz.
    pub fn with_base_rate(base_rate: Decimal) -> Self {
        Self {
            base_rate,
            ..Self::default()
        }
    }

    /// Check the configuration for values no statutory rule could produce.
    ///
    /// The base rate itself may be negative (it was from 2013 to 2022), but
    /// the resulting default-interest rates may not.
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("company_surcharge", self.company_surcharge),
            ("private_surcharge", self.private_surcharge),
            ("company_flat_fee", self.company_flat_fee),
            ("vat_rate", self.vat_rate),
            ("auslagen_rate", self.auslagen_rate),
            ("auslagen_cap", self.auslagen_cap),
            ("increment_per_50k", self.increment_per_50k),
        ];
        for (field, value) in non_negative {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(MahnError::Configuration(format!(
                    "{field} must not be negative, got {value}"
                )));
            }
        }

        let lowest_rate = self.base_rate + self.company_surcharge.min(self.private_surcharge);
        if lowest_rate < Decimal::ZERO {
            return Err(MahnError::Configuration(format!(
                "base rate {} yields a negative default-interest rate",
                self.base_rate
            )));
        }
        if self.days_per_year == 0 {
            return Err(MahnError::Configuration(
                "days_per_year must be positive".into(),
            ));
        }
        if self.increment_step <= Decimal::ZERO {
            return Err(MahnError::Configuration(format!(
                "increment_step must be positive, got {}",
                self.increment_step
            )));
        }
        if self.gebuehrensatz <= Decimal::ZERO {
            return Err(MahnError::Configuration(format!(
                "gebuehrensatz must be positive, got {}",
                self.gebuehrensatz
            )));
        }
        Ok(())
    }
}
