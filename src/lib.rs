//! # mahnwerk
//!
//! Fee math for German payment reminders (Mahnungen): statutory default
//! interest (Verzugszinsen, § 288 BGB), the Verzugspauschale for commercial
//! debtors, and advisory RVG lawyer-fee estimates on the resulting claim.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Statutory constants (Basiszinssatz, flat fee, VAT, Auslagen cap) are
//! injected through [`core::StatutoryConfig`].
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use mahnwerk::core::*;
//! use mahnwerk::mahnung::assess;
//! use mahnwerk::rvg::RvgTable;
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceSnapshot::from_extracted(dec!(1000), "2024-01-15", "01.03.2024").unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
//!
//! let a = assess(
//!     &invoice,
//!     ClientClassification::Company,
//!     today,
//!     &StatutoryConfig::default(),
//!     &RvgTable::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(a.late_fee.interest_amount, dec!(3.46));
//! assert_eq!(a.late_fee.new_total, dec!(1043.46));
//! assert_eq!(a.rvg.total, dec!(368.78));
//! assert_eq!(a.demands().total_amount, "1.043,46 €");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Value types, errors, rounding, dates, statutory config |
//! | `verzug` | Verzugszinsen / Verzugspauschale calculator |
//! | `rvg` | RVG fee table and estimator |
//! | `mahnung` | Invoice-age gate, combined assessment, demand figures |
//! | `config` | JSON configuration loading |
//! | `all` | Everything (also the default) |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "verzug")]
pub mod verzug;

#[cfg(feature = "rvg")]
pub mod rvg;

#[cfg(feature = "mahnung")]
pub mod mahnung;

#[cfg(feature = "config")]
pub mod config;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
