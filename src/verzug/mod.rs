//! Verzugszinsen and Verzugspauschale for overdue invoices.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use mahnwerk::core::*;
//! use mahnwerk::verzug::compute_late_fee;
//! use rust_decimal_macros::dec;
//!
//! let due = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
//! let r = compute_late_fee(
//!     dec!(1000),
//!     due,
//!     today,
//!     ClientClassification::Company,
//!     &StatutoryConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(r.days_overdue, 10);
//! assert_eq!(r.interest_amount, dec!(3.46));
//! assert_eq!(r.new_total, dec!(1043.46));
//! ```

mod calculator;

pub use calculator::{compute_late_fee, compute_late_fee_with_rate, days_overdue};
