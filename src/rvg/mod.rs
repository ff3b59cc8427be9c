//! RVG lawyer-fee estimates (Rechtsanwaltsvergütungsgesetz).
//!
//! Looks up the 1.0 base fee for a Gegenstandswert in a bracketed fee
//! table, applies the Gebührensatz and adds Auslagenpauschale and VAT.
//! Values above the last bracket are extrapolated linearly, so the result
//! is an estimate, not a binding fee calculation.
//!
//! # Example
//!
//! ```
//! use mahnwerk::rvg::*;
//! use rust_decimal_macros::dec;
//!
//! let table = RvgTable::default();
//! let r = compute_rvg_fee(dec!(1043.46), dec!(1.3), &table, &RvgOptions::default()).unwrap();
//! assert_eq!(r.fee, dec!(289.90));
//! assert_eq!(r.auslagen, dec!(20.00));
//! assert_eq!(r.total, dec!(368.78));
//! ```

mod fee;
mod table;

pub use crate::core::{RvgFeeResult, RvgTableRow};
pub use fee::{RvgOptions, compute_rvg_fee, compute_rvg_fee_from_rows};
pub use table::{DEFAULT_RVG_ROWS, RvgTable, SharedRvgTable};
