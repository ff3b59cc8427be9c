//! Core value types, errors, rounding, dates and statutory configuration.
//!
//! Everything here is shared by the late-fee calculator and the RVG
//! estimator.

mod config;
mod dates;
mod error;
mod money;
mod types;

pub use config::*;
pub use dates::*;
pub use error::*;
pub use money::*;
pub use types::*;
