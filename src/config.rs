//! Loading statutory constants and the RVG table from a JSON document.
//!
//! ```json
//! {
//!   "statutory": { "base_rate": "0.0337", "company_flat_fee": "40.00" },
//!   "rvg_table": [
//!     { "upperBound": "500", "fee10": "51.50" },
//!     { "upperBound": "1000", "fee10": "93.00" }
//!   ]
//! }
//! ```
//!
//! `statutory.base_rate` and `statutory.company_flat_fee` are required.
//! A missing `rvg_table` selects the built-in schedule. Every error here
//! is reported at load time, never during a computation.

use serde::Deserialize;

use crate::core::{MahnError, Result, RvgTableRow, StatutoryConfig};
use crate::rvg::RvgTable;

/// Validated configuration for one process.
#[derive(Debug, Clone, PartialEq)]
pub struct MahnConfig {
    pub statutory: StatutoryConfig,
    pub rvg_table: RvgTable,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    statutory: StatutoryConfig,
    #[serde(default)]
    rvg_table: Option<Vec<RvgTableRow>>,
}

impl Default for MahnConfig {
    fn default() -> Self {
        Self {
            statutory: StatutoryConfig::default(),
            rvg_table: RvgTable::default(),
        }
    }
}

/// Parse and validate a configuration document.
pub fn load_config_json(json: &str) -> Result<MahnConfig> {
    let raw: RawConfig = serde_json::from_str(json)
        .map_err(|e| MahnError::Configuration(format!("malformed configuration: {e}")))?;

    raw.statutory.validate()?;
    let rvg_table = match raw.rvg_table {
        Some(rows) => RvgTable::new(rows).map_err(|e| match e {
            MahnError::InvalidInput(msg) => MahnError::Configuration(msg),
            other => other,
        })?,
        None => RvgTable::default(),
    };

    tracing::info!(
        base_rate = %raw.statutory.base_rate,
        brackets = rvg_table.rows().len(),
        "loaded statutory configuration"
    );

    Ok(MahnConfig {
        statutory: raw.statutory,
        rvg_table,
    })
}
