use std::sync::{Arc, PoisonError, RwLock};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::{MahnError, Result, RvgTableRow};

/// Built-in fee schedule: Gegenstandswert upper bound → 1.0 fee.
pub const DEFAULT_RVG_ROWS: [RvgTableRow; 7] = [
    RvgTableRow::new(dec!(500), dec!(51.50)),
    RvgTableRow::new(dec!(1_000), dec!(93.00)),
    RvgTableRow::new(dec!(5_000), dec!(223.00)),
    RvgTableRow::new(dec!(10_000), dec!(652.00)),
    RvgTableRow::new(dec!(50_000), dec!(1_234.00)),
    RvgTableRow::new(dec!(100_000), dec!(2_000.00)),
    RvgTableRow::new(dec!(500_000), dec!(3_539.00)),
];

/// Validated RVG fee table, sorted ascending by upper bound.
///
/// Construction is the only place table errors are reported; a value of
/// this type is always non-empty with positive bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RvgTable {
    rows: Vec<RvgTableRow>,
}

impl RvgTable {
    /// Validate and sort `rows`.
    ///
    /// An empty table is `InvalidInput`; a row with a non-positive upper
    /// bound is a `Configuration` error.
    pub fn new(mut rows: Vec<RvgTableRow>) -> Result<Self> {
        if rows.is_empty() {
            return Err(MahnError::InvalidInput("RVG table must not be empty".into()));
        }
        if let Some(bad) = rows.iter().find(|r| r.upper_bound <= Decimal::ZERO) {
            return Err(MahnError::Configuration(format!(
                "RVG table row has non-positive upper bound {}",
                bad.upper_bound
            )));
        }
        if let Some(bad) = rows.iter().find(|r| r.fee10 < Decimal::ZERO) {
            return Err(MahnError::Configuration(format!(
                "RVG table row for {} has negative fee {}",
                bad.upper_bound, bad.fee10
            )));
        }
        rows.sort_by(|a, b| a.upper_bound.cmp(&b.upper_bound));
        Ok(Self { rows })
    }

    /// Rows in ascending order.
    pub fn rows(&self) -> &[RvgTableRow] {
        &self.rows
    }

    /// Highest bracket.
    pub fn max_row(&self) -> &RvgTableRow {
        // non-empty by construction
        &self.rows[self.rows.len() - 1]
    }

    /// First bracket whose inclusive upper bound covers `claim_value`.
    pub fn lookup(&self, claim_value: Decimal) -> Option<&RvgTableRow> {
        self.rows.iter().find(|r| claim_value <= r.upper_bound)
    }
}

impl Default for RvgTable {
    fn default() -> Self {
        Self {
            rows: DEFAULT_RVG_ROWS.to_vec(),
        }
    }
}

/// Process-wide fee table that can be swapped while readers are active.
///
/// Readers take an `Arc` snapshot and keep computing against it; a
/// concurrent [`replace`](Self::replace) only affects later snapshots.
#[derive(Debug)]
pub struct SharedRvgTable {
    current: RwLock<Arc<RvgTable>>,
}

impl SharedRvgTable {
    pub fn new(table: RvgTable) -> Self {
        Self {
            current: RwLock::new(Arc::new(table)),
        }
    }

    /// Current table.
    pub fn snapshot(&self) -> Arc<RvgTable> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Install a new table, returning the previous one.
    pub fn replace(&self, table: RvgTable) -> Arc<RvgTable> {
        let next = Arc::new(table);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        tracing::info!(
            brackets = next.rows().len(),
            max_upper_bound = %next.max_row().upper_bound,
            "replacing RVG fee table"
        );
        std::mem::replace(&mut *guard, next)
    }
}

impl Default for SharedRvgTable {
    fn default() -> Self {
        Self::new(RvgTable::default())
    }
}
