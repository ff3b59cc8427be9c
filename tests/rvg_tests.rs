#![cfg(feature = "rvg")]

use std::sync::Arc;
use std::thread;

use mahnwerk::core::MahnError;
use mahnwerk::rvg::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn estimate(claim: Decimal, multiplier: Decimal) -> RvgFeeResult {
    compute_rvg_fee(claim, multiplier, &RvgTable::default(), &RvgOptions::default()).unwrap()
}

// ---------------------------------------------------------------------------
// Bracket lookup
// ---------------------------------------------------------------------------

#[test]
fn every_upper_bound_is_inclusive() {
    for row in DEFAULT_RVG_ROWS {
        let r = estimate(row.upper_bound, dec!(1.0));
        assert_eq!(r.fee1_0, row.fee10, "bound {}", row.upper_bound);
        assert_eq!(r.extra_units, 0);
    }
}

#[test]
fn one_cent_above_bound_moves_to_next_bracket() {
    assert_eq!(estimate(dec!(1000.01), dec!(1.0)).fee1_0, dec!(223.00));
    assert_eq!(estimate(dec!(10000.01), dec!(1.0)).fee1_0, dec!(1234.00));
}

#[test]
fn tiny_claim_uses_first_bracket() {
    assert_eq!(estimate(dec!(0.01), dec!(1.0)).fee1_0, dec!(51.50));
}

// ---------------------------------------------------------------------------
// Extrapolation
// ---------------------------------------------------------------------------

#[test]
fn one_unit_above_max() {
    let r = estimate(dec!(500_001), dec!(1.0));
    assert_eq!(r.extra_units, 1);
    assert_eq!(r.fee1_0, dec!(3539.00) + dec!(175));
}

#[test]
fn six_hundred_thousand() {
    let r = estimate(dec!(600_000), dec!(1.0));
    assert_eq!(r.extra_units, 2);
    assert_eq!(r.fee1_0, dec!(3889.00));
}

#[test]
fn exact_step_multiple_does_not_add_a_unit() {
    assert_eq!(estimate(dec!(550_000), dec!(1.0)).extra_units, 1);
    assert_eq!(estimate(dec!(550_000.01), dec!(1.0)).extra_units, 2);
}

#[test]
fn custom_increment() {
    let opts = RvgOptions::default().increment_per_50k(dec!(200));
    let r = compute_rvg_fee(dec!(600_000), dec!(1.0), &RvgTable::default(), &opts).unwrap();
    assert_eq!(r.fee1_0, dec!(3939.00));
}

// ---------------------------------------------------------------------------
// Itemization
// ---------------------------------------------------------------------------

#[test]
fn reference_breakdown() {
    let r = estimate(dec!(1043.46), dec!(1.3));
    assert_eq!(r.fee, dec!(289.90));
    assert_eq!(r.auslagen, dec!(20.00));
    assert_eq!(r.subtotal, dec!(309.90));
    assert_eq!(r.vat, dec!(58.88));
    assert_eq!(r.total, dec!(368.78));
}

#[test]
fn auslagen_cap_reached_exactly_at_100() {
    let table = RvgTable::new(vec![RvgTableRow::new(dec!(1000), dec!(100))]).unwrap();
    let r = compute_rvg_fee(dec!(500), dec!(1.0), &table, &RvgOptions::default()).unwrap();
    assert_eq!(r.auslagen, dec!(20));
}

#[test]
fn auslagen_capped_for_large_fee() {
    let r = estimate(dec!(450_000), dec!(1.3));
    assert_eq!(r.fee, dec!(4600.70));
    assert_eq!(r.auslagen, dec!(20));
}

#[test]
fn auslagen_rounded_independently() {
    // fee 51.50 * 0.5 = 25.75; 20 % = 5.15
    let r = estimate(dec!(100), dec!(0.5));
    assert_eq!(r.fee, dec!(25.75));
    assert_eq!(r.auslagen, dec!(5.15));
    assert_eq!(r.subtotal, dec!(30.90));
    // 30.90 * 0.19 = 5.871
    assert_eq!(r.vat, dec!(5.87));
    assert_eq!(r.total, dec!(36.77));
}

#[test]
fn fee_rounded_half_away_from_zero() {
    // 51.50 * 0.25 = 12.875 → 12.88
    let opts = RvgOptions::default().with_auslagen_pauschale(false).with_vat(false);
    let r = compute_rvg_fee(dec!(100), dec!(0.25), &RvgTable::default(), &opts).unwrap();
    assert_eq!(r.fee, dec!(12.88));
}

#[test]
fn kleinunternehmer_overrides_vat_flag() {
    let opts = RvgOptions::default().with_vat(true).kleinunternehmer(true);
    let r = compute_rvg_fee(dec!(1043.46), dec!(1.3), &RvgTable::default(), &opts).unwrap();
    assert_eq!(r.vat, Decimal::ZERO);
    assert_eq!(r.total, dec!(309.90));
}

#[test]
fn vat_rate_from_options() {
    let opts = RvgOptions {
        vat_rate: dec!(0.16),
        ..RvgOptions::default()
    };
    let r = compute_rvg_fee(dec!(1043.46), dec!(1.3), &RvgTable::default(), &opts).unwrap();
    // 309.90 * 0.16 = 49.584
    assert_eq!(r.vat, dec!(49.58));
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn non_positive_inputs_rejected() {
    let t = RvgTable::default();
    let o = RvgOptions::default();
    assert!(matches!(
        compute_rvg_fee(dec!(-1), dec!(1.3), &t, &o),
        Err(MahnError::InvalidInput(_))
    ));
    assert!(matches!(
        compute_rvg_fee(dec!(1000), Decimal::ZERO, &t, &o),
        Err(MahnError::InvalidInput(_))
    ));
}

#[test]
fn bad_table_fails_at_load_time() {
    let err = RvgTable::new(vec![RvgTableRow::new(dec!(-500), dec!(51.5))]).unwrap_err();
    assert!(matches!(err, MahnError::Configuration(_)));
}

#[test]
fn zero_step_is_configuration_error() {
    let opts = RvgOptions {
        increment_step: Decimal::ZERO,
        ..RvgOptions::default()
    };
    let err = compute_rvg_fee(dec!(1000), dec!(1.3), &RvgTable::default(), &opts).unwrap_err();
    assert!(matches!(err, MahnError::Configuration(_)));
}

// ---------------------------------------------------------------------------
// Shared table
// ---------------------------------------------------------------------------

#[test]
fn readers_see_whole_tables_during_swap() {
    let shared = Arc::new(SharedRvgTable::default());
    let alt = RvgTable::new(vec![
        RvgTableRow::new(dec!(1000), dec!(100)),
        RvgTableRow::new(dec!(2000), dec!(200)),
    ])
    .unwrap();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for _ in 0..500 {
                    let t = shared.snapshot();
                    let n = t.rows().len();
                    assert!(n == 7 || n == 2, "partial table with {n} rows");
                    compute_rvg_fee(dec!(1500), dec!(1.3), &t, &RvgOptions::default()).unwrap();
                }
            })
        })
        .collect();

    for i in 0..50 {
        if i % 2 == 0 {
            shared.replace(alt.clone());
        } else {
            shared.replace(RvgTable::default());
        }
    }

    for r in readers {
        r.join().unwrap();
    }
}
