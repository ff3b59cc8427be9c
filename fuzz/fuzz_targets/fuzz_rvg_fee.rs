#![no_main]

use libfuzzer_sys::fuzz_target;
use mahnwerk::rvg::{RvgOptions, RvgTable, compute_rvg_fee};
use rust_decimal::Decimal;

fuzz_target!(|input: (i64, u32, i64, u32, bool, bool)| {
    let (claim_mantissa, claim_scale, mult_mantissa, mult_scale, vat, klein) = input;
    let claim = Decimal::new(claim_mantissa, claim_scale % 29);
    let multiplier = Decimal::new(mult_mantissa, mult_scale % 29);
    let opts = RvgOptions::default().with_vat(vat).kleinunternehmer(klein);
    // Must not panic, even for extreme values.
    let _ = compute_rvg_fee(claim, multiplier, &RvgTable::default(), &opts);
});
