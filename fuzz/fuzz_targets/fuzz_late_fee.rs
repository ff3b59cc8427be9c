#![no_main]

use chrono::{Duration, NaiveDate};
use libfuzzer_sys::fuzz_target;
use mahnwerk::core::{ClientClassification, StatutoryConfig};
use mahnwerk::verzug::compute_late_fee;
use rust_decimal::Decimal;

fuzz_target!(|input: ([u32; 3], bool, u32, i32, bool)| {
    let ([lo, mid, hi], negative, scale, days, company) = input;
    let amount = Decimal::from_parts(lo, mid, hi, negative, scale % 29);
    let Some(due) = NaiveDate::from_ymd_opt(2024, 1, 1) else {
        return;
    };
    let Some(today) = due.checked_add_signed(Duration::days(i64::from(days))) else {
        return;
    };
    let classification = if company {
        ClientClassification::Company
    } else {
        ClientClassification::PrivateIndividual
    };
    let _ = compute_late_fee(amount, due, today, classification, &StatutoryConfig::default());
});
