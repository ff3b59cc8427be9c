use chrono::NaiveDate;
use mahnwerk::core::*;
use mahnwerk::mahnung::assess;
use mahnwerk::rvg::RvgTable;
use rust_decimal_macros::dec;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mahnwerk=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() {
    init_logger();

    // ── 1. Invoice fields as handed over by the extraction step ──────
    let invoice = InvoiceSnapshot::from_extracted(dec!(2380.00), "02.04.2024", "2024-05-02")
        .expect("valid dates")
        .invoice_number("RE-2024-042")
        .client("Kunde AG", "Marienplatz 1\n80331 München");
    let today = NaiveDate::from_ymd_opt(2024, 6, 17).unwrap();
    let config = StatutoryConfig::default();
    let table = RvgTable::default();

    // ── 2. Both debtor classifications ───────────────────────────────
    for classification in [
        ClientClassification::Company,
        ClientClassification::PrivateIndividual,
    ] {
        println!("=== {classification} ===");
        match assess(&invoice, classification, today, &config, &table) {
            Ok(a) => {
                let d = a.demands();
                println!("  Tage überfällig:   {}", a.late_fee.days_overdue);
                println!("  Zinssatz p.a.:     {}", a.late_fee.annual_interest_rate);
                println!("  Hauptforderung:    {}", d.main_amount);
                println!("  Verzugszinsen:     {}", d.interest_amount);
                if !d.flat_fee.is_empty() {
                    println!("  Verzugspauschale:  {}", d.flat_fee);
                }
                println!("  Gesamtforderung:   {}", d.total_amount);
                println!(
                    "  RVG (1,3): Gebühr {}, Auslagen {}, USt {}, Gesamt {}",
                    format_eur(a.rvg.fee),
                    format_eur(a.rvg.auslagen),
                    format_eur(a.rvg.vat),
                    format_eur(a.rvg.total)
                );
            }
            Err(e) => println!("  Fehler: {e}"),
        }
    }

    // ── 3. Too recent ────────────────────────────────────────────────
    println!("\n=== Too recent ===");
    let fresh = InvoiceSnapshot::new(dec!(500), today - chrono::Duration::days(12), today);
    if let Err(e) = assess(&fresh, ClientClassification::Company, today, &config, &table) {
        println!("  {e}");
    }
}
