//! Non-interactive result printing.
//!
//! One-shot and wizard runs end here: the breakdown is rendered as a small
//! table with a highlighted per-person line, or as JSON for scripting.

use colored::Colorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tipsplit_core::prelude::*;

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Prints the breakdown as a table with the per-person total called out.
pub fn print_breakdown(breakdown: &TipBreakdown, config: &TipConfig) {
    let display = breakdown.to_display(config);
    let label = breakdown.label.as_deref().unwrap_or("Bill");

    let rows = vec![
        BreakdownRow {
            item: format!("{} ({})", label, display.currency_code),
            amount: display.bill.clone(),
        },
        BreakdownRow {
            item: format!("Tip ({})", display.percent_label),
            amount: display.tip.clone(),
        },
        BreakdownRow {
            item: "Total with tip".to_string(),
            amount: display.total.clone(),
        },
        BreakdownRow {
            item: format!("Split {} way(s)", display.split_count),
            amount: display.per_person.clone(),
        },
    ];

    let table = Table::new(rows).with(Style::rounded()).to_string();

    println!("\n{}", table);
    println!(
        "\n{} {}\n",
        "Each person pays:".bold(),
        display.per_person.bright_green().bold()
    );
}

/// Prints the step-by-step calculation trace.
pub fn print_trace(breakdown: &TipBreakdown) {
    println!("{}", breakdown.explain().dimmed());
}

/// Prints the breakdown as pretty JSON.
pub fn print_json(breakdown: &TipBreakdown) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(breakdown)?);
    Ok(())
}
