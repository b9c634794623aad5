use anyhow::Result;

use crate::cli::ui;
use crate::engine::ConversionEngine;
use crate::rates::RateProvider;

/// Prints the synthetic rate trend for a currency pair.
pub async fn run(provider: &dyn RateProvider, from: &str, to: &str, days: usize) -> Result<()> {
    let engine = ConversionEngine::new(provider);

    let pb = ui::new_spinner("Fetching rates...");
    let series = engine.build_trend(from, to, days).await;
    pb.finish_and_clear();

    println!(
        "{}\n",
        ui::style_text(
            &format!("{from} to {to}, last {days} days"),
            ui::StyleType::Title
        )
    );

    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Date"), ui::header_cell("Rate")]);
    for point in &series {
        table.add_row(vec![
            comfy_table::Cell::new(&point.label),
            ui::value_cell(&format!("{:.4}", point.value)),
        ]);
    }

    println!("{table}");
    Ok(())
}
