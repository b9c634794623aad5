use anyhow::Result;

use crate::cli::ui;
use crate::engine::{ConversionEngine, quick_table};
use crate::rates::{DEFAULT_CURRENCIES, RateProvider};

/// Converts an amount and prints the result with the popular-currency table.
pub async fn run(
    provider: &dyn RateProvider,
    amount: &str,
    from: &str,
    to: &str,
) -> Result<()> {
    let mut engine = ConversionEngine::new(provider);

    let pb = ui::new_spinner("Fetching rates...");
    let result = engine.convert(from, to, amount).await;
    pb.finish_and_clear();

    let conversion = result?;
    println!(
        "{}",
        ui::style_text(&conversion.summary(), ui::StyleType::ResultValue)
    );

    let rows = quick_table(conversion.amount, &conversion.rates, &DEFAULT_CURRENCIES);
    if rows.is_empty() {
        return Ok(());
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell("Converted"),
    ]);
    for (code, value) in rows {
        table.add_row(vec![
            comfy_table::Cell::new(code),
            ui::value_cell(&format!("{value:.2}")),
        ]);
    }

    println!("\n{table}");
    Ok(())
}
