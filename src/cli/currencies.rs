use anyhow::Result;

use crate::cli::ui;
use crate::rates::RateProvider;

/// Lists the currency codes known to the rate source.
pub async fn run(provider: &dyn RateProvider) -> Result<()> {
    let pb = ui::new_spinner("Fetching currency list...");
    let currencies = provider.list_currencies().await;
    pb.finish_and_clear();

    println!(
        "{}",
        ui::style_text(
            &format!("Known currencies ({})", currencies.len()),
            ui::StyleType::Title
        )
    );
    for code in currencies {
        println!("{code}");
    }
    Ok(())
}
