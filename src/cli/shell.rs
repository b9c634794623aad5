//! Interactive conversion session.
//!
//! A line-oriented rendition of the screens the app exposes: Home,
//! Converter, History and About, navigated through the [`Screen`]
//! transition function. Conversions accumulate in the engine's bounded
//! history for the lifetime of the session.

use anyhow::Result;
use console::Term;

use crate::cli::ui;
use crate::config::AppConfig;
use crate::engine::{ConversionEngine, quick_table};
use crate::rates::{DEFAULT_CURRENCIES, RateProvider};
use crate::view::{NavAction, Screen};

pub async fn run(provider: &dyn RateProvider, config: &AppConfig) -> Result<()> {
    let term = Term::stdout();
    let mut engine = ConversionEngine::new(provider);
    let mut screen = Screen::default();

    show_screen(screen, &engine);
    loop {
        term.write_str(&format!("[{screen}] > "))?;
        let line = term.read_line()?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if let Some(action) = parse_nav(input) {
            screen = screen.navigate(action);
            show_screen(screen, &engine);
            continue;
        }

        match input {
            "quit" | "exit" => break,
            "clear" if screen == Screen::History => {
                engine.clear_history();
                println!("History cleared.");
            }
            _ if screen == Screen::Converter => {
                convert_line(&mut engine, config, input).await;
            }
            _ => println!(
                "{}",
                ui::style_text(
                    "Commands: home, converter, history, about, quit",
                    ui::StyleType::Subtle
                )
            ),
        }
    }
    Ok(())
}

fn parse_nav(input: &str) -> Option<NavAction> {
    match input {
        "home" => Some(NavAction::GoHome),
        "converter" => Some(NavAction::GoConverter),
        "history" => Some(NavAction::GoHistory),
        "about" => Some(NavAction::GoAbout),
        _ => None,
    }
}

fn show_screen(screen: Screen, engine: &ConversionEngine<'_>) {
    match screen {
        Screen::Home => {
            println!(
                "{}",
                ui::style_text("Currency Converter", ui::StyleType::Title)
            );
            println!("- converter: convert an amount, view the popular table");
            println!("- history: view recent conversions");
            println!("- about: about this app");
            println!("- quit: leave the session");
        }
        Screen::Converter => {
            println!(
                "{}",
                ui::style_text(
                    "Enter: <amount> [from] [to], e.g. 100 USD EUR",
                    ui::StyleType::Subtle
                )
            );
        }
        Screen::History => {
            if engine.history().is_empty() {
                println!("No conversions yet.");
            } else {
                for entry in engine.history().entries() {
                    println!("{entry}");
                }
                println!(
                    "{}",
                    ui::style_text("Type clear to empty the history.", ui::StyleType::Subtle)
                );
            }
        }
        Screen::About => {
            println!("Currency converter backed by a live exchange-rate API.");
            println!("Converts between currencies, shows a popular-currency");
            println!("table, a 7-day rate trend and recent conversion history.");
        }
    }
}

async fn convert_line(engine: &mut ConversionEngine<'_>, config: &AppConfig, input: &str) {
    let mut parts = input.split_whitespace();
    let amount = parts.next().unwrap_or_default();
    let from = parts
        .next()
        .map(str::to_uppercase)
        .unwrap_or_else(|| config.base_currency.clone());
    let to = parts
        .next()
        .map(str::to_uppercase)
        .unwrap_or_else(|| config.target_currency.clone());

    let pb = ui::new_spinner("Fetching rates...");
    let result = engine.convert(&from, &to, amount).await;
    pb.finish_and_clear();

    match result {
        Ok(conversion) => {
            println!(
                "{}",
                ui::style_text(&conversion.summary(), ui::StyleType::ResultValue)
            );
            for (code, value) in
                quick_table(conversion.amount, &conversion.rates, &DEFAULT_CURRENCIES)
            {
                println!("  {code}: {value:.2}");
            }
        }
        Err(e) => println!(
            "{}",
            ui::style_text(&format!("Error: {e}"), ui::StyleType::Error)
        ),
    }
}
