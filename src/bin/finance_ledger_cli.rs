use std::{env, process};

use finance_ledger::{
    cli::{dashboard_lines, output},
    config::ConfigManager,
    core::services::SummaryService,
    init,
    ledger::{Ledger, Month},
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut month = None;
    let mut json = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--no-color" => output::disable_colors(),
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            raw if month.is_none() => month = Some(Month::parse(raw)?),
            _ => {
                print_usage();
                process::exit(1);
            }
        }
    }
    let month = month.unwrap_or_else(Month::current);

    let config = ConfigManager::new().load()?;
    let ledger = if config.seed_demo_data {
        Ledger::seeded()
    } else {
        Ledger::new()
    };
    tracing::debug!(%month, transactions = ledger.transactions().len(), "building report");

    let dashboard = SummaryService::dashboard(&ledger, month, config.recent_limit);
    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }
    for line in dashboard_lines(&ledger, &dashboard, &config) {
        output::print(line.kind, line.text);
    }
    Ok(())
}

fn print_usage() {
    eprintln!(
        "Usage: finance_ledger_cli [YYYY-MM] [--json] [--no-color]\n\
         Prints the dashboard for the given month (default: current month)."
    );
}
