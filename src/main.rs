mod models;
mod run;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let budgets = models::sample::sample_budgets();

    match args.len() {
        1 => run::as_tui(budgets),
        2.. => run::as_cli(&args, &budgets),
        _ => {
            eprintln!("Usage: spendview [command]");
            Ok(())
        }
    }
}
