use anyhow::Result;

use crate::models::{totals, BudgetRecord};
use crate::ui::util::format_amount;

pub(crate) fn as_cli(args: &[String], budgets: &[BudgetRecord]) -> Result<()> {
    match args[1].as_str() {
        "budgets" | "b" => cli_budgets(budgets),
        "summary" | "s" => cli_summary(budgets),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("spendview {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Spendview — terminal viewer for monthly budgets and spending");
    println!();
    println!("Usage: spendview [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  budgets                       Print the monthly budget table");
    println!("  summary                       Print budgeted/spent/remaining totals");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn cli_budgets(budgets: &[BudgetRecord]) -> Result<()> {
    if budgets.is_empty() {
        println!("No budget months");
        return Ok(());
    }

    println!("{:<18} {:>12} {:>12}", "Month", "Budgeted", "Spent");
    println!("{}", "─".repeat(44));
    for rec in budgets {
        let flag = if rec.is_overspent() {
            "  (over budget)"
        } else {
            ""
        };
        println!(
            "{:<18} {:>12} {:>12}{flag}",
            rec.label(),
            format_amount(rec.value),
            format_amount(rec.spent),
        );
    }
    Ok(())
}

fn cli_summary(budgets: &[BudgetRecord]) -> Result<()> {
    let today = chrono::Local::now().format("%Y-%m-%d");
    let t = totals(budgets);

    println!("Spendview — {today}");
    println!("{}", "─".repeat(40));
    println!("  Months:     {}", budgets.len());
    println!("  Budgeted:   {}", format_amount(t.value));
    println!("  Spent:      {}", format_amount(t.spent));
    println!("  Remaining:  {}", format_amount(t.remaining()));

    let over: Vec<String> = budgets
        .iter()
        .filter(|r| r.is_overspent())
        .map(|r| r.label())
        .collect();
    if !over.is_empty() {
        println!();
        println!("Over budget: {}", over.join(", "));
    }

    Ok(())
}
