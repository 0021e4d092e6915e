mod shell;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::{CategoryReport, JournalService, MonthlyReport};
use crate::domain::{format_amount, parse_amount, parse_date};

/// Spesa - Personal Expense Journal
#[derive(Parser)]
#[command(name = "spesa")]
#[command(about = "A local-first expense journal for the command line")]
#[command(version)]
pub struct Cli {
    /// Ledger file path
    #[arg(short, long, default_value = "spesa.csv")]
    pub ledger: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new ledger file
    Init,

    /// Record an expense
    Add {
        /// Date of the expense (YYYY-MM-DD)
        date: String,

        /// Category label (e.g., "Food", "Transport")
        category: String,

        /// Amount spent (e.g., "12.50" or "12")
        amount: String,
    },

    /// List all recorded transactions
    List,

    /// Generate aggregate views of the journal
    #[command(subcommand)]
    Report(ReportCommands),

    /// Start the interactive menu
    Shell,
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Total spending per category
    Category {
        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Month-by-month spending trend
    Monthly {
        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Init => {
                JournalService::init(&self.ledger)?;
                println!("Ledger initialized: {}", self.ledger);
            }

            Commands::Add {
                date,
                category,
                amount,
            } => {
                let date = parse_date(&date)
                    .with_context(|| format!("Invalid date '{}'. Use YYYY-MM-DD", date))?;
                let amount = parse_amount(&amount)
                    .with_context(|| format!("Invalid amount '{}'. Use '12.50' or '12'", amount))?;

                let service = JournalService::init(&self.ledger)?;
                let tx = service.record(date, category, amount)?;
                println!(
                    "Logged: {} in {} on {}",
                    format_amount(tx.amount),
                    tx.category,
                    tx.date
                );
            }

            Commands::List => {
                let service = JournalService::open(&self.ledger);
                run_list_command(&service)?;
            }

            Commands::Report(report_cmd) => {
                let service = JournalService::open(&self.ledger);
                run_report_command(&service, report_cmd)?;
            }

            Commands::Shell => {
                let service = JournalService::init(&self.ledger)?;
                shell::run(&service)?;
            }
        }

        Ok(())
    }
}

fn run_list_command(service: &JournalService) -> Result<()> {
    let transactions = service.transactions()?;

    if transactions.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }

    println!("{:<12} {:<20} {:>10}", "DATE", "CATEGORY", "AMOUNT");
    println!("{}", "-".repeat(44));
    for tx in &transactions {
        println!(
            "{:<12} {:<20} {:>10}",
            tx.date,
            truncate(&tx.category, 20),
            format_amount(tx.amount)
        );
    }
    println!("{}", "-".repeat(44));
    println!("{} transaction(s)", transactions.len());

    Ok(())
}

fn run_report_command(service: &JournalService, cmd: ReportCommands) -> Result<()> {
    match cmd {
        ReportCommands::Category { format } => {
            let report = service.category_report()?;

            match format.as_str() {
                "json" => {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                "csv" => {
                    println!("category,total,count,percentage");
                    for cat in &report.categories {
                        println!(
                            "{},{},{},{:.2}",
                            cat.category, cat.total, cat.count, cat.percentage
                        );
                    }
                }
                _ => print_category_table(&report),
            }
        }

        ReportCommands::Monthly { format } => {
            let report = service.monthly_report()?;

            match format.as_str() {
                "json" => {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                "csv" => {
                    println!("month,total");
                    for month in &report.months {
                        println!("{},{}", month.month, month.total);
                    }
                }
                _ => print_monthly_table(&report),
            }
        }
    }

    Ok(())
}

fn print_category_table(report: &CategoryReport) {
    if report.categories.is_empty() {
        println!("No transactions found.");
        return;
    }

    println!("Expenses by Category");
    println!();
    println!("{:<20} {:>12} {:>7}", "CATEGORY", "TOTAL", "SHARE");
    println!("{}", "-".repeat(72));

    let max = report
        .categories
        .iter()
        .map(|c| c.total)
        .fold(0.0_f64, f64::max);

    for cat in &report.categories {
        println!(
            "{:<20} {:>12} {:>6.1}%  {}",
            truncate(&cat.category, 20),
            format_amount(cat.total),
            cat.percentage,
            bar(cat.total, max, 30)
        );
    }

    println!("{}", "-".repeat(72));
    println!("{:<20} {:>12}", "TOTAL", format_amount(report.total));
}

fn print_monthly_table(report: &MonthlyReport) {
    if report.months.is_empty() {
        println!("No transactions found.");
        return;
    }

    println!("Expense Trend by Month");
    println!();
    println!("{:<10} {:>12}", "MONTH", "TOTAL");
    println!("{}", "-".repeat(56));

    let max = report
        .months
        .iter()
        .map(|m| m.total)
        .fold(0.0_f64, f64::max);

    for month in &report.months {
        println!(
            "{:<10} {:>12}  {}",
            month.month,
            format_amount(month.total),
            bar(month.total, max, 30)
        );
    }

    println!("{}", "-".repeat(56));
    println!("{:<10} {:>12}", "TOTAL", format_amount(report.total));
}

/// Proportional glyph bar for terminal chart output. Non-positive values
/// render as an empty bar.
fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * width as f64).round() as usize;
    "█".repeat(len.min(width))
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

#[cfg(test)]
mod tests {
    use super::bar;

    #[test]
    fn test_bar_scales_to_width() {
        assert_eq!(bar(30.0, 30.0, 10), "█".repeat(10));
        assert_eq!(bar(15.0, 30.0, 10), "█".repeat(5));
        assert_eq!(bar(0.0, 30.0, 10), "");
        assert_eq!(bar(-5.0, 30.0, 10), "");
        assert_eq!(bar(10.0, 0.0, 10), "");
    }
}
