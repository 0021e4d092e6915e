use std::io::{self, Write};

use anyhow::Result;
use chrono::NaiveDate;

use crate::application::JournalService;
use crate::domain::{format_amount, parse_amount, parse_date};

/// Interactive menu over the journal. Mirrors the append-only contract:
/// there is no edit or delete option.
pub fn run(service: &JournalService) -> Result<()> {
    loop {
        println!();
        println!("--- Expense Journal ---");
        println!("1. Log an expense");
        println!("2. Totals by category");
        println!("3. Expense trend by month");
        println!("4. Exit");

        let choice = prompt("Choose an option: ")?;
        match choice.as_str() {
            "1" => {
                // A failed request reports and returns to the menu
                if let Err(err) = log_expense(service) {
                    println!("Error: {}", err);
                }
            }
            "2" => match service.category_report() {
                Ok(report) => super::print_category_table(&report),
                Err(err) => println!("Error: {}", err),
            },
            "3" => match service.monthly_report() {
                Ok(report) => super::print_monthly_table(&report),
                Err(err) => println!("Error: {}", err),
            },
            "4" => {
                println!("Exiting the expense journal.");
                return Ok(());
            }
            _ => println!("Invalid choice. Please choose again."),
        }
    }
}

fn log_expense(service: &JournalService) -> Result<()> {
    let date = read_valid_date()?;
    let category = prompt("Enter category (e.g., Food, Transport): ")?;
    let raw_amount = prompt("Enter amount: ")?;
    let amount = parse_amount(&raw_amount)?;

    let tx = service.record(date, category, amount)?;
    println!(
        "Logged: {} in {} on {}",
        format_amount(tx.amount),
        tx.category,
        tx.date
    );
    Ok(())
}

/// Re-prompt until the date parses. The validation itself is pure; only
/// the shell loops.
fn read_valid_date() -> Result<NaiveDate> {
    loop {
        let input = prompt("Enter date (YYYY-MM-DD): ")?;
        match parse_date(&input) {
            Ok(date) => return Ok(date),
            Err(_) => {
                println!("Invalid date format. Please enter the date in YYYY-MM-DD format.")
            }
        }
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        anyhow::bail!("end of input");
    }
    Ok(input.trim().to_string())
}
