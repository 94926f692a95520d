mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::gst::GstArgs;
use commands::loan::{CompareLoansArgs, EmiArgs};
use commands::tax::{TaxArgs, TaxCompareArgs};

/// Environment variable holding the tracing filter, e.g. `FINCALC_LOG=debug`.
const LOG_ENV: &str = "FINCALC_LOG";

/// Loan EMI, GST and income tax calculator
#[derive(Parser)]
#[command(
    name = "fincalc",
    version,
    about = "Loan EMI, GST and income tax calculations",
    long_about = "A CLI for everyday Indian personal-finance calculations with decimal \
                  precision. Supports loan EMI with amortization schedules, loan \
                  comparison, GST (exclusive and inclusive) and income tax under the \
                  new and old regimes."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Render monetary fields as rupee strings (₹1,00,000.00)
    #[arg(long, global = true)]
    inr: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate loan EMI and amortization schedule
    Emi(EmiArgs),
    /// Compare two loan offers side by side
    CompareLoans(CompareLoansArgs),
    /// Calculate GST on a price
    Gst(GstArgs),
    /// Calculate income tax under the new or old regime
    Tax(TaxArgs),
    /// Compare income tax under both regimes
    TaxCompare(TaxCompareArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Emi(args) => commands::loan::run_emi(args),
        Commands::CompareLoans(args) => commands::loan::run_compare_loans(args),
        Commands::Gst(args) => commands::gst::run_gst(args),
        Commands::Tax(args) => commands::tax::run_tax(args),
        Commands::TaxCompare(args) => commands::tax::run_tax_compare(args),
        Commands::Version => {
            println!("fincalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(mut value) => {
            if cli.inr {
                output::currency::localize(&mut value);
            }
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
