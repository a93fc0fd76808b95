//! Spendlog money CLI
//!
//! Runs money engine operations from the shell, mainly for checking how an
//! amount will be stored, split, converted or displayed.
//!
//! Usage:
//!   spendlog to-minor 19.99 USD
//!   spendlog split 1000 3
//!   spendlog convert 1000 JPY USD 0.0067
//!   spendlog format 1999 USD --locale en-US

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spendlog_core::currency::{
    AllocationUtil, CurrencyService, convert, get_currency_options, get_exponent,
    percentage, percentage_int, to_display_string, to_smallest_unit,
};
use spendlog_shared::MoneyConfig;

#[derive(Debug, Parser)]
#[command(name = "spendlog")]
#[command(author, version, about = "Spendlog money engine CLI", long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the minor-unit exponent of a currency
    Exponent {
        /// ISO 4217 code
        code: String,
    },
    /// List known currencies
    Currencies,
    /// Convert a display amount to smallest units
    ToMinor {
        /// Display amount, e.g. 19.99
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// ISO 4217 code
        code: String,
    },
    /// Render smallest units as a plain decimal string
    Display {
        /// Amount in smallest units
        #[arg(allow_hyphen_values = true)]
        amount: i64,
        /// ISO 4217 code
        code: String,
    },
    /// Split an amount evenly
    Split {
        /// Amount in smallest units
        #[arg(allow_hyphen_values = true)]
        amount: i64,
        /// Number of parts
        parts: usize,
    },
    /// Split an amount by weights
    Allocate {
        /// Amount in smallest units
        #[arg(allow_hyphen_values = true)]
        amount: i64,
        /// Weights, e.g. 1 1 2
        #[arg(required = true, num_args = 1..)]
        weights: Vec<String>,
    },
    /// Convert smallest units between currencies
    Convert {
        /// Amount in smallest units of FROM
        #[arg(allow_hyphen_values = true)]
        amount: i64,
        /// Source currency
        from: String,
        /// Target currency
        to: String,
        /// Units of TO per one unit of FROM
        rate: String,
    },
    /// Format smallest units for display
    Format {
        /// Amount in smallest units
        #[arg(allow_hyphen_values = true)]
        amount: i64,
        /// ISO 4217 code
        code: String,
        /// Locale tag; defaults to the configured locale
        #[arg(long)]
        locale: Option<String>,
    },
    /// Share of a total, in percent
    Percent {
        /// Part amount
        #[arg(allow_hyphen_values = true)]
        amount: i64,
        /// Total amount
        #[arg(allow_hyphen_values = true)]
        total: i64,
        /// Decimal places; defaults to the configured value
        #[arg(long)]
        places: Option<u32>,
    },
}

/// Result of one command in both output shapes.
#[derive(Debug)]
struct Report {
    text: String,
    json: Value,
}

impl Report {
    fn new(text: impl Into<String>, json: Value) -> Self {
        Self {
            text: text.into(),
            json,
        }
    }
}

fn run(command: &Command, service: &CurrencyService) -> Result<Report> {
    let report = match command {
        Command::Exponent { code } => {
            let exponent = get_exponent(code)?;
            Report::new(
                exponent.to_string(),
                json!({ "code": code, "exponent": exponent }),
            )
        }
        Command::Currencies => {
            let options = get_currency_options();
            let text = options
                .iter()
                .map(|o| format!("{} ({})", o.label, o.digits))
                .collect::<Vec<_>>()
                .join("\n");
            Report::new(text, serde_json::to_value(&options)?)
        }
        Command::ToMinor { amount, code } => {
            let smallest = to_smallest_unit(amount.as_str(), code)?;
            Report::new(
                smallest.to_string(),
                json!({ "amount": smallest, "currency": code }),
            )
        }
        Command::Display { amount, code } => {
            let display = to_display_string(*amount, code)?;
            Report::new(display.clone(), json!({ "display": display, "currency": code }))
        }
        Command::Split { amount, parts } => {
            let shares = AllocationUtil::allocate_evenly(*amount, *parts)?;
            Report::new(join(&shares), json!({ "shares": shares }))
        }
        Command::Allocate { amount, weights } => {
            let weights: Vec<&str> = weights.iter().map(String::as_str).collect();
            let shares = AllocationUtil::allocate(*amount, &weights)?;
            Report::new(join(&shares), json!({ "shares": shares }))
        }
        Command::Convert {
            amount,
            from,
            to,
            rate,
        } => {
            let converted = convert(*amount, from, to, rate.as_str())
                .with_context(|| format!("Failed to convert {amount} {from} to {to}"))?;
            Report::new(
                converted.to_string(),
                json!({ "amount": converted, "currency": to }),
            )
        }
        Command::Format {
            amount,
            code,
            locale,
        } => {
            let parts = match locale {
                Some(locale) => {
                    let full = service.format_in(*amount, code, locale);
                    json!({ "full": full })
                }
                None => serde_json::to_value(service.format_parts(*amount, code))?,
            };
            let text = parts["full"].as_str().unwrap_or_default().to_string();
            Report::new(text, parts)
        }
        Command::Percent {
            amount,
            total,
            places,
        } => {
            let value = places.map_or_else(
                || service.percentage(*amount, *total),
                |places| percentage(*amount, *total, places),
            );
            let whole = percentage_int(*amount, *total)?;
            Report::new(
                format!("{value}%"),
                json!({ "percentage": value.to_string(), "whole": whole }),
            )
        }
    };
    Ok(report)
}

fn join(shares: &[i64]) -> String {
    shares
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spendlog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = MoneyConfig::load().context("Failed to load configuration")?;
    info!(
        locale = %config.default_locale,
        fallback_exponent = config.fallback_exponent,
        "Configuration loaded"
    );
    let service = CurrencyService::new(config);

    debug!(command = ?cli.command, "Running command");
    let report = run(&cli.command, &service)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report.json)?);
    } else {
        println!("{}", report.text);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<Report> {
        let cli = Cli::try_parse_from(std::iter::once("spendlog").chain(args.iter().copied()))?;
        run(&cli.command, &CurrencyService::default())
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_to_minor() {
        assert_eq!(run_args(&["to-minor", "19.99", "USD"]).unwrap().text, "1999");
        assert_eq!(run_args(&["to-minor", "-3", "KWD"]).unwrap().text, "-3000");
    }

    #[test]
    fn test_split_and_allocate() {
        assert_eq!(run_args(&["split", "1000", "3"]).unwrap().text, "334 333 333");
        let report = run_args(&["allocate", "1000", "1", "1", "2"]).unwrap();
        assert_eq!(report.text, "250 250 500");
        assert_eq!(report.json["shares"], json!([250, 250, 500]));
    }

    #[test]
    fn test_convert() {
        let report = run_args(&["convert", "1000", "JPY", "USD", "0.0067"]).unwrap();
        assert_eq!(report.text, "670");
    }

    #[test]
    fn test_format() {
        assert_eq!(run_args(&["format", "1999", "USD"]).unwrap().text, "$19.99");
        let report = run_args(&["format", "1999", "XYZ", "--locale", "en-US"]).unwrap();
        assert_eq!(report.text, "XYZ 19.99");
    }

    #[test]
    fn test_percent() {
        let report = run_args(&["percent", "1", "3"]).unwrap();
        assert_eq!(report.text, "33.33%");
        assert_eq!(report.json["whole"], json!(33));
        assert_eq!(run_args(&["percent", "5", "0"]).unwrap().text, "0%");
    }

    #[test]
    fn test_errors_propagate() {
        assert!(run_args(&["exponent", "XYZ"]).is_err());
        assert!(run_args(&["split", "1000", "0"]).is_err());
        assert!(run_args(&["allocate", "1000", "0", "0"]).is_err());
    }
}
