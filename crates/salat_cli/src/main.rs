mod output;
mod setup;

use clap::{Parser, Subcommand};
use salat_config::{ConfigError, Method, describe_config, describe_method};

use crate::output::{OutputFormat, iso_date, render};
use crate::setup::{CalcArgs, Setup};

#[derive(Parser)]
#[command(
    name = "salat",
    about = "Islamic prayer times calculator",
    after_help = "Logging is controlled by RUST_LOG (e.g. RUST_LOG=salat_engine=debug)."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute prayer times for one day
    Times {
        #[command(flatten)]
        calc: CalcArgs,
        /// Output format
        #[arg(long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },
    /// Describe a calculation method, or list all methods
    Method {
        /// Method name or code (1-7); omit to list all
        method: Option<String>,
    },
    /// Print the effective settings after applying method and overrides
    Settings {
        #[command(flatten)]
        calc: CalcArgs,
    },
}

fn main() {
    env_logger::Builder::from_default_env().init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Times { calc, format } => {
            let setup = require_setup(&calc);
            let mut ctx = setup.context();
            let times = ctx.compute();
            log::info!(
                "computed {} with {} at ({}, {})",
                iso_date(setup.date),
                setup.method,
                setup.location.latitude_deg,
                setup.location.longitude_deg
            );
            match render(format, &setup, &times) {
                Ok(text) => print!("{text}"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Method { method: Some(name) } => {
            let method = require(name.parse::<Method>());
            for line in describe_method(method) {
                println!("{line}");
            }
        }

        Commands::Method { method: None } => {
            for method in Method::ALL {
                println!(
                    "{} {:<8} {} ({})",
                    method.code(),
                    method.name(),
                    method.description(),
                    method.region()
                );
            }
        }

        Commands::Settings { calc } => {
            let setup = require_setup(&calc);
            println!(
                "Location: {:.4}, {:.4}, {} m, UTC{:+}",
                setup.location.latitude_deg,
                setup.location.longitude_deg,
                setup.location.elevation_m,
                setup.location.timezone_hours
            );
            println!("Date: {}", iso_date(setup.date));
            println!("Method: {} ({})", setup.method.description(), setup.method);
            for line in describe_config(&setup.config) {
                println!("{line}");
            }
        }
    }
}

fn require_setup(calc: &CalcArgs) -> Setup {
    require(Setup::from_args(calc))
}

fn require<T>(result: Result<T, ConfigError>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}
