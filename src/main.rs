mod analyze;
mod cli;
mod config;
mod error;
mod generator;
mod metrics;
mod render;
mod report;
mod template;
mod types;

use crate::error::HeliumError;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INSUFFICIENT_RESULTS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (tests, embedding) is not an error worth reporting.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn run() -> Result<i32, HeliumError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    tracing::info!("helium v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        cli::Commands::Init(cmd) => {
            generator::init::execute_init(&cmd)?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Report(cmd) => {
            let artifacts = generator::writer::execute_report(&cmd)?;
            if let Some(svg) = &artifacts.svg {
                println!("svg: {}", svg.display());
            }
            if let Some(rendered) = &artifacts.rendered {
                println!("report: {}", rendered.display());
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Summary(cmd) => {
            let (_, quality_report) = generator::writer::prepare(&cmd.metrics)?;
            let output_format = match cmd.format {
                cli::SummaryFormat::Json => report::OutputFormat::Json,
                cli::SummaryFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&quality_report, output_format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Template(cmd) => {
            match &cmd.output {
                Some(path) => {
                    std::fs::write(path, template::BUILTIN_TEMPLATE)?;
                    println!("template: {}", path.display());
                }
                None => print!("{}", template::BUILTIN_TEMPLATE),
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e @ HeliumError::InsufficientResults { .. }) => {
            eprintln!("Error: {}.", e);
            std::process::exit(exit_code::INSUFFICIENT_RESULTS);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
