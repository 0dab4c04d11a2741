//! SeatQuote command-line calculator

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seatquote_common::VERSION;
use seatquote_engine::quote::{write_export, ExportOptions};
use seatquote_engine::{QuoteDocument, QuoteService};

mod cli;
mod render;
mod settings;

use cli::{seats_or_minimum, Cli, Commands};

fn main() {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    debug!("SeatQuote v{}", VERSION);

    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("{}", render::error(&err, cli.output));
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let config = settings::load(&cli.config)
        .with_context(|| format!("Invalid configuration ({})", cli.config.display()))?;
    let minimum = config.minimum_seats;

    let service = QuoteService::new(config)?;
    let engine = service.engine();

    match &cli.command {
        Commands::Quote(args) => {
            let selection = args.to_selection(minimum);
            render::breakdown(&service.quote(&selection), cli.output)
        }
        Commands::Plans { seats, billing } => {
            let seats = seats_or_minimum(seats.as_deref(), minimum);
            render::plans(&engine.billing_plans(seats, billing), seats, cli.output)
        }
        Commands::Tiers { seats } => {
            let current = seats
                .as_deref()
                .and_then(|raw| engine.current_tier(seats_or_minimum(Some(raw), minimum)));
            render::tiers(&engine.config().seat_tiers, current, cli.output)
        }
        Commands::Catalog => render::catalog(engine.config(), cli.output),
        Commands::Export(args) => {
            let selection = args.selection.to_selection(minimum);
            let document = QuoteDocument::issue(&engine, &selection);
            let options = ExportOptions {
                filename: args.filename.clone(),
                format: args.format.into(),
                page_format: args.page.into(),
                orientation: args.orientation(),
            };

            let path = write_export(&document, &options, &args.out)
                .with_context(|| format!("Failed to export quote to {}", args.out.display()))?;
            render::exported(&document, &path, cli.output)
        }
        Commands::CheckConfig => render::config_ok(engine.config(), &cli.config, cli.output),
    }
}
