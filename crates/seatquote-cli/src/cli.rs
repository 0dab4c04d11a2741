use clap::{Args, Parser, Subcommand, ValueEnum};
use seatquote_common::types::selection::{DEFAULT_BILLING_OPTION, DEFAULT_PAYMENT_METHOD};
use seatquote_common::{parse_seats, Selection};
use seatquote_engine::quote::{ExportFormat, Orientation, PageFormat};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seatquote", version, about = "Seat-based subscription pricing calculator")]
pub struct Cli {
    /// Pricing configuration file (TOML or JSON); built-in catalog if missing
    #[arg(short, long, default_value = "seatquote.toml", global = true, env = "SEATQUOTE_CONFIG")]
    pub config: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "human", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Price a selection and show the full breakdown
    Quote(SelectionArgs),

    /// Compare every billing option at a seat count
    Plans {
        /// Seat count; values below the minimum are raised to it
        #[arg(short, long)]
        seats: Option<String>,

        /// Billing option to mark as selected
        #[arg(short, long, default_value = DEFAULT_BILLING_OPTION)]
        billing: String,
    },

    /// Show the seat tier table
    Tiers {
        /// Highlight the tier containing this seat count
        #[arg(short, long)]
        seats: Option<String>,
    },

    /// List deliverables and payment methods
    Catalog,

    /// Write a printable quote document
    Export(ExportArgs),

    /// Load and validate the pricing configuration
    CheckConfig,
}

/// Calculator inputs shared by `quote` and `export`
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Seat count; values below the minimum are raised to it
    #[arg(short, long)]
    pub seats: Option<String>,

    /// Billing option id
    #[arg(short, long, default_value = DEFAULT_BILLING_OPTION)]
    pub billing: String,

    /// Payment method id
    #[arg(short, long, default_value = DEFAULT_PAYMENT_METHOD)]
    pub payment: String,

    /// Deliverable id (repeatable)
    #[arg(short, long = "deliverable")]
    pub deliverables: Vec<String>,
}

impl SelectionArgs {
    pub fn to_selection(&self, minimum_seats: u32) -> Selection {
        let seats = seats_or_minimum(self.seats.as_deref(), minimum_seats);
        let mut selection = Selection::new(minimum_seats)
            .with_seats(seats, minimum_seats)
            .with_billing_option(self.billing.as_str())
            .with_payment_method(self.payment.as_str());
        for id in &self.deliverables {
            selection.toggle_deliverable(id, true);
        }
        selection
    }
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Directory the quote is written to
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,

    /// File name; defaults to <vendor>-quote-<date>.<ext>
    #[arg(long)]
    pub filename: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: ExportFormatArg,

    #[arg(long, value_enum, default_value = "a4")]
    pub page: PageFormatArg,

    #[arg(long)]
    pub landscape: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormatArg {
    Text,
    Json,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Text => ExportFormat::Text,
            ExportFormatArg::Json => ExportFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PageFormatArg {
    A4,
    Letter,
    Legal,
}

impl From<PageFormatArg> for PageFormat {
    fn from(arg: PageFormatArg) -> Self {
        match arg {
            PageFormatArg::A4 => PageFormat::A4,
            PageFormatArg::Letter => PageFormat::Letter,
            PageFormatArg::Legal => PageFormat::Legal,
        }
    }
}

impl ExportArgs {
    pub fn orientation(&self) -> Orientation {
        if self.landscape {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Seat count from raw input, clamped to the minimum
pub fn seats_or_minimum(input: Option<&str>, minimum_seats: u32) -> u32 {
    input.map_or(minimum_seats, |raw| parse_seats(raw, minimum_seats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_parsing() {
        let args = vec![
            "seatquote", "quote", "--seats", "31", "--billing", "quarterly", "-d", "pci-dss",
            "-d", "fraud-detection",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Quote(args) => {
                let selection = args.to_selection(10);
                assert_eq!(selection.seats, 31);
                assert_eq!(selection.billing_option_id, "quarterly");
                assert_eq!(selection.payment_method_id, "ach");
                assert_eq!(selection.deliverable_ids.len(), 2);
            }
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_seats_are_clamped() {
        let cli = Cli::try_parse_from(["seatquote", "quote", "--seats", "abc"]).unwrap();
        match cli.command {
            Commands::Quote(args) => assert_eq!(args.to_selection(10).seats, 10),
            _ => panic!("Expected Quote command"),
        }

        assert_eq!(seats_or_minimum(Some("4"), 10), 10);
        assert_eq!(seats_or_minimum(None, 12), 12);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["seatquote", "tiers", "--output", "json", "-c", "prices.json"])
                .unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.config, PathBuf::from("prices.json"));
        assert!(matches!(cli.command, Commands::Tiers { seats: None }));
    }

    #[test]
    fn test_export_parsing() {
        let cli = Cli::try_parse_from([
            "seatquote", "export", "--out", "/tmp", "--format", "json", "--page", "legal",
            "--landscape",
        ])
        .unwrap();

        match cli.command {
            Commands::Export(args) => {
                assert_eq!(ExportFormat::from(args.format), ExportFormat::Json);
                assert_eq!(PageFormat::from(args.page), PageFormat::Legal);
                assert_eq!(args.orientation(), Orientation::Landscape);
                assert!(args.filename.is_none());
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_check_config_subcommand() {
        let cli = Cli::try_parse_from(["seatquote", "check-config"]).unwrap();
        assert!(matches!(cli.command, Commands::CheckConfig));
    }
}
