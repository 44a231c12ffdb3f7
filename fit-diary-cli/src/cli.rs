// fit-diary-cli/src/cli.rs
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use fit_diary_lib::{Metric, SortMode};

#[derive(Parser, Debug)]
#[command(author, version, about = "A small diary for water, exercise and calories", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Print listings as CSV instead of a table
    #[arg(long, global = true)]
    pub export_csv: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortModeCli {
    Recent,
    MostWater,
}

impl From<SortModeCli> for SortMode {
    fn from(value: SortModeCli) -> Self {
        match value {
            SortModeCli::Recent => Self::Recent,
            SortModeCli::MostWater => Self::MostWater,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricCli {
    Water,
    Exercise,
    Calories,
}

impl From<MetricCli> for Metric {
    fn from(value: MetricCli) -> Self {
        match value {
            MetricCli::Water => Self::Water,
            MetricCli::Exercise => Self::Exercise,
            MetricCli::Calories => Self::Calories,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the session's records
    List {
        /// Display order (defaults to the configured sort)
        #[arg(short, long, value_enum)]
        sort: Option<SortModeCli>,
    },
    /// Show totals and averages, with a bar chart of one metric
    Summary {
        /// Metric to chart (defaults to the configured metric)
        #[arg(short, long, value_enum)]
        metric: Option<MetricCli>,
    },
    /// Validate form input without saving anything
    Check {
        /// Liters of water, as typed in the form
        #[arg(short, long, allow_hyphen_values = true)]
        water: String,
        /// Minutes of exercise, as typed in the form
        #[arg(short, long, allow_hyphen_values = true)]
        exercise: String,
        /// Calories, as typed in the form
        #[arg(short, long, allow_hyphen_values = true)]
        calories: String,
    },
    /// Show or change the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completion scripts
    GenerateCompletion {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Print the path to the configuration file
    Path,
    /// Set the sort order sessions start with
    SetSort {
        #[arg(value_enum)]
        mode: SortModeCli,
    },
    /// Set the metric the chart starts on
    SetMetric {
        #[arg(value_enum)]
        metric: MetricCli,
    },
    /// Set the date display format (chrono syntax, e.g. "%d/%m/%Y")
    SetDateFormat { format: String },
    /// Enable or disable the sample records at startup
    SetSeed {
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
    /// Set the table header colour (e.g. "Cyan", "DarkBlue")
    SetHeaderColor { color: String },
}

// Function to parse CLI arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

// Command structure for completion generation
pub fn build_cli_command() -> clap::Command {
    Cli::command()
}
