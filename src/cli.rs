use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use enumset::EnumSet;

use crate::{core::scenario::ScenarioKind, form::Form};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: calculate the rate, project the bills, and compare them.
    #[clap(name = "compare")]
    Compare(Box<CompareArgs>),

    /// Print a share link query for the entered values.
    #[clap(name = "share")]
    Share(Box<ShareArgs>),

    /// Compare the values restored from a share link.
    #[clap(name = "open")]
    Open(Box<OpenArgs>),

    /// Validate a single field value.
    #[clap(name = "check")]
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct CompareArgs {
    #[clap(flatten)]
    pub form: Form,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct ShareArgs {
    #[clap(flatten)]
    pub form: Form,

    /// Base URL to prepend to the query.
    #[clap(long, env = "SHARE_BASE_URL")]
    pub base_url: Option<String>,
}

#[derive(Parser)]
pub struct OpenArgs {
    /// Share link, or just its query string.
    pub location: String,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Field name, for example: `annual_usage`.
    pub field: String,

    /// Raw value as entered.
    #[clap(allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum Format {
    /// Terminal tables.
    #[default]
    Table,

    /// Yearly breakdown as comma-separated values.
    Csv,

    /// Short plain-text summary.
    Text,

    /// Everything, as JSON.
    Json,
}

#[derive(Parser)]
pub struct OutputArgs {
    #[clap(long, value_enum, default_value_t, env = "OUTPUT_FORMAT")]
    pub format: Format,

    /// Calendar year of the first projected year. Defaults to the current year.
    #[clap(long, env = "START_YEAR")]
    pub start_year: Option<i32>,

    #[clap(
        long = "scenarios",
        env = "SCENARIOS",
        value_delimiter = ',',
        num_args = 1..,
        default_value = "entered,historic-baseline,stress-test",
    )]
    pub scenarios: Vec<ScenarioKind>,
}

impl OutputArgs {
    #[must_use]
    pub fn start_year(&self) -> i32 {
        self.start_year.unwrap_or_else(|| Local::now().year())
    }

    #[must_use]
    pub fn scenarios(&self) -> EnumSet<ScenarioKind> {
        self.scenarios.iter().copied().collect()
    }
}
