pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::render::OutputFormat;
#[cfg(feature = "cli")]
use chrono::NaiveDate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "visitor-pass")]
#[command(about = "Compute a visitor's age and eligibility and print their pass")]
pub struct CliConfig {
    #[arg(long, required_unless_present = "from_text")]
    pub name: Option<String>,

    /// Date of birth as entered, e.g. 2000-01-01
    #[arg(long, allow_hyphen_values = true, required_unless_present = "from_text")]
    pub dob: Option<String>,

    /// Read Name / Date of Visit / Purpose / Date of Birth from a text file
    #[arg(long, conflicts_with_all = ["name", "dob"])]
    pub from_text: Option<PathBuf>,

    /// Evaluate as of this date instead of the local date
    #[arg(long)]
    pub today: Option<NaiveDate>,

    #[arg(long, default_value = "markup")]
    pub format: OutputFormat,

    #[arg(long, help = "Reject malformed input instead of printing NaN")]
    pub strict: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
