//! CLI command definitions

use clap::Parser;
use poliscope_domain::{PolicyType, SortOption};
use std::path::PathBuf;

/// CLI arguments for poliscope
#[derive(Parser, Debug)]
#[command(name = "poliscope")]
#[command(author, version, about = "Insurance policy comparison and advisory in your terminal")]
#[command(long_about = r#"
Poliscope lets you browse, filter, compare and ask questions about
insurance policies. Without arguments it starts the interactive
terminal UI; with --ask, --list or --policy it runs once and exits.

Configuration files are loaded from (in priority order):
1. POLISCOPE_* environment variables
2. --config <path>     Explicit config file
3. ./poliscope.toml    Project-level config
4. ~/.config/poliscope/config.toml   Global config

Example:
  poliscope
  poliscope --list --type health --sort price-low
  poliscope --policy health-cocure
  poliscope --ask "Is copayment mandatory?" --policy health-cocure
"#)]
pub struct Cli {
    /// Ask the advisor a single question and print the answer
    #[arg(short, long, value_name = "QUESTION")]
    pub ask: Option<String>,

    /// Policy id: the subject of --ask, or alone, print its details
    #[arg(short, long, value_name = "POLICY_ID")]
    pub policy: Option<String>,

    /// Print the policy catalog and exit
    #[arg(short, long)]
    pub list: bool,

    /// Restrict the listing to one policy type
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub policy_type: Option<PolicyType>,

    /// Sort order for the listing
    #[arg(short, long, value_name = "ORDER", default_value = "rating-high")]
    pub sort: SortOption,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
