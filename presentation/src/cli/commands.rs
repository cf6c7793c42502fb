//! CLI command definitions

use crate::api::ApiEndpoint;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for pipeline results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored output
    Text,
    /// The uniform `{success, data, error}` envelope as JSON
    Json,
}

/// CLI arguments for skillpath
#[derive(Parser, Debug)]
#[command(name = "skillpath")]
#[command(author, version, about = "Find jobs, the skills they demand and how to learn them")]
#[command(long_about = r#"
skillpath chains small AI agents into two flows:

1. Find jobs: web search for openings in a location, then extract clean
   job titles and descriptions with a language model.
2. Plan for a job: extract the key skills a job demands, then generate a
   short learning roadmap for every skill in parallel.

Configuration files are loaded from (in priority order):
1. SKILLPATH_* environment variables (e.g. SKILLPATH_COMPLETION__MODEL)
2. --config <path>       Explicit config file
3. ./skillpath.toml      Project-level config
4. ~/.config/skillpath/config.toml   Global config

Example:
  skillpath jobs Berlin
  skillpath jobs London --sector Technology --sector Finance
  skillpath plan "Data Analyst" --description "SQL, dashboards and reporting"
  echo '{"skillName": "Python"}' | skillpath api roadmap
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search for jobs in a location
    Jobs {
        /// City or region to search in
        location: String,

        /// Restrict the search to a sector (can be specified multiple times)
        #[arg(short, long = "sector", value_name = "SECTOR")]
        sectors: Vec<String>,
    },

    /// Extract the key skills from a job description
    Skills {
        /// Free-text job description
        description: String,
    },

    /// Generate a learning roadmap for one skill
    Roadmap {
        /// Name of the skill to learn
        skill: String,
    },

    /// Extract skills for a job and generate a roadmap for each of them
    Plan {
        /// Job title
        title: String,

        /// Job description (defaults to the title)
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Run an HTTP boundary handler on a JSON body read from stdin
    Api {
        #[arg(value_enum)]
        endpoint: ApiEndpoint,
    },
}
