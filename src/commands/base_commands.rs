use chrono::Local;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::services::config::{
    SamplerConfig, DEFAULT_CEREMONY_LABEL, DEFAULT_HOURS_DIVISOR, DEFAULT_MAX_SAMPLES,
};

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sample customers by hours and rotate resources over the sample
    Assign {
        #[command(flatten)]
        sampling: SamplingArgs,
        /// Output workbook
        #[arg(short, long, default_value_t = default_output("assignments"))]
        output: String,
    },
    /// Write one shuffled, hours-proportional customer sheet per resource
    Sheets {
        #[command(flatten)]
        sampling: SamplingArgs,
        /// Output workbook
        #[arg(short, long, default_value_t = default_output("resource_sheets"))]
        output: String,
        /// Text after the user story id in the ceremony column
        #[arg(short, long, env = "CEREMONY_LABEL", default_value = DEFAULT_CEREMONY_LABEL)]
        ceremony_label: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
pub struct SamplingArgs {
    /// Input workbook with `customers` and `resources` sheets
    #[arg(short, long)]
    pub input: String,
    /// Maximum number of output rows
    #[arg(short = 'n', long, env = "MAX_SAMPLES", default_value_t = DEFAULT_MAX_SAMPLES)]
    pub max_samples: usize,
    /// Hours represented by one pool entry
    #[arg(short = 'd', long, env = "HOURS_DIVISOR", default_value_t = DEFAULT_HOURS_DIVISOR)]
    pub hours_divisor: f64,
    /// Seed for reproducible draws; a random seed is used when omitted
    #[arg(short = 's', long, env = "RANDOM_SEED")]
    pub random_seed: Option<u64>,
    /// Also write the run report to this YAML file
    #[arg(short, long)]
    pub report: Option<String>,
}

impl SamplingArgs {
    pub fn to_config(&self) -> SamplerConfig {
        SamplerConfig {
            max_samples: self.max_samples,
            hours_divisor: self.hours_divisor,
            random_seed: self.random_seed,
        }
    }
}

fn default_output(prefix: &str) -> String {
    format!("{prefix}_{}.xlsx", Local::now().date_naive().format("%Y%m%d"))
}
