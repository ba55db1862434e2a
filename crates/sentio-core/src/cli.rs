use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "sentio", version, about = "Text and physiological emotion classifier")]
pub struct Args {
    /// TOML settings file
    #[arg(long, global = true, env = "SENTIO_CONFIG")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify free text
    Text {
        text: Option<String>,
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    /// Classify a `heart rate, GSR, temperature` reading, or one per line of a file
    Meters {
        #[arg(allow_hyphen_values = true)]
        reading: Option<String>,
        #[arg(long, conflicts_with = "reading")]
        file: Option<PathBuf>,
    },
    /// Fuse text and a meter reading into one decision
    Combined {
        #[arg(long, default_value = "")]
        text: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        meters: String,
    },
    /// Classify randomly generated meter readings
    Simulate {
        #[arg(long, default_value_t = 5)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "")]
        text: String,
    },
    /// List every emotion label with its code
    Labels,
}
