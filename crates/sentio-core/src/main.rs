use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};

use sentio_classifier::{parse_meter_lines, parse_meters, Assessment, Emotion, EmotionClassifier};

mod cli;
mod config;
mod simulate;

use cli::{Args, Command};
use config::{Config, OutputFormat};
use simulate::MeterSimulator;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match args.config.as_deref() {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(std::env::var("SENTIO_LOG").unwrap_or_else(|_| config.log_filter.clone()))
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "sentio starting");

    let output = Output {
        format: args.format.unwrap_or(config.format),
    };
    let classifier = EmotionClassifier::new();

    match args.command {
        Command::Text { text, file } => classify_text(&classifier, &output, text, file),
        Command::Meters { reading, file } => classify_meters(&classifier, &output, reading, file),
        Command::Combined { text, meters } => {
            let values = parse_meters(&meters)?;
            output.emit(&classifier.assess_combined(&text, &values), None)
        }
        Command::Simulate { count, seed, text } => {
            simulate(&classifier, &output, &config, count, seed, &text)
        }
        Command::Labels => output.labels(),
    }
}

fn classify_text(
    classifier: &EmotionClassifier,
    output: &Output,
    text: Option<String>,
    file: Option<PathBuf>,
) -> Result<()> {
    let text = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => read_input(&path)?,
        (None, None) => String::new(),
    };
    output.emit(&classifier.assess_text(&text), None)
}

fn classify_meters(
    classifier: &EmotionClassifier,
    output: &Output,
    reading: Option<String>,
    file: Option<PathBuf>,
) -> Result<()> {
    if let Some(path) = file {
        let readings = parse_meter_lines(&read_input(&path)?)
            .with_context(|| format!("invalid meter file {}", path.display()))?;
        tracing::info!(path = ?path, readings = readings.len(), "classifying meter file");
        for values in readings {
            output.emit(&classifier.assess_meters(&values), None)?;
        }
        return Ok(());
    }

    let values = parse_meters(reading.as_deref().unwrap_or_default())?;
    output.emit(&classifier.assess_meters(&values), None)
}

fn simulate(
    classifier: &EmotionClassifier,
    output: &Output,
    config: &Config,
    count: usize,
    seed: Option<u64>,
    text: &str,
) -> Result<()> {
    let mut simulator = MeterSimulator::new(&config.simulate, seed);
    tracing::info!(count, ?seed, with_text = !text.is_empty(), "simulating meter readings");
    for _ in 0..count {
        let reading = simulator.next_reading().to_array();
        let assessment = if text.is_empty() {
            classifier.assess_meters(&reading)
        } else {
            classifier.assess_combined(text, &reading)
        };
        output.emit(&assessment, Some(reading))?;
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    assessment: &'a Assessment,
    #[serde(skip_serializing_if = "Option::is_none")]
    reading: Option<[f64; 3]>,
}

struct Output {
    format: OutputFormat,
}

impl Output {
    fn emit(&self, assessment: &Assessment, reading: Option<[f64; 3]>) -> Result<()> {
        match self.format {
            OutputFormat::Plain => match reading {
                Some([heart_rate, gsr, temperature]) => println!(
                    "{heart_rate:.1}, {gsr:.2}, {temperature:.2} -> Detected emotion: {}",
                    assessment.label()
                ),
                None => println!("Detected emotion: {}", assessment.label()),
            },
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(&Report { assessment, reading })?)
            }
        }
        Ok(())
    }

    fn labels(&self) -> Result<()> {
        for emotion in Emotion::ALL {
            match self.format {
                OutputFormat::Plain => println!("{} {}", emotion.code(), emotion),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({ "code": emotion.code(), "label": emotion.label() })
                ),
            }
        }
        Ok(())
    }
}
