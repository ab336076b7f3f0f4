//! Stress CLI - Command-line interface for fuzzy-stress
//!
//! Commands:
//! - assess: Score one pair of inputs and print a report
//! - batch: Process newline-delimited JSON requests from stdin

use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use fuzzy_stress::encoder::AssessmentEncoder;
use fuzzy_stress::pipeline::assess_stress_checked;
use fuzzy_stress::types::AssessmentInputs;
use fuzzy_stress::ENGINE_VERSION;

/// Stress - Mamdani fuzzy inference engine for stress scoring
#[derive(Parser)]
#[command(name = "stress")]
#[command(version = ENGINE_VERSION)]
#[command(about = "Score stress from screen time and temperature", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one pair of inputs and print the report
    Assess {
        /// Daily screen time in hours
        #[arg(short, long)]
        screen_time: f64,

        /// Ambient temperature in degrees Celsius
        #[arg(short, long)]
        temperature: f64,

        /// Pretty-print the JSON report
        #[arg(long)]
        pretty: bool,
    },

    /// Process newline-delimited JSON requests from stdin
    Batch {
        /// Flush output after each record
        #[arg(long, default_value = "true")]
        flush: bool,
    },
}

/// One line of batch input, matching the original server request shape
#[derive(Deserialize)]
struct BatchRequest {
    screentime: f64,
    temperature: f64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Assess {
            screen_time,
            temperature,
            pretty,
        } => run_assess(screen_time, temperature, pretty),
        Commands::Batch { flush } => run_batch(flush),
    }
}

fn run_assess(screen_time: f64, temperature: f64, pretty: bool) -> ExitCode {
    let assessment = match assess_stress_checked(screen_time, temperature) {
        Ok(assessment) => assessment,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let inputs = AssessmentInputs {
        screen_time_hours: screen_time,
        temperature_c: temperature,
    };

    let encoder = AssessmentEncoder::new();
    let json = if pretty {
        encoder.encode_to_json(inputs, assessment)
    } else {
        let report = encoder.encode(inputs, assessment);
        serde_json::to_string(&report).map_err(Into::into)
    };

    match json {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_batch(flush: bool) -> ExitCode {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("batch mode reads NDJSON from stdin; pipe input or redirect a file");
        eprintln!(r#"example line: {{"screentime": 5.5, "temperature": 25}}"#);
        return ExitCode::FAILURE;
    }

    let encoder = AssessmentEncoder::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut failures = 0usize;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("error: failed to read stdin: {e}");
                return ExitCode::FAILURE;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match process_line(&encoder, &line) {
            Ok(json) => {
                if writeln!(stdout, "{json}").is_err() {
                    return ExitCode::FAILURE;
                }
                if flush {
                    let _ = stdout.flush();
                }
            }
            Err(e) => {
                eprintln!("error: {e}");
                failures += 1;
            }
        }
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn process_line(
    encoder: &AssessmentEncoder,
    line: &str,
) -> Result<String, fuzzy_stress::ComputeError> {
    let request: BatchRequest = serde_json::from_str(line)?;
    let assessment = assess_stress_checked(request.screentime, request.temperature)?;

    let inputs = AssessmentInputs {
        screen_time_hours: request.screentime,
        temperature_c: request.temperature,
    };

    let report = encoder.encode(inputs, assessment);
    Ok(serde_json::to_string(&report)?)
}
