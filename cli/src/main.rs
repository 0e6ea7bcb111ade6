//! RxGuard command-line front-end.
//!
//! Checks OCR'd prescription text against the bundled (or a supplied)
//! reference dataset and prints the resulting safety report.
//!
//! Usage:
//!   rxguard verify --text "Amoxicillin 500mg twice daily" --allergies penicillin
//!   rxguard verify --input scan.txt --current-meds Warfarin --json
//!   rxguard extract --input scan.txt
//!   rxguard resolve Amoxicilin
//!   rxguard check-reference data/reference.toml

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rxguard_contracts::{
    error::{RxGuardError, RxGuardResult},
    patient::PatientProfile,
};
use rxguard_core::{traits::Resolver, MATCH_THRESHOLD};
use rxguard_match::FuzzyResolver;
use rxguard_pipeline::{bundled_reference, Pipeline, PrescriptionReport};
use rxguard_reference::ReferenceData;

// ── CLI definition ────────────────────────────────────────────────────────────

/// RxGuard prescription verification.
#[derive(Parser)]
#[command(
    name = "rxguard",
    about = "Verify OCR'd prescription text against a drug reference dataset",
    long_about = "Extracts medication/dose mentions from prescription text and checks them\n\
                  for unknown drugs, dose range violations, allergies, pediatric\n\
                  restrictions, and drug-drug interactions."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full check and print the report.
    Verify {
        #[command(flatten)]
        source: TextSource,
        #[command(flatten)]
        patient: PatientArgs,
        /// Reference dataset (TOML or JSON). Defaults to the bundled dataset.
        #[arg(long)]
        reference: Option<PathBuf>,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the candidate (name, dose) pairs found in the text.
    Extract {
        #[command(flatten)]
        source: TextSource,
        /// Print candidates as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the best catalog match for a drug name.
    Resolve {
        name: String,
        #[arg(long)]
        reference: Option<PathBuf>,
    },
    /// Load and validate a reference dataset.
    CheckReference { path: PathBuf },
}

/// Where prescription text comes from. Neither flag: read stdin.
#[derive(Args)]
struct TextSource {
    /// Prescription text given inline.
    #[arg(long, conflicts_with = "input")]
    text: Option<String>,
    /// File containing prescription text.
    #[arg(long)]
    input: Option<PathBuf>,
}

#[derive(Args)]
struct PatientArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    age: Option<u32>,
    /// Comma-separated allergies.
    #[arg(long, default_value = "")]
    allergies: String,
    /// Comma-separated current medications.
    #[arg(long, default_value = "")]
    current_meds: String,
    /// Comma-separated conditions.
    #[arg(long, default_value = "")]
    conditions: String,
}

impl PatientArgs {
    fn profile(&self) -> PatientProfile {
        PatientProfile::from_fields(
            self.name.as_deref(),
            self.age,
            &self.allergies,
            &self.current_meds,
            &self.conditions,
        )
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug to trace every candidate through the engine.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Verify {
            source,
            patient,
            reference,
            json,
        } => run_verify(&source, &patient, reference.as_deref(), json),
        Command::Extract { source, json } => run_extract(&source, json),
        Command::Resolve { name, reference } => run_resolve(&name, reference.as_deref()),
        Command::CheckReference { path } => run_check_reference(&path),
    };

    if let Err(e) = result {
        eprintln!("rxguard: {}", e);
        std::process::exit(1);
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run_verify(
    source: &TextSource,
    patient: &PatientArgs,
    reference: Option<&Path>,
    json: bool,
) -> RxGuardResult<()> {
    let text = read_text(source)?;
    let pipeline = Pipeline::new(load_reference(reference)?);
    let report = pipeline.check(&text, &patient.profile());

    if json {
        println!("{}", to_json(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn run_extract(source: &TextSource, json: bool) -> RxGuardResult<()> {
    let text = read_text(source)?;
    let candidates = Pipeline::with_defaults()?.extract(&text);

    if json {
        println!("{}", to_json(&candidates)?);
        return Ok(());
    }
    if candidates.is_empty() {
        println!("No candidates found.");
    }
    for c in &candidates {
        println!("{}\t{}", c.raw_name, c.dose_text);
    }
    Ok(())
}

fn run_resolve(name: &str, reference: Option<&Path>) -> RxGuardResult<()> {
    let reference = load_reference(reference)?;
    let resolution = FuzzyResolver::new(reference.catalog.clone()).resolve(name);

    match resolution.matched_name {
        Some(matched) => {
            let confidence = if resolution.score >= MATCH_THRESHOLD {
                "accepted"
            } else {
                "below threshold"
            };
            println!("{} (score={}, {})", matched, resolution.score, confidence);
        }
        None => println!("no match (score=0)"),
    }
    Ok(())
}

fn run_check_reference(path: &Path) -> RxGuardResult<()> {
    let reference = ReferenceData::from_file(path)?;
    println!(
        "{}: {} drugs, {} interactions, {} pediatric restrictions",
        path.display(),
        reference.catalog.len(),
        reference.interactions.len(),
        reference.restrictions.len()
    );
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_reference(path: Option<&Path>) -> RxGuardResult<ReferenceData> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading reference dataset");
            ReferenceData::from_file(path)
        }
        None => bundled_reference(),
    }
}

fn read_text(source: &TextSource) -> RxGuardResult<String> {
    if let Some(text) = &source.text {
        return Ok(text.clone());
    }
    if let Some(path) = &source.input {
        return std::fs::read_to_string(path).map_err(|e| RxGuardError::InputError {
            reason: format!("failed to read '{}': {}", path.display(), e),
        });
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| RxGuardError::InputError {
            reason: format!("failed to read stdin: {}", e),
        })?;
    Ok(text)
}

fn to_json<T: serde::Serialize>(value: &T) -> RxGuardResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| RxGuardError::InputError {
        reason: format!("failed to serialize output: {}", e),
    })
}

fn print_report(report: &PrescriptionReport) {
    println!("Check {}", report.check_id);
    println!("Status: {:?}", report.status);
    println!();

    println!("Medications:");
    if report.verified.is_empty() {
        println!("  (none found)");
    }
    for entry in &report.verified {
        let matched = entry.matched_name.as_deref().unwrap_or("?");
        println!(
            "  {:<24} {:<10} -> {} (score={})",
            entry.raw_name, entry.dose_text, matched, entry.match_score
        );
    }

    if !report.issues.is_empty() {
        println!();
        println!("Issues:");
        for issue in &report.issues {
            println!("  - {}", issue);
        }
    }

    if !report.schedule.is_empty() {
        println!();
        println!("Schedule:");
        for (label, doses) in [
            ("Morning", &report.schedule.morning),
            ("Afternoon", &report.schedule.afternoon),
            ("Night", &report.schedule.night),
        ] {
            for dose in doses {
                println!("  {:<10} {} {}", label, dose.name, dose.dose);
            }
        }
    }
}
