//! Command-line surface: JSON in, JSON out.
//!
//! Usage:
//!   vitalrisk assess  [--input FILE] [--patient-id ID] [--name NAME]
//!   vitalrisk derive  [--input FILE]
//!   vitalrisk stats   --input FILE [--now RFC3339] [--range week|month|quarter|all]
//!                     [--patient-id ID] [--search TEXT]
//!   vitalrisk history --input FILE [--patient-id ID] [--limit N]
//!
//! `assess` and `derive` read a vitals record from the file or stdin; `stats`
//! and `history` read a JSON array of assessment records. Add `--pretty` for
//! indented output.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;

use crate::analytics::{latest_assessments, patient_assessments, summarize, RecordFilter};
use crate::config;
use crate::models::{
    generate_patient_id, AssessmentRecord, AssessmentResult, ModelError, PatientRef, TimeRange,
    VitalsRecord,
};
use crate::risk::{calculate_derived_measurements, DefaultRiskEngine, RiskEngine};

#[derive(Parser, Debug)]
#[command(name = "vitalrisk")]
#[command(version, about = "Score patient vital signs and summarise assessment history")]
pub struct Cli {
    /// Indent JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Derive measurements and score a vitals record
    Assess {
        /// Vitals JSON file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Attach the result to this patient id
        #[arg(long)]
        patient_id: Option<String>,

        /// Patient name; a patient id is generated when none is given
        #[arg(long)]
        name: Option<String>,
    },

    /// Print the vitals record with BMI, pulse pressure and MAP filled in
    Derive {
        /// Vitals JSON file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Aggregate statistics over assessment records
    Stats {
        /// JSON array of assessment records
        #[arg(short, long)]
        input: PathBuf,

        /// Reference time for time ranges and trends (defaults to now)
        #[arg(long)]
        now: Option<DateTime<Utc>>,

        /// Only records within this range
        #[arg(long)]
        range: Option<TimeRange>,

        /// Only records of this patient
        #[arg(long)]
        patient_id: Option<String>,

        /// Case-insensitive match on patient name or id
        #[arg(long)]
        search: Option<String>,
    },

    /// List the latest assessment records
    History {
        /// JSON array of assessment records
        #[arg(short, long)]
        input: PathBuf,

        /// Only records of this patient
        #[arg(long)]
        patient_id: Option<String>,

        /// Maximum number of records
        #[arg(long, default_value_t = config::DEFAULT_HISTORY_LIMIT)]
        limit: usize,
    },
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    ReadInput {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    Model(#[from] ModelError),
}

/// Output of `assess` when the result is attached to a patient.
#[derive(Debug, Serialize)]
pub struct RecordedAssessment {
    pub record: AssessmentRecord,
    pub result: AssessmentResult,
}

/// Execute a parsed command. `stdin` is only read when no input file is given.
pub fn run<R: Read, W: Write>(cli: Cli, stdin: R, mut out: W) -> Result<(), CliError> {
    let pretty = cli.pretty;
    match cli.command {
        Command::Assess {
            input,
            patient_id,
            name,
        } => {
            let vitals = read_vitals(input.as_deref(), stdin)?;
            let assessment = DefaultRiskEngine::default().assess(&vitals);

            if patient_id.is_none() && name.is_none() {
                return write_json(&mut out, &assessment.result, pretty);
            }

            let id = patient_id.unwrap_or_else(generate_patient_id);
            let patient = PatientRef::new(&id, name.as_deref().unwrap_or_default())?;
            let record = AssessmentRecord::new(patient, &assessment);
            tracing::info!(patient_id = %record.patient_id, record_id = %record.id, "Assessment recorded");

            write_json(
                &mut out,
                &RecordedAssessment {
                    record,
                    result: assessment.result,
                },
                pretty,
            )
        }
        Command::Derive { input } => {
            let vitals = read_vitals(input.as_deref(), stdin)?;
            write_json(&mut out, &calculate_derived_measurements(&vitals), pretty)
        }
        Command::Stats {
            input,
            now,
            range,
            patient_id,
            search,
        } => {
            let records = read_records(&input)?;
            let filter = RecordFilter {
                time_range: range,
                patient_id,
                search,
            };
            let summary = summarize(&records, &filter, now.unwrap_or_else(Utc::now));
            write_json(&mut out, &summary, pretty)
        }
        Command::History {
            input,
            patient_id,
            limit,
        } => {
            let records = read_records(&input)?;
            let mut listed = match patient_id {
                Some(id) => patient_assessments(&records, &id),
                None => latest_assessments(&records, limit),
            };
            listed.truncate(limit);
            write_json(&mut out, &listed, pretty)
        }
    }
}

fn read_text<R: Read>(path: Option<&Path>, mut stdin: R) -> Result<String, CliError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::ReadInput {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn read_vitals<R: Read>(path: Option<&Path>, stdin: R) -> Result<VitalsRecord, CliError> {
    let vitals: VitalsRecord = serde_json::from_str(&read_text(path, stdin)?)?;
    vitals.validate()?;
    Ok(vitals)
}

fn read_records(path: &Path) -> Result<Vec<AssessmentRecord>, CliError> {
    let records: Vec<AssessmentRecord> =
        serde_json::from_str(&read_text(Some(path), std::io::empty())?)?;
    tracing::debug!(count = records.len(), path = %path.display(), "Loaded assessment records");
    Ok(records)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
