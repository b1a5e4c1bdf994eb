//! Command-line adapter
//!
//! Argument definitions and the run loop behind the `pwd-verdict` binary.

use std::ffi::OsString;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use crate::evaluator::{evaluate_bytes, InputError};
use crate::policy::Policy;
use crate::verdict::Verdict;

/// Exit status when the input is not text.
pub const EXIT_INVALID_INPUT: u8 = 2;

/// Exit status for any other failure.
pub const EXIT_FAILURE: u8 = 1;

/// Password strength classifier
#[derive(Parser, Debug, Default)]
#[command(name = "pwd-verdict", version, about = "Classify password strength")]
pub struct Cli {
    /// Password to evaluate (read from stdin when omitted)
    #[arg(short, long)]
    pub password: Option<OsString>,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,

    /// Minimum length override
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Special character set override
    #[arg(long)]
    pub special_chars: Option<String>,
}

/// Evaluates the password named by `cli` (or the first line of `input`) and
/// writes the verdict to `out`.
pub fn run(cli: &Cli, input: impl BufRead, mut out: impl Write) -> Result<()> {
    let policy = build_policy(cli)?;
    let password = read_input(cli, input)?;
    let verdict = evaluate_bytes(&password, &policy)?;

    if cli.json {
        serde_json::to_writer_pretty(&mut out, &verdict)?;
        writeln!(out)?;
    } else {
        print_human(&mut out, &verdict)?;
    }
    Ok(())
}

/// Maps a `run` failure to the process exit status.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<InputError>().is_some() {
        EXIT_INVALID_INPUT
    } else {
        EXIT_FAILURE
    }
}

fn build_policy(cli: &Cli) -> Result<Policy> {
    let mut policy = Policy::from_env().context("invalid policy environment")?;
    if let Some(min_length) = cli.min_length {
        policy = policy.with_min_length(min_length)?;
    }
    if let Some(special_chars) = &cli.special_chars {
        policy = policy.with_special_chars(special_chars.clone())?;
    }
    Ok(policy)
}

fn read_input(cli: &Cli, mut input: impl BufRead) -> Result<Vec<u8>> {
    if let Some(password) = &cli.password {
        return Ok(password.as_encoded_bytes().to_vec());
    }

    let mut line = Vec::new();
    input
        .read_until(b'\n', &mut line)
        .context("failed to read password from stdin")?;
    while matches!(line.last(), Some(b'\n' | b'\r')) {
        line.pop();
    }
    Ok(line)
}

fn print_human(out: &mut impl Write, verdict: &Verdict) -> std::io::Result<()> {
    writeln!(out, "Score: {} / 5 -> {}", verdict.score, verdict.strength)?;
    if !verdict.feedback.is_empty() {
        writeln!(out, "Suggestions:")?;
        for tip in &verdict.feedback {
            writeln!(out, "  - {tip}")?;
        }
    }
    if !verdict.warnings.is_empty() {
        writeln!(out, "Warnings:")?;
        for warning in &verdict.warnings {
            writeln!(out, "  - {warning}")?;
        }
    }
    Ok(())
}
