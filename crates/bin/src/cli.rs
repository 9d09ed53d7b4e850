//! CLI argument definitions for the lazyjson binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Inspect and patch JSON documents without decoding more than needed
#[derive(Parser, Debug)]
#[command(name = "lazyjson")]
#[command(about = "lazyjson: lazy JSON inspection and non-destructive patching")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", env = "LAZYJSON_FORMAT")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the top-level kind of a document
    Kind(KindArgs),
    /// Print the value at a dotted path
    Get(GetArgs),
    /// Apply overlay writes and print the re-encoded document
    Set(SetArgs),
}

/// Arguments for the kind command
#[derive(clap::Args, Debug)]
pub struct KindArgs {
    /// Document to read (defaults to stdin)
    pub file: Option<PathBuf>,
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Dotted path such as `address.street` or `contacts.0`
    pub path: String,

    /// Document to read (defaults to stdin)
    pub file: Option<PathBuf>,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Document to read (defaults to stdin)
    pub file: Option<PathBuf>,

    /// Overlay write; values that are not valid JSON are stored as strings
    #[arg(
        long = "set",
        value_name = "PATH=JSON",
        value_parser = parse_assignment,
        required = true
    )]
    pub sets: Vec<Assignment>,

    /// Metadata entry to attach to the document
    #[arg(long = "meta", value_name = "KEY=JSON", value_parser = parse_assignment)]
    pub meta: Vec<Assignment>,
}

/// A `PATH=JSON` pair given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub path: String,
    pub value: String,
}

fn parse_assignment(input: &str) -> Result<Assignment, String> {
    let Some((path, value)) = input.split_once('=') else {
        return Err(format!("expected PATH=JSON, got '{input}'"));
    };
    if path.is_empty() {
        return Err("path must not be empty".to_string());
    }
    Ok(Assignment {
        path: path.to_string(),
        value: value.to_string(),
    })
}
