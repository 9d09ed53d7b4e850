//! Kind command - classifies a document without decoding it.

use crate::cli::KindArgs;
use crate::output::{OutputFormat, print_json};

use super::read_document;

/// Run the kind command
pub fn run(args: &KindArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let document = read_document(args.file.as_deref())?;
    let kind = document.kind();

    match format {
        OutputFormat::Human => println!("{kind}"),
        OutputFormat::Json => print_json(&serde_json::json!({ "kind": kind }))?,
    }

    Ok(())
}
