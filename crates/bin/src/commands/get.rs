//! Get command - resolves a dotted path and prints what it finds.

use crate::cli::GetArgs;
use crate::output::{OutputFormat, print_json, to_json};

use super::read_document;

/// Run the get command
pub fn run(args: &GetArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let document = read_document(args.file.as_deref())?;
    let found = document.lookup(&args.path)?;

    match format {
        OutputFormat::Human => match found.value() {
            Some(native) => println!("{}", native.to_json_string_pretty()?),
            // NotJson input is echoed as stored
            None => println!("{found}"),
        },
        OutputFormat::Json => {
            let report = serde_json::json!({
                "path": lazyjson::path::normalize_path(&args.path),
                "kind": found.kind(),
                "value": to_json(found.value())?,
            });
            print_json(&report)?;
        }
    }

    Ok(())
}
