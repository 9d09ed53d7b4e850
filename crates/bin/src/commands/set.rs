//! Set command - layers overlay writes on a document and re-encodes it.

use lazyjson::Value;

use crate::cli::{Assignment, SetArgs};
use crate::output::{OutputFormat, print_json, to_json};

use super::{parse_argument, read_document};

/// Run the set command
pub fn run(args: &SetArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let document = read_document(args.file.as_deref())?;
    apply(&document, &args.sets, &args.meta)?;

    match format {
        OutputFormat::Human => println!("{document}"),
        OutputFormat::Json => {
            let report = serde_json::json!({
                "document": to_json(document.value())?,
                "metadata": to_json(document.metadata().and_then(|meta| meta.value()))?,
            });
            print_json(&report)?;
        }
    }

    Ok(())
}

/// Apply every write and metadata entry to `document`, in order.
fn apply(
    document: &Value,
    sets: &[Assignment],
    meta: &[Assignment],
) -> Result<(), lazyjson::value::ValueError> {
    for assignment in sets {
        tracing::debug!(path = %assignment.path, "Applying overlay write");
        document.assign(&assignment.path, parse_argument(&assignment.value))?;
    }
    for entry in meta {
        document.add_metadata(&entry.path, parse_argument(&entry.value));
    }
    Ok(())
}
