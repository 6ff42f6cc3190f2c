/// Implementation of `godump validate`.
///
/// Runs a full structural decode of the dump and reports either a
/// series of success checkmarks (`✓`) or a diagnostic failure line
/// (`✗`). The main dispatcher converts `Err` to exit code 1.
///
/// # Success output
///
/// ```text
/// ✓ Header: go1.5 heap dump
/// ✓ Records: 42 records decoded successfully
/// ✓ Termination: stream ends at a record boundary
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: unknown record tag 18 at offset 16
/// ```
use std::fs;

use anyhow::{Context, Result, anyhow};
use godump_decoder::DumpDecoder;

use crate::ValidateArgs;

/// Run the `godump validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the dump fails any
/// structural check.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    match DumpDecoder::decode(&bytes) {
        Ok(dump) => {
            println!("✓ Header: {}", dump.header);
            println!(
                "✓ Records: {} record{} decoded successfully",
                dump.records.len(),
                if dump.records.len() == 1 { "" } else { "s" }
            );
            println!("✓ Termination: stream ends at a record boundary");
            Ok(())
        }

        Err(e) => {
            println!("✗ Error: {e}");
            Err(anyhow!("validation failed"))
        }
    }
}
