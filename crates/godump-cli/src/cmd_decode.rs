/// Implementation of `godump decode`.
///
/// Opens the dump file, wraps it in a buffered reader, and hands it to
/// `DumpDriver::run`, which streams records and writes the rendering as
/// it goes — the whole dump is never held in memory.
use std::fs;
use std::io::{self, BufReader, BufWriter, Write as _};

use anyhow::{Context, Result};
use godump_driver::DumpDriver;

use crate::DecodeArgs;

/// Run the `godump decode` command.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the dump is
/// structurally invalid, or the output cannot be written.
pub fn run(args: &DecodeArgs) -> Result<()> {
    let file =
        fs::File::open(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;
    let reader = BufReader::new(file);

    match &args.output {
        Some(path) => {
            let out = fs::File::create(path)
                .with_context(|| format!("cannot write {}", path.display()))?;
            let mut out = BufWriter::new(out);
            DumpDriver::run(reader, &mut out)
                .with_context(|| format!("failed to decode {}", args.file.display()))?;
            out.flush()
                .with_context(|| format!("cannot write {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            DumpDriver::run(reader, &mut handle)
                .with_context(|| format!("failed to decode {}", args.file.display()))?;
        }
    }

    Ok(())
}
