/// `godump` command-line tool — render and check Go heap dump files
/// written by `debug.WriteHeapDump` (the `go1.5`–`go1.7` format).
///
/// # Command overview
///
/// ```text
/// godump <COMMAND> [OPTIONS]
///
/// Commands:
///   decode     Render a heap dump file as labeled text
///   validate   Check a heap dump file for structural correctness
///   help       Print help information
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                     |
/// |------|---------------------------------------------|
/// | 0    | Success                                     |
/// | 1    | Error (I/O failure, malformed dump, etc.)   |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod cmd_decode;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The Go heap dump decoding tool.
#[derive(Parser)]
#[command(name = "godump", version, about = "Go heap dump decoder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Render a heap dump file as labeled text.
    Decode(DecodeArgs),
    /// Check a heap dump file for structural correctness.
    Validate(ValidateArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `godump decode`.
///
/// Streams the dump through the decoder and writes the rendering to
/// stdout (or `-o <file>`). The pass stops at the explicit EOF record,
/// at a clean end of input, or at the first fatal error.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Path to the heap dump file to decode.
    pub file: PathBuf,

    /// Write rendered output to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `godump validate`.
///
/// Attempts a full structural decode and reports either a set of
/// success checkmarks or a diagnostic error. Exits 0 on a well-formed
/// dump, 1 on any structural problem.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the heap dump file to validate.
    pub file: PathBuf,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
