//! Malphas Archive Utility
//!
//! Thin command-line collaborator around the Huffman engine: gathers a mode
//! and two file paths, runs the codec, and presents the outcome. Anything
//! not supplied as a flag is asked for interactively.
//!
//! ## Usage
//!
//! ```bash
//! # Fully interactive
//! malphas
//!
//! # Non-interactive
//! malphas --mode 1 --source notes.txt --dest notes.mlph
//! malphas --mode 2 --source notes.mlph --dest notes.txt
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use malphas_huffman::HuffmanCodec;

/// Exit code for an invalid mode selection.
const EXIT_BAD_MODE: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "malphas")]
#[command(author = "Daemoniorum LLC")]
#[command(version)]
#[command(about = "Malphas Huffman archive utility", long_about = None)]
struct Args {
    /// Operation: 1 = compress, 2 = decompress (prompted if omitted)
    #[arg(short, long)]
    mode: Option<String>,

    /// Source file path (prompted if omitted)
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Destination file path (prompted if omitted)
    #[arg(short, long)]
    dest: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// The two supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Compress,
    Decompress,
}

impl Mode {
    /// Parse the menu selection. Anything but "1" or "2" is rejected.
    fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Mode::Compress),
            "2" => Some(Mode::Decompress),
            _ => None,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("failed to set tracing subscriber");
        return ExitCode::FAILURE;
    }

    // Resolve the mode before touching any file.
    let choice = match args.mode {
        Some(choice) => choice,
        None => {
            println!("Malphas Archive Utility");
            println!("Choose an option:");
            println!("  1. Compress a file");
            println!("  2. Decompress a file");
            match prompt("Enter your choice (1/2): ") {
                Ok(choice) => choice,
                Err(err) => {
                    error!("failed to read choice: {err}");
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    let mode = match Mode::parse(&choice) {
        Some(mode) => mode,
        None => {
            error!("invalid choice {choice:?}: expected 1 (compress) or 2 (decompress)");
            return ExitCode::from(EXIT_BAD_MODE);
        }
    };

    let (source_label, dest_label) = match mode {
        Mode::Compress => ("input file path to compress", "output file path for the archive"),
        Mode::Decompress => ("archive path to decompress", "output file path for the restored data"),
    };

    let source = match resolve_path(args.source, source_label) {
        Ok(path) => path,
        Err(err) => {
            error!("failed to read source path: {err}");
            return ExitCode::FAILURE;
        }
    };
    let dest = match resolve_path(args.dest, dest_label) {
        Ok(path) => path,
        Err(err) => {
            error!("failed to read destination path: {err}");
            return ExitCode::FAILURE;
        }
    };

    let codec = HuffmanCodec::new();
    let outcome = match mode {
        Mode::Compress => codec.compress_file(&source, &dest).map(|ratio| {
            info!(
                "compressed {} -> {} ({} bytes -> {} bytes, {:.1}% saved)",
                source.display(),
                dest.display(),
                ratio.original_size,
                ratio.compressed_size,
                ratio.savings_percent()
            );
        }),
        Mode::Decompress => codec.decompress_file(&source, &dest).map(|written| {
            info!(
                "decompressed {} -> {} ({} bytes restored)",
                source.display(),
                dest.display(),
                written
            );
        }),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Use the flag value when given, otherwise prompt for it.
fn resolve_path(flag: Option<PathBuf>, label: &str) -> io::Result<PathBuf> {
    match flag {
        Some(path) => Ok(path),
        None => {
            let answer = prompt(&format!("Enter the {}: ", label))?;
            if answer.is_empty() {
                return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty path"));
            }
            Ok(PathBuf::from(answer))
        }
    }
}

/// Print a prompt and read one trimmed line from stdin.
fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!(Mode::parse("1"), Some(Mode::Compress));
        assert_eq!(Mode::parse("2"), Some(Mode::Decompress));
        assert_eq!(Mode::parse(" 1 "), Some(Mode::Compress));
        assert_eq!(Mode::parse("3"), None);
        assert_eq!(Mode::parse("compress"), None);
        assert_eq!(Mode::parse(""), None);
    }
}
