use clap::Parser;
use log::{error, info, warn};
use sammock::config::Config;
use sammock::convert::{convert, Conversion};
use std::fs;
use std::io;
use std::path::Path;
use std::process::ExitCode;

/// Convert a symbolic alignment file into a SAM alignment file and a corresponding reference.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the input file with symbolic alignments.
    #[clap(value_parser)]
    input_file: String,

    /// Desired name of the generated reference sequence file.
    #[clap(short = 'r', long = "reference", value_parser, default_value = "ref.fa")]
    ref_file_name: String,

    /// Desired name of the generated alignments (SAM) file.
    #[clap(short = 'a', long = "alignments", value_parser, default_value = "alignments.sam")]
    sam_file_name: String,

    /// Name of the reference sequence in both outputs.
    #[clap(long, value_parser, default_value = "ref")]
    reference_name: String,

    /// Mapping quality reported for every alignment.
    #[clap(long, value_parser, default_value_t = 60)]
    mapping_quality: u8,

    /// Reject reads that annotate only some of their bases with a quality.
    #[clap(long, action)]
    strict: bool,

    /// Verbosity level (0 = error, 1 = info, 2 = debug)
    #[clap(short, long, default_value = "0")]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> io::Result<()> {
    let config = Config::default()
        .with_reference_name(&args.reference_name)
        .with_mapping_quality(args.mapping_quality)
        .with_strict_qualities(args.strict);

    let text = fs::read_to_string(&args.input_file).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("Failed to read input file '{}': {}", args.input_file, e),
        )
    })?;
    let conversion = convert(&text, &config)?;

    write_outputs(&conversion, &args.ref_file_name, &args.sam_file_name)?;
    info!(
        "Wrote {} and {} ({} alignments)",
        args.ref_file_name,
        args.sam_file_name,
        conversion.records.len()
    );
    Ok(())
}

/// Sibling path an output is written to before it is moved into place.
fn staging_path(path: &str) -> String {
    format!("{}.sammock-tmp", path)
}

fn discard(path: &str) {
    if let Err(e) = fs::remove_file(path) {
        warn!("Failed to remove '{}': {}", path, e);
    }
}

fn stage(path: &str, contents: &str, what: &str) -> io::Result<String> {
    let staged = staging_path(path);
    fs::write(&staged, contents).map_err(|e| {
        if Path::new(&staged).exists() {
            discard(&staged);
        }
        io::Error::new(
            e.kind(),
            format!("Failed to write {} file '{}': {}", what, path, e),
        )
    })?;
    Ok(staged)
}

/// Write both artifacts, or neither.
///
/// Both are staged next to their destinations first, so existing files are
/// only replaced once both outputs have been written in full.
fn write_outputs(conversion: &Conversion, ref_file_name: &str, sam_file_name: &str) -> io::Result<()> {
    let staged_ref = stage(ref_file_name, &conversion.reference, "reference")?;
    let staged_sam = match stage(sam_file_name, &conversion.alignments, "alignments") {
        Ok(staged) => staged,
        Err(e) => {
            discard(&staged_ref);
            return Err(e);
        }
    };

    if let Err(e) = fs::rename(&staged_sam, sam_file_name) {
        discard(&staged_sam);
        discard(&staged_ref);
        return Err(io::Error::new(
            e.kind(),
            format!("Failed to write alignments file '{}': {}", sam_file_name, e),
        ));
    }

    if let Err(e) = fs::rename(&staged_ref, ref_file_name) {
        discard(&staged_ref);
        discard(sam_file_name);
        return Err(io::Error::new(
            e.kind(),
            format!("Failed to write reference file '{}': {}", ref_file_name, e),
        ));
    }

    Ok(())
}
