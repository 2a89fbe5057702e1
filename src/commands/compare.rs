//! Main compare command

use crate::compare::find_divergence;
use crate::report::write_report;
use crate::types::FirstdiffError;
use crate::Config;
use std::fs::File;
use std::io::{self, BufReader, Write};

/// Run the comparison, reporting to stdout
pub fn run(config: Config) -> Result<(), FirstdiffError> {
    let stdout = io::stdout();
    run_with_writer(&config, &mut stdout.lock())
}

/// Run the comparison, reporting to an arbitrary writer
///
/// Opens both files up front; a failure on either side is fatal and nothing
/// is written. Both handles are owned by this scope and closed on every exit
/// path, including the early break after the first divergence.
pub fn run_with_writer<W: Write>(config: &Config, out: &mut W) -> Result<(), FirstdiffError> {
    let expected = open(&config.expected)?;
    let actual = open(&config.actual)?;

    let divergence = find_divergence(BufReader::new(expected), BufReader::new(actual))
        .map_err(|fault| fault.into_error(&config.expected, &config.actual))?;

    if let Some(divergence) = divergence {
        write_report(out, &divergence)?;
    }

    Ok(())
}

fn open(path: &std::path::Path) -> Result<File, FirstdiffError> {
    File::open(path).map_err(|source| FirstdiffError::Open {
        path: path.to_path_buf(),
        source,
    })
}
