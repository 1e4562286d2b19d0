use crate::queens::{classify, Placement};
use serde::Serialize;
use std::io;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("csv output is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

const HEADER: [&str; 3] = ["Solution #", "Configuration", "Symmetric"];

#[derive(Serialize)]
struct SolutionRecord {
    index: usize,
    configuration: String,
    symmetric: bool,
}

pub fn file_name(n: usize) -> String {
    format!("nqueens_{}.csv", n)
}

/// Writes one row per solution, numbered from 1, in algebraic notation.
/// `Symmetric` is set when an earlier row is a rotation or reflection.
/// The header is written even when there are no solutions.
pub fn write_solutions_csv<W: io::Write>(
    writer: W,
    solutions: &[Placement],
) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(HEADER)?;
    for (i, (placement, symmetric)) in classify(solutions).into_iter().enumerate() {
        wtr.serialize(SolutionRecord {
            index: i + 1,
            configuration: placement.notation(),
            symmetric,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_solutions_csv_to_path<P: AsRef<Path>>(
    path: P,
    solutions: &[Placement],
) -> Result<(), ExportError> {
    let file = std::fs::File::create(path.as_ref())?;
    write_solutions_csv(io::BufWriter::new(file), solutions)?;
    log::info!("wrote {} solutions to {}", solutions.len(), path.as_ref().display());
    Ok(())
}

pub fn solutions_csv_string(solutions: &[Placement]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_solutions_csv(&mut buf, solutions)?;
    Ok(String::from_utf8(buf)?)
}
