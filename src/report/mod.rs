//! Tabular and JSON renderings of a sweep. These files are the hand-off to
//! whatever draws the charts.

pub mod export_csv;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::sweep::SweepReport;

pub use export_csv::{write_csv, write_family_csv, CSV_HEADER};

pub const JSON_REPORT_FILE: &str = "sweep.json";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to serialize report JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn write_json<W: Write>(report: &SweepReport, mut writer: W) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Writes `<family>.csv` for every family and [JSON_REPORT_FILE] into `dir`.
/// Returns the written paths.
pub fn export_report(report: &SweepReport, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, ReportError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(report.families.len() + 1);

    for family in &report.families {
        let path = dir.join(format!("{}.csv", family.name));
        write_family_csv(family, fs::File::create(&path)?)?;
        written.push(path);
    }

    let json_path = dir.join(JSON_REPORT_FILE);
    write_json(report, fs::File::create(&json_path)?)?;
    written.push(json_path);

    tracing::info!(dir = %dir.display(), files = written.len(), "sweep report exported");
    Ok(written)
}
