//! CSV export of sweep series, one row per `(series, players)` point.

use std::io::Write;

use serde::Serialize;

use super::ReportError;
use crate::sweep::{FamilyReport, SweepReport};

pub const CSV_HEADER: [&str; 4] = ["family", "series", "players", "probability"];

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    family: &'a str,
    series: &'a str,
    players: u32,
    probability: f64,
}

fn write_rows<W: Write>(
    writer: &mut csv::Writer<W>,
    family: &FamilyReport,
) -> Result<(), ReportError> {
    for series in &family.series {
        for point in &series.points {
            writer.serialize(CsvRow {
                family: &family.name,
                series: &series.label,
                players: point.players,
                probability: point.probability,
            })?;
        }
    }
    Ok(())
}

/// Every family of `report` in one table.
pub fn write_csv<W: Write>(report: &SweepReport, writer: W) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_writer(writer);
    if report.families.iter().all(|family| family.series.iter().all(|s| s.points.is_empty())) {
        writer.write_record(CSV_HEADER)?;
    }
    for family in &report.families {
        write_rows(&mut writer, family)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_family_csv<W: Write>(family: &FamilyReport, writer: W) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_writer(writer);
    if family.series.iter().all(|s| s.points.is_empty()) {
        writer.write_record(CSV_HEADER)?;
    }
    write_rows(&mut writer, family)?;
    writer.flush()?;
    Ok(())
}
