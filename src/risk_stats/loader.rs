//! CSV loader for risk statistics
//!
//! Expected header:
//! `risk_type,sex,age_from,age_to,annual_prob,lifetime_prob,note,source_name,source_url`

use log::{info, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{RiskStat, Sex};
use crate::error::DataError;

/// Raw CSV row; empty optional columns deserialize to `None`
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    risk_type: String,
    sex: String,
    age_from: u32,
    age_to: u32,
    annual_prob: f64,
    lifetime_prob: Option<f64>,
    note: Option<String>,
    source_name: Option<String>,
    source_url: Option<String>,
}

impl CsvRow {
    fn into_stat(self, line: u64) -> Result<RiskStat, DataError> {
        let sex = self.sex.parse::<Sex>().map_err(|reason| DataError::InvalidRecord { line, reason })?;

        Ok(RiskStat {
            risk_type: self.risk_type,
            sex,
            age_from: self.age_from,
            age_to: self.age_to,
            annual_prob: self.annual_prob,
            lifetime_prob: self.lifetime_prob,
            note: self.note.filter(|s| !s.is_empty()),
            source_name: self.source_name.filter(|s| !s.is_empty()),
            source_url: self.source_url.filter(|s| !s.is_empty()),
        })
    }
}

/// Load risk statistics from a CSV file
pub fn load_risk_stats(path: &Path) -> Result<Vec<RiskStat>, DataError> {
    let file = File::open(path)?;
    let stats = load_risk_stats_from_reader(file)?;
    info!("Loaded {} risk statistics from {}", stats.len(), path.display());
    Ok(stats)
}

/// Load risk statistics from any reader
///
/// Rows with an inverted age band or a probability outside [0, 1] are
/// skipped with a warning; malformed rows fail the load.
pub fn load_risk_stats_from_reader<R: Read>(reader: R) -> Result<Vec<RiskStat>, DataError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut stats = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: CsvRow = record.deserialize(Some(&headers))?;
        let stat = row.into_stat(line)?;

        if let Err(reason) = stat.check_consistency() {
            warn!("Skipping risk stat at line {}: {}", line, reason);
            continue;
        }

        stats.push(stat);
    }

    Ok(stats)
}
