// Copyright (c) 2026 TEAM BHOOMI
// Licensed under the MIT License. See LICENSE file in the project root.

//! Tabular dataset sources (preloaded or operator supplied CSV)

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use super::{Reading, ReadingSource, SourceKind, Weather};
use crate::error::{MonitorError, Result};

/// Columns every dataset must carry
pub const REQUIRED_COLUMNS: [&str; 5] = ["Timestamp", "Vibration", "Slope", "Weather", "Risk"];

/// A fully loaded dataset. The whole table is handed over as the initial
/// window; it is not a stream.
#[derive(Debug)]
pub struct DatasetSource {
    kind: SourceKind,
    name: String,
    rows: Vec<Reading>,
}

impl DatasetSource {
    /// Load a dataset from disk
    pub fn open(kind: SourceKind, path: &Path) -> Result<Self> {
        let name = path.display().to_string();
        let text = std::fs::read_to_string(path)
            .map_err(|e| MonitorError::unavailable(&name, e.to_string()))?;
        Self::from_text(kind, name, &text)
    }

    /// Load a dataset from an arbitrary reader (e.g. an uploaded file)
    pub fn from_reader<R: Read>(
        kind: SourceKind,
        name: impl Into<String>,
        mut reader: R,
    ) -> Result<Self> {
        let name = name.into();
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| MonitorError::unavailable(&name, e.to_string()))?;
        Self::from_text(kind, name, &text)
    }

    pub fn from_text(kind: SourceKind, name: impl Into<String>, text: &str) -> Result<Self> {
        let name = name.into();
        let rows = parse_dataset(&name, text)?;
        info!("Loaded {} readings from {} dataset '{}'", rows.len(), kind, name);
        Ok(Self { kind, name, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ReadingSource for DatasetSource {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn backlog(&mut self) -> Vec<Reading> {
        std::mem::take(&mut self.rows)
    }

    fn next(&mut self) -> Option<Reading> {
        None
    }
}

/// Parse CSV text into readings.
///
/// The first malformed row rejects the whole load.
pub fn parse_dataset(name: &str, text: &str) -> Result<Vec<Reading>> {
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header) = lines
        .next()
        .ok_or_else(|| MonitorError::unavailable(name, "dataset is empty"))?;

    // Spreadsheet "CSV UTF-8" exports lead with a byte-order mark
    let header = header.strip_prefix('\u{feff}').unwrap_or(header);
    let columns: HashMap<String, usize> = split_record(header)
        .into_iter()
        .enumerate()
        .map(|(i, col)| (col, i))
        .collect();

    let mut index = [0usize; 5];
    for (slot, required) in index.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = *columns.get(required).ok_or_else(|| {
            MonitorError::unavailable(name, format!("missing column '{}'", required))
        })?;
    }
    let [ts_col, vib_col, slope_col, weather_col, risk_col] = index;

    let mut rows = Vec::new();
    for (line_no, line) in lines {
        let fields = split_record(line);
        let field = |col: usize, label: &'static str| {
            fields.get(col).map(String::as_str).ok_or_else(|| {
                malformed(name, line_no, format!("missing value for '{}'", label))
            })
        };

        let timestamp = field(ts_col, "Timestamp")?.to_string();
        let vibration = parse_float(field(vib_col, "Vibration")?)
            .ok_or_else(|| malformed(name, line_no, "Vibration is not a number"))?;
        let slope_angle = parse_float(field(slope_col, "Slope")?)
            .ok_or_else(|| malformed(name, line_no, "Slope is not a number"))?;
        let weather: Weather = field(weather_col, "Weather")?
            .parse()
            .map_err(|e: String| malformed(name, line_no, e))?;
        let risk_score: i64 = field(risk_col, "Risk")?
            .parse()
            .map_err(|_| malformed(name, line_no, "Risk is not an integer"))?;
        if !(0..=100).contains(&risk_score) {
            return Err(malformed(name, line_no, format!("Risk {} outside 0-100", risk_score)));
        }

        rows.push(Reading {
            timestamp,
            vibration,
            slope_angle,
            weather,
            risk_score,
        });
    }

    if rows.is_empty() {
        return Err(MonitorError::unavailable(name, "dataset has no rows"));
    }

    debug!("Parsed {} rows from '{}'", rows.len(), name);
    Ok(rows)
}

fn malformed(name: &str, line_index: usize, reason: impl std::fmt::Display) -> MonitorError {
    MonitorError::unavailable(name, format!("line {}: {}", line_index + 1, reason))
}

fn parse_float(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Split one CSV record. Fields are trimmed and double quotes removed;
/// a doubled quote inside a quoted field is a literal quote.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Timestamp,Vibration,Slope,Weather,Risk
10:00:00,0.52,44.1,Sunny,12
10:01:00,0.61,45.3,Rainy,55
10:02:00,0.70,46.0,Windy,81
";

    #[test]
    fn test_parse_sample() {
        let rows = parse_dataset("sample", SAMPLE).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].timestamp, "10:00:00");
        assert_eq!(rows[1].weather, Weather::Rainy);
        assert_eq!(rows[2].risk_score, 81);
        assert_eq!(rows[2].slope_angle, 46.0);
    }

    #[test]
    fn test_column_order_and_extras() {
        let text = "Risk,Weather,Site,Slope,Vibration,Timestamp\n40,Cloudy,north,43.5,0.4,\"11:00:00\"\n";
        let rows = parse_dataset("reordered", text).unwrap();
        assert_eq!(rows[0].risk_score, 40);
        assert_eq!(rows[0].timestamp, "11:00:00");
        assert_eq!(rows[0].vibration, 0.4);
    }

    #[test]
    fn test_byte_order_mark_header() {
        let text = format!("\u{feff}{}", SAMPLE);
        let rows = parse_dataset("bom.csv", &text).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].timestamp, "10:00:00");
    }

    #[test]
    fn test_missing_column_rejected() {
        let text = "Timestamp,Vibration,Slope,Risk\n10:00:00,0.5,45,10\n";
        let err = parse_dataset("no-weather", text).unwrap_err();
        assert!(matches!(err, MonitorError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("Weather"));
    }

    #[test]
    fn test_empty_and_header_only_rejected() {
        assert!(parse_dataset("empty", "").is_err());
        assert!(parse_dataset("blank", "\n \n").is_err());
        assert!(parse_dataset("header", "Timestamp,Vibration,Slope,Weather,Risk\n").is_err());
    }

    #[test]
    fn test_malformed_row_rejects_whole_load() {
        let text = format!("{}10:03:00,abc,45.0,Sunny,20\n", SAMPLE);
        let err = parse_dataset("bad", &text).unwrap_err();
        assert!(err.to_string().contains("line 5"));

        let text = format!("{}10:03:00,0.5,45.0,Snowy,20\n", SAMPLE);
        assert!(parse_dataset("bad", &text).is_err());

        let text = format!("{}10:03:00,0.5,45.0,Sunny,101\n", SAMPLE);
        assert!(parse_dataset("bad", &text).is_err());

        let text = format!("{}10:03:00,0.5,45.0,Sunny,4.5\n", SAMPLE);
        assert!(parse_dataset("bad", &text).is_err());

        let text = format!("{}10:03:00,0.5\n", SAMPLE);
        assert!(parse_dataset("bad", &text).is_err());
    }

    #[test]
    fn test_backlog_drains_once() {
        let mut source = DatasetSource::from_text(SourceKind::External, "upload", SAMPLE).unwrap();
        assert_eq!(source.kind(), SourceKind::External);
        assert_eq!(source.backlog().len(), 3);
        assert!(source.backlog().is_empty());
        assert!(source.next().is_none());
    }

    #[test]
    fn test_from_reader() {
        let source = DatasetSource::from_reader(SourceKind::External, "upload.csv", SAMPLE.as_bytes()).unwrap();
        assert_eq!(source.len(), 3);
        assert_eq!(source.name(), "upload.csv");
    }

    #[test]
    fn test_missing_file() {
        let err = DatasetSource::open(SourceKind::Static, Path::new("/nonexistent/mine.csv")).unwrap_err();
        assert!(matches!(err, MonitorError::SourceUnavailable { .. }));
    }

    #[test]
    fn test_split_record_quotes() {
        assert_eq!(split_record(r#"a, "b,c" ,"d""e""#), vec!["a", "b,c", "d\"e"]);
    }
}
