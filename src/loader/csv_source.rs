use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ByteRecord, ReaderBuilder, Trim};

use crate::models::{is_missing_cell, parse_record_date, PatientId, StatusRecord};

use super::{
    LoadError, RecordSource, COL_EFFECTIVE_DATE, COL_PATIENT_ID, COL_PREVIOUS_STORE,
    COL_RECENT_STATUS, COL_STATUS, COL_TRANSITION_DATE,
};

/// CSV export of the patient status table, re-read on every load.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for CsvFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<StatusRecord>, LoadError> {
        let file = File::open(&self.path).map_err(|e| LoadError::Unavailable {
            source_name: self.describe(),
            reason: e.to_string(),
        })?;

        let records = read_records(file)?;
        tracing::info!(
            path = %self.path.display(),
            rows = records.len(),
            "Loaded patient status records"
        );
        Ok(records)
    }
}

/// Header positions of the required columns.
struct ColumnMap {
    patient_id: usize,
    effective_date: usize,
    status: usize,
    recent_status: usize,
    previous_store: usize,
    transition_date: usize,
}

impl ColumnMap {
    fn from_headers(headers: &ByteRecord) -> Result<Self, LoadError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| String::from_utf8_lossy(h).trim() == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            patient_id: find(COL_PATIENT_ID)?,
            effective_date: find(COL_EFFECTIVE_DATE)?,
            status: find(COL_STATUS)?,
            recent_status: find(COL_RECENT_STATUS)?,
            previous_store: find(COL_PREVIOUS_STORE)?,
            transition_date: find(COL_TRANSITION_DATE)?,
        })
    }
}

/// Reads status records from CSV text with a header row.
///
/// Bad dates and store numbers are coerced to `None`. Rows with a blank
/// patient id are skipped. A patient id that is present but not an integer
/// fails the whole load. Invalid UTF-8 is replaced cell by cell.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<StatusRecord>, LoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(csv_reader.byte_headers()?)?;

    let mut records = Vec::new();
    let mut coerced_dates = 0usize;
    let mut skipped_rows = 0usize;
    let mut lossy_rows = 0usize;

    for (index, row) in csv_reader.byte_records().enumerate() {
        let row = row?;
        // Header is line 1.
        let line = index + 2;

        if std::str::from_utf8(row.as_slice()).is_err() {
            lossy_rows += 1;
        }

        let raw_id = cell(&row, columns.patient_id);
        if is_missing_cell(&raw_id) {
            skipped_rows += 1;
            continue;
        }
        let patient_id = parse_integral(&raw_id).ok_or_else(|| LoadError::InvalidPatientId {
            row: line,
            value: raw_id.to_string(),
        })?;

        let raw_effective = cell(&row, columns.effective_date);
        let raw_transition = cell(&row, columns.transition_date);
        let effective_date = parse_record_date(&raw_effective);
        let transition_date = parse_record_date(&raw_transition);
        for (raw, parsed) in [
            (&raw_effective, effective_date),
            (&raw_transition, transition_date),
        ] {
            if parsed.is_none() && !is_missing_cell(raw) {
                coerced_dates += 1;
            }
        }

        records.push(StatusRecord {
            patient_id: PatientId(patient_id),
            effective_date,
            status: text_cell(&cell(&row, columns.status)),
            recent_status: text_cell(&cell(&row, columns.recent_status)),
            previous_store: parse_integral(&cell(&row, columns.previous_store)),
            transition_date,
        });
    }

    if coerced_dates > 0 || skipped_rows > 0 || lossy_rows > 0 {
        tracing::warn!(
            coerced_dates,
            skipped_rows,
            lossy_rows,
            "Lenient load coerced or skipped some cells"
        );
    }

    Ok(records)
}

/// Cell `i` of a row; short rows read as blank.
fn cell(row: &ByteRecord, i: usize) -> Cow<'_, str> {
    row.get(i)
        .map(String::from_utf8_lossy)
        .unwrap_or(Cow::Borrowed(""))
}

fn text_cell(raw: &str) -> Option<String> {
    if is_missing_cell(raw) {
        None
    } else {
        Some(raw.trim().to_string())
    }
}

/// Integer cell. Spreadsheet exports often write `1234.0` for integer columns.
fn parse_integral(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }

    let value = trimmed.parse::<f64>().ok()?;
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    if value.is_finite() && value.fract() == 0.0 && in_range {
        Some(value as i64)
    } else {
        None
    }
}
