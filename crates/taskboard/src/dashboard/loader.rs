use super::dataset::{Dataset, TaskRecord};
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 6] = ["Phase", "Task", "Cost", "Status", "Start Date", "End Date"];

#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("failed to read task data: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid task CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("task data is missing expected column '{0}'")]
    MissingColumn(&'static str),
    #[error("line {line}: could not parse '{value}' as a {column} date")]
    InvalidDate {
        line: u64,
        column: &'static str,
        value: String,
    },
}

/// Reads the project task CSV into an immutable [`Dataset`].
///
/// Any problem with the file is fatal: there is no partial dashboard over a
/// half-read dataset.
pub struct DatasetLoader;

impl DatasetLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Dataset, DataLoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset, DataLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        validate_headers(csv_reader.headers()?)?;

        let mut records = Vec::new();
        for (index, row) in csv_reader.deserialize::<TaskRow>().enumerate() {
            // header occupies line 1, first data row is line 2
            let line = index as u64 + 2;
            records.push(row?.into_record(line)?);
        }

        Ok(Dataset::new(records))
    }
}

fn validate_headers(headers: &csv::StringRecord) -> Result<(), DataLoadError> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(DataLoadError::MissingColumn(column));
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct TaskRow {
    #[serde(rename = "Phase")]
    phase: String,
    #[serde(rename = "Task")]
    task: String,
    #[serde(rename = "Cost")]
    cost: f64,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Start Date")]
    start_date: String,
    #[serde(rename = "End Date")]
    end_date: String,
}

impl TaskRow {
    fn into_record(self, line: u64) -> Result<TaskRecord, DataLoadError> {
        let start_date = parse_row_date(&self.start_date, "Start Date", line)?;
        let end_date = parse_row_date(&self.end_date, "End Date", line)?;

        Ok(TaskRecord {
            phase: self.phase,
            task: self.task,
            cost: self.cost,
            status: self.status,
            start_date,
            end_date,
        })
    }
}

fn parse_row_date(
    value: &str,
    column: &'static str,
    line: u64,
) -> Result<NaiveDate, DataLoadError> {
    parse_date(value).ok_or_else(|| DataLoadError::InvalidDate {
        line,
        column,
        value: value.to_string(),
    })
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    for format in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    None
}

#[cfg(test)]
pub(crate) fn parse_date_for_tests(value: &str) -> Option<NaiveDate> {
    parse_date(value)
}
