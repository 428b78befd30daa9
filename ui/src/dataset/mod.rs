//! Student dataset loading.
//!
//! A [`Dataset`] keeps two views of the same file:
//! - the raw table (normalized headers plus every field as read), which the
//!   export re-serializes untouched;
//! - typed [`StudentRecord`]s for the columns the dashboard computes with.
//!
//! Loading is memoized through [`cache`]; see [`shared`].

mod cache;

pub use cache::{shared, CacheKey, DatasetCache};

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use csv::StringRecord;
use dioxus::logger::tracing::info;
use serde::Deserialize;
use thiserror::Error;

pub const COL_AGE: &str = "Idade";
pub const COL_CALORIES: &str = "Calorias_Sessao";
pub const COL_LEVEL: &str = "Nivel";
pub const COL_WEEKLY_FREQUENCY: &str = "Frequencia_Semanal";
pub const COL_WINS: &str = "Vitorias_Sparring";
pub const COL_LOSSES: &str = "Derrotas_Sparring";

/// Columns every dataset must provide; any others are carried along untouched.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_AGE,
    COL_CALORIES,
    COL_LEVEL,
    COL_WEEKLY_FREQUENCY,
    COL_WINS,
    COL_LOSSES,
];

const BYTE_ORDER_MARK: char = '\u{feff}';

/// One student row. Blank numeric cells are `None`: means skip them and the
/// sparring sums count them as zero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "Idade")]
    pub age: Option<u32>,
    #[serde(rename = "Calorias_Sessao")]
    pub calories: Option<f64>,
    #[serde(rename = "Nivel")]
    pub level: String,
    #[serde(rename = "Frequencia_Semanal")]
    pub weekly_sessions: Option<u32>,
    #[serde(rename = "Vitorias_Sparring")]
    pub wins: Option<u32>,
    #[serde(rename = "Derrotas_Sparring")]
    pub losses: Option<u32>,
}

impl StudentRecord {
    pub fn wins_or_zero(&self) -> u32 {
        self.wins.unwrap_or(0)
    }

    pub fn losses_or_zero(&self) -> u32 {
        self.losses.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Error)]
pub enum DatasetError {
    #[error("could not open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[source] Arc<csv::Error>),
    #[error("required column `{0}` is missing")]
    MissingColumn(&'static str),
    #[error("row {row}: {reason}")]
    InvalidValue { row: usize, reason: String },
}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(Arc::new(err))
    }
}

/// Read-only student table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    students: Vec<StudentRecord>,
}

impl Dataset {
    /// Open and parse `path`.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path).map_err(|err| DatasetError::Open {
            path: path.to_path_buf(),
            source: Arc::new(err),
        })?;
        let dataset = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            rows = dataset.len(),
            columns = dataset.headers.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Parse comma-delimited text with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(DatasetError::MissingColumn(column));
            }
        }
        let header_record = StringRecord::from(headers.clone());

        let mut rows = Vec::new();
        let mut students = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result?;
            let row = index + 1;
            // Typed view reads trimmed cells; the raw row stays as written.
            let mut typed = record.clone();
            typed.trim();
            let student: StudentRecord = typed
                .deserialize(Some(&header_record))
                .map_err(|err| DatasetError::InvalidValue {
                    row,
                    reason: err.to_string(),
                })?;
            validate(&student, row)?;

            rows.push(record.iter().map(str::to_string).collect());
            students.push(student);
        }

        Ok(Self {
            headers,
            rows,
            students,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn students(&self) -> &[StudentRecord] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Distinct skill levels in order of first appearance.
    pub fn levels(&self) -> Vec<String> {
        let mut levels: Vec<String> = Vec::new();
        for student in &self.students {
            if !levels.iter().any(|level| level == &student.level) {
                levels.push(student.level.clone());
            }
        }
        levels
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches(BYTE_ORDER_MARK).trim().to_string()
}

fn validate(student: &StudentRecord, row: usize) -> Result<(), DatasetError> {
    match student.calories {
        Some(calories) if !calories.is_finite() || calories < 0.0 => {
            Err(DatasetError::InvalidValue {
                row,
                reason: format!("{COL_CALORIES} must be a non-negative number, got {calories}"),
            })
        }
        _ => Ok(()),
    }
}
