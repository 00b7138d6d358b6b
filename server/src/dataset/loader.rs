//! CSV loading for the dataset store.

use std::fs::File;
use std::path::{Path, PathBuf};

use super::gdp::{GdpRecord, parse_year_header};
use super::mission::{MissionRecord, MissionRow};

/// Header names accepted for the country column of the GDP file.
const GDP_COUNTRY_COLUMNS: [&str; 2] = ["Country", "Country Name"];

/// Error returned when a dataset file cannot be loaded.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be opened or read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not valid CSV or a row does not match the expected columns.
    Csv { path: PathBuf, source: csv::Error },
    /// A required column is absent from the header.
    MissingColumn { path: PathBuf, column: String },
    /// A cell holds a value that cannot be interpreted.
    InvalidValue {
        path: PathBuf,
        line: u64,
        column: String,
        value: String,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "malformed CSV in {}: {source}", path.display())
            }
            Self::MissingColumn { path, column } => {
                write!(f, "{} has no '{column}' column", path.display())
            }
            Self::InvalidValue {
                path,
                line,
                column,
                value,
            } => write!(
                f,
                "{}:{line}: invalid value '{value}' in column '{column}'",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::MissingColumn { .. } | Self::InvalidValue { .. } => None,
        }
    }
}

fn open_csv(path: &Path) -> Result<csv::Reader<File>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(csv::Reader::from_reader(file))
}

fn csv_error(path: &Path) -> impl Fn(csv::Error) -> LoadError + '_ {
    move |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

/// Read every mission row from `path`.
pub(super) fn load_missions(path: &Path) -> Result<Vec<MissionRecord>, LoadError> {
    let mut reader = open_csv(path)?;
    reader
        .deserialize::<MissionRow>()
        .map(|row| row.map(MissionRecord::from).map_err(csv_error(path)))
        .collect()
}

/// Read a wide-form GDP file from `path` and reshape it into long-form records.
///
/// Empty cells produce no record.
pub(super) fn load_gdp(path: &Path) -> Result<Vec<GdpRecord>, LoadError> {
    let mut reader = open_csv(path)?;
    let headers = reader.headers().map_err(csv_error(path))?.clone();

    let country_index = headers
        .iter()
        .position(|h| GDP_COUNTRY_COLUMNS.contains(&h.trim()))
        .ok_or_else(|| LoadError::MissingColumn {
            path: path.to_path_buf(),
            column: GDP_COUNTRY_COLUMNS[0].to_string(),
        })?;
    let year_columns: Vec<(usize, i32)> = headers
        .iter()
        .enumerate()
        .filter_map(|(i, h)| parse_year_header(h).map(|year| (i, year)))
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_error(path))?;
        let line = row.position().map_or(0, csv::Position::line);
        let Some(country) = row.get(country_index) else {
            continue;
        };
        for &(index, year) in &year_columns {
            let cell = row.get(index).unwrap_or_default().trim();
            if cell.is_empty() {
                continue;
            }
            let gdp = cell.parse::<f64>().map_err(|_| LoadError::InvalidValue {
                path: path.to_path_buf(),
                line,
                column: headers.get(index).unwrap_or_default().to_string(),
                value: cell.to_string(),
            })?;
            records.push(GdpRecord {
                country: country.to_string(),
                year,
                gdp,
            });
        }
    }
    Ok(records)
}
