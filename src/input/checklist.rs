use std::fs::OpenOptions;
use std::path::Path;
use thiserror::Error;

use crate::translation::{ChecklistRow, ChecklistTranslation};

/// Failures reading the checklist or appending to the output file.
#[derive(Debug, Error)]
pub enum ChecklistFileError {
    #[error("Failed to read checklist: {path}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Row {row} of {path} has {found} columns; expected Item,Description")]
    Shape {
        path: String,
        row: usize,
        found: usize,
    },

    #[error("Checklist has no rows: {path}")]
    Empty { path: String },

    #[error("Failed to write output file: {path}")]
    Write {
        path: String,
        #[source]
        source: csv::Error,
    },
}

impl ChecklistFileError {
    pub fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::Read { source, .. } if matches!(source.kind(), csv::ErrorKind::Io(_)) => {
                exitcode::NOINPUT
            }
            Self::Read { .. } | Self::Shape { .. } | Self::Empty { .. } => exitcode::DATAERR,
            Self::Write { .. } => exitcode::CANTCREAT,
        }
    }
}

/// Reads `Item,Description` rows. There is no header row; every record is data.
pub struct ChecklistReader;

impl ChecklistReader {
    pub fn read(path: &Path) -> Result<Vec<ChecklistRow>, ChecklistFileError> {
        let display = path.display().to_string();
        let read_error = |source| ChecklistFileError::Read {
            path: display.clone(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(read_error)?;

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(read_error)?;
            if record.len() != 2 {
                return Err(ChecklistFileError::Shape {
                    path: display,
                    row: index + 1,
                    found: record.len(),
                });
            }
            rows.push(record.deserialize(None).map_err(read_error)?);
        }

        if rows.is_empty() {
            return Err(ChecklistFileError::Empty { path: display });
        }
        Ok(rows)
    }
}

/// Appends translated rows to a CSV file, flushing after each one so rows
/// finished before a failure are kept.
pub struct ChecklistWriter {
    writer: csv::Writer<std::fs::File>,
    path: String,
}

impl ChecklistWriter {
    pub fn append(path: &Path) -> Result<Self, ChecklistFileError> {
        let display = path.display().to_string();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|err| ChecklistFileError::Write {
                path: display.clone(),
                source: err.into(),
            })?;

        Ok(Self {
            writer: csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(file),
            path: display,
        })
    }

    pub fn write(&mut self, row: &ChecklistTranslation) -> Result<(), ChecklistFileError> {
        self.writer
            .serialize(row)
            .and_then(|()| self.writer.flush().map_err(csv::Error::from))
            .map_err(|source| ChecklistFileError::Write {
                path: self.path.clone(),
                source,
            })
    }
}
