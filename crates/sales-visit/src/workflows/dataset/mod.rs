//! CSV-backed implementation of the visit data boundary.
//!
//! A dataset directory holds `customers.csv`, `reports.csv` and `users.csv`.
//! Files are re-read on every call so edits show up without a restart.

mod normalizer;
mod parser;

use crate::workflows::visits::domain::{Customer, User, VisitReport};
use crate::workflows::visits::source::{SourceError, VisitDataSource};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

pub const CUSTOMERS_FILE: &str = "customers.csv";
pub const REPORTS_FILE: &str = "reports.csv";
pub const USERS_FILE: &str = "users.csv";

#[derive(Debug)]
pub enum DatasetImportError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Csv(csv::Error),
}

impl std::fmt::Display for DatasetImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetImportError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            DatasetImportError::Csv(err) => write!(f, "invalid CSV data: {}", err),
        }
    }
}

impl std::error::Error for DatasetImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetImportError::Io { source, .. } => Some(source),
            DatasetImportError::Csv(err) => Some(err),
        }
    }
}

impl From<csv::Error> for DatasetImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub fn read_users<R: Read>(reader: R) -> Result<Vec<User>, DatasetImportError> {
    Ok(parser::parse_users(reader)?)
}

pub fn read_customers<R: Read>(reader: R) -> Result<Vec<Customer>, DatasetImportError> {
    Ok(parser::parse_customers(reader)?)
}

pub fn read_reports<R: Read>(reader: R) -> Result<Vec<VisitReport>, DatasetImportError> {
    Ok(parser::parse_reports(reader)?)
}

#[derive(Debug, Clone)]
pub struct CsvDataset {
    root: PathBuf,
}

impl CsvDataset {
    pub fn open<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    fn load<T, F>(&self, file_name: &str, read: F) -> Result<Vec<T>, SourceError>
    where
        F: FnOnce(File) -> Result<Vec<T>, DatasetImportError>,
    {
        let path = self.root.join(file_name);
        let file = File::open(&path).map_err(|source| DatasetImportError::Io { path, source })?;
        Ok(read(file)?)
    }
}

impl VisitDataSource for CsvDataset {
    fn customers(&self) -> Result<Vec<Customer>, SourceError> {
        self.load(CUSTOMERS_FILE, read_customers)
    }

    fn all_reports(&self) -> Result<Vec<VisitReport>, SourceError> {
        self.load(REPORTS_FILE, read_reports)
    }

    fn users(&self) -> Result<Vec<User>, SourceError> {
        self.load(USERS_FILE, read_users)
    }
}
