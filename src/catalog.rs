use csv::{Reader, ReaderBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use crate::projection::{compute_projection, ProjectionError, ProjectionRow};

/// Columns expected in a CSV catalog, in order.
pub const CSV_HEADERS: [&str; 4] = ["Subject", "Total Classes", "Attended Classes", "Max Days"];

/// Largest accepted `max_extra_days`. Every request builds one row and one
/// bar per day, so the bound keeps each cycle small.
pub const MAX_EXTRA_DAYS: u32 = 31;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SubjectRecord {
    pub name: String,
    pub total_classes: u32,
    pub attended_classes: u32,
    pub max_extra_days: u32,
}

impl SubjectRecord {
    pub fn new(name: &str, total_classes: u32, attended_classes: u32, max_extra_days: u32) -> Self {
        Self {
            name: name.to_string(),
            total_classes,
            attended_classes,
            max_extra_days,
        }
    }

    pub fn projection(&self) -> Result<Vec<ProjectionRow>, ProjectionError> {
        compute_projection(self.total_classes, self.attended_classes, self.max_extra_days)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog has no subjects")]
    Empty,

    #[error("subject at position {0} has an empty name")]
    EmptyName(usize),

    #[error("duplicate subject name: {0}")]
    DuplicateName(String),

    #[error("subject {name}: attended_classes={attended_classes} exceeds total_classes={total_classes}")]
    AttendedExceedsTotal {
        name: String,
        attended_classes: u32,
        total_classes: u32,
    },

    #[error("subject {name}: max_extra_days={max_extra_days} exceeds the limit of {}", MAX_EXTRA_DAYS)]
    ExtraDaysTooLarge { name: String, max_extra_days: u32 },

    #[error("subject not in catalog: {0}")]
    UnknownSubject(String),

    #[error("catalog header must be {:?}, found {found:?}", CSV_HEADERS)]
    InvalidHeader { found: Vec<String> },

    #[error("catalog line {line}: expected {expected} columns, found {found}")]
    MissingColumns {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("catalog line {line}: column '{column}' is not a non-negative integer: '{value}'")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Read-only set of subjects, validated once at construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    subjects: Vec<SubjectRecord>,
}

impl Catalog {
    pub fn new(subjects: Vec<SubjectRecord>) -> Result<Self, CatalogError> {
        if subjects.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, subject) in subjects.iter().enumerate() {
            if subject.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(index));
            }
            if !seen.insert(subject.name.as_str()) {
                return Err(CatalogError::DuplicateName(subject.name.clone()));
            }
            if subject.attended_classes > subject.total_classes {
                return Err(CatalogError::AttendedExceedsTotal {
                    name: subject.name.clone(),
                    attended_classes: subject.attended_classes,
                    total_classes: subject.total_classes,
                });
            }
            if subject.max_extra_days > MAX_EXTRA_DAYS {
                return Err(CatalogError::ExtraDaysTooLarge {
                    name: subject.name.clone(),
                    max_extra_days: subject.max_extra_days,
                });
            }
        }

        Ok(Self { subjects })
    }

    /// The semester table the calculator ships with.
    pub fn builtin() -> Self {
        let subjects = vec![
            SubjectRecord::new("LOGIC", 55, 39, 4),
            SubjectRecord::new("DD", 60, 53, 4),
            SubjectRecord::new("OOPS", 56, 34, 4),
            SubjectRecord::new("DISCRETE", 57, 36, 4),
            SubjectRecord::new("FFA", 40, 27, 3),
            SubjectRecord::new("POE", 36, 24, 3),
        ];
        Self { subjects }
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let rdr = ReaderBuilder::new().flexible(true).from_path(path)?;
        Self::from_csv(rdr)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Self::from_csv(ReaderBuilder::new().flexible(true).from_reader(reader))
    }

    fn from_csv<R: Read>(mut rdr: Reader<R>) -> Result<Self, CatalogError> {
        let found: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
        if !found.iter().map(String::as_str).eq(CSV_HEADERS) {
            return Err(CatalogError::InvalidHeader { found });
        }

        let mut subjects = Vec::new();

        for result in rdr.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            if record.len() < CSV_HEADERS.len() {
                return Err(CatalogError::MissingColumns {
                    line,
                    expected: CSV_HEADERS.len(),
                    found: record.len(),
                });
            }

            let number = |index: usize| -> Result<u32, CatalogError> {
                let value = record[index].trim();
                value.parse().map_err(|_| CatalogError::InvalidNumber {
                    line,
                    column: CSV_HEADERS[index],
                    value: value.to_string(),
                })
            };

            subjects.push(SubjectRecord {
                name: record[0].trim().to_string(),
                total_classes: number(1)?,
                attended_classes: number(2)?,
                max_extra_days: number(3)?,
            });
        }

        Self::new(subjects)
    }

    pub fn subjects(&self) -> &[SubjectRecord] {
        &self.subjects
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.subjects.iter().map(|s| s.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// First subject; the page's initial selection.
    pub fn default_subject(&self) -> &SubjectRecord {
        &self.subjects[0]
    }

    pub fn find(&self, name: &str) -> Result<&SubjectRecord, CatalogError> {
        self.subjects
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| CatalogError::UnknownSubject(name.to_string()))
    }
}
