use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::catalog::{Catalog, CatalogError, SubjectRecord};
use crate::chart::{Bar, BarChart, BAR_COLOR};
use crate::projection::{ProjectionError, ProjectionRow};

/// Range of the "days attended" slider. Fixed page furniture, independent
/// of any subject's `max_extra_days`.
pub const DAYS_ATTENDED_MIN: u32 = 0;
pub const DAYS_ATTENDED_MAX: u32 = 4;
pub const DAYS_ATTENDED_DEFAULT: u32 = 2;

pub const TABLE_HEADER: [&str; 3] = ["Days Attended", "Days Skipped", "Attendance %"];

/// Current values of the page's two input signals.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Selection {
    pub subject: String,
    #[serde(default = "default_days_attended", alias = "days")]
    pub days_attended: u32,
}

fn default_days_attended() -> u32 {
    DAYS_ATTENDED_DEFAULT
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProjectionTable {
    pub header: Vec<String>,
    pub rows: Vec<[String; 3]>,
}

/// Everything one render cycle needs. Chart and table are built from the
/// same `rows`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProjectionView {
    pub subject: SubjectRecord,
    /// Echoed back for the slider; not an input to the projection.
    pub days_attended: u32,
    pub rows: Vec<ProjectionRow>,
    pub chart: BarChart,
    pub table: ProjectionTable,
    pub chart_svg: String,
}

#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error("days_attended={0} is outside the selector range 0..=4")]
    DaysOutOfRange(u32),
}

impl ShellError {
    pub fn kind(&self) -> &'static str {
        match self {
            ShellError::Catalog(CatalogError::UnknownSubject(_)) => "unknown_subject",
            ShellError::Catalog(_) => "catalog",
            ShellError::Projection(ProjectionError::UndefinedProjection { .. }) => {
                "undefined_projection"
            }
            ShellError::DaysOutOfRange(_) => "days_out_of_range",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    kind: &'static str,
}

impl ResponseError for ShellError {
    fn status_code(&self) -> StatusCode {
        match self {
            ShellError::Catalog(CatalogError::UnknownSubject(_)) => StatusCode::NOT_FOUND,
            ShellError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ShellError::Projection(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ShellError::DaysOutOfRange(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
            kind: self.kind(),
        })
    }
}

/// Holds the catalog and answers one selection at a time.
#[derive(Debug, Clone)]
pub struct ProjectionShell {
    catalog: Catalog,
}

impl ProjectionShell {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn initial_selection(&self) -> Selection {
        Selection {
            subject: self.catalog.default_subject().name.clone(),
            days_attended: DAYS_ATTENDED_DEFAULT,
        }
    }

    /// Handler for any change of the input signals. Pure apart from logging.
    pub fn handle(&self, selection: &Selection) -> Result<ProjectionView, ShellError> {
        if !(DAYS_ATTENDED_MIN..=DAYS_ATTENDED_MAX).contains(&selection.days_attended) {
            warn!(days_attended = selection.days_attended, "days selector out of range");
            return Err(ShellError::DaysOutOfRange(selection.days_attended));
        }

        let subject = self.catalog.find(&selection.subject).map_err(|e| {
            // The selector is filled from the catalog, so this is a wiring fault.
            error!(subject = %selection.subject, "selected subject missing from catalog");
            e
        })?;

        let rows = subject.projection().map_err(|e| {
            warn!(subject = %subject.name, error = %e, "projection undefined");
            e
        })?;

        debug!(subject = %subject.name, rows = rows.len(), "projection computed");

        let chart = build_chart(&subject.name, &rows);
        let table = build_table(&rows);
        let chart_svg = chart.to_svg();

        Ok(ProjectionView {
            subject: subject.clone(),
            days_attended: selection.days_attended,
            rows,
            chart,
            table,
            chart_svg,
        })
    }
}

pub fn scenario_label(row: &ProjectionRow) -> String {
    format!("Attend {}, Skip {}", row.day, row.skip)
}

pub fn format_pct(pct: f64) -> String {
    format!("{:.2}%", pct)
}

pub fn build_chart(subject: &str, rows: &[ProjectionRow]) -> BarChart {
    BarChart {
        title: format!("Attendance Projection for {}", subject),
        x_title: "Scenario".to_string(),
        y_title: "Attendance %".to_string(),
        y_range: (0.0, 100.0),
        color: BAR_COLOR.to_string(),
        bars: rows
            .iter()
            .map(|row| Bar {
                label: scenario_label(row),
                value: row.attendance_pct,
            })
            .collect(),
    }
}

pub fn build_table(rows: &[ProjectionRow]) -> ProjectionTable {
    ProjectionTable {
        header: TABLE_HEADER.iter().map(|h| h.to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| {
                [
                    row.day.to_string(),
                    row.skip.to_string(),
                    format_pct(row.attendance_pct),
                ]
            })
            .collect(),
    }
}
