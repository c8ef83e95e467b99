use actix_web::{web, HttpResponse};
use serde::Deserialize;
use std::error::Error;
use tracing::error;

use crate::page::render_homepage;
use crate::shell::{build_table, ProjectionShell, ProjectionTable, Selection, ShellError};

#[derive(Deserialize)]
pub struct ExportQuery {
    pub subject: String,
}

/// Registers every route on an `App` or `test::init_service` builder.
/// Expects a `web::Data<ProjectionShell>` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(serve_homepage))
        .route("/api/subjects", web::get().to(list_subjects))
        .route("/api/projection", web::get().to(get_projection))
        .route("/api/projection.csv", web::get().to(export_projection_csv))
        .route("/health", web::get().to(health_check));
}

async fn serve_homepage(shell: web::Data<ProjectionShell>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_homepage(shell.catalog()))
}

async fn list_subjects(shell: web::Data<ProjectionShell>) -> HttpResponse {
    HttpResponse::Ok().json(shell.catalog().subjects())
}

async fn get_projection(
    shell: web::Data<ProjectionShell>,
    selection: web::Query<Selection>,
) -> Result<HttpResponse, ShellError> {
    let view = shell.handle(&selection)?;
    Ok(HttpResponse::Ok().json(view))
}

async fn export_projection_csv(
    shell: web::Data<ProjectionShell>,
    query: web::Query<ExportQuery>,
) -> Result<HttpResponse, ShellError> {
    let subject = shell.catalog().find(&query.subject)?;
    let rows = subject.projection()?;
    let table = build_table(&rows);

    match table_to_csv(&table) {
        Ok(bytes) => Ok(HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"{}-projection.csv\"", file_stem(&subject.name)),
            ))
            .body(bytes)),
        Err(e) => {
            error!(subject = %subject.name, error = %e, "csv export failed");
            Ok(HttpResponse::InternalServerError().body("failed to export projection"))
        }
    }
}

fn table_to_csv(table: &ProjectionTable) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(&table.header)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(bytes)
}

fn file_stem(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().body("Attendance Calculator is running!")
}
