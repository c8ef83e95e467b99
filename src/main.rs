use actix_web::{web, App, HttpServer};
use tracing::info;

use attendance_calculator::api;
use attendance_calculator::config::AppConfig;
use attendance_calculator::error::AppError;
use attendance_calculator::logging;
use attendance_calculator::{Catalog, ProjectionShell};

fn load_catalog(config: &AppConfig) -> Result<Catalog, AppError> {
    match &config.catalog_path {
        Some(path) => {
            info!(path = %path.display(), "loading catalog from csv");
            Ok(Catalog::from_csv_path(path)?)
        }
        None => Ok(Catalog::builtin()),
    }
}

async fn start_server(config: &AppConfig, shell: ProjectionShell) -> Result<(), AppError> {
    let shell_data = web::Data::new(shell);

    HttpServer::new(move || {
        App::new()
            .app_data(shell_data.clone())
            .configure(api::configure)
    })
    .bind(config.bind_addr())?
    .run()
    .await?;

    Ok(())
}

#[actix_web::main]
async fn main() -> Result<(), AppError> {
    logging::init();

    let config = AppConfig::from_env()?;
    let catalog = load_catalog(&config)?;
    info!(subjects = catalog.len(), "catalog ready");

    let shell = ProjectionShell::new(catalog);

    info!(
        "starting Attendance Calculator on http://{}:{}",
        config.host, config.port
    );
    start_server(&config, shell).await
}
