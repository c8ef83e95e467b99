pub mod api;
pub mod catalog;
pub mod chart;
pub mod config;
pub mod error;
pub mod logging;
pub mod page;
pub mod projection;
pub mod shell;

pub use catalog::{Catalog, CatalogError, SubjectRecord};
pub use projection::{compute_projection, ProjectionError, ProjectionRow};
pub use shell::{ProjectionShell, ProjectionView, Selection, ShellError};
