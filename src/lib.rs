// Biblioteca raíz del crate `studyroute`.
// Motor de validación de prerequisitos para rutas de estudio: recibe una
// `StudyRoute` (semestres ordenados con sus módulos resueltos) y devuelve un
// reporte con los errores por semestre, o nada si la ruta es válida.
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod resolver;
pub mod rules;
pub mod service;

pub use catalog::{ModuleCatalog, RouteDraft};
pub use error::{CatalogError, ConfigError, ValidationError};
pub use models::{Module, Semester, StudyRoute};
pub use resolver::{ModuleResolver, ResolverFn};
pub use service::{ValidationReport, ValidationService};
