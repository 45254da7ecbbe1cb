use std::path::PathBuf;

/// Violaciones del contrato del motor. Las violaciones de prerequisitos NO son
/// errores: se acumulan en el reporte.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("study route is required")]
    MissingRoute,
}

/// Errores al cargar el catálogo de módulos o un borrador de ruta.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("semester '{semester}' references unknown module '{module_id}'")]
    UnknownModule { semester: String, module_id: String },

    #[error("semester index {0} appears more than once")]
    DuplicateSemesterIndex(usize),

    #[error("route has {count} semesters, at most {max} are allowed")]
    TooManySemesters { count: usize, max: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}
