use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_CATALOG_PATH: &str = "data/modules.json";
/// Regla de negocio de la aplicación: una ruta tiene como mucho 10 semestres.
pub const DEFAULT_MAX_SEMESTERS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub max_semesters: usize,
}

// carga .env si existe
fn load_dotenv() {
    let _ = dotenv::dotenv();
}

impl Config {
    /// Lee `STUDYROUTE_CATALOG` y `STUDYROUTE_MAX_SEMESTERS` (con `.env`).
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Versión parametrizable para tests: no toca el entorno del proceso.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = lookup("STUDYROUTE_CATALOG")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH));

        let max_semesters = match lookup("STUDYROUTE_MAX_SEMESTERS") {
            Some(raw) if !raw.trim().is_empty() => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidNumber { name: "STUDYROUTE_MAX_SEMESTERS", value: raw });
                }
            },
            _ => DEFAULT_MAX_SEMESTERS,
        };

        Ok(Config { catalog_path, max_semesters })
    }
}
