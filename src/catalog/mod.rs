//! Catálogo de módulos y carga de borradores de ruta desde JSON.
//!
//! Submódulos:
//! - `route`: borradores de ruta (semestres que referencian módulos por id)

mod route;

pub use route::{RouteDraft, SemesterDraft};

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;

use crate::error::CatalogError;
use crate::models::{Module, ModuleId};
use crate::resolver::ModuleResolver;

/// Módulos indexados por id. También sirve como resolver de nombres.
#[derive(Debug, Clone, Default)]
pub struct ModuleCatalog {
    modules: HashMap<ModuleId, Module>,
}

impl ModuleCatalog {
    /// Si un id se repite gana la última definición.
    pub fn from_modules<I: IntoIterator<Item = Module>>(modules: I) -> Self {
        let mut map = HashMap::new();
        for module in modules {
            if let Some(previous) = map.insert(module.id.clone(), module) {
                tracing::warn!(module = %previous.id, "duplicate module id in catalog, keeping the last one");
            }
        }
        ModuleCatalog { modules: map }
    }

    /// Espera un array JSON de módulos.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let modules: Vec<Module> = serde_json::from_str(json)?;
        Ok(ModuleCatalog::from_modules(modules))
    }

    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
        let catalog = ModuleCatalog::from_json_str(&contents)?;
        tracing::info!(path = %path.display(), modules = catalog.len(), "module catalog loaded");
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&Module> {
        self.modules.get(id)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[async_trait]
impl ModuleResolver for ModuleCatalog {
    async fn resolve(&self, module_id: &str) -> Option<Module> {
        self.get(module_id).cloned()
    }
}
