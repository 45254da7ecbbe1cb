use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ModuleCatalog;
use crate::error::CatalogError;
use crate::models::{ModuleId, Semester, StudyRoute};

/// Ruta tal como la guarda la aplicación: semestres con el id del módulo en
/// vez del módulo resuelto.
///
/// ```json
/// {
///   "id": "route-42",
///   "semesters": [
///     { "id": "s1", "index": 0, "acquiredEcs": 30, "moduleId": "oop" },
///     { "id": "s2", "index": 1, "acquiredEcs": 0, "moduleId": null }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDraft {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub semesters: Option<Vec<SemesterDraft>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterDraft {
    pub id: String,
    pub index: usize,
    #[serde(default)]
    pub acquired_ecs: u32,
    #[serde(default)]
    pub module_id: Option<ModuleId>,
}

impl RouteDraft {
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
        RouteDraft::from_json_str(&contents)
    }

    /// Resuelve los módulos contra el catálogo y ordena por `index`.
    /// Una lista de semestres ausente sigue ausente (la ruta no es validable aún).
    pub fn resolve(self, catalog: &ModuleCatalog, max_semesters: usize) -> Result<StudyRoute, CatalogError> {
        let Some(mut drafts) = self.semesters else {
            return Ok(StudyRoute { id: self.id, semesters: None });
        };

        if drafts.len() > max_semesters {
            return Err(CatalogError::TooManySemesters { count: drafts.len(), max: max_semesters });
        }

        let mut seen = HashSet::new();
        for d in &drafts {
            if !seen.insert(d.index) {
                return Err(CatalogError::DuplicateSemesterIndex(d.index));
            }
        }
        drafts.sort_by_key(|d| d.index);

        let mut semesters = Vec::with_capacity(drafts.len());
        for d in drafts {
            let module = match d.module_id.as_deref().map(str::trim).filter(|id| !id.is_empty()) {
                Some(id) => Some(catalog.get(id).cloned().ok_or_else(|| CatalogError::UnknownModule {
                    semester: d.id.clone(),
                    module_id: id.to_string(),
                })?),
                None => None,
            };
            semesters.push(Semester { id: d.id, index: d.index, acquired_ecs: d.acquired_ecs, module });
        }

        Ok(StudyRoute { id: self.id, semesters: Some(semesters) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Module;

    fn catalog() -> ModuleCatalog {
        ModuleCatalog::from_modules(vec![Module {
            id: "oop".to_string(),
            name: "OOP".to_string(),
            ecs: 30,
            level: 1,
            propaedeutic: true,
            prerequisite: None,
        }])
    }

    #[test]
    fn resolve_sorts_by_index() {
        let draft = RouteDraft::from_json_str(
            r#"{ "semesters": [
                { "id": "b", "index": 1 },
                { "id": "a", "index": 0, "acquiredEcs": 30, "moduleId": "oop" }
            ] }"#,
        )
        .unwrap();

        let route = draft.resolve(&catalog(), 10).unwrap();
        let semesters = route.semesters.unwrap();
        assert_eq!(semesters[0].id, "a");
        assert_eq!(semesters[0].module.as_ref().map(|m| m.name.as_str()), Some("OOP"));
        assert!(semesters[1].module.is_none());
    }

    #[test]
    fn blank_module_id_is_a_free_semester() {
        let draft = RouteDraft::from_json_str(r#"{ "semesters": [{ "id": "a", "index": 0, "moduleId": "  " }] }"#).unwrap();
        let route = draft.resolve(&catalog(), 10).unwrap();
        assert!(route.semesters.unwrap()[0].module.is_none());
    }

    #[test]
    fn unknown_module_is_rejected() {
        let draft = RouteDraft::from_json_str(r#"{ "semesters": [{ "id": "a", "index": 0, "moduleId": "nope" }] }"#).unwrap();
        let err = draft.resolve(&catalog(), 10).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownModule { ref module_id, .. } if module_id == "nope"));
    }

    #[test]
    fn duplicate_index_is_rejected() {
        let draft = RouteDraft::from_json_str(
            r#"{ "semesters": [{ "id": "a", "index": 0 }, { "id": "b", "index": 0 }] }"#,
        )
        .unwrap();
        assert!(matches!(draft.resolve(&catalog(), 10), Err(CatalogError::DuplicateSemesterIndex(0))));
    }

    #[test]
    fn too_many_semesters_is_rejected() {
        let semesters: Vec<SemesterDraft> = (0..3)
            .map(|i| SemesterDraft { id: format!("s{i}"), index: i, acquired_ecs: 0, module_id: None })
            .collect();
        let draft = RouteDraft { id: None, semesters: Some(semesters) };
        assert!(matches!(
            draft.resolve(&catalog(), 2),
            Err(CatalogError::TooManySemesters { count: 3, max: 2 })
        ));
    }

    #[test]
    fn missing_semesters_stay_missing() {
        let route = RouteDraft::from_json_str(r#"{ "id": "r1" }"#).unwrap().resolve(&catalog(), 10).unwrap();
        assert_eq!(route.id.as_deref(), Some("r1"));
        assert!(route.semesters.is_none());
    }
}
