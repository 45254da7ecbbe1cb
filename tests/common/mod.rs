#![allow(dead_code)]

use std::path::PathBuf;

use studyroute::models::{ModulePrerequisite, SemesterConstraint};
use studyroute::{Module, ModuleCatalog, RouteDraft, Semester, StudyRoute};

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

pub async fn fixture_catalog() -> ModuleCatalog {
    ModuleCatalog::load(fixture_path("modules.json")).await.expect("Debe cargar el catálogo de fixtures")
}

pub async fn fixture_route(name: &str, catalog: &ModuleCatalog) -> StudyRoute {
    RouteDraft::load(fixture_path(name))
        .await
        .and_then(|d| d.resolve(catalog, 10))
        .unwrap_or_else(|e| panic!("No se pudo cargar la ruta {name}: {e}"))
}

pub fn module(id: &str, name: &str, propaedeutic: bool, prerequisite: Option<ModulePrerequisite>) -> Module {
    Module {
        id: id.to_string(),
        name: name.to_string(),
        ecs: 30,
        level: 1,
        propaedeutic,
        prerequisite,
    }
}

pub fn semester(id: &str, index: usize, acquired_ecs: u32, module: Option<Module>) -> Semester {
    Semester { id: id.to_string(), index, acquired_ecs, module }
}

pub fn requires_propaedeutic() -> ModulePrerequisite {
    ModulePrerequisite { propaedeutic: true, ..Default::default() }
}

pub fn requires_semester(c: SemesterConstraint) -> ModulePrerequisite {
    ModulePrerequisite { semester_constraint: Some(c), ..Default::default() }
}
