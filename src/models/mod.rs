// Estructuras de datos principales de la ruta de estudio

mod prerequisite;

pub use prerequisite::{
    EcRequirement, ModuleLevelRequirement, ModuleLevelRequirementGroup, ModulePrerequisite,
    ModuleRequirement, ModuleRequirementGroup, SemesterConstraint, parse_prerequisite_blob,
};

use serde::{Deserialize, Serialize};

pub type ModuleId = String;

/// Módulo del catálogo. `prerequisite` llega ya parseado desde el blob
/// almacenado; `None` significa "sin restricciones".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: ModuleId,
    pub name: String,
    /// ECs nominales del módulo (techo de lo que se puede obtener en el semestre).
    #[serde(default)]
    pub ecs: u32,
    #[serde(default)]
    pub level: u32,
    /// El módulo pertenece a la fase propedéutica (P fase).
    #[serde(default)]
    pub propaedeutic: bool,
    #[serde(default, deserialize_with = "prerequisite::deserialize_blob")]
    pub prerequisite: Option<ModulePrerequisite>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Semester {
    pub id: String,
    /// Posición 0-based dentro de la ruta.
    pub index: usize,
    #[serde(default)]
    pub acquired_ecs: u32,
    /// `None` para semestres libres/no planificados.
    #[serde(default)]
    pub module: Option<Module>,
}

impl Semester {
    /// Año de estudio (1-based): dos semestres por año.
    pub fn study_year(&self) -> u32 {
        u32::try_from(self.index / 2 + 1).unwrap_or(u32::MAX)
    }

    pub fn parity(&self) -> SemesterConstraint {
        SemesterConstraint::from_index(self.index)
    }

    /// Módulo y prerequisito parseado, si ambos existen. Las reglas usan esto
    /// como guardia: sin módulo o sin prerequisito no hay nada que validar.
    pub fn module_with_prerequisite(&self) -> Option<(&Module, &ModulePrerequisite)> {
        let module = self.module.as_ref()?;
        let prerequisite = module.prerequisite.as_ref()?;
        Some((module, prerequisite))
    }

    pub fn has_module(&self, module_id: &str) -> bool {
        self.module.as_ref().is_some_and(|m| m.id == module_id)
    }
}

/// Ruta de estudio: semestres ordenados por `index` (el orden lo garantiza el
/// llamador). La lista puede faltar si la ruta aún está incompleta.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyRoute {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub semesters: Option<Vec<Semester>>,
}

impl StudyRoute {
    pub fn new(semesters: Vec<Semester>) -> Self {
        StudyRoute { id: None, semesters: Some(semesters) }
    }
}
