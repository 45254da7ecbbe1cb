//! Reglas de prerequisitos.
//!
//! Cada regla valida un semestre contra los semestres que lo preceden en la
//! ruta y agrega sus mensajes al mapa de errores compartido. Ninguna regla
//! corta la pasada: los errores son aditivos.

mod ec_requirement;
mod messages;
mod module_level_requirement;
mod module_requirement;
mod propaedeutic;
mod semester_constraint;
mod year_requirement;

pub use ec_requirement::EcRequirementRule;
pub use module_level_requirement::ModuleLevelRequirementRule;
pub use module_requirement::ModuleRequirementRule;
pub use propaedeutic::{MIN_PROPAEDEUTIC_ECS, MIN_PROPAEDEUTIC_MODULES, PropaedeuticRule};
pub use semester_constraint::SemesterConstraintRule;
pub use year_requirement::YearRequirementRule;

use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;

use crate::models::Semester;
use crate::resolver::ModuleResolver;

/// id de semestre -> mensajes, en orden de inserción.
pub type ErrorMap = IndexMap<String, Vec<String>>;

#[async_trait]
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;

    /// `preceding` contiene solo semestres estrictamente anteriores a `current`.
    async fn validate(&self, current: &Semester, preceding: &[&Semester], errors: &mut ErrorMap);
}

/// Conjunto completo de reglas, en el orden en que se evalúan.
pub fn default_rules(resolver: Arc<dyn ModuleResolver>) -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(PropaedeuticRule),
        Box::new(SemesterConstraintRule),
        Box::new(EcRequirementRule),
        Box::new(YearRequirementRule),
        Box::new(ModuleRequirementRule::new(resolver)),
        Box::new(ModuleLevelRequirementRule),
    ]
}

pub(crate) fn push_error(errors: &mut ErrorMap, semester: &Semester, message: String) {
    errors.entry(semester.id.clone()).or_default().push(message);
}
