use async_trait::async_trait;

use super::{ErrorMap, Rule, messages, push_error};
use crate::models::Semester;

/// Módulos de la P fase necesarios para considerar la propedéutica completada.
pub const MIN_PROPAEDEUTIC_MODULES: usize = 2;
/// ECs de la P fase necesarios para considerar la propedéutica completada.
pub const MIN_PROPAEDEUTIC_ECS: u32 = 60;

/// "P fase completada" se aproxima como >= 2 módulos propedéuticos y >= 60 ECs
/// obtenidos en ellos. Ambas condiciones se reportan por separado.
pub struct PropaedeuticRule;

#[async_trait]
impl Rule for PropaedeuticRule {
    fn name(&self) -> &'static str {
        "propaedeutic"
    }

    async fn validate(&self, current: &Semester, preceding: &[&Semester], errors: &mut ErrorMap) {
        let Some((module, prerequisite)) = current.module_with_prerequisite() else {
            return;
        };
        if !prerequisite.propaedeutic {
            return;
        }

        let (count, acquired) = preceding
            .iter()
            .filter(|s| s.module.as_ref().is_some_and(|m| m.propaedeutic))
            .fold((0usize, 0u32), |(n, ecs), s| (n + 1, ecs.saturating_add(s.acquired_ecs)));

        if count < MIN_PROPAEDEUTIC_MODULES {
            push_error(
                errors,
                current,
                messages::propaedeutic_modules(&module.name, MIN_PROPAEDEUTIC_MODULES, count),
            );
        }
        if acquired < MIN_PROPAEDEUTIC_ECS {
            push_error(
                errors,
                current,
                messages::propaedeutic_ecs(&module.name, MIN_PROPAEDEUTIC_ECS, acquired),
            );
        }
    }
}
