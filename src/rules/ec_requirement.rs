use async_trait::async_trait;

use super::{ErrorMap, Rule, messages, push_error};
use crate::models::{EcRequirement, Semester};

/// Umbrales de ECs acumulados en los semestres previos.
///
/// Se reportan dos cosas independientes por requisito: que los ECs obtenidos no
/// alcanzan, y que ni siquiera los ECs nominales de los módulos previos alcanzan
/// (el requisito es inalcanzable con esta ruta, no solo "aún no cumplido").
pub struct EcRequirementRule;

/// (obtenidos, posibles) sobre los semestres que cuentan para el requisito.
fn sum_ecs(requirement: &EcRequirement, preceding: &[&Semester]) -> (u32, u32) {
    preceding
        .iter()
        .filter_map(|s| s.module.as_ref().map(|m| (s, m)))
        .filter(|(_, m)| !requirement.propaedeutic || m.propaedeutic)
        .fold((0u32, 0u32), |(acquired, possible), (s, m)| {
            (acquired.saturating_add(s.acquired_ecs), possible.saturating_add(m.ecs))
        })
}

#[async_trait]
impl Rule for EcRequirementRule {
    fn name(&self) -> &'static str {
        "ec_requirement"
    }

    async fn validate(&self, current: &Semester, preceding: &[&Semester], errors: &mut ErrorMap) {
        let Some((module, prerequisite)) = current.module_with_prerequisite() else {
            return;
        };

        for requirement in &prerequisite.ec_requirements {
            let (acquired, possible) = sum_ecs(requirement, preceding);
            if acquired < requirement.required_amount {
                push_error(errors, current, messages::ec_insufficient(&module.name, requirement, acquired));
            }
            if possible < requirement.required_amount {
                push_error(errors, current, messages::ec_unreachable(&module.name, requirement, possible));
            }
        }
    }
}
