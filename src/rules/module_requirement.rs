use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::join_all;

use super::{ErrorMap, Rule, messages, push_error};
use crate::models::{ModuleRequirement, ModuleRequirementGroup, Semester};
use crate::resolver::ModuleResolver;

/// Módulos previos requeridos: OR de grupos, cada grupo un AND de requisitos.
///
/// Los grupos se evalúan en orden de declaración y el primero que pasa corta la
/// búsqueda. Si ninguno pasa se emite UN mensaje con todas las líneas de estado,
/// resolviendo los nombres con el resolver inyectado (los requisitos solo
/// guardan el id).
pub struct ModuleRequirementRule {
    resolver: Arc<dyn ModuleResolver>,
}

impl ModuleRequirementRule {
    pub fn new(resolver: Arc<dyn ModuleResolver>) -> Self {
        ModuleRequirementRule { resolver }
    }

    async fn describe_failures(&self, module_name: &str, failed: &[FailedGroup<'_>]) -> String {
        let lookups = failed
            .iter()
            .flat_map(|f| f.group.module_requirements.iter())
            .map(|r| self.resolver.resolve(&r.relevant_module_id));
        let mut resolved = join_all(lookups).await.into_iter();

        let mut groups = Vec::with_capacity(failed.len());
        for f in failed {
            let mut lines = Vec::with_capacity(f.statuses.len());
            for (requirement, status) in f.group.module_requirements.iter().zip(&f.statuses) {
                let name = match resolved.next().flatten() {
                    Some(m) => m.name,
                    None => messages::unknown_module(&requirement.relevant_module_id),
                };
                lines.push(status.describe(&name));
            }
            groups.push((f.number, lines));
        }
        messages::aggregated_groups(module_name, messages::MODULE_REQUIREMENTS, &groups)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequirementStatus {
    Found,
    Missing,
    Insufficient { acquired: u32, required: u32 },
}

impl RequirementStatus {
    fn describe(self, name: &str) -> String {
        match self {
            RequirementStatus::Found => messages::requirement_found(name),
            RequirementStatus::Missing => messages::requirement_missing(name),
            RequirementStatus::Insufficient { acquired, required } => {
                messages::requirement_insufficient(name, acquired, required)
            }
        }
    }
}

struct FailedGroup<'a> {
    number: usize,
    group: &'a ModuleRequirementGroup,
    statuses: Vec<RequirementStatus>,
}

/// Si el módulo aparece varias veces (repetición), basta con que un semestre
/// alcance el umbral; si ninguno lo hace se informa el mejor resultado.
fn check_requirement(requirement: &ModuleRequirement, preceding: &[&Semester]) -> RequirementStatus {
    let mut best: Option<u32> = None;
    for s in preceding.iter().filter(|s| s.has_module(&requirement.relevant_module_id)) {
        match &requirement.ec_requirement {
            None => return RequirementStatus::Found,
            Some(ec) if s.acquired_ecs >= ec.required_amount => return RequirementStatus::Found,
            Some(_) => best = Some(best.map_or(s.acquired_ecs, |b| b.max(s.acquired_ecs))),
        }
    }
    match (best, &requirement.ec_requirement) {
        (Some(acquired), Some(ec)) => RequirementStatus::Insufficient { acquired, required: ec.required_amount },
        _ => RequirementStatus::Missing,
    }
}

#[async_trait]
impl Rule for ModuleRequirementRule {
    fn name(&self) -> &'static str {
        "module_requirement"
    }

    async fn validate(&self, current: &Semester, preceding: &[&Semester], errors: &mut ErrorMap) {
        let Some((module, prerequisite)) = current.module_with_prerequisite() else {
            return;
        };
        let groups = &prerequisite.module_requirement_groups;
        if groups.is_empty() {
            return;
        }

        let mut failed = Vec::new();
        for (i, group) in groups.iter().enumerate() {
            let statuses: Vec<RequirementStatus> = group
                .module_requirements
                .iter()
                .map(|r| check_requirement(r, preceding))
                .collect();
            if statuses.iter().all(|s| *s == RequirementStatus::Found) {
                tracing::debug!(semester = %current.id, group = i + 1, "module requirement group satisfied");
                return;
            }
            failed.push(FailedGroup { number: i + 1, group, statuses });
        }

        let message = self.describe_failures(&module.name, &failed).await;
        push_error(errors, current, message);
    }
}
