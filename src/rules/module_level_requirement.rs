use std::cmp::Reverse;
use std::collections::HashSet;

use async_trait::async_trait;

use super::{ErrorMap, Rule, messages, push_error};
use crate::models::{Module, ModuleLevelRequirementGroup, Semester};

/// Igual que `ModuleRequirementRule` pero emparejando por nivel del módulo.
/// Dentro de un grupo cada requisito consume un módulo distinto.
pub struct ModuleLevelRequirementRule;

#[derive(Debug, Clone, Copy)]
enum LevelStatus<'a> {
    Found(&'a Module),
    Missing,
    Insufficient { required: u32 },
}

/// Asigna un módulo distinto a cada requisito del grupo. Los requisitos con el
/// umbral de ECs más alto se llenan primero (sus candidatos son un subconjunto
/// de los de umbral menor del mismo nivel). Los estados salen en el orden declarado.
fn evaluate_group<'a>(group: &ModuleLevelRequirementGroup, preceding: &[&'a Semester]) -> Vec<LevelStatus<'a>> {
    let requirements = &group.module_level_requirements;
    let mut order: Vec<usize> = (0..requirements.len()).collect();
    order.sort_by_key(|&i| Reverse(requirements[i].ec_requirement.as_ref().map(|ec| ec.required_amount)));

    let mut used: HashSet<&'a str> = HashSet::new();
    let mut statuses = vec![LevelStatus::Missing; requirements.len()];

    for i in order {
        let requirement = &requirements[i];
        let mut saw_candidate = false;
        let mut matched: Option<&'a Module> = None;

        for &s in preceding {
            let Some(m) = s.module.as_ref() else { continue };
            if m.level != requirement.level || used.contains(m.id.as_str()) {
                continue;
            }
            saw_candidate = true;
            let meets = requirement
                .ec_requirement
                .as_ref()
                .is_none_or(|ec| s.acquired_ecs >= ec.required_amount);
            if meets {
                matched = Some(m);
                break;
            }
        }

        statuses[i] = match (matched, &requirement.ec_requirement) {
            (Some(m), _) => {
                used.insert(m.id.as_str());
                LevelStatus::Found(m)
            }
            (None, Some(ec)) if saw_candidate => LevelStatus::Insufficient { required: ec.required_amount },
            _ => LevelStatus::Missing,
        };
    }
    statuses
}

fn describe(group: &ModuleLevelRequirementGroup, statuses: &[LevelStatus<'_>]) -> Vec<String> {
    group
        .module_level_requirements
        .iter()
        .zip(statuses)
        .map(|(requirement, status)| match status {
            LevelStatus::Found(m) => messages::level_found(requirement.level, &m.name),
            LevelStatus::Missing => messages::level_missing(requirement.level),
            LevelStatus::Insufficient { required } => messages::level_insufficient(requirement.level, *required),
        })
        .collect()
}

#[async_trait]
impl Rule for ModuleLevelRequirementRule {
    fn name(&self) -> &'static str {
        "module_level_requirement"
    }

    async fn validate(&self, current: &Semester, preceding: &[&Semester], errors: &mut ErrorMap) {
        let Some((module, prerequisite)) = current.module_with_prerequisite() else {
            return;
        };
        let groups = &prerequisite.module_level_requirement_groups;
        if groups.is_empty() {
            return;
        }

        let mut failed = Vec::new();
        for (i, group) in groups.iter().enumerate() {
            let statuses = evaluate_group(group, preceding);
            if statuses.iter().all(|s| matches!(s, LevelStatus::Found(_))) {
                tracing::debug!(semester = %current.id, group = i + 1, "level requirement group satisfied");
                return;
            }
            failed.push((i + 1, describe(group, &statuses)));
        }

        push_error(
            errors,
            current,
            messages::aggregated_groups(&module.name, messages::LEVEL_REQUIREMENTS, &failed),
        );
    }
}
