use async_trait::async_trait;

use super::{ErrorMap, Rule, messages, push_error};
use crate::models::Semester;

pub struct YearRequirementRule;

#[async_trait]
impl Rule for YearRequirementRule {
    fn name(&self) -> &'static str {
        "year_requirement"
    }

    async fn validate(&self, current: &Semester, _preceding: &[&Semester], errors: &mut ErrorMap) {
        let Some((module, prerequisite)) = current.module_with_prerequisite() else {
            return;
        };
        let year = current.study_year();

        if !prerequisite.year_constraints.is_empty() && !prerequisite.year_constraints.contains(&year) {
            push_error(
                errors,
                current,
                messages::year_not_allowed(&module.name, &prerequisite.year_constraints, year),
            );
        }
        if let Some(from_year) = prerequisite.available_from_year.filter(|y| *y > 0) {
            if year < from_year {
                push_error(errors, current, messages::year_not_yet_available(&module.name, from_year, year));
            }
        }
    }
}
