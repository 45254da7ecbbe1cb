use async_trait::async_trait;

use super::{ErrorMap, Rule, messages, push_error};
use crate::models::Semester;

pub struct SemesterConstraintRule;

#[async_trait]
impl Rule for SemesterConstraintRule {
    fn name(&self) -> &'static str {
        "semester_constraint"
    }

    async fn validate(&self, current: &Semester, _preceding: &[&Semester], errors: &mut ErrorMap) {
        let Some((module, prerequisite)) = current.module_with_prerequisite() else {
            return;
        };
        let Some(expected) = prerequisite.semester_constraint else {
            return;
        };

        let actual = current.parity();
        if actual != expected {
            // el número sale del índice actual, no de la restricción
            push_error(errors, current, messages::semester_constraint(&module.name, actual.number()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ModulePrerequisite, SemesterConstraint};
    use crate::rules::test_support::{module, semester, with_prerequisite};

    fn constrained(c: SemesterConstraint) -> ModulePrerequisite {
        ModulePrerequisite { semester_constraint: Some(c), ..Default::default() }
    }

    #[tokio::test]
    async fn second_semester_module_at_index_zero() {
        let current = semester(0, 0, Some(with_prerequisite(module("bpm", 30, 2, false), constrained(SemesterConstraint::Second))));
        let mut errors = ErrorMap::new();

        SemesterConstraintRule.validate(&current, &[], &mut errors).await;

        assert_eq!(errors["s0"], vec!["BPM kan alleen plaatsvinden in semester 1.".to_string()]);
    }

    #[tokio::test]
    async fn matching_parity_passes() {
        let first = semester(2, 0, Some(with_prerequisite(module("a", 30, 2, false), constrained(SemesterConstraint::First))));
        let second = semester(5, 0, Some(with_prerequisite(module("b", 30, 2, false), constrained(SemesterConstraint::Second))));
        let mut errors = ErrorMap::new();

        SemesterConstraintRule.validate(&first, &[], &mut errors).await;
        SemesterConstraintRule.validate(&second, &[], &mut errors).await;

        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn no_constraint_no_error() {
        let current = semester(1, 0, Some(with_prerequisite(module("a", 30, 2, false), ModulePrerequisite::default())));
        let mut errors = ErrorMap::new();

        SemesterConstraintRule.validate(&current, &[], &mut errors).await;

        assert!(errors.is_empty());
    }
}
