//! Orquestador: una sola pasada hacia adelante sobre los semestres de la ruta.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::models::{Semester, StudyRoute};
use crate::resolver::ModuleResolver;
use crate::rules::{ErrorMap, Rule, default_rules};

pub const REPORT_TITLE: &str = "One or more validation errors occurred.";
pub const REPORT_STATUS: u16 = 400;
pub const REPORT_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.5.1";

/// Reporte de validación. `errors` conserva el orden en que se procesaron
/// los semestres y, dentro de cada uno, el orden de las reglas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub title: String,
    pub status: u16,
    #[serde(rename = "type")]
    pub kind: String,
    pub errors: ErrorMap,
}

impl ValidationReport {
    fn from_errors(errors: ErrorMap) -> Self {
        ValidationReport {
            title: REPORT_TITLE.to_string(),
            status: REPORT_STATUS,
            kind: REPORT_TYPE.to_string(),
            errors,
        }
    }

    pub fn messages_for(&self, semester_id: &str) -> &[String] {
        self.errors.get(semester_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn message_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }
}

pub struct ValidationService {
    rules: Vec<Box<dyn Rule>>,
}

impl ValidationService {
    /// Conjunto de reglas inyectado (p. ej. una sola regla para tests aislados).
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        ValidationService { rules }
    }

    pub fn with_default_rules(resolver: Arc<dyn ModuleResolver>) -> Self {
        ValidationService::new(default_rules(resolver))
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Valida la ruta completa.
    ///
    /// - `None` -> `ValidationError::MissingRoute`.
    /// - sin semestres -> `Ok(None)`: una ruta incompleta todavía no es validable.
    /// - `Ok(Some(report))` si alguna regla falló, `Ok(None)` si todo pasa.
    pub async fn validate_route(
        &self,
        route: Option<&StudyRoute>,
    ) -> Result<Option<ValidationReport>, ValidationError> {
        let route = route.ok_or(ValidationError::MissingRoute)?;
        let semesters = match route.semesters.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => {
                tracing::debug!(route = ?route.id, "route has no semesters, nothing to validate");
                return Ok(None);
            }
        };

        let mut preceding: Vec<&Semester> = Vec::with_capacity(semesters.len());
        let mut errors = ErrorMap::new();

        for semester in semesters {
            for rule in &self.rules {
                rule.validate(semester, &preceding, &mut errors).await;
            }
            tracing::debug!(
                semester = %semester.id,
                index = semester.index,
                errors = errors.get(&semester.id).map_or(0, Vec::len),
                "semester validated"
            );
            // solo después de todas las reglas: un semestre nunca se valida contra sí mismo
            preceding.push(semester);
        }

        if errors.is_empty() {
            tracing::info!(route = ?route.id, semesters = semesters.len(), "study route is valid");
            return Ok(None);
        }

        let report = ValidationReport::from_errors(errors);
        tracing::info!(
            route = ?route.id,
            semesters = semesters.len(),
            failing_semesters = report.errors.len(),
            messages = report.message_count(),
            "study route has validation errors"
        );
        Ok(Some(report))
    }
}
