// Modelo de prerequisitos de un módulo. Solo datos, sin comportamiento: las
// reglas en `crate::rules` son las que interpretan estos campos.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::ModuleId;

/// Paridad del semestre dentro del año de estudio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SemesterConstraint {
    First,
    Second,
}

impl SemesterConstraint {
    /// Índices pares -> primer semestre, impares -> segundo.
    pub fn from_index(index: usize) -> Self {
        if index % 2 == 0 {
            SemesterConstraint::First
        } else {
            SemesterConstraint::Second
        }
    }

    /// Número 1-based usado en los mensajes.
    pub fn number(self) -> u32 {
        match self {
            SemesterConstraint::First => 1,
            SemesterConstraint::Second => 2,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModulePrerequisite {
    /// Requiere la fase propedéutica completada.
    pub propaedeutic: bool,
    pub semester_constraint: Option<SemesterConstraint>,
    /// Años de estudio permitidos; vacío = cualquiera.
    pub year_constraints: BTreeSet<u32>,
    pub available_from_year: Option<u32>,
    pub ec_requirements: Vec<EcRequirement>,
    /// OR de grupos AND.
    pub module_requirement_groups: Vec<ModuleRequirementGroup>,
    /// OR de grupos AND, emparejados por nivel.
    pub module_level_requirement_groups: Vec<ModuleLevelRequirementGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EcRequirement {
    pub required_amount: u32,
    /// Si es `true` solo cuentan los ECs de módulos de la P fase.
    pub propaedeutic: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRequirement {
    pub relevant_module_id: ModuleId,
    /// Sin requisito de ECs basta con haber cursado el módulo.
    #[serde(default)]
    pub ec_requirement: Option<EcRequirement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModuleRequirementGroup {
    pub module_requirements: Vec<ModuleRequirement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleLevelRequirement {
    pub level: u32,
    #[serde(default)]
    pub ec_requirement: Option<EcRequirement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModuleLevelRequirementGroup {
    pub module_level_requirements: Vec<ModuleLevelRequirement>,
}

/// Parsea el blob de texto almacenado junto al módulo. Blob vacío o ilegible
/// -> `None` (la regla simplemente no aplica).
pub fn parse_prerequisite_blob(raw: &str) -> Option<ModulePrerequisite> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return None;
    }
    match serde_json::from_str::<ModulePrerequisite>(trimmed) {
        Ok(p) => Some(p),
        Err(e) => {
            tracing::warn!(error = %e, "prerequisite blob could not be parsed, ignoring it");
            None
        }
    }
}

/// Acepta el campo `prerequisite` como ausente, `null`, string (blob) u objeto.
pub(crate) fn deserialize_blob<'de, D>(deserializer: D) -> Result<Option<ModulePrerequisite>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let parsed = match value {
        None | Some(Value::Null) => None,
        Some(Value::String(raw)) => parse_prerequisite_blob(&raw),
        Some(other) => match serde_json::from_value::<ModulePrerequisite>(other) {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::warn!(error = %e, "inline prerequisite has an unexpected shape, ignoring it");
                None
            }
        },
    };
    Ok(parsed)
}
