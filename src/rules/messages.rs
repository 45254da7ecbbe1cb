// Textos de los errores. El wording es fijo: la aplicación y los tests
// comparan los strings literalmente.

use std::collections::BTreeSet;

use crate::models::EcRequirement;

pub fn propaedeutic_modules(module: &str, required: usize, found: usize) -> String {
    format!("{module} vereist een afgeronde propedeuse: minimaal {required} modules uit de P fase, {found} gevonden.")
}

pub fn propaedeutic_ecs(module: &str, required: u32, current: u32) -> String {
    format!("{module} vereist een afgeronde propedeuse: minimaal {required} ec's behaald in de P fase, huidige ec's {current}")
}

pub fn semester_constraint(module: &str, semester_number: u32) -> String {
    format!("{module} kan alleen plaatsvinden in semester {semester_number}.")
}

fn ec_scope(requirement: &EcRequirement) -> &'static str {
    if requirement.propaedeutic { " uit de P fase" } else { "" }
}

pub fn ec_insufficient(module: &str, requirement: &EcRequirement, current: u32) -> String {
    format!(
        "{module} vereist minimaal {} behaalde ec's{}, huidige ec's {current}.",
        requirement.required_amount,
        ec_scope(requirement)
    )
}

pub fn ec_unreachable(module: &str, requirement: &EcRequirement, possible: u32) -> String {
    format!(
        "{module} vereist minimaal {} ec's{}, in de voorgaande semesters zijn maximaal {possible} ec's te behalen.",
        requirement.required_amount,
        ec_scope(requirement)
    )
}

pub fn year_not_allowed(module: &str, allowed: &BTreeSet<u32>, year: u32) -> String {
    let years = allowed.iter().map(|y| y.to_string()).collect::<Vec<_>>().join(", ");
    format!("{module} kan alleen plaatsvinden in jaar {years}, niet in jaar {year}.")
}

pub fn year_not_yet_available(module: &str, from_year: u32, year: u32) -> String {
    format!("{module} is pas beschikbaar vanaf jaar {from_year}, niet in jaar {year}.")
}

/// Cabecera común de los mensajes agregados por grupo.
fn groups_header(module: &str, kind: &str) -> String {
    format!("{module} voldoet niet aan de {kind}. Minimaal één van de volgende groepen moet behaald zijn:")
}

/// Une cabecera, "Groep n:" y las líneas de estado de cada grupo fallido.
/// `groups` lleva el número 1-based del grupo según su declaración.
pub fn aggregated_groups(module: &str, kind: &str, groups: &[(usize, Vec<String>)]) -> String {
    let mut lines = vec![groups_header(module, kind)];
    for (number, status_lines) in groups {
        lines.push(format!("Groep {number}:"));
        lines.extend(status_lines.iter().map(|l| format!("- {l}")));
    }
    lines.join("\n")
}

pub const MODULE_REQUIREMENTS: &str = "modulevereisten";
pub const LEVEL_REQUIREMENTS: &str = "niveauvereisten";

pub fn requirement_found(name: &str) -> String {
    format!("{name}: gevonden")
}

pub fn requirement_missing(name: &str) -> String {
    format!("{name}: ontbreekt")
}

pub fn requirement_insufficient(name: &str, acquired: u32, required: u32) -> String {
    format!("{name}: onvoldoende ec's behaald ({acquired} van {required})")
}

pub fn level_found(level: u32, module: &str) -> String {
    format!("Niveau {level}: gevonden ({module})")
}

pub fn level_missing(level: u32) -> String {
    format!("Niveau {level}: ontbreekt")
}

pub fn level_insufficient(level: u32, required: u32) -> String {
    format!("Niveau {level}: onvoldoende ec's behaald (minimaal {required})")
}

/// Nombre de reserva cuando el resolver no conoce el módulo.
pub fn unknown_module(module_id: &str) -> String {
    format!("Onbekende module ({module_id})")
}
