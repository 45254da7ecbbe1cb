/// Rutas de 8 semestres conocidas como válidas: con el conjunto completo de
/// reglas no deben producir reporte. Más una ruta desordenada que sí falla,
/// para comprobar el reporte completo sobre datos de catálogo reales.
mod common;

use std::sync::Arc;

use common::{fixture_catalog, fixture_route};
use studyroute::ValidationService;

#[tokio::test]
async fn known_valid_curricula_pass() {
    let catalog = Arc::new(fixture_catalog().await);
    let service = ValidationService::with_default_rules(catalog.clone());

    for fixture in ["software_engineering.json", "business_it_management.json"] {
        let route = fixture_route(fixture, &catalog).await;
        assert_eq!(route.semesters.as_ref().map(Vec::len), Some(8), "{fixture}");

        let report = service.validate_route(Some(&route)).await.unwrap();
        assert!(report.is_none(), "{fixture} debería ser válida, reporte: {report:#?}");
    }
}

#[tokio::test]
async fn business_route_is_sorted_by_index() {
    let catalog = fixture_catalog().await;
    let route = fixture_route("business_it_management.json", &catalog).await;

    let indices: Vec<usize> = route.semesters.unwrap().iter().map(|s| s.index).collect();
    assert_eq!(indices, (0..8).collect::<Vec<_>>());
}

#[tokio::test]
async fn shuffled_route_reports_every_violation() {
    let catalog = Arc::new(fixture_catalog().await);
    let route = fixture_route("shuffled_route.json", &catalog).await;

    let report = ValidationService::with_default_rules(catalog.clone())
        .validate_route(Some(&route))
        .await
        .unwrap()
        .expect("La ruta desordenada debe fallar");

    assert_eq!(report.errors.keys().collect::<Vec<_>>(), ["x-s1", "x-s3", "x-s4"]);

    assert_eq!(
        report.messages_for("x-s1"),
        [
            "Software Engineering vereist een afgeronde propedeuse: minimaal 2 modules uit de P fase, 0 gevonden.",
            "Software Engineering vereist een afgeronde propedeuse: minimaal 60 ec's behaald in de P fase, huidige ec's 0",
            "Software Engineering vereist minimaal 60 behaalde ec's uit de P fase, huidige ec's 0.",
            "Software Engineering vereist minimaal 60 ec's uit de P fase, in de voorgaande semesters zijn maximaal 0 ec's te behalen.",
            "Software Engineering is pas beschikbaar vanaf jaar 2, niet in jaar 1.",
            "Software Engineering voldoet niet aan de modulevereisten. Minimaal één van de volgende groepen moet behaald zijn:\n\
             Groep 1:\n\
             - Object Georiënteerd Programmeren: ontbreekt\n\
             Groep 2:\n\
             - Web Development: ontbreekt",
        ]
    );

    assert_eq!(
        report.messages_for("x-s3"),
        ["Advanced Software Engineering kan alleen plaatsvinden in semester 1."]
    );

    assert_eq!(
        report.messages_for("x-s4"),
        [
            "Minor vereist minimaal 120 behaalde ec's, huidige ec's 70.",
            "Minor vereist minimaal 120 ec's, in de voorgaande semesters zijn maximaal 90 ec's te behalen.",
            "Minor kan alleen plaatsvinden in jaar 3, niet in jaar 2.",
        ]
    );
}
