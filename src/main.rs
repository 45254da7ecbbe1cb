// --- Validador de rutas de estudio - Archivo principal ---
//
// Uso: studyroute <route.json>
// El catálogo se toma de STUDYROUTE_CATALOG (o .env); ver `config`.

use std::process::ExitCode;
use std::sync::Arc;

use studyroute::config::Config;
use studyroute::{ModuleCatalog, RouteDraft, ValidationService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studyroute=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(route_path) = std::env::args().nth(1) else {
        tracing::error!("usage: studyroute <route.json>");
        return ExitCode::from(2);
    };

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("invalid configuration: {e}");
            return ExitCode::from(2);
        }
    };

    let catalog = match ModuleCatalog::load(&config.catalog_path).await {
        Ok(c) => Arc::new(c),
        Err(e) => {
            tracing::error!("failed to load catalog: {e}");
            return ExitCode::from(2);
        }
    };

    let route = match RouteDraft::load(&route_path)
        .await
        .and_then(|draft| draft.resolve(&catalog, config.max_semesters))
    {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("failed to load route '{route_path}': {e}");
            return ExitCode::from(2);
        }
    };

    let service = ValidationService::with_default_rules(catalog);
    match service.validate_route(Some(&route)).await {
        Ok(None) => {
            println!("Studieroute is geldig.");
            ExitCode::SUCCESS
        }
        Ok(Some(report)) => match serde_json::to_string_pretty(&report) {
            Ok(text) => {
                println!("{text}");
                ExitCode::from(1)
            }
            Err(e) => {
                tracing::error!("failed to serialize report: {e}");
                ExitCode::from(2)
            }
        },
        Err(e) => {
            tracing::error!("validation failed: {e}");
            ExitCode::from(2)
        }
    }
}
