//! Optional remote catalog source, speaking the backend's JSON routes.

use tracing::info;

use super::{Catalog, CatalogError};

/// Fetch both collections from a running backend, e.g.
/// `http://localhost:8000`. Routes match the original API surface.
pub async fn fetch(base_url: &str) -> Result<Catalog, CatalogError> {
    let base = base_url.trim_end_matches('/');
    let client = reqwest::Client::new();

    let scenarios = client
        .get(format!("{base}/api/scenarios"))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    let signals = client
        .get(format!("{base}/api/signals"))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let catalog = Catalog { scenarios, signals };
    info!(
        scenarios = catalog.scenarios.len(),
        signals = catalog.signals.len(),
        "catalog fetched from {base}"
    );
    Ok(catalog)
}
