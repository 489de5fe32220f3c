//! Catalog API - REST server over the in-memory product catalog

use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::{InMemoryProductRepository, ProductService, demo_catalog};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // Composition root: the repository is constructed here and injected into
    // the service; no ambient state anywhere else.
    let repository = InMemoryProductRepository::new(demo_catalog());
    let service = ProductService::new(repository);

    let api_routes = api::routes(service);
    let router = create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router.merge(health_router(config.app));

    info!("Starting Catalog API on {}", config.server.address());
    create_app(app, &config.server).await?;

    info!("Catalog API shutdown complete");
    Ok(())
}
