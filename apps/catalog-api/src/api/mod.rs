//! API routes module

use axum::Router;
use domain_products::{ProductRepository, ProductService, handlers};

/// Create all API routes
pub fn routes<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    Router::new().nest("/products", handlers::router(service))
}
