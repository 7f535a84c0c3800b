use crate::{api, health, state::AppState};

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    use api::auth::auth::{login, me, register};
    use api::products::products::{
        create_product, delete_product, get_product, list_products, random_products,
        update_product,
    };
    use api::users::users::update_profile;

    Router::new()
        // Authentication
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
        // Profile
        .route("/users/{id}", put(update_profile))
        // Catalog
        .route("/products", get(list_products).post(create_product))
        .route("/products/random", get(random_products))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
        // CORS middleware (the storefront runs on a different origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
