//! Binview API Library
//!
//! Warehouse space-utilization backend: an in-memory Area/Zone/Bin store
//! seeded at startup, a read-only query façade over it, and the aggregation
//! logic for the dashboard's derived numbers.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod seed;
pub mod services;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use services::{UserService, WarehouseService};
use store::WarehouseStore;

/// Shared application state threaded through every handler. The store is the
/// single owner of all records; services only read (users excepted).
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<WarehouseStore>,
    pub config: config::AppConfig,
    pub warehouse_service: WarehouseService,
    pub user_service: UserService,
}

impl AppState {
    pub fn new(store: Arc<WarehouseStore>, config: config::AppConfig) -> Self {
        Self {
            warehouse_service: WarehouseService::new(store.clone()),
            user_service: UserService::new(store.clone()),
            store,
            config,
        }
    }
}

/// Routes mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/warehouse", get(handlers::warehouse::get_warehouse))
        .route(
            "/warehouse/critical-bins",
            get(handlers::warehouse::get_critical_bins),
        )
        .route(
            "/warehouse/category-distribution",
            get(handlers::warehouse::get_category_distribution),
        )
        .route("/warehouse/areas/:id", get(handlers::warehouse::get_area))
        .route(
            "/warehouse/areas/:id/zones",
            get(handlers::warehouse::get_zones_by_area),
        )
        .route("/warehouse/zones/:id", get(handlers::warehouse::get_zone))
        .route(
            "/warehouse/zones/:id/bins",
            get(handlers::warehouse::get_bins_by_zone),
        )
        .route("/users", post(handlers::users::create_user))
        .route("/users/:id", get(handlers::users::get_user))
        .route(
            "/users/by-username/:username",
            get(handlers::users::get_user_by_username),
        )
}

/// Full application router: API, health probes, and Swagger UI. Transport
/// layers (CORS, compression, tracing) are applied by the binary.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "binview-api up" }))
        .nest("/api", api_routes())
        .nest("/health", handlers::health::health_routes())
        .merge(openapi::swagger_ui())
        .with_state(state)
}
