//! Warehouse read endpoints: the nested area graph, critical bins, and the
//! category distribution chart, plus plain pass-through accessors.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::errors::ServiceError;
use crate::handlers::AppState;
use crate::services::analytics::DEFAULT_CRITICAL_THRESHOLD;

#[derive(Debug, Deserialize, IntoParams)]
pub struct WarehouseQuery {
    /// Area to resolve; defaults to the first-seeded area when absent
    #[serde(rename = "areaId")]
    pub area_id: Option<i32>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CriticalBinsQuery {
    /// Alert threshold in percent; absent or unparseable values fall back
    /// to 75
    pub threshold: Option<String>,
}

impl CriticalBinsQuery {
    /// The original surface silently defaults rather than rejecting, so the
    /// raw string is parsed leniently here. `threshold=0` is honored as 0.
    fn threshold_or_default(&self) -> i32 {
        self.threshold
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(DEFAULT_CRITICAL_THRESHOLD)
    }
}

/// Full nested warehouse graph for one area.
#[utoipa::path(
    get,
    path = "/api/warehouse",
    params(WarehouseQuery),
    responses(
        (status = 200, description = "Nested area with zones and bins", body = crate::models::AreaWithZonesAndBins),
        (status = 404, description = "Area not found", body = crate::errors::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "warehouse"
)]
pub async fn get_warehouse(
    State(state): State<AppState>,
    Query(query): Query<WarehouseQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let data = state.warehouse_service.warehouse_data(query.area_id)?;
    Ok((StatusCode::OK, Json(data)))
}

/// Bins at or above the alert threshold, worst first, capped at five.
#[utoipa::path(
    get,
    path = "/api/warehouse/critical-bins",
    params(CriticalBinsQuery),
    responses(
        (status = 200, description = "Critical bins, descending by utilization", body = [crate::models::Bin]),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "warehouse"
)]
pub async fn get_critical_bins(
    State(state): State<AppState>,
    Query(query): Query<CriticalBinsQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let bins = state
        .warehouse_service
        .critical_bins(query.threshold_or_default());
    Ok((StatusCode::OK, Json(bins)))
}

/// Share of bins per category across the whole warehouse.
#[utoipa::path(
    get,
    path = "/api/warehouse/category-distribution",
    responses(
        (status = 200, description = "Category shares, descending by percentage", body = [crate::models::CategoryDistribution]),
        (status = 500, description = "Internal server error", body = crate::errors::ErrorResponse)
    ),
    tag = "warehouse"
)]
pub async fn get_category_distribution(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let distribution = state.warehouse_service.category_distribution();
    Ok((StatusCode::OK, Json(distribution)))
}

/// Single area by id.
#[utoipa::path(
    get,
    path = "/api/warehouse/areas/{id}",
    params(("id" = i32, Path, description = "Area id")),
    responses(
        (status = 200, description = "Area returned", body = crate::models::Area),
        (status = 404, description = "Area not found", body = crate::errors::ErrorResponse)
    ),
    tag = "warehouse"
)]
pub async fn get_area(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let area = state.warehouse_service.area(id)?;
    Ok((StatusCode::OK, Json(area)))
}

/// Single zone by id.
#[utoipa::path(
    get,
    path = "/api/warehouse/zones/{id}",
    params(("id" = i32, Path, description = "Zone id")),
    responses(
        (status = 200, description = "Zone returned", body = crate::models::Zone),
        (status = 404, description = "Zone not found", body = crate::errors::ErrorResponse)
    ),
    tag = "warehouse"
)]
pub async fn get_zone(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let zone = state.warehouse_service.zone(id)?;
    Ok((StatusCode::OK, Json(zone)))
}

/// Zones owned by an area, in insertion order. Empty list when the area
/// exists but has no zones; 404 when the area itself is missing.
#[utoipa::path(
    get,
    path = "/api/warehouse/areas/{id}/zones",
    params(("id" = i32, Path, description = "Area id")),
    responses(
        (status = 200, description = "Zones for the area", body = [crate::models::Zone]),
        (status = 404, description = "Area not found", body = crate::errors::ErrorResponse)
    ),
    tag = "warehouse"
)]
pub async fn get_zones_by_area(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let zones = state.warehouse_service.zones_by_area(id)?;
    Ok((StatusCode::OK, Json(zones)))
}

/// Bins owned by a zone, in insertion order.
#[utoipa::path(
    get,
    path = "/api/warehouse/zones/{id}/bins",
    params(("id" = i32, Path, description = "Zone id")),
    responses(
        (status = 200, description = "Bins for the zone", body = [crate::models::Bin]),
        (status = 404, description = "Zone not found", body = crate::errors::ErrorResponse)
    ),
    tag = "warehouse"
)]
pub async fn get_bins_by_zone(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let bins = state.warehouse_service.bins_by_zone(id)?;
    Ok((StatusCode::OK, Json(bins)))
}
