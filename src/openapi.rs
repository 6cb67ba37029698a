use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Binview API",
        version = "0.1.0",
        description = r#"
# Warehouse Space-Utilization API

Read-only backend for a warehouse occupancy dashboard. Serves the nested
Area -> Zone -> Bin graph plus small derived aggregates (critical bins above
an alert threshold, category share of all bins).

All data lives in an in-memory store seeded at startup; there is no
persistence and no authentication. The user endpoints exist only for
interface compatibility with the original client.
"#,
        contact(name = "Binview")
    ),
    paths(
        // Warehouse
        crate::handlers::warehouse::get_warehouse,
        crate::handlers::warehouse::get_critical_bins,
        crate::handlers::warehouse::get_category_distribution,
        crate::handlers::warehouse::get_area,
        crate::handlers::warehouse::get_zone,
        crate::handlers::warehouse::get_zones_by_area,
        crate::handlers::warehouse::get_bins_by_zone,

        // Users (compatibility surface)
        crate::handlers::users::create_user,
        crate::handlers::users::get_user,
        crate::handlers::users::get_user_by_username,
    ),
    components(
        schemas(
            crate::models::Area,
            crate::models::Zone,
            crate::models::Bin,
            crate::models::AreaType,
            crate::models::FaceType,
            crate::models::StorageHuType,
            crate::models::SkuEligibility,
            crate::models::AreaWithZonesAndBins,
            crate::models::ZoneWithBins,
            crate::models::CategoryDistribution,
            crate::models::UtilizationBand,
            crate::handlers::users::CreateUserRequest,
            crate::handlers::users::UserResponse,
            crate::errors::ErrorResponse
        )
    ),
    tags(
        (name = "warehouse", description = "Warehouse occupancy data"),
        (name = "users", description = "Compatibility user records")
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}
