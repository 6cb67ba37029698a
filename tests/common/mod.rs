use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use binview_api::{
    config::{AppConfig, SeedConfig},
    models::{AreaType, FaceType, SkuEligibility, StorageHuType},
    seed,
    store::{NewArea, NewBin, NewZone, WarehouseStore},
    AppState,
};

/// Harness driving the full router with one-shot requests.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// App over a randomized-but-reproducible seeded store.
    pub fn seeded() -> Self {
        let mut cfg = AppConfig::new("127.0.0.1".into(), 18_080, "test".into());
        cfg.seed = SeedConfig {
            areas: 3,
            zones_per_area: 4,
            bins_per_zone: 20,
            rng_seed: Some(1234),
        };
        let store = Arc::new(seed::seed_store(&cfg.seed));
        Self::with_store(store, cfg)
    }

    /// App over a hand-built store, for exact-value assertions.
    pub fn with_store(store: Arc<WarehouseStore>, cfg: AppConfig) -> Self {
        let state = AppState::new(store, cfg);
        Self {
            router: binview_api::app_router(state),
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = match body {
            Some(json) => Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .expect("request built"),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("request built"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router handled request");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body read");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }
}

/// Mirror of the original three-zone demo warehouse, with the richer bin
/// parameters filled in. Exact values make response assertions precise.
pub fn demo_store() -> Arc<WarehouseStore> {
    let mut store = WarehouseStore::new();
    let area = store.insert_area(NewArea {
        name: "North Campus".into(),
        area_type: AreaType::Inventory,
        overall_utilization: 72,
    });

    let zones = [
        ("Zone A", FaceType::Pick, 68),
        ("Zone B", FaceType::Reserve, 78),
        ("Zone C", FaceType::Pick, 65),
    ]
    .map(|(name, face_type, utilization)| {
        store.insert_zone(NewZone {
            name: name.into(),
            area_id: area.id,
            face_type,
            utilization,
        })
    });

    let bins: [(&str, usize, i32, Option<&str>); 10] = [
        ("A-01", 0, 23, Some("Electronics")),
        ("A-02", 0, 65, Some("Packaging")),
        ("A-03", 0, 87, Some("Appliances")),
        ("A-04", 0, 45, Some("Office Supplies")),
        ("A-05", 0, 95, Some("Tools")),
        ("B-01", 1, 72, Some("Clothing")),
        ("B-02", 1, 89, Some("Books")),
        ("B-03", 1, 58, Some("Toys")),
        ("B-04", 1, 93, Some("Sporting Goods")),
        ("C-01", 2, 0, None),
    ];
    for (bin_id, zone_idx, utilization, category) in bins {
        store.insert_bin(NewBin {
            bin_id: bin_id.into(),
            zone_id: zones[zone_idx].id,
            utilization_percent: utilization,
            category: category.map(str::to_string),
            max_volume: 100,
            storage_hu_type: StorageHuType::Pallet,
            bin_pallet_capacity: Some(4),
            sku_eligibility: SkuEligibility::AllEligible,
        });
    }

    Arc::new(store)
}

pub fn test_config() -> AppConfig {
    AppConfig::new("127.0.0.1".into(), 18_080, "test".into())
}
