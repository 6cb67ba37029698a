//! Seed generator: populates the entity store once at startup.
//!
//! Topology is deterministic in shape (areas -> zones per area -> bins per
//! zone) with randomized bin parameters. A configured RNG seed makes the
//! whole topology reproducible, which the tests rely on.
//!
//! Stored zone utilization is rolled up from the generated bins, and area
//! utilization from its zones, so the stored numbers approximate the mean of
//! their children at startup. Nothing re-derives them afterwards.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::SeedConfig;
use crate::models::{AreaType, FaceType, SkuEligibility, StorageHuType};
use crate::services::analytics;
use crate::store::{NewArea, NewBin, NewZone, WarehouseStore};

const AREA_TYPES: [AreaType; 5] = [
    AreaType::Inventory,
    AreaType::Returns,
    AreaType::Overflow,
    AreaType::Staging,
    AreaType::Damage,
];

const AREA_NAMES: [&str; 5] = [
    "North Campus",
    "Returns Dock",
    "Overflow Yard",
    "Staging Mezzanine",
    "Damage Hold",
];

const CATEGORIES: [&str; 12] = [
    "Electronics",
    "Packaging",
    "Appliances",
    "Office Supplies",
    "Tools",
    "Clothing",
    "Books",
    "Toys",
    "Sporting Goods",
    "Hardware",
    "Kitchen",
    "Garden",
];

struct BinParams {
    utilization_percent: i32,
    category: Option<String>,
    max_volume: i32,
    storage_hu_type: StorageHuType,
    bin_pallet_capacity: Option<i32>,
    sku_eligibility: SkuEligibility,
}

/// Build and populate a fresh store from the seed configuration.
pub fn seed_store(cfg: &SeedConfig) -> WarehouseStore {
    let mut rng = match cfg.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut store = WarehouseStore::new();
    let mut zone_index = 0usize;

    for area_index in 0..cfg.areas {
        // Generate all child data first: the stored utilization numbers roll
        // up from bins to zones to the area.
        let mut zone_params: Vec<(FaceType, Vec<BinParams>)> = Vec::new();
        for zone_offset in 0..cfg.zones_per_area {
            let face_type = if zone_offset % 2 == 0 {
                FaceType::Pick
            } else {
                FaceType::Reserve
            };
            let bin_count = jittered_bin_count(cfg.bins_per_zone, &mut rng);
            let bins = (0..bin_count).map(|_| random_bin(&mut rng)).collect();
            zone_params.push((face_type, bins));
        }

        let zone_utils: Vec<i32> = zone_params
            .iter()
            .map(|(_, bins)| {
                let percents: Vec<i32> = bins.iter().map(|b| b.utilization_percent).collect();
                analytics::mean_utilization(&percents).unwrap_or(0)
            })
            .collect();
        let overall = analytics::mean_utilization(&zone_utils).unwrap_or(0);

        let area = store.insert_area(NewArea {
            name: area_name(area_index),
            area_type: AREA_TYPES[area_index % AREA_TYPES.len()],
            overall_utilization: overall,
        });

        for ((face_type, bins), utilization) in zone_params.into_iter().zip(zone_utils) {
            let label = zone_label(zone_index);
            zone_index += 1;

            let zone = store.insert_zone(NewZone {
                name: format!("Zone {label}"),
                area_id: area.id,
                face_type,
                utilization,
            });

            for (slot, params) in bins.into_iter().enumerate() {
                store.insert_bin(NewBin {
                    bin_id: format!("{label}-{:02}", slot + 1),
                    zone_id: zone.id,
                    utilization_percent: params.utilization_percent,
                    category: params.category,
                    max_volume: params.max_volume,
                    storage_hu_type: params.storage_hu_type,
                    bin_pallet_capacity: params.bin_pallet_capacity,
                    sku_eligibility: params.sku_eligibility,
                });
            }
        }
    }

    info!(
        areas = store.area_count(),
        zones = store.zone_count(),
        bins = store.bin_count(),
        "seeded warehouse store"
    );
    store
}

fn area_name(index: usize) -> String {
    let base = AREA_NAMES[index % AREA_NAMES.len()];
    let round = index / AREA_NAMES.len();
    if round == 0 {
        base.to_string()
    } else {
        format!("{base} {}", round + 1)
    }
}

/// Spreadsheet-style zone labels: A..Z, then AA, AB, ...
fn zone_label(mut index: usize) -> String {
    let mut label = String::new();
    loop {
        label.insert(0, (b'A' + (index % 26) as u8) as char);
        index /= 26;
        if index == 0 {
            break;
        }
        index -= 1;
    }
    label
}

fn jittered_bin_count(base: usize, rng: &mut StdRng) -> usize {
    if base == 0 {
        return 0;
    }
    let jitter = (base / 10).max(1) as i64;
    let count = base as i64 + rng.gen_range(-jitter..=jitter);
    count.max(0) as usize
}

fn random_bin(rng: &mut StdRng) -> BinParams {
    let storage_hu_type = match rng.gen_range(0..3) {
        0 => StorageHuType::Pallet,
        1 => StorageHuType::Carton,
        _ => StorageHuType::Crate,
    };
    let bin_pallet_capacity = match storage_hu_type {
        StorageHuType::Pallet => Some(rng.gen_range(1..=6)),
        _ => None,
    };
    // Roughly one bin in eight carries no category and falls into "Other"
    // on the distribution chart.
    let category = if rng.gen_range(0..8) == 0 {
        None
    } else {
        Some(CATEGORIES[rng.gen_range(0..CATEGORIES.len())].to_string())
    };
    let sku_eligibility = match rng.gen_range(0..10) {
        0..=6 => SkuEligibility::AllEligible,
        7..=8 => SkuEligibility::MixedEligibility,
        _ => SkuEligibility::AllIneligible,
    };

    BinParams {
        utilization_percent: rng.gen_range(0..=100),
        category,
        max_volume: rng.gen_range(40..=200),
        storage_hu_type,
        bin_pallet_capacity,
        sku_eligibility,
    }
}
