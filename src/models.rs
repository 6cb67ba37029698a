//! Warehouse data model and wire shapes.
//!
//! Field names on the serialized forms are the contract consumed by the
//! dashboard client; they must stay camelCase (including the irregular
//! `storageHUType`).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Functional classification of a top-level warehouse area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
pub enum AreaType {
    Inventory,
    Returns,
    Overflow,
    Staging,
    Damage,
}

/// Role of a zone within its area: forward pick face or reserve storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
pub enum FaceType {
    Pick,
    Reserve,
}

/// Handling-unit type a bin is racked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
pub enum StorageHuType {
    Pallet,
    Carton,
    Crate,
}

/// Whether the SKUs assignable to a bin are compatible with it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
pub enum SkuEligibility {
    #[default]
    AllEligible,
    MixedEligibility,
    AllIneligible,
}

/// Top-level warehouse grouping.
///
/// `overall_utilization` is stored, not derived; seeding keeps it close to
/// the mean of the area's zones but nothing re-enforces that afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: i32,
    pub name: String,
    pub area_type: AreaType,
    pub overall_utilization: i32,
}

/// Subdivision of an area.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: i32,
    pub name: String,
    pub area_id: i32,
    pub face_type: FaceType,
    pub utilization: i32,
}

/// Leaf storage location; the unit at which utilization is tracked.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Bin {
    pub id: i32,
    pub bin_id: String,
    pub zone_id: i32,
    pub utilization_percent: i32,
    pub category: Option<String>,
    pub max_volume: i32,
    /// camelCase would give `storageHuType`; the client expects `storageHUType`.
    #[serde(rename = "storageHUType")]
    pub storage_hu_type: StorageHuType,
    pub bin_pallet_capacity: Option<i32>,
    pub sku_eligibility: SkuEligibility,
}

/// Kept for interface compatibility only; nothing authenticates against it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
}

/// Insert shape for [`User`]; the store assigns the id.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

/// A zone with its bins attached, in store insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ZoneWithBins {
    #[serde(flatten)]
    pub zone: Zone,
    pub bins: Vec<Bin>,
}

/// Fully nested response graph for one area.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AreaWithZonesAndBins {
    #[serde(flatten)]
    pub area: Area,
    pub zones: Vec<ZoneWithBins>,
}

/// One slice of the category share chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDistribution {
    pub category: String,
    pub percentage: i32,
}

/// Color bucket for rendering a utilization percentage.
///
/// Canonical boundaries: Empty at exactly 0, Low up to 50, Medium up to 75,
/// High up to 90, VeryHigh above 90. Renderers must not collapse High and
/// VeryHigh at the 75% boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
pub enum UtilizationBand {
    Empty,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl UtilizationBand {
    pub fn for_percent(percent: i32) -> Self {
        match percent {
            p if p <= 0 => UtilizationBand::Empty,
            p if p <= 50 => UtilizationBand::Low,
            p if p <= 75 => UtilizationBand::Medium,
            p if p <= 90 => UtilizationBand::High,
            _ => UtilizationBand::VeryHigh,
        }
    }
}
