//! Query façade over the entity store.

use std::sync::Arc;

use tracing::instrument;

use crate::errors::ServiceError;
use crate::models::{Area, AreaWithZonesAndBins, Bin, CategoryDistribution, Zone, ZoneWithBins};
use crate::services::analytics;
use crate::store::WarehouseStore;

/// Read-oriented service assembling nested warehouse responses.
#[derive(Clone)]
pub struct WarehouseService {
    store: Arc<WarehouseStore>,
}

impl WarehouseService {
    pub fn new(store: Arc<WarehouseStore>) -> Self {
        Self { store }
    }

    /// Fully nested Area -> Zones -> Bins graph.
    ///
    /// `area_id` of `None` resolves the lowest-id (first-seeded) area. Zones
    /// and bins attach in store insertion order.
    #[instrument(skip(self))]
    pub fn warehouse_data(
        &self,
        area_id: Option<i32>,
    ) -> Result<AreaWithZonesAndBins, ServiceError> {
        let area = match area_id {
            Some(id) => self
                .store
                .get_area_by_id(id)
                .ok_or_else(|| ServiceError::NotFound(format!("Area {id} not found")))?,
            None => self
                .store
                .first_area()
                .ok_or_else(|| ServiceError::NotFound("No areas available".to_string()))?,
        };

        let zones = self
            .store
            .get_zones_by_area_id(area.id)
            .into_iter()
            .map(|zone| {
                let bins = self.store.get_bins_by_zone_id(zone.id);
                ZoneWithBins { zone, bins }
            })
            .collect();

        Ok(AreaWithZonesAndBins {
            area: area.clone(),
            zones,
        })
    }

    /// Up to five bins at or above `threshold`, descending by utilization.
    #[instrument(skip(self))]
    pub fn critical_bins(&self, threshold: i32) -> Vec<Bin> {
        analytics::critical_bins(&self.store.bins(), threshold)
    }

    /// Category share of all bins, descending by percentage.
    #[instrument(skip(self))]
    pub fn category_distribution(&self) -> Vec<CategoryDistribution> {
        analytics::category_distribution(&self.store.bins())
    }

    pub fn area(&self, id: i32) -> Result<Area, ServiceError> {
        self.store
            .get_area_by_id(id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("Area {id} not found")))
    }

    pub fn zone(&self, id: i32) -> Result<Zone, ServiceError> {
        self.store
            .get_zone_by_id(id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("Zone {id} not found")))
    }

    /// Zones owned by an area. The area must exist; an existing area with no
    /// zones yields an empty list.
    pub fn zones_by_area(&self, area_id: i32) -> Result<Vec<Zone>, ServiceError> {
        self.area(area_id)?;
        Ok(self.store.get_zones_by_area_id(area_id))
    }

    /// Bins owned by a zone, with the same existence contract as
    /// [`Self::zones_by_area`].
    pub fn bins_by_zone(&self, zone_id: i32) -> Result<Vec<Bin>, ServiceError> {
        self.zone(zone_id)?;
        Ok(self.store.get_bins_by_zone_id(zone_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AreaType, FaceType, SkuEligibility, StorageHuType};
    use crate::store::{NewArea, NewBin, NewZone};

    fn fixture() -> WarehouseService {
        let mut store = WarehouseStore::new();
        let area = store.insert_area(NewArea {
            name: "North Campus".into(),
            area_type: AreaType::Inventory,
            overall_utilization: 72,
        });
        let empty_area = store.insert_area(NewArea {
            name: "South Annex".into(),
            area_type: AreaType::Overflow,
            overall_utilization: 0,
        });
        assert!(empty_area.id > area.id);

        let zone_a = store.insert_zone(NewZone {
            name: "Zone A".into(),
            area_id: area.id,
            face_type: FaceType::Pick,
            utilization: 68,
        });
        let zone_b = store.insert_zone(NewZone {
            name: "Zone B".into(),
            area_id: area.id,
            face_type: FaceType::Reserve,
            utilization: 78,
        });

        for (label, utilization) in [("A-01", 23), ("A-02", 95)] {
            store.insert_bin(NewBin {
                bin_id: label.into(),
                zone_id: zone_a.id,
                utilization_percent: utilization,
                category: Some("Electronics".into()),
                max_volume: 100,
                storage_hu_type: StorageHuType::Pallet,
                bin_pallet_capacity: Some(4),
                sku_eligibility: SkuEligibility::default(),
            });
        }
        store.insert_bin(NewBin {
            bin_id: "B-01".into(),
            zone_id: zone_b.id,
            utilization_percent: 87,
            category: None,
            max_volume: 60,
            storage_hu_type: StorageHuType::Carton,
            bin_pallet_capacity: None,
            sku_eligibility: SkuEligibility::AllIneligible,
        });

        WarehouseService::new(Arc::new(store))
    }

    #[test]
    fn warehouse_data_defaults_to_first_area() {
        let service = fixture();
        let data = service.warehouse_data(None).unwrap();
        assert_eq!(data.area.id, 1);
        assert_eq!(data.zones.len(), 2);
        assert!(data
            .zones
            .iter()
            .all(|z| z.zone.area_id == data.area.id));
        assert_eq!(data.zones[0].bins.len(), 2);
        assert_eq!(data.zones[1].bins.len(), 1);
        assert!(data.zones[0].bins.iter().all(|b| b.zone_id == data.zones[0].zone.id));
    }

    #[test]
    fn warehouse_data_for_zoneless_area_is_empty_not_missing() {
        let service = fixture();
        let data = service.warehouse_data(Some(2)).unwrap();
        assert_eq!(data.area.name, "South Annex");
        assert!(data.zones.is_empty());
    }

    #[test]
    fn warehouse_data_unknown_area_is_not_found() {
        let service = fixture();
        let err = service.warehouse_data(Some(99)).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[test]
    fn warehouse_data_on_empty_store_is_not_found() {
        let service = WarehouseService::new(Arc::new(WarehouseStore::new()));
        assert!(matches!(
            service.warehouse_data(None),
            Err(ServiceError::NotFound(_))
        ));
    }

    #[test]
    fn critical_bins_delegate_over_all_zones() {
        let service = fixture();
        let critical = service.critical_bins(75);
        let percents: Vec<i32> = critical.iter().map(|b| b.utilization_percent).collect();
        assert_eq!(percents, vec![95, 87]);
    }

    #[test]
    fn pass_through_accessors_distinguish_missing_from_empty() {
        let service = fixture();
        assert!(service.zones_by_area(2).unwrap().is_empty());
        assert!(matches!(
            service.zones_by_area(99),
            Err(ServiceError::NotFound(_))
        ));
        assert_eq!(service.bins_by_zone(1).unwrap().len(), 2);
        assert!(matches!(
            service.bins_by_zone(99),
            Err(ServiceError::NotFound(_))
        ));
    }
}
