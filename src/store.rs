//! In-memory entity store.
//!
//! Holds the authoritative Area/Zone/Bin/User collections and issues fresh
//! auto-increment ids per entity kind (starting at 1, never reused). The
//! warehouse collections are populated once by the seeder and read-only
//! afterwards; users are the single post-seed mutation path, so that
//! collection lives behind a concurrent map with an atomic counter.
//!
//! Iteration order over the warehouse collections is id order, which equals
//! insertion order. Callers rely on that as the de facto ordering contract
//! for nested responses.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};

use dashmap::DashMap;

use crate::models::{Area, AreaType, Bin, FaceType, NewUser, SkuEligibility, StorageHuType, User, Zone};

/// Insert shape for [`Area`].
#[derive(Debug, Clone)]
pub struct NewArea {
    pub name: String,
    pub area_type: AreaType,
    pub overall_utilization: i32,
}

/// Insert shape for [`Zone`].
#[derive(Debug, Clone)]
pub struct NewZone {
    pub name: String,
    pub area_id: i32,
    pub face_type: FaceType,
    pub utilization: i32,
}

/// Insert shape for [`Bin`].
#[derive(Debug, Clone)]
pub struct NewBin {
    pub bin_id: String,
    pub zone_id: i32,
    pub utilization_percent: i32,
    pub category: Option<String>,
    pub max_volume: i32,
    pub storage_hu_type: StorageHuType,
    pub bin_pallet_capacity: Option<i32>,
    pub sku_eligibility: SkuEligibility,
}

#[derive(Debug)]
pub struct WarehouseStore {
    areas: BTreeMap<i32, Area>,
    zones: BTreeMap<i32, Zone>,
    bins: BTreeMap<i32, Bin>,
    users: DashMap<i32, User>,
    next_area_id: i32,
    next_zone_id: i32,
    next_bin_id: i32,
    next_user_id: AtomicI32,
}

impl Default for WarehouseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WarehouseStore {
    pub fn new() -> Self {
        Self {
            areas: BTreeMap::new(),
            zones: BTreeMap::new(),
            bins: BTreeMap::new(),
            users: DashMap::new(),
            next_area_id: 1,
            next_zone_id: 1,
            next_bin_id: 1,
            next_user_id: AtomicI32::new(1),
        }
    }

    // Seed-time inserts. These take &mut self: the warehouse collections are
    // only written while the store is still exclusively owned by the seeder.

    pub fn insert_area(&mut self, new: NewArea) -> Area {
        let id = self.next_area_id;
        self.next_area_id += 1;
        let area = Area {
            id,
            name: new.name,
            area_type: new.area_type,
            overall_utilization: new.overall_utilization,
        };
        self.areas.insert(id, area.clone());
        area
    }

    pub fn insert_zone(&mut self, new: NewZone) -> Zone {
        let id = self.next_zone_id;
        self.next_zone_id += 1;
        let zone = Zone {
            id,
            name: new.name,
            area_id: new.area_id,
            face_type: new.face_type,
            utilization: new.utilization,
        };
        self.zones.insert(id, zone.clone());
        zone
    }

    pub fn insert_bin(&mut self, new: NewBin) -> Bin {
        let id = self.next_bin_id;
        self.next_bin_id += 1;
        let bin = Bin {
            id,
            bin_id: new.bin_id,
            zone_id: new.zone_id,
            utilization_percent: new.utilization_percent,
            category: new.category,
            max_volume: new.max_volume,
            storage_hu_type: new.storage_hu_type,
            bin_pallet_capacity: new.bin_pallet_capacity,
            sku_eligibility: new.sku_eligibility,
        };
        self.bins.insert(id, bin.clone());
        bin
    }

    // Warehouse lookups. "Not found" is None; an empty Vec means the parent
    // exists but has no children — callers must not conflate the two.

    pub fn get_area_by_id(&self, id: i32) -> Option<&Area> {
        self.areas.get(&id)
    }

    pub fn get_zone_by_id(&self, id: i32) -> Option<&Zone> {
        self.zones.get(&id)
    }

    pub fn get_zones_by_area_id(&self, area_id: i32) -> Vec<Zone> {
        self.zones
            .values()
            .filter(|zone| zone.area_id == area_id)
            .cloned()
            .collect()
    }

    pub fn get_bins_by_zone_id(&self, zone_id: i32) -> Vec<Bin> {
        self.bins
            .values()
            .filter(|bin| bin.zone_id == zone_id)
            .cloned()
            .collect()
    }

    /// Lowest-id (first-seeded) area, used when a request names no area.
    pub fn first_area(&self) -> Option<&Area> {
        self.areas.values().next()
    }

    /// Snapshot of every bin in id order, for the aggregation functions.
    pub fn bins(&self) -> Vec<Bin> {
        self.bins.values().cloned().collect()
    }

    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    // User methods, kept for interface compatibility.

    pub fn get_user(&self, id: i32) -> Option<User> {
        self.users.get(&id).map(|entry| entry.value().clone())
    }

    /// First user with a matching username, scanning in id order. Uniqueness
    /// is declared by the schema but not enforced at insert time.
    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        let mut ids: Vec<i32> = self.users.iter().map(|entry| *entry.key()).collect();
        ids.sort_unstable();
        ids.into_iter()
            .filter_map(|id| self.users.get(&id).map(|entry| entry.value().clone()))
            .find(|user| user.username == username)
    }

    /// Assigns the next id, stores the record, and returns it as stored.
    pub fn create_user(&self, new: NewUser) -> User {
        let id = self.next_user_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id,
            username: new.username,
            password: new.password,
        };
        self.users.insert(id, user.clone());
        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bin(store: &mut WarehouseStore, zone_id: i32, label: &str) -> Bin {
        store.insert_bin(NewBin {
            bin_id: label.to_string(),
            zone_id,
            utilization_percent: 50,
            category: None,
            max_volume: 100,
            storage_hu_type: StorageHuType::Carton,
            bin_pallet_capacity: None,
            sku_eligibility: SkuEligibility::default(),
        })
    }

    #[test]
    fn ids_start_at_one_and_increment_per_kind() {
        let mut store = WarehouseStore::new();
        let area = store.insert_area(NewArea {
            name: "North Campus".into(),
            area_type: AreaType::Inventory,
            overall_utilization: 0,
        });
        let zone = store.insert_zone(NewZone {
            name: "Zone A".into(),
            area_id: area.id,
            face_type: FaceType::Pick,
            utilization: 0,
        });
        let first = bin(&mut store, zone.id, "A-01");
        let second = bin(&mut store, zone.id, "A-02");

        assert_eq!(area.id, 1);
        assert_eq!(zone.id, 1);
        assert_eq!((first.id, second.id), (1, 2));
    }

    #[test]
    fn foreign_key_lookups_filter_exactly() {
        let mut store = WarehouseStore::new();
        let area = store.insert_area(NewArea {
            name: "North Campus".into(),
            area_type: AreaType::Inventory,
            overall_utilization: 0,
        });
        let zone_a = store.insert_zone(NewZone {
            name: "Zone A".into(),
            area_id: area.id,
            face_type: FaceType::Pick,
            utilization: 0,
        });
        let zone_b = store.insert_zone(NewZone {
            name: "Zone B".into(),
            area_id: area.id,
            face_type: FaceType::Reserve,
            utilization: 0,
        });
        bin(&mut store, zone_a.id, "A-01");
        bin(&mut store, zone_b.id, "B-01");
        bin(&mut store, zone_a.id, "A-02");

        let zones = store.get_zones_by_area_id(area.id);
        assert_eq!(zones.len(), 2);
        assert!(zones.iter().all(|z| z.area_id == area.id));

        let bins_a = store.get_bins_by_zone_id(zone_a.id);
        assert_eq!(bins_a.len(), 2);
        assert!(bins_a.iter().all(|b| b.zone_id == zone_a.id));
        // Insertion order within the zone is preserved.
        assert_eq!(bins_a[0].bin_id, "A-01");
        assert_eq!(bins_a[1].bin_id, "A-02");
    }

    #[test]
    fn missing_parent_yields_empty_not_panic() {
        let store = WarehouseStore::new();
        assert!(store.get_area_by_id(99).is_none());
        assert!(store.get_zones_by_area_id(99).is_empty());
        assert!(store.get_bins_by_zone_id(99).is_empty());
        assert!(store.first_area().is_none());
    }

    #[test]
    fn user_round_trip() {
        let store = WarehouseStore::new();
        let created = store.create_user(NewUser {
            username: "picker1".into(),
            password: "hunter2".into(),
        });
        assert_eq!(created.id, 1);

        let by_id = store.get_user(created.id).unwrap();
        assert_eq!(by_id.username, "picker1");

        let by_name = store.get_user_by_username("picker1").unwrap();
        assert_eq!(by_name.id, created.id);

        assert!(store.get_user_by_username("nobody").is_none());
    }

    #[test]
    fn duplicate_usernames_resolve_to_first_inserted() {
        let store = WarehouseStore::new();
        let first = store.create_user(NewUser {
            username: "dup".into(),
            password: "a".into(),
        });
        store.create_user(NewUser {
            username: "dup".into(),
            password: "b".into(),
        });

        assert_eq!(store.get_user_by_username("dup").unwrap().id, first.id);
    }
}
