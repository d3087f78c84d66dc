use crate::flhash::NicknameHasher;
use crate::infocard_sink::InfocardSink;
use crate::name_lookup::{infocard_lines, NameLookup};
use fl_domain::{EquipItem, GameConfig, Group, HashCode, InfocardKey, ShipGood, UniverseSystem};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

/// Reverse lookup from hash codes to the records they were computed from.
///
/// The server mod refers to systems, factions and shop goods only by hash. Codes are assumed to be
/// unique over the nickname vocabulary; when two nicknames collide the first record wins.
#[derive(Debug, Clone, Default)]
pub struct HashIndex {
    systems_by_hash: HashMap<HashCode, UniverseSystem>,
    factions_by_hash: HashMap<HashCode, Group>,
    goods_by_hash: HashMap<HashCode, EquipItem>,
    ships_by_hash: HashMap<HashCode, ShipGood>,
}

impl HashIndex {
    pub fn build(config: &GameConfig, hasher: &dyn NicknameHasher, names: &dyn NameLookup, infocards: &dyn InfocardSink) -> Self {
        let mut index = HashIndex::default();

        for system in config.universe_systems.values() {
            let hash = hasher.hash_nickname(&system.nickname.0);
            insert_first(&mut index.systems_by_hash, hash, system.clone(), "system");
        }

        for group in config.groups.iter() {
            let hash = hasher.hash_faction(&group.nickname.0);
            insert_first(&mut index.factions_by_hash, hash, group.clone(), "faction");
        }

        for item in config.equipment_items.iter() {
            let hash = hasher.hash_nickname(&item.nickname.0);
            insert_first(&mut index.goods_by_hash, hash, item.clone(), "good");
            infocards.register(InfocardKey(item.nickname.0.clone()), infocard_lines(names, item.ids_info));
        }

        for ship in config.ships.iter() {
            let hash = hasher.hash_nickname(&ship.nickname.0);
            insert_first(&mut index.ships_by_hash, hash, ship.clone(), "ship");
        }

        debug!(
            systems = index.systems_by_hash.len(),
            factions = index.factions_by_hash.len(),
            goods = index.goods_by_hash.len(),
            ships = index.ships_by_hash.len(),
            "built hash index"
        );

        index
    }

    pub fn resolve_system(&self, hash: HashCode) -> Option<&UniverseSystem> {
        self.systems_by_hash.get(&hash)
    }

    pub fn resolve_faction(&self, hash: HashCode) -> Option<&Group> {
        self.factions_by_hash.get(&hash)
    }

    pub fn resolve_good(&self, hash: HashCode) -> Option<&EquipItem> {
        self.goods_by_hash.get(&hash)
    }

    pub fn resolve_ship(&self, hash: HashCode) -> Option<&ShipGood> {
        self.ships_by_hash.get(&hash)
    }
}

fn insert_first<T>(map: &mut HashMap<HashCode, T>, hash: HashCode, value: T, kind: &str) {
    match map.entry(hash) {
        Entry::Occupied(_) => debug!(hash = hash.0, kind, "hash collision, keeping first record"),
        Entry::Vacant(entry) => {
            entry.insert(value);
        }
    }
}
