use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct BaseNickname(pub String);

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct SystemNickname(pub String);

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct FactionNickname(pub String);

/// Nickname of anything that can sit in a cargo hold or a shop: commodities, equipment, ships.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct ItemNickname(pub String);

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct LoadoutNickname(pub String);

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct InfocardKey(pub String);

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct HashCode(pub u32);

/// Ship class a commodity volume applies to. `-1` means "any ship".
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct ShipClass(pub i32);

impl ShipClass {
    pub const ANY: ShipClass = ShipClass(-1);
}

impl Default for ShipClass {
    fn default() -> Self {
        ShipClass::ANY
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CommodityGood {
    pub nickname: ItemNickname,
    pub equipment: ItemNickname,
    pub price: i64,
    #[serde(default)]
    pub combinable: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CommodityVolume {
    pub volume: f64,
    #[serde(default)]
    pub ship_class: ShipClass,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EquipCommodity {
    pub nickname: ItemNickname,
    pub ids_name: i32,
    pub ids_info: i32,
    pub mass: Option<f64>,
    pub volumes: Vec<CommodityVolume>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EquipItem {
    pub nickname: ItemNickname,
    pub ids_name: i32,
    pub ids_info: i32,
    pub category: String,
}

/// Ship package as listed in goods: points at the hull good.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ShipGood {
    pub nickname: ItemNickname,
    pub hull: ItemNickname,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ShipHull {
    pub nickname: ItemNickname,
    pub ship: ItemNickname,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ShipArch {
    pub nickname: ItemNickname,
    pub ids_name: i32,
}

/// One line of the static market table: a base trading a specific good.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BaseMarketGood {
    pub base: BaseNickname,
    pub price_modifier: f64,
    pub base_sells: bool,
    /// Server mod only: price at which the base sells, positive when it does.
    pub server_sell_price: Option<i64>,
    #[serde(default)]
    pub level_required: i32,
    #[serde(default)]
    pub rep_required: f64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct UniverseBase {
    pub nickname: BaseNickname,
    pub system: SystemNickname,
    pub strid_name: i32,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct UniverseSystem {
    pub nickname: SystemNickname,
    pub strid_name: i32,
    pub ids_info: Option<i32>,
    pub nav_map_scale: Option<f64>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct SystemLayout {
    pub nickname: SystemNickname,
    #[serde(default)]
    pub bases: Vec<SystemBase>,
    #[serde(default)]
    pub wrecks: Vec<Wreck>,
}

/// Placement of a base object inside a system layout.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SystemBase {
    pub nickname: String,
    pub ids_name: i32,
    pub rep_nickname: Option<FactionNickname>,
    pub pos: Vector,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Wreck {
    pub nickname: String,
    pub loadout: LoadoutNickname,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Group {
    pub nickname: FactionNickname,
    pub ids_name: i32,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LoadoutCargo {
    pub nickname: ItemNickname,
    #[serde(default)]
    pub count: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Loadout {
    pub nickname: LoadoutNickname,
    #[serde(default)]
    pub cargos: Vec<LoadoutCargo>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NpcShipArch {
    pub nickname: String,
    pub loadout: LoadoutNickname,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PriceOverride {
    pub base_nickname: BaseNickname,
    pub base_sells: bool,
    pub price_base_buys_for: i64,
    pub price_base_sells_for: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PlayerShopRecord {
    pub id: HashCode,
    pub quantity: i64,
    pub price: i64,
    pub sell_price: i64,
    pub min_stock: i64,
    pub max_stock: i64,
}

/// A player-owned base as exported by the server. Optional fields are only present when the owner
/// granted visibility.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct PlayerBaseRecord {
    pub nickname: String,
    pub name: String,
    pub pos: Option<String>,
    pub level: Option<i64>,
    pub money: Option<i64>,
    pub health: Option<i64>,
    pub defense_mode: Option<i32>,
    pub system_hash: Option<HashCode>,
    pub affiliation_hash: Option<HashCode>,
    pub forum_thread_url: Option<String>,
    pub shop_items: Vec<PlayerShopRecord>,
    pub infocard_paragraphs: Vec<String>,

    pub srp_faction_hash_list: Vec<HashCode>,
    pub srp_tag_list: Vec<String>,
    pub srp_name_list: Vec<String>,
    pub ally_faction_hash_list: Vec<HashCode>,
    pub ally_tag_list: Vec<String>,
    pub ally_name_list: Vec<String>,
    pub hostile_faction_hash_list: Vec<HashCode>,
    pub hostile_tag_list: Vec<String>,
    pub hostile_name_list: Vec<String>,
}

/// Data only available when running against a live server mod.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ServerModDataset {
    pub price_overrides: HashMap<ItemNickname, Vec<PriceOverride>>,
    pub player_owned_bases: Vec<PlayerBaseRecord>,
    pub recipe_products: Vec<ItemNickname>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct CraftingDataset {
    pub products: Vec<ItemNickname>,
}

/// Fully loaded, read-only snapshot of all game tables the catalog is computed from.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub commodities: Vec<CommodityGood>,
    pub equipment_commodities: HashMap<ItemNickname, EquipCommodity>,
    pub equipment_items: Vec<EquipItem>,
    pub ships: Vec<ShipGood>,
    pub ship_hulls: HashMap<ItemNickname, ShipHull>,
    pub shiparch: HashMap<ItemNickname, ShipArch>,
    pub markets: HashMap<ItemNickname, Vec<BaseMarketGood>>,
    pub universe_bases: HashMap<BaseNickname, UniverseBase>,
    pub universe_systems: BTreeMap<SystemNickname, UniverseSystem>,
    pub system_layouts: BTreeMap<SystemNickname, SystemLayout>,
    pub groups: Vec<Group>,
    pub loadouts: HashMap<LoadoutNickname, Loadout>,
    pub npc_ships: Vec<NpcShipArch>,
    pub server_mod: Option<ServerModDataset>,
    pub crafting: Option<CraftingDataset>,
}

impl GameConfig {
    pub fn group(&self, nickname: &FactionNickname) -> Option<&Group> {
        self.groups.iter().find(|group| &group.nickname == nickname)
    }

    pub fn equipment_item(&self, nickname: &ItemNickname) -> Option<&EquipItem> {
        self.equipment_items.iter().find(|item| &item.nickname == nickname)
    }
}
