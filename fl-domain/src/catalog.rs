use crate::{BaseNickname, FactionNickname, HashCode, Infocard, InfocardKey, ItemNickname, ShipClass, SystemNickname, Vector};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::Display;

/// Denormalized location metadata embedded wherever a base is referenced.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct BaseInfo {
    pub base_name: String,
    pub system_name: String,
    pub region: String,
    pub faction_name: String,
    pub base_pos: Vector,
    pub sector_coord: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GoodAtBase {
    pub base_nickname: BaseNickname,
    pub base_sells: bool,
    pub price_base_buys_for: i64,
    pub price_base_sells_for: i64,
    pub volume: f64,
    pub ship_class: ShipClass,
    pub level_required: i32,
    pub rep_required: f64,

    pub not_buyable: bool,
    pub is_server_side_override: bool,
    pub is_transport_unreachable: bool,

    #[serde(flatten)]
    pub base_info: BaseInfo,
}

impl GoodAtBase {
    /// Entry with no price data, used by the pseudo-bases and as a starting point for the others.
    pub fn new(base_nickname: BaseNickname, volume: f64, ship_class: ShipClass) -> Self {
        Self {
            base_nickname,
            base_sells: false,
            price_base_buys_for: 0,
            price_base_sells_for: 0,
            volume,
            ship_class,
            level_required: 0,
            rep_required: 0.0,
            not_buyable: false,
            is_server_side_override: false,
            is_transport_unreachable: false,
            base_info: BaseInfo::default(),
        }
    }
}

pub type GoodsPerBase = BTreeMap<BaseNickname, GoodAtBase>;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct CommodityKey(pub String);

impl CommodityKey {
    pub fn new(nickname: &ItemNickname, ship_class: ShipClass) -> Self {
        CommodityKey(format!("{}_{}", nickname.0, ship_class.0))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Commodity {
    pub nickname: ItemNickname,
    pub nickname_hash: HashCode,
    pub name: String,
    pub combinable: bool,
    pub volume: f64,
    pub ship_class: ShipClass,
    pub mass: f64,
    pub name_id: i32,
    pub infocard_id: i32,
    pub infocard: InfocardKey,
    pub bases: GoodsPerBase,
    pub price_best_base_buys_for: i64,
    pub price_best_base_sells_for: i64,
    /// Zero means "no profit data", not "zero profit".
    pub profit_margin: i64,
}

impl Commodity {
    pub fn key(&self) -> CommodityKey {
        CommodityKey::new(&self.nickname, self.ship_class)
    }

    pub fn profit_margin_per_volume(&self) -> f64 {
        price_per_volume(self.profit_margin, self.volume)
    }
}

/// Returns `-1` for zero volume.
pub fn price_per_volume(price: i64, volume: f64) -> f64 {
    if volume == 0.0 {
        return -1.0;
    }
    price as f64 / volume
}

/// A trading post listing, used for pseudo-bases that have no universe entry.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Base {
    pub name: String,
    pub nickname: BaseNickname,
    pub infocard_key: InfocardKey,
    pub system_nickname: SystemNickname,
    pub system: String,
    pub region: String,
    pub faction_name: String,
    pub archetypes: Vec<String>,
    pub market_goods: BTreeMap<CommodityKey, MarketGood>,
    pub infocard: Infocard,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MarketGood {
    pub nickname: ItemNickname,
    pub nickname_hash: HashCode,
    pub name: String,
    pub infocard: InfocardKey,
    pub base_sells: bool,
    pub r#type: String,
    pub ship_class: ShipClass,
    pub is_server_side_override: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DefenseMode {
    #[strum(to_string = "not recognized")]
    Unrecognized,
    #[strum(to_string = "SRP Whitelist > Blacklist > IFF Standing, Anyone with good standing")]
    SrpWhitelistBlacklistReputation,
    #[strum(to_string = "Whitelist > Nodock, Whitelisted ships only")]
    WhitelistNodock,
    #[strum(to_string = "Whitelist > Hostile, Whitelisted ships only")]
    WhitelistHostile,
}

impl From<i32> for DefenseMode {
    fn from(value: i32) -> Self {
        match value {
            1 => DefenseMode::SrpWhitelistBlacklistReputation,
            2 => DefenseMode::WhitelistNodock,
            3 => DefenseMode::WhitelistHostile,
            _ => DefenseMode::Unrecognized,
        }
    }
}

/// One line of an outpost shop, resolved to the good or ship it trades.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ShopItem {
    pub id: HashCode,
    pub quantity: i64,
    pub price: i64,
    pub sell_price: i64,
    pub min_stock: i64,
    pub max_stock: i64,

    pub nickname: ItemNickname,
    pub name: String,
    pub category: String,
}

impl ShopItem {
    pub fn base_sells(&self) -> bool {
        self.quantity > self.min_stock
    }

    pub fn base_buys(&self) -> bool {
        self.quantity < self.max_stock
    }
}

/// Player-owned base.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PoB {
    pub nickname: String,
    pub name: String,

    pub pos: Option<String>,
    pub level: Option<i64>,
    pub money: Option<i64>,
    pub health: Option<i64>,
    pub defense_mode: Option<DefenseMode>,

    pub system_nickname: Option<SystemNickname>,
    pub system_name: Option<String>,
    pub faction_nickname: Option<FactionNickname>,
    pub faction_name: Option<String>,

    pub forum_thread_url: Option<String>,

    pub base_pos: Option<Vector>,
    pub sector_coord: Option<String>,
    pub region: Option<String>,

    pub shop_items: Vec<ShopItem>,
    pub infocard: Infocard,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PoBGoodBase<'a> {
    pub shop_item: &'a ShopItem,
    pub base: &'a PoB,
}

/// Aggregate of one item across every outpost shop that lists it.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PoBGood<'a> {
    pub nickname: ItemNickname,
    pub name: String,
    pub category: String,
    pub total_buyable_from_bases: i64,
    pub total_sellable_to_bases: i64,

    pub best_price_to_buy: Option<i64>,
    pub best_price_to_sell: Option<i64>,

    pub bases: Vec<PoBGoodBase<'a>>,

    pub any_base_sells: bool,
    pub any_base_buys: bool,
}

/// Outpost shop line denormalized with the outpost it belongs to.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PobShopItem {
    pub shop_item: ShopItem,
    pub pob_name: String,
    pub pob_nickname: String,

    pub system_nickname: Option<SystemNickname>,
    pub system_name: String,
    pub region: Option<String>,
    pub faction_nickname: Option<FactionNickname>,
    pub faction_name: String,
    pub base_pos: Option<Vector>,
    pub sector_coord: Option<String>,
}
