use crate::exporter::{Exporter, ExporterSettings};
use crate::flhash::{FlHash, NicknameHasher};
use crate::infocard_sink::InMemoryInfocards;
use crate::name_lookup::Infotexts;
use fl_domain::{
    BaseMarketGood, BaseNickname, CommodityGood, CommodityVolume, CraftingDataset, EquipCommodity, EquipItem, FactionNickname, GameConfig, Group, HashCode,
    ItemNickname, Loadout, LoadoutCargo, LoadoutNickname, NpcShipArch, PlayerBaseRecord, PlayerShopRecord, PriceOverride, ServerModDataset, ShipArch,
    ShipClass, ShipGood, ShipHull, SystemBase, SystemLayout, SystemNickname, UniverseBase, UniverseSystem, Vector, Wreck,
};
use std::collections::HashMap;
use std::sync::Arc;

pub fn item(nickname: &str) -> ItemNickname {
    ItemNickname(nickname.to_string())
}

pub fn base(nickname: &str) -> BaseNickname {
    BaseNickname(nickname.to_string())
}

pub fn system(nickname: &str) -> SystemNickname {
    SystemNickname(nickname.to_string())
}

pub fn faction(nickname: &str) -> FactionNickname {
    FactionNickname(nickname.to_string())
}

/// Two systems, three bases, a handful of goods and one wreck/NPC loadout each.
///
/// Static prices for `commodity_gold` (reference price 100):
/// li01_01_base 150 (sells), li01_02_base 80 (buys only), br01_01_base 120 (sells).
pub struct TestUniverse {
    pub config: GameConfig,
    pub infotexts: Infotexts,
}

impl TestUniverse {
    pub fn new() -> Self {
        Self {
            config: test_game_config(),
            infotexts: test_infotexts(),
        }
    }

    pub fn with_server_mod(mut self) -> Self {
        self.config.server_mod = Some(test_server_mod());
        self
    }

    pub fn with_crafting(mut self) -> Self {
        self.config.crafting = Some(CraftingDataset {
            products: vec![item("commodity_crafted")],
        });
        self
    }

    pub fn exporter(&self) -> Exporter {
        self.exporter_with_settings(ExporterSettings::default())
    }

    pub fn exporter_with_settings(&self, settings: ExporterSettings) -> Exporter {
        Exporter::new(Arc::new(self.config.clone()), Arc::new(self.infotexts.clone()), Arc::new(InMemoryInfocards::new())).with_settings(settings)
    }

    pub fn exporter_with_infocards(&self, infocards: Arc<InMemoryInfocards>) -> Exporter {
        Exporter::new(Arc::new(self.config.clone()), Arc::new(self.infotexts.clone()), infocards)
    }
}

fn commodity(nickname: &str, price: i64, ids_name: i32, volumes: Vec<CommodityVolume>) -> (CommodityGood, EquipCommodity) {
    (
        CommodityGood {
            nickname: item(nickname),
            equipment: item(nickname),
            price,
            combinable: true,
        },
        EquipCommodity {
            nickname: item(nickname),
            ids_name,
            ids_info: ids_name + 100,
            mass: Some(1.0),
            volumes,
        },
    )
}

fn market_line(base_nickname: &str, price_modifier: f64, base_sells: bool) -> BaseMarketGood {
    BaseMarketGood {
        base: base(base_nickname),
        price_modifier,
        base_sells,
        server_sell_price: None,
        level_required: 3,
        rep_required: 0.2,
    }
}

fn equip_item(nickname: &str, ids_name: i32, category: &str) -> EquipItem {
    EquipItem {
        nickname: item(nickname),
        ids_name,
        ids_info: ids_name + 100,
        category: category.to_string(),
    }
}

pub fn test_game_config() -> GameConfig {
    let any_ship = ShipClass::ANY;
    let commodities = vec![
        commodity("commodity_gold", 100, 4001, vec![CommodityVolume { volume: 1.0, ship_class: any_ship }]),
        commodity(
            "commodity_water",
            20,
            4002,
            vec![
                CommodityVolume { volume: 1.0, ship_class: any_ship },
                CommodityVolume {
                    volume: 0.5,
                    ship_class: ShipClass(2),
                },
            ],
        ),
        commodity("commodity_artifacts", 500, 4003, vec![CommodityVolume { volume: 2.0, ship_class: any_ship }]),
        commodity("commodity_crafted", 300, 4004, vec![CommodityVolume { volume: 1.0, ship_class: any_ship }]),
    ];

    let universe_systems = [
        UniverseSystem {
            nickname: system("li01"),
            strid_name: 1001,
            ids_info: Some(1101),
            nav_map_scale: Some(1.0),
        },
        UniverseSystem {
            nickname: system("br01"),
            strid_name: 1002,
            ids_info: Some(1102),
            nav_map_scale: Some(1.36),
        },
    ];

    let universe_bases = [("li01_01_base", "li01", 2001), ("li01_02_base", "li01", 2002), ("br01_01_base", "br01", 2003)]
        .into_iter()
        .map(|(nickname, system_nickname, strid_name)| {
            (
                base(nickname),
                UniverseBase {
                    nickname: base(nickname),
                    system: system(system_nickname),
                    strid_name,
                },
            )
        })
        .collect();

    let system_layouts = [
        SystemLayout {
            nickname: system("li01"),
            bases: vec![
                SystemBase {
                    nickname: "li01_01_base".to_string(),
                    ids_name: 2001,
                    rep_nickname: Some(faction("li_p_grp")),
                    pos: Vector::new(-20_000.0, 0.0, 10_000.0),
                },
                SystemBase {
                    nickname: "li01_02_base".to_string(),
                    ids_name: 2002,
                    rep_nickname: Some(faction("li_n_grp")),
                    pos: Vector::new(20_000.0, 0.0, -40_000.0),
                },
            ],
            wrecks: vec![Wreck {
                nickname: "li01_wreck_1".to_string(),
                loadout: LoadoutNickname("wreck_loadout_1".to_string()),
            }],
        },
        SystemLayout {
            nickname: system("br01"),
            bases: vec![SystemBase {
                nickname: "br01_01_base".to_string(),
                ids_name: 2003,
                rep_nickname: Some(faction("br_p_grp")),
                pos: Vector::default(),
            }],
            wrecks: vec![],
        },
    ];

    let loadouts = [
        ("wreck_loadout_1", vec!["commodity_artifacts"]),
        ("npc_loadout_1", vec!["gun_lootable", "commodity_gold"]),
    ]
    .into_iter()
    .map(|(nickname, cargos)| {
        (
            LoadoutNickname(nickname.to_string()),
            Loadout {
                nickname: LoadoutNickname(nickname.to_string()),
                cargos: cargos
                    .into_iter()
                    .map(|cargo| LoadoutCargo {
                        nickname: item(cargo),
                        count: 1,
                    })
                    .collect(),
            },
        )
    })
    .collect();

    GameConfig {
        commodities: commodities.iter().map(|(good, _)| good.clone()).collect(),
        equipment_commodities: commodities.into_iter().map(|(_, equip)| (equip.nickname.clone(), equip)).collect(),
        equipment_items: vec![
            equip_item("commodity_gold", 4001, "commodity"),
            equip_item("commodity_water", 4002, "commodity"),
            equip_item("commodity_artifacts", 4003, "commodity"),
            equip_item("gun_lootable", 4005, "gun"),
        ],
        ships: vec![ShipGood {
            nickname: item("ge_fighter_package"),
            hull: item("ge_fighter_hull"),
        }],
        ship_hulls: HashMap::from([(
            item("ge_fighter_hull"),
            ShipHull {
                nickname: item("ge_fighter_hull"),
                ship: item("ge_fighter"),
            },
        )]),
        shiparch: HashMap::from([(
            item("ge_fighter"),
            ShipArch {
                nickname: item("ge_fighter"),
                ids_name: 5001,
            },
        )]),
        markets: HashMap::from([
            (
                item("commodity_gold"),
                vec![
                    market_line("li01_01_base", 1.5, true),
                    market_line("li01_02_base", 0.8, false),
                    market_line("br01_01_base", 1.2, true),
                ],
            ),
            (item("commodity_water"), vec![market_line("li01_01_base", 1.0, true)]),
        ]),
        universe_bases,
        universe_systems: universe_systems.into_iter().map(|s| (s.nickname.clone(), s)).collect(),
        system_layouts: system_layouts.into_iter().map(|l| (l.nickname.clone(), l)).collect(),
        groups: vec![
            Group {
                nickname: faction("li_p_grp"),
                ids_name: 3001,
            },
            Group {
                nickname: faction("li_n_grp"),
                ids_name: 3002,
            },
            Group {
                nickname: faction("br_p_grp"),
                ids_name: 3003,
            },
        ],
        loadouts,
        npc_ships: vec![NpcShipArch {
            nickname: "li_n_fighter".to_string(),
            loadout: LoadoutNickname("npc_loadout_1".to_string()),
        }],
        server_mod: None,
        crafting: None,
    }
}

pub fn test_infotexts() -> Infotexts {
    let names = [
        (1001, "New York"),
        (1002, "New London"),
        (2001, "Planet Manhattan"),
        (2002, "Fort Bush"),
        (2003, "Planet New London"),
        (3001, "Liberty Police"),
        (3002, "Liberty Navy"),
        (3003, "Bretonia Police"),
        (4001, "Gold"),
        (4002, "Water"),
        (4003, "Artifacts"),
        (4004, "Crafted Alloy"),
        (4005, "Lootable Gun"),
        (5001, "Starflier"),
    ];
    let infocards = [
        (1101, vec!["Liberty", "The capital system of the Liberty Navy."]),
        (1102, vec!["", "Bretonia"]),
        (4101, vec!["Gold is shiny."]),
        (4105, vec!["A gun found only in wrecks."]),
    ];

    Infotexts {
        names: names.into_iter().map(|(ids, name)| (ids, name.to_string())).collect(),
        infocards: infocards
            .into_iter()
            .map(|(ids, lines)| (ids, lines.into_iter().map(str::to_string).collect()))
            .collect(),
    }
}

pub const UNKNOWN_SHOP_ITEM: HashCode = HashCode(12345);

pub fn shop_record(id: HashCode, quantity: i64, price: i64, sell_price: i64, min_stock: i64, max_stock: i64) -> PlayerShopRecord {
    PlayerShopRecord {
        id,
        quantity,
        price,
        sell_price,
        min_stock,
        max_stock,
    }
}

/// Gold override at li01_01_base (sells for 160, buys for 170), two outposts and one craftable.
///
/// `pob_alpha` sits in li01 at a known position and sells gold for 140; `pob_beta` hides its
/// position and system and has gold below its minimum stock.
pub fn test_server_mod() -> ServerModDataset {
    let hasher = FlHash::new();
    let gold = hasher.hash_nickname("commodity_gold");
    let fighter = hasher.hash_nickname("ge_fighter_package");

    ServerModDataset {
        price_overrides: HashMap::from([(
            item("commodity_gold"),
            vec![PriceOverride {
                base_nickname: base("li01_01_base"),
                base_sells: true,
                price_base_buys_for: 170,
                price_base_sells_for: 160,
            }],
        )]),
        player_owned_bases: vec![
            PlayerBaseRecord {
                nickname: "pob_alpha".to_string(),
                name: "Alpha Station".to_string(),
                pos: Some("1000, 0, -1000".to_string()),
                level: Some(3),
                money: Some(1_000_000),
                health: Some(90),
                defense_mode: Some(1),
                system_hash: Some(hasher.hash_nickname("li01")),
                affiliation_hash: Some(hasher.hash_faction("li_p_grp")),
                shop_items: vec![
                    shop_record(gold, 50, 140, 90, 10, 100),
                    shop_record(fighter, 2, 50_000, 40_000, 0, 5),
                    shop_record(UNKNOWN_SHOP_ITEM, 1, 1, 1, 0, 1),
                ],
                infocard_paragraphs: vec!["Trading outpost of the Alpha consortium.".to_string()],
                srp_faction_hash_list: vec![hasher.hash_faction("li_n_grp")],
                srp_tag_list: vec!["[LN]".to_string()],
                hostile_faction_hash_list: vec![hasher.hash_faction("br_p_grp"), HashCode(7)],
                ..Default::default()
            },
            PlayerBaseRecord {
                nickname: "pob_beta".to_string(),
                name: "Beta Outpost".to_string(),
                shop_items: vec![shop_record(gold, 5, 130, 95, 10, 20)],
                ..Default::default()
            },
        ],
        recipe_products: vec![item("commodity_crafted")],
    }
}
