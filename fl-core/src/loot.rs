use crate::exporter::Exporter;
use fl_domain::{Base, BaseNickname, CommodityKey, InfocardBuilder, InfocardKey, ItemNickname, MarketGood, ShipClass, SystemNickname};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

pub const LOOTABLE_BASE_NICKNAME: &str = "base_loots";
pub const LOOTABLE_BASE_NAME: &str = "Lootable";
pub const LOOTABLE_FACTION_NAME: &str = "Wrecks and Missions";
pub const NEVERWHERE: &str = "Neverwhere";

pub fn lootable_base_nickname() -> BaseNickname {
    BaseNickname(LOOTABLE_BASE_NICKNAME.to_string())
}

impl Exporter {
    /// Items that can be salvaged from wrecks or dropped by NPC ships.
    pub fn findable_in_loot(&self) -> &HashSet<ItemNickname> {
        self.loot_index.get_or_init(|| {
            let wreck_loadouts = self
                .config
                .system_layouts
                .values()
                .flat_map(|layout| layout.wrecks.iter())
                .map(|wreck| &wreck.loadout);
            let npc_loadouts = self.config.npc_ships.iter().map(|npc| &npc.loadout);

            let items: HashSet<ItemNickname> = wreck_loadouts
                .chain(npc_loadouts)
                .filter_map(|loadout| self.config.loadouts.get(loadout))
                .flat_map(|loadout| loadout.cargos.iter())
                .map(|cargo| cargo.nickname.clone())
                .collect();

            debug!(items = items.len(), "indexed lootable items");
            items
        })
    }

    /// Pseudo-base listing everything obtainable from loot.
    pub fn lootable_base(&self) -> Base {
        let infocard_key = InfocardKey(LOOTABLE_BASE_NICKNAME.to_string());

        let mut infocard = InfocardBuilder::default();
        infocard.write_line_str(LOOTABLE_BASE_NAME);
        infocard.write_line_str("This is only a pseudo base to show the availability of lootable content.");
        infocard.write_line_str("The content is findable in wrecks or drops from ships at missions.");
        let infocard = infocard.build();
        self.infocards.register(infocard_key.clone(), infocard.clone());

        let market_goods: BTreeMap<CommodityKey, MarketGood> = self
            .findable_in_loot()
            .iter()
            .map(|nickname| {
                let good = self.lootable_market_good(nickname);
                (CommodityKey::new(nickname, good.ship_class), good)
            })
            .collect();

        Base {
            name: LOOTABLE_BASE_NAME.to_string(),
            nickname: lootable_base_nickname(),
            infocard_key,
            system_nickname: SystemNickname(NEVERWHERE.to_string()),
            system: NEVERWHERE.to_string(),
            region: NEVERWHERE.to_string(),
            faction_name: LOOTABLE_FACTION_NAME.to_string(),
            archetypes: vec![],
            market_goods,
            infocard,
        }
    }

    fn lootable_market_good(&self, nickname: &ItemNickname) -> MarketGood {
        let (name, category) = match self.config.equipment_item(nickname) {
            Some(item) => (self.infocard_name(item.ids_name, &nickname.0), Some(item.category.as_str())),
            None => match self.config.equipment_commodities.get(nickname) {
                Some(commodity) => (self.infocard_name(commodity.ids_name, &nickname.0), Some("commodity")),
                None => (format!("[{}]", nickname.0), None),
            },
        };

        let r#type = match category {
            Some(category) if !category.is_empty() => format!("{} loot", category),
            _ => "lootable".to_string(),
        };

        MarketGood {
            nickname: nickname.clone(),
            nickname_hash: self.hasher.hash_nickname(&nickname.0),
            name,
            infocard: InfocardKey(nickname.0.clone()),
            base_sells: true,
            r#type,
            ship_class: ShipClass::ANY,
            is_server_side_override: true,
        }
    }
}
