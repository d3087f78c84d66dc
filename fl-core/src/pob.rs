use crate::base_info::{region_name, system_name};
use crate::error::Result;
use crate::exporter::Exporter;
use crate::sector_coord::{parse_position, vector_to_sector_coord};
use fl_domain::{
    DefenseMode, Group, HashCode, InfocardBuilder, InfocardKey, InfocardPhrase, ItemNickname, PlayerBaseRecord, PlayerShopRecord, PoB, PoBGood, PoBGoodBase,
    PobShopItem, ShopItem, UniverseSystem, Vector,
};
use itertools::Itertools;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

pub type PobBuyableIndex = HashMap<ItemNickname, Vec<PobShopItem>>;

/// System, faction and position of an outpost, as far as the owner made them visible.
struct PobLocation<'a> {
    system: Option<&'a UniverseSystem>,
    faction: Option<&'a Group>,
    base_pos: Option<Vector>,
}

impl<'a> PobLocation<'a> {
    fn sector_coord(&self) -> Option<String> {
        match (self.system, self.base_pos) {
            (Some(system), Some(pos)) => Some(vector_to_sector_coord(system, &pos)),
            _ => None,
        }
    }
}

impl Exporter {
    /// All player-owned bases of the server mod. Empty without one.
    pub fn get_pobs(&self) -> Result<Vec<PoB>> {
        let Some(server_mod) = &self.config.server_mod else {
            return Ok(vec![]);
        };

        let pobs = server_mod
            .player_owned_bases
            .iter()
            .map(|record| self.build_pob(record))
            .collect::<Result<Vec<_>>>()?;

        debug!(pobs = pobs.len(), "exported player owned bases");
        Ok(pobs)
    }

    /// Outpost shop lines grouped by the item they trade. Computed once per exporter.
    pub fn pob_buyable(&self) -> Result<&PobBuyableIndex> {
        if let Some(index) = self.pob_buyable.get() {
            return Ok(index);
        }
        let index = self.build_pob_buyable()?;
        Ok(self.pob_buyable.get_or_init(|| index))
    }

    fn build_pob_buyable(&self) -> Result<PobBuyableIndex> {
        let mut index = PobBuyableIndex::new();
        let Some(server_mod) = &self.config.server_mod else {
            return Ok(index);
        };

        for record in server_mod.player_owned_bases.iter() {
            let location = self.locate_pob(record)?;

            for shop_record in record.shop_items.iter() {
                let Some(shop_item) = self.resolve_shop_item(shop_record, &record.nickname) else {
                    continue;
                };

                let pob_item = PobShopItem {
                    pob_name: record.name.clone(),
                    pob_nickname: record.nickname.clone(),
                    system_nickname: location.system.map(|system| system.nickname.clone()),
                    system_name: location.system.map(|system| system_name(self.names.as_ref(), system)).unwrap_or_default(),
                    region: location.system.map(|system| region_name(self.names.as_ref(), system)),
                    faction_nickname: location.faction.map(|group| group.nickname.clone()),
                    faction_name: location
                        .faction
                        .map(|group| self.infocard_name(group.ids_name, &group.nickname.0))
                        .unwrap_or_default(),
                    base_pos: location.base_pos,
                    sector_coord: location.sector_coord(),
                    shop_item,
                };

                index.entry(pob_item.shop_item.nickname.clone()).or_default().push(pob_item);
            }
        }

        Ok(index)
    }

    fn locate_pob(&self, record: &PlayerBaseRecord) -> Result<PobLocation<'_>> {
        let hash_index = self.hash_index();
        let base_pos = record.pos.as_deref().map(parse_position).transpose()?;

        Ok(PobLocation {
            system: record.system_hash.and_then(|hash| hash_index.resolve_system(hash)),
            faction: record.affiliation_hash.and_then(|hash| hash_index.resolve_faction(hash)),
            base_pos,
        })
    }

    /// Shop lines reference items by hash only. Goods are tried first, then ship packages.
    fn resolve_shop_item(&self, record: &PlayerShopRecord, pob_nickname: &str) -> Option<ShopItem> {
        let hash_index = self.hash_index();

        let (nickname, name, category) = if let Some(item) = hash_index.resolve_good(record.id) {
            (item.nickname.clone(), self.infocard_name(item.ids_name, &item.nickname.0), item.category.clone())
        } else if let Some(hull) = hash_index.resolve_ship(record.id).and_then(|ship| self.config.ship_hulls.get(&ship.hull)) {
            let ship_nickname = hull.ship.clone();
            let name = match self.config.shiparch.get(&ship_nickname) {
                Some(shiparch) => self.infocard_name(shiparch.ids_name, &ship_nickname.0),
                None => format!("[{}]", ship_nickname.0),
            };
            (ship_nickname, name, "ship".to_string())
        } else {
            warn!(shop_item_id = record.id.0, pob = pob_nickname, "unidentified shop item");
            return None;
        };

        Some(ShopItem {
            id: record.id,
            quantity: record.quantity,
            price: record.price,
            sell_price: record.sell_price,
            min_stock: record.min_stock,
            max_stock: record.max_stock,
            nickname,
            name,
            category,
        })
    }

    fn build_pob(&self, record: &PlayerBaseRecord) -> Result<PoB> {
        let location = self.locate_pob(record)?;

        let shop_items = record
            .shop_items
            .iter()
            .filter_map(|shop_record| self.resolve_shop_item(shop_record, &record.nickname))
            .collect();

        let infocard = self.pob_infocard(record);
        self.infocards.register(InfocardKey(record.nickname.clone()), infocard.clone());

        Ok(PoB {
            nickname: record.nickname.clone(),
            name: record.name.clone(),
            pos: record.pos.clone(),
            level: record.level,
            money: record.money,
            health: record.health,
            defense_mode: record.defense_mode.map(DefenseMode::from),
            system_nickname: location.system.map(|system| system.nickname.clone()),
            system_name: location.system.map(|system| system_name(self.names.as_ref(), system)),
            faction_nickname: location.faction.map(|group| group.nickname.clone()),
            faction_name: location.faction.map(|group| self.infocard_name(group.ids_name, &group.nickname.0)),
            forum_thread_url: record.forum_thread_url.clone(),
            base_pos: location.base_pos,
            sector_coord: location.sector_coord(),
            region: location.system.map(|system| region_name(self.names.as_ref(), system)),
            shop_items,
            infocard,
        })
    }

    fn pob_infocard(&self, record: &PlayerBaseRecord) -> fl_domain::Infocard {
        let mut sb = InfocardBuilder::default();
        sb.write_line_str(record.name.clone());
        sb.write_line_str("");

        if record.pos.is_none() && record.infocard_paragraphs.is_empty() {
            sb.write_line(InfocardPhrase::bold("infocard:"));
            sb.write_line_str("no access (toggle pos permission in pob account manager)");
            sb.write_line_str("");
        }

        for paragraph in record.infocard_paragraphs.iter() {
            sb.write_line_str(paragraph.clone());
            sb.write_line_str("");
        }

        match record.defense_mode {
            Some(defense_mode) => {
                sb.write_line(InfocardPhrase::bold("Defense mode:"));
                sb.write_line_str(DefenseMode::from(defense_mode).to_string());
            }
            None => {
                sb.write_line(InfocardPhrase::bold("docking permissions:"));
                sb.write_line_str("no access (toggle defense mode in pob account manager)");
            }
        }
        sb.write_line_str("");

        let docking_sections = [
            (
                "Docking alliances (SRP, ignore rep):",
                &record.srp_faction_hash_list,
                &record.srp_tag_list,
                &record.srp_name_list,
            ),
            (
                "Docking alliances (IFF rep still applies):",
                &record.ally_faction_hash_list,
                &record.ally_tag_list,
                &record.ally_name_list,
            ),
            (
                "Docking enemies:",
                &record.hostile_faction_hash_list,
                &record.hostile_tag_list,
                &record.hostile_name_list,
            ),
        ];

        for (title, faction_hashes, tags, names) in docking_sections {
            if faction_hashes.is_empty() && tags.is_empty() && names.is_empty() {
                continue;
            }
            sb.write_line(InfocardPhrase::bold(title));
            sb.write_line_str(format!("factions: [{}]", self.faction_names(faction_hashes, &record.nickname)));
            sb.write_line_str(format!("tags: [{}]", tags.join(", ")));
            sb.write_line_str(format!("names: [{}]", names.join(", ")));
            sb.write_line_str("");
        }

        sb.build()
    }

    fn faction_names(&self, faction_hashes: &[HashCode], pob_nickname: &str) -> String {
        let hash_index = self.hash_index();
        faction_hashes
            .iter()
            .filter_map(|hash| match hash_index.resolve_faction(*hash) {
                Some(group) => Some(self.infocard_name(group.ids_name, &group.nickname.0)),
                None => {
                    warn!(hash = hash.0, pob = pob_nickname, "faction hash is invalid");
                    None
                }
            })
            .join(", ")
    }
}

/// Cross-outpost view of every traded item, sorted by item nickname.
pub fn aggregate_pob_goods(pobs: &[PoB]) -> Vec<PoBGood<'_>> {
    let mut goods_by_nickname: BTreeMap<&ItemNickname, PoBGood<'_>> = BTreeMap::new();

    for pob in pobs.iter() {
        for shop_item in pob.shop_items.iter() {
            let good = goods_by_nickname.entry(&shop_item.nickname).or_insert_with(|| PoBGood {
                nickname: shop_item.nickname.clone(),
                name: shop_item.name.clone(),
                category: shop_item.category.clone(),
                total_buyable_from_bases: 0,
                total_sellable_to_bases: 0,
                best_price_to_buy: None,
                best_price_to_sell: None,
                bases: vec![],
                any_base_sells: false,
                any_base_buys: false,
            });

            if shop_item.base_sells() {
                good.any_base_sells = true;
                good.total_buyable_from_bases += shop_item.quantity - shop_item.min_stock;
                good.best_price_to_buy = Some(good.best_price_to_buy.map_or(shop_item.price, |best| best.min(shop_item.price)));
            }
            if shop_item.base_buys() {
                good.any_base_buys = true;
                good.total_sellable_to_bases += shop_item.max_stock - shop_item.quantity;
                good.best_price_to_sell = Some(good.best_price_to_sell.map_or(shop_item.sell_price, |best| best.max(shop_item.sell_price)));
            }

            good.bases.push(PoBGoodBase { shop_item, base: pob });
        }
    }

    goods_by_nickname.into_values().collect()
}
