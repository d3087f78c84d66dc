use crate::error::Result;
use crate::exporter::Exporter;
use crate::loot::{lootable_base_nickname, LOOTABLE_BASE_NAME, LOOTABLE_FACTION_NAME, NEVERWHERE};
use fl_domain::{BaseInfo, BaseNickname, GoodAtBase, GoodsPerBase, ItemNickname, PriceOverride, ShipClass, Vector};
use std::collections::{HashMap, HashSet};
use tracing::{debug_span, error, trace};

pub const CRAFTS_BASE_NICKNAME: &str = "pob_crafts";

#[derive(Debug, Clone, PartialEq)]
pub struct CommodityAtBasesInput {
    pub nickname: ItemNickname,
    pub price: i64,
    pub volume: f64,
    pub ship_class: ShipClass,
}

/// One source of per-base listings. Stages run in order and overwrite entries of earlier stages
/// for the same base.
pub trait MergeStage {
    fn name(&self) -> &'static str;

    fn merge_into(&self, commodity: &CommodityAtBasesInput, goods: &mut GoodsPerBase) -> Result<()>;
}

/// Static market table of the game files.
pub struct StaticMarketStage<'a> {
    exporter: &'a Exporter,
}

impl<'a> MergeStage for StaticMarketStage<'a> {
    fn name(&self) -> &'static str {
        "static_market"
    }

    fn merge_into(&self, commodity: &CommodityAtBasesInput, goods: &mut GoodsPerBase) -> Result<()> {
        let Some(market_lines) = self.exporter.config.markets.get(&commodity.nickname) else {
            return Ok(());
        };
        let server_mod_active = self.exporter.is_server_mod_active();

        for market_line in market_lines.iter() {
            let mut good = GoodAtBase::new(market_line.base.clone(), commodity.volume, commodity.ship_class);
            good.base_sells = market_line.base_sells;
            good.price_base_sells_for = (market_line.price_modifier * commodity.price as f64).round() as i64;
            good.price_base_buys_for = if server_mod_active {
                market_line.server_sell_price.unwrap_or(good.price_base_sells_for)
            } else {
                good.price_base_sells_for
            };
            good.level_required = market_line.level_required;
            good.rep_required = market_line.rep_required;

            self.exporter.locate_physical_base(&mut good);
            goods.insert(good.base_nickname.clone(), good);
        }
        Ok(())
    }
}

/// Authoritative prices reported by the running server.
pub struct PriceOverrideStage<'a> {
    exporter: &'a Exporter,
    overrides: &'a HashMap<ItemNickname, Vec<PriceOverride>>,
}

impl<'a> MergeStage for PriceOverrideStage<'a> {
    fn name(&self) -> &'static str {
        "server_override"
    }

    fn merge_into(&self, commodity: &CommodityAtBasesInput, goods: &mut GoodsPerBase) -> Result<()> {
        let Some(overrides) = self.overrides.get(&commodity.nickname) else {
            return Ok(());
        };

        for price_override in overrides.iter() {
            let span = debug_span!("price_override", base = %price_override.base_nickname.0, commodity = %commodity.nickname.0);
            let _enter = span.enter();

            let mut good = GoodAtBase::new(price_override.base_nickname.clone(), commodity.volume, commodity.ship_class);
            good.base_sells = price_override.base_sells;
            good.price_base_buys_for = price_override.price_base_buys_for;
            good.price_base_sells_for = price_override.price_base_sells_for;
            good.is_server_side_override = true;

            self.exporter.locate_physical_base(&mut good);
            trace!(buys_for = good.price_base_buys_for, sells_for = good.price_base_sells_for, "applied server override");
            goods.insert(good.base_nickname.clone(), good);
        }
        Ok(())
    }
}

/// Goods produced by crafting recipes, listed under one pseudo-base.
pub struct CraftingStage {
    craftable: HashSet<ItemNickname>,
    base_name: &'static str,
}

impl MergeStage for CraftingStage {
    fn name(&self) -> &'static str {
        "crafting"
    }

    fn merge_into(&self, commodity: &CommodityAtBasesInput, goods: &mut GoodsPerBase) -> Result<()> {
        if !self.craftable.contains(&commodity.nickname) {
            return Ok(());
        }

        let nickname = BaseNickname(CRAFTS_BASE_NICKNAME.to_string());
        let mut good = GoodAtBase::new(nickname.clone(), commodity.volume, commodity.ship_class);
        good.base_sells = true;
        good.is_server_side_override = true;
        good.base_info = BaseInfo {
            base_name: self.base_name.to_string(),
            system_name: NEVERWHERE.to_string(),
            region: NEVERWHERE.to_string(),
            faction_name: NEVERWHERE.to_string(),
            ..Default::default()
        };

        goods.insert(nickname, good);
        Ok(())
    }
}

/// Goods salvageable from wrecks or dropped by NPCs.
pub struct LootStage<'a> {
    findable_in_loot: &'a HashSet<ItemNickname>,
}

impl<'a> MergeStage for LootStage<'a> {
    fn name(&self) -> &'static str {
        "loot"
    }

    fn merge_into(&self, commodity: &CommodityAtBasesInput, goods: &mut GoodsPerBase) -> Result<()> {
        if !self.findable_in_loot.contains(&commodity.nickname) {
            return Ok(());
        }

        let mut good = GoodAtBase::new(lootable_base_nickname(), commodity.volume, commodity.ship_class);
        good.base_sells = true;
        good.base_info = BaseInfo {
            base_name: LOOTABLE_BASE_NAME.to_string(),
            system_name: NEVERWHERE.to_string(),
            region: NEVERWHERE.to_string(),
            faction_name: LOOTABLE_FACTION_NAME.to_string(),
            ..Default::default()
        };

        goods.insert(good.base_nickname.clone(), good);
        Ok(())
    }
}

/// Shops of player-owned bases. Prices are live, so entries count as server side overrides.
pub struct PobShopStage<'a> {
    exporter: &'a Exporter,
}

impl<'a> MergeStage for PobShopStage<'a> {
    fn name(&self) -> &'static str {
        "pob_shop"
    }

    fn merge_into(&self, commodity: &CommodityAtBasesInput, goods: &mut GoodsPerBase) -> Result<()> {
        let Some(shop_lines) = self.exporter.pob_buyable()?.get(&commodity.nickname) else {
            return Ok(());
        };

        for line in shop_lines.iter() {
            let mut good = GoodAtBase::new(BaseNickname(line.pob_nickname.clone()), commodity.volume, commodity.ship_class);
            good.base_sells = line.shop_item.base_sells();
            good.is_server_side_override = true;
            good.price_base_buys_for = line.shop_item.sell_price;
            good.price_base_sells_for = line.shop_item.price;
            good.base_info = BaseInfo {
                base_name: format!("(PoB) {}", line.pob_name),
                system_name: line.system_name.clone(),
                region: line.region.clone().unwrap_or_default(),
                faction_name: line.faction_name.clone(),
                base_pos: Vector::default(),
                sector_coord: String::new(),
            };
            if let (Some(base_pos), Some(sector_coord)) = (line.base_pos, &line.sector_coord) {
                good.base_info.base_pos = base_pos;
                good.base_info.sector_coord = sector_coord.clone();
            }

            goods.insert(good.base_nickname.clone(), good);
        }
        Ok(())
    }
}

/// Ordered merge stages, assembled from the datasets present in the config.
pub struct MergePipeline<'a> {
    stages: Vec<Box<dyn MergeStage + 'a>>,
}

impl<'a> MergePipeline<'a> {
    pub fn new(stages: Vec<Box<dyn MergeStage + 'a>>) -> Self {
        Self { stages }
    }

    pub fn for_exporter(exporter: &'a Exporter) -> Self {
        let config = exporter.config();
        let mut stages: Vec<Box<dyn MergeStage + 'a>> = vec![Box::new(StaticMarketStage { exporter })];

        if let Some(server_mod) = &config.server_mod {
            stages.push(Box::new(PriceOverrideStage {
                exporter,
                overrides: &server_mod.price_overrides,
            }));
        }

        if config.server_mod.is_some() || config.crafting.is_some() {
            let server_products = config.server_mod.iter().flat_map(|server_mod| server_mod.recipe_products.iter());
            let crafting_products = config.crafting.iter().flat_map(|crafting| crafting.products.iter());
            stages.push(Box::new(CraftingStage {
                craftable: server_products.chain(crafting_products).cloned().collect(),
                base_name: if config.server_mod.is_some() { "PoB crafts" } else { "Crafts" },
            }));
        }

        stages.push(Box::new(LootStage {
            findable_in_loot: exporter.findable_in_loot(),
        }));

        if config.server_mod.is_some() {
            stages.push(Box::new(PobShopStage { exporter }));
        }

        Self::new(stages)
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    pub fn merge_into(&self, commodity: &CommodityAtBasesInput, goods: &mut GoodsPerBase) -> Result<()> {
        for stage in self.stages.iter() {
            stage.merge_into(commodity, goods).inspect_err(|err| {
                error!(commodity = %commodity.nickname.0, stage = stage.name(), error = %err, "merge stage failed");
            })?;
        }
        Ok(())
    }

    pub fn merge(&self, commodity: &CommodityAtBasesInput) -> Result<GoodsPerBase> {
        let mut goods = GoodsPerBase::new();
        self.merge_into(commodity, &mut goods)?;
        Ok(goods)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarketAggregates {
    pub price_best_base_buys_for: i64,
    pub price_best_base_sells_for: i64,
    pub profit_margin: i64,
}

impl MarketAggregates {
    /// Best price a base pays, cheapest price a selling base asks (zero meaning none) and the
    /// margin between them when both are known.
    pub fn from_goods(goods: &GoodsPerBase) -> Self {
        let price_best_base_buys_for = goods.values().map(|good| good.price_base_buys_for).max().unwrap_or(0).max(0);
        let price_best_base_sells_for = goods
            .values()
            .filter(|good| good.base_sells && good.price_base_sells_for > 0)
            .map(|good| good.price_base_sells_for)
            .min()
            .unwrap_or(0);

        let profit_margin = if price_best_base_buys_for > 0 && price_best_base_sells_for > 0 {
            price_best_base_buys_for - price_best_base_sells_for
        } else {
            0
        };

        Self {
            price_best_base_buys_for,
            price_best_base_sells_for,
            profit_margin,
        }
    }
}
