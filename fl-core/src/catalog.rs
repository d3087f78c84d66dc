use crate::error::Result;
use crate::exporter::Exporter;
use crate::market_merge::{CommodityAtBasesInput, MarketAggregates, MergePipeline};
use fl_domain::{Commodity, GoodsPerBase, InfocardKey};
#[cfg(test)]
use mockall::automock;
use tracing::{event, warn, Level};

/// Decides whether a commodity can actually be bought somewhere.
#[cfg_attr(test, automock)]
pub trait BuyablePredicate {
    fn is_buyable(&self, goods: &GoodsPerBase) -> bool;
}

/// Buyable when at least one listing is not flagged as unreachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyReachableBase;

impl BuyablePredicate for AnyReachableBase {
    fn is_buyable(&self, goods: &GoodsPerBase) -> bool {
        goods.values().any(|good| !good.not_buyable)
    }
}

impl Exporter {
    /// Every commodity in every ship class variant, with all places it trades at.
    pub fn get_commodities(&self) -> Result<Vec<Commodity>> {
        let pipeline = MergePipeline::for_exporter(self);
        let mut commodities = Vec::with_capacity(self.config.commodities.len());

        for good in self.config.commodities.iter() {
            let Some(equipment) = self.config.equipment_commodities.get(&good.equipment) else {
                warn!(commodity = %good.nickname.0, equipment = %good.equipment.0, "commodity without equipment entry, skipping");
                continue;
            };

            let infocard = InfocardKey(good.nickname.0.clone());
            self.export_infocard(infocard.clone(), equipment.ids_info);

            for volume_info in equipment.volumes.iter() {
                let bases = pipeline.merge(&CommodityAtBasesInput {
                    nickname: good.nickname.clone(),
                    price: good.price,
                    volume: volume_info.volume,
                    ship_class: volume_info.ship_class,
                })?;
                let aggregates = MarketAggregates::from_goods(&bases);

                commodities.push(Commodity {
                    nickname: good.nickname.clone(),
                    nickname_hash: self.hasher.hash_nickname(&good.nickname.0),
                    name: self.infocard_name(equipment.ids_name, &good.nickname.0),
                    combinable: good.combinable,
                    volume: volume_info.volume,
                    ship_class: volume_info.ship_class,
                    mass: equipment.mass.unwrap_or_default(),
                    name_id: equipment.ids_name,
                    infocard_id: equipment.ids_info,
                    infocard: infocard.clone(),
                    bases,
                    price_best_base_buys_for: aggregates.price_best_base_buys_for,
                    price_best_base_sells_for: aggregates.price_best_base_sells_for,
                    profit_margin: aggregates.profit_margin,
                });
            }
        }

        event!(Level::INFO, "Exported {} commodity variants", commodities.len());
        Ok(commodities)
    }

    pub fn filter_to_useful_commodities(&self, commodities: Vec<Commodity>) -> Vec<Commodity> {
        commodities
            .into_iter()
            .filter(|commodity| self.buyable.is_buyable(&commodity.bases))
            .collect()
    }
}
