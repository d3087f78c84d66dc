use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use fl_domain::{Commodity, GoodAtBase};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use thousands::Separable;

fn display_base(good: &GoodAtBase) -> String {
    if good.base_info.base_name.is_empty() {
        good.base_nickname.0.clone()
    } else {
        format!("{} ({})", good.base_info.base_name, good.base_info.system_name)
    }
}

fn cheapest_seller(commodity: &Commodity) -> Option<&GoodAtBase> {
    commodity
        .bases
        .values()
        .find(|good| good.base_sells && good.price_base_sells_for == commodity.price_best_base_sells_for)
}

fn best_buyer(commodity: &Commodity) -> Option<&GoodAtBase> {
    commodity
        .bases
        .values()
        .find(|good| good.price_base_buys_for == commodity.price_best_base_buys_for)
}

/// Table of the commodities with the highest profit per cargo unit.
pub fn render_overview(commodities: &[Commodity], limit: usize) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .force_no_tty()
        .enforce_styling()
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Commodity",
            "Ship Class",
            "Volume",
            "Buy At",
            "Price",
            "Sell At",
            "Price",
            "Margin",
            "Margin / Vol",
        ]);

    let most_profitable = commodities
        .iter()
        .filter(|commodity| commodity.profit_margin > 0)
        .sorted_by_key(|commodity| (OrderedFloat(-commodity.profit_margin_per_volume()), commodity.key()))
        .take(limit);

    for commodity in most_profitable {
        let buy_at = cheapest_seller(commodity).map(display_base).unwrap_or_else(|| "---".to_string());
        let sell_at = best_buyer(commodity).map(display_base).unwrap_or_else(|| "---".to_string());

        table.add_row(vec![
            commodity.name.clone(),
            commodity.ship_class.0.to_string(),
            commodity.volume.to_string(),
            buy_at,
            commodity.price_best_base_sells_for.separate_with_commas(),
            sell_at,
            commodity.price_best_base_buys_for.separate_with_commas(),
            commodity.profit_margin.separate_with_commas(),
            format!("{:.2}", commodity.profit_margin_per_volume()),
        ]);
    }

    table.to_string()
}
