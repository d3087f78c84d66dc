use anyhow::Result;
use fl_core::{aggregate_pob_goods, ConfigSnapshot, Exporter, ExporterSettings, InMemoryInfocards};
use fl_domain::{Base, Commodity, Infocard, InfocardKey, PoB, PoBGood};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::sync::Arc;
use tracing::{event, Level};

/// Everything one catalog build produces.
#[derive(Debug, Clone)]
pub struct CatalogData {
    pub commodities: Vec<Commodity>,
    pub lootable_base: Base,
    pub pobs: Vec<PoB>,
    pub infocards: BTreeMap<InfocardKey, Infocard>,
}

#[derive(Serialize)]
struct CatalogExport<'a> {
    commodities: &'a [Commodity],
    lootable_base: &'a Base,
    pobs: &'a [PoB],
    pob_goods: Vec<PoBGood<'a>>,
    infocards: &'a BTreeMap<InfocardKey, Infocard>,
}

impl CatalogData {
    pub fn build(snapshot: ConfigSnapshot, settings: ExporterSettings, useful_only: bool) -> Result<Self> {
        let infocards = Arc::new(InMemoryInfocards::new());
        let exporter = Exporter::new(Arc::new(snapshot.config), Arc::new(snapshot.infotexts), infocards.clone()).with_settings(settings);

        let mut commodities = exporter.get_commodities()?;
        if useful_only {
            commodities = exporter.filter_to_useful_commodities(commodities);
        }
        let lootable_base = exporter.lootable_base();
        let pobs = exporter.get_pobs()?;

        event!(
            Level::INFO,
            "Built catalog with {} commodities, {} player bases and {} infocards",
            commodities.len(),
            pobs.len(),
            infocards.len()
        );

        Ok(Self {
            commodities,
            lootable_base,
            pobs,
            infocards: infocards.entries(),
        })
    }

    pub fn pob_goods(&self) -> Vec<PoBGood<'_>> {
        aggregate_pob_goods(&self.pobs)
    }

    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        let export = CatalogExport {
            commodities: &self.commodities,
            lootable_base: &self.lootable_base,
            pobs: &self.pobs,
            pob_goods: self.pob_goods(),
            infocards: &self.infocards,
        };
        serde_json::to_writer_pretty(&mut writer, &export)?;
        writer.flush()?;
        Ok(())
    }
}
