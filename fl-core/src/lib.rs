pub mod base_info;
pub mod catalog;
pub mod error;
pub mod exporter;
pub mod flhash;
pub mod hash_index;
pub mod infocard_sink;
pub mod loot;
pub mod market_merge;
pub mod name_lookup;
pub mod pob;
pub mod sector_coord;
pub mod snapshot;

pub use catalog::{AnyReachableBase, BuyablePredicate};
pub use error::CatalogError;
pub use exporter::{Exporter, ExporterSettings};
pub use infocard_sink::{InMemoryInfocards, InfocardSink};
pub use name_lookup::{Infotexts, NameLookup};
pub use pob::aggregate_pob_goods;
pub use snapshot::ConfigSnapshot;

#[cfg(test)]
pub mod test_objects;
