use crate::base_info::{BaseInfoResolver, BasePlacementJoin, IdsNameJoin};
use crate::catalog::{AnyReachableBase, BuyablePredicate};
use crate::flhash::{FlHash, NicknameHasher};
use crate::hash_index::HashIndex;
use crate::infocard_sink::InfocardSink;
use crate::name_lookup::{infocard_lines, infocard_name, NameLookup};
use crate::pob::PobBuyableIndex;
use fl_domain::{BaseNickname, GameConfig, GoodAtBase, InfocardKey, ItemNickname};
use std::cell::OnceCell;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct ExporterSettings {
    /// Bases a player can actually dock at. `None` disables the not-buyable flagging.
    pub reachable_bases: Option<HashSet<BaseNickname>>,
}

/// Builds the trade catalog from one config snapshot.
///
/// Lookup caches are filled on first use and kept for the lifetime of the exporter; the config is
/// treated as immutable in the meantime. The caches are not thread-safe, so an exporter runs one
/// build at a time.
pub struct Exporter {
    pub(crate) config: Arc<GameConfig>,
    pub(crate) names: Arc<dyn NameLookup>,
    pub(crate) infocards: Arc<dyn InfocardSink>,
    pub(crate) hasher: Arc<dyn NicknameHasher>,
    pub(crate) placement_join: Arc<dyn BasePlacementJoin>,
    pub(crate) buyable: Arc<dyn BuyablePredicate>,
    pub(crate) settings: ExporterSettings,

    pub(crate) hash_index: OnceCell<HashIndex>,
    pub(crate) loot_index: OnceCell<HashSet<ItemNickname>>,
    pub(crate) pob_buyable: OnceCell<PobBuyableIndex>,
}

impl Exporter {
    pub fn new(config: Arc<GameConfig>, names: Arc<dyn NameLookup>, infocards: Arc<dyn InfocardSink>) -> Self {
        Self {
            config,
            names,
            infocards,
            hasher: Arc::new(FlHash::new()),
            placement_join: Arc::new(IdsNameJoin),
            buyable: Arc::new(AnyReachableBase),
            settings: ExporterSettings::default(),
            hash_index: OnceCell::new(),
            loot_index: OnceCell::new(),
            pob_buyable: OnceCell::new(),
        }
    }

    pub fn with_settings(mut self, settings: ExporterSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_hasher(mut self, hasher: Arc<dyn NicknameHasher>) -> Self {
        self.hasher = hasher;
        self
    }

    pub fn with_placement_join(mut self, placement_join: Arc<dyn BasePlacementJoin>) -> Self {
        self.placement_join = placement_join;
        self
    }

    pub fn with_buyable_predicate(mut self, buyable: Arc<dyn BuyablePredicate>) -> Self {
        self.buyable = buyable;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn hash_index(&self) -> &HashIndex {
        self.hash_index
            .get_or_init(|| HashIndex::build(&self.config, self.hasher.as_ref(), self.names.as_ref(), self.infocards.as_ref()))
    }

    pub fn base_info_resolver(&self) -> BaseInfoResolver<'_> {
        BaseInfoResolver::new(&self.config, self.names.as_ref(), self.placement_join.as_ref())
    }

    pub fn infocard_name(&self, ids_name: i32, nickname: &str) -> String {
        infocard_name(self.names.as_ref(), ids_name, nickname)
    }

    pub(crate) fn export_infocard(&self, key: InfocardKey, ids_info: i32) {
        self.infocards.register(key, infocard_lines(self.names.as_ref(), ids_info));
    }

    pub fn is_server_mod_active(&self) -> bool {
        self.config.server_mod.is_some()
    }

    /// Attaches location metadata to an entry for a physical base and flags it when the base is
    /// outside the reachable set.
    pub(crate) fn locate_physical_base(&self, good: &mut GoodAtBase) {
        good.base_info = self.base_info_resolver().resolve(&good.base_nickname);

        if let Some(reachable_bases) = &self.settings.reachable_bases {
            if !reachable_bases.contains(&good.base_nickname) {
                good.not_buyable = true;
            }
        }
    }
}
