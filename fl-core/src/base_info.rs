use crate::name_lookup::{infocard_name, NameLookup};
use crate::sector_coord::vector_to_sector_coord;
use fl_domain::{BaseInfo, BaseNickname, GameConfig, SystemBase, SystemLayout, UniverseBase, UniverseSystem};

/// Finds where a universe base is placed inside its system layout.
///
/// The universe table and the system layouts share no primary key, so implementations have to
/// match on some secondary field.
pub trait BasePlacementJoin {
    fn find_placement<'c>(&self, layout: &'c SystemLayout, universe_base: &UniverseBase) -> Option<&'c SystemBase>;
}

/// Matches placements whose `ids_name` equals the universe base `strid_name`.
///
/// Requires both tables to reference the same localized name id. Bases sharing a display name
/// inside one system are ambiguous; the last placement wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdsNameJoin;

impl BasePlacementJoin for IdsNameJoin {
    fn find_placement<'c>(&self, layout: &'c SystemLayout, universe_base: &UniverseBase) -> Option<&'c SystemBase> {
        layout
            .bases
            .iter()
            .filter(|system_base| system_base.ids_name == universe_base.strid_name)
            .last()
    }
}

/// Region is the headline of the system infocard.
pub fn region_name(names: &dyn NameLookup, system: &UniverseSystem) -> String {
    system
        .ids_info
        .and_then(|ids_info| names.infocard(ids_info))
        .and_then(|lines| lines.into_iter().map(|line| line.trim().to_string()).find(|line| !line.is_empty()))
        .unwrap_or_default()
}

pub fn system_name(names: &dyn NameLookup, system: &UniverseSystem) -> String {
    infocard_name(names, system.strid_name, &system.nickname.0)
}

pub struct BaseInfoResolver<'a> {
    config: &'a GameConfig,
    names: &'a dyn NameLookup,
    join: &'a dyn BasePlacementJoin,
}

impl<'a> BaseInfoResolver<'a> {
    pub fn new(config: &'a GameConfig, names: &'a dyn NameLookup, join: &'a dyn BasePlacementJoin) -> Self {
        Self { config, names, join }
    }

    /// Best effort: unknown bases (including pseudo-bases) resolve to an empty `BaseInfo` and every
    /// broken link leaves its field empty.
    pub fn resolve(&self, base_nickname: &BaseNickname) -> BaseInfo {
        let mut result = BaseInfo::default();

        let Some(universe_base) = self.config.universe_bases.get(base_nickname) else {
            return result;
        };

        result.base_name = infocard_name(self.names, universe_base.strid_name, &base_nickname.0);

        let system = self.config.universe_systems.get(&universe_base.system);
        if let Some(system) = system {
            result.system_name = system_name(self.names, system);
            result.region = region_name(self.names, system);
        }

        let placement = self
            .config
            .system_layouts
            .get(&universe_base.system)
            .and_then(|layout| self.join.find_placement(layout, universe_base));

        if let Some(placement) = placement {
            result.base_pos = placement.pos;
            if let Some(system) = system {
                result.sector_coord = vector_to_sector_coord(system, &placement.pos);
            }

            let faction = placement.rep_nickname.as_ref().and_then(|rep| self.config.group(rep));
            if let Some(group) = faction {
                result.faction_name = infocard_name(self.names, group.ids_name, &group.nickname.0);
            }
        }

        result
    }
}
