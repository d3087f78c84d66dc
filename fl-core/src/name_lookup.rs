use fl_domain::InfocardLine;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Localized text lookup by resource id.
#[cfg_attr(test, automock)]
pub trait NameLookup {
    fn name(&self, ids: i32) -> Option<String>;

    fn infocard(&self, ids: i32) -> Option<Vec<String>>;
}

/// Resolves a display name, falling back to the bracketed nickname so unresolved entries stay
/// recognizable.
pub fn infocard_name(names: &dyn NameLookup, ids_name: i32, nickname: &str) -> String {
    names.name(ids_name).unwrap_or_else(|| format!("[{}]", nickname))
}

pub fn infocard_lines(names: &dyn NameLookup, ids_info: i32) -> Vec<InfocardLine> {
    names
        .infocard(ids_info)
        .unwrap_or_default()
        .into_iter()
        .map(InfocardLine::simple)
        .collect()
}

/// Name and infocard tables as shipped in a config snapshot.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Infotexts {
    pub names: HashMap<i32, String>,
    pub infocards: HashMap<i32, Vec<String>>,
}

impl NameLookup for Infotexts {
    fn name(&self, ids: i32) -> Option<String> {
        self.names.get(&ids).cloned()
    }

    fn infocard(&self, ids: i32) -> Option<Vec<String>> {
        self.infocards.get(&ids).cloned()
    }
}
