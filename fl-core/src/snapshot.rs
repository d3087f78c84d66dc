use crate::name_lookup::Infotexts;
use anyhow::Context;
use fl_domain::GameConfig;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Game tables plus the localized texts they reference, as written by the config extractor.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ConfigSnapshot {
    pub config: GameConfig,
    #[serde(default)]
    pub infotexts: Infotexts,
}

impl ConfigSnapshot {
    /// Load a config snapshot from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("failed to open snapshot {}", path.display()))?;
        Self::from_reader(BufReader::new(file)).with_context(|| format!("failed to load snapshot {}", path.display()))
    }

    pub fn from_reader<R: Read>(reader: R) -> anyhow::Result<Self> {
        let deserializer = &mut serde_json::Deserializer::from_reader(reader);
        let snapshot = serde_path_to_error::deserialize(deserializer).map_err(|err| {
            let path = err.path().to_string();
            anyhow::Error::new(err.into_inner()).context(format!("invalid snapshot at {}", path))
        })?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name_lookup::NameLookup;
    use fl_domain::{ItemNickname, ShipClass};

    #[test]
    fn loads_minimal_snapshot() {
        let json = r#"{
            "config": {
                "commodities": [{"nickname": "commodity_gold", "equipment": "commodity_gold", "price": 100}],
                "equipment_commodities": {
                    "commodity_gold": {"nickname": "commodity_gold", "ids_name": 1, "ids_info": 2, "mass": null, "volumes": [{"volume": 1.0}]}
                }
            },
            "infotexts": {"names": {"1": "Gold"}}
        }"#;

        let snapshot = ConfigSnapshot::from_reader(json.as_bytes()).unwrap();

        assert_eq!(snapshot.config.commodities[0].nickname, ItemNickname("commodity_gold".to_string()));
        let equipment = snapshot.config.equipment_commodities.get(&ItemNickname("commodity_gold".to_string())).unwrap();
        assert_eq!(equipment.volumes[0].ship_class, ShipClass::ANY);
        assert_eq!(snapshot.infotexts.name(1).as_deref(), Some("Gold"));
        assert!(snapshot.config.server_mod.is_none());
    }

    #[test]
    fn reports_path_of_invalid_field() {
        let json = r#"{"config": {"commodities": [{"nickname": "commodity_gold", "equipment": "commodity_gold", "price": "expensive"}]}}"#;

        let err = ConfigSnapshot::from_reader(json.as_bytes()).unwrap_err();

        assert!(format!("{:#}", err).contains("config.commodities[0].price"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = ConfigSnapshot::from_file("/nonexistent/snapshot.json").unwrap_err();

        assert!(err.to_string().contains("failed to open snapshot"));
    }
}
