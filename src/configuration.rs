use fl_core::ExporterSettings;
use fl_domain::BaseNickname;
use serde::Deserialize;

/// Engine settings read from `TRADE_CATALOG_*` environment variables.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CatalogConfiguration {
    /// Comma separated base nicknames players can dock at.
    pub reachable_bases: Option<Vec<String>>,
}

impl CatalogConfiguration {
    pub const ENV_PREFIX: &'static str = "TRADE_CATALOG_";

    pub fn from_env() -> anyhow::Result<Self> {
        Ok(envy::prefixed(Self::ENV_PREFIX).from_env::<CatalogConfiguration>()?)
    }

    pub fn from_vars<I: IntoIterator<Item = (String, String)>>(vars: I) -> anyhow::Result<Self> {
        Ok(envy::prefixed(Self::ENV_PREFIX).from_iter::<_, CatalogConfiguration>(vars)?)
    }

    pub fn exporter_settings(&self) -> ExporterSettings {
        ExporterSettings {
            reachable_bases: self.reachable_bases.as_ref().map(|bases| {
                bases
                    .iter()
                    .map(|base| base.trim())
                    .filter(|base| !base.is_empty())
                    .map(|base| BaseNickname(base.to_string()))
                    .collect()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn reads_reachable_bases_from_prefixed_vars() {
        let vars = vec![
            ("TRADE_CATALOG_REACHABLE_BASES".to_string(), "li01_01_base,br01_01_base".to_string()),
            ("UNRELATED".to_string(), "1".to_string()),
        ];

        let cfg = CatalogConfiguration::from_vars(vars).unwrap();

        assert_eq!(
            cfg.exporter_settings().reachable_bases,
            Some(HashSet::from([
                BaseNickname("li01_01_base".to_string()),
                BaseNickname("br01_01_base".to_string())
            ]))
        );
    }

    #[test]
    fn no_allow_list_without_env() {
        let cfg = CatalogConfiguration::from_vars(Vec::new()).unwrap();

        assert_eq!(cfg, CatalogConfiguration::default());
        assert_eq!(cfg.exporter_settings().reachable_bases, None);
    }
}
