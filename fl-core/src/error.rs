use std::num::ParseFloatError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed parsing {axis} coord of position '{pos}': {source}")]
    MalformedPosition {
        pos: String,
        axis: char,
        #[source]
        source: ParseFloatError,
    },
    #[error("position '{pos}' is missing its {axis} coord")]
    MissingCoordinate { pos: String, axis: char },
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
