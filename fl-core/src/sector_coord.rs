use crate::error::{CatalogError, Result};
use fl_domain::{UniverseSystem, Vector};

const NAV_MAP_GRID: f64 = 34000.0;
const GRID_CELLS: i64 = 8;

/// Human readable navmap cell like `D-4` for a position inside a system.
pub fn vector_to_sector_coord(system: &UniverseSystem, pos: &Vector) -> String {
    let scale = system.nav_map_scale.filter(|scale| *scale > 0.0).unwrap_or(1.0);
    let grid_size = NAV_MAP_GRID / scale;

    let grid_ref_x = grid_ref(pos.x, grid_size);
    let grid_ref_z = grid_ref(pos.z, grid_size);

    let column = (b'A' + grid_ref_x as u8) as char;
    format!("{}-{}", column, 1 + grid_ref_z)
}

fn grid_ref(coord: f64, grid_size: f64) -> i64 {
    let cell = ((coord + grid_size * 5.0) / grid_size) as i64 - 1;
    cell.clamp(0, GRID_CELLS - 1)
}

/// Parses outpost position text of the form `"x, y, z"`.
pub fn parse_position(value: &str) -> Result<Vector> {
    let mut coords = value.split(',');
    let mut next_coord = |axis: char| -> Result<f64> {
        let raw = coords.next().ok_or_else(|| CatalogError::MissingCoordinate {
            pos: value.to_string(),
            axis,
        })?;
        raw.replace(' ', "").parse::<f64>().map_err(|source| CatalogError::MalformedPosition {
            pos: value.to_string(),
            axis,
            source,
        })
    };

    let x = next_coord('x')?;
    let y = next_coord('y')?;
    let z = next_coord('z')?;
    Ok(Vector::new(x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fl_domain::SystemNickname;

    fn system_with_scale(nav_map_scale: Option<f64>) -> UniverseSystem {
        UniverseSystem {
            nickname: SystemNickname("li01".to_string()),
            strid_name: 1,
            ids_info: None,
            nav_map_scale,
        }
    }

    #[test]
    fn origin_is_in_the_middle_of_the_grid() {
        let system = system_with_scale(None);
        assert_eq!(vector_to_sector_coord(&system, &Vector::default()), "E-5");
    }

    #[test]
    fn sector_coord_clamps_to_grid_edges() {
        let system = system_with_scale(Some(1.0));

        assert_eq!(vector_to_sector_coord(&system, &Vector::new(-100_000.0, 0.0, 100_000.0)), "B-7");
        assert_eq!(vector_to_sector_coord(&system, &Vector::new(1_000_000.0, 0.0, -1_000_000.0)), "H-1");
        assert_eq!(vector_to_sector_coord(&system, &Vector::new(-200_000.0, 0.0, 0.0)), "A-5");
    }

    #[test]
    fn nav_map_scale_shrinks_the_grid() {
        let system = system_with_scale(Some(2.0));
        // grid size 17000: (17000 + 85000) / 17000 = 6, minus one -> F
        assert_eq!(vector_to_sector_coord(&system, &Vector::new(17_000.0, 0.0, 0.0)), "F-5");
    }

    #[test]
    fn parses_position_with_spaces() {
        let pos = parse_position("-1500.5, 0, 32000").unwrap();
        assert_eq!(pos, Vector::new(-1500.5, 0.0, 32000.0));
    }

    #[test]
    fn malformed_position_is_an_error() {
        let err = parse_position("12, abc, 3").unwrap_err();
        assert!(matches!(err, CatalogError::MalformedPosition { axis: 'y', .. }));

        let err = parse_position("12, 3").unwrap_err();
        assert!(matches!(err, CatalogError::MissingCoordinate { axis: 'z', .. }));
    }
}
