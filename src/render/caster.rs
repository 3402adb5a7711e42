//! Ray casting: fixed-step march through the map grid.
use raylib::prelude::*;

use crate::core::map::Map;

/// Farthest distance a ray travels before giving up, in world units.
pub const MAX_DEPTH: f32 = 800.0;

/// Marches a point from `origin` along `(cos angle, sin angle)` one world
/// unit at a time and returns the Euclidean distance to the first wall, or
/// exactly `MAX_DEPTH` if nothing is hit first. An origin already inside a
/// wall returns 0.0. Map and ray count are small enough that a fixed-step
/// march beats the bookkeeping of a grid-accelerated DDA here.
pub fn cast_ray(map: &Map, origin: Vector2, angle: f32) -> f32 {
    let dir_x = angle.cos();
    let dir_y = angle.sin();
    let mut distance = 0.0;
    loop {
        let x = origin.x + dir_x * distance;
        let y = origin.y + dir_y * distance;
        if map.is_wall(x, y) {
            return distance;
        }
        distance += 1.0;
        if distance >= MAX_DEPTH {
            return MAX_DEPTH;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::map::CELL_SIZE;

    #[test]
    fn adjacent_wall_hits_within_one_cell() {
        let map = Map::sample();
        // Just inside cell (1, 1), aimed west at the perimeter wall.
        let origin = Vector2::new(CELL_SIZE + 2.0, CELL_SIZE * 1.5);
        let d = cast_ray(&map, origin, std::f32::consts::PI);
        assert!(d < CELL_SIZE, "expected a near hit, got {d}");
    }

    #[test]
    fn open_corridor_returns_the_depth_sentinel() {
        // 20 open columns: the east wall sits at x = 21 * 64 = 1344, past
        // MAX_DEPTH from the origin.
        let corridor = "#".repeat(22);
        let open = format!("#{}#", " ".repeat(20));
        let map = Map::parse(&[corridor.as_str(), open.as_str(), corridor.as_str()]).unwrap();
        let origin = Vector2::new(CELL_SIZE * 1.5, CELL_SIZE * 1.5);
        let d = cast_ray(&map, origin, 0.0);
        assert_eq!(d, MAX_DEPTH);
    }

    #[test]
    fn origin_inside_a_wall_returns_zero() {
        let map = Map::sample();
        let d = cast_ray(&map, Vector2::new(10.0, 10.0), 0.0);
        assert_eq!(d, 0.0);
    }

    #[test]
    fn east_cast_hits_the_wall_two_columns_over() {
        // Walled 8x8 grid with a wall at row 1, col 2. From (96, 96) facing
        // east the wall face sits at x = 128, so the hit lands at 32 units.
        let map = Map::parse(&[
            "########",
            "# #    #",
            "#      #",
            "#      #",
            "#      #",
            "#      #",
            "#      #",
            "########",
        ])
        .unwrap();
        let d = cast_ray(&map, Vector2::new(96.0, 96.0), 0.0);
        assert_eq!(d, 32.0);
    }
}
