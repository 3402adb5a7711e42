//! Perspective wall sweep: one fixed-width strip per ray, shaded by depth.
use raylib::prelude::*;

use crate::core::map::{Map, CELL_SIZE};
use crate::core::player::Player;
use crate::render::caster::cast_ray;
use crate::render::framebuffer::Framebuffer;

/// Total angular width of the view.
pub const FOV: f32 = std::f32::consts::PI / 3.0;
/// Rays per sweep; one strip each.
pub const NUM_RAYS: u32 = 320;
/// Strip width in pixels, so the viewport is NUM_RAYS * STRIP_WIDTH wide.
pub const STRIP_WIDTH: u32 = 2;
/// Floor for the corrected distance. A ray grazing a wall edge can correct
/// to nearly zero and the projection would divide into a non-finite height.
pub const MIN_ADJUSTED_DIST: f32 = 1.0;

/// Inverse-perspective projection: closer walls are taller. The clamp keeps
/// the height finite at grazing angles.
#[inline]
pub fn projected_wall_height(adjusted_dist: f32, viewport_height: f32) -> f32 {
    (CELL_SIZE * viewport_height) / adjusted_dist.max(MIN_ADJUSTED_DIST)
}

fn shade(dist: f32) -> Color {
    let intensity = (255.0 - dist * 0.25).clamp(0.0, 255.0) as u8;
    Color::new(intensity, 0, 0, 255)
}

/// Clears the framebuffer and sweeps the field of view left to right,
/// drawing one vertical wall strip per ray.
pub fn render_scene(fb: &mut Framebuffer, map: &Map, player: &Player) {
    fb.clear();
    let viewport_height = fb.height as f32;
    for i in 0..NUM_RAYS {
        let t = i as f32 / NUM_RAYS as f32;
        let ray_angle = player.angle - FOV / 2.0 + FOV * t;
        let dist = cast_ray(map, player.pos, ray_angle);

        // Fisheye correction: project the hit distance onto the view axis.
        let adjusted_dist = dist * (ray_angle - player.angle).cos();

        let wall_height = projected_wall_height(adjusted_dist, viewport_height);
        let wall_top = (viewport_height - wall_height) / 2.0;

        fb.fill_rect(
            (i * STRIP_WIDTH) as f32,
            wall_top,
            STRIP_WIDTH as f32,
            wall_height,
            shade(dist),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_ray_needs_no_fisheye_correction() {
        // The middle of the sweep is the ray cast along the heading itself;
        // its correction factor is cos(0) = 1, so adjusted == dist.
        let map = Map::sample();
        let player = Player::new(96.0, 96.0, 0.7);
        let i = NUM_RAYS / 2;
        let t = i as f32 / NUM_RAYS as f32;
        let ray_angle = player.angle - FOV / 2.0 + FOV * t;
        assert!((ray_angle - player.angle).abs() < 1e-6);
        let dist = cast_ray(&map, player.pos, ray_angle);
        let adjusted = dist * (ray_angle - player.angle).cos();
        assert!((adjusted - dist).abs() < 1e-3);
    }

    #[test]
    fn wall_height_strictly_decreases_with_distance() {
        let mut previous = f32::INFINITY;
        for step in 1..100 {
            let adjusted = MIN_ADJUSTED_DIST + step as f32 * 8.0;
            let height = projected_wall_height(adjusted, 400.0);
            assert!(height < previous, "height not decreasing at {adjusted}");
            previous = height;
        }
    }

    #[test]
    fn grazing_rays_project_a_finite_height() {
        let height = projected_wall_height(0.0, 400.0);
        assert!(height.is_finite());
        assert_eq!(height, projected_wall_height(MIN_ADJUSTED_DIST, 400.0));
    }

    #[test]
    fn nearer_walls_shade_brighter() {
        assert!(shade(10.0).r > shade(400.0).r);
        // Beyond the fade distance the channel bottoms out instead of
        // wrapping around.
        assert_eq!(shade(2000.0).r, 0);
    }
}
