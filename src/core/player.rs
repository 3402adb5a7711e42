//! Player state and collision-checked movement.
use raylib::prelude::*;

use crate::core::map::Map;

/// Forward speed in world units per tick while a movement key is held.
pub const MOVE_SPEED: f32 = 2.0;
/// Heading change in radians per tick while a turn key is held.
pub const TURN_SPEED: f32 = 0.1;

pub struct Player {
    pub pos: Vector2,
    /// Heading angle (yaw) in radians.
    pub angle: f32,
    /// Signed forward speed; negative walks backwards.
    pub speed: f32,
}

impl Player {
    pub fn new(x: f32, y: f32, angle: f32) -> Self {
        Self {
            pos: Vector2::new(x, y),
            angle,
            speed: 0.0,
        }
    }

    /// Steps one tick forward along the current heading. The candidate
    /// position is rejected whole if it lands in a wall cell; x and y are
    /// never applied independently, so there is no wall sliding.
    pub fn advance(&mut self, map: &Map) {
        let new_x = self.pos.x + self.angle.cos() * self.speed;
        let new_y = self.pos.y + self.angle.sin() * self.speed;
        if !map.is_wall(new_x, new_y) {
            self.pos.x = new_x;
            self.pos.y = new_y;
        }
    }

    pub fn turn(&mut self, delta: f32) {
        self.angle += delta;
    }
}
