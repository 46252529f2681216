//! Logical directions and their visual representation

use glam::Vec2;

use crate::consts::{SPRITE_MOVING_IMAGE, SPRITE_STATIC_IMAGE};

/// Named movement state of the sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Stop,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in the order the on-screen controls are listed
    pub const ALL: [Direction; 5] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::Stop,
    ];

    /// WASDX mapping, case-insensitive
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "w" => Some(Direction::Up),
            "s" => Some(Direction::Down),
            "a" => Some(Direction::Left),
            "d" => Some(Direction::Right),
            "x" => Some(Direction::Stop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Stop => "stop",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Stop => Direction::Stop,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit vector in screen coordinates (y grows downward)
    pub fn unit(&self) -> Vec2 {
        match self {
            Direction::Stop => Vec2::ZERO,
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
        }
    }

    /// CSS rotation; the artwork faces right
    pub fn rotation_deg(&self) -> i32 {
        match self {
            Direction::Up => -90,
            Direction::Down => 90,
            Direction::Left => 180,
            Direction::Right | Direction::Stop => 0,
        }
    }

    pub fn transform(&self) -> String {
        format!("rotate({}deg)", self.rotation_deg())
    }

    /// Id of the on-screen key hint for this direction
    pub fn control_id(&self) -> String {
        format!("key-{}", self.as_str())
    }

    pub fn is_moving(&self) -> bool {
        *self != Direction::Stop
    }
}

/// Image sources swapped on direction changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteAssets {
    pub moving: String,
    pub stopped: String,
}

impl Default for SpriteAssets {
    fn default() -> Self {
        Self {
            moving: SPRITE_MOVING_IMAGE.to_string(),
            stopped: SPRITE_STATIC_IMAGE.to_string(),
        }
    }
}

impl SpriteAssets {
    pub fn image_for(&self, direction: Direction) -> &str {
        if direction.is_moving() {
            &self.moving
        } else {
            &self.stopped
        }
    }
}
