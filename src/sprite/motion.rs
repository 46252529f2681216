//! Per-frame motion and edge bounces

use glam::Vec2;

use super::direction::Direction;
use crate::consts::SPRITE_SPEED;

/// Container and sprite sizes, in CSS pixels, sampled each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub container: Vec2,
    pub sprite: Vec2,
}

impl Bounds {
    pub fn new(container_w: f32, container_h: f32, sprite_w: f32, sprite_h: f32) -> Self {
        Self {
            container: Vec2::new(container_w, container_h),
            sprite: Vec2::new(sprite_w, sprite_h),
        }
    }

    /// Largest allowed top-left position; never negative
    pub fn max_pos(&self) -> Vec2 {
        (self.container - self.sprite).max(Vec2::ZERO)
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Position advanced (false while stopped)
    pub moved: bool,
    /// A bounce flipped the logical direction; visuals need refreshing
    pub direction_changed: bool,
}

/// Sprite motion state
#[derive(Debug, Clone)]
pub struct Motion {
    pub direction: Direction,
    pub vel: Vec2,
    pub pos: Vec2,
    /// Pixels per tick
    pub speed: f32,
}

impl Default for Motion {
    fn default() -> Self {
        Self::new(SPRITE_SPEED)
    }
}

impl Motion {
    pub fn new(speed: f32) -> Self {
        Self {
            direction: Direction::Stop,
            vel: Vec2::ZERO,
            pos: Vec2::ZERO,
            speed,
        }
    }

    /// Switch direction; returns false when `direction` is already active.
    ///
    /// Repeats are ignored so held keys don't reset velocity mid-flight.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.direction == direction {
            return false;
        }
        self.direction = direction;
        self.vel = direction.unit() * self.speed;
        true
    }

    /// Advance one animation frame, reflecting off the container edges
    pub fn tick(&mut self, bounds: Bounds) -> TickOutcome {
        if !self.direction.is_moving() {
            return TickOutcome::default();
        }

        let before = self.direction;
        let max = bounds.max_pos();
        self.pos += self.vel;

        // Horizontal
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = -self.vel.x;
            self.flip_if(Direction::Left);
        } else if self.pos.x > max.x {
            self.pos.x = max.x;
            self.vel.x = -self.vel.x;
            self.flip_if(Direction::Right);
        }

        // Vertical
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel.y = -self.vel.y;
            self.flip_if(Direction::Up);
        } else if self.pos.y > max.y {
            self.pos.y = max.y;
            self.vel.y = -self.vel.y;
            self.flip_if(Direction::Down);
        }

        TickOutcome {
            moved: true,
            direction_changed: self.direction != before,
        }
    }

    /// Flip the label after a bounce on the wall `travelling` points at
    fn flip_if(&mut self, travelling: Direction) {
        if self.direction == travelling {
            self.set_direction(travelling.opposite());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bounds() -> Bounds {
        Bounds::new(200.0, 100.0, 20.0, 20.0)
    }

    #[test]
    fn test_stopped_does_not_move() {
        let mut motion = Motion::default();
        let outcome = motion.tick(bounds());
        assert!(!outcome.moved);
        assert_eq!(motion.pos, Vec2::ZERO);
    }

    #[test]
    fn test_moves_by_speed() {
        let mut motion = Motion::default();
        motion.set_direction(Direction::Right);
        motion.tick(bounds());
        motion.tick(bounds());
        assert_eq!(motion.pos, Vec2::new(2.0 * SPRITE_SPEED, 0.0));
    }

    #[test]
    fn test_repeated_direction_is_ignored() {
        let mut motion = Motion::default();
        assert!(motion.set_direction(Direction::Down));
        motion.tick(bounds());
        let vel = motion.vel;
        assert!(!motion.set_direction(Direction::Down));
        assert_eq!(motion.vel, vel);
    }

    #[test]
    fn test_stop_zeroes_velocity() {
        let mut motion = Motion::default();
        motion.set_direction(Direction::Up);
        motion.set_direction(Direction::Stop);
        assert_eq!(motion.vel, Vec2::ZERO);
    }

    #[test]
    fn test_left_wall_bounce_turns_right() {
        let mut motion = Motion::default();
        motion.pos = Vec2::new(1.0, 50.0);
        motion.set_direction(Direction::Left);

        let outcome = motion.tick(bounds());
        assert!(outcome.direction_changed);
        assert_eq!(motion.direction, Direction::Right);
        assert_eq!(motion.pos.x, 0.0);
        assert!(motion.vel.x > 0.0);
    }

    #[test]
    fn test_all_walls_flip_direction() {
        let b = bounds();
        let max = b.max_pos();
        let cases = [
            (Direction::Left, Vec2::new(0.0, 10.0), Direction::Right),
            (Direction::Right, Vec2::new(max.x, 10.0), Direction::Left),
            (Direction::Up, Vec2::new(10.0, 0.0), Direction::Down),
            (Direction::Down, Vec2::new(10.0, max.y), Direction::Up),
        ];
        for (start, pos, expected) in cases {
            let mut motion = Motion::default();
            motion.pos = pos;
            motion.set_direction(start);
            motion.tick(b);
            assert_eq!(motion.direction, expected, "bounce from {:?}", start);
            assert_eq!(motion.vel, expected.unit() * SPRITE_SPEED);
        }
    }

    #[test]
    fn test_sprite_larger_than_container_pins_to_origin() {
        let mut motion = Motion::default();
        motion.set_direction(Direction::Right);
        motion.tick(Bounds::new(10.0, 10.0, 20.0, 20.0));
        assert_eq!(motion.pos, Vec2::ZERO);
    }

    fn direction_strategy() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_position_stays_in_bounds(
            commands in prop::collection::vec((direction_strategy(), 0usize..200), 1..20),
            w in 40.0f32..800.0,
            h in 40.0f32..600.0,
            sprite in 1.0f32..40.0,
        ) {
            let b = Bounds::new(w, h, sprite, sprite);
            let max = b.max_pos();
            let mut motion = Motion::default();
            for (dir, ticks) in commands {
                motion.set_direction(dir);
                for _ in 0..ticks {
                    motion.tick(b);
                    prop_assert!(motion.pos.x >= 0.0 && motion.pos.x <= max.x);
                    prop_assert!(motion.pos.y >= 0.0 && motion.pos.y <= max.y);
                }
            }
        }

        #[test]
        fn prop_direction_matches_travel(
            dir in direction_strategy(),
            ticks in 0usize..500,
        ) {
            let b = bounds();
            let mut motion = Motion::default();
            motion.set_direction(dir);
            for _ in 0..ticks {
                motion.tick(b);
            }
            prop_assert_eq!(motion.vel, motion.direction.unit() * SPRITE_SPEED);
        }
    }
}
