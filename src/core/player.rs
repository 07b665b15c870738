//! Player avatar: movement intent and wall collision.
use raylib::prelude::*;

use crate::core::maze::{world_to_cell, TileGrid, TileKind, TILE_SIZE};

/// Default movement speed in logical pixels per second.
pub const DEFAULT_SPEED: f32 = 120.0;

/// Longest distance covered between two wall checks.
const MAX_SUBSTEP: f32 = TILE_SIZE * 0.5;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Which movement keys are currently held.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Intent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Intent {
    /// Unnormalized movement vector; opposite keys cancel.
    fn vector(&self) -> (f32, f32) {
        let mut dx = 0.0;
        let mut dy = 0.0;
        if self.up {
            dy -= 1.0;
        }
        if self.down {
            dy += 1.0;
        }
        if self.left {
            dx -= 1.0;
        }
        if self.right {
            dx += 1.0;
        }
        (dx, dy)
    }
}

pub struct Player {
    /// Top-left corner of the avatar's tile-sized box, logical pixels.
    pub pos: Vector2,
    pub speed: f32,
    intent: Intent,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2::new(x, y),
            speed: DEFAULT_SPEED,
            intent: Intent::default(),
        }
    }

    /// Avatar standing exactly on cell `(row, col)`.
    pub fn at_cell(row: i32, col: i32) -> Self {
        Self::new(col as f32 * TILE_SIZE, row as f32 * TILE_SIZE)
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn apply_intent(&mut self, dir: Direction, pressed: bool) {
        match dir {
            Direction::Up => self.intent.up = pressed,
            Direction::Down => self.intent.down = pressed,
            Direction::Left => self.intent.left = pressed,
            Direction::Right => self.intent.right = pressed,
        }
    }

    /// Drops all held keys, e.g. when the window loses focus.
    pub fn clear_intent(&mut self) {
        self.intent = Intent::default();
    }

    /// Moves the avatar by `speed * dt` along the held direction. X and Y are
    /// resolved separately so a diagonal push into a wall slides along it.
    /// Long moves are split into sub-steps of at most half a tile, so no
    /// speed or frame time carries the avatar over a wall cell.
    pub fn update(&mut self, dt: f32, grid: &TileGrid) {
        let (dx, dy) = self.intent.vector();
        let len = (dx * dx + dy * dy).sqrt();
        if len == 0.0 {
            return;
        }

        let dist = self.speed * dt;
        let steps = (dist / MAX_SUBSTEP).ceil().max(1.0) as u32;
        let step = dist / steps as f32;
        for _ in 0..steps {
            let nx = self.pos.x + dx / len * step;
            let ny = self.pos.y + dy / len * step;

            if !collides(nx, self.pos.y, grid) {
                self.pos.x = nx;
            }
            if !collides(self.pos.x, ny, grid) {
                self.pos.y = ny;
            }
        }
    }

    /// Tile-sized box at the rounded position.
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.pos.x.round(), self.pos.y.round(), TILE_SIZE, TILE_SIZE)
    }

    /// `(row, col)` of the cell the avatar occupies.
    pub fn cell(&self) -> (i32, i32) {
        let b = self.bounds();
        (world_to_cell(b.y), world_to_cell(b.x))
    }
}

fn collides(px: f32, py: f32, grid: &TileGrid) -> bool {
    grid.classify(world_to_cell(py), world_to_cell(px)) == TileKind::Wall
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::maze::BUNDLED_LEVEL;
    use proptest::prelude::*;

    const DT: f32 = 0.016;

    fn open_room() -> TileGrid {
        TileGrid::parse("WWWWW\nW...W\nW...W\nW...W\nWWWWW\n")
    }

    #[test]
    fn no_intent_no_movement() {
        let grid = open_room();
        let mut p = Player::at_cell(2, 2);
        p.update(DT, &grid);
        assert_eq!((p.pos.x, p.pos.y), (64.0, 64.0));
    }

    #[test]
    fn opposite_keys_cancel() {
        let grid = open_room();
        let mut p = Player::at_cell(2, 2);
        p.apply_intent(Direction::Left, true);
        p.apply_intent(Direction::Right, true);
        p.update(DT, &grid);
        assert_eq!((p.pos.x, p.pos.y), (64.0, 64.0));

        p.apply_intent(Direction::Up, true);
        p.update(DT, &grid);
        assert_eq!(p.pos.x, 64.0);
        assert!((p.pos.y - (64.0 - DEFAULT_SPEED * DT)).abs() < 1e-4);
    }

    #[test]
    fn diagonal_is_normalized() {
        let grid = open_room();
        let mut p = Player::at_cell(2, 2);
        p.apply_intent(Direction::Down, true);
        p.apply_intent(Direction::Right, true);
        p.update(DT, &grid);
        let moved = ((p.pos.x - 64.0).powi(2) + (p.pos.y - 64.0).powi(2)).sqrt();
        assert!((moved - DEFAULT_SPEED * DT).abs() < 1e-4);
    }

    #[test]
    fn release_clears_only_that_flag() {
        let mut p = Player::at_cell(1, 1);
        p.apply_intent(Direction::Up, true);
        p.apply_intent(Direction::Right, true);
        p.apply_intent(Direction::Up, false);
        assert_eq!(p.intent(), Intent { right: true, ..Intent::default() });
        p.clear_intent();
        assert_eq!(p.intent(), Intent::default());
    }

    #[test]
    fn wall_blocks_straight_move() {
        let grid = open_room();
        let mut p = Player::at_cell(1, 1);
        p.apply_intent(Direction::Up, true);
        for _ in 0..100 {
            p.update(DT, &grid);
        }
        assert_eq!(p.cell(), (1, 1));
        assert_eq!(p.pos.y, 32.0);
    }

    #[test]
    fn diagonal_into_wall_slides_down() {
        let grid = TileGrid::parse("WWWW\nW.WW\nW.WW\nW..W\nWWWW\n");
        let mut p = Player::new(63.0, 32.0);
        p.apply_intent(Direction::Down, true);
        p.apply_intent(Direction::Right, true);
        for _ in 0..10 {
            p.update(DT, &grid);
        }
        assert_eq!(p.pos.x, 63.0);
        assert!(p.pos.y > 32.0 + 10.0);
    }

    #[test]
    fn fast_avatar_cannot_jump_a_wall() {
        let grid = TileGrid::parse("WWWWW\nW.W.W\nWWWWW\n");
        let mut p = Player::at_cell(1, 1).with_speed(1400.0);
        p.apply_intent(Direction::Right, true);
        for _ in 0..5 {
            p.update(0.05, &grid);
            assert_eq!(p.cell(), (1, 1));
        }
        assert!(p.pos.x < 64.0);
    }

    #[test]
    fn slow_frame_covers_full_distance_in_open_space() {
        let grid = TileGrid::parse("WWWWWWWWWW\nW........W\nWWWWWWWWWW\n");
        let mut p = Player::at_cell(1, 1).with_speed(1400.0);
        p.apply_intent(Direction::Right, true);
        p.update(0.05, &grid);
        assert!((p.pos.x - (32.0 + 70.0)).abs() < 1e-3);
        assert_eq!(p.cell(), (1, 3));
    }

    #[test]
    fn bounds_are_tile_sized_at_rounded_position() {
        let p = Player::new(40.4, 70.6);
        let b = p.bounds();
        assert_eq!((b.x, b.y, b.width, b.height), (40.0, 71.0, TILE_SIZE, TILE_SIZE));
        assert_eq!(p.cell(), (2, 1));
    }

    fn direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        #[test]
        fn never_ends_inside_a_wall(
            events in proptest::collection::vec((direction(), any::<bool>(), 1usize..30), 1..40),
            dt in 0.001f32..0.05,
        ) {
            let grid = TileGrid::parse(BUNDLED_LEVEL);
            let mut p = Player::at_cell(1, 1);
            for (dir, pressed, frames) in events {
                p.apply_intent(dir, pressed);
                for _ in 0..frames {
                    p.update(dt, &grid);
                    let (r, c) = p.cell();
                    prop_assert_ne!(grid.classify(r, c), TileKind::Wall);
                }
            }
        }
    }
}
