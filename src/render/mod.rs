//! Rendering: the maze frame, overlays and the level select, drawn onto an
//! abstract `Surface`.
//!
//! Re-exports:
//! - `frame`: maze tiles under fog, avatar, sign box and HUD
//! - `menu`: level select screen
//! - `textures`: sprite sheet with solid-colour fallbacks
//! - `surface`: `Surface` implementation over a raylib draw handle

pub mod frame;
pub mod menu;
pub mod surface;
pub mod textures;

use raylib::prelude::*;

use crate::core::maze::{TileGrid, TileKind, TILE_SIZE};

/// Fill used for undiscovered cells.
pub const FOG_COLOR: Color = Color::new(0, 0, 0, 255);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Wall,
    Floor,
    Sign,
    Exit,
    Player,
}

impl Sprite {
    pub const ALL: [Sprite; 5] =
        [Sprite::Wall, Sprite::Floor, Sprite::Sign, Sprite::Exit, Sprite::Player];

    /// Image path relative to the assets directory.
    pub fn asset_path(self) -> &'static str {
        match self {
            Sprite::Wall => "tiles/brick.png",
            Sprite::Floor => "tiles/floor.png",
            Sprite::Sign => "tiles/sign.png",
            Sprite::Exit => "tiles/exit.png",
            Sprite::Player => "player/player.png",
        }
    }

    /// Placeholder colour when the image can't be loaded.
    pub fn fallback_color(self) -> Color {
        match self {
            Sprite::Wall => Color::RED,
            Sprite::Floor => Color::GREEN,
            Sprite::Sign => Color::YELLOW,
            Sprite::Exit => Color::BLUE,
            Sprite::Player => Color::new(0, 255, 255, 255),
        }
    }
}

impl From<TileKind> for Sprite {
    fn from(kind: TileKind) -> Self {
        match kind {
            TileKind::Wall => Sprite::Wall,
            TileKind::Floor => Sprite::Floor,
            TileKind::Sign => Sprite::Sign,
            TileKind::Exit => Sprite::Exit,
        }
    }
}

/// Anything the game can draw a frame onto.
pub trait Surface {
    /// Viewport size in screen pixels.
    fn size(&self) -> (f32, f32);
    fn draw_sprite(&mut self, sprite: Sprite, dest: Rectangle);
    fn fill_rect(&mut self, dest: Rectangle, color: Color);
    fn fill_rounded_rect(&mut self, dest: Rectangle, roundness: f32, color: Color);
    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color);
}

/// Per-axis factors from logical to screen pixels. X and Y are independent,
/// the maze is stretched to fill the viewport.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scale {
    pub x: f32,
    pub y: f32,
}

impl Scale {
    pub const UNIT: Scale = Scale { x: 1.0, y: 1.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Scale that makes `grid` exactly cover a `width × height` viewport.
    pub fn fit(width: f32, height: f32, grid: &TileGrid) -> Self {
        let (rows, cols) = grid.extent();
        if rows == 0 || cols == 0 {
            return Self::UNIT;
        }
        Self {
            x: width / (cols as f32 * TILE_SIZE),
            y: height / (rows as f32 * TILE_SIZE),
        }
    }

    /// Maps a logical rectangle to screen space.
    #[inline]
    pub fn apply(&self, x: f32, y: f32, w: f32, h: f32) -> Rectangle {
        Rectangle::new(x * self.x, y * self.y, w * self.x, h * self.y)
    }
}
