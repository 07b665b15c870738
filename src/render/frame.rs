//! Maze frame: tiles under fog, the avatar, then overlays.
use raylib::prelude::*;

use crate::core::fog::FogState;
use crate::core::maze::{TileGrid, TileKind, TILE_SIZE};
use crate::core::player::Player;
use crate::core::session::LevelSession;
use crate::render::{Scale, Sprite, Surface, FOG_COLOR};

pub const SIGN_LINES: [&str; 2] = [
    "Use W A S D to move around.",
    "Reach the exit gate to finish the level!",
];

const MESSAGE_BOX_HEIGHT: f32 = 90.0;
const MESSAGE_BOX_MARGIN: f32 = 20.0;
const MESSAGE_FONT: i32 = 20;

/// Draws every cell and the avatar. Hidden cells are filled opaque; exit
/// cells are always visible.
pub fn draw_frame<S: Surface>(
    surface: &mut S,
    grid: &TileGrid,
    fog: &FogState,
    player: &Player,
    scale: Scale,
) {
    let (rows, cols) = grid.extent();
    for r in 0..rows as i32 {
        for c in 0..cols as i32 {
            let kind = grid.classify(r, c);
            let (x, y) = (c as f32 * TILE_SIZE, r as f32 * TILE_SIZE);
            let dest = scale.apply(x, y, TILE_SIZE, TILE_SIZE);
            if kind == TileKind::Exit || fog.is_revealed(r, c) {
                surface.draw_sprite(Sprite::from(kind), dest);
            } else {
                surface.fill_rect(dest, FOG_COLOR);
            }
        }
    }

    let dest = scale.apply(player.pos.x, player.pos.y, TILE_SIZE, TILE_SIZE);
    surface.draw_sprite(Sprite::Player, dest);
}

/// Hint box along the bottom of the viewport.
pub fn draw_sign_message<S: Surface>(surface: &mut S) {
    let (w, h) = surface.size();
    let box_w = (w * 0.9).floor();
    let box_x = ((w - box_w) / 2.0).floor();
    let box_y = h - MESSAGE_BOX_HEIGHT - MESSAGE_BOX_MARGIN;
    let rect = Rectangle::new(box_x, box_y, box_w, MESSAGE_BOX_HEIGHT);
    surface.fill_rounded_rect(rect, 0.22, Color::new(0, 0, 0, 220));

    let tx = box_x as i32 + 16;
    let mut ty = box_y as i32 + 14;
    for line in SIGN_LINES {
        surface.draw_text(line, tx, ty, MESSAGE_FONT, Color::WHITE);
        ty += 26;
    }
}

/// Discovery percentage in the top-left corner.
pub fn draw_hud<S: Surface>(surface: &mut S, fog: &FogState) {
    let total = fog.cell_count().max(1);
    let pct = fog.revealed_count() * 100 / total;
    surface.draw_text(&format!("Explored {}%", pct), 10, 10, MESSAGE_FONT, Color::WHITE);
}

/// Full frame for a running level, scaled to fill the surface.
pub fn draw_session<S: Surface>(surface: &mut S, session: &LevelSession) {
    let (w, h) = surface.size();
    let scale = Scale::fit(w, h, session.grid());
    draw_frame(surface, session.grid(), session.fog(), session.player(), scale);
    draw_hud(surface, session.fog());
    // Last, so fog tiles never cover it.
    if session.sign_shown() {
        draw_sign_message(surface);
    }
}
