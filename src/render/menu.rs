//! Level select screen: a 4 × 3 grid of level buttons.
use raylib::prelude::*;

use crate::render::Surface;

pub const LEVEL_COUNT: u32 = 12;
const COLUMNS: u32 = 4;
const START_X: f32 = 90.0;
const START_Y: f32 = 120.0;
const SPACING_X: f32 = 150.0;
const SPACING_Y: f32 = 130.0;
const BUTTON: f32 = 80.0;

const BACKGROUND: Color = Color::new(25, 25, 25, 255);
const UNLOCKED: Color = Color::new(70, 130, 180, 255);
const HOVERED: Color = Color::new(100, 170, 230, 255);
const LOCKED: Color = Color::new(60, 60, 60, 255);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LevelSlot {
    pub level: u32,
    pub unlocked: bool,
    /// A layout exists for this level.
    pub available: bool,
}

impl LevelSlot {
    pub fn playable(&self) -> bool {
        self.unlocked && self.available
    }
}

/// Button rectangle for `level` (1-based), in screen pixels.
pub fn slot_rect(level: u32) -> Rectangle {
    let i = level.saturating_sub(1);
    let (r, c) = (i / COLUMNS, i % COLUMNS);
    Rectangle::new(START_X + c as f32 * SPACING_X, START_Y + r as f32 * SPACING_Y, BUTTON, BUTTON)
}

/// Level whose button contains `(x, y)`.
pub fn slot_at(x: f32, y: f32) -> Option<u32> {
    (1..=LEVEL_COUNT).find(|&level| {
        let r = slot_rect(level);
        x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height
    })
}

pub fn draw_level_select<S: Surface>(
    surface: &mut S,
    title: &str,
    slots: &[LevelSlot],
    hovered: Option<u32>,
) {
    let (w, h) = surface.size();
    surface.fill_rect(Rectangle::new(0.0, 0.0, w, h), BACKGROUND);
    surface.draw_text(title, START_X as i32, 40, 40, Color::WHITE);

    for slot in slots {
        let rect = slot_rect(slot.level);
        let color = if !slot.unlocked {
            LOCKED
        } else if hovered == Some(slot.level) {
            HOVERED
        } else {
            UNLOCKED
        };
        surface.fill_rounded_rect(rect, 0.2, color);
        let label = if slot.unlocked { slot.level.to_string() } else { "X".to_string() };
        let text_color = if slot.playable() { Color::WHITE } else { Color::GRAY };
        surface.draw_text(&label, rect.x as i32 + 30, rect.y as i32 + 28, 24, text_color);
    }
}
