//! `Surface` over a raylib draw handle.
use raylib::prelude::*;

use crate::render::textures::SpriteSheet;
use crate::render::{Sprite, Surface};

pub struct RaylibSurface<'a, D: RaylibDraw> {
    d: &'a mut D,
    sheet: &'a SpriteSheet,
    width: f32,
    height: f32,
}

impl<'a, D: RaylibDraw> RaylibSurface<'a, D> {
    pub fn new(d: &'a mut D, sheet: &'a SpriteSheet, width: i32, height: i32) -> Self {
        Self { d, sheet, width: width as f32, height: height as f32 }
    }
}

impl<D: RaylibDraw> Surface for RaylibSurface<'_, D> {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn draw_sprite(&mut self, sprite: Sprite, dest: Rectangle) {
        match self.sheet.texture(sprite) {
            Some(tex) => {
                let src = Rectangle::new(0.0, 0.0, tex.width as f32, tex.height as f32);
                self.d.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
            }
            None => self.d.draw_rectangle_rec(dest, sprite.fallback_color()),
        }
    }

    fn fill_rect(&mut self, dest: Rectangle, color: Color) {
        self.d.draw_rectangle_rec(dest, color);
    }

    fn fill_rounded_rect(&mut self, dest: Rectangle, roundness: f32, color: Color) {
        self.d.draw_rectangle_rounded(dest, roundness, 8, color);
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color) {
        self.d.draw_text(text, x, y, font_size, color);
    }
}
