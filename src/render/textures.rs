//! Sprite sheet: one texture per `Sprite`, with generated placeholders.
use std::collections::HashMap;
use std::path::Path;

use raylib::prelude::*;

use crate::core::maze::TILE_SIZE;
use crate::render::Sprite;

pub struct SpriteSheet {
    textures: HashMap<Sprite, Texture2D>,
}

impl SpriteSheet {
    /// Loads every sprite from `assets_dir`. A missing or broken image is
    /// replaced by a solid tile of the sprite's fallback colour.
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, assets_dir: &Path) -> Self {
        let mut textures = HashMap::new();
        for sprite in Sprite::ALL {
            let path = assets_dir.join(sprite.asset_path());
            let img = load_or_placeholder(&path, sprite.fallback_color());
            match rl.load_texture_from_image(thread, &img) {
                Ok(tex) => {
                    textures.insert(sprite, tex);
                }
                Err(err) => log::warn!("could not upload {:?} texture: {}", sprite, err),
            }
        }
        Self { textures }
    }

    pub fn texture(&self, sprite: Sprite) -> Option<&Texture2D> {
        self.textures.get(&sprite)
    }
}

fn load_or_placeholder(path: &Path, fallback: Color) -> Image {
    match Image::load_image(&path.to_string_lossy()) {
        Ok(img) => img,
        Err(err) => {
            log::warn!("could not load {} ({}), using placeholder", path.display(), err);
            Image::gen_image_color(TILE_SIZE as i32, TILE_SIZE as i32, fallback)
        }
    }
}
