//! Frame composition
//!
//! Draw order: background, then either the end screen or every asteroid
//! followed by the craft, then the fuel HUD on top.

use std::path::Path;

use glam::{Mat4, Vec3};

use super::sprite::atlas_uv;
use super::text::{fuel_label, layout_text};
use super::{FilterMode, Renderer, TextureHandle, TextureLoader, UvRect};
use crate::consts::{VIEW_HALF_HEIGHT, VIEW_HALF_WIDTH};
use crate::error::Result;
use crate::sim::{Entity, EntityTextures, GameState};

pub const BACKGROUND_PATH: &str = "assets/Lunar_bg.png";
pub const ASTEROID_PATH: &str = "assets/asteroid.png";
pub const CRAFT_PATH: &str = "assets/spaceship.png";
pub const GAME_OVER_PATH: &str = "assets/over.png";
pub const WIN_PATH: &str = "assets/win.png";
pub const FONT_PATH: &str = "assets/font1.png";

/// End screen panel size (world units)
const END_SCREEN_SIZE: Vec3 = Vec3::new(5.0, 4.0, 1.0);

/// Fuel HUD placement
const HUD_ORIGIN: Vec3 = Vec3::new(-4.5, 3.4, 0.0);
const HUD_FONT_SIZE: f32 = 0.5;
const HUD_SPACING: f32 = 0.05;

/// Every texture the game draws with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneTextures {
    pub background: TextureHandle,
    pub asteroid: TextureHandle,
    pub craft: TextureHandle,
    pub game_over: TextureHandle,
    pub win: TextureHandle,
    pub font: TextureHandle,
}

impl SceneTextures {
    /// Load all game textures (nearest filtering)
    pub fn load(loader: &mut impl TextureLoader) -> Result<Self> {
        let mut load = |path: &str| loader.load(Path::new(path), FilterMode::Nearest);
        Ok(Self {
            background: load(BACKGROUND_PATH)?,
            asteroid: load(ASTEROID_PATH)?,
            craft: load(CRAFT_PATH)?,
            game_over: load(GAME_OVER_PATH)?,
            win: load(WIN_PATH)?,
            font: load(FONT_PATH)?,
        })
    }

    /// Textures the simulation's entities carry
    pub fn entity_textures(&self) -> EntityTextures {
        EntityTextures {
            craft: self.craft,
            obstacle: self.asteroid,
        }
    }
}

/// Draw one complete frame of `state`
pub fn render_frame(state: &GameState, textures: &SceneTextures, renderer: &mut impl Renderer) {
    renderer.clear();

    let view = Vec3::new(2.0 * VIEW_HALF_WIDTH, 2.0 * VIEW_HALF_HEIGHT, 1.0);
    renderer.draw_quad(Mat4::from_scale(view), textures.background, UvRect::FULL);

    if state.game_won() {
        renderer.draw_quad(Mat4::from_scale(END_SCREEN_SIZE), textures.win, UvRect::FULL);
    } else if state.game_over() {
        renderer.draw_quad(
            Mat4::from_scale(END_SCREEN_SIZE),
            textures.game_over,
            UvRect::FULL,
        );
    } else {
        for obstacle in &state.obstacles {
            draw_entity(obstacle, renderer);
        }
        draw_entity(&state.craft, renderer);
    }

    let hud = layout_text(&fuel_label(state.craft.fuel()), HUD_FONT_SIZE, HUD_SPACING);
    renderer.draw_triangles(Mat4::from_translation(HUD_ORIGIN), &hud, textures.font);

    renderer.present();
}

/// Draw an entity's current sprite cell at its world transform
fn draw_entity(entity: &Entity, renderer: &mut impl Renderer) {
    let sprite = entity.sprite();
    if sprite.frame_indices().is_none() {
        return;
    }
    let Some(texture) = sprite.texture() else {
        log::warn!("No texture for animation {:?}", sprite.current);
        return;
    };
    let Some(uv) = atlas_uv(sprite.index, sprite.cols, sprite.rows) else {
        log::warn!(
            "Sprite atlas has zero columns or rows ({}x{})",
            sprite.cols,
            sprite.rows
        );
        return;
    };
    renderer.draw_quad(entity.model_matrix(), texture, uv);
}
