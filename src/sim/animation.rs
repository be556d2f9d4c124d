//! Sprite animation table
//!
//! Every animation kind maps to a fixed entry (frame count, row count,
//! sprite scale). Both kinds are single-frame today; adding a kind means
//! adding a row to `ANIMATION_TABLE`.

use glam::Vec3;

/// Opaque texture handle handed out by a texture loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureHandle(pub u32);

/// Animation variants an entity can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationKind {
    #[default]
    MoveStraight,
    Explode,
}

impl AnimationKind {
    pub const ALL: [AnimationKind; 2] = [AnimationKind::MoveStraight, AnimationKind::Explode];

    /// Slot of this kind in per-kind tables (textures, frame indices)
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Table entry for this kind
    #[inline]
    pub fn spec(self) -> AnimationSpec {
        ANIMATION_TABLE[self.index()]
    }
}

/// Sprite layout and scale for one animation kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub frames: u32,
    pub rows: u32,
    pub scale: Vec3,
}

const ANIMATION_TABLE: [AnimationSpec; 2] = [
    // MoveStraight
    AnimationSpec {
        frames: 1,
        rows: 1,
        scale: Vec3::new(2.0, 2.0, 1.0),
    },
    // Explode
    AnimationSpec {
        frames: 1,
        rows: 1,
        scale: Vec3::new(2.0, 2.0, 1.0),
    },
];

/// Texture atlas description carried by an entity
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheet {
    /// One texture per animation kind, indexed by `AnimationKind::index`
    pub textures: Vec<TextureHandle>,
    /// Atlas frame indices per animation kind
    pub animations: Vec<Vec<u32>>,
    pub animation_time: f32,
    pub frames: u32,
    /// Current atlas cell
    pub index: u32,
    pub cols: u32,
    pub rows: u32,
    pub current: AnimationKind,
}

impl SpriteSheet {
    pub fn new(textures: Vec<TextureHandle>, animations: Vec<Vec<u32>>, cols: u32) -> Self {
        Self {
            textures,
            animations,
            animation_time: 0.0,
            frames: 1,
            index: 0,
            cols,
            rows: 1,
            current: AnimationKind::MoveStraight,
        }
    }

    /// A single-texture, single-cell sprite
    pub fn single(texture: TextureHandle) -> Self {
        Self::new(vec![texture], vec![vec![0]], 1)
    }

    /// Switch to `kind`, returning its table entry
    pub fn set_animation(&mut self, kind: AnimationKind) -> AnimationSpec {
        let spec = kind.spec();
        self.current = kind;
        self.frames = spec.frames;
        self.rows = spec.rows;
        spec
    }

    /// Texture for the current animation, if the sheet has one
    pub fn texture(&self) -> Option<TextureHandle> {
        self.textures.get(self.current.index()).copied()
    }

    /// Frame indices for the current animation, if any
    pub fn frame_indices(&self) -> Option<&[u32]> {
        self.animations.get(self.current.index()).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_is_single_frame() {
        for kind in AnimationKind::ALL {
            let spec = kind.spec();
            assert_eq!(spec.frames, 1);
            assert_eq!(spec.rows, 1);
            assert_eq!(spec.scale, Vec3::new(2.0, 2.0, 1.0));
        }
    }

    #[test]
    fn test_set_animation_updates_layout() {
        let mut sheet = SpriteSheet::single(TextureHandle(3));
        sheet.frames = 4;
        sheet.rows = 2;
        let spec = sheet.set_animation(AnimationKind::MoveStraight);
        assert_eq!(sheet.frames, spec.frames);
        assert_eq!(sheet.rows, spec.rows);
        assert_eq!(sheet.texture(), Some(TextureHandle(3)));
        assert_eq!(sheet.frame_indices(), Some(&[0u32][..]));
    }

    #[test]
    fn test_missing_kind_has_no_texture() {
        let mut sheet = SpriteSheet::single(TextureHandle(1));
        sheet.set_animation(AnimationKind::Explode);
        assert_eq!(sheet.current, AnimationKind::Explode);
        assert!(sheet.texture().is_none());
        assert!(sheet.frame_indices().is_none());
    }
}
