//! Sprite atlas lookup

use super::vertex::UvRect;

/// UV cell of frame `index` in a `cols` x `rows` atlas.
///
/// Returns `None` for a degenerate atlas (zero columns or rows).
pub fn atlas_uv(index: u32, cols: u32, rows: u32) -> Option<UvRect> {
    if cols == 0 || rows == 0 {
        return None;
    }

    let (cols_f, rows_f) = (cols as f32, rows as f32);
    Some(UvRect {
        u: (index % cols) as f32 / cols_f,
        v: (index / cols) as f32 / rows_f,
        width: 1.0 / cols_f,
        height: 1.0 / rows_f,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cell_is_whole_texture() {
        assert_eq!(atlas_uv(0, 1, 1), Some(UvRect::FULL));
    }

    #[test]
    fn test_grid_cell() {
        let uv = atlas_uv(6, 4, 2).unwrap();
        assert_eq!(uv.u, 0.5);
        assert_eq!(uv.v, 0.5);
        assert_eq!(uv.width, 0.25);
        assert_eq!(uv.height, 0.5);
    }

    #[test]
    fn test_degenerate_atlas() {
        assert!(atlas_uv(0, 0, 1).is_none());
        assert!(atlas_uv(0, 1, 0).is_none());
    }
}
