use super::Viewport;

/// Column-major orthographic projection from pixel space to NDC.
///
/// Scales `x` by `2 / width` and `y` by `2 / height`; depth and `w` pass
/// through unchanged. With no translation terms, pixel (0, 0) lands at the
/// viewport center.
pub fn pixel_to_ndc(viewport: Viewport) -> [[f32; 4]; 4] {
    debug_assert!(viewport.is_valid(), "projection from invalid viewport");

    let sx = 2.0 / viewport.width;
    let sy = 2.0 / viewport.height;

    [
        [sx, 0.0, 0.0, 0.0],
        [0.0, sy, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── diagonal ──────────────────────────────────────────────────────────

    #[test]
    fn diagonal_is_two_over_size() {
        let m = pixel_to_ndc(Viewport::new(800.0, 600.0));
        assert_eq!(m[0][0], 2.0 / 800.0);
        assert_eq!(m[1][1], 2.0 / 600.0);
        assert_eq!(m[2][2], 1.0);
        assert_eq!(m[3][3], 1.0);
    }

    #[test]
    fn half_size_doubles_the_scale() {
        let m = pixel_to_ndc(Viewport::new(400.0, 300.0));
        assert_eq!(m[0][0], 0.005);
        assert_eq!(m[1][1], 2.0 / 300.0);
    }

    // ── off-diagonal ──────────────────────────────────────────────────────

    #[test]
    fn off_diagonal_is_zero() {
        let m = pixel_to_ndc(Viewport::new(123.0, 456.0));
        for (c, col) in m.iter().enumerate() {
            for (r, v) in col.iter().enumerate() {
                if c != r {
                    assert_eq!(*v, 0.0, "m[{c}][{r}]");
                }
            }
        }
    }

    // ── mapping ───────────────────────────────────────────────────────────

    #[test]
    fn half_extent_maps_to_unit() {
        let m = pixel_to_ndc(Viewport::new(200.0, 100.0));
        assert_eq!(m[0][0] * 100.0, 1.0);
        assert_eq!(m[1][1] * 50.0, 1.0);
    }
}
