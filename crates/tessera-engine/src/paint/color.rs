use bytemuck::{Pod, Zeroable};

/// Linear RGBA vertex color, components in `[0, 1]`.
///
/// Laid out as four consecutive `f32` so color arrays flatten straight into
/// the color buffer (see [`flatten_colors`]).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Converts to the `f64` color used by wgpu clear operations.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

/// Views a color array as flat `r, g, b, a, r, g, b, a, ...` floats.
#[inline]
pub fn flatten_colors(colors: &[Color]) -> &[f32] {
    bytemuck::cast_slice(colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_opaque() {
        for c in [Color::BLACK, Color::RED, Color::YELLOW, Color::GREEN, Color::BLUE] {
            assert_eq!(c.a, 1.0);
            assert!(c.is_finite());
        }
    }

    #[test]
    fn flatten_keeps_channel_order() {
        let colors = [Color::YELLOW, Color::new(0.1, 0.2, 0.3, 0.4)];
        let flat = flatten_colors(&colors);
        assert_eq!(flat, &[1.0, 1.0, 0.0, 1.0, 0.1, 0.2, 0.3, 0.4]);
    }
}
