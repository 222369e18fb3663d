use crate::{Vec3f, Vec4f};

/// RGBA color with components in `[0, 1]`. The range is not enforced.
pub type Color = Vec4f;

/// RGB color without alpha.
pub type Color3 = Vec3f;

impl Vec4f {
    /// An opaque color.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::new(r, g, b, a)
    }

    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.0[0], self.0[1], self.0[2], a)
    }
}

pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);

pub const ORANGE: Color = Color::rgb(1.0, 0.5, 0.0);
pub const ROSE: Color = Color::rgb(1.0, 0.0, 0.5);
pub const CHARTREUSE: Color = Color::rgb(0.5, 1.0, 0.0);
pub const SPRING: Color = Color::rgb(0.0, 1.0, 0.5);
pub const VIOLET: Color = Color::rgb(0.5, 0.0, 1.0);
pub const AZURE: Color = Color::rgb(0.0, 0.5, 1.0);

/// Every named color, mostly useful for palettes and tests.
pub const NAMED: [(&str, Color); 14] = [
    ("white", WHITE),
    ("black", BLACK),
    ("red", RED),
    ("green", GREEN),
    ("blue", BLUE),
    ("cyan", CYAN),
    ("magenta", MAGENTA),
    ("yellow", YELLOW),
    ("orange", ORANGE),
    ("rose", ROSE),
    ("chartreuse", CHARTREUSE),
    ("spring", SPRING),
    ("violet", VIOLET),
    ("azure", AZURE),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors_are_normalized_and_opaque() {
        for (name, color) in NAMED {
            assert!(
                color.iter().all(|c| (0.0..=1.0).contains(c)),
                "{name} is out of range"
            );
            assert_eq!(color.a(), 1.0, "{name} is not opaque");
        }
    }

    #[test]
    fn test_rgb_is_opaque() {
        assert_eq!(Color::rgb(0.2, 0.4, 0.6).a(), 1.0);
        assert_eq!(RED.with_alpha(0.5), Color::rgba(1.0, 0.0, 0.0, 0.5));
    }
}
