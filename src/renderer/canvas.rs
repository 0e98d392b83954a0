//! Draw-primitive interface
//!
//! The scene only talks to a [`Canvas`]. Coordinates are logical screen
//! units on the 400x600 playfield, y pointing down.

use glam::Vec2;

use crate::sim::Rect;

/// Opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear blend, `t` in `[0, 1]`
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

pub mod palette {
    use super::Rgb;

    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const SKY: Rgb = Rgb(135, 206, 250);
    pub const NIGHT_SKY: Rgb = Rgb(10, 10, 40);
    pub const GREEN: Rgb = Rgb(0, 200, 0);
    pub const DARK_GREEN: Rgb = Rgb(0, 150, 0);
    pub const ORANGE: Rgb = Rgb(255, 165, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const YELLOW: Rgb = Rgb(255, 223, 0);
    pub const LIGHT_GRAY: Rgb = Rgb(220, 220, 220);
    pub const MOON: Rgb = Rgb(230, 230, 210);
    pub const PIPE_TINTS: [Rgb; crate::consts::PIPE_TINT_COUNT] = [GREEN, DARK_GREEN, ORANGE];
}

/// Horizontal alignment of a text label relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Left,
    Center,
    Right,
}

/// Label size class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Large,
    Small,
}

/// A text label as submitted to a canvas
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub pos: Vec2,
    pub anchor: TextAnchor,
    pub size: TextSize,
    pub color: Rgb,
}

/// Sink for draw primitives
pub trait Canvas {
    /// Fill the whole canvas
    fn clear(&mut self, color: Rgb);

    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb);

    /// Ellipse inscribed in `bounds`
    fn fill_ellipse(&mut self, bounds: Rect, color: Rgb);

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgb);

    /// Convex or concave polygon, even-odd filled
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgb);

    /// Text label whose top edge sits at `label.pos.y`
    fn text(&mut self, label: TextLabel);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let a = Rgb(0, 100, 200);
        let b = Rgb(200, 100, 0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb(100, 100, 100));
        assert_eq!(a.lerp(b, 3.0), b);
    }
}
