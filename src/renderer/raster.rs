//! Software rasterizer
//!
//! A [`Framebuffer`] is an RGB pixel grid of any size onto which the
//! 400x600 logical playfield is scaled. Shapes are sampled at pixel
//! centres. Text is not rasterized: labels are kept in logical units so
//! the presenter can draw them as real glyphs.

use glam::Vec2;

use super::canvas::{Canvas, Rgb, TextLabel};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::Rect;

/// Pixel grid plus pending text labels
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
    labels: Vec<TextLabel>,
}

/// Inclusive-exclusive pixel span covered by a logical bounding box
struct PixelSpan {
    x0: usize,
    x1: usize,
    y0: usize,
    y1: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); width * height],
            labels: Vec::new(),
        }
    }

    /// Change the pixel size, keeping nothing from the previous frame
    pub fn resize(&mut self, width: usize, height: usize) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels = vec![Rgb::default(); width * height];
        self.labels.clear();
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Labels submitted since the last clear, in draw order
    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    fn scale(&self) -> Vec2 {
        Vec2::new(
            self.width as f32 / SCREEN_WIDTH,
            self.height as f32 / SCREEN_HEIGHT,
        )
    }

    /// Logical position of a pixel's centre
    fn pixel_center(&self, x: usize, y: usize) -> Vec2 {
        (Vec2::new(x as f32, y as f32) + 0.5) / self.scale()
    }

    fn set(&mut self, x: usize, y: usize, color: Rgb) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    fn span(&self, min: Vec2, max: Vec2) -> PixelSpan {
        let scale = self.scale();
        let lo = (min * scale).floor().max(Vec2::ZERO);
        let hi = (max * scale).ceil().max(Vec2::ZERO);
        PixelSpan {
            x0: lo.x as usize,
            x1: (hi.x as usize).min(self.width),
            y0: lo.y as usize,
            y1: (hi.y as usize).min(self.height),
        }
    }

    /// Paint every pixel in the box whose centre passes `inside`
    fn fill_where(&mut self, min: Vec2, max: Vec2, color: Rgb, inside: impl Fn(Vec2) -> bool) {
        let span = self.span(min, max);
        for y in span.y0..span.y1 {
            for x in span.x0..span.x1 {
                if inside(self.pixel_center(x, y)) {
                    self.set(x, y, color);
                }
            }
        }
    }
}

impl Canvas for Framebuffer {
    fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
        self.labels.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        if rect.w <= 0.0 || rect.h <= 0.0 {
            return;
        }
        let min = Vec2::new(rect.x, rect.y);
        let max = min + Vec2::new(rect.w, rect.h);
        self.fill_where(min, max, color, |p| rect.contains(p));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        let r2 = radius * radius;
        self.fill_where(center - radius, center + radius, color, |p| {
            p.distance_squared(center) <= r2
        });
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: Rgb) {
        if bounds.w <= 0.0 || bounds.h <= 0.0 {
            return;
        }
        let center = bounds.center();
        let half = Vec2::new(bounds.w, bounds.h) / 2.0;
        self.fill_where(center - half, center + half, color, |p| {
            ((p - center) / half).length_squared() <= 1.0
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgb) {
        let scale = self.scale();
        let a = from * scale;
        let b = to * scale;
        let steps = (b - a).abs().max_element().ceil().max(1.0) as usize;
        for i in 0..=steps {
            let p = a.lerp(b, i as f32 / steps as f32);
            if p.x >= 0.0 && p.y >= 0.0 {
                self.set(p.x as usize, p.y as usize, color);
            }
        }
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgb) {
        if points.len() < 3 {
            return;
        }
        let min = points.iter().copied().fold(Vec2::INFINITY, Vec2::min);
        let max = points.iter().copied().fold(Vec2::NEG_INFINITY, Vec2::max);
        self.fill_where(min, max, color, |p| polygon_contains(points, p));
    }

    fn text(&mut self, label: TextLabel) {
        self.labels.push(label);
    }
}

/// Even-odd ray casting test
fn polygon_contains(points: &[Vec2], p: Vec2) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (a, b) = (points[i], points[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
