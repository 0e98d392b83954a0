//! Terminal presenter
//!
//! Shows a [`Framebuffer`] with half-block cells: each terminal cell holds
//! two vertically stacked pixels ('▀' with fg = upper, bg = lower).
//! Text labels are drawn over the pixels as ordinary characters.

use glam::Vec2;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use super::canvas::{Rgb, TextAnchor, TextLabel, TextSize};
use super::raster::Framebuffer;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

const UPPER_HALF_BLOCK: char = '▀';

/// Largest area inside `area` with the playfield's 2:3 pixel aspect, centred
///
/// Cells are about twice as tall as wide, so with two pixels per cell a
/// viewport of `w` columns needs `w * 3 / 4` rows.
pub fn fit_viewport(area: Rect) -> Rect {
    let width = area.width.min(area.height.saturating_mul(4) / 3);
    let height = ((u32::from(width) * 3 / 4) as u16).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Pixel size of the framebuffer backing `viewport`
pub fn framebuffer_size(viewport: Rect) -> (usize, usize) {
    (usize::from(viewport.width), usize::from(viewport.height) * 2)
}

/// Logical coordinates of the centre of a terminal cell, if inside `viewport`
pub fn cell_to_logical(viewport: Rect, column: u16, row: u16) -> Option<Vec2> {
    if viewport.width == 0 || viewport.height == 0 {
        return None;
    }
    let inside = column >= viewport.x
        && column < viewport.x + viewport.width
        && row >= viewport.y
        && row < viewport.y + viewport.height;
    if !inside {
        return None;
    }
    let cell = Vec2::new(
        f32::from(column - viewport.x) + 0.5,
        f32::from(row - viewport.y) + 0.5,
    );
    let cells = Vec2::new(f32::from(viewport.width), f32::from(viewport.height));
    Some(cell / cells * Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT))
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Widget drawing a framebuffer into the viewport it is rendered to
pub struct FramebufferView<'a> {
    framebuffer: &'a Framebuffer,
}

impl<'a> FramebufferView<'a> {
    pub fn new(framebuffer: &'a Framebuffer) -> Self {
        Self { framebuffer }
    }

    fn draw_label(&self, label: &TextLabel, area: Rect, buf: &mut Buffer) {
        let len = label.text.chars().count() as u16;
        if len == 0 || area.width == 0 || area.height == 0 {
            return;
        }
        let col = (label.pos.x / SCREEN_WIDTH * f32::from(area.width)).round() as i32;
        let row = (label.pos.y / SCREEN_HEIGHT * f32::from(area.height)).floor() as i32;
        let start = match label.anchor {
            TextAnchor::Left => col,
            TextAnchor::Center => col - i32::from(len) / 2,
            TextAnchor::Right => col - i32::from(len),
        };

        let max_start = i32::from(area.width.saturating_sub(len));
        let x = area.x + start.clamp(0, max_start) as u16;
        let y = area.y + row.clamp(0, i32::from(area.height) - 1) as u16;

        // Only the foreground changes, so the label keeps the scene behind it
        let mut style = Style::default().fg(to_color(label.color));
        if label.size == TextSize::Large {
            style = style.add_modifier(Modifier::BOLD);
        }
        buf.set_stringn(x, y, &label.text, usize::from(area.width), style);
    }
}

impl Widget for FramebufferView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let fb = self.framebuffer;
        let cols = area.width.min(fb.width() as u16);
        let rows = area.height.min((fb.height() / 2) as u16);

        for row in 0..rows {
            for col in 0..cols {
                let x = usize::from(col);
                let y = usize::from(row) * 2;
                let (Some(upper), Some(lower)) = (fb.get(x, y), fb.get(x, y + 1)) else {
                    continue;
                };
                buf.get_mut(area.x + col, area.y + row)
                    .set_char(UPPER_HALF_BLOCK)
                    .set_fg(to_color(upper))
                    .set_bg(to_color(lower));
            }
        }

        for label in fb.labels() {
            self.draw_label(label, area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::canvas::{Canvas, palette};
    use crate::sim::Rect as LogicalRect;

    #[test]
    fn test_fit_viewport_keeps_aspect() {
        let vp = fit_viewport(Rect::new(0, 0, 200, 60));
        assert_eq!((vp.width, vp.height), (80, 60));
        assert_eq!(vp.x, 60);

        let vp = fit_viewport(Rect::new(0, 0, 40, 100));
        assert_eq!((vp.width, vp.height), (40, 30));
        assert_eq!(vp.y, 35);
    }

    #[test]
    fn test_fit_viewport_empty_area() {
        let vp = fit_viewport(Rect::new(3, 4, 0, 0));
        assert_eq!((vp.width, vp.height), (0, 0));
    }

    #[test]
    fn test_cell_to_logical() {
        let vp = Rect::new(10, 5, 40, 30);
        assert_eq!(cell_to_logical(vp, 9, 5), None);
        assert_eq!(cell_to_logical(vp, 50, 5), None);

        let p = cell_to_logical(vp, 10, 5).unwrap();
        assert_eq!(p, Vec2::new(5.0, 10.0));

        // Centre of the viewport lands on the playfield centre
        let p = cell_to_logical(vp, 30, 20).unwrap();
        assert!((p.x - 205.0).abs() < 1e-3);
        assert!((p.y - 310.0).abs() < 1e-3);
    }

    #[test]
    fn test_half_block_colors() {
        let vp = Rect::new(0, 0, 4, 3);
        let (w, h) = framebuffer_size(vp);
        let mut fb = Framebuffer::new(w, h);
        fb.clear(palette::SKY);
        // Bottom half of the playfield is green: pixel rows 3..6
        fb.fill_rect(LogicalRect::new(0.0, 300.0, 400.0, 300.0), palette::GREEN);

        let mut buf = Buffer::empty(vp);
        FramebufferView::new(&fb).render(vp, &mut buf);

        let top = buf.get(0, 0);
        assert_eq!(top.symbol(), "▀");
        assert_eq!(top.fg, to_color(palette::SKY));
        assert_eq!(top.bg, to_color(palette::SKY));

        // Middle row straddles the boundary
        let mid = buf.get(0, 1);
        assert_eq!(mid.fg, to_color(palette::SKY));
        assert_eq!(mid.bg, to_color(palette::GREEN));
    }

    #[test]
    fn test_label_centered_and_clamped() {
        let vp = Rect::new(0, 0, 40, 30);
        let (w, h) = framebuffer_size(vp);
        let mut fb = Framebuffer::new(w, h);
        fb.clear(palette::SKY);
        fb.text(TextLabel {
            text: "Game Over".to_string(),
            pos: Vec2::new(200.0, 210.0),
            anchor: TextAnchor::Center,
            size: TextSize::Large,
            color: palette::RED,
        });
        fb.text(TextLabel {
            text: "Score: 1".to_string(),
            pos: Vec2::new(395.0, 0.0),
            anchor: TextAnchor::Left,
            size: TextSize::Small,
            color: palette::BLACK,
        });

        let mut buf = Buffer::empty(vp);
        FramebufferView::new(&fb).render(vp, &mut buf);

        // col 20 - 9/2 = 16, row 210/600*30 = 10.5
        assert_eq!(buf.get(16, 10).symbol(), "G");
        assert_eq!(buf.get(16, 10).fg, to_color(palette::RED));
        assert_eq!(buf.get(16, 10).bg, to_color(palette::SKY));
        // Pushed back inside the right edge
        assert_eq!(buf.get(32, 0).symbol(), "S");
        assert_eq!(buf.get(39, 0).symbol(), "1");
    }
}
