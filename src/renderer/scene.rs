//! Scene drawing
//!
//! Turns a [`GameState`] plus [`Scenery`] into draw calls. Nothing here
//! mutates state; the same frame can be drawn to any [`Canvas`].

use glam::Vec2;

use super::canvas::{Canvas, Rgb, TextAnchor, TextLabel, TextSize, palette};
use crate::consts::*;
use crate::scenery::{Cloud, Scenery, Star};
use crate::sim::{Bird, Collectible, CollectibleKind, GamePhase, GameState, Pipe, Rect, START_BUTTON};

/// Sun and moon centre
const SKY_BODY: Vec2 = Vec2::new(SCREEN_WIDTH - 70.0, 70.0);
const SKY_BODY_RADIUS: f32 = 40.0;

/// HUD heart size and spacing
const HUD_HEART_SIZE: f32 = 10.0;
const HUD_HEART_SPACING: f32 = 28.0;

/// Grace-window blink period in ticks
const BLINK_TICKS: u32 = 4;

/// Draw one complete frame
pub fn draw_frame<C: Canvas + ?Sized>(state: &GameState, scenery: &Scenery, canvas: &mut C) {
    draw_sky(state.night, &scenery.stars, canvas);
    for cloud in &scenery.clouds {
        draw_cloud(cloud, canvas);
    }

    match state.phase {
        GamePhase::Menu => draw_menu(canvas),
        GamePhase::Playing => {
            for pipe in &state.pipes {
                draw_pipe(pipe, state.difficulty.gap, canvas);
            }
            for item in state.coins.iter().chain(&state.hearts) {
                draw_collectible(item, canvas);
            }
            draw_bird(&state.bird, canvas);
            draw_hud(state, canvas);
        }
        GamePhase::GameOver => draw_game_over(state, canvas),
    }
}

fn draw_sky<C: Canvas + ?Sized>(night: bool, stars: &[Star], canvas: &mut C) {
    if night {
        canvas.clear(palette::NIGHT_SKY);
        for star in stars {
            let b = star.brightness;
            canvas.fill_circle(star.pos, 2.0, Rgb(b, b, (f32::from(b) * 0.8) as u8));
        }
        // Crescent: a sky-colored disc bites into the moon
        canvas.fill_circle(SKY_BODY, SKY_BODY_RADIUS, palette::MOON);
        canvas.fill_circle(SKY_BODY + Vec2::new(15.0, -10.0), 30.0, palette::NIGHT_SKY);
    } else {
        canvas.clear(palette::SKY);
        canvas.fill_circle(SKY_BODY, SKY_BODY_RADIUS, palette::YELLOW);
    }
}

fn draw_cloud<C: Canvas + ?Sized>(cloud: &Cloud, canvas: &mut C) {
    let (x, y, s) = (cloud.pos.x, cloud.pos.y, cloud.size);
    let puffs = [
        Rect::new(x, y + s / 3.0, s * 2.0, s),
        Rect::new(x + s / 3.0, y, s, s),
        Rect::new(x + s, y - s / 3.0, s, s),
        Rect::new(x + s * 1.5, y + s / 4.0, s, s),
    ];
    for puff in puffs {
        canvas.fill_ellipse(puff, palette::LIGHT_GRAY);
    }
}

fn draw_pipe<C: Canvas + ?Sized>(pipe: &Pipe, gap: f32, canvas: &mut C) {
    let color = palette::PIPE_TINTS[usize::from(pipe.tint) % PIPE_TINT_COUNT];
    let bottom = pipe.bottom(gap);
    canvas.fill_rect(Rect::new(pipe.x, 0.0, pipe.width, pipe.top), color);
    canvas.fill_rect(Rect::new(pipe.x, bottom, pipe.width, SCREEN_HEIGHT - bottom), color);

    // Lips along the gap
    let lip = color.lerp(palette::BLACK, 0.4);
    canvas.line(Vec2::new(pipe.x, pipe.top), Vec2::new(pipe.right(), pipe.top), lip);
    canvas.line(Vec2::new(pipe.x, bottom), Vec2::new(pipe.right(), bottom), lip);
}

fn draw_collectible<C: Canvas + ?Sized>(item: &Collectible, canvas: &mut C) {
    if item.collected {
        return;
    }
    match item.kind {
        CollectibleKind::Coin => {
            canvas.fill_circle(item.pos, item.radius, palette::YELLOW);
            let highlight = item.radius / 3.0;
            canvas.fill_circle(item.pos - Vec2::splat(highlight), highlight, palette::WHITE);
        }
        CollectibleKind::Heart => draw_heart(item.pos, item.radius, palette::RED, canvas),
    }
}

/// Two lobes on top of a downward triangle
fn draw_heart<C: Canvas + ?Sized>(center: Vec2, size: f32, color: Rgb, canvas: &mut C) {
    let lobe = size / 2.0;
    canvas.fill_circle(center + Vec2::new(-lobe, -size / 4.0), lobe, color);
    canvas.fill_circle(center + Vec2::new(lobe, -size / 4.0), lobe, color);
    canvas.fill_polygon(
        &[
            center + Vec2::new(-size, -size / 8.0),
            center + Vec2::new(size, -size / 8.0),
            center + Vec2::new(0.0, size),
        ],
        color,
    );
}

fn draw_bird<C: Canvas + ?Sized>(bird: &Bird, canvas: &mut C) {
    if bird.is_invulnerable() && (bird.grace_ticks / BLINK_TICKS) % 2 == 1 {
        return;
    }
    let pos = bird.pos();
    let r = bird.radius;
    canvas.fill_circle(pos, r, palette::RED);
    canvas.fill_circle(pos + Vec2::new(r * 0.35, -r * 0.3), r * 0.3, palette::WHITE);
    canvas.fill_circle(pos + Vec2::new(r * 0.45, -r * 0.3), r * 0.12, palette::BLACK);
    canvas.fill_polygon(
        &[
            pos + Vec2::new(r * 0.8, -r * 0.15),
            pos + Vec2::new(r * 1.4, 0.0),
            pos + Vec2::new(r * 0.8, r * 0.2),
        ],
        palette::ORANGE,
    );
}

fn label(text: String, pos: Vec2, anchor: TextAnchor, size: TextSize, color: Rgb) -> TextLabel {
    TextLabel {
        text,
        pos,
        anchor,
        size,
        color,
    }
}

fn draw_hud<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    canvas.text(label(
        format!("Score: {}", state.score),
        Vec2::new(10.0, 10.0),
        TextAnchor::Left,
        TextSize::Large,
        palette::BLACK,
    ));
    canvas.text(label(
        format!("Highscore: {}", state.high_score),
        Vec2::new(10.0, 50.0),
        TextAnchor::Left,
        TextSize::Small,
        palette::BLACK,
    ));

    // Lives, right-aligned under the sun/moon
    for i in 0..state.lives {
        let x = SCREEN_WIDTH - 20.0 - f32::from(i) * HUD_HEART_SPACING;
        draw_heart(Vec2::new(x, 130.0), HUD_HEART_SIZE, palette::RED, canvas);
    }
}

fn draw_menu<C: Canvas + ?Sized>(canvas: &mut C) {
    canvas.text(label(
        "Skyflap".to_string(),
        Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 3.0),
        TextAnchor::Center,
        TextSize::Large,
        palette::BLACK,
    ));

    canvas.fill_rect(START_BUTTON, palette::GREEN);
    canvas.text(label(
        "Start Game".to_string(),
        START_BUTTON.center() - Vec2::new(0.0, 8.0),
        TextAnchor::Center,
        TextSize::Small,
        palette::WHITE,
    ));

    canvas.text(label(
        "Press N to toggle Day/Night anytime".to_string(),
        Vec2::new(SCREEN_WIDTH / 2.0, START_BUTTON.y + START_BUTTON.h + 40.0),
        TextAnchor::Center,
        TextSize::Small,
        palette::BLACK,
    ));
}

fn draw_game_over<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    let cx = SCREEN_WIDTH / 2.0;
    let top = SCREEN_HEIGHT / 3.0;

    canvas.text(label(
        "Game Over".to_string(),
        Vec2::new(cx, top),
        TextAnchor::Center,
        TextSize::Large,
        palette::RED,
    ));
    canvas.text(label(
        format!("Score: {}", state.score),
        Vec2::new(cx, top + 60.0),
        TextAnchor::Center,
        TextSize::Small,
        palette::BLACK,
    ));
    canvas.text(label(
        format!("Highscore: {}", state.high_score),
        Vec2::new(cx, top + 100.0),
        TextAnchor::Center,
        TextSize::Small,
        palette::BLACK,
    ));
    canvas.text(label(
        "Press SPACE to Restart".to_string(),
        Vec2::new(cx, top + 140.0),
        TextAnchor::Center,
        TextSize::Small,
        palette::BLACK,
    ));
    if state.new_record {
        canvas.text(label(
            "New record!".to_string(),
            Vec2::new(cx, top + 180.0),
            TextAnchor::Center,
            TextSize::Small,
            palette::ORANGE,
        ));
    }
}
