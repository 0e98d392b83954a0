//! Collision detection for a circular bird
//!
//! Pipes are tested as two axis-aligned barriers around a gap, the screen
//! edges as a vertical band, and collectibles as circles.

use glam::Vec2;

use super::state::{Bird, Collectible, Pipe};
use crate::consts::SCREEN_HEIGHT;

/// What the bird ran into this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Top or bottom edge of the screen
    Bounds,
    /// A pipe barrier (index into the pipe list)
    Pipe(usize),
}

/// Circle versus pipe pair with gap `[top, top + gap]`
pub fn circle_hits_pipe(center: Vec2, radius: f32, pipe: &Pipe, gap: f32) -> bool {
    let overlaps_x = center.x + radius > pipe.x && center.x - radius < pipe.right();
    if !overlaps_x {
        return false;
    }
    center.y - radius < pipe.top || center.y + radius > pipe.bottom(gap)
}

/// Circle leaving the vertical play area
pub fn circle_out_of_bounds(center: Vec2, radius: f32) -> bool {
    center.y - radius < 0.0 || center.y + radius > SCREEN_HEIGHT
}

/// Circle versus circle overlap (strict)
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Whether the bird can pick up an item this tick
pub fn bird_touches(bird: &Bird, item: &Collectible) -> bool {
    !item.collected && circles_overlap(bird.pos(), bird.radius, item.pos, item.radius)
}

/// Check the bird against the screen edges and every pipe
///
/// Bounds always count; pipes are skipped while the bird is in its
/// respawn grace window. An empty pipe list never collides.
pub fn check_bird(bird: &Bird, pipes: &[Pipe], gap: f32) -> Option<CollisionKind> {
    let center = bird.pos();
    if circle_out_of_bounds(center, bird.radius) {
        return Some(CollisionKind::Bounds);
    }
    if bird.is_invulnerable() {
        return None;
    }
    pipes
        .iter()
        .position(|pipe| circle_hits_pipe(center, bird.radius, pipe, gap))
        .map(CollisionKind::Pipe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::CollectibleKind;

    fn pipe_at(x: f32, top: f32) -> Pipe {
        Pipe {
            x,
            width: PIPE_WIDTH,
            base_top: top,
            top,
            oscillation: None,
            passed: false,
            tint: 0,
        }
    }

    fn bird_at(x: f32, y: f32) -> Bird {
        Bird {
            x,
            y,
            ..Bird::default()
        }
    }

    #[test]
    fn test_no_pipes_no_collision() {
        let bird = bird_at(BIRD_X, 300.0);
        assert_eq!(check_bird(&bird, &[], PIPE_GAP_START), None);
    }

    #[test]
    fn test_above_screen_is_bounds_collision() {
        let bird = bird_at(BIRD_X, -5.0);
        assert_eq!(check_bird(&bird, &[], PIPE_GAP_START), Some(CollisionKind::Bounds));
        let pipes = [pipe_at(300.0, 100.0)];
        assert_eq!(check_bird(&bird, &pipes, PIPE_GAP_START), Some(CollisionKind::Bounds));
    }

    #[test]
    fn test_below_screen_is_bounds_collision() {
        let bird = bird_at(BIRD_X, SCREEN_HEIGHT - 10.0);
        assert_eq!(check_bird(&bird, &[], PIPE_GAP_START), Some(CollisionKind::Bounds));
    }

    #[test]
    fn test_hits_top_barrier() {
        let pipe = pipe_at(100.0, 100.0);
        let center = Vec2::new(100.0, 50.0);
        assert!(circle_hits_pipe(center, 20.0, &pipe, 200.0));
        let bird = bird_at(100.0, 50.0);
        assert_eq!(check_bird(&bird, &[pipe], 200.0), Some(CollisionKind::Pipe(0)));
    }

    #[test]
    fn test_hits_bottom_barrier() {
        let pipe = pipe_at(100.0, 100.0);
        assert!(circle_hits_pipe(Vec2::new(120.0, 290.0), 20.0, &pipe, 200.0));
    }

    #[test]
    fn test_inside_gap_is_safe() {
        let pipe = pipe_at(100.0, 100.0);
        assert!(!circle_hits_pipe(Vec2::new(130.0, 200.0), 20.0, &pipe, 200.0));
    }

    #[test]
    fn test_no_horizontal_overlap_is_safe() {
        let pipe = pipe_at(100.0, 100.0);
        // Touching the left face exactly is not an overlap
        assert!(!circle_hits_pipe(Vec2::new(80.0, 20.0), 20.0, &pipe, 200.0));
        assert!(!circle_hits_pipe(Vec2::new(190.0, 20.0), 20.0, &pipe, 200.0));
    }

    #[test]
    fn test_grace_ignores_pipes_not_bounds() {
        let pipe = pipe_at(100.0, 100.0);
        let mut bird = bird_at(100.0, 50.0);
        bird.grace_ticks = 3;
        assert_eq!(check_bird(&bird, &[pipe.clone()], 200.0), None);
        bird.y = -5.0;
        assert_eq!(check_bird(&bird, &[pipe], 200.0), Some(CollisionKind::Bounds));
    }

    #[test]
    fn test_coin_pickup_same_center() {
        let bird = bird_at(150.0, 300.0);
        let coin = Collectible {
            kind: CollectibleKind::Coin,
            pos: Vec2::new(150.0, 300.0),
            radius: COIN_RADIUS,
            collected: false,
        };
        assert!(bird_touches(&bird, &coin));
    }

    #[test]
    fn test_collected_item_is_ignored() {
        let bird = bird_at(150.0, 300.0);
        let coin = Collectible {
            kind: CollectibleKind::Coin,
            pos: Vec2::new(150.0, 300.0),
            radius: COIN_RADIUS,
            collected: true,
        };
        assert!(!bird_touches(&bird, &coin));
    }

    #[test]
    fn test_circles_touching_do_not_overlap() {
        assert!(!circles_overlap(Vec2::ZERO, 20.0, Vec2::new(30.0, 0.0), 10.0));
        assert!(circles_overlap(Vec2::ZERO, 20.0, Vec2::new(29.9, 0.0), 10.0));
    }
}
