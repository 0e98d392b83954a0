//! Decorative background: drifting clouds and twinkling stars
//!
//! Scenery never touches gameplay state. It keeps animating in every phase
//! and draws from the same [`RandomSource`] as the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::RandomSource;

const CLOUD_SPEED_RANGE: (f32, f32) = (0.2, 0.5);
const CLOUD_SIZE_RANGE: (i32, i32) = (30, 60);
const CLOUD_Y_RANGE: (i32, i32) = (20, 100);
const CLOUD_RESPAWN_OFFSET: (i32, i32) = (50, 150);

pub const STAR_BRIGHTNESS_MIN: u8 = 150;
pub const STAR_BRIGHTNESS_MAX: u8 = 255;
const STAR_TWINKLE_STEP: i16 = 2;

/// A puffy cloud drifting left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub pos: Vec2,
    pub speed: f32,
    pub size: f32,
}

impl Cloud {
    fn random_at<R: RandomSource + ?Sized>(x: f32, rng: &mut R) -> Self {
        Self {
            pos: Vec2::new(
                x,
                rng.uniform_int(CLOUD_Y_RANGE.0, CLOUD_Y_RANGE.1) as f32,
            ),
            speed: rng.uniform(CLOUD_SPEED_RANGE.0, CLOUD_SPEED_RANGE.1),
            size: rng.uniform_int(CLOUD_SIZE_RANGE.0, CLOUD_SIZE_RANGE.1) as f32,
        }
    }

    /// Drift left, re-rolling just past the right edge once fully gone
    pub fn update<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.pos.x -= self.speed;
        if self.pos.x < -self.size * 3.0 {
            let x = SCREEN_WIDTH
                + rng.uniform_int(CLOUD_RESPAWN_OFFSET.0, CLOUD_RESPAWN_OFFSET.1) as f32;
            *self = Self::random_at(x, rng);
        }
    }
}

/// A star whose brightness bounces between the min and max
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub brightness: u8,
    /// +1 while brightening, -1 while dimming
    pub direction: i8,
}

impl Star {
    pub fn twinkle(&mut self) {
        let next = i16::from(self.brightness) + i16::from(self.direction) * STAR_TWINKLE_STEP;
        if next >= i16::from(STAR_BRIGHTNESS_MAX) {
            self.brightness = STAR_BRIGHTNESS_MAX;
            self.direction = -1;
        } else if next <= i16::from(STAR_BRIGHTNESS_MIN) {
            self.brightness = STAR_BRIGHTNESS_MIN;
            self.direction = 1;
        } else {
            self.brightness = next as u8;
        }
    }
}

/// Background decoration shared by all phases
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenery {
    pub clouds: Vec<Cloud>,
    pub stars: Vec<Star>,
}

impl Scenery {
    pub fn new<R: RandomSource + ?Sized>(
        rng: &mut R,
        cloud_count: usize,
        star_count: usize,
    ) -> Self {
        let clouds = (0..cloud_count)
            .map(|_| {
                let x = rng.uniform_int(0, SCREEN_WIDTH as i32) as f32;
                Cloud::random_at(x, rng)
            })
            .collect();

        let stars = (0..star_count)
            .map(|_| Star {
                pos: Vec2::new(
                    rng.uniform_int(0, SCREEN_WIDTH as i32) as f32,
                    rng.uniform_int(0, (SCREEN_HEIGHT / 2.0) as i32) as f32,
                ),
                brightness: rng.uniform_int(
                    i32::from(STAR_BRIGHTNESS_MIN),
                    i32::from(STAR_BRIGHTNESS_MAX),
                ) as u8,
                direction: if rng.chance(0.5) { 1 } else { -1 },
            })
            .collect();

        Self { clouds, stars }
    }

    /// Advance one frame. Stars only twinkle while they are visible.
    pub fn update<R: RandomSource + ?Sized>(&mut self, night: bool, rng: &mut R) {
        for cloud in &mut self.clouds {
            cloud.update(rng);
        }
        if night {
            for star in &mut self.stars {
                star.twinkle();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PcgSource;
    use proptest::prelude::*;

    #[test]
    fn test_counts_and_ranges() {
        let mut rng = PcgSource::new(7);
        let scenery = Scenery::new(&mut rng, 5, 50);
        assert_eq!(scenery.clouds.len(), 5);
        assert_eq!(scenery.stars.len(), 50);

        for cloud in &scenery.clouds {
            assert!((0.2..0.5).contains(&cloud.speed));
            assert!((30.0..=60.0).contains(&cloud.size));
            assert!((20.0..=100.0).contains(&cloud.pos.y));
        }
        for star in &scenery.stars {
            assert!(star.pos.y <= SCREEN_HEIGHT / 2.0);
            assert!(star.brightness >= STAR_BRIGHTNESS_MIN);
        }
    }

    #[test]
    fn test_cloud_respawns_right_of_screen() {
        let mut rng = PcgSource::new(1);
        let mut cloud = Cloud {
            pos: Vec2::new(-89.9, 50.0),
            speed: 0.3,
            size: 30.0,
        };
        cloud.update(&mut rng);
        assert!(cloud.pos.x >= SCREEN_WIDTH + 50.0);
        assert!(cloud.pos.x <= SCREEN_WIDTH + 150.0);
    }

    #[test]
    fn test_star_bounces_at_max() {
        let mut star = Star {
            pos: Vec2::ZERO,
            brightness: 254,
            direction: 1,
        };
        star.twinkle();
        assert_eq!(star.brightness, STAR_BRIGHTNESS_MAX);
        assert_eq!(star.direction, -1);
        star.twinkle();
        assert_eq!(star.brightness, 253);
    }

    #[test]
    fn test_stars_hold_still_by_day() {
        let mut rng = PcgSource::new(3);
        let mut scenery = Scenery::new(&mut rng, 0, 10);
        let before = scenery.stars.clone();
        scenery.update(false, &mut rng);
        assert_eq!(scenery.stars, before);
    }

    proptest! {
        #[test]
        fn prop_brightness_stays_in_range(
            start in STAR_BRIGHTNESS_MIN..=STAR_BRIGHTNESS_MAX,
            up in any::<bool>(),
            frames in 0usize..500,
        ) {
            let mut star = Star {
                pos: Vec2::ZERO,
                brightness: start,
                direction: if up { 1 } else { -1 },
            };
            for _ in 0..frames {
                star.twinkle();
                prop_assert!(star.brightness >= STAR_BRIGHTNESS_MIN);
            }
        }
    }
}
