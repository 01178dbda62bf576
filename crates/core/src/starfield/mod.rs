//! Parallax starfield: points fly toward a pinhole camera and respawn at the
//! far plane once they pass it.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::config::{StarConfig, Viewport};

const MIN_SPEED: f32 = 0.2;
const MAX_SPEED: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    /// Depth: 0 is the camera, `spread` the far plane.
    pub z: f32,
    /// Depth lost per update. Always positive.
    pub speed: f32,
}

/// Screen-space placement of a visible star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub x: i32,
    pub y: i32,
    pub size: f32,
}

/// Fixed-size collection of stars. The count never changes after
/// construction; stars are recycled, not removed.
#[derive(Debug)]
pub struct StarField {
    stars: Vec<Star>,
    spread: f32,
    focal_length: f32,
    max_size: f32,
    rng: StdRng,
}

impl StarField {
    pub fn new(config: &StarConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: &StarConfig, mut rng: StdRng) -> Self {
        let spread = config.spread;
        let stars = (0..config.count)
            .map(|_| {
                let (x, y) = lateral(&mut rng, spread);
                Star {
                    x,
                    y,
                    z: rng.gen_range(0.0..spread),
                    speed: rng.gen_range(MIN_SPEED..MAX_SPEED),
                }
            })
            .collect();
        Self {
            stars,
            spread,
            focal_length: config.focal_length,
            max_size: config.max_size,
            rng,
        }
    }

    /// Builds a field from explicit stars; respawns still draw from `rng`.
    pub fn from_stars(config: &StarConfig, stars: Vec<Star>, rng: StdRng) -> Self {
        Self {
            stars,
            spread: config.spread,
            focal_length: config.focal_length,
            max_size: config.max_size,
            rng,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn spread(&self) -> f32 {
        self.spread
    }

    pub fn update(&mut self) {
        for star in &mut self.stars {
            star.z -= star.speed;
            if star.z <= 0.0 {
                let (x, y) = lateral(&mut self.rng, self.spread);
                star.x = x;
                star.y = y;
                star.z = self.spread;
            }
        }
    }

    /// Pinhole projection. `None` when the star is at or behind the camera
    /// or lands outside the viewport.
    pub fn project(&self, star: &Star, viewport: Viewport) -> Option<Projection> {
        if star.z <= 0.0 {
            return None;
        }
        let k = self.focal_length / star.z;
        let x = (star.x * k + (viewport.width / 2) as f32) as i32;
        let y = (star.y * k + (viewport.height / 2) as f32) as i32;
        let inside = (0..viewport.width as i32).contains(&x) && (0..viewport.height as i32).contains(&y);
        inside.then(|| Projection {
            x,
            y,
            size: self.size_at(star.z),
        })
    }

    /// Apparent size, growing linearly as the star approaches the camera.
    pub fn size_at(&self, z: f32) -> f32 {
        (1.0 - z / self.spread) * self.max_size
    }

    pub fn visible(&self, viewport: Viewport) -> impl Iterator<Item = Projection> + '_ {
        self.stars
            .iter()
            .filter_map(move |star| self.project(star, viewport))
    }
}

fn lateral(rng: &mut StdRng, spread: f32) -> (f32, f32) {
    let half = spread / 2.0;
    (rng.gen_range(-half..half), rng.gen_range(-half..half))
}
