use crate::constants::*;
use crate::icons::Icon;
use glam::Vec2;
use rand::prelude::*;

/// Visual and motion parameters drawn once per particle.
///
/// Fields:
/// - `size`: edge length of the drawn icon in px, `[20, 50)`
/// - `density`: repulsion multiplier, `[1, 21)`
/// - `opacity`: global alpha, `[0.4, 1.1)`; values above 1 are left to the canvas
/// - `icon`: which glyph to draw
/// - `angle` / `rotation_speed`: initial rotation and per-tick increment
/// - `float_angle` / `float_speed` / `float_radius`: idle drift phase, rate and reach
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleParams {
    pub size: f32,
    pub density: f32,
    pub opacity: f32,
    pub icon: Icon,
    pub angle: f64,
    pub rotation_speed: f64,
    pub float_angle: f64,
    pub float_speed: f64,
    pub float_radius: f32,
}

/// Seedable source of particle placements and parameters.
///
/// All randomness in the field flows through here so a fixed seed reproduces
/// the exact same population.
pub struct ParamGenerator {
    rng: StdRng,
}

impl ParamGenerator {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Uniform point inside a `width` x `height` surface.
    pub fn position_in(&mut self, width: f32, height: f32) -> Vec2 {
        let x = self.rng.gen::<f32>() * width;
        let y = self.rng.gen::<f32>() * height;
        Vec2::new(x, y)
    }

    pub fn particle(&mut self) -> ParticleParams {
        ParticleParams {
            size: self.span(SIZE_MIN, SIZE_SPAN),
            density: self.span(DENSITY_MIN, DENSITY_SPAN),
            opacity: self.span(OPACITY_MIN, OPACITY_SPAN),
            icon: Icon::ALL[self.rng.gen_range(0..Icon::ALL.len())],
            angle: self.phase(0.0, ANGLE_SEED_MAX),
            rotation_speed: self.phase(ROTATION_SPEED_MIN, ROTATION_SPEED_SPAN),
            float_angle: self.phase(0.0, FLOAT_ANGLE_SEED_MAX),
            float_speed: self.phase(FLOAT_SPEED_MIN, FLOAT_SPEED_SPAN),
            float_radius: self.span(FLOAT_RADIUS_MIN, FLOAT_RADIUS_SPAN),
        }
    }

    #[inline]
    fn span(&mut self, min: f32, span: f32) -> f32 {
        self.rng.gen_range(min..min + span)
    }

    #[inline]
    fn phase(&mut self, min: f64, span: f64) -> f64 {
        self.rng.gen_range(min..min + span)
    }
}
