use crate::constants::{EASE_FACTOR, FLOAT_Y_PHASE_RATIO, INTERACTION_RADIUS};
use crate::icons::Icon;
use crate::params::ParticleParams;
use crate::pointer::PointerState;
use crate::surface::Surface;
use glam::Vec2;

/// One floating icon anchored to a base position.
///
/// Each tick it either eases toward a point on its idle ellipse around the
/// base, or, when the pointer is within `interaction_radius`, is pushed
/// directly away from the pointer. Appearance (size, density, opacity, icon,
/// drift reach) is fixed at construction; only `update` moves it.
#[derive(Clone, Debug)]
pub struct Particle {
    position: Vec2,
    base: Vec2,
    size: f32,
    density: f32,
    opacity: f32,
    icon: Icon,
    interaction_radius: f32,
    ease_factor: f32,
    angle: f64,
    rotation_speed: f64,
    float_angle: f64,
    float_speed: f64,
    float_radius: f32,
}

impl Particle {
    /// Place a particle at `base` with the default interaction tuning.
    pub fn new(base: Vec2, params: ParticleParams) -> Self {
        Self {
            position: base,
            base,
            size: params.size,
            density: params.density,
            opacity: params.opacity,
            icon: params.icon,
            interaction_radius: INTERACTION_RADIUS,
            ease_factor: EASE_FACTOR,
            angle: params.angle,
            rotation_speed: params.rotation_speed,
            float_angle: params.float_angle,
            float_speed: params.float_speed,
            float_radius: params.float_radius,
        }
    }

    pub fn with_interaction(mut self, radius: f32, ease_factor: f32) -> Self {
        self.interaction_radius = radius;
        self.ease_factor = ease_factor;
        self
    }

    /// Advance one tick against the current pointer snapshot.
    ///
    /// A pointer sitting exactly on the particle gives a zero distance and
    /// the push direction becomes NaN; that NaN is not guarded and sticks to
    /// the position from then on.
    pub fn update(&mut self, pointer: &PointerState) {
        self.float_angle += self.float_speed;
        self.angle += self.rotation_speed;
        let target = self.idle_target();

        if let Some(p) = pointer.position() {
            let distance = self.position.distance(p);
            if distance < self.interaction_radius {
                let force = (self.interaction_radius - distance) / self.interaction_radius;
                let direction = (p - self.position) / distance;
                self.position -= direction * force * self.density;
                return;
            }
        }

        self.position += (target - self.position) * self.ease_factor;
    }

    /// Point on the drift ellipse for the current `float_angle`.
    pub fn idle_target(&self) -> Vec2 {
        let drift = Vec2::new(
            self.float_angle.sin() as f32,
            (self.float_angle * FLOAT_Y_PHASE_RATIO).cos() as f32,
        );
        self.base + drift * self.float_radius
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let half = self.size / 2.0;
        surface.save();
        surface.set_global_alpha(self.opacity);
        surface.translate(self.position);
        // accumulated angle goes straight to the canvas as radians
        surface.rotate(self.angle);
        surface.draw_icon(self.icon, Vec2::splat(-half), Vec2::splat(self.size));
        surface.restore();
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn base(&self) -> Vec2 {
        self.base
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn icon(&self) -> Icon {
        self.icon
    }

    pub fn interaction_radius(&self) -> f32 {
        self.interaction_radius
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn rotation_speed(&self) -> f64 {
        self.rotation_speed
    }

    pub fn float_angle(&self) -> f64 {
        self.float_angle
    }

    pub fn float_speed(&self) -> f64 {
        self.float_speed
    }

    pub fn float_radius(&self) -> f32 {
        self.float_radius
    }
}
