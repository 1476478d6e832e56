use crate::config::FieldConfig;
use crate::input::{InputEvent, InputQueue};
use crate::params::ParamGenerator;
use crate::particle::Particle;
use crate::pointer::PointerState;
use crate::surface::Surface;
use glam::Vec2;

/// Number of particles a `width` x `height` surface gets: one per
/// `area_per_particle` px², rounded down.
#[inline]
pub fn particle_count(width: u32, height: u32, area_per_particle: u32) -> usize {
    let area = width as u64 * height as u64;
    (area / area_per_particle.max(1) as u64) as usize
}

/// The hero animation: a fixed population of particles, the pointer they
/// react to, and the surface they are painted on.
///
/// The population is sized once from the surface area at construction;
/// later resizes only change the surface. Input arrives through the
/// [`InputQueue`] given at construction and is applied at the start of each
/// [`tick`](Self::tick), so the pointer never changes mid-frame.
pub struct ParticleField<S: Surface> {
    particles: Vec<Particle>,
    pointer: PointerState,
    inputs: InputQueue,
    surface: S,
    width: u32,
    height: u32,
    config: FieldConfig,
}

impl<S: Surface> ParticleField<S> {
    /// Build a field, seeding from `config.seed` or from entropy.
    pub fn new(
        config: FieldConfig,
        width: u32,
        height: u32,
        inputs: InputQueue,
        surface: S,
    ) -> Self {
        let mut params = match config.seed {
            Some(seed) => ParamGenerator::seeded(seed),
            None => ParamGenerator::from_entropy(),
        };
        Self::with_generator(config, width, height, inputs, surface, &mut params)
    }

    pub fn with_generator(
        config: FieldConfig,
        width: u32,
        height: u32,
        inputs: InputQueue,
        surface: S,
        params: &mut ParamGenerator,
    ) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            pointer: PointerState::default(),
            inputs,
            surface,
            width: 0,
            height: 0,
            config,
        };
        field.resize(width, height);

        let count = particle_count(width, height, field.config.area_per_particle);
        let radius = field.config.interaction_radius;
        let ease = field.config.ease_factor;
        field.particles = (0..count)
            .map(|_| {
                let base = params.position_in(width as f32, height as f32);
                Particle::new(base, params.particle()).with_interaction(radius, ease)
            })
            .collect();
        log::info!("[field] {} particles for {}x{}", count, width, height);
        field
    }

    /// Follow the container's new box size. Particles keep their anchors.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.surface.resize(width, height);
        log::debug!("[field] resized to {}x{}", width, height);
    }

    pub fn on_pointer_move(&mut self, client: Vec2, origin: Vec2) {
        self.pointer.set_from_client(client, origin);
    }

    pub fn on_touch_move(&mut self, touches: &[Vec2], origin: Vec2) {
        self.pointer.set_from_touches(touches, origin);
    }

    /// Apply pending input, clear, then update and draw every particle in
    /// insertion order.
    pub fn tick(&mut self) {
        self.apply_inputs();
        self.surface.clear();
        for particle in &mut self.particles {
            particle.update(&self.pointer);
            particle.draw(&mut self.surface);
        }
    }

    fn apply_inputs(&mut self) {
        for event in self.inputs.drain() {
            match event {
                InputEvent::PointerMove { client, origin } => self.on_pointer_move(client, origin),
                InputEvent::TouchMove { touches, origin } => self.on_touch_move(&touches, origin),
                InputEvent::Resize { width, height } => self.resize(width, height),
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// A handle on the queue this field drains; events pushed through it
    /// land on the next tick.
    pub fn inputs(&self) -> InputQueue {
        self.inputs.clone()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
