//! Platform-independent core of the hero canvas: particles, the field that
//! owns them, pointer and input plumbing, and a stoppable run loop.
//!
//! Nothing here touches the DOM. The web crate supplies a [`Surface`] backed
//! by a 2D canvas and drives [`Animation::step`] from `requestAnimationFrame`.

pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod icons;
pub mod input;
pub mod params;
pub mod particle;
pub mod pointer;
pub mod run;
pub mod surface;

pub use config::FieldConfig;
pub use error::ConfigError;
pub use field::{particle_count, ParticleField};
pub use icons::Icon;
pub use input::{InputEvent, InputQueue, TouchPoints};
pub use params::{ParamGenerator, ParticleParams};
pub use particle::Particle;
pub use pointer::PointerState;
pub use run::{Animation, LoopStatus, StopToken};
pub use surface::Surface;
