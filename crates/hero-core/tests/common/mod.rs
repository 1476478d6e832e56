// Shared test helpers: a surface that records every call.

#![allow(dead_code)]
use glam::Vec2;
use hero_core::{Icon, ParticleParams, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Resize(u32, u32),
    Clear,
    Save,
    Restore,
    Alpha(f32),
    Translate(Vec2),
    Rotate(f64),
    DrawIcon(Icon, Vec2, Vec2),
}

#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
    pub width: u32,
    pub height: u32,
}

impl Recorder {
    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Surface for Recorder {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.ops.push(Op::Resize(width, height));
    }
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }
    fn save(&mut self) {
        self.ops.push(Op::Save);
    }
    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }
    fn set_global_alpha(&mut self, alpha: f32) {
        self.ops.push(Op::Alpha(alpha));
    }
    fn translate(&mut self, offset: Vec2) {
        self.ops.push(Op::Translate(offset));
    }
    fn rotate(&mut self, radians: f64) {
        self.ops.push(Op::Rotate(radians));
    }
    fn draw_icon(&mut self, icon: Icon, origin: Vec2, extent: Vec2) {
        self.ops.push(Op::DrawIcon(icon, origin, extent));
    }
}

/// Deterministic parameters with no idle drift, so the idle target is fixed
/// at `base + (0, float_radius)`.
pub fn still_params() -> ParticleParams {
    ParticleParams {
        size: 30.0,
        density: 5.0,
        opacity: 0.8,
        icon: Icon::Frame,
        angle: 350.0,
        rotation_speed: 0.015,
        float_angle: 0.0,
        float_speed: 0.0,
        float_radius: 40.0,
    }
}
