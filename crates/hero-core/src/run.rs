use crate::field::ParticleField;
use crate::surface::Surface;
use std::cell::Cell;
use std::rc::Rc;

/// Shared flag that ends an [`Animation`] at its next step.
///
/// Clones observe the same flag. Stopping is one-way and idempotent.
#[derive(Clone, Debug, Default)]
pub struct StopToken {
    stopped: Rc<Cell<bool>>,
}

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.set(true);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopStatus {
    /// A frame ran; schedule the next one.
    Continue,
    /// The token was stopped; nothing ran and nothing should be scheduled.
    Stopped,
}

/// A field plus the run state the frame scheduler needs.
pub struct Animation<S: Surface> {
    field: ParticleField<S>,
    stop: StopToken,
    frames: u64,
    finished: bool,
}

impl<S: Surface> Animation<S> {
    pub fn new(field: ParticleField<S>) -> Self {
        Self::with_token(field, StopToken::new())
    }

    pub fn with_token(field: ParticleField<S>, stop: StopToken) -> Self {
        Self {
            field,
            stop,
            frames: 0,
            finished: false,
        }
    }

    /// Run one tick unless stopped.
    pub fn step(&mut self) -> LoopStatus {
        if self.stop.is_stopped() {
            if !self.finished {
                self.finished = true;
                log::info!("[loop] stopped after {} frames", self.frames);
            }
            return LoopStatus::Stopped;
        }
        self.field.tick();
        self.frames += 1;
        LoopStatus::Continue
    }

    pub fn stop_token(&self) -> StopToken {
        self.stop.clone()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn field(&self) -> &ParticleField<S> {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField<S> {
        &mut self.field
    }
}
