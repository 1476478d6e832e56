use glam::Vec2;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// Touch points in client coordinates, first finger first.
pub type TouchPoints = SmallVec<[Vec2; 4]>;

/// Host input the field cares about, recorded by event handlers and applied
/// at the start of the next tick.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove { client: Vec2, origin: Vec2 },
    TouchMove { touches: TouchPoints, origin: Vec2 },
    Resize { width: u32, height: u32 },
}

impl InputEvent {
    /// Whether applying this event sets the pointer. A touch move with no
    /// touches leaves the pointer alone.
    fn moves_pointer(&self) -> bool {
        match self {
            InputEvent::PointerMove { .. } => true,
            InputEvent::TouchMove { touches, .. } => !touches.is_empty(),
            InputEvent::Resize { .. } => false,
        }
    }
}

/// Shared single-threaded queue between input handlers and the field.
///
/// Clones share the same buffer: hand one to each handler and one to
/// [`ParticleField`](crate::ParticleField).
///
/// Only the latest pointer position and the latest size matter to the next
/// tick, so a push replaces any pending event of the same kind. The queue
/// holds at most one pointer move and one resize however long the frame
/// loop is throttled.
#[derive(Clone, Default)]
pub struct InputQueue {
    pending: Rc<RefCell<Vec<InputEvent>>>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: InputEvent) {
        let mut pending = self.pending.borrow_mut();
        match &event {
            InputEvent::Resize { .. } => {
                pending.retain(|e| !matches!(e, InputEvent::Resize { .. }));
            }
            e if e.moves_pointer() => pending.retain(|queued| !queued.moves_pointer()),
            // empty touch list: nothing to apply
            _ => return,
        }
        pending.push(event);
    }

    /// Take every queued event in arrival order, leaving the queue empty.
    pub fn drain(&self) -> Vec<InputEvent> {
        std::mem::take(&mut *self.pending.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}
