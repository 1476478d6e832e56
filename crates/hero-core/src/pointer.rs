use glam::Vec2;

/// Last known pointer position in surface-local pixels.
///
/// `None` until the first mouse or touch move; the field treats that as
/// "no active pointer" and particles only drift.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    position: Option<Vec2>,
}

impl PointerState {
    pub fn at(position: Vec2) -> Self {
        Self {
            position: Some(position),
        }
    }

    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.position.is_some()
    }

    /// `client` is viewport-relative, `origin` the surface's bounding box top-left.
    pub fn set_from_client(&mut self, client: Vec2, origin: Vec2) {
        self.position = Some(client - origin);
    }

    /// Follows the first touch point; an empty list keeps the previous position.
    pub fn set_from_touches(&mut self, touches: &[Vec2], origin: Vec2) {
        if let Some(first) = touches.first() {
            self.set_from_client(*first, origin);
        }
    }
}
