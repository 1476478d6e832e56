//! Drawing seam between the simulation and whatever paints it.
//!
//! The browser implementation wraps a `CanvasRenderingContext2d`; tests use a
//! recorder. Calls mirror the 2D canvas state machine: `save`/`restore`
//! bracket the per-particle transform and alpha.

use crate::icons::Icon;
use glam::Vec2;

pub trait Surface {
    /// Set the backing size in pixels.
    fn resize(&mut self, width: u32, height: u32);

    /// Erase the whole surface.
    fn clear(&mut self);

    fn save(&mut self);

    fn restore(&mut self);

    fn set_global_alpha(&mut self, alpha: f32);

    fn translate(&mut self, offset: Vec2);

    /// Rotate the current transform; the value is taken as radians.
    fn rotate(&mut self, radians: f64);

    /// Draw `icon` into the rectangle at `origin` with `extent`, in the
    /// current (translated and rotated) coordinate space.
    fn draw_icon(&mut self, icon: Icon, origin: Vec2, extent: Vec2);
}
