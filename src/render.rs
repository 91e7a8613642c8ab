//! Rendering collaborator contract
//!
//! Called once per accepted tick with the state the update left behind.
//! The borrow is read-only; drawing never feeds back into the
//! simulation.

use crate::sim::Session;

pub trait Renderer {
    fn draw(&mut self, session: &Session);
}

/// Renderer that draws nothing; for headless runs and tests.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _session: &Session) {}
}
