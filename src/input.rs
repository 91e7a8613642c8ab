//! Input collaborator contract
//!
//! The host owns the input device; the core only understands discrete
//! paddle commands. Commands map 1:1 onto paddle intent through
//! [`Session::apply_input`] with no buffering — the latest command wins.

use crate::sim::Session;

/// A discrete command aimed at the paddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleCommand {
    MoveLeft,
    MoveRight,
    /// Key released; the paddle coasts to a stop immediately
    Stop,
    /// Send the ball off the paddle (honored once per session)
    Launch,
}

/// Delivers pending commands to the session, once per host frame.
///
/// Implementations may read the session to decide what to send (the demo
/// autopilot does), but must mutate it only through
/// [`Session::apply_input`].
pub trait InputSource {
    fn pump(&mut self, session: &mut Session);
}

/// An input source with nothing to say.
#[derive(Debug, Default)]
pub struct NullInput;

impl InputSource for NullInput {
    fn pump(&mut self, _session: &mut Session) {}
}
