//! Audio collaborator contract
//!
//! Cues are fire-and-forget: the simulation reports that a bump happened
//! and never observes whether anything actually played.

use crate::assets::AssetId;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Ball hit a block or the paddle
    Bump,
}

impl SoundCue {
    /// The preloaded asset backing this cue.
    pub fn asset(self) -> AssetId {
        match self {
            SoundCue::Bump => AssetId::BumpSound,
        }
    }
}

pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Discards every cue; for headless runs and tests.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
}
