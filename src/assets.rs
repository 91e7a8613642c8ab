//! Asset preloading gate
//!
//! Session creation waits until every required visual and audio asset
//! has reported ready exactly once. The actual loading is the host's
//! business; the core only tracks the gate.

use std::fmt;

/// Every asset the game needs before the first tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetId {
    BackgroundSprite,
    BallSprite,
    BlockSprite,
    PaddleSprite,
    BumpSound,
}

impl AssetId {
    pub const ALL: [AssetId; 5] = [
        AssetId::BackgroundSprite,
        AssetId::BallSprite,
        AssetId::BlockSprite,
        AssetId::PaddleSprite,
        AssetId::BumpSound,
    ];

    /// Load path relative to the asset root.
    pub fn path(self) -> &'static str {
        match self {
            AssetId::BackgroundSprite => "img/background.png",
            AssetId::BallSprite => "img/ball.png",
            AssetId::BlockSprite => "img/block.png",
            AssetId::PaddleSprite => "img/paddle.png",
            AssetId::BumpSound => "sounds/bump.mp3",
        }
    }
}

/// Loads assets and reports each one ready through the gate.
pub trait AssetSource {
    fn preload(&mut self, gate: &mut Preloader) -> Result<(), PreloadError>;
}

/// Marks everything ready immediately; for headless runs and tests.
#[derive(Debug, Default)]
pub struct EagerAssets;

impl AssetSource for EagerAssets {
    fn preload(&mut self, gate: &mut Preloader) -> Result<(), PreloadError> {
        for asset in AssetId::ALL {
            gate.asset_ready(asset)?;
        }
        Ok(())
    }
}

/// Tracks which required assets have reported ready.
#[derive(Debug)]
pub struct Preloader {
    pending: Vec<AssetId>,
}

impl Preloader {
    pub fn new() -> Self {
        Self {
            pending: AssetId::ALL.to_vec(),
        }
    }

    /// Record one ready report. Each asset must report exactly once;
    /// a second report for the same asset is an error.
    pub fn asset_ready(&mut self, asset: AssetId) -> Result<(), PreloadError> {
        match self.pending.iter().position(|&pending| pending == asset) {
            Some(index) => {
                self.pending.swap_remove(index);
                log::debug!("asset ready: {}", asset.path());
                Ok(())
            }
            None => Err(PreloadError::DuplicateReady(asset)),
        }
    }

    pub fn complete(&self) -> bool {
        self.pending.is_empty()
    }

    /// Gate check before session creation.
    pub fn ensure_complete(&self) -> Result<(), PreloadError> {
        if self.pending.is_empty() {
            Ok(())
        } else {
            Err(PreloadError::StillPending(self.pending.len()))
        }
    }
}

impl Default for Preloader {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloadError {
    /// An asset reported ready more than once
    DuplicateReady(AssetId),
    /// The gate was consulted while assets were still loading
    StillPending(usize),
}

impl fmt::Display for PreloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreloadError::DuplicateReady(asset) => {
                write!(f, "asset {} reported ready twice", asset.path())
            }
            PreloadError::StillPending(count) => {
                write!(f, "{count} assets still loading")
            }
        }
    }
}

impl std::error::Error for PreloadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_opens_only_when_every_asset_is_ready() {
        let mut gate = Preloader::new();
        assert!(!gate.complete());
        assert_eq!(gate.ensure_complete(), Err(PreloadError::StillPending(5)));

        for asset in AssetId::ALL {
            gate.asset_ready(asset).unwrap();
        }
        assert!(gate.complete());
        assert!(gate.ensure_complete().is_ok());
    }

    #[test]
    fn duplicate_ready_report_is_an_error() {
        let mut gate = Preloader::new();
        gate.asset_ready(AssetId::BallSprite).unwrap();
        assert_eq!(
            gate.asset_ready(AssetId::BallSprite),
            Err(PreloadError::DuplicateReady(AssetId::BallSprite))
        );
    }

    #[test]
    fn eager_source_fills_the_gate() {
        let mut gate = Preloader::new();
        EagerAssets.preload(&mut gate).unwrap();
        assert!(gate.complete());
    }
}
