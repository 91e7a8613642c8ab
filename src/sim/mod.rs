//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (block grid order, fixed at creation)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Side, bound_crossing};
pub use state::{Ball, Block, GameEvent, Outcome, Paddle, Session};
pub use tick::tick;
