//! Game state and core simulation types
//!
//! One `Session` owns every entity. The paddle carries no reference to
//! the ball; pre-launch carrying is resolved inside the tick where both
//! entities are reachable from the session.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{Aabb, Side};
use crate::config::{ArenaConfig, ConfigError};
use crate::consts::{BALL_SPRITE_FRAMES, POINTS_PER_BLOCK};
use crate::input::PaddleCommand;

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every block cleared
    Win,
    /// Ball crossed the bottom bound
    Loss,
}

/// Something the simulation did this tick that the host may care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball left the paddle
    BallLaunched,
    /// Block at this index went inactive
    BlockDestroyed { index: usize },
    /// Ball bounced off the paddle
    PaddleBounce,
    /// Ball bounced off an arena bound
    WallBounce(Side),
    /// Session reached a terminal state
    Ended(Outcome),
}

/// The ball entity
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Speed magnitude used when launching and bouncing
    pub speed: f32,
    /// Sprite animation frame, cycles while the ball is moving
    pub frame: u8,
}

impl Ball {
    fn new(config: &ArenaConfig) -> Self {
        Self {
            pos: config.ball_start,
            vel: Vec2::ZERO,
            size: config.ball_size,
            speed: config.ball_speed,
            frame: 0,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Bounding box one tick ahead, used for lookahead collision tests.
    pub fn prospective(&self) -> Aabb {
        Aabb::new(self.pos + self.vel, self.size)
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Commit one tick of motion and advance the spin animation.
    pub fn advance(&mut self) {
        self.pos += self.vel;
        if self.vel != Vec2::ZERO {
            self.frame = (self.frame + 1) % BALL_SPRITE_FRAMES;
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal velocity, always -speed, 0 or +speed
    pub vel_x: f32,
    pub speed: f32,
    /// True before the first launch; the paddle carries the ball
    pub ball_attached: bool,
}

impl Paddle {
    fn new(config: &ArenaConfig) -> Self {
        Self {
            pos: config.paddle_start,
            size: config.paddle_size,
            vel_x: 0.0,
            speed: config.paddle_speed,
            ball_attached: true,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Bounding box one tick ahead of the paddle's horizontal motion.
    pub fn prospective(&self) -> Aabb {
        Aabb::new(Vec2::new(self.pos.x + self.vel_x, self.pos.y), self.size)
    }

    /// Normalized horizontal contact point for a ball center at `cx`:
    /// -1 at the paddle's left edge, 0 at center, +1 at the right edge.
    /// Drives the outgoing horizontal speed fraction on a bounce.
    pub fn touch_offset(&self, cx: f32) -> f32 {
        let diff = (self.pos.x + self.size.x) - cx;
        let offset = self.size.x - diff;
        (2.0 * offset / self.size.x) - 1.0
    }
}

/// A destructible block
#[derive(Debug, Clone)]
pub struct Block {
    pub pos: Vec2,
    pub size: Vec2,
    pub active: bool,
}

impl Block {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Complete state of one game session.
///
/// Created once, mutated only by [`super::tick`] and [`Session::apply_input`],
/// and frozen permanently once a terminal outcome is reached. A fresh game
/// means a fresh `Session`.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: ArenaConfig,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Grid order, fixed at creation; blocks deactivate in place
    pub blocks: Vec<Block>,
    /// Blocks destroyed so far; increases by exactly 1 per deactivation
    pub score: u32,
    pub running: bool,
    pub outcome: Option<Outcome>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Launch intent set by input, consumed at the top of the next tick
    pub(crate) launch_requested: bool,
    /// One-shot: only the first launch is honored
    pub(crate) launched: bool,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl Session {
    /// Build a session from validated configuration.
    ///
    /// The block grid is laid out row-major with a fixed per-cell pitch;
    /// the ball starts at rest riding the paddle.
    pub fn new(config: ArenaConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let pitch = config.block_size + config.block_gap;
        let mut blocks = Vec::with_capacity((config.rows * config.cols) as usize);
        for row in 0..config.rows {
            for col in 0..config.cols {
                blocks.push(Block {
                    pos: config.grid_origin + pitch * Vec2::new(col as f32, row as f32),
                    size: config.block_size,
                    active: true,
                });
            }
        }

        Ok(Self {
            ball: Ball::new(&config),
            paddle: Paddle::new(&config),
            blocks,
            score: 0,
            running: true,
            outcome: None,
            time_ticks: 0,
            launch_requested: false,
            launched: false,
            rng: Pcg32::seed_from_u64(seed),
            config,
            events: Vec::new(),
        })
    }

    /// Map one discrete input command to paddle intent.
    ///
    /// Commands only set intent (paddle direction, launch request); the
    /// simulation itself is mutated exclusively by the tick. Latest
    /// command wins. Ignored once the session has ended.
    pub fn apply_input(&mut self, command: PaddleCommand) {
        if !self.running {
            return;
        }
        match command {
            PaddleCommand::MoveLeft => self.paddle.vel_x = -self.paddle.speed,
            PaddleCommand::MoveRight => self.paddle.vel_x = self.paddle.speed,
            PaddleCommand::Stop => self.paddle.vel_x = 0.0,
            PaddleCommand::Launch => self.launch_requested = true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// HUD score: each destroyed block is worth 100 points.
    pub fn display_score(&self) -> u32 {
        self.score * POINTS_PER_BLOCK
    }

    pub fn blocks_remaining(&self) -> usize {
        self.blocks.iter().filter(|b| b.active).count()
    }

    /// Take the events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Send the ball off the paddle. Honored at most once per session;
    /// later requests are no-ops. The horizontal component is drawn
    /// uniformly over the integers in [-speed, +speed] from the session's
    /// seeded RNG.
    pub(crate) fn launch(&mut self) {
        if !self.running || self.launched {
            return;
        }
        self.launched = true;
        self.paddle.ball_attached = false;
        self.ball.vel.y = -self.ball.speed;
        let speed = self.ball.speed as i32;
        self.ball.vel.x = self.rng.random_range(-speed..=speed) as f32;
        self.events.push(GameEvent::BallLaunched);
        log::debug!("ball launched with velocity {:?}", self.ball.vel);
    }

    /// Score one destroyed block; winning flips the session to its
    /// terminal state.
    pub(crate) fn add_score(&mut self) {
        self.score += 1;
        if self.score as usize >= self.blocks.len() {
            self.end(Outcome::Win);
        }
    }

    pub(crate) fn end(&mut self, outcome: Outcome) {
        self.running = false;
        self.outcome = Some(outcome);
        self.events.push(GameEvent::Ended(outcome));
        log::info!(
            "session over after {} ticks: {:?}, score {}",
            self.time_ticks,
            outcome,
            self.display_score()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(ArenaConfig::default(), 7).unwrap()
    }

    #[test]
    fn grid_has_fixed_pitch() {
        let s = session();
        assert_eq!(s.blocks.len(), 32);
        // First block sits at the grid origin
        assert_eq!(s.blocks[0].pos, Vec2::new(65.0, 35.0));
        // Column pitch is block width plus gap
        assert_eq!(s.blocks[1].pos.x - s.blocks[0].pos.x, 64.0);
        // Row pitch is block height plus gap
        assert_eq!(s.blocks[8].pos.y - s.blocks[0].pos.y, 24.0);
        assert!(s.blocks.iter().all(|b| b.active));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = ArenaConfig::default();
        config.rows = 0;
        assert!(Session::new(config, 0).is_err());
    }

    #[test]
    fn touch_offset_maps_edges_and_center() {
        let s = session();
        let paddle = &s.paddle;
        let left = paddle.pos.x;
        let right = paddle.pos.x + paddle.size.x;
        let center = left + paddle.size.x / 2.0;
        assert_eq!(paddle.touch_offset(left), -1.0);
        assert_eq!(paddle.touch_offset(right), 1.0);
        assert_eq!(paddle.touch_offset(center), 0.0);
    }

    #[test]
    fn ball_frame_cycles_only_while_moving() {
        let mut s = session();
        s.ball.advance();
        assert_eq!(s.ball.frame, 0, "resting ball must not animate");

        s.ball.vel = Vec2::new(1.0, 0.0);
        for expected in [1, 2, 3, 0, 1] {
            s.ball.advance();
            assert_eq!(s.ball.frame, expected);
        }
    }

    #[test]
    fn launch_is_one_shot() {
        let mut s = session();
        s.launch();
        let vel = s.ball.vel;
        assert_eq!(vel.y, -s.ball.speed);
        assert!(vel.x >= -s.ball.speed && vel.x <= s.ball.speed);
        assert!(!s.paddle.ball_attached);

        // A second launch must not re-roll the velocity
        s.launch();
        assert_eq!(s.ball.vel, vel);
    }

    #[test]
    fn launch_velocity_is_deterministic_per_seed() {
        let mut a = Session::new(ArenaConfig::default(), 42).unwrap();
        let mut b = Session::new(ArenaConfig::default(), 42).unwrap();
        a.launch();
        b.launch();
        assert_eq!(a.ball.vel, b.ball.vel);
    }

    #[test]
    fn input_is_ignored_after_session_ends() {
        let mut s = session();
        s.end(Outcome::Loss);
        s.apply_input(PaddleCommand::MoveLeft);
        assert_eq!(s.paddle.vel_x, 0.0);
    }

    #[test]
    fn score_win_flips_running_exactly_at_block_count() {
        let mut config = ArenaConfig::default();
        config.rows = 1;
        config.cols = 2;
        let mut s = Session::new(config, 0).unwrap();
        s.add_score();
        assert!(s.running);
        s.add_score();
        assert!(!s.running);
        assert_eq!(s.outcome, Some(Outcome::Win));
        assert_eq!(s.display_score(), 200);
    }
}
