//! Block Breaker entry point
//!
//! Runs a headless demo session: assets are marked ready eagerly, an
//! autopilot plays the paddle, and the outcome lands in the log. Pass a
//! JSON file path to override the default arena configuration.

use std::env;
use std::fs;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use block_breaker::assets::{AssetSource, EagerAssets, Preloader};
use block_breaker::audio::{AudioSink, SoundCue};
use block_breaker::config::ArenaConfig;
use block_breaker::input::{InputSource, PaddleCommand};
use block_breaker::render::Renderer;
use block_breaker::scheduler::{self, IntervalDriver};
use block_breaker::sim::Session;

/// Display refresh rate the demo pretends the host runs at; deliberately
/// higher than the simulation tick rate so frame admission is exercised.
const REFRESH_RATE: u32 = 60;

fn main() {
    env_logger::init();
    if let Err(err) = play() {
        log::error!("{err}");
        process::exit(1);
    }
}

fn play() -> Result<(), Box<dyn std::error::Error>> {
    let config: ArenaConfig = match env::args().nth(1) {
        Some(path) => {
            log::info!("loading arena config from {path}");
            serde_json::from_str(&fs::read_to_string(&path)?)?
        }
        None => ArenaConfig::default(),
    };

    // Session creation is gated on every asset reporting ready
    let mut gate = Preloader::new();
    EagerAssets.preload(&mut gate)?;
    gate.ensure_complete()?;

    let seed = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64;
    log::info!("starting session with seed {seed}");
    let mut session = Session::new(config, seed)?;

    let mut driver = IntervalDriver::new(REFRESH_RATE);
    let mut input = Autopilot;
    let mut renderer = ScoreLog::default();
    let mut audio = CueLog;

    let outcome = scheduler::run(&mut session, &mut driver, &mut input, &mut renderer, &mut audio);
    log::info!("{outcome:?} with {} points", session.display_score());
    Ok(())
}

/// Keeps the paddle centered under the ball so a headless run plays a
/// full session unattended.
struct Autopilot;

impl InputSource for Autopilot {
    fn pump(&mut self, session: &mut Session) {
        if session.paddle.ball_attached {
            session.apply_input(PaddleCommand::Launch);
            return;
        }
        let paddle_center = session.paddle.pos.x + session.paddle.size.x / 2.0;
        let error = session.ball.center_x() - paddle_center;
        let command = if error < -session.paddle.speed {
            PaddleCommand::MoveLeft
        } else if error > session.paddle.speed {
            PaddleCommand::MoveRight
        } else {
            PaddleCommand::Stop
        };
        session.apply_input(command);
    }
}

/// Logs each cue with the asset a real host would play.
struct CueLog;

impl AudioSink for CueLog {
    fn play(&mut self, cue: SoundCue) {
        log::debug!("audio cue {:?} ({})", cue, cue.asset().path());
    }
}

/// Logs the HUD line whenever the score changes.
#[derive(Default)]
struct ScoreLog {
    last_score: Option<u32>,
}

impl Renderer for ScoreLog {
    fn draw(&mut self, session: &Session) {
        if self.last_score != Some(session.score) {
            self.last_score = Some(session.score);
            log::info!(
                "score: {} ({} blocks left)",
                session.display_score(),
                session.blocks_remaining()
            );
        }
    }
}
