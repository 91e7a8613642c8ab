//! Fixed timestep simulation tick
//!
//! One tick runs collision detection against prospective positions,
//! resolves responses, then commits motion. Stage order matches the
//! observable behavior of the reference game: blocks, paddle, ball
//! bounds, paddle bounds, then movement.

use super::collision::{Side, bound_crossing};
use super::state::{GameEvent, Outcome, Session};

/// Advance the session by one fixed timestep.
///
/// A finished session is inert: the tick returns without touching it.
pub fn tick(session: &mut Session) {
    if !session.running {
        return;
    }
    session.time_ticks += 1;

    if session.launch_requested {
        session.launch_requested = false;
        session.launch();
    }

    collide_blocks(session);
    if !session.running {
        // Cleared the last block this tick; state is frozen as-is.
        return;
    }
    collide_paddle(session);
    ball_world_bounds(session);
    if !session.running {
        // Bottom exit is terminal: no clamp and no motion commit.
        return;
    }
    paddle_world_bounds(session);
    advance(session);
}

/// Every active block is tested in collection order with no early exit,
/// so a ball reaching two blocks in one tick bounces and scores against
/// both. Each test sees the velocity left behind by the previous hit.
fn collide_blocks(session: &mut Session) {
    for index in 0..session.blocks.len() {
        if !session.blocks[index].active {
            continue;
        }
        if session.ball.prospective().overlaps(&session.blocks[index].aabb()) {
            session.ball.vel.y = -session.ball.vel.y;
            session.blocks[index].active = false;
            session.events.push(GameEvent::BlockDestroyed { index });
            session.add_score();
        }
    }
}

/// Bounce off the paddle, applying angle control from the contact point.
/// An upward-moving ball is ignored so it cannot re-collide with the
/// paddle it just left.
fn collide_paddle(session: &mut Session) {
    if !session.ball.prospective().overlaps(&session.paddle.aabb()) {
        return;
    }
    if session.ball.vel.y < 0.0 {
        return;
    }
    session.ball.vel.y = -session.ball.speed;
    session.ball.vel.x = session.ball.speed * session.paddle.touch_offset(session.ball.center_x());
    session.events.push(GameEvent::PaddleBounce);
}

/// Resolve the ball against the arena bounds. The four checks are
/// mutually exclusive and fire in priority order left, right, top,
/// bottom; bottom exit ends the session instead of bouncing.
fn ball_world_bounds(session: &mut Session) {
    let (width, height) = (session.config.width, session.config.height);
    let ball = &mut session.ball;
    match bound_crossing(&ball.prospective(), width, height) {
        Some(Side::Left) => {
            ball.pos.x = 0.0;
            ball.vel.x = ball.speed;
            session.events.push(GameEvent::WallBounce(Side::Left));
        }
        Some(Side::Right) => {
            ball.pos.x = width - ball.size.x;
            ball.vel.x = -ball.speed;
            session.events.push(GameEvent::WallBounce(Side::Right));
        }
        Some(Side::Top) => {
            ball.pos.y = 0.0;
            ball.vel.y = ball.speed;
            session.events.push(GameEvent::WallBounce(Side::Top));
        }
        Some(Side::Bottom) => session.end(Outcome::Loss),
        None => {}
    }
}

/// The paddle stops at a wall; it never bounces, and stopping before the
/// crossing means no clamp is needed.
fn paddle_world_bounds(session: &mut Session) {
    let crossing = bound_crossing(
        &session.paddle.prospective(),
        session.config.width,
        session.config.height,
    );
    if matches!(crossing, Some(Side::Left | Side::Right)) {
        session.paddle.vel_x = 0.0;
    }
}

/// Commit motion. The paddle moves first; while the ball is still
/// attached it rides along with the same horizontal delta.
fn advance(session: &mut Session) {
    let dx = session.paddle.vel_x;
    if dx != 0.0 {
        session.paddle.pos.x += dx;
        if session.paddle.ball_attached {
            session.ball.pos.x += dx;
        }
    }
    session.ball.advance();
}
