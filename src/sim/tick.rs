//! Fixed timestep simulation tick
//!
//! Order within a tick: player (and turret), meteor spawning, meteor motion,
//! projectile motion and off-screen pruning, collisions, far-meteor pruning.

use super::body::{Body, remove_marked, step_all};
use super::input::TickInput;
use super::state::{GameEvent, GameState};
use crate::error::SimError;

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> Result<(), SimError> {
    state.events.clear();
    state.time_ticks += 1;

    let window = state.window;
    if let Some(shot) = state.player.update(input, &window)? {
        state.add_projectile(shot);
        state.emit(GameEvent::Shot);
    }

    spawn_meteors(state);

    for meteor in &mut state.meteors {
        meteor.update();
    }
    step_all(&mut state.projectiles, &window);

    resolve_collisions(state);

    state.meteors.retain(|m| !m.is_expired(&window));
    Ok(())
}

fn spawn_meteors(state: &mut GameState) {
    state.meteor_spawn_timer.update();
    if state.meteor_spawn_timer.is_ready() {
        state.meteor_spawn_timer.reset();
        state.spawn_meteor();
    }
}

/// Projectile/meteor hits first, then whatever meteors are left against the
/// player. Each projectile takes out at most one meteor and each meteor is
/// removed at most once; removals are applied after both passes.
fn resolve_collisions(state: &mut GameState) {
    let mut spent = vec![false; state.projectiles.len()];
    let mut destroyed = vec![false; state.meteors.len()];
    let mut events = Vec::new();

    for (i, projectile) in state.projectiles.iter().enumerate() {
        let shape = projectile.collider();
        let target = state
            .meteors
            .iter()
            .enumerate()
            .find(|(j, meteor)| !destroyed[*j] && shape.intersects_circle(meteor.position, meteor.radius()));
        if let Some((j, _)) = target {
            log::debug!("HIT! projectile {} meteor {}", i, j);
            spent[i] = true;
            destroyed[j] = true;
            events.push(GameEvent::MeteorDestroyed);
        }
    }

    let hull = state.player.collider();
    for (j, meteor) in state.meteors.iter().enumerate() {
        if destroyed[j] {
            continue;
        }
        if hull.intersects_circle(meteor.position, meteor.radius()) {
            log::debug!("HIT PLAYER meteor {}", j);
            destroyed[j] = true;
            state.player.hit();
            events.push(GameEvent::PlayerHit);
        }
    }

    remove_marked(&mut state.projectiles, &spent);
    remove_marked(&mut state.meteors, &destroyed);
    for event in events {
        state.emit(event);
    }
}
