pub mod board;
pub mod config;
pub mod error;
pub mod model;
pub mod rng;
pub mod rules;
pub mod session;

use log::{debug, info};

pub use config::EngineConfig;
pub use error::{ConfigError, EngineError};
pub use model::*;
pub use rng::{DiceSource, FixedDice, RngDice};
pub use session::Game;

use rng::draw_face;
use rules::{move_backward, move_forward, next_turn, valid_player_count, GOAL};

pub fn start_game(player_count: usize) -> Result<GameState, EngineError> {
    if !valid_player_count(player_count) {
        return Err(EngineError::InvalidConfiguration { player_count });
    }
    let players = (0..player_count)
        .filter_map(|seat| PlayerColor::for_seat(seat).map(|color| Player::new(seat as PlayerId + 1, color)))
        .collect();
    info!("starting game with {player_count} players");
    Ok(GameState { players, phase: Phase::Playing, ..GameState::default() })
}

/// Rolls for the current player. Ignored (state returned as is) outside play,
/// after a win, or while a sabotage offer awaits resolution.
pub fn roll_dice<D: DiceSource + ?Sized>(state: &GameState, dice: &mut D) -> GameState {
    if !state.can_roll() {
        debug!("roll ignored: phase={:?} winner={:?} pending={:?}", state.phase, state.winner_id, state.pending_sabotage);
        return state.clone();
    }
    let roll = Roll::new(draw_face(dice), draw_face(dice));
    let sum = roll.sum();
    let idx = state.current_player_index;
    let mut next = state.clone();
    let p = &mut next.players[idx];
    let from = p.position;
    let mut offer = None;
    if roll.is_double() {
        p.position = move_backward(p.position, sum);
        if p.consecutive_double == Some(sum) {
            offer = Some(SabotageOffer { initiating_player_id: p.id, penalty: roll.die1 });
        }
        p.consecutive_double = Some(sum);
    } else {
        p.position = move_forward(p.position, sum);
        p.consecutive_double = None;
    }
    let (id, to) = (p.id, p.position);
    debug!("player {id} rolled {}+{} ({from} -> {to})", roll.die1, roll.die2);

    if to == GOAL {
        info!("player {id} reached {GOAL} and wins");
        next.winner_id = Some(id);
        // A finished game never holds an offer.
        offer = None;
    }
    match offer {
        Some(o) => info!("player {id} repeated double {sum}; sabotage offered for {} spaces", o.penalty),
        None => next.current_player_index = next_turn(idx, next.players.len()),
    }
    next.pending_sabotage = offer;
    next.dice = [roll.die1, roll.die2];
    next.last_roll = Some(roll.into());
    next
}

/// Sends `target` back by the pending penalty and passes the turn on.
/// Without a pending offer this is a no-op.
pub fn execute_sabotage(state: &GameState, target: PlayerId) -> Result<GameState, EngineError> {
    let Some(offer) = state.pending_sabotage else {
        debug!("sabotage ignored: nothing pending");
        return Ok(state.clone());
    };
    if target == offer.initiating_player_id {
        return Err(EngineError::InvalidTarget { target });
    }
    let mut next = state.clone();
    let victim = next.players.iter_mut().find(|p| p.id == target)
        .ok_or(EngineError::InvalidTarget { target })?;
    let from = victim.position;
    victim.position = move_backward(victim.position, offer.penalty);
    info!("player {} sabotaged player {target} ({from} -> {})", offer.initiating_player_id, victim.position);
    next.pending_sabotage = None;
    next.current_player_index = next_turn(next.current_player_index, next.players.len());
    Ok(next)
}

pub fn skip_sabotage(state: &GameState) -> GameState {
    if state.phase != Phase::Playing || state.players.is_empty() {
        debug!("skip ignored: no game in play");
        return state.clone();
    }
    let mut next = state.clone();
    if next.pending_sabotage.take().is_none() {
        debug!("skip ignored: nothing pending");
        return next;
    }
    next.current_player_index = next_turn(next.current_player_index, next.players.len());
    next
}

pub fn reset_game() -> GameState { GameState::default() }
