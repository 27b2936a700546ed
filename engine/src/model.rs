use serde::{Deserialize, Serialize};

use crate::rules::{GOAL, MAX_PLAYERS};

pub type PlayerId = u8;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlayerColor { Red, Blue, Green, Yellow }

impl PlayerColor {
    pub const SEATS: [PlayerColor; MAX_PLAYERS] =
        [PlayerColor::Red, PlayerColor::Blue, PlayerColor::Green, PlayerColor::Yellow];

    pub fn for_seat(seat: usize) -> Option<Self> { Self::SEATS.get(seat).copied() }

    pub fn name(self) -> &'static str {
        match self {
            PlayerColor::Red => "Red",
            PlayerColor::Blue => "Blue",
            PlayerColor::Green => "Green",
            PlayerColor::Yellow => "Yellow",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: u8,
    pub color: PlayerColor,
    /// Sum of this player's most recent doubles roll, cleared by any non-double.
    pub consecutive_double: Option<u8>,
}

impl Player {
    pub fn new(id: PlayerId, color: PlayerColor) -> Self {
        Player { id, name: format!("Player {id}"), position: 0, color, consecutive_double: None }
    }

    pub fn has_finished(&self) -> bool { self.position == GOAL }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Roll {
    pub die1: u8,
    pub die2: u8,
}

impl Roll {
    pub fn new(die1: u8, die2: u8) -> Self { Roll { die1, die2 } }
    pub fn sum(self) -> u8 { self.die1 + self.die2 }
    pub fn is_double(self) -> bool { self.die1 == self.die2 }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LastRoll {
    pub die1: u8,
    pub die2: u8,
    pub sum: u8,
    pub is_double: bool,
}

impl From<Roll> for LastRoll {
    fn from(r: Roll) -> Self {
        LastRoll { die1: r.die1, die2: r.die2, sum: r.sum(), is_double: r.is_double() }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SabotageOffer {
    pub initiating_player_id: PlayerId,
    /// One die face, not the roll sum.
    pub penalty: u8,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Setup,
    Playing,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    pub players: Vec<Player>,
    pub current_player_index: usize,
    pub dice: [u8; 2],
    pub phase: Phase,
    pub winner_id: Option<PlayerId>,
    pub last_roll: Option<LastRoll>,
    pub pending_sabotage: Option<SabotageOffer>,
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            players: vec![],
            current_player_index: 0,
            dice: [1, 1],
            phase: Phase::Setup,
            winner_id: None,
            last_roll: None,
            pending_sabotage: None,
        }
    }
}

impl GameState {
    pub fn current_player(&self) -> Option<&Player> { self.players.get(self.current_player_index) }

    pub fn player(&self, id: PlayerId) -> Option<&Player> { self.players.iter().find(|p| p.id == id) }

    pub fn winner(&self) -> Option<&Player> { self.winner_id.and_then(|id| self.player(id)) }

    pub fn is_finished(&self) -> bool { self.winner_id.is_some() }

    pub fn can_roll(&self) -> bool {
        self.phase == Phase::Playing && !self.is_finished() && self.pending_sabotage.is_none()
            && self.current_player().is_some()
    }

    /// Players the pending offer may be aimed at. Empty when nothing is pending.
    pub fn sabotage_targets(&self) -> Vec<&Player> {
        match self.pending_sabotage {
            Some(offer) => self.players.iter().filter(|p| p.id != offer.initiating_player_id).collect(),
            None => vec![],
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> { serde_json::to_string(self) }
}
