pub const GOAL: u8 = 28;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// Forward move on a non-double. Overshooting the goal forfeits the move.
#[inline] pub fn move_forward(position: u8, sum: u8) -> u8 {
    let target = position + sum;
    if target > GOAL { position } else { target }
}

#[inline] pub fn move_backward(position: u8, steps: u8) -> u8 { position.saturating_sub(steps) }

#[inline] pub fn next_turn(idx: usize, player_count: usize) -> usize { (idx + 1) % player_count }

#[inline] pub fn valid_player_count(n: usize) -> bool { (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) }
