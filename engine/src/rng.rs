//! Dice sources. The engine never touches a global RNG: every roll draws two
//! faces from a [`DiceSource`] the caller hands in.

use std::collections::VecDeque;

use log::warn;
use rand::{rngs::StdRng, rngs::ThreadRng, Rng, SeedableRng};

pub trait DiceSource {
    /// One die face, uniform in 1..=6.
    fn roll_die(&mut self) -> u8;
}

impl<D: DiceSource + ?Sized> DiceSource for Box<D> {
    fn roll_die(&mut self) -> u8 { (**self).roll_die() }
}

/// Any `rand` generator as a die.
#[derive(Clone, Debug)]
pub struct RngDice<R>(pub R);

impl RngDice<StdRng> {
    pub fn seeded(seed: u64) -> Self { RngDice(StdRng::seed_from_u64(seed)) }
}

impl RngDice<ThreadRng> {
    pub fn thread() -> Self { RngDice(rand::thread_rng()) }
}

impl<R: Rng> DiceSource for RngDice<R> {
    fn roll_die(&mut self) -> u8 { self.0.gen_range(1..=6) }
}

/// Replays a scripted face sequence, then repeats the last face (1 if empty).
#[derive(Clone, Debug)]
pub struct FixedDice {
    faces: VecDeque<u8>,
    last: u8,
}

impl Default for FixedDice {
    fn default() -> Self { FixedDice { faces: VecDeque::new(), last: 1 } }
}

impl FixedDice {
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        FixedDice { faces: faces.into_iter().collect(), last: 1 }
    }

    /// Script whole rolls as `(die1, die2)` pairs.
    pub fn rolls(rolls: impl IntoIterator<Item = (u8, u8)>) -> Self {
        Self::new(rolls.into_iter().flat_map(|(a, b)| [a, b]))
    }

    pub fn remaining(&self) -> usize { self.faces.len() }
}

impl DiceSource for FixedDice {
    fn roll_die(&mut self) -> u8 {
        if let Some(f) = self.faces.pop_front() { self.last = f; }
        self.last
    }
}

pub(crate) fn draw_face<D: DiceSource + ?Sized>(dice: &mut D) -> u8 {
    let face = dice.roll_die();
    if !(1..=6).contains(&face) {
        warn!("dice source returned {face}, clamping into 1..=6");
        return face.clamp(1, 6);
    }
    face
}
