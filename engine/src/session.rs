//! Single-writer driver around the pure transitions. A `Game` owns the one
//! live `GameState` plus its dice, and every intent replaces that state with
//! the value the matching transition returns.

use log::debug;
#[cfg(feature = "delay")]
use log::info;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::model::{GameState, PlayerId};
use crate::rng::{DiceSource, RngDice};

pub struct Game<D> {
    state: GameState,
    dice: D,
    config: EngineConfig,
}

impl Game<Box<dyn DiceSource>> {
    /// Seeded dice when the config names a seed, thread RNG otherwise.
    pub fn from_config(config: EngineConfig) -> Self {
        let dice: Box<dyn DiceSource> = match config.seed {
            Some(seed) => Box::new(RngDice::seeded(seed)),
            None => Box::new(RngDice::thread()),
        };
        Game::new(dice, config)
    }
}

impl<D: DiceSource> Game<D> {
    pub fn new(dice: D, config: EngineConfig) -> Self {
        Game { state: crate::reset_game(), dice, config }
    }

    pub fn state(&self) -> &GameState { &self.state }

    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn start(&mut self, player_count: usize) -> Result<&GameState, EngineError> {
        self.state = crate::start_game(player_count)?;
        Ok(&self.state)
    }

    pub fn roll(&mut self) -> &GameState {
        self.state = crate::roll_dice(&self.state, &mut self.dice);
        &self.state
    }

    /// Waits out the configured roll delay, then commits the roll. Rolls that
    /// would be ignored return at once without waiting.
    #[cfg(feature = "delay")]
    pub async fn roll_delayed(&mut self) -> &GameState {
        if !self.state.can_roll() {
            debug!("delayed roll ignored");
            return &self.state;
        }
        let delay = self.config.roll_delay();
        if !delay.is_zero() {
            info!("rolling in {}ms", delay.as_millis());
            tokio::time::sleep(delay).await;
        }
        self.roll()
    }

    pub fn sabotage(&mut self, target: PlayerId) -> Result<&GameState, EngineError> {
        self.state = crate::execute_sabotage(&self.state, target)?;
        Ok(&self.state)
    }

    pub fn skip_sabotage(&mut self) -> &GameState {
        self.state = crate::skip_sabotage(&self.state);
        &self.state
    }

    pub fn reset(&mut self) -> &GameState {
        debug!("reset");
        self.state = crate::reset_game();
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Phase;
    use crate::rng::FixedDice;

    fn game(rolls: &[(u8, u8)]) -> Game<FixedDice> {
        Game::new(FixedDice::rolls(rolls.iter().copied()), EngineConfig::default())
    }

    #[test]
    fn new_game_is_in_setup() {
        let g = game(&[]);
        assert_eq!(g.state(), &GameState::default());
        assert_eq!(g.config().roll_delay_ms, 1000);
    }

    #[test]
    fn bad_start_keeps_previous_state() {
        let mut g = game(&[]);
        g.start(2).unwrap();
        let before = g.state().clone();
        assert_eq!(g.start(5), Err(EngineError::InvalidConfiguration { player_count: 5 }));
        assert_eq!(g.state(), &before);
    }

    #[test]
    fn full_sabotage_cycle() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut g = game(&[(4, 5), (5, 6), (1, 1), (3, 4), (1, 1)]);
        g.start(2).unwrap();
        g.roll();
        g.roll();
        assert_eq!(g.state().players[0].position, 9);
        assert_eq!(g.state().players[1].position, 11);
        g.roll();
        g.roll();
        let s = g.roll();
        assert_eq!(s.players[0].position, 5);
        assert!(s.pending_sabotage.is_some());
        assert_eq!(s.current_player_index, 0);

        assert_eq!(g.sabotage(1), Err(EngineError::InvalidTarget { target: 1 }));
        let s = g.sabotage(2).unwrap();
        assert_eq!(s.players[1].position, 17);
        assert_eq!(s.current_player_index, 1);
    }

    #[test]
    fn skip_then_reset() {
        let mut g = game(&[(3, 3), (1, 2), (3, 3)]);
        g.start(2).unwrap();
        g.roll();
        g.roll();
        g.roll();
        assert!(g.state().pending_sabotage.is_some());
        let s = g.skip_sabotage();
        assert_eq!(s.pending_sabotage, None);
        assert_eq!(s.current_player_index, 1);
        assert_eq!(g.reset().phase, Phase::Setup);
        assert_eq!(g.state(), &GameState::default());
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let config = EngineConfig { seed: Some(11), ..EngineConfig::default() };
        let mut a = Game::from_config(config.clone());
        let mut b = Game::from_config(config);
        a.start(3).unwrap();
        b.start(3).unwrap();
        for _ in 0..20 {
            a.roll();
            b.roll();
            if a.state().pending_sabotage.is_some() {
                a.skip_sabotage();
                b.skip_sabotage();
            }
        }
        assert_eq!(a.state(), b.state());
    }

    #[cfg(feature = "delay")]
    mod delayed {
        use super::*;
        use std::time::Duration;

        #[tokio::test(start_paused = true)]
        async fn waits_configured_delay() {
            let mut g = game(&[(1, 2)]);
            g.start(2).unwrap();
            let started = tokio::time::Instant::now();
            let s = g.roll_delayed().await;
            assert_eq!(s.players[0].position, 3);
            assert!(started.elapsed() >= Duration::from_millis(1000));
        }

        #[tokio::test(start_paused = true)]
        async fn ignored_roll_does_not_wait() {
            let mut g = game(&[(1, 2)]);
            let started = tokio::time::Instant::now();
            let s = g.roll_delayed().await;
            assert_eq!(s, &GameState::default());
            assert_eq!(started.elapsed(), Duration::ZERO);
        }

        #[tokio::test]
        async fn zero_delay_commits_immediately() {
            let config = EngineConfig { roll_delay_ms: 0, seed: None };
            let mut g = Game::new(FixedDice::rolls([(2, 2)]), config);
            g.start(2).unwrap();
            assert_eq!(g.roll_delayed().await.players[0].consecutive_double, Some(4));
        }
    }
}
