use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::action::{Direction, PlayerAction, PlayerOutput};
use crate::protocol::{PlayerInput, PlayerMemory};

use super::Player;

/// Moves each owned unit in a random direction.
pub struct RandomPlayer {
    rng: SmallRng,
}

impl RandomPlayer {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl Player for RandomPlayer {
    type Memory = PlayerMemory;

    fn turn(&mut self, input: PlayerInput) -> anyhow::Result<PlayerOutput> {
        let actions = input
            .my_units()
            .map(|u| PlayerAction::move_unit(u.id, Direction::random(&mut self.rng)))
            .collect();
        Ok(PlayerOutput::new(actions))
    }
}
