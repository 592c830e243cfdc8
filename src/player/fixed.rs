use crate::action::{Direction, PlayerAction, PlayerOutput};
use crate::protocol::{PlayerInput, PlayerMemory};

use super::Player;

/// Orders every owned unit one step in the same direction, every turn.
pub struct FixedDirectionPlayer {
    direction: Direction,
}

impl FixedDirectionPlayer {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl Player for FixedDirectionPlayer {
    type Memory = PlayerMemory;

    fn turn(&mut self, input: PlayerInput) -> anyhow::Result<PlayerOutput> {
        let actions = input
            .my_units()
            .map(|u| PlayerAction::move_unit(u.id, self.direction))
            .collect();
        Ok(PlayerOutput::new(actions))
    }
}
