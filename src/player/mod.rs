//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - FnPlayer: Wraps a plain turn function
//! - FixedDirectionPlayer: Moves every unit the same way
//! - RandomPlayer: Moves every unit in a random direction
//! - WallFollower: Keeps typed memory of walls and follows them

use core::fmt::Debug;
use core::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::action::PlayerOutput;
use crate::protocol::{PlayerInput, PlayerMemory};

/// Decision logic for one player.
///
/// `Memory` is the state the player carries between turns through the
/// engine. Use [`PlayerMemory`] to handle it as raw JSON.
pub trait Player {
    type Memory: Serialize + DeserializeOwned + Default + Debug;

    /// Decide the actions for one turn.
    fn turn(
        &mut self,
        input: PlayerInput<Self::Memory>,
    ) -> anyhow::Result<PlayerOutput<Self::Memory>>;
}

/// Adapts a closure into a [`Player`].
pub struct FnPlayer<F, M = PlayerMemory> {
    turn: F,
    _memory: PhantomData<fn() -> M>,
}

impl<F, M> FnPlayer<F, M>
where
    F: FnMut(PlayerInput<M>) -> anyhow::Result<PlayerOutput<M>>,
{
    pub fn new(turn: F) -> Self {
        Self {
            turn,
            _memory: PhantomData,
        }
    }
}

impl<F, M> Player for FnPlayer<F, M>
where
    F: FnMut(PlayerInput<M>) -> anyhow::Result<PlayerOutput<M>>,
    M: Serialize + DeserializeOwned + Default + Debug,
{
    type Memory = M;

    fn turn(&mut self, input: PlayerInput<M>) -> anyhow::Result<PlayerOutput<M>> {
        (self.turn)(input)
    }
}

pub mod fixed;
pub use fixed::FixedDirectionPlayer;

pub mod random;
pub use random::RandomPlayer;

pub mod wall_follower;
pub use wall_follower::{WallFollower, WallFollowerMemory};
