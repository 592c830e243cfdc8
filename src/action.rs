//! What a player sends back to the engine.

use rand::Rng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::protocol::PlayerMemory;
use crate::world::UnitId;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns a uniformly random direction.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// The direction after a quarter turn clockwise.
    pub fn turn_right(self) -> Self {
        match self {
            Direction::Left => Direction::Up,
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
        }
    }

    /// The direction after a quarter turn counter-clockwise.
    pub fn turn_left(self) -> Self {
        match self {
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
            Direction::Up => Direction::Left,
        }
    }
}

/// Kind of action. Only `Move` exists today; the tag is reserved for more.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    #[default]
    Move,
}

/// A single order for one unit. Ownership of `unit_id` is checked by the
/// engine, not here.
///
/// Wire shape: `{"action": "move", "unit": 5, "direction": "left"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerAction {
    #[serde(rename = "action", default)]
    pub action_type: ActionType,
    #[serde(rename = "unit")]
    pub unit_id: UnitId,
    pub direction: Direction,
}

impl PlayerAction {
    pub fn move_unit(unit_id: UnitId, direction: Direction) -> Self {
        Self {
            action_type: ActionType::Move,
            unit_id,
            direction,
        }
    }
}

/// Everything a player emits for one turn. `memory` is handed back verbatim
/// on the next turn's input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "M: DeserializeOwned + Default"))]
pub struct PlayerOutput<M = PlayerMemory> {
    pub actions: Vec<PlayerAction>,
    /// A missing key decodes as the empty mapping `{}`.
    #[serde(default = "empty_memory")]
    pub memory: M,
}

/// `M` read from `{}`, or `M::default()` if `M` is not a mapping.
fn empty_memory<M: DeserializeOwned + Default>() -> M {
    serde_json::from_value(PlayerMemory::Object(serde_json::Map::new())).unwrap_or_default()
}

impl PlayerOutput<PlayerMemory> {
    /// Output with no carried state; memory is the empty mapping `{}`.
    pub fn new(actions: Vec<PlayerAction>) -> Self {
        Self {
            actions,
            memory: PlayerMemory::Object(serde_json::Map::new()),
        }
    }
}

impl<M> PlayerOutput<M> {
    pub fn with_memory(actions: Vec<PlayerAction>, memory: M) -> Self {
        Self { actions, memory }
    }
}
