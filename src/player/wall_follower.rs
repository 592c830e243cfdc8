use std::collections::{BTreeMap, BTreeSet};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::action::{Direction, PlayerAction, PlayerOutput};
use crate::coord::Coord;
use crate::protocol::PlayerInput;
use crate::world::{TileType, UnitId};

use super::Player;

/// State the wall follower hands back to itself every turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallFollowerMemory {
    /// Heading each unit took last turn.
    #[serde(default)]
    pub directions: BTreeMap<UnitId, Direction>,
    /// Every wall seen so far.
    #[serde(default)]
    pub walls: BTreeSet<Coord>,
}

/// Keeps a wall on each unit's right-hand side.
///
/// Every turn a unit tries to turn right from its last heading and rotates
/// left until the next step is not a remembered wall. Coordinates at or below
/// zero, and steps past the `i64` range, count as walls. A unit boxed in on
/// every side keeps its heading.
pub struct WallFollower {
    rng: SmallRng,
}

impl WallFollower {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

fn blocked(walls: &BTreeSet<Coord>, from: Coord, dir: Direction) -> bool {
    match from.checked_step(dir) {
        Some(next) => next.x <= 0 || next.y <= 0 || walls.contains(&next),
        None => true,
    }
}

impl Player for WallFollower {
    type Memory = WallFollowerMemory;

    fn turn(
        &mut self,
        mut input: PlayerInput<WallFollowerMemory>,
    ) -> anyhow::Result<PlayerOutput<WallFollowerMemory>> {
        let mut memory = core::mem::take(&mut input.memory);

        memory.walls.extend(
            input
                .world
                .tiles
                .iter()
                .filter(|t| t.tile_type == TileType::Wall)
                .map(|t| t.coord),
        );

        let mut actions = Vec::new();
        for unit in input.my_units() {
            let heading = match memory.directions.get(&unit.id) {
                Some(dir) => *dir,
                None => Direction::random(&mut self.rng),
            };

            let direction = core::iter::successors(Some(heading.turn_right()), |d| {
                Some(d.turn_left())
            })
            .take(Direction::ALL.len())
            .find(|d| !blocked(&memory.walls, unit.location, *d))
            .unwrap_or(heading);

            memory.directions.insert(unit.id, direction);
            actions.push(PlayerAction::move_unit(unit.id, direction));
        }

        // Forget units that no longer exist.
        let alive: BTreeSet<UnitId> = input.my_units().map(|u| u.id).collect();
        memory.directions.retain(|id, _| alive.contains(id));

        Ok(PlayerOutput::with_memory(actions, memory))
    }
}
