//! The slice of the world a single player is allowed to see.

use serde::{Deserialize, Deserializer, Serialize};

use crate::coord::Coord;

/// Identifies a player within a match.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

/// Identifies a unit within one `PlayerWorld` snapshot. The engine may reuse
/// ids across turns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub u64);

/// Terrain kind of a tile.
///
/// Decoding never fails: any tag other than `"wall"`, `"floor"` or `"exit"`,
/// including non-string values, decodes as `Wall`, so unknown terrain is
/// treated as impassable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileType {
    Wall,
    Floor,
    Exit,
}

impl TileType {
    /// Maps a wire tag to a tile type, falling back to `Wall`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "wall" => TileType::Wall,
            "floor" => TileType::Floor,
            "exit" => TileType::Exit,
            other => {
                log::debug!("unknown tile type {:?}, treating it as wall", other);
                TileType::Wall
            }
        }
    }

    /// Whether a unit can stand on this tile.
    pub fn can_enter(self) -> bool {
        matches!(self, TileType::Floor | TileType::Exit)
    }
}

impl<'de> Deserialize<'de> for TileType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value.as_str() {
            Some(tag) => TileType::from_tag(tag),
            None => {
                log::debug!("non-string tile type {}, treating it as wall", value);
                TileType::Wall
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    #[serde(rename = "type")]
    pub tile_type: TileType,
    pub coord: Coord,
}

impl Tile {
    pub fn new(tile_type: TileType, coord: Coord) -> Self {
        Self { tile_type, coord }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    /// Owning player.
    pub player: PlayerId,
    pub location: Coord,
}

impl Unit {
    pub fn new(id: UnitId, player: PlayerId, location: Coord) -> Self {
        Self {
            id,
            player,
            location,
        }
    }
}

/// Units and tiles visible to one player this turn. Ordering is decode order
/// and carries no meaning; look things up by id or coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PlayerWorld {
    pub units: Vec<Unit>,
    pub tiles: Vec<Tile>,
}

impl PlayerWorld {
    pub fn new(units: Vec<Unit>, tiles: Vec<Tile>) -> Self {
        Self { units, tiles }
    }

    /// Units owned by `player`.
    pub fn units_for(&self, player: PlayerId) -> impl Iterator<Item = &Unit> + '_ {
        self.units.iter().filter(move |u| u.player == player)
    }

    /// Units owned by anyone other than `player`.
    pub fn units_not_for(&self, player: PlayerId) -> impl Iterator<Item = &Unit> + '_ {
        self.units.iter().filter(move |u| u.player != player)
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    /// The visible tile at `coord`, if the engine revealed one.
    pub fn tile_at(&self, coord: Coord) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.coord == coord)
    }
}
