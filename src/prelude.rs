//! Commonly used types and utilities for ease of import.

pub use crate::{
    do_turn, Coord, Direction, FnPlayer, Player, PlayerAction, PlayerId, PlayerInput,
    PlayerMemory, PlayerNode, PlayerOutput, PlayerWorld, ProtocolError, SessionConfig,
    SessionMode, Tile, TileType, Unit, UnitId,
};

pub use crate::transport::{InMemoryTransport, LineTransport, StdioTransport, Transport};
