//! The turn envelope and its JSON codec.
//!
//! One JSON document per line in each direction:
//!
//! ```text
//! -> {"player_id":1,"turn":0,"world":{"units":[...],"tiles":[...]},"memory":null}
//! <- __mlr_output:{"actions":[{"action":"move","unit":5,"direction":"left"}],"memory":{}}
//! ```
//!
//! The outbound line carries [`SENTINEL`] so the engine can tell it apart
//! from anything else the player prints.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::action::PlayerOutput;
use crate::common::ProtocolError;
use crate::world::{PlayerId, PlayerWorld, Unit};

/// Prefix marking the single protocol line on stdout.
pub const SENTINEL: &str = "__mlr_output:";

/// Untyped player memory, passed through the codec untouched.
pub type PlayerMemory = serde_json::Value;

/// Everything the engine tells a player for one turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "M: Deserialize<'de> + Default"))]
pub struct PlayerInput<M = PlayerMemory> {
    pub player_id: PlayerId,
    pub turn: u64,
    pub world: PlayerWorld,
    /// Whatever the player emitted as memory last turn. Absent or `null`
    /// decodes as `M::default()`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub memory: M,
}

impl<M> PlayerInput<M> {
    pub fn player_world(&self) -> &PlayerWorld {
        &self.world
    }

    /// Units belonging to this player.
    pub fn my_units(&self) -> impl Iterator<Item = &Unit> + '_ {
        self.world.units_for(self.player_id)
    }

    /// Units belonging to anyone else.
    pub fn other_units(&self) -> impl Iterator<Item = &Unit> + '_ {
        self.world.units_not_for(self.player_id)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decodes one inbound line. Trailing line terminators are ignored.
pub fn decode_input<M>(line: &str) -> Result<PlayerInput<M>, ProtocolError>
where
    M: DeserializeOwned + Default,
{
    let line = line.trim_end_matches(['\r', '\n']);
    let input: PlayerInput<M> =
        serde_json::from_str(line).map_err(ProtocolError::MalformedInput)?;
    log::debug!(
        "decoded turn {} for player {:?}: {} units, {} tiles",
        input.turn,
        input.player_id,
        input.world.units.len(),
        input.world.tiles.len()
    );
    Ok(input)
}

/// Encodes a player's output as a single-line JSON document, without the
/// sentinel.
pub fn encode_output<M: Serialize>(output: &PlayerOutput<M>) -> Result<String, ProtocolError> {
    serde_json::to_string(output).map_err(ProtocolError::UnencodableOutput)
}

/// Prefixes an encoded output with [`SENTINEL`].
pub fn frame(json: &str) -> String {
    format!("{}{}", SENTINEL, json)
}

/// Returns the payload of a protocol line, or `None` for any other text.
pub fn strip_sentinel(line: &str) -> Option<&str> {
    line.strip_prefix(SENTINEL)
}

/// Decodes a player's output as the engine would. Accepts the line with or
/// without the sentinel.
pub fn decode_output<M>(line: &str) -> Result<PlayerOutput<M>, ProtocolError>
where
    M: DeserializeOwned + Default,
{
    let line = line.trim_end_matches(['\r', '\n']);
    let payload = strip_sentinel(line).unwrap_or(line);
    serde_json::from_str(payload).map_err(ProtocolError::MalformedOutput)
}
