//! Errors raised while running a player turn.

/// Fatal errors of the player protocol. Any of these aborts the turn before a
/// protocol line is written.
///
/// Unknown tile tags and end of input are not errors: the first decodes as a
/// wall, the second ends the session cleanly.
#[derive(Debug)]
pub enum ProtocolError {
    /// Reading from or writing to the engine failed.
    Transport(anyhow::Error),
    /// Inbound line is not JSON or lacks a required field.
    MalformedInput(serde_json::Error),
    /// The player's turn function returned an error.
    TurnLogic(anyhow::Error),
    /// The player's output cannot be represented as JSON.
    UnencodableOutput(serde_json::Error),
    /// A player's output line is not JSON or lacks `actions`. Only raised
    /// when decoding output on the engine side.
    MalformedOutput(serde_json::Error),
}

impl ProtocolError {
    /// Whether the engine is to blame rather than the player.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, ProtocolError::MalformedInput(_))
    }
}

impl core::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ProtocolError::Transport(e) => write!(f, "Transport error: {:#}", e),
            ProtocolError::MalformedInput(e) => write!(f, "Malformed input: {}", e),
            ProtocolError::TurnLogic(e) => write!(f, "Turn function failed: {:#}", e),
            ProtocolError::UnencodableOutput(e) => {
                write!(f, "Player output is not representable as JSON: {}", e)
            }
            ProtocolError::MalformedOutput(e) => write!(f, "Malformed player output: {}", e),
        }
    }
}

impl std::error::Error for ProtocolError {}
