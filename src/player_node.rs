//! Session driver: bridges the engine's line protocol to a [`Player`].

use crate::{
    action::PlayerOutput,
    common::ProtocolError,
    config::{SessionConfig, SessionMode},
    player::{FnPlayer, Player},
    protocol::{self, PlayerInput, PlayerMemory},
    transport::{StdioTransport, Transport},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    AwaitingLine,
    Done,
}

/// Runs a player against one engine connection.
///
/// For every inbound line: decode, call the player, encode, and write exactly
/// one `__mlr_output:` line. Decode and player failures abort the session
/// before anything is written for that turn.
pub struct PlayerNode<P, T> {
    player: P,
    transport: T,
    config: SessionConfig,
    turns_played: u64,
}

impl<P: Player, T: Transport> PlayerNode<P, T> {
    pub fn new(player: P, transport: T, config: SessionConfig) -> Self {
        Self {
            player,
            transport,
            config,
            turns_played: 0,
        }
    }

    /// Handle a single inbound line. Returns `false` if input had already
    /// ended, in which case nothing is written.
    pub fn play_turn(&mut self) -> Result<bool, ProtocolError> {
        let line = match self.transport.recv().map_err(ProtocolError::Transport)? {
            Some(line) => line,
            None => {
                log::debug!("end of input after {} turn(s)", self.turns_played);
                return Ok(false);
            }
        };

        let input: PlayerInput<P::Memory> = protocol::decode_input(&line)?;
        if self.config.debug {
            self.send(&format!("{:?}", input))?;
        }

        let turn = input.turn;
        let output = self.player.turn(input).map_err(ProtocolError::TurnLogic)?;
        let json = protocol::encode_output(&output)?;
        if self.config.debug {
            self.send(&json)?;
        }

        self.send(&protocol::frame(&json))?;
        log::trace!("turn {}: sent {} action(s)", turn, output.actions.len());
        self.turns_played += 1;
        Ok(true)
    }

    /// Drive the session to completion and return how many turns were played.
    ///
    /// In [`SessionMode::SingleTurn`] this stops after the first turn; in
    /// [`SessionMode::Persistent`] it keeps going until end of input. Empty
    /// input is a clean exit with zero turns.
    pub fn run(&mut self) -> Result<u64, ProtocolError> {
        let start = self.turns_played;
        let mut state = SessionState::AwaitingLine;
        while state == SessionState::AwaitingLine {
            let played = self.play_turn()?;
            state = match (played, self.config.mode) {
                (true, SessionMode::Persistent) => SessionState::AwaitingLine,
                _ => SessionState::Done,
            };
        }
        Ok(self.turns_played - start)
    }

    pub fn turns_played(&self) -> u64 {
        self.turns_played
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn into_parts(self) -> (P, T) {
        (self.player, self.transport)
    }

    fn send(&mut self, line: &str) -> Result<(), ProtocolError> {
        self.transport.send(line).map_err(ProtocolError::Transport)
    }
}

/// Run `turn` against this process's stdin and stdout.
pub fn do_turn<F>(turn: F, config: SessionConfig) -> Result<u64, ProtocolError>
where
    F: FnMut(PlayerInput) -> anyhow::Result<PlayerOutput>,
{
    let player = FnPlayer::<F, PlayerMemory>::new(turn);
    PlayerNode::new(player, StdioTransport::stdio(), config).run()
}
