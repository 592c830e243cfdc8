pub mod action;
mod common;
pub mod config;
pub mod coord;
mod logging;
pub mod player;
pub mod player_node;
pub mod prelude;
pub mod protocol;
pub mod transport;
pub mod world;

pub use action::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use logging::{init_logging, LOG_ENV_VAR};
pub use player::*;
pub use player_node::*;
pub use protocol::*;
pub use world::*;
pub use transport::{InMemoryTransport, LineTransport, StdioTransport, Transport};
