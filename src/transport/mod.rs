//! Line-oriented channels between a player and the engine.

/// Carries whole protocol lines, one JSON document each.
pub trait Transport {
    /// Reads the next line without its terminator. `Ok(None)` means the
    /// engine closed input.
    fn recv(&mut self) -> anyhow::Result<Option<String>>;

    /// Writes `line` followed by a newline and flushes it.
    fn send(&mut self, line: &str) -> anyhow::Result<()>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn recv(&mut self) -> anyhow::Result<Option<String>> {
        (**self).recv()
    }

    fn send(&mut self, line: &str) -> anyhow::Result<()> {
        (**self).send(line)
    }
}

pub mod in_memory;
pub mod line;

pub use in_memory::InMemoryTransport;
pub use line::{LineTransport, StdioTransport};
