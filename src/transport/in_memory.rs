use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::transport::Transport;

/// A connected pair of in-process queues. One end plays the engine, the
/// other the player. `recv` on an empty queue reports end of input.
pub struct InMemoryTransport {
    recv_queue: Arc<Mutex<VecDeque<String>>>,
    send_queue: Arc<Mutex<VecDeque<String>>>,
}

impl InMemoryTransport {
    pub fn pair() -> (Self, Self) {
        let q1 = Arc::new(Mutex::new(VecDeque::new()));
        let q2 = Arc::new(Mutex::new(VecDeque::new()));
        (
            Self {
                recv_queue: q1.clone(),
                send_queue: q2.clone(),
            },
            Self {
                recv_queue: q2,
                send_queue: q1,
            },
        )
    }

    /// Lines waiting to be received on this end.
    pub fn pending(&self) -> usize {
        self.recv_queue.lock().map(|q| q.len()).unwrap_or(0)
    }
}

impl Transport for InMemoryTransport {
    fn recv(&mut self) -> anyhow::Result<Option<String>> {
        let mut queue = self
            .recv_queue
            .lock()
            .map_err(|_| anyhow::anyhow!("Channel poisoned"))?;
        Ok(queue.pop_front())
    }

    fn send(&mut self, line: &str) -> anyhow::Result<()> {
        let mut queue = self
            .send_queue
            .lock()
            .map_err(|_| anyhow::anyhow!("Channel poisoned"))?;
        queue.push_back(line.to_owned());
        Ok(())
    }
}
