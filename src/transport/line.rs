use std::io::{self, BufRead, Write};

use crate::transport::Transport;

/// Player side of process stdio.
pub type StdioTransport = LineTransport<io::StdinLock<'static>, io::Stdout>;

/// Newline-delimited transport over any reader and writer.
pub struct LineTransport<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineTransport<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Gives back the reader and writer, e.g. to inspect what was written.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl StdioTransport {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Transport for LineTransport<R, W> {
    fn recv(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| anyhow::anyhow!("Read error: {}", e))?;
        if read == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn send(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", line).map_err(|e| {
            if e.kind() == io::ErrorKind::BrokenPipe {
                anyhow::anyhow!("Output closed by engine")
            } else {
                anyhow::anyhow!("Write error: {}", e)
            }
        })?;
        self.writer
            .flush()
            .map_err(|e| anyhow::anyhow!("Flush error: {}", e))
    }
}
