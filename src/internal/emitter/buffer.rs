use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{Channel, OutputSink};

/// In-memory sink capturing every written line with its channel
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    lines: Arc<Mutex<Vec<(Channel, String)>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines, oldest first
    pub fn lines(&self) -> Vec<(Channel, String)> {
        self.guard().clone()
    }

    /// Captured lines written to one channel
    pub fn lines_on(&self, channel: Channel) -> Vec<String> {
        self.guard()
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    pub fn clear(&self) {
        self.guard().clear();
    }

    fn guard(&self) -> MutexGuard<'_, Vec<(Channel, String)>> {
        // A panicking writer elsewhere must not hide what was captured
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl OutputSink for BufferSink {
    fn write_line(&self, channel: Channel, line: &str) -> io::Result<()> {
        self.guard().push((channel, line.to_string()));
        Ok(())
    }
}
