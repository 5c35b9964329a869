use std::io::{self, Write};

use super::{Channel, OutputSink};

/// Process stdout/stderr: `Log` and `Info` go to stdout, `Warn` and `Error` to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn write_line(&self, channel: Channel, line: &str) -> io::Result<()> {
        match channel {
            Channel::Log | Channel::Info => {
                let mut out = io::stdout().lock();
                writeln!(out, "{}", line)
            }
            Channel::Warn | Channel::Error => {
                let mut err = io::stderr().lock();
                writeln!(err, "{}", line)
            }
        }
    }
}
