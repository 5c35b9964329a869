//! Shared fixtures for logger tests

#![allow(dead_code)]

use std::io;

use conlog::{BufferSink, Channel, FixedClock, Logger, Object, OutputSink};

/// Instant every fixture clock is frozen at
pub const FIXED_INSTANT: &str = "2025-05-10T12:00:00.000Z";

pub fn fixed_clock() -> FixedClock {
    FixedClock::parse(FIXED_INSTANT).expect("fixture instant is valid RFC 3339")
}

/// Logger writing into a fresh buffer with the fixed clock
pub fn captured(logger: Logger) -> (Logger, BufferSink) {
    let sink = BufferSink::new();
    (logger.with_sink(sink.clone()).with_clock(fixed_clock()), sink)
}

/// Object whose `self` property points back at itself.
///
/// Call `clear()` on the returned handle when done to free the cycle.
pub fn self_referencing_object() -> Object {
    let obj = Object::new().with("name", "loop");
    obj.insert("self", obj.clone());
    obj
}

/// Sink whose error channel panics and whose other channels fail
pub struct BrokenConsole;

impl OutputSink for BrokenConsole {
    fn write_line(&self, channel: Channel, _line: &str) -> io::Result<()> {
        match channel {
            Channel::Error => panic!("console.error is broken"),
            _ => Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed")),
        }
    }
}
