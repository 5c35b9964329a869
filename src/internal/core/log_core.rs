// src/internal/core/log_core.rs

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, trace};

use crate::internal::clock::{iso_timestamp, Clock};
use crate::internal::emitter::{emit, Channel, OutputSink};
use crate::internal::error::LogError;
use crate::internal::formatter::{FormatterInput, LineFormatter};
use crate::internal::logger::LogParams;
use crate::internal::severity::should_emit;
use crate::internal::value::Value;

/// Filter, format and dispatch one log call.
///
/// Nothing escapes this function: formatter errors, formatter panics and
/// failed writes are turned into a single `[logging-error @ ...]` line on the
/// error channel, and a failure writing that line is dropped.
///
/// A panicking formatter or prefix builder is still reported by the
/// process-wide panic hook, so on a real console stderr also receives the
/// hook's message ahead of the `[logging-error ...]` line.
pub fn log_core(
    sink: &dyn OutputSink,
    clock: &dyn Clock,
    params: &LogParams,
    formatter: &LineFormatter,
    values: &[Value],
) {
    let level = params.level;
    let threshold = params.threshold.unwrap_or_default();

    if !should_emit(threshold, level) {
        trace!("Log call filtered: level {} below threshold {}", level, threshold);
        return;
    }

    let input = FormatterInput::new(level, values, clock)
        .with_timestamp(params.with_timestamp.unwrap_or(false))
        .with_prefix_builder(params.prefix_builder.as_ref());

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let line = formatter(&input)?;
        emit(sink, level, &line)
    }))
    .unwrap_or_else(|payload| Err(LogError::from_panic(payload)));

    if let Err(err) = outcome {
        report_failure(sink, clock, &err);
    }
}

/// Best-effort diagnostic for a failed log call
pub(crate) fn report_failure(sink: &dyn OutputSink, clock: &dyn Clock, err: &LogError) {
    debug!("Log call failed, writing fallback line: {}", err);

    let _ = panic::catch_unwind(AssertUnwindSafe(|| {
        let line = format!("[logging-error @ {}] {}", iso_timestamp(clock), err);
        sink.write_line(Channel::Error, &line)
    }));
}
