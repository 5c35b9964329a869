use super::formatters::FormatterInput;
use crate::internal::clock::iso_timestamp;

/// Leading tag of a line: `[LEVEL]`, `<timestamp> [LEVEL]`, or whatever a
/// custom prefix builder returns
pub fn build_prefix(input: &FormatterInput<'_>) -> String {
    if let Some(builder) = input.prefix_builder {
        return builder();
    }

    let tag = format!("[{}]", input.level.tag());
    if input.with_timestamp {
        format!("{} {}", iso_timestamp(input.clock), tag)
    } else {
        tag
    }
}
