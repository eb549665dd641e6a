use crate::cli::ExtractStrategy;
use crate::domain::constants::EMPTY_OBJECT;
use serde::de::IgnoredAny;
use std::ops::Range;

/// Returns the slice of `input` believed to hold the JSON document.
///
/// An opening `[` wins over `{` when it comes first. With no delimiter at
/// all the result is `"{}"`. The scanner strategy stops after the first
/// complete value and falls back to the heuristic slice when the text is
/// not well-formed, so the parser can still report where it breaks.
pub fn extract_payload(input: &str, strategy: ExtractStrategy) -> &str {
    match payload_span(input, strategy) {
        Some(span) => &input[span],
        None => EMPTY_OBJECT,
    }
}

/// Byte range of the payload inside `input`, `None` when there is no delimiter.
pub fn payload_span(input: &str, strategy: ExtractStrategy) -> Option<Range<usize>> {
    let (start, close) = opening_delimiter(input)?;
    let end = match strategy {
        ExtractStrategy::Heuristic => last_delimited(input, start, close),
        ExtractStrategy::Scanner => {
            scan_first_value(input, start).unwrap_or_else(|| last_delimited(input, start, close))
        }
    };
    Some(start..end)
}

fn opening_delimiter(input: &str) -> Option<(usize, char)> {
    match (input.find('['), input.find('{')) {
        (Some(bracket), Some(brace)) if bracket < brace => Some((bracket, ']')),
        (Some(bracket), None) => Some((bracket, ']')),
        (_, Some(brace)) => Some((brace, '}')),
        (None, None) => None,
    }
}

// Last-occurrence search, not a balanced parse.
fn last_delimited(input: &str, start: usize, close: char) -> usize {
    match input.rfind(close) {
        Some(end) if end > start => end + close.len_utf8(),
        // unterminated: hand the tail to the parser so it reports EOF
        _ => input.trim_end().len(),
    }
}

fn scan_first_value(input: &str, start: usize) -> Option<usize> {
    let mut stream = serde_json::Deserializer::from_str(&input[start..]).into_iter::<IgnoredAny>();
    match stream.next() {
        Some(Ok(_)) => Some(start + stream.byte_offset()),
        _ => None,
    }
}
