//! Payload renderers for the formatter

use chrono::{DateTime, NaiveDateTime};

/// Output pattern for decoded times
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Uppercase hex bytes separated by spaces, e.g. `01 AB FF`
pub fn hex_string(bytes: &[u8]) -> String {
    let parts: Vec<String> = bytes.iter().map(|b| format!("{:02X}", b)).collect();
    parts.join(" ")
}

/// UTF-8 text; invalid sequences become U+FFFD
pub fn utf8_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// 7-bit ASCII text; bytes above 0x7F become U+FFFD
pub fn ascii_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { char::REPLACEMENT_CHARACTER })
        .collect()
}

/// Single-byte Latin-1 text
pub fn latin1_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// UTF-16 big-endian text; unpaired surrogates and a dangling odd byte
/// become U+FFFD
pub fn bmp_string(bytes: &[u8]) -> String {
    let chunks = bytes.chunks_exact(2);
    let dangling = !chunks.remainder().is_empty();
    let units = chunks.map(|pair| u16::from_be_bytes([pair[0], pair[1]]));

    let mut text: String = char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    if dangling {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}

/// Parse UTCTime text (`YYMMDDhhmm[ss](Z|+hhmm|-hhmm)`)
///
/// Two-digit years below 50 are 20xx, the rest 19xx. Times with an
/// offset are converted to UTC.
pub fn parse_utc_time(text: &str) -> Option<NaiveDateTime> {
    let year: u32 = text.get(0..2)?.parse().ok()?;
    let century = if year < 50 { "20" } else { "19" };
    parse_time(&format!("{}{}", century, text))
}

/// Parse GeneralizedTime text (`YYYYMMDDhhmm[ss[.fff]][Z|+hhmm|-hhmm]`)
pub fn parse_generalized_time(text: &str) -> Option<NaiveDateTime> {
    parse_time(text)
}

fn parse_time(text: &str) -> Option<NaiveDateTime> {
    if !text.is_ascii() {
        return None;
    }

    for pattern in ["%Y%m%d%H%M%S%.f%z", "%Y%m%d%H%M%z"] {
        if let Ok(time) = DateTime::parse_from_str(text, pattern) {
            return Some(time.naive_utc());
        }
    }

    let local = text.strip_suffix('Z').unwrap_or(text);
    for pattern in ["%Y%m%d%H%M%S%.f", "%Y%m%d%H%M"] {
        if let Ok(time) = NaiveDateTime::parse_from_str(local, pattern) {
            return Some(time);
        }
    }

    None
}
