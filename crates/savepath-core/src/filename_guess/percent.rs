//! Percent-decoding with `decodeURI` rules.

/// Escapes for these characters stay encoded so a decoded value never gains
/// new URI delimiters.
const RESERVED: &[u8] = b";/?:@&=+$,#";

/// Decodes `%XX` escapes that form UTF-8 text, keeping escapes of reserved
/// characters as written.
///
/// Returns `None` for a truncated escape, a non-hex digit, or an escape
/// sequence that is not valid UTF-8.
pub fn decode_uri(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }

        let lead = escaped_byte(bytes, i)?;
        if lead < 0x80 {
            if RESERVED.contains(&lead) {
                out.extend_from_slice(&bytes[i..i + 3]);
            } else {
                out.push(lead);
            }
            i += 3;
            continue;
        }

        let len = utf8_len(lead)?;
        let mut seq = [0u8; 4];
        seq[0] = lead;
        i += 3;
        for slot in seq.iter_mut().take(len).skip(1) {
            *slot = escaped_byte(bytes, i)?;
            i += 3;
        }
        let ch = std::str::from_utf8(&seq[..len]).ok()?;
        out.extend_from_slice(ch.as_bytes());
    }

    String::from_utf8(out).ok()
}

/// Byte encoded by the `%XX` escape starting at `at`.
fn escaped_byte(bytes: &[u8], at: usize) -> Option<u8> {
    if bytes.get(at) != Some(&b'%') {
        return None;
    }
    let high = bytes.get(at + 1).copied().and_then(hex_digit)?;
    let low = bytes.get(at + 2).copied().and_then(hex_digit)?;
    Some(high << 4 | low)
}

fn utf8_len(lead: u8) -> Option<usize> {
    match lead {
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
