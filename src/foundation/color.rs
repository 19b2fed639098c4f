//! Hex color parsing: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
//!
//! The editor stores colors as the strings the color picker produced. Parsing
//! is only used to check configuration and finished snapshots.

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Parse a hex color string. The leading `#` is optional.
pub fn parse_hex_color(s: &str) -> Option<Rgba8> {
    let s = s.trim();
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let b = hex.as_bytes();
    match b.len() {
        3 => Some(Rgba8 {
            r: expand_nibble(b[0])?,
            g: expand_nibble(b[1])?,
            b: expand_nibble(b[2])?,
            a: 255,
        }),
        4 => Some(Rgba8 {
            r: expand_nibble(b[0])?,
            g: expand_nibble(b[1])?,
            b: expand_nibble(b[2])?,
            a: expand_nibble(b[3])?,
        }),
        6 => Some(Rgba8 {
            r: parse_byte(b[0], b[1])?,
            g: parse_byte(b[2], b[3])?,
            b: parse_byte(b[4], b[5])?,
            a: 255,
        }),
        8 => Some(Rgba8 {
            r: parse_byte(b[0], b[1])?,
            g: parse_byte(b[2], b[3])?,
            b: parse_byte(b[4], b[5])?,
            a: parse_byte(b[6], b[7])?,
        }),
        _ => None,
    }
}

/// Whether `s` parses as a hex color.
pub fn is_hex_color(s: &str) -> bool {
    parse_hex_color(s).is_some()
}

/// 'f' -> 0xFF, 'a' -> 0xAA.
fn expand_nibble(ch: u8) -> Option<u8> {
    let n = hex_val(ch)?;
    Some(n << 4 | n)
}

fn parse_byte(hi: u8, lo: u8) -> Option<u8> {
    Some(hex_val(hi)? << 4 | hex_val(lo)?)
}

fn hex_val(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
