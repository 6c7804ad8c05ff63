//! Stroke color values: `foreground`, `#hex` or a basic CSS color name.

use super::request::StrokeColor;

/// Parse a stroke color.
///
/// Accepts `foreground` (the host's current color), `#RGB`, `#RGBA`,
/// `#RRGGBB`, `#RRGGBBAA` and the CSS basic color keywords, all
/// case-insensitive.
pub(crate) fn parse_color(s: &str) -> Option<StrokeColor> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    let lower = s.to_ascii_lowercase();
    match lower.as_str() {
        "foreground" | "fg" => Some(StrokeColor::Foreground),
        "black" => Some(StrokeColor::Black),
        name => NAMED
            .binary_search_by_key(&name, |&(n, _)| n)
            .ok()
            .map(|i| {
                let [r, g, b] = NAMED[i].1;
                StrokeColor::Srgb { r, g, b, a: 255 }
            }),
    }
}

fn parse_hex(hex: &str) -> Option<StrokeColor> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let bytes = hex.as_bytes();
    let [r, g, b, a] = match bytes.len() {
        3 | 4 => {
            let mut c = [255u8; 4];
            for (dst, &ch) in c.iter_mut().zip(bytes) {
                let n = hex_val(ch)?;
                *dst = n << 4 | n;
            }
            c
        }
        6 | 8 => {
            let mut c = [255u8; 4];
            for (dst, pair) in c.iter_mut().zip(bytes.chunks_exact(2)) {
                *dst = hex_val(pair[0])? << 4 | hex_val(pair[1])?;
            }
            c
        }
        _ => return None,
    };
    Some(StrokeColor::Srgb { r, g, b, a })
}

fn hex_val(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

/// CSS basic color keywords. Sorted for binary search.
const NAMED: &[(&str, [u8; 3])] = &[
    ("aqua", [0, 255, 255]),
    ("blue", [0, 0, 255]),
    ("fuchsia", [255, 0, 255]),
    ("gray", [128, 128, 128]),
    ("green", [0, 128, 0]),
    ("grey", [128, 128, 128]),
    ("lime", [0, 255, 0]),
    ("maroon", [128, 0, 0]),
    ("navy", [0, 0, 128]),
    ("olive", [128, 128, 0]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
    ("red", [255, 0, 0]),
    ("silver", [192, 192, 192]),
    ("teal", [0, 128, 128]),
    ("white", [255, 255, 255]),
    ("yellow", [255, 255, 0]),
];
