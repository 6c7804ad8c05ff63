//! Tokenizer and value parsers for grid parameter strings.

use core::ops::RangeInclusive;

use alloc::string::String;
use alloc::vec::Vec;

use super::ParamWarning;
use super::color::parse_color;
use super::request::{OutputKind, Params};
use crate::orientation::Orientation;

pub(crate) const SAMPLES: RangeInclusive<i32> = 1..=25;
pub(crate) const MIN_WIDTH: RangeInclusive<i32> = 4..=10000;
pub(crate) const MAX_WIDTH: RangeInclusive<i32> = 0..=10000;
pub(crate) const STROKE_WIDTH: RangeInclusive<i32> = 1..=50;
pub(crate) const MARGIN: RangeInclusive<i32> = -500..=1000;

const BOOL: &str = "expected true|false";

/// Parse a parameter string into [`Params`] plus warnings.
pub(crate) fn parse_query(query: &str) -> (Params, Vec<ParamWarning>) {
    let mut params = Params::new();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key).to_ascii_lowercase();
        let value = percent_decode(raw_value);
        dispatch_key(&key, value.trim(), &mut params, &mut warnings);
    }

    (params, warnings)
}

fn dispatch_key(key: &str, value: &str, params: &mut Params, warnings: &mut Vec<ParamWarning>) {
    let Some(canonical) = canonical_key(key) else {
        warnings.push(ParamWarning::KeyNotRecognized {
            key: String::from(key),
            value: String::from(value),
        });
        return;
    };

    match canonical {
        "output" => set_parsed(
            &mut params.output,
            parse_output(value),
            canonical,
            value,
            "expected grid|sheet",
            warnings,
        ),
        "orientation" => set_parsed(
            &mut params.orientation,
            parse_orientation(value),
            canonical,
            value,
            "expected horizontal|vertical",
            warnings,
        ),
        "color" => set_parsed(
            &mut params.color,
            parse_color(value),
            canonical,
            value,
            "expected foreground, a color name or #hex",
            warnings,
        ),
        "crop" => set_parsed(&mut params.crop, parse_bool(value), canonical, value, BOOL, warnings),
        "grid" => set_parsed(&mut params.adjust_grid, parse_bool(value), canonical, value, BOOL, warnings),
        "samples" => set_ranged(&mut params.samples, value, canonical, SAMPLES, warnings),
        "min" => set_ranged(&mut params.min_width, value, canonical, MIN_WIDTH, warnings),
        "max" => set_ranged(&mut params.max_width, value, canonical, MAX_WIDTH, warnings),
        "stroke" => set_ranged(&mut params.stroke_width, value, canonical, STROKE_WIDTH, warnings),
        "mx" => set_ranged(&mut params.margin_x, value, canonical, MARGIN, warnings),
        "my" => set_ranged(&mut params.margin_y, value, canonical, MARGIN, warnings),
        _ => {}
    }
}

/// Map a key or one of its aliases to the name used in warnings.
fn canonical_key(key: &str) -> Option<&'static str> {
    Some(match key {
        "output" => "output",
        "samples" | "count" => "samples",
        "orientation" | "o" => "orientation",
        "min" | "minwidth" => "min",
        "max" | "maxwidth" => "max",
        "stroke" | "strokewidth" => "stroke",
        "mx" | "marginx" => "mx",
        "my" | "marginy" => "my",
        "color" => "color",
        "crop" | "croplayer" => "crop",
        "grid" | "adjustgrid" => "grid",
        _ => return None,
    })
}

fn set_parsed<T>(
    field: &mut Option<T>,
    parsed: Option<T>,
    key: &'static str,
    value: &str,
    reason: &'static str,
    warnings: &mut Vec<ParamWarning>,
) {
    match parsed {
        Some(v) => {
            if field.is_some() {
                warnings.push(ParamWarning::DuplicateKey {
                    key: String::from(key),
                    value: String::from(value),
                });
            }
            *field = Some(v);
        }
        None => warnings.push(ParamWarning::ValueInvalid {
            key,
            value: String::from(value),
            reason,
        }),
    }
}

/// Parse an integer and clamp it into `range`, warning when clamped.
fn set_ranged(
    field: &mut Option<i32>,
    value: &str,
    key: &'static str,
    range: RangeInclusive<i32>,
    warnings: &mut Vec<ParamWarning>,
) {
    let parsed = parse_int(value).map(|v| {
        let clamped = v.clamp(*range.start() as i64, *range.end() as i64) as i32;
        if clamped as i64 != v {
            warnings.push(ParamWarning::ValueOutOfRange {
                key,
                value: v,
                clamped,
            });
        }
        clamped
    });
    set_parsed(field, parsed, key, value, "expected an integer", warnings);
}

// ---- Value parsers ----

/// Integers, accepting a fractional part the way dialog spinners do.
fn parse_int(s: &str) -> Option<i64> {
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }
    let f = s.parse::<f64>().ok().filter(|f| f.is_finite())?;
    Some(crate::math::round(f).clamp(i64::MIN as f64, i64::MAX as f64) as i64)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_output(s: &str) -> Option<OutputKind> {
    match s.to_ascii_lowercase().as_str() {
        "grid" | "hexgrid" => Some(OutputKind::Grid),
        "sheet" | "samples" => Some(OutputKind::Sheet),
        _ => None,
    }
}

fn parse_orientation(s: &str) -> Option<Orientation> {
    match s.to_ascii_lowercase().as_str() {
        "h" | "x" | "horizontal" => Some(Orientation::Horizontal),
        "v" | "y" | "vertical" => Some(Orientation::Vertical),
        _ => None,
    }
}

// ---- Tokenizer ----

fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split on the first `=`; a bare key has an empty value.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a component, with `+` as space. Invalid UTF-8 after
/// decoding is replaced rather than rejected.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::request::StrokeColor;

    fn parse(q: &str) -> (Params, Vec<ParamWarning>) {
        parse_query(q)
    }

    #[test]
    fn empty_query() {
        let (p, w) = parse("");
        assert_eq!(p, Params::new());
        assert!(w.is_empty());
        let (p, w) = parse("?");
        assert_eq!(p, Params::new());
        assert!(w.is_empty());
    }

    #[test]
    fn basic_keys() {
        let (p, w) = parse("?min=20&max=60&stroke=3&mx=-5&my=12&samples=9");
        assert!(w.is_empty(), "{w:?}");
        assert_eq!(p.min_width, Some(20));
        assert_eq!(p.max_width, Some(60));
        assert_eq!(p.stroke_width, Some(3));
        assert_eq!(p.margin_x, Some(-5));
        assert_eq!(p.margin_y, Some(12));
        assert_eq!(p.samples, Some(9));
    }

    #[test]
    fn aliases_and_case() {
        let (p, w) = parse("MinWidth=20&MAXWIDTH=40&o=V&StrokeWidth=1&count=4&cropLayer=yes&adjustgrid=on");
        assert!(w.is_empty(), "{w:?}");
        assert_eq!(p.min_width, Some(20));
        assert_eq!(p.max_width, Some(40));
        assert_eq!(p.orientation, Some(Orientation::Vertical));
        assert_eq!(p.stroke_width, Some(1));
        assert_eq!(p.samples, Some(4));
        assert_eq!(p.crop, Some(true));
        assert_eq!(p.adjust_grid, Some(true));
    }

    #[test]
    fn orientation_spellings() {
        for (v, o) in [
            ("h", Orientation::Horizontal),
            ("x", Orientation::Horizontal),
            ("horizontal", Orientation::Horizontal),
            ("v", Orientation::Vertical),
            ("Y", Orientation::Vertical),
            ("vertical", Orientation::Vertical),
        ] {
            let (p, _) = parse(&alloc::format!("orientation={v}"));
            assert_eq!(p.orientation, Some(o), "{v}");
        }
    }

    #[test]
    fn output_kinds() {
        assert_eq!(parse("output=sheet").0.output, Some(OutputKind::Sheet));
        assert_eq!(parse("output=samples").0.output, Some(OutputKind::Sheet));
        assert_eq!(parse("output=hexgrid").0.output, Some(OutputKind::Grid));
    }

    #[test]
    fn out_of_range_is_clamped() {
        let (p, w) = parse("min=2&max=20000&stroke=0&mx=-900&samples=100");
        assert_eq!(p.min_width, Some(4));
        assert_eq!(p.max_width, Some(10000));
        assert_eq!(p.stroke_width, Some(1));
        assert_eq!(p.margin_x, Some(-500));
        assert_eq!(p.samples, Some(25));
        assert_eq!(w.len(), 5);
        assert!(w.contains(&ParamWarning::ValueOutOfRange {
            key: "min",
            value: 2,
            clamped: 4
        }));
        assert!(w.contains(&ParamWarning::ValueOutOfRange {
            key: "mx",
            value: -900,
            clamped: -500
        }));
    }

    #[test]
    fn fractional_numbers_round() {
        let (p, w) = parse("min=30.6&stroke=2.4");
        assert!(w.is_empty());
        assert_eq!(p.min_width, Some(31));
        assert_eq!(p.stroke_width, Some(2));
    }

    #[test]
    fn invalid_values_warn_and_keep_default() {
        let (p, w) = parse("min=abc&orientation=diagonal&crop=maybe&output=pdf");
        assert_eq!(p, Params::new());
        assert_eq!(w.len(), 4);
        assert!(matches!(
            &w[0],
            ParamWarning::ValueInvalid { key: "min", value, .. } if value == "abc"
        ));
        assert!(matches!(&w[1], ParamWarning::ValueInvalid { key: "orientation", .. }));
    }

    #[test]
    fn duplicate_key_last_wins() {
        let (p, w) = parse("min=20&minwidth=40");
        assert_eq!(p.min_width, Some(40));
        assert_eq!(
            w,
            [ParamWarning::DuplicateKey {
                key: String::from("min"),
                value: String::from("40")
            }]
        );
    }

    #[test]
    fn unknown_key() {
        let (_, w) = parse("width=100");
        assert_eq!(
            w,
            [ParamWarning::KeyNotRecognized {
                key: String::from("width"),
                value: String::from("100")
            }]
        );
    }

    #[test]
    fn percent_decoding() {
        assert_eq!(percent_decode("a%20b+c"), "a b c");
        assert_eq!(percent_decode("%23ff0000"), "#ff0000");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("%C3%A9"), "é");
    }

    #[test]
    fn color_values() {
        let (p, w) = parse("color=%23FF000080");
        assert!(w.is_empty());
        assert_eq!(
            p.color,
            Some(StrokeColor::Srgb {
                r: 255,
                g: 0,
                b: 0,
                a: 128
            })
        );
        assert_eq!(parse("color=foreground").0.color, Some(StrokeColor::Foreground));
    }

    #[test]
    fn bare_key_is_invalid_value() {
        let (p, w) = parse("crop");
        assert_eq!(p.crop, None);
        assert!(matches!(&w[0], ParamWarning::ValueInvalid { key: "crop", .. }));
    }
}
