//! Free-form coordinate parsing.
//!
//! Turns human-entered text into a signed [`LatLon`]. Two notations are
//! accepted and auto-detected:
//!
//! ```text
//! Decimal degrees:  41.5 -87.6     n41.5 w87.6     87.6w, 41.5n
//! DMS:              40°38'23"N 73°46'44"W          s 33°52' 151°12'e
//! ```
//!
//! Any `°`, `'` or `"` in the input selects DMS notation. Hemisphere letters
//! may lead or trail a number, or stand alone as a third token. When letters
//! are present they decide which value is the latitude; otherwise the input
//! order is latitude, longitude.
//!
//! # Example
//!
//! ```
//! use aeroquery::coord::{parse_coordinates, LatLon};
//!
//! let pos = parse_coordinates("87.6w 41.5n").unwrap();
//! assert_eq!(pos, LatLon::new(41.5, -87.6));
//!
//! assert!(parse_coordinates("200 50").is_err());
//! ```

mod token;
mod types;

pub use token::{parse_token, resolve_pair, resolve_triple, CoordValue, Notation, Token};
pub use types::{Axis, CoordParseError, Hemisphere, LatLon, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

/// Parse a free-form coordinate string into a signed position.
///
/// The text is trimmed and lowercased, commas become spaces, and the result
/// is split on whitespace. Two or three tokens are accepted; any other count
/// is an error, as is a latitude beyond ±90 or a longitude beyond ±180.
pub fn parse_coordinates(text: &str) -> Result<LatLon, CoordParseError> {
    let normalized = normalize(text);
    let notation = detect_notation(&normalized);
    let normalized = match notation {
        Notation::Dms => join_dms_marks(&normalized),
        Notation::Decimal => normalized,
    };

    let raw: Vec<&str> = normalized.split_whitespace().collect();
    match raw.len() {
        0 => return Err(CoordParseError::Empty),
        2 | 3 => {}
        n => return Err(CoordParseError::TokenCount(n)),
    }

    let tokens = raw
        .iter()
        .map(|t| parse_token(t, notation))
        .collect::<Result<Vec<_>, _>>()?;

    match tokens.as_slice() {
        [Token::Value(first), Token::Value(second)] => resolve_pair(*first, *second),
        [_, _] => Err(CoordParseError::MisplacedHemisphere),
        [a, b, c] => resolve_triple([*a, *b, *c]),
        _ => Err(CoordParseError::TokenCount(tokens.len())),
    }
}

impl FromStr for LatLon {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coordinates(s)
    }
}

/// Lowercase, fold typographic marks to ASCII, and turn commas into spaces.
fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .replace("''", "\"")
        .chars()
        .map(|c| match c {
            ',' => ' ',
            '′' | '’' => '\'',
            '″' | '”' => '"',
            'º' | '˚' => '°',
            other => other,
        })
        .collect()
}

fn detect_notation(normalized: &str) -> Notation {
    if normalized.contains(|c: char| matches!(c, '°' | '\'' | '"')) {
        Notation::Dms
    } else {
        Notation::Decimal
    }
}

/// Close the gaps inside a single DMS value so `40° 38' 23"` stays one token.
///
/// Whitespace after a degree or minute mark is dropped only when a minutes or
/// seconds group follows, so two bare `41.5° -87.6°` values stay apart.
fn join_dms_marks(normalized: &str) -> String {
    static AFTER_DEGREES: OnceLock<Regex> = OnceLock::new();
    static BEFORE_SECONDS: OnceLock<Regex> = OnceLock::new();

    let after_degrees = AFTER_DEGREES.get_or_init(|| {
        Regex::new(r#"°\s+(\d+(?:\.\d+)?['"])"#).expect("degree gap pattern is valid")
    });
    let before_seconds = BEFORE_SECONDS.get_or_init(|| {
        Regex::new(r#"'\s+(\d+(?:\.\d+)?")"#).expect("seconds gap pattern is valid")
    });

    let joined = after_degrees.replace_all(normalized, "°$1");
    before_seconds.replace_all(&joined, "'$1").into_owned()
}
