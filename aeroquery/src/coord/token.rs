//! Token grammar and hemisphere disambiguation for coordinate strings.
//!
//! A normalized input is split on whitespace. Each token is either a
//! standalone hemisphere letter or a number with an optional leading or
//! trailing hemisphere letter. Two tokens are resolved by [`resolve_pair`],
//! three tokens (one of them a standalone letter) by [`resolve_triple`].

use regex::Regex;
use std::sync::OnceLock;

use super::types::{Axis, CoordParseError, Hemisphere, LatLon};

/// Notation of the whole input, detected once before tokenizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// Signed decimal degrees, e.g. `41.5`
    Decimal,
    /// Degrees, minutes and seconds, e.g. `41°30'00"`
    Dms,
}

/// A single lexical token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A hemisphere letter detached from any number
    Hemisphere(Hemisphere),
    /// A number, possibly carrying its own hemisphere letter
    Value(CoordValue),
}

/// A coordinate magnitude as written, plus the letter attached to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordValue {
    /// Value with its literal sign
    pub value: f64,
    /// Attached hemisphere letter, if any
    pub hemisphere: Option<Hemisphere>,
}

impl CoordValue {
    pub fn new(value: f64, hemisphere: Option<Hemisphere>) -> Self {
        Self { value, hemisphere }
    }

    /// The value with the hemisphere sign applied.
    ///
    /// A hemisphere letter overrides the literal sign.
    pub fn signed(&self) -> f64 {
        match self.hemisphere {
            Some(h) => self.value.abs() * h.sign(),
            None => self.value,
        }
    }
}

fn decimal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)$").expect("decimal pattern is valid")
    })
}

fn dms_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Group 1: sign, 2: degrees, 3: minutes, 4: seconds.
        // Minutes and seconds require a degree mark before them.
        Regex::new(
            r#"^([+-])?(\d+(?:\.\d+)?)(?:°(?:(\d+(?:\.\d+)?)')?(?:(\d+(?:\.\d+)?)")?)?$"#,
        )
        .expect("DMS pattern is valid")
    })
}

/// Parse one whitespace-free, lowercase token.
pub fn parse_token(token: &str, notation: Notation) -> Result<Token, CoordParseError> {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(hemisphere) = Hemisphere::from_char(c) {
            return Ok(Token::Hemisphere(hemisphere));
        }
    }

    let (body, hemisphere) = split_hemisphere(token)?;
    let value = match notation {
        Notation::Decimal => parse_decimal(body)
            .ok_or_else(|| CoordParseError::InvalidToken(token.to_string()))?,
        Notation::Dms => parse_dms(body, token)?,
    };

    Ok(Token::Value(CoordValue::new(value, hemisphere)))
}

/// Strip a single leading or trailing hemisphere letter from a token.
fn split_hemisphere(token: &str) -> Result<(&str, Option<Hemisphere>), CoordParseError> {
    let leading = token.chars().next().and_then(Hemisphere::from_char);
    let trailing = token.chars().next_back().and_then(Hemisphere::from_char);

    // Hemisphere letters are ASCII, so byte slicing by one is safe.
    match (leading, trailing) {
        (Some(_), Some(_)) => Err(CoordParseError::InvalidToken(token.to_string())),
        (Some(h), None) => Ok((&token[1..], Some(h))),
        (None, Some(h)) => Ok((&token[..token.len() - 1], Some(h))),
        (None, None) => Ok((token, None)),
    }
}

fn parse_decimal(body: &str) -> Option<f64> {
    if !decimal_pattern().is_match(body) {
        return None;
    }
    body.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse `[+-]D[°[M'][S"]]` into signed decimal degrees.
fn parse_dms(body: &str, token: &str) -> Result<f64, CoordParseError> {
    let invalid = || CoordParseError::InvalidToken(token.to_string());
    let captures = dms_pattern().captures(body).ok_or_else(invalid)?;

    let component = |index: usize| -> Result<f64, CoordParseError> {
        match captures.get(index) {
            Some(m) => m.as_str().parse::<f64>().map_err(|_| invalid()),
            None => Ok(0.0),
        }
    };

    let degrees = component(2)?;
    let minutes = component(3)?;
    let seconds = component(4)?;

    if !(0.0..=180.0).contains(&degrees)
        || !(0.0..60.0).contains(&minutes)
        || !(0.0..60.0).contains(&seconds)
    {
        return Err(CoordParseError::DmsOutOfRange(token.to_string()));
    }

    let sign = match captures.get(1).map(|m| m.as_str()) {
        Some("-") => -1.0,
        _ => 1.0,
    };

    Ok(sign * (degrees + minutes / 60.0 + seconds / 3600.0))
}

/// Resolve two numeric tokens into a position.
///
/// Hemisphere letters decide which token is latitude regardless of order.
/// Without letters the order is latitude then longitude. When only one token
/// carries a letter, the other token takes the remaining axis.
pub fn resolve_pair(first: CoordValue, second: CoordValue) -> Result<LatLon, CoordParseError> {
    let first_axis = first.hemisphere.map(Hemisphere::axis);
    let second_axis = second.hemisphere.map(Hemisphere::axis);

    let (lat, lon) = match (first_axis, second_axis) {
        (None, None) => (first, second),
        (Some(a), Some(b)) if a == b => return Err(CoordParseError::ConflictingHemispheres),
        (Some(Axis::Latitude), _) | (_, Some(Axis::Longitude)) => (first, second),
        (Some(Axis::Longitude), _) | (_, Some(Axis::Latitude)) => (second, first),
    };

    LatLon::checked(lat.signed(), lon.signed())
}

/// Resolve three tokens: two numbers and one standalone hemisphere letter.
///
/// The standalone letter binds to an adjacent number that has no letter of
/// its own. A leading letter binds forward, a trailing letter binds backward,
/// and a letter between the numbers prefers the number before it.
pub fn resolve_triple(tokens: [Token; 3]) -> Result<LatLon, CoordParseError> {
    let mut letter = None;
    let mut values = Vec::with_capacity(2);

    for (position, token) in tokens.iter().enumerate() {
        match token {
            Token::Hemisphere(h) if letter.is_none() => letter = Some((position, *h)),
            Token::Hemisphere(_) => return Err(CoordParseError::MisplacedHemisphere),
            Token::Value(v) => values.push(*v),
        }
    }

    let Some((position, hemisphere)) = letter else {
        return Err(CoordParseError::MisplacedHemisphere);
    };

    let preferred = if position == 2 { 1 } else { 0 };
    let target = [preferred, 1 - preferred]
        .into_iter()
        .find(|&i| values[i].hemisphere.is_none())
        .ok_or(CoordParseError::ConflictingHemispheres)?;
    values[target].hemisphere = Some(hemisphere);

    resolve_pair(values[0], values[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(token: &str, notation: Notation) -> CoordValue {
        match parse_token(token, notation).unwrap() {
            Token::Value(v) => v,
            other => panic!("expected value token, got {:?}", other),
        }
    }

    #[test]
    fn test_standalone_letter_token() {
        assert_eq!(
            parse_token("w", Notation::Decimal).unwrap(),
            Token::Hemisphere(Hemisphere::West)
        );
    }

    #[test]
    fn test_leading_and_trailing_letters() {
        let leading = value("n41.5", Notation::Decimal);
        let trailing = value("41.5n", Notation::Decimal);
        assert_eq!(leading, trailing);
        assert_eq!(leading.hemisphere, Some(Hemisphere::North));
        assert_eq!(leading.value, 41.5);
    }

    #[test]
    fn test_letters_on_both_sides_rejected() {
        assert!(matches!(
            parse_token("n41.5w", Notation::Decimal),
            Err(CoordParseError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_decimal_rejects_exponent_and_garbage() {
        assert!(parse_token("1e5x", Notation::Decimal).is_err());
        assert!(parse_token("4.1.5", Notation::Decimal).is_err());
        assert!(parse_token("abc", Notation::Decimal).is_err());
        assert!(parse_token("-", Notation::Decimal).is_err());
    }

    #[test]
    fn test_dms_components() {
        let v = value("40°38'23\"", Notation::Dms);
        let expected = 40.0 + 38.0 / 60.0 + 23.0 / 3600.0;
        assert!((v.value - expected).abs() < 1e-12);
    }

    #[test]
    fn test_dms_missing_groups_default_to_zero() {
        assert_eq!(value("40°", Notation::Dms).value, 40.0);
        assert_eq!(value("40°30'", Notation::Dms).value, 40.5);
        assert_eq!(value("40", Notation::Dms).value, 40.0);
        let v = value("40°36\"", Notation::Dms);
        assert!((v.value - 40.01).abs() < 1e-12);
    }

    #[test]
    fn test_dms_ranges() {
        assert!(matches!(
            parse_token("40°60'", Notation::Dms),
            Err(CoordParseError::DmsOutOfRange(_))
        ));
        assert!(matches!(
            parse_token("40°10'60\"", Notation::Dms),
            Err(CoordParseError::DmsOutOfRange(_))
        ));
        assert!(matches!(
            parse_token("181°", Notation::Dms),
            Err(CoordParseError::DmsOutOfRange(_))
        ));
        assert!(parse_token("180°", Notation::Dms).is_ok());
    }

    #[test]
    fn test_signed_applies_hemisphere() {
        assert_eq!(CoordValue::new(41.5, Some(Hemisphere::South)).signed(), -41.5);
        assert_eq!(CoordValue::new(-41.5, Some(Hemisphere::North)).signed(), 41.5);
        assert_eq!(CoordValue::new(-41.5, None).signed(), -41.5);
    }

    // ==================== resolve_pair tests ====================

    #[test]
    fn test_pair_without_letters_is_lat_lon() {
        let pos = resolve_pair(CoordValue::new(41.5, None), CoordValue::new(-87.6, None)).unwrap();
        assert_eq!(pos, LatLon::new(41.5, -87.6));
    }

    #[test]
    fn test_pair_letters_reorder() {
        let pos = resolve_pair(
            CoordValue::new(87.6, Some(Hemisphere::West)),
            CoordValue::new(41.5, Some(Hemisphere::North)),
        )
        .unwrap();
        assert_eq!(pos, LatLon::new(41.5, -87.6));
    }

    #[test]
    fn test_pair_single_letter_takes_its_axis() {
        let pos = resolve_pair(
            CoordValue::new(87.6, Some(Hemisphere::West)),
            CoordValue::new(41.5, None),
        )
        .unwrap();
        assert_eq!(pos, LatLon::new(41.5, -87.6));
    }

    #[test]
    fn test_pair_same_axis_conflicts() {
        let result = resolve_pair(
            CoordValue::new(41.5, Some(Hemisphere::North)),
            CoordValue::new(12.0, Some(Hemisphere::South)),
        );
        assert_eq!(result, Err(CoordParseError::ConflictingHemispheres));
    }

    // ==================== resolve_triple tests ====================

    fn tokens(a: &str, b: &str, c: &str) -> [Token; 3] {
        [
            parse_token(a, Notation::Decimal).unwrap(),
            parse_token(b, Notation::Decimal).unwrap(),
            parse_token(c, Notation::Decimal).unwrap(),
        ]
    }

    #[test]
    fn test_triple_leading_letter_binds_forward() {
        let pos = resolve_triple(tokens("s", "33.9", "151.2")).unwrap();
        assert_eq!(pos, LatLon::new(-33.9, 151.2));
    }

    #[test]
    fn test_triple_trailing_letter_binds_backward() {
        let pos = resolve_triple(tokens("41.5", "87.6", "w")).unwrap();
        assert_eq!(pos, LatLon::new(41.5, -87.6));
    }

    #[test]
    fn test_triple_middle_letter_prefers_previous() {
        let pos = resolve_triple(tokens("41.5", "n", "87.6w")).unwrap();
        assert_eq!(pos, LatLon::new(41.5, -87.6));
    }

    #[test]
    fn test_triple_middle_letter_falls_forward() {
        let pos = resolve_triple(tokens("n41.5", "w", "87.6")).unwrap();
        assert_eq!(pos, LatLon::new(41.5, -87.6));
    }

    #[test]
    fn test_triple_needs_one_standalone_letter() {
        assert_eq!(
            resolve_triple(tokens("1", "2", "3")),
            Err(CoordParseError::MisplacedHemisphere)
        );
        assert_eq!(
            resolve_triple(tokens("n", "w", "3")),
            Err(CoordParseError::MisplacedHemisphere)
        );
    }

    #[test]
    fn test_triple_letter_with_no_free_number() {
        assert_eq!(
            resolve_triple(tokens("41.5n", "87.6w", "e")),
            Err(CoordParseError::ConflictingHemispheres)
        );
    }
}
