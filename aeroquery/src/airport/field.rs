//! Indexed property fields.

use std::fmt;
use std::str::FromStr;

/// Normalize a lookup key: trim and lowercase.
///
/// Returns `None` for empty or whitespace-only values so they are never
/// indexed or matched.
pub fn normalize_key(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Fields with one feature per key (last write wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExactField {
    Icao,
    Iata,
}

impl ExactField {
    pub fn name(self) -> &'static str {
        match self {
            Self::Icao => "icao",
            Self::Iata => "iata",
        }
    }
}

/// Fields whose keys map to every feature sharing the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupField {
    City,
    Country,
    State,
    SurfaceType,
    Type,
}

impl GroupField {
    /// All grouping fields, in table order.
    pub const ALL: [GroupField; 5] = [
        GroupField::City,
        GroupField::Country,
        GroupField::State,
        GroupField::SurfaceType,
        GroupField::Type,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::City => "city",
            Self::Country => "country",
            Self::State => "state",
            Self::SurfaceType => "surfaceType",
            Self::Type => "type",
        }
    }
}

/// Error returned when a field name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field: '{0}'")]
pub struct UnknownFieldError(pub String);

impl FromStr for ExactField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "icao" => Ok(Self::Icao),
            "iata" => Ok(Self::Iata),
            _ => Err(UnknownFieldError(s.to_string())),
        }
    }
}

impl FromStr for GroupField {
    type Err = UnknownFieldError;

    /// Accepts singular and plural forms, e.g. `country` or `countries`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "city" | "cities" => Ok(Self::City),
            "country" | "countries" => Ok(Self::Country),
            "state" | "states" => Ok(Self::State),
            "surfacetype" | "surface" | "surfaces" => Ok(Self::SurfaceType),
            "type" | "types" => Ok(Self::Type),
            _ => Err(UnknownFieldError(s.to_string())),
        }
    }
}

impl fmt::Display for ExactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for GroupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("  KJFK "), Some("kjfk".to_string()));
        assert_eq!(normalize_key("New York"), Some("new york".to_string()));
        assert_eq!(normalize_key(""), None);
        assert_eq!(normalize_key("   "), None);
    }

    #[test]
    fn test_group_field_parsing() {
        assert_eq!("countries".parse::<GroupField>(), Ok(GroupField::Country));
        assert_eq!("surfaceType".parse::<GroupField>(), Ok(GroupField::SurfaceType));
        assert_eq!("STATE".parse::<GroupField>(), Ok(GroupField::State));
        assert!("runway".parse::<GroupField>().is_err());
    }

    #[test]
    fn test_exact_field_round_trips_name() {
        for field in [ExactField::Icao, ExactField::Iata] {
            assert_eq!(field.name().parse::<ExactField>(), Ok(field));
        }
    }

    #[test]
    fn test_group_field_names_parse_back() {
        for field in GroupField::ALL {
            assert_eq!(field.to_string().parse::<GroupField>(), Ok(field));
        }
    }
}
