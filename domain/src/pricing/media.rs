//! Media category value object

use serde::{Deserialize, Serialize};

/// The kind of media a service sets up coverage against
///
/// Selects which setup-hour schedule applies, and whether coverage
/// languages contribute monthly effort (they do only for `Online`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    /// Press clippings and print publications
    Print,
    /// Web, social, and broadcast-online sources
    Online,
}

impl std::fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaCategory::Print => write!(f, "Print"),
            MediaCategory::Online => write!(f, "Online"),
        }
    }
}

impl std::str::FromStr for MediaCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "print" => Ok(MediaCategory::Print),
            "online" => Ok(MediaCategory::Online),
            _ => Err(format!("Unknown media category: {}. Valid: print, online", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(MediaCategory::Print.to_string(), "Print");
        assert_eq!(MediaCategory::Online.to_string(), "Online");
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("print".parse::<MediaCategory>().ok(), Some(MediaCategory::Print));
        assert_eq!("Online".parse::<MediaCategory>().ok(), Some(MediaCategory::Online));
        assert!("broadcast".parse::<MediaCategory>().is_err());
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&MediaCategory::Online).unwrap();
        assert_eq!(json, "\"online\"");
    }
}
