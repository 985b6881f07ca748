use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A projected statistical category.
///
/// Serialized using the short box-score label (`"PTS"`, `"REB"`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum StatCategory {
    #[serde(rename = "PTS")]
    #[display("PTS")]
    Points,
    #[serde(rename = "REB")]
    #[display("REB")]
    Rebounds,
    #[serde(rename = "AST")]
    #[display("AST")]
    Assists,
    #[serde(rename = "STL")]
    #[display("STL")]
    Steals,
    #[serde(rename = "BLK")]
    #[display("BLK")]
    Blocks,
    #[serde(rename = "TOV")]
    #[display("TOV")]
    Turnovers,
    #[serde(rename = "FG3M")]
    #[display("FG3M")]
    ThreePointersMade,
}

impl StatCategory {
    pub const LEN: usize = 7;

    /// All categories, in draw order.
    pub const ALL: [Self; Self::LEN] = [
        Self::Points,
        Self::Rebounds,
        Self::Assists,
        Self::Steals,
        Self::Blocks,
        Self::Turnovers,
        Self::ThreePointersMade,
    ];

    #[must_use]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Human-readable name of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::Rebounds => "rebounds",
            Self::Assists => "assists",
            Self::Steals => "steals",
            Self::Blocks => "blocks",
            Self::Turnovers => "turnovers",
            Self::ThreePointersMade => "three-pointers made",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown stat category: {input}")]
pub struct ParseCategoryError {
    pub input: String,
}

impl FromStr for StatCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let category = match lower.as_str() {
            "pts" | "points" => Self::Points,
            "reb" | "rebounds" => Self::Rebounds,
            "ast" | "assists" => Self::Assists,
            "stl" | "steals" => Self::Steals,
            "blk" | "blocks" => Self::Blocks,
            "tov" | "turnovers" => Self::Turnovers,
            "fg3m" | "3pm" | "threes" => Self::ThreePointersMade,
            _ => {
                return Err(ParseCategoryError {
                    input: s.to_owned(),
                });
            }
        };
        Ok(category)
    }
}

/// A player's listed position.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Position {
    #[serde(rename = "PG")]
    #[display("PG")]
    PointGuard,
    #[serde(rename = "SG")]
    #[display("SG")]
    ShootingGuard,
    #[serde(rename = "SF")]
    #[display("SF")]
    SmallForward,
    #[serde(rename = "PF")]
    #[display("PF")]
    PowerForward,
    #[serde(rename = "C")]
    #[display("C")]
    Center,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_index() {
        for (i, category) in StatCategory::ALL.into_iter().enumerate() {
            assert_eq!(category.as_index(), i);
        }
    }

    #[test]
    fn test_parse_short_and_long_names() {
        assert_eq!("PTS".parse(), Ok(StatCategory::Points));
        assert_eq!("rebounds".parse(), Ok(StatCategory::Rebounds));
        assert_eq!(" fg3m ".parse(), Ok(StatCategory::ThreePointersMade));
        assert_eq!(
            "dunks".parse::<StatCategory>(),
            Err(ParseCategoryError {
                input: "dunks".to_owned()
            })
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for category in StatCategory::ALL {
            assert_eq!(category.to_string().parse(), Ok(category));
        }
    }

    #[test]
    fn test_serde_uses_short_labels() {
        let json = serde_json::to_string(&StatCategory::ThreePointersMade).unwrap();
        assert_eq!(json, "\"FG3M\"");
        let position: Position = serde_json::from_str("\"PG\"").unwrap();
        assert_eq!(position, Position::PointGuard);
    }
}
