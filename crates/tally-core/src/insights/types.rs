//! Core types for the insight engine

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Classification of a derived insight
///
/// The classification selects the downstream presentation affordance
/// (icon, ranking weight) and carries no other engine-internal meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    /// Something is wrong and needs attention
    Alert,
    /// A suggestion the user can act on
    Tip,
    /// An observation about where the money is going
    Trend,
    /// A positive next step given current habits
    Recommendation,
}

impl InsightType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::Tip => "tip",
            Self::Trend => "trend",
            Self::Recommendation => "recommendation",
        }
    }

    /// Icon name the presentation layer renders for this classification
    ///
    /// Total by construction: adding a variant without an icon is a compile
    /// error, not a fallthrough default.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Alert => "alert-circle",
            Self::Tip => "lightbulb",
            Self::Trend => "trending-up",
            Self::Recommendation => "award",
        }
    }

    /// Numeric ranking weight (higher sorts first)
    pub fn priority(&self) -> u8 {
        match self {
            Self::Alert => 4,
            Self::Recommendation => 3,
            Self::Trend => 2,
            Self::Tip => 1,
        }
    }
}

impl fmt::Display for InsightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alert" => Ok(Self::Alert),
            "tip" => Ok(Self::Tip),
            "trend" => Ok(Self::Trend),
            "recommendation" => Ok(Self::Recommendation),
            _ => Err(Error::InvalidInsightType(s.to_string())),
        }
    }
}
