//! Decision strategy and logic enumerations for authorization policies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// How the outcomes of several policies combine into one decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionStrategy {
    /// At least one policy must grant.
    Affirmative,

    /// Every policy must grant.
    #[default]
    Unanimous,

    /// More policies must grant than deny.
    Consensus,
}

impl DecisionStrategy {
    /// Returns the wire token.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionStrategy::Affirmative => "AFFIRMATIVE",
            DecisionStrategy::Unanimous => "UNANIMOUS",
            DecisionStrategy::Consensus => "CONSENSUS",
        }
    }
}

impl fmt::Display for DecisionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecisionStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AFFIRMATIVE" => Ok(DecisionStrategy::Affirmative),
            "UNANIMOUS" => Ok(DecisionStrategy::Unanimous),
            "CONSENSUS" => Ok(DecisionStrategy::Consensus),
            other => Err(Error::invalid_argument(format!("unknown decision strategy: {}", other))),
        }
    }
}

/// Whether a policy's result is used as-is or inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Logic {
    /// The policy result is used as evaluated.
    #[default]
    Positive,

    /// The policy result is inverted.
    Negative,
}

impl Logic {
    /// Returns the wire token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Logic::Positive => "POSITIVE",
            Logic::Negative => "NEGATIVE",
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Logic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "POSITIVE" => Ok(Logic::Positive),
            "NEGATIVE" => Ok(Logic::Negative),
            other => Err(Error::invalid_argument(format!("unknown policy logic: {}", other))),
        }
    }
}
