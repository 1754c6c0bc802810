use std::{collections::BTreeMap, fmt};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// Matches anywhere in the label, so "Hard Level 3 bug" still resolves.
static LEVEL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)level[\s\-_.]*(\d+)").expect("level pattern is valid"));

/// Canonical `level-N` token derived from a free-text label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(String);

impl Level {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extracts a canonical level from a raw label. Case and separator noise are
/// tolerated: `"Level 2"`, `"level-2"`, `"LEVEL_2"` and `"level.2"` all
/// normalize to `level-2`. Digits are kept verbatim, so `level-10` survives
/// even when no points are configured for it. Labels without a level shape
/// yield `None` and are simply not scoring labels.
pub fn parse_level(label: &str) -> Option<Level> {
    let digits = LEVEL_PATTERN.captures(label)?.get(1)?.as_str();
    Some(Level(format!("level-{digits}")))
}

/// Level to points mapping. This is configuration, not derived logic:
/// programs with other conventions inject their own table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointsTable(BTreeMap<Level, u32>);

impl Default for PointsTable {
    fn default() -> Self {
        Self(
            [("level-1", 3), ("level-2", 7), ("level-3", 10)]
                .into_iter()
                .map(|(level, points)| (Level(level.to_string()), points))
                .collect(),
        )
    }
}

impl PointsTable {
    /// Points for a canonical level. Levels absent from the table score 0.
    pub fn points(&self, level: &Level) -> u32 {
        self.0.get(level).copied().unwrap_or(0)
    }
}
