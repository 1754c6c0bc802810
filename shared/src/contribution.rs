use chrono::{DateTime, Utc};

use crate::{parse_level, GithubHandle, Level, PointsTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    PullRequest,
    Issue,
}

/// One closed pull request or issue pulled from the remote listing.
#[derive(Debug, Clone)]
pub struct ContributionItem {
    pub kind: ItemKind,
    pub number: u64,
    pub author: GithubHandle,
    pub labels: Vec<String>,
    pub merged: Option<DateTime<Utc>>,
}

impl ContributionItem {
    pub fn new(
        kind: ItemKind,
        number: u64,
        author: Option<String>,
        labels: Vec<String>,
    ) -> Self {
        Self {
            kind,
            number,
            author: author.unwrap_or_else(|| "unknown".to_string()),
            labels,
            merged: None,
        }
    }

    pub fn with_merged(mut self, merged: Option<DateTime<Utc>>) -> Self {
        self.merged = merged;
        self
    }

    /// An item belongs to the program when any of its labels contains the
    /// marker, case-insensitively.
    pub fn qualifies(&self, program_marker: &str) -> bool {
        let marker = program_marker.to_lowercase();
        self.labels
            .iter()
            .any(|label| label.to_lowercase().contains(&marker))
    }

    /// Collector-side eligibility: the program label is required, and in the
    /// strict variant pull requests must also be merged. Ineligible items
    /// are excluded entirely, they never reach the aggregator.
    pub fn eligible(&self, program_marker: &str, require_merged: bool) -> bool {
        if !self.qualifies(program_marker) {
            return false;
        }
        if require_merged && self.kind == ItemKind::PullRequest && self.merged.is_none() {
            return false;
        }
        true
    }

    /// Picks the scoring level for this item: the label with the highest
    /// positive point value among all level-shaped labels. Labels that
    /// normalize but are absent from the table are skipped, so an item whose
    /// only level is unconfigured stays unscored.
    pub fn score(&self, table: &PointsTable) -> Option<(Level, u32)> {
        let mut best: Option<(Level, u32)> = None;
        for label in &self.labels {
            let Some(level) = parse_level(label) else {
                continue;
            };
            let points = table.points(&level);
            if points == 0 {
                continue;
            }
            match &best {
                Some((_, current)) if *current >= points => {}
                _ => best = Some((level, points)),
            }
        }
        best
    }
}

/// A contribution with its resolved level and points, if any. Unscored items
/// stay attached to their author with 0 points.
#[derive(Debug, Clone)]
pub struct ScoredContribution {
    pub item: ContributionItem,
    pub level: Option<Level>,
    pub points: u32,
}

impl ScoredContribution {
    pub fn new(item: ContributionItem, table: &PointsTable) -> Self {
        match item.score(table) {
            Some((level, points)) => Self {
                item,
                level: Some(level),
                points,
            },
            None => Self {
                item,
                level: None,
                points: 0,
            },
        }
    }
}
