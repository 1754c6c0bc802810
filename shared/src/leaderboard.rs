use std::collections::{BTreeSet, HashMap};

use crate::{GithubHandle, ItemKind, Level, ScoredContribution};

/// Per-author accumulated state for one run. Contribution lists keep
/// discovery order; the levels set only holds levels that actually scored.
#[derive(Debug, Clone, Default)]
pub struct Contributor {
    pub username: GithubHandle,
    pub pull_requests: Vec<ScoredContribution>,
    pub issues: Vec<ScoredContribution>,
    pub pr_points: u32,
    pub issue_points: u32,
    pub levels: BTreeSet<Level>,
}

impl Contributor {
    fn new(username: GithubHandle) -> Self {
        Self {
            username,
            ..Default::default()
        }
    }

    pub fn total_points(&self) -> u32 {
        self.pr_points + self.issue_points
    }
}

/// Insertion-ordered per-author aggregation. Equal totals rank in discovery
/// order, so the order of `record` calls is part of the contract.
#[derive(Debug, Default)]
pub struct Leaderboard {
    contributors: Vec<Contributor>,
    index: HashMap<GithubHandle, usize>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contributors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contributors.is_empty()
    }

    pub fn record(&mut self, contribution: ScoredContribution) {
        let username = contribution.item.author.clone();
        let idx = match self.index.get(&username) {
            Some(idx) => *idx,
            None => {
                self.contributors.push(Contributor::new(username.clone()));
                let idx = self.contributors.len() - 1;
                self.index.insert(username, idx);
                idx
            }
        };

        let contributor = &mut self.contributors[idx];
        if contribution.points > 0 {
            if let Some(level) = contribution.level.clone() {
                contributor.levels.insert(level);
            }
            match contribution.item.kind {
                ItemKind::PullRequest => contributor.pr_points += contribution.points,
                ItemKind::Issue => contributor.issue_points += contribution.points,
            }
        }
        match contribution.item.kind {
            ItemKind::PullRequest => contributor.pull_requests.push(contribution),
            ItemKind::Issue => contributor.issues.push(contribution),
        }
    }

    /// Contributors sorted by total points, highest first. The sort is
    /// stable, so equal totals keep first-seen order across runs over the
    /// same input.
    pub fn ranking(self) -> Vec<Contributor> {
        let mut contributors = self.contributors;
        contributors.sort_by(|a, b| b.total_points().cmp(&a.total_points()));
        contributors
    }
}
