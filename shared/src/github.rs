use octocrab::models::{issues::Issue, pulls::PullRequest};

use crate::{ContributionItem, ItemKind};

impl From<PullRequest> for ContributionItem {
    fn from(pr: PullRequest) -> Self {
        let labels = pr
            .labels
            .unwrap_or_default()
            .into_iter()
            .map(|label| label.name)
            .collect();
        ContributionItem::new(
            ItemKind::PullRequest,
            pr.number,
            pr.user.map(|user| user.login),
            labels,
        )
        .with_merged(pr.merged_at)
    }
}

impl From<Issue> for ContributionItem {
    fn from(issue: Issue) -> Self {
        let labels = issue.labels.into_iter().map(|label| label.name).collect();
        ContributionItem::new(
            ItemKind::Issue,
            issue.number,
            Some(issue.user.login),
            labels,
        )
    }
}

/// The issue listing conflates pull requests with issues; entries carrying
/// the pull-request marker are collected through the PR listing instead.
pub fn is_pull_request(issue: &Issue) -> bool {
    issue.pull_request.is_some()
}
