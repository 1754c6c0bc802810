use itertools::Itertools;
use serde_json::{json, Value};
use shared::{Contributor, ItemKind, ScoredContribution};

pub const HEADER: [&str; 8] = [
    "Rank",
    "GitHub Username",
    "Pull Requests (link & level)",
    "Issue No. (link & level)",
    "PR Points",
    "Issue Points",
    "Total Points",
    "Levels",
];

/// `=HYPERLINK(...)` cell for one contribution, annotated with the resolved
/// level and points when the item scored.
fn contribution_cell(owner: &str, repo: &str, contribution: &ScoredContribution) -> String {
    let path = match contribution.item.kind {
        ItemKind::PullRequest => "pull",
        ItemKind::Issue => "issues",
    };
    let number = contribution.item.number;
    let link = format!(
        "=HYPERLINK(\"https://github.com/{owner}/{repo}/{path}/{number}\",\"#{number}\")"
    );
    match &contribution.level {
        Some(level) => format!(
            "{link} & \" ({level} - {points}pts)\"",
            points = contribution.points
        ),
        None => link,
    }
}

fn joined_cell(owner: &str, repo: &str, contributions: &[ScoredContribution]) -> String {
    contributions
        .iter()
        .map(|contribution| contribution_cell(owner, repo, contribution))
        .join(", ")
}

/// Shapes the ranked contributors into the rectangular range written to the
/// sheet: the header first, then one row per contributor with a 1-based rank.
/// Numeric columns stay numbers so the sheet can sort and sum them.
pub fn rows(owner: &str, repo: &str, ranking: &[Contributor]) -> Vec<Vec<Value>> {
    let mut rows = Vec::with_capacity(ranking.len() + 1);
    rows.push(HEADER.iter().map(|title| json!(title)).collect());

    for (idx, contributor) in ranking.iter().enumerate() {
        rows.push(vec![
            json!(idx + 1),
            json!(contributor.username),
            json!(joined_cell(owner, repo, &contributor.pull_requests)),
            json!(joined_cell(owner, repo, &contributor.issues)),
            json!(contributor.pr_points),
            json!(contributor.issue_points),
            json!(contributor.total_points()),
            json!(contributor.levels.iter().join(", ")),
        ]);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ContributionItem, Leaderboard, PointsTable, ScoredContribution};

    fn record(leaderboard: &mut Leaderboard, kind: ItemKind, number: u64, author: &str, labels: &[&str]) {
        let item = ContributionItem::new(
            kind,
            number,
            Some(author.to_string()),
            labels.iter().map(ToString::to_string).collect(),
        );
        leaderboard.record(ScoredContribution::new(item, &PointsTable::default()));
    }

    #[test]
    fn hyperlink_cells() {
        let mut leaderboard = Leaderboard::new();
        record(
            &mut leaderboard,
            ItemKind::PullRequest,
            12,
            "alice",
            &["gssoc", "level-2"],
        );
        record(&mut leaderboard, ItemKind::Issue, 34, "alice", &["gssoc"]);

        let ranking = leaderboard.ranking();
        let alice = &ranking[0];

        assert_eq!(
            "=HYPERLINK(\"https://github.com/o/r/pull/12\",\"#12\") & \" (level-2 - 7pts)\"",
            contribution_cell("o", "r", &alice.pull_requests[0])
        );
        // No scoring label: a bare link.
        assert_eq!(
            "=HYPERLINK(\"https://github.com/o/r/issues/34\",\"#34\")",
            contribution_cell("o", "r", &alice.issues[0])
        );
    }

    #[test]
    fn rows_are_ranked_and_shaped() {
        let mut leaderboard = Leaderboard::new();
        record(
            &mut leaderboard,
            ItemKind::PullRequest,
            1,
            "alice",
            &["gssoc", "level-2"],
        );
        record(
            &mut leaderboard,
            ItemKind::PullRequest,
            2,
            "alice",
            &["gssoc", "level-1", "level-3"],
        );
        record(&mut leaderboard, ItemKind::PullRequest, 3, "bob", &["gssoc"]);

        let ranking = leaderboard.ranking();
        let rows = rows("o", "r", &ranking);

        assert_eq!(3, rows.len());
        assert_eq!(json!("Rank"), rows[0][0]);
        assert_eq!(HEADER.len(), rows[0].len());

        let alice = &rows[1];
        assert_eq!(json!(1), alice[0]);
        assert_eq!(json!("alice"), alice[1]);
        assert_eq!(json!(17), alice[4]);
        assert_eq!(json!(0), alice[5]);
        assert_eq!(json!(17), alice[6]);
        assert_eq!(json!("level-2, level-3"), alice[7]);

        let bob = &rows[2];
        assert_eq!(json!(2), bob[0]);
        assert_eq!(json!("bob"), bob[1]);
        assert_eq!(json!(""), bob[3]);
        assert_eq!(json!(0), bob[6]);
        assert_eq!(json!(""), bob[7]);

        // Totals never increase down the table.
        for pair in rows[1..].windows(2) {
            let totals: Vec<u64> = pair.iter().map(|row| row[6].as_u64().unwrap()).collect();
            assert!(totals[0] >= totals[1]);
        }
    }

    #[test]
    fn subtotals_sum_to_total() {
        let mut leaderboard = Leaderboard::new();
        record(
            &mut leaderboard,
            ItemKind::PullRequest,
            1,
            "alice",
            &["gssoc", "level-1"],
        );
        record(
            &mut leaderboard,
            ItemKind::Issue,
            2,
            "alice",
            &["gssoc", "level-3"],
        );

        let ranking = leaderboard.ranking();
        let rows = rows("o", "r", &ranking);
        for row in &rows[1..] {
            assert_eq!(
                row[6].as_u64().unwrap(),
                row[4].as_u64().unwrap() + row[5].as_u64().unwrap()
            );
        }
    }
}
