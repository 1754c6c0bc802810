use devsync_leaderboard::{
    api::{GithubClient, SheetsClient},
    config::Env,
    report,
};
use shared::{Leaderboard, ScoredContribution};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let env = envy::from_env::<Env>()?;

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer());
    tracing::subscriber::set_global_default(subscriber)?;

    run(env).await
}

// Single-pass pipeline: collect PRs, collect issues, aggregate, publish.
// Any stage failure propagates and the process exits non-zero, leaving the
// previously published sheet untouched.
async fn run(env: Env) -> anyhow::Result<()> {
    let (owner, repo) = env.repository()?;
    let points = env.points_table()?;
    let github = GithubClient::new(env.github_token.clone())?;
    let sheets = SheetsClient::new(env.google_access_token.clone());

    let mut leaderboard = Leaderboard::new();

    for item in github.closed_pull_requests(&owner, &repo).await? {
        if item.eligible(&env.program_label, env.require_merged_prs) {
            leaderboard.record(ScoredContribution::new(item, &points));
        }
    }

    for item in github.closed_issues(&owner, &repo).await? {
        if item.eligible(&env.program_label, env.require_merged_prs) {
            leaderboard.record(ScoredContribution::new(item, &points));
        }
    }

    info!(
        "Aggregated {} contributors for {owner}/{repo}",
        leaderboard.len()
    );

    let ranking = leaderboard.ranking();
    let rows = report::rows(&owner, &repo, &ranking);
    sheets
        .overwrite_range(&env.google_sheet_id, &env.sheet_range, rows)
        .await?;

    let mut summary = String::from("Leaderboard published. Top contributors:\n");
    for (rank, contributor) in ranking.iter().take(10).enumerate() {
        summary.push_str(&format!(
            "- #{} {} with {} points\n",
            rank + 1,
            contributor.username,
            contributor.total_points()
        ));
    }
    info!("{summary}");

    Ok(())
}
