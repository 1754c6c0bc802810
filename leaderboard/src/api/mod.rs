use octocrab::params::State;
use shared::{github, ContributionItem};
use tracing::{info, instrument};

pub mod sheets;

pub use sheets::SheetsClient;

pub struct GithubClient {
    octocrab: octocrab::Octocrab,
}

impl GithubClient {
    pub fn new(github_token: String) -> anyhow::Result<Self> {
        let octocrab = octocrab::Octocrab::builder()
            .personal_token(github_token)
            .build()?;
        Ok(Self { octocrab })
    }

    /// Every closed pull request in the repository. All pages are drained:
    /// a truncated listing would silently drop contributors.
    #[instrument(skip(self))]
    pub async fn closed_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> anyhow::Result<Vec<ContributionItem>> {
        let page = self
            .octocrab
            .pulls(owner, repo)
            .list()
            .state(State::Closed)
            .per_page(100)
            .send()
            .await?;
        let prs = self.octocrab.all_pages(page).await?;

        info!("Fetched {} closed pull requests", prs.len());
        Ok(prs.into_iter().map(ContributionItem::from).collect())
    }

    /// Every closed issue in the repository, with PR-shaped entries dropped.
    #[instrument(skip(self))]
    pub async fn closed_issues(
        &self,
        owner: &str,
        repo: &str,
    ) -> anyhow::Result<Vec<ContributionItem>> {
        let page = self
            .octocrab
            .issues(owner, repo)
            .list()
            .state(State::Closed)
            .per_page(100)
            .send()
            .await?;
        let issues = self.octocrab.all_pages(page).await?;

        info!("Fetched {} closed issues", issues.len());
        Ok(issues
            .into_iter()
            .filter(|issue| !github::is_pull_request(issue))
            .map(ContributionItem::from)
            .collect())
    }
}
