use serde::Deserialize;
use shared::PointsTable;

fn default_program_label() -> String {
    "gssoc".to_string()
}

fn default_sheet_range() -> String {
    "Sheet1!A1".to_string()
}

/// Environment surface of the job. Everything operational is injected so the
/// same binary serves any program repository.
#[derive(Debug, Deserialize)]
pub struct Env {
    /// `owner/name`, as the scheduler provides it.
    pub github_repository: String,
    pub github_token: String,
    pub google_sheet_id: String,
    pub google_access_token: String,
    #[serde(default = "default_sheet_range")]
    pub sheet_range: String,
    #[serde(default = "default_program_label")]
    pub program_label: String,
    /// Optional JSON object overriding the default level points,
    /// e.g. `{"level-1": 5, "level-2": 10}`.
    #[serde(default)]
    pub level_points: Option<String>,
    /// Strict variant: only merged pull requests count.
    #[serde(default)]
    pub require_merged_prs: bool,
}

impl Env {
    pub fn repository(&self) -> anyhow::Result<(String, String)> {
        self.github_repository
            .split_once('/')
            .filter(|(owner, name)| !owner.is_empty() && !name.is_empty())
            .map(|(owner, name)| (owner.to_string(), name.to_string()))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "GITHUB_REPOSITORY must be owner/name, got: {}",
                    self.github_repository
                )
            })
    }

    pub fn points_table(&self) -> anyhow::Result<PointsTable> {
        match &self.level_points {
            Some(json) => Ok(serde_json::from_str(json)?),
            None => Ok(PointsTable::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::parse_level;

    fn env(repository: &str, level_points: Option<&str>) -> Env {
        Env {
            github_repository: repository.to_string(),
            github_token: "token".to_string(),
            google_sheet_id: "sheet".to_string(),
            google_access_token: "token".to_string(),
            sheet_range: default_sheet_range(),
            program_label: default_program_label(),
            level_points: level_points.map(ToString::to_string),
            require_merged_prs: false,
        }
    }

    #[test]
    fn repository_coordinates() {
        let (owner, name) = env("DevSyncx/DevSync", None).repository().unwrap();
        assert_eq!("DevSyncx", owner);
        assert_eq!("DevSync", name);

        assert!(env("DevSync", None).repository().is_err());
        assert!(env("/DevSync", None).repository().is_err());
    }

    #[test]
    fn points_table_override() {
        let table = env("o/r", Some(r#"{"level-1": 50}"#))
            .points_table()
            .unwrap();
        assert_eq!(50, table.points(&parse_level("level-1").unwrap()));
        assert_eq!(0, table.points(&parse_level("level-2").unwrap()));

        let default = env("o/r", None).points_table().unwrap();
        assert_eq!(7, default.points(&parse_level("level-2").unwrap()));

        assert!(env("o/r", Some("not json")).points_table().is_err());
    }
}
