use reqwest::Client;
use serde_json::{json, Value};
use tracing::{info, instrument};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Thin client for the Sheets `values.update` call. The leaderboard is
/// rewritten in a single request, so a failed run leaves the previously
/// published table untouched and a re-run never duplicates rows.
pub struct SheetsClient {
    client: Client,
    access_token: String,
}

impl SheetsClient {
    pub fn new(access_token: String) -> Self {
        Self {
            client: Client::new(),
            access_token,
        }
    }

    #[instrument(skip(self, rows))]
    pub async fn overwrite_range(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: Vec<Vec<Value>>,
    ) -> anyhow::Result<()> {
        let row_count = rows.len();
        let url = format!("{SHEETS_API_BASE}/{spreadsheet_id}/values/{range}");
        let body = json!({
            "range": range,
            "majorDimension": "ROWS",
            "values": rows,
        });

        let response = self
            .client
            .put(&url)
            // USER_ENTERED makes the sheet evaluate HYPERLINK formulas
            // instead of storing them as literal text.
            .query(&[("valueInputOption", "USER_ENTERED")])
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Sheets API rejected the update: HTTP {status}: {body}");
        }

        info!("Spreadsheet updated: rows = {}", row_count);
        Ok(())
    }
}
