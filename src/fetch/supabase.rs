use crate::fetch::auth::ApiKey;
use crate::fetch::{BasicClient, HttpClient, fetch_json};
use crate::grading::{ScoreRecord, Tier};
use anyhow::{Context, Result};
use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, info};

const DEFAULT_RESULTS_TABLE: &str = "assessment_results";

/// Connection settings for the Supabase REST API.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    pub results_table: String,
}

impl SupabaseConfig {
    /// Reads `SUPABASE_URL`, `SUPABASE_ANON_KEY` and optionally
    /// `SUPABASE_RESULTS_TABLE`.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("SUPABASE_URL").context("SUPABASE_URL must be set")?;
        let anon_key = std::env::var("SUPABASE_ANON_KEY").context("SUPABASE_ANON_KEY must be set")?;
        let results_table = std::env::var("SUPABASE_RESULTS_TABLE")
            .unwrap_or_else(|_| DEFAULT_RESULTS_TABLE.to_string());

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key,
            results_table,
        })
    }

    /// PostgREST query for one student's scores. Query values are
    /// percent-encoded, so the id can only ever filter `student_id`.
    pub fn results_url(&self, student_id: &str) -> Result<Url> {
        let base = format!("{}/rest/v1/{}", self.url, self.results_table);
        let filter = format!("eq.{student_id}");

        Url::parse_with_params(
            &base,
            [
                ("select", "percentage_score,tier"),
                ("student_id", filter.as_str()),
                ("order", "created_at.asc"),
            ],
        )
        .with_context(|| format!("invalid Supabase URL {base}"))
    }

    /// A client that sends both the `apikey` and bearer headers Supabase expects.
    pub fn client(&self) -> Result<ApiKey<ApiKey<BasicClient>>> {
        self.authorize(BasicClient::new()?)
    }

    /// Wraps `inner` with the `apikey` and `Authorization: Bearer` headers.
    pub fn authorize<C>(&self, inner: C) -> Result<ApiKey<ApiKey<C>>> {
        let inner = ApiKey::new(inner, "apikey", &self.anon_key)?;
        ApiKey::bearer(inner, &self.anon_key)
    }
}

/// Row shape returned by the results table. Scores may be null for
/// sessions that were started but never finished.
#[derive(Debug, Deserialize)]
pub(crate) struct ResultRow {
    percentage_score: Option<f64>,
    #[serde(default)]
    tier: Option<Tier>,
}

pub(crate) fn rows_to_records(rows: Vec<ResultRow>) -> Vec<ScoreRecord> {
    rows.into_iter()
        .filter_map(|row| {
            row.percentage_score.map(|percentage_score| ScoreRecord {
                percentage_score,
                tier: row.tier,
            })
        })
        .collect()
}

/// Fetches a student's graded results, skipping rows with no score.
#[tracing::instrument(skip(client, config))]
pub async fn fetch_student_records<C: HttpClient>(
    client: &C,
    config: &SupabaseConfig,
    student_id: &str,
) -> Result<Vec<ScoreRecord>> {
    let url = config.results_url(student_id)?;
    debug!(table = %config.results_table, "Querying results table");

    let rows: Vec<ResultRow> = fetch_json(client, url)
        .await
        .with_context(|| format!("failed to fetch results for student {student_id}"))?;
    let fetched = rows.len();
    let records = rows_to_records(rows);

    info!(fetched, graded = records.len(), "Fetched student results");
    Ok(records)
}
