//! Natural-language month summary through an external text-generation API.
//!
//! One request per user action, no timeout of our own. Any failure is turned
//! into [`FALLBACK_SUMMARY`] by [`summarize_or_fallback`]; it never reaches
//! the user as an error.

use chrono::{Datelike, Local, NaiveDate, TimeZone};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use crate::config::SummaryConfig;
use crate::core::calculator::{build_month_rows_in, compute_monthly_in};
use crate::errors::{AppError, AppResult};
use crate::models::punch::PunchRecord;
use crate::utils::date::month_name;
use crate::utils::formatting::{format_hm, format_signed_hm};

pub const FALLBACK_SUMMARY: &str = "Summary unavailable right now. Please try again later.";

#[allow(async_fn_in_trait)]
pub trait Summarizer {
    async fn summarize(&self, records: &[PunchRecord], daily_target_minutes: f64) -> AppResult<String>;
}

/// Returns the generated text, or the fixed fallback on any failure.
pub async fn summarize_or_fallback<S: Summarizer>(
    summarizer: &S,
    records: &[PunchRecord],
    daily_target_minutes: f64,
) -> String {
    match summarizer.summarize(records, daily_target_minutes).await {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            warn!("summary service returned an empty text");
            FALLBACK_SUMMARY.to_string()
        }
        Err(e) => {
            warn!(error = %e, "summary request failed");
            FALLBACK_SUMMARY.to_string()
        }
    }
}

/// Prompt with the month totals and one line per day that has punches.
pub fn build_prompt<Tz: TimeZone>(
    records: &[PunchRecord],
    daily_target_minutes: f64,
    reference: NaiveDate,
    tz: &Tz,
) -> String {
    let stats = compute_monthly_in(records, reference, daily_target_minutes, tz);
    let rows = build_month_rows_in(records, reference.month(), reference.year(), tz);

    let mut prompt = format!(
        "You are reviewing a personal time sheet for {} {}.\n\
         Daily target: {}. Days worked: {}. Worked: {}. Breaks: {}. Balance: {}.\n\
         Daily punches (date, entry, break start, break end, exit, worked):\n",
        month_name(reference.month()),
        reference.year(),
        format_hm(daily_target_minutes),
        stats.days_worked_count,
        format_hm(stats.total_worked),
        format_hm(stats.total_break),
        format_signed_hm(stats.balance),
    );

    for row in rows.iter().filter(|r| !r.is_empty()) {
        prompt.push_str(&format!(
            "- {} | {} | {} | {} | {} | {}\n",
            row.date_full, row.entry, row.break_start, row.break_end, row.exit, row.total_hours
        ));
    }

    prompt.push_str(
        "\nWrite a short, friendly summary (at most 5 sentences) of this month's work pattern: \
         regularity, overtime or deficit, and break habits. Plain text only.",
    );
    prompt
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

/// `generateContent`-style HTTP client.
pub struct HttpSummarizer {
    client: Client,
    config: SummaryConfig,
    api_key: Option<String>,
    reference: NaiveDate,
}

impl HttpSummarizer {
    /// Reads the API key from the environment variable named in the config.
    pub fn from_config(config: &SummaryConfig, reference: NaiveDate) -> Self {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty());

        Self {
            client: Client::new(),
            config: config.clone(),
            api_key,
            reference,
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }
}

impl Summarizer for HttpSummarizer {
    async fn summarize(&self, records: &[PunchRecord], daily_target_minutes: f64) -> AppResult<String> {
        let key = self.api_key.as_deref().ok_or_else(|| {
            AppError::Summary(format!("environment variable {} is not set", self.config.api_key_env))
        })?;

        let prompt = build_prompt(records, daily_target_minutes, self.reference, &Local);
        let body = GenerateRequest {
            contents: vec![json!({ "parts": [{ "text": prompt }] })],
        };

        debug!(url = %self.url(), "requesting summary");
        let res = self
            .client
            .post(self.url())
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(AppError::Summary(format!("service answered {status}")));
        }

        let parsed: GenerateResponse = res.json().await?;
        let text: String = parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");

        if text.trim().is_empty() {
            return Err(AppError::Summary("empty response".to_string()));
        }
        Ok(text)
    }
}
