mod common;
use common::full_day;

use chrono::{NaiveDate, Utc};
use rtimecard::config::SummaryConfig;
use rtimecard::core::summary::{
    FALLBACK_SUMMARY, HttpSummarizer, Summarizer, build_prompt, summarize_or_fallback,
};
use rtimecard::errors::{AppError, AppResult};
use rtimecard::models::punch::PunchRecord;

/// Answers with a fixed result and never touches the network.
struct CannedSummarizer(Result<&'static str, &'static str>);

impl Summarizer for CannedSummarizer {
    async fn summarize(&self, _records: &[PunchRecord], _target: f64) -> AppResult<String> {
        self.0
            .map(str::to_string)
            .map_err(|e| AppError::Summary(e.to_string()))
    }
}

#[tokio::test]
async fn test_summary_text_is_returned_trimmed() {
    let text = summarize_or_fallback(&CannedSummarizer(Ok("  Good month.\n")), &[], 480.0).await;
    assert_eq!(text, "Good month.");
}

#[tokio::test]
async fn test_summary_failure_maps_to_fallback() {
    let text = summarize_or_fallback(&CannedSummarizer(Err("boom")), &[], 480.0).await;
    assert_eq!(text, FALLBACK_SUMMARY);
}

#[tokio::test]
async fn test_summary_empty_text_maps_to_fallback() {
    let text = summarize_or_fallback(&CannedSummarizer(Ok("   ")), &[], 480.0).await;
    assert_eq!(text, FALLBACK_SUMMARY);
}

#[tokio::test]
async fn test_http_summarizer_without_api_key_falls_back() {
    let config = SummaryConfig {
        endpoint: "http://127.0.0.1:9".to_string(),
        api_key_env: "RTIMECARD_TEST_UNSET_API_KEY".to_string(),
        ..SummaryConfig::default()
    };
    let reference = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let summarizer = HttpSummarizer::from_config(&config, reference);

    assert!(summarizer.summarize(&[], 480.0).await.is_err());
    assert_eq!(summarize_or_fallback(&summarizer, &[], 480.0).await, FALLBACK_SUMMARY);
}

#[test]
fn test_prompt_contains_month_totals_and_worked_days() {
    let mut records = full_day(2025, 3, 10, "a");
    records.extend(full_day(2025, 3, 11, "b"));
    let reference = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

    let prompt = build_prompt(&records, 480.0, reference, &Utc);

    assert!(prompt.contains("Março 2025"));
    assert!(prompt.contains("Days worked: 2"));
    assert!(prompt.contains("Worked: 16h 0m"));
    assert!(prompt.contains("10/03/2025 | 09:00 | 12:00 | 13:00 | 18:00 | 8h 0m"));
    assert!(!prompt.contains("12/03/2025"));
}
