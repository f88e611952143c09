// Polarity API client implementation
use crate::application::report_repository::ReportRepository;
use crate::domain::report::{PolarityPoint, SentimentReport};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use thiserror::Error;

// Aggregated buckets arrive with zeroed seconds; anything else is malformed.
const POINT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:00.000000";
const START_DATETIME_FORMAT: &str = "%Y-%m-%d 00:00:00";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to polarity API failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("polarity API returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("malformed polarity payload: {0}")]
    MalformedPayload(String),
}

/// Raw wire shape of the reporting endpoint. Datetimes are strings in the
/// API's bucket format and polarity is a numeric string.
#[derive(Debug, Deserialize)]
struct RawReport {
    data: Vec<RawPoint>,
    start_datetime: String,
    avg: f64,
    count: u64,
}

#[derive(Debug, Deserialize)]
struct RawPoint {
    datetime: String,
    polarity: String,
}

#[derive(Debug, Clone)]
pub struct PolarityApi {
    base_url: String,
    client: reqwest::Client,
}

impl PolarityApi {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn build_report_url(&self, from: NaiveDate) -> String {
        format!("{}?from={}", self.base_url, from.format("%Y%m%d"))
    }

    async fn fetch_raw(&self, from: NaiveDate) -> Result<RawReport, ApiError> {
        let url = self.build_report_url(from);
        tracing::debug!(%url, "requesting polarity report");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        Ok(response.json::<RawReport>().await?)
    }
}

fn parse_point_datetime(raw: &str) -> Result<NaiveDateTime, ApiError> {
    NaiveDateTime::parse_from_str(raw, POINT_DATETIME_FORMAT)
        .map_err(|e| ApiError::MalformedPayload(format!("bad point datetime {raw:?}: {e}")))
}

fn parse_polarity(raw: &str) -> Result<f64, ApiError> {
    raw.parse::<f64>()
        .map_err(|_| ApiError::MalformedPayload(format!("non-numeric polarity {raw:?}")))
}

fn transform_report(raw: RawReport) -> Result<SentimentReport, ApiError> {
    let points = raw
        .data
        .iter()
        .map(|p| {
            Ok(PolarityPoint::new(
                parse_point_datetime(&p.datetime)?,
                parse_polarity(&p.polarity)?,
            ))
        })
        .collect::<Result<Vec<_>, ApiError>>()?;

    // chrono cannot produce a NaiveDateTime from a format with no time
    // specifiers; parse the date with the literal " 00:00:00" suffix and
    // attach midnight, which accepts exactly the same inputs.
    let start_datetime = NaiveDate::parse_from_str(&raw.start_datetime, START_DATETIME_FORMAT)
        .map_err(|e| {
            ApiError::MalformedPayload(format!(
                "bad start_datetime {:?}: {e}",
                raw.start_datetime
            ))
        })?
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time");

    Ok(SentimentReport::new(
        points,
        start_datetime,
        raw.avg,
        raw.count,
    ))
}

#[async_trait]
impl ReportRepository for PolarityApi {
    async fn fetch_report(&self, from: NaiveDate) -> anyhow::Result<SentimentReport> {
        let raw = self.fetch_raw(from).await?;
        Ok(transform_report(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_report_url_format() {
        let api = PolarityApi::new("http://polarity.example.com/api/".to_string());
        let from = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(
            api.build_report_url(from),
            "http://polarity.example.com/api?from=20240102"
        );
    }

    #[test]
    fn test_transform_report() {
        let raw: RawReport = serde_json::from_str(
            r#"{
                "data": [{"datetime": "2024-01-01 10:00:00.000000", "polarity": "42.5"}],
                "start_datetime": "2024-01-01 00:00:00",
                "avg": 50,
                "count": 1000
            }"#,
        )
        .unwrap();

        let report = transform_report(raw).unwrap();
        assert_eq!(report.points.len(), 1);
        assert_eq!(
            report.points[0].datetime,
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );
        assert_eq!(report.points[0].polarity, 42.5);
        assert_eq!(
            report.start_datetime,
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
        assert_eq!(report.average, 50.0);
        assert_eq!(report.count, 1000);
    }

    #[test]
    fn test_minutes_survive_parsing() {
        assert_eq!(
            parse_point_datetime("2024-01-01 10:35:00.000000")
                .unwrap()
                .format("%H:%M:%S")
                .to_string(),
            "10:35:00"
        );
    }

    #[test]
    fn test_nonzero_seconds_rejected() {
        assert!(parse_point_datetime("2024-01-01 10:00:30.000000").is_err());
    }

    #[test]
    fn test_non_numeric_polarity_rejected() {
        let raw: RawReport = serde_json::from_str(
            r#"{
                "data": [{"datetime": "2024-01-01 10:00:00.000000", "polarity": "n/a"}],
                "start_datetime": "2024-01-01 00:00:00",
                "avg": 50,
                "count": 1
            }"#,
        )
        .unwrap();

        assert!(matches!(
            transform_report(raw),
            Err(ApiError::MalformedPayload(_))
        ));
    }
}
