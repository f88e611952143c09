// Repository trait for sentiment report access
use crate::domain::report::SentimentReport;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Fetch the aggregated polarity report for the window starting at `from`.
    async fn fetch_report(&self, from: NaiveDate) -> anyhow::Result<SentimentReport>;
}
