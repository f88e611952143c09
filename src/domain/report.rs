// Sentiment report domain models
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Supported time-range selections ("deltas") for the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeSelector {
    Day,
    Week,
    Month,
}

impl RangeSelector {
    pub fn all() -> [RangeSelector; 3] {
        [RangeSelector::Month, RangeSelector::Week, RangeSelector::Day]
    }

    pub fn days(&self) -> u32 {
        match self {
            RangeSelector::Day => 1,
            RangeSelector::Week => 7,
            RangeSelector::Month => 30,
        }
    }

    /// Parse a raw delta value. Unsupported values are rejected here so the
    /// active selector is always a member of the supported set.
    pub fn from_days(days: u32) -> Option<RangeSelector> {
        match days {
            1 => Some(RangeSelector::Day),
            7 => Some(RangeSelector::Week),
            30 => Some(RangeSelector::Month),
            _ => None,
        }
    }

    /// Human label for the summary blurb.
    pub fn label(&self) -> &'static str {
        label_for_days(self.days())
    }

    /// Start of the requested window: `today` minus this selector's days.
    pub fn from_date(&self, today: NaiveDate) -> NaiveDate {
        today - Duration::days(self.days() as i64)
    }
}

/// Label for a raw delta value; anything outside the supported set maps to
/// an empty label.
pub fn label_for_days(days: u32) -> &'static str {
    match days {
        30 => "30 days",
        7 => "7 days",
        1 => "24 hours",
        _ => "",
    }
}

/// One aggregated time bucket: a timestamp and its polarity score in [0, 100].
#[derive(Debug, Clone, PartialEq)]
pub struct PolarityPoint {
    pub datetime: NaiveDateTime,
    pub polarity: f64,
}

impl PolarityPoint {
    pub fn new(datetime: NaiveDateTime, polarity: f64) -> Self {
        Self { datetime, polarity }
    }
}

/// The transformed result of one fetch for one range selector. Immutable once
/// constructed; `points` are assumed ascending by datetime and are not
/// re-sorted.
#[derive(Debug, Clone)]
pub struct SentimentReport {
    pub points: Vec<PolarityPoint>,
    pub start_datetime: NaiveDateTime,
    pub average: f64,
    /// Raw observations aggregated into `points`; may exceed `points.len()`.
    pub count: u64,
}

impl SentimentReport {
    pub fn new(
        points: Vec<PolarityPoint>,
        start_datetime: NaiveDateTime,
        average: f64,
        count: u64,
    ) -> Self {
        Self {
            points,
            start_datetime,
            average,
            count,
        }
    }

    /// [min, max] over point datetimes.
    pub fn date_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let first = self.points.first()?;
        let mut min = first.datetime;
        let mut max = first.datetime;
        for p in &self.points {
            if p.datetime < min {
                min = p.datetime;
            }
            if p.datetime > max {
                max = p.datetime;
            }
        }
        Some((min, max))
    }

    /// [min, max] over point polarities.
    pub fn polarity_range(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        let mut min = first.polarity;
        let mut max = first.polarity;
        for p in &self.points {
            min = min.min(p.polarity);
            max = max.max(p.polarity);
        }
        Some((min, max))
    }
}

/// Group an integer with commas: 1000 -> "1,000".
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
