// Scale functions mapping domain values to pixel coordinates
use chrono::{Duration, NaiveDateTime};

/// A positioned axis tick: pixel offset along the scale plus a label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Maps datetimes onto a pixel range, rounding to whole pixels. Rebuilt
/// whenever the active dataset's date extent changes.
#[derive(Debug, Clone)]
pub struct TimeScale {
    domain: (NaiveDateTime, NaiveDateTime),
    range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: (NaiveDateTime, NaiveDateTime), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (NaiveDateTime, NaiveDateTime) {
        self.domain
    }

    pub fn scale(&self, t: NaiveDateTime) -> f64 {
        let span = (self.domain.1 - self.domain.0).num_milliseconds();
        if span == 0 {
            return self.range.0;
        }
        let offset = (t - self.domain.0).num_milliseconds();
        let fraction = offset as f64 / span as f64;
        (self.range.0 + fraction * (self.range.1 - self.range.0)).round()
    }

    /// Evenly spaced ticks across the domain, endpoints included. Labels use
    /// clock time for short windows and month/day otherwise.
    pub fn ticks(&self, count: usize) -> Vec<Tick> {
        if count < 2 {
            return Vec::new();
        }
        let span = self.domain.1 - self.domain.0;
        let format = if span <= Duration::days(2) {
            "%H:%M"
        } else {
            "%m/%d"
        };

        let step_ms = span.num_milliseconds() / (count as i64 - 1);
        (0..count)
            .map(|i| {
                let t = self.domain.0 + Duration::milliseconds(step_ms * i as i64);
                Tick {
                    position: self.scale(t),
                    label: t.format(format).to_string(),
                }
            })
            .collect()
    }
}

/// Maps a numeric domain onto a pixel range, rounding to whole pixels.
#[derive(Debug, Clone)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn scale(&self, v: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return self.range.0;
        }
        let fraction = (v - self.domain.0) / span;
        (self.range.0 + fraction * (self.range.1 - self.range.0)).round()
    }

    pub fn ticks(&self, count: usize) -> Vec<Tick> {
        if count < 2 {
            return Vec::new();
        }
        let step = (self.domain.1 - self.domain.0) / (count as f64 - 1.0);
        (0..count)
            .map(|i| {
                let v = self.domain.0 + step * i as f64;
                Tick {
                    position: self.scale(v),
                    label: format_tick_value(v),
                }
            })
            .collect()
    }
}

fn format_tick_value(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{v:.1}")
    }
}
