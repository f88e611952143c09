// Declarative chart scene - pure computation, no drawing surface
use super::report::{RangeSelector, SentimentReport, group_thousands};
use super::scale::{LinearScale, Tick, TimeScale};

pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 720;

const BOTTOM_TICK_COUNT: usize = 9;
const SIDE_TICK_COUNT: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 24.0,
            right: 48.0,
            bottom: 32.0,
            left: 48.0,
        }
    }
}

/// Overall chart dimensions; the plot area is what remains inside the margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub width: u32,
    pub height: u32,
    pub margins: Margins,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margins: Margins::default(),
        }
    }
}

impl ChartGeometry {
    pub fn inner_width(&self) -> f64 {
        self.width as f64 - self.margins.left - self.margins.right
    }

    pub fn inner_height(&self) -> f64 {
        self.height as f64 - self.margins.top - self.margins.bottom
    }
}

/// The five summary text values shown next to the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub window_label: String,
    pub observation_count: String,
    pub average: f64,
    pub high: f64,
    pub low: f64,
}

/// One axis group: positioned ticks plus the gridline length drawn at each
/// tick (zero for a plain axis).
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub ticks: Vec<Tick>,
    pub grid_length: f64,
}

/// A horizontal reference line spanning the full x-range of the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceLine {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonState {
    pub days: u32,
    pub label: &'static str,
    pub active: bool,
}

impl ButtonState {
    /// One button per supported selector, with `active` set on exactly one.
    pub fn for_active(active: RangeSelector) -> Vec<ButtonState> {
        RangeSelector::all()
            .into_iter()
            .map(|s| ButtonState {
                days: s.days(),
                label: s.label(),
                active: s == active,
            })
            .collect()
    }
}

/// Everything needed to draw one chart frame. Rebuilt from scratch on every
/// render, so stale elements from a prior selection cannot accumulate.
#[derive(Debug, Clone)]
pub struct ChartScene {
    pub geometry: ChartGeometry,
    pub summary: Summary,
    pub axis_bottom: Axis,
    pub axis_left: Axis,
    pub axis_right: Axis,
    pub line: Vec<(f64, f64)>,
    pub midline: ReferenceLine,
    pub average_line: ReferenceLine,
    pub buttons: Vec<ButtonState>,
    pub caption: &'static str,
}

impl ChartScene {
    /// Compute the scene for one report. Returns None for a report with no
    /// points, since no date extent exists to scale against.
    pub fn build(
        report: &SentimentReport,
        selector: RangeSelector,
        geometry: ChartGeometry,
    ) -> Option<ChartScene> {
        let date_range = report.date_range()?;
        let (low, high) = report.polarity_range()?;

        let x = TimeScale::new(date_range, (0.0, geometry.inner_width()));
        let y = LinearScale::new((0.0, 100.0), (geometry.inner_height(), 0.0));

        let line = report
            .points
            .iter()
            .map(|p| (x.scale(p.datetime), y.scale(p.polarity)))
            .collect();

        let x1 = x.scale(date_range.0);
        let x2 = x.scale(date_range.1);

        Some(ChartScene {
            geometry,
            summary: Summary {
                window_label: selector.label().to_string(),
                observation_count: group_thousands(report.count),
                average: report.average,
                high,
                low,
            },
            axis_bottom: Axis {
                ticks: x.ticks(BOTTOM_TICK_COUNT),
                grid_length: geometry.inner_height(),
            },
            axis_left: Axis {
                ticks: y.ticks(SIDE_TICK_COUNT),
                grid_length: geometry.inner_width(),
            },
            axis_right: Axis {
                ticks: y.ticks(SIDE_TICK_COUNT),
                grid_length: 0.0,
            },
            line,
            midline: ReferenceLine {
                x1,
                x2,
                y: y.scale(50.0),
            },
            average_line: ReferenceLine {
                x1,
                x2,
                y: y.scale(report.average),
            },
            buttons: ButtonState::for_active(selector),
            caption: "Sentiment",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::PolarityPoint;
    use chrono::{NaiveDate, NaiveDateTime};

    fn dt(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn report() -> SentimentReport {
        SentimentReport::new(
            vec![
                PolarityPoint::new(dt(1, 0), 42.5),
                PolarityPoint::new(dt(16, 0), 61.0),
                PolarityPoint::new(dt(31, 0), 38.2),
            ],
            dt(1, 0),
            50.0,
            1000,
        )
    }

    #[test]
    fn test_scene_summary() {
        let scene = ChartScene::build(&report(), RangeSelector::Month, ChartGeometry::default())
            .unwrap();

        assert_eq!(scene.summary.window_label, "30 days");
        assert_eq!(scene.summary.observation_count, "1,000");
        assert_eq!(scene.summary.average, 50.0);
        assert_eq!(scene.summary.high, 61.0);
        assert_eq!(scene.summary.low, 38.2);
    }

    #[test]
    fn test_scene_reference_lines() {
        let geometry = ChartGeometry::default();
        let scene = ChartScene::build(&report(), RangeSelector::Month, geometry).unwrap();

        // y scale is fixed [0, 100] over the inner height (664px), so the
        // midline at polarity 50 sits exactly halfway down.
        assert_eq!(scene.midline.y, 332.0);
        assert_eq!(scene.average_line.y, 332.0);
        assert_eq!(scene.midline.x1, 0.0);
        assert_eq!(scene.midline.x2, geometry.inner_width());
    }

    #[test]
    fn test_scene_line_spans_date_extent() {
        let geometry = ChartGeometry::default();
        let scene = ChartScene::build(&report(), RangeSelector::Month, geometry).unwrap();

        assert_eq!(scene.line.len(), 3);
        assert_eq!(scene.line[0].0, 0.0);
        assert_eq!(scene.line[2].0, geometry.inner_width());
    }

    #[test]
    fn test_exactly_one_active_button() {
        let scene = ChartScene::build(&report(), RangeSelector::Week, ChartGeometry::default())
            .unwrap();

        let active: Vec<_> = scene.buttons.iter().filter(|b| b.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].days, 7);
    }

    #[test]
    fn test_empty_report_has_no_scene() {
        let empty = SentimentReport::new(Vec::new(), dt(1, 0), 50.0, 0);
        assert!(ChartScene::build(&empty, RangeSelector::Day, ChartGeometry::default()).is_none());
    }

    #[test]
    fn test_axis_gridlines() {
        let geometry = ChartGeometry::default();
        let scene = ChartScene::build(&report(), RangeSelector::Month, geometry).unwrap();

        assert_eq!(scene.axis_bottom.grid_length, geometry.inner_height());
        assert_eq!(scene.axis_left.grid_length, geometry.inner_width());
        assert_eq!(scene.axis_right.grid_length, 0.0);
    }
}
