use crate::domain::report::RangeSelector;
use crate::domain::scene::{ChartGeometry, Margins};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ChartConfig {
    pub api: ApiSettings,
    pub chart: ChartSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartSettings {
    pub default_delta: u32,
    pub width: u32,
    pub height: u32,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_addr: String,
}

impl ChartConfig {
    pub fn geometry(&self) -> ChartGeometry {
        ChartGeometry {
            width: self.chart.width,
            height: self.chart.height,
            margins: Margins {
                top: self.chart.margin_top,
                right: self.chart.margin_right,
                bottom: self.chart.margin_bottom,
                left: self.chart.margin_left,
            },
        }
    }

    pub fn default_selector(&self) -> anyhow::Result<RangeSelector> {
        RangeSelector::from_days(self.chart.default_delta).ok_or_else(|| {
            anyhow::anyhow!(
                "default_delta {} is not a supported range selector",
                self.chart.default_delta
            )
        })
    }
}

pub fn load_chart_config() -> anyhow::Result<ChartConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/chart"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
