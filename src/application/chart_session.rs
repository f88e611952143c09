// Chart session - Use case for selecting a range and rendering its report
use crate::application::report_repository::ReportRepository;
use crate::domain::report::{RangeSelector, SentimentReport};
use crate::domain::scene::{ChartGeometry, ChartScene};
use anyhow::Context;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One cache slot per range selector. The async mutex serializes fetches for
/// that selector: concurrent selections of the same uncached selector await
/// the first fetch's outcome instead of issuing duplicate requests.
struct CacheSlot {
    report: tokio::sync::Mutex<Option<Arc<SentimentReport>>>,
}

impl CacheSlot {
    fn new() -> Self {
        Self {
            report: tokio::sync::Mutex::new(None),
        }
    }
}

struct SessionState {
    active: RangeSelector,
    last_scene: Option<Arc<ChartScene>>,
}

/// Owns selection state and the per-selector report cache, and orchestrates
/// fetch, transform, cache, and scene computation for one chart view.
///
/// Cache entries are immutable once installed and are never evicted or
/// expired for the lifetime of the session.
pub struct ChartSession {
    repository: Arc<dyn ReportRepository>,
    geometry: ChartGeometry,
    cache: Mutex<HashMap<RangeSelector, Arc<CacheSlot>>>,
    state: Mutex<SessionState>,
}

impl ChartSession {
    pub fn new(
        repository: Arc<dyn ReportRepository>,
        geometry: ChartGeometry,
        default_selector: RangeSelector,
    ) -> Self {
        Self {
            repository,
            geometry,
            cache: Mutex::new(HashMap::new()),
            state: Mutex::new(SessionState {
                active: default_selector,
                last_scene: None,
            }),
        }
    }

    pub fn active(&self) -> RangeSelector {
        self.state.lock().unwrap().active
    }

    /// The most recently rendered scene, if any render has succeeded yet.
    pub fn current_scene(&self) -> Option<Arc<ChartScene>> {
        self.state.lock().unwrap().last_scene.clone()
    }

    /// Select a range and render its report. The selector becomes active
    /// immediately; a cached report renders without touching the network,
    /// an uncached one triggers exactly one fetch. On failure the previous
    /// scene is left in place and the error is returned to the caller.
    ///
    /// Re-selecting the already-active selector redraws the same cached data.
    pub async fn select_range(&self, selector: RangeSelector) -> anyhow::Result<Arc<ChartScene>> {
        self.state.lock().unwrap().active = selector;

        let report = self.load_report(selector).await?;
        let scene = ChartScene::build(&report, selector, self.geometry)
            .context("report contained no points to chart")?;

        let scene = Arc::new(scene);
        self.state.lock().unwrap().last_scene = Some(scene.clone());
        Ok(scene)
    }

    async fn load_report(&self, selector: RangeSelector) -> anyhow::Result<Arc<SentimentReport>> {
        let slot = {
            let mut cache = self.cache.lock().unwrap();
            cache
                .entry(selector)
                .or_insert_with(|| Arc::new(CacheSlot::new()))
                .clone()
        };

        // Holding the slot lock across the fetch is what gives the
        // single-flight guarantee for this selector.
        let mut guard = slot.report.lock().await;
        if let Some(report) = guard.as_ref() {
            tracing::debug!(days = selector.days(), "cache hit");
            return Ok(report.clone());
        }

        let from = selector.from_date(chrono::Local::now().date_naive());
        tracing::info!(days = selector.days(), %from, "fetching report");

        let report = Arc::new(self.repository.fetch_report(from).await?);
        *guard = Some(report.clone());
        Ok(report)
    }
}
