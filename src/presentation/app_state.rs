// Application state for HTTP handlers
use crate::application::chart_session::ChartSession;

pub struct AppState {
    pub chart_session: ChartSession,
}
