use crate::bootstrap::MiniApp;
use crate::errors::AppError;
use crate::host::Environment;
use crate::models::{DailyReport, InitData};
use crate::preview::PreviewBridge;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    pub init_data: Option<String>,
}

impl PreviewQuery {
    fn init_data(&self) -> Option<InitData> {
        self.init_data
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .map(InitData::new)
    }

    fn capture_action(&self) -> String {
        match self.init_data() {
            Some(init_data) => {
                let query = serde_urlencoded::to_string([("init_data", init_data.as_str())])
                    .unwrap_or_default();
                format!("/capture?{query}")
            }
            None => "/capture".to_string(),
        }
    }

    fn environment(&self) -> Environment<PreviewBridge> {
        match self.init_data() {
            Some(init_data) => Environment::MiniApp(PreviewBridge::new(init_data)),
            None => Environment::Standalone,
        }
    }
}

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Html<String> {
    let app = MiniApp::start(query.environment(), state.client.clone()).await;
    Html(page(&app, &query).await)
}

pub async fn capture(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Html<String> {
    let mut app = MiniApp::start(query.environment(), state.client.clone()).await;
    let outcome = app.capture_meal().await;
    info!("capture finished: {outcome:?}");
    Html(page(&app, &query).await)
}

/// Strict variant of the report fetch: upstream failures are surfaced
/// instead of being replaced by placeholder data.
pub async fn get_report(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Result<Json<DailyReport>, AppError> {
    let init_data = query.init_data().unwrap_or_default();
    let report = state.client.fetch_daily_report(&init_data).await?;
    Ok(Json(report))
}

async fn page(app: &MiniApp<PreviewBridge>, query: &PreviewQuery) -> String {
    let mut dashboard = app.dashboard().clone();
    if let Some(bridge) = app.environment().bridge() {
        dashboard.notices.extend(bridge.take_alerts().await);
    }
    render_index(&dashboard, &query.capture_action())
}
