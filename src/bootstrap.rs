use crate::api::ApiClient;
use crate::capture::{CaptureOutcome, RELOAD_DELAY, STANDALONE_NOTICE, capture_meal};
use crate::host::{Environment, HostBridge};
use crate::models::{DailyReport, InitData, placeholder_report};
use crate::view::{CaptureSurface, Dashboard};
use chrono::{Local, NaiveDate};
use tokio::time::sleep;
use tracing::{info, warn};

pub const WELCOME_TEXT: &str = "Сьогодні";
pub const FALLBACK_USER_NAME: &str = "Користувач";
pub const THEME_BACKGROUND: &str = "var(--ios-bg)";
pub const WATER_SAVED_ALERT: &str = "Воду додано до вашого звіту!";
pub const WATER_FAILED_ALERT: &str = "Помилка: Не вдалося додати воду.";

pub async fn load_report(client: &ApiClient, init_data: Option<&InitData>) -> DailyReport {
    load_report_at(client, init_data, Local::now().date_naive()).await
}

/// Fetches the real report, or the placeholder when there is no session
/// token or the backend cannot be used. Never fails.
pub async fn load_report_at(
    client: &ApiClient,
    init_data: Option<&InitData>,
    today: NaiveDate,
) -> DailyReport {
    let Some(init_data) = init_data.filter(|init_data| !init_data.is_empty()) else {
        return placeholder_report(today);
    };

    match client.fetch_daily_report(init_data).await {
        Ok(report) => report,
        Err(err) => {
            warn!("{err}; using placeholder report");
            placeholder_report(today)
        }
    }
}

/// A started Mini App page: the environment, the backend client and what
/// is currently on screen.
pub struct MiniApp<B> {
    environment: Environment<B>,
    client: ApiClient,
    dashboard: Dashboard,
}

impl<B: HostBridge> MiniApp<B> {
    pub async fn start(environment: Environment<B>, client: ApiClient) -> Self {
        let mut dashboard = Dashboard::default();

        let init_data = match environment.bridge() {
            Some(bridge) => {
                bridge.ready();
                bridge.set_background_color(THEME_BACKGROUND);
                dashboard.theme_background = Some(THEME_BACKGROUND.to_string());

                let name = bridge
                    .user_first_name()
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| FALLBACK_USER_NAME.to_string());
                dashboard.welcome = WELCOME_TEXT.to_string();
                dashboard.greeting = format!("Привіт, {name}! Звіт за сьогодні.");
                info!("mini app ready for {name}");
                Some(bridge.init_data())
            }
            None => {
                info!("no host bridge detected, running standalone");
                None
            }
        };

        let report = load_report(&client, init_data.as_ref()).await;
        dashboard.render(&report);

        Self {
            environment,
            client,
            dashboard,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn environment(&self) -> &Environment<B> {
        &self.environment
    }

    pub async fn capture_meal(&mut self) -> CaptureOutcome {
        capture_meal(&self.environment, &self.client, &mut self.dashboard).await
    }

    /// Logs a glass of water and reloads on success.
    pub async fn add_water(&mut self, volume_ml: i64) -> bool {
        let Some(bridge) = self.environment.bridge() else {
            self.dashboard.notify(STANDALONE_NOTICE);
            return false;
        };

        match self.client.add_water(&bridge.init_data(), volume_ml).await {
            Ok(true) => {
                info!("water added: {volume_ml} ml");
                bridge.show_alert(WATER_SAVED_ALERT).await;
                sleep(RELOAD_DELAY).await;
                bridge.reload();
                true
            }
            Ok(false) => {
                warn!("backend rejected water intake of {volume_ml} ml");
                bridge.show_alert(WATER_FAILED_ALERT).await;
                false
            }
            Err(err) => {
                warn!("{err}");
                bridge.show_alert(WATER_FAILED_ALERT).await;
                false
            }
        }
    }
}
