use crate::host::{HostBridge, PhotoFile, Popup};
use crate::models::InitData;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Server-side stand-in for the Telegram bridge, used when the preview
/// page is opened with an `init_data` query parameter. It cannot open a
/// file dialog or show native popups; alerts are collected for the page.
#[derive(Debug, Clone)]
pub struct PreviewBridge {
    init_data: InitData,
    alerts: Arc<Mutex<Vec<String>>>,
}

impl PreviewBridge {
    pub fn new(init_data: InitData) -> Self {
        Self {
            init_data,
            alerts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn take_alerts(&self) -> Vec<String> {
        std::mem::take(&mut *self.alerts.lock().await)
    }
}

impl HostBridge for PreviewBridge {
    fn ready(&self) {
        debug!("preview bridge ready");
    }

    fn init_data(&self) -> InitData {
        self.init_data.clone()
    }

    fn user_first_name(&self) -> Option<String> {
        self.init_data
            .user()
            .and_then(|user| user.display_name().map(str::to_string))
    }

    fn set_background_color(&self, value: &str) {
        debug!("background set to {value}");
    }

    fn show_progress(&self, visible: bool) {
        debug!("progress indicator visible: {visible}");
    }

    fn reload(&self) {
        debug!("reload requested");
    }

    async fn pick_photo(&self) -> Option<PhotoFile> {
        info!("file picker is unavailable in the preview");
        None
    }

    async fn show_alert(&self, message: &str) {
        self.alerts.lock().await.push(message.to_string());
    }

    async fn show_popup(&self, popup: &Popup) -> Option<String> {
        debug!("popup '{}' cannot be answered in the preview", popup.title);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn alerts_are_collected_and_drained() {
        let bridge = PreviewBridge::new(InitData::new("hash=abc"));
        bridge.show_alert("перше").await;
        bridge.show_alert("друге").await;
        assert_eq!(bridge.take_alerts().await, vec!["перше", "друге"]);
        assert!(bridge.take_alerts().await.is_empty());
    }

    #[test]
    fn first_name_comes_from_init_data() {
        let bridge = PreviewBridge::new(InitData::new(
            "user=%7B%22id%22%3A1%2C%22first_name%22%3A%22Ivan%22%7D",
        ));
        assert_eq!(bridge.user_first_name().as_deref(), Some("Ivan"));
        assert_eq!(PreviewBridge::new(InitData::default()).user_first_name(), None);
    }
}
