//! The Telegram Mini App host surface, as seen by the app.

use crate::models::InitData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupButton {
    pub id: &'static str,
    pub kind: ButtonKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub title: String,
    pub message: String,
    pub buttons: Vec<PopupButton>,
}

/// A photo chosen through the host's file picker. Only metadata is kept;
/// the bytes never leave the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoFile {
    pub name: String,
    pub size: u64,
}

/// Capabilities exposed by the embedding host.
#[allow(async_fn_in_trait)]
pub trait HostBridge {
    fn ready(&self);
    fn init_data(&self) -> InitData;
    fn user_first_name(&self) -> Option<String>;
    fn set_background_color(&self, value: &str);
    fn show_progress(&self, visible: bool);
    fn reload(&self);

    /// Opens the file picker; `None` when the user backs out.
    async fn pick_photo(&self) -> Option<PhotoFile>;
    async fn show_alert(&self, message: &str);
    /// Resolves to the id of the pressed button, `None` if dismissed.
    async fn show_popup(&self, popup: &Popup) -> Option<String>;
}

/// Uninhabited bridge type for apps that only ever run standalone.
#[derive(Debug, Clone, Copy)]
pub enum NoBridge {}

impl HostBridge for NoBridge {
    fn ready(&self) {
        match *self {}
    }

    fn init_data(&self) -> InitData {
        match *self {}
    }

    fn user_first_name(&self) -> Option<String> {
        match *self {}
    }

    fn set_background_color(&self, _value: &str) {
        match *self {}
    }

    fn show_progress(&self, _visible: bool) {
        match *self {}
    }

    fn reload(&self) {
        match *self {}
    }

    async fn pick_photo(&self) -> Option<PhotoFile> {
        match *self {}
    }

    async fn show_alert(&self, _message: &str) {
        match *self {}
    }

    async fn show_popup(&self, _popup: &Popup) -> Option<String> {
        match *self {}
    }
}

/// Where the page is running: inside Telegram with a bridge, or in a plain browser.
#[derive(Debug, Clone)]
pub enum Environment<B> {
    MiniApp(B),
    Standalone,
}

impl<B: HostBridge> Environment<B> {
    pub fn bridge(&self) -> Option<&B> {
        match self {
            Self::MiniApp(bridge) => Some(bridge),
            Self::Standalone => None,
        }
    }
}
