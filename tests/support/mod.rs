#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::post,
};
use calorie_miniapp::host::{HostBridge, PhotoFile, Popup};
use calorie_miniapp::models::InitData;
use calorie_miniapp::view::CaptureSurface;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::net::TcpListener;
use std::sync::{Arc, Mutex as StdMutex};
use tokio::sync::Mutex;

pub const INIT_DATA: &str = "query_id=AAH&user=%7B%22id%22%3A42%2C%22first_name%22%3A%22Olena%22%7D&hash=abc";

/// In-process fake of the calorie backend. Replies are scripted per
/// endpoint; every request body is recorded.
#[derive(Clone, Default)]
pub struct StubBackend {
    replies: Arc<Mutex<HashMap<String, (u16, Value)>>>,
    hang_ups: Arc<Mutex<HashSet<String>>>,
    requests: Arc<Mutex<Vec<(String, Value)>>>,
}

impl StubBackend {
    pub async fn reply(&self, endpoint: &str, status: u16, body: Value) {
        self.replies
            .lock()
            .await
            .insert(endpoint.to_string(), (status, body));
    }

    /// Makes `endpoint` drop the connection without answering, so the
    /// client sees a transport failure after the request was sent.
    pub async fn hang_up(&self, endpoint: &str) {
        self.hang_ups.lock().await.insert(endpoint.to_string());
    }

    pub async fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().await.clone()
    }

    pub async fn requests_to(&self, endpoint: &str) -> Vec<Value> {
        self.requests()
            .await
            .into_iter()
            .filter(|(path, _)| path == endpoint)
            .map(|(_, body)| body)
            .collect()
    }

    /// Serves the stub on a random local port and returns its API base URL.
    pub async fn spawn(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub backend");
        let addr = listener.local_addr().unwrap();
        let app = Router::new()
            .route("/api/:endpoint", post(handle))
            .with_state(self.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub backend crashed");
        });
        format!("http://{addr}/api")
    }
}

async fn handle(
    State(stub): State<StubBackend>,
    Path(endpoint): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    stub.requests.lock().await.push((endpoint.clone(), body));
    if stub.hang_ups.lock().await.contains(&endpoint) {
        // Unwinding aborts the connection task before any response is written.
        panic!("stub backend hangs up on {endpoint}");
    }
    let reply = stub.replies.lock().await.get(&endpoint).cloned();
    match reply {
        Some((status, body)) => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(body),
        ),
        None => (StatusCode::NOT_FOUND, Json(serde_json::json!({}))),
    }
}

/// Base URL of a port nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/api")
}

pub fn report_json(target: i64, consumed: i64) -> Value {
    serde_json::json!({
        "date": "17 October 2026",
        "target": target,
        "consumed": consumed,
        "water_consumed": 500,
        "water_target": 2500,
        "daily_tip": "Пийте воду між прийомами їжі.",
        "meals": [
            { "time": "09:10", "name": "Сирники", "calories": 380 },
            { "time": "14:05", "name": "Борщ", "calories": 320 }
        ]
    })
}

pub fn borscht_json() -> Value {
    serde_json::json!({
        "name": "Борщ",
        "calories": 350,
        "description": "Тарілка борщу зі сметаною"
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Ready,
    Background(String),
    PickPhoto,
    Alert(String),
    Popup(Popup),
    Progress(bool),
    Reload,
    ControlBusy,
    ControlReset,
}

/// Scripted host bridge that records every call it receives.
pub struct MockBridge {
    pub init_data: InitData,
    pub first_name: Option<String>,
    pub photo: Option<PhotoFile>,
    pub popup_answer: Option<String>,
    events: Arc<StdMutex<Vec<HostEvent>>>,
}

impl MockBridge {
    pub fn new() -> Self {
        Self {
            init_data: InitData::new(INIT_DATA),
            first_name: Some("Olena".to_string()),
            photo: Some(PhotoFile {
                name: "lunch.jpg".to_string(),
                size: 482_113,
            }),
            popup_answer: Some("confirm".to_string()),
            events: Arc::new(StdMutex::new(Vec::new())),
        }
    }

    pub fn answering(mut self, button: Option<&str>) -> Self {
        self.popup_answer = button.map(str::to_string);
        self
    }

    pub fn without_photo(mut self) -> Self {
        self.photo = None;
        self
    }

    pub fn without_name(mut self) -> Self {
        self.first_name = None;
        self
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                HostEvent::Alert(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: HostEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl HostBridge for MockBridge {
    fn ready(&self) {
        self.record(HostEvent::Ready);
    }

    fn init_data(&self) -> InitData {
        self.init_data.clone()
    }

    fn user_first_name(&self) -> Option<String> {
        self.first_name.clone()
    }

    fn set_background_color(&self, value: &str) {
        self.record(HostEvent::Background(value.to_string()));
    }

    fn show_progress(&self, visible: bool) {
        self.record(HostEvent::Progress(visible));
    }

    fn reload(&self) {
        self.record(HostEvent::Reload);
    }

    async fn pick_photo(&self) -> Option<PhotoFile> {
        self.record(HostEvent::PickPhoto);
        self.photo.clone()
    }

    async fn show_alert(&self, message: &str) {
        self.record(HostEvent::Alert(message.to_string()));
    }

    async fn show_popup(&self, popup: &Popup) -> Option<String> {
        self.record(HostEvent::Popup(popup.clone()));
        self.popup_answer.clone()
    }
}

/// Capture control that counts how often it is switched. When built with
/// [`CountingSurface::logging_into`] it also appends to the bridge's event
/// log, so control changes can be ordered against host calls.
#[derive(Debug, Default)]
pub struct CountingSurface {
    pub busy_calls: usize,
    pub reset_calls: usize,
    pub busy: bool,
    pub notices: Vec<String>,
    log: Option<Arc<StdMutex<Vec<HostEvent>>>>,
}

impl CountingSurface {
    pub fn logging_into(bridge: &MockBridge) -> Self {
        Self {
            log: Some(Arc::clone(&bridge.events)),
            ..Self::default()
        }
    }

    fn log(&self, event: HostEvent) {
        if let Some(log) = &self.log {
            log.lock().unwrap().push(event);
        }
    }
}

impl CaptureSurface for CountingSurface {
    fn set_busy(&mut self) {
        self.busy_calls += 1;
        self.busy = true;
        self.log(HostEvent::ControlBusy);
    }

    fn reset(&mut self) {
        self.reset_calls += 1;
        self.busy = false;
        self.log(HostEvent::ControlReset);
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
