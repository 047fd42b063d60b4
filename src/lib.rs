pub mod api;
pub mod app;
pub mod bootstrap;
pub mod capture;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod host;
pub mod models;
pub mod preview;
pub mod state;
pub mod ui;
pub mod view;

pub use api::ApiClient;
pub use app::router;
pub use bootstrap::{MiniApp, load_report};
pub use capture::{CaptureOutcome, capture_meal};
pub use host::{Environment, HostBridge};
pub use state::AppState;
