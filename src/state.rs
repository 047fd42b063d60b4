use crate::api::ApiClient;

#[derive(Clone)]
pub struct AppState {
    pub client: ApiClient,
}

impl AppState {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: ApiClient::new(base_url),
        }
    }
}
