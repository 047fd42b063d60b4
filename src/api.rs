use crate::errors::{ClientError, RequestFailure};
use crate::models::{
    AddWaterRequest, DailyReport, InitData, MealPayload, Profile, ProfileLookup, RecognizedMeal,
    SaveMealRequest, SaveProfileRequest, SessionRequest,
};
use reqwest::{Client, Response};
use serde::Serialize;
use tracing::debug;

pub const DEFAULT_WATER_VOLUME_ML: i64 = 250;

/// Thin wrapper over the calorie backend. Every call is a single POST with
/// a JSON body; nothing is retried.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_daily_report(&self, init_data: &InitData) -> Result<DailyReport, ClientError> {
        let response = self
            .post("get_daily_report", &SessionRequest { init_data })
            .await
            .map_err(ClientError::ReportFetch)?;
        let report: DailyReport = decode(response).await.map_err(ClientError::ReportFetch)?;

        if !report.is_renderable() {
            return Err(ClientError::ReportFetch(RequestFailure::Body(format!(
                "target must be positive and consumed non-negative (target={}, consumed={})",
                report.target, report.consumed
            ))));
        }
        Ok(report)
    }

    /// Asks the backend to recognize the meal for this session. The photo
    /// itself is never uploaded: the backend works from what it already
    /// associates with `init_data`.
    pub async fn recognize_meal_photo(&self, init_data: &InitData) -> Result<RecognizedMeal, ClientError> {
        let response = self
            .post("process_photo", &SessionRequest { init_data })
            .await
            .map_err(ClientError::Recognition)?;
        decode(response).await.map_err(ClientError::Recognition)
    }

    pub async fn save_meal(
        &self,
        init_data: &InitData,
        name: &str,
        calories: i64,
    ) -> Result<bool, ClientError> {
        let body = SaveMealRequest {
            init_data,
            meal: MealPayload { name, calories },
        };
        self.post_for_status("save_meal", &body)
            .await
            .map_err(ClientError::SaveNetwork)
    }

    pub async fn add_water(&self, init_data: &InitData, volume_ml: i64) -> Result<bool, ClientError> {
        let body = AddWaterRequest {
            init_data,
            volume_ml,
        };
        self.post_for_status("add_water", &body)
            .await
            .map_err(ClientError::Water)
    }

    pub async fn fetch_profile(&self, init_data: &InitData) -> Result<Option<Profile>, ClientError> {
        let response = self
            .post("get_profile", &SessionRequest { init_data })
            .await
            .map_err(ClientError::Profile)?;
        let lookup: ProfileLookup = decode(response).await.map_err(ClientError::Profile)?;

        if !lookup.exists {
            return Ok(None);
        }
        match lookup.data {
            Some(profile) => Ok(Some(profile)),
            None => Err(ClientError::Profile(RequestFailure::Body(
                "profile marked as existing but data is missing".to_string(),
            ))),
        }
    }

    pub async fn save_profile(&self, init_data: &InitData, profile: &Profile) -> Result<bool, ClientError> {
        let body = SaveProfileRequest { init_data, profile };
        self.post_for_status("save_profile", &body)
            .await
            .map_err(ClientError::Profile)
    }

    fn endpoint(&self, suffix: &str) -> String {
        format!("{}/{suffix}", self.base_url)
    }

    async fn send(&self, suffix: &str, body: &impl Serialize) -> Result<Response, RequestFailure> {
        let url = self.endpoint(suffix);
        debug!("POST {url}");
        self.http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(RequestFailure::transport)
    }

    /// Sends the request and treats any non-2xx status as a failure.
    async fn post(&self, suffix: &str, body: &impl Serialize) -> Result<Response, RequestFailure> {
        let response = self.send(suffix, body).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RequestFailure::Status(status.as_u16()));
        }
        Ok(response)
    }

    /// Sends the request and reports only whether the status was 2xx.
    async fn post_for_status(&self, suffix: &str, body: &impl Serialize) -> Result<bool, RequestFailure> {
        let response = self.send(suffix, body).await?;
        Ok(response.status().is_success())
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, RequestFailure> {
    let bytes = response.bytes().await.map_err(RequestFailure::transport)?;
    serde_json::from_slice(&bytes).map_err(RequestFailure::body)
}
