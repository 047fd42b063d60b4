use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Opaque session token handed over by the Telegram host (`initData`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InitData(String);

impl InitData {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decodes the `user=` JSON field, if the token carries one.
    pub fn user(&self) -> Option<WebAppUser> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(&self.0).ok()?;
        let (_, raw_user) = pairs.into_iter().find(|(key, _)| key == "user")?;
        serde_json::from_str(&raw_user).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WebAppUser {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl WebAppUser {
    pub fn display_name(&self) -> Option<&str> {
        self.first_name
            .as_deref()
            .or(self.username.as_deref())
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    pub time: String,
    pub name: String,
    pub calories: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub date: String,
    pub target: i64,
    pub consumed: i64,
    pub meals: Vec<MealEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_consumed: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_target: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_tip: Option<String>,
}

impl DailyReport {
    /// A report is renderable only with a positive target and a non-negative total.
    pub fn is_renderable(&self) -> bool {
        self.target > 0 && self.consumed >= 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizedMeal {
    pub name: String,
    pub calories: i64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub weight: f64,
    pub height: f64,
    pub activity: String,
    #[serde(default)]
    pub night_shifts: bool,
}

#[derive(Debug, Deserialize)]
pub struct ProfileLookup {
    #[serde(default)]
    pub exists: bool,
    #[serde(default)]
    pub data: Option<Profile>,
}

#[derive(Debug, Serialize)]
pub struct SessionRequest<'a> {
    #[serde(rename = "initData")]
    pub init_data: &'a InitData,
}

#[derive(Debug, Serialize)]
pub struct MealPayload<'a> {
    pub name: &'a str,
    pub calories: i64,
}

#[derive(Debug, Serialize)]
pub struct SaveMealRequest<'a> {
    #[serde(rename = "initData")]
    pub init_data: &'a InitData,
    pub meal: MealPayload<'a>,
}

#[derive(Debug, Serialize)]
pub struct AddWaterRequest<'a> {
    #[serde(rename = "initData")]
    pub init_data: &'a InitData,
    pub volume_ml: i64,
}

#[derive(Debug, Serialize)]
pub struct SaveProfileRequest<'a> {
    #[serde(rename = "initData")]
    pub init_data: &'a InitData,
    pub profile: &'a Profile,
}

/// Stand-in data shown when the real report cannot be fetched.
pub fn placeholder_report(today: NaiveDate) -> DailyReport {
    DailyReport {
        date: format_ukrainian_date(today),
        target: 2000,
        consumed: 1450,
        meals: vec![
            MealEntry {
                time: "08:30".to_string(),
                name: "Сніданок (Вівсянка з ягодами)".to_string(),
                calories: 420,
            },
            MealEntry {
                time: "13:00".to_string(),
                name: "Обід (Курка гриль, овочі)".to_string(),
                calories: 580,
            },
        ],
        water_consumed: None,
        water_target: None,
        daily_tip: None,
    }
}

const MONTHS_GENITIVE: [&str; 12] = [
    "січня",
    "лютого",
    "березня",
    "квітня",
    "травня",
    "червня",
    "липня",
    "серпня",
    "вересня",
    "жовтня",
    "листопада",
    "грудня",
];

pub fn format_ukrainian_date(date: NaiveDate) -> String {
    let month = MONTHS_GENITIVE[date.month0() as usize];
    format!("{} {} {} р.", date.day(), month, date.year())
}
