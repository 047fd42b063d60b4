use crate::api::ApiClient;
use crate::host::{ButtonKind, Environment, HostBridge, Popup, PopupButton};
use crate::models::{InitData, RecognizedMeal};
use crate::view::CaptureSurface;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

pub const RELOAD_DELAY: Duration = Duration::from_millis(500);

pub const STANDALONE_NOTICE: &str = "Функція \"Додати фото\" доступна лише в Telegram Mini App.";
pub const RECOGNITION_FAILED_ALERT: &str = "Помилка: Не вдалося розпізнати страву. Перевірте API.";
pub const EDIT_NOT_SUPPORTED_ALERT: &str = "Функціонал редагування буде доданий пізніше.";
pub const SAVED_ALERT: &str = "Страва успішно додана до вашого звіту!";
pub const SAVE_REJECTED_ALERT: &str =
    "Помилка: Не вдалося зберегти дані на сервері. Перевірте логі бекенду (Error log).";
pub const SAVE_NETWORK_ALERT: &str = "Помилка мережі при збереженні.";

const CONFIRM_BUTTON: &str = "confirm";
const EDIT_BUTTON: &str = "edit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Confirm,
    Edit,
    Dismissed,
}

impl ConfirmChoice {
    pub fn from_button_id(id: Option<&str>) -> Self {
        match id {
            Some(CONFIRM_BUTTON) => Self::Confirm,
            Some(EDIT_BUTTON) => Self::Edit,
            _ => Self::Dismissed,
        }
    }
}

/// How one pass through the capture flow ended. Every variant leaves the
/// page idle and interactive again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Unsupported,
    NoPhotoSelected,
    RecognitionFailed,
    EditRequested,
    Dismissed,
    SaveRejected,
    SaveFailed,
    Saved(RecognizedMeal),
}

pub fn confirmation_popup(meal: &RecognizedMeal) -> Popup {
    Popup {
        title: "Результат розпізнавання".to_string(),
        message: format!(
            "🍽️ *Розпізнана страва:* **{}**\n\n🔥 *Оцінка калорій:* **{} ккал**\n\n*Деталі:* {}",
            meal.name, meal.calories, meal.description
        ),
        buttons: vec![
            PopupButton {
                id: CONFIRM_BUTTON,
                kind: ButtonKind::Default,
                text: format!("✅ Додати ({} ккал)", meal.calories),
            },
            PopupButton {
                id: EDIT_BUTTON,
                kind: ButtonKind::Destructive,
                text: "✏️ Редагувати".to_string(),
            },
        ],
    }
}

/// Runs the photo → recognition → confirmation → save sequence once.
pub async fn capture_meal<B, S>(
    environment: &Environment<B>,
    client: &ApiClient,
    surface: &mut S,
) -> CaptureOutcome
where
    B: HostBridge,
    S: CaptureSurface,
{
    let Some(bridge) = environment.bridge() else {
        surface.notify(STANDALONE_NOTICE);
        return CaptureOutcome::Unsupported;
    };

    let Some(photo) = bridge.pick_photo().await else {
        return CaptureOutcome::NoPhotoSelected;
    };
    debug!("photo selected: {} ({} bytes)", photo.name, photo.size);

    let init_data = bridge.init_data();
    surface.set_busy();
    let meal = match client.recognize_meal_photo(&init_data).await {
        Ok(meal) => {
            surface.reset();
            meal
        }
        Err(err) => {
            error!("failed to process photo: {err}");
            bridge.show_alert(RECOGNITION_FAILED_ALERT).await;
            surface.reset();
            return CaptureOutcome::RecognitionFailed;
        }
    };
    info!("meal recognized: {} ({} kcal)", meal.name, meal.calories);

    let pressed = bridge.show_popup(&confirmation_popup(&meal)).await;
    match ConfirmChoice::from_button_id(pressed.as_deref()) {
        ConfirmChoice::Confirm => save_confirmed(bridge, client, &init_data, meal).await,
        ConfirmChoice::Edit => {
            bridge.show_alert(EDIT_NOT_SUPPORTED_ALERT).await;
            CaptureOutcome::EditRequested
        }
        ConfirmChoice::Dismissed => CaptureOutcome::Dismissed,
    }
}

async fn save_confirmed<B: HostBridge>(
    bridge: &B,
    client: &ApiClient,
    init_data: &InitData,
    meal: RecognizedMeal,
) -> CaptureOutcome {
    bridge.show_progress(true);
    let saved = client.save_meal(init_data, &meal.name, meal.calories).await;
    bridge.show_progress(false);

    match saved {
        Ok(true) => {
            info!("meal saved: {}", meal.name);
            bridge.show_alert(SAVED_ALERT).await;
            sleep(RELOAD_DELAY).await;
            bridge.reload();
            CaptureOutcome::Saved(meal)
        }
        Ok(false) => {
            warn!("backend rejected meal {}", meal.name);
            bridge.show_alert(SAVE_REJECTED_ALERT).await;
            CaptureOutcome::SaveRejected
        }
        Err(err) => {
            error!("{err}");
            bridge.show_alert(SAVE_NETWORK_ALERT).await;
            CaptureOutcome::SaveFailed
        }
    }
}
