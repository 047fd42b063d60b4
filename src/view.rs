use crate::models::{DailyReport, MealEntry};

pub const ALERT_COLOR: &str = "#FF3B30";
pub const ACCENT_COLOR: &str = "var(--ios-accent)";
pub const NO_MEALS_TEXT: &str = "Сьогодні ще не було зафіксовано прийомів їжі.";
pub const CAPTURE_IDLE_LABEL: &str = "📸 Додати прийом їжі за фото";
pub const CAPTURE_BUSY_LABEL: &str = "⏳ Обробка фото...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelTone {
    Accent,
    Alert,
}

impl LabelTone {
    pub fn css(self) -> &'static str {
        match self {
            Self::Accent => ACCENT_COLOR,
            Self::Alert => ALERT_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsView {
    pub date_line: String,
    pub consumed: String,
    pub target: String,
    pub percent: u8,
    pub ring_background: String,
    pub percent_label: String,
    pub remaining_label: String,
    pub remaining_tone: LabelTone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealRow {
    Placeholder(&'static str),
    Entry {
        time: String,
        name: String,
        calories: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DailyComment {
    StartTracking,
    GoodProgress { consumed: i64 },
    GoalReached,
    Exceeded { overage: i64 },
    /// Close to the goal but still under it; no rule covers this band.
    Silent,
}

impl DailyComment {
    pub fn text(&self) -> String {
        match self {
            Self::StartTracking => {
                "День тільки почався! Надішліть перше фото, щоб розпочати трекінг. 💪".to_string()
            }
            Self::GoodProgress { consumed } => format!(
                "Ви на гарному шляху! Спожито {consumed} ккал. Не забувайте про необхідну активність."
            ),
            Self::GoalReached => {
                "🏆 **Вітаємо! Ви досягли або дуже близькі до вашої добової цілі.** Відмінна робота!"
                    .to_string()
            }
            Self::Exceeded { overage } => format!(
                "⚠️ **Увага! Ви перевищили ціль на {overage} ккал.** Радимо скоригувати раціон на наступний день."
            ),
            Self::Silent => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaterView {
    pub label: String,
    pub percent: Option<u8>,
}

/// Share of `target` reached, rounded and clamped to 0..=100.
///
/// `target` must be positive; reports violating that are rejected when fetched.
pub fn percent_of(consumed: i64, target: i64) -> u8 {
    debug_assert!(target > 0, "target must be positive");
    let ratio = consumed as f64 / target as f64 * 100.0;
    ratio.round().clamp(0.0, 100.0) as u8
}

pub fn render_metrics(report: &DailyReport) -> MetricsView {
    let remaining = report.target - report.consumed;
    let percent = percent_of(report.consumed, report.target);

    let (remaining_label, remaining_tone) = if remaining < 0 {
        (
            format!("Перевищення: {} ккал", remaining.abs()),
            LabelTone::Alert,
        )
    } else {
        (format!("{remaining} ккал"), LabelTone::Accent)
    };

    MetricsView {
        date_line: format!("Звіт за {}", report.date),
        consumed: report.consumed.to_string(),
        target: report.target.to_string(),
        percent,
        ring_background: format!(
            "conic-gradient(var(--ios-success) {percent}%, var(--ios-separator) {percent}%)"
        ),
        percent_label: format!("{percent}%"),
        remaining_label,
        remaining_tone,
    }
}

pub fn render_meals(meals: &[MealEntry]) -> Vec<MealRow> {
    if meals.is_empty() {
        return vec![MealRow::Placeholder(NO_MEALS_TEXT)];
    }

    meals
        .iter()
        .map(|meal| MealRow::Entry {
            time: meal.time.clone(),
            name: meal.name.clone(),
            calories: format!("{} ккал", meal.calories),
        })
        .collect()
}

pub fn render_comment(report: &DailyReport) -> DailyComment {
    let consumed = report.consumed;
    let target = report.target as f64;
    let consumed_f = consumed as f64;

    if consumed == 0 {
        DailyComment::StartTracking
    } else if consumed_f < target * 0.75 {
        DailyComment::GoodProgress { consumed }
    } else if consumed >= report.target && consumed_f < target * 1.05 {
        DailyComment::GoalReached
    } else if consumed_f >= target * 1.05 {
        DailyComment::Exceeded {
            overage: consumed - report.target,
        }
    } else {
        DailyComment::Silent
    }
}

pub fn render_water(report: &DailyReport) -> Option<WaterView> {
    let (consumed, target) = (report.water_consumed?, report.water_target?);
    let percent = (target > 0).then(|| percent_of(consumed, target));
    Some(WaterView {
        label: format!("{consumed} / {target} мл"),
        percent,
    })
}

pub trait CaptureSurface {
    fn set_busy(&mut self);
    fn reset(&mut self);
    /// Plain notice for environments without a host bridge.
    fn notify(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureButton {
    pub label: &'static str,
    pub enabled: bool,
}

impl Default for CaptureButton {
    fn default() -> Self {
        Self {
            label: CAPTURE_IDLE_LABEL,
            enabled: true,
        }
    }
}

/// Everything the page shows, derived from one report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dashboard {
    pub welcome: String,
    pub greeting: String,
    pub theme_background: Option<String>,
    pub metrics: Option<MetricsView>,
    pub meals: Vec<MealRow>,
    pub comment: String,
    pub water: Option<WaterView>,
    pub tip: Option<String>,
    pub capture: CaptureButton,
    pub notices: Vec<String>,
}

impl Dashboard {
    pub fn render(&mut self, report: &DailyReport) {
        self.metrics = Some(render_metrics(report));
        self.meals = render_meals(&report.meals);
        self.comment = render_comment(report).text();
        self.water = render_water(report);
        self.tip = report.daily_tip.clone().filter(|tip| !tip.is_empty());
    }
}

impl CaptureSurface for Dashboard {
    fn set_busy(&mut self) {
        self.capture.label = CAPTURE_BUSY_LABEL;
        self.capture.enabled = false;
    }

    fn reset(&mut self) {
        self.capture = CaptureButton::default();
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
