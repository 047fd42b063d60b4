use crate::view::{Dashboard, MealRow};

pub fn render_index(dashboard: &Dashboard, capture_action: &str) -> String {
    let metrics = dashboard.metrics.as_ref();
    let (consumed, target, percent, ring, percent_label, remaining, tone, date_line) = match metrics
    {
        Some(view) => (
            view.consumed.as_str(),
            view.target.as_str(),
            view.percent.to_string(),
            view.ring_background.as_str(),
            view.percent_label.as_str(),
            view.remaining_label.as_str(),
            view.remaining_tone.css(),
            view.date_line.as_str(),
        ),
        None => ("0", "0", "0".to_string(), "none", "0%", "", "inherit", ""),
    };

    let water = dashboard
        .water
        .as_ref()
        .map(|water| {
            let percent = water
                .percent
                .map(|percent| format!(" <span class=\"water-percent\">{percent}%</span>"))
                .unwrap_or_default();
            format!(
                "<section class=\"ios-card water\"><span class=\"label\">Вода</span><span id=\"water-display\">{}</span>{percent}</section>",
                escape_html(&water.label)
            )
        })
        .unwrap_or_default();

    let tip = dashboard
        .tip
        .as_ref()
        .map(|tip| format!("<p id=\"daily-tip\" class=\"tip\">{}</p>", escape_html(tip)))
        .unwrap_or_default();

    let notices: String = dashboard
        .notices
        .iter()
        .map(|notice| format!("<div class=\"notice\" role=\"alert\">{}</div>", escape_html(notice)))
        .collect();

    let body_style = dashboard
        .theme_background
        .as_deref()
        .map(|value| format!(" style=\"background-color: {}\"", escape_html(value)))
        .unwrap_or_default();

    let welcome = escape_html(&dashboard.welcome);
    let greeting = escape_html(&dashboard.greeting);
    let date_line = escape_html(date_line);
    let remaining = escape_html(remaining);
    let meals = render_meal_items(&dashboard.meals);
    let comment = escape_html(&dashboard.comment);
    let capture_action = escape_html(capture_action);
    let capture_disabled = if dashboard.capture.enabled { "" } else { " disabled" };

    fill_template(INDEX_HTML, |key| match key {
        "BODY_STYLE" => Some(body_style.as_str()),
        "WELCOME" => Some(welcome.as_str()),
        "GREETING" => Some(greeting.as_str()),
        "DATE" => Some(date_line.as_str()),
        "CONSUMED" => Some(consumed),
        "TARGET" => Some(target),
        "PERCENT" => Some(percent.as_str()),
        "RING" => Some(ring),
        "PERCENT_LABEL" => Some(percent_label),
        "REMAINING" => Some(remaining.as_str()),
        "REMAINING_COLOR" => Some(tone),
        "MEALS" => Some(meals.as_str()),
        "COMMENT" => Some(comment.as_str()),
        "WATER" => Some(water.as_str()),
        "TIP" => Some(tip.as_str()),
        "NOTICES" => Some(notices.as_str()),
        "CAPTURE_ACTION" => Some(capture_action.as_str()),
        "CAPTURE_LABEL" => Some(dashboard.capture.label),
        "CAPTURE_DISABLED" => Some(capture_disabled),
        _ => None,
    })
}

/// Substitutes every `{{KEY}}` of `template` in a single left-to-right pass.
/// Inserted values are never rescanned; unknown keys are kept verbatim.
fn fill_template<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("}}") else {
            out.push_str(&rest[open..]);
            return out;
        };
        let key = &after_open[..close];
        match lookup(key) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after_open[close + 2..];
    }
    out.push_str(rest);
    out
}

fn render_meal_items(rows: &[MealRow]) -> String {
    rows.iter()
        .map(|row| match row {
            MealRow::Placeholder(text) => format!("<li class=\"ios-list-item\">{text}</li>"),
            MealRow::Entry {
                time,
                name,
                calories,
            } => format!(
                "<li class=\"ios-list-item\"><div><div class=\"meal-time\">{}</div><div class=\"meal-name\">{}</div></div><div class=\"meal-calories\">{}</div></li>",
                escape_html(time),
                escape_html(name),
                escape_html(calories)
            ),
        })
        .collect()
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="uk">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Калорії за сьогодні</title>
  <style>
    :root {
      --ios-bg: #f2f2f7;
      --ios-card: #ffffff;
      --ios-text: #1c1c1e;
      --ios-secondary: #8e8e93;
      --ios-accent: #007aff;
      --ios-success: #34c759;
      --ios-separator: #e5e5ea;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--ios-bg);
      color: var(--ios-text);
      font-family: -apple-system, "SF Pro Text", "Helvetica Neue", sans-serif;
      padding: 20px 16px 40px;
    }

    main {
      max-width: 520px;
      margin: 0 auto;
      display: grid;
      gap: 16px;
    }

    h1 {
      margin: 0;
      font-size: 2rem;
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--ios-secondary);
    }

    .ios-card {
      background: var(--ios-card);
      border-radius: 14px;
      padding: 18px;
    }

    .summary {
      display: flex;
      align-items: center;
      gap: 20px;
    }

    .circular-progress {
      width: 120px;
      height: 120px;
      border-radius: 50%;
      display: grid;
      place-items: center;
      flex-shrink: 0;
    }

    .circular-progress .inner {
      width: 96px;
      height: 96px;
      border-radius: 50%;
      background: var(--ios-card);
      display: grid;
      place-items: center;
      font-weight: 600;
      font-size: 1.3rem;
    }

    .numbers .label {
      color: var(--ios-secondary);
      font-size: 0.85rem;
    }

    .numbers .value {
      font-size: 1.4rem;
      font-weight: 600;
    }

    .progress-remaining {
      margin-top: 6px;
      font-weight: 600;
    }

    .ios-list {
      list-style: none;
      margin: 0;
      padding: 0;
    }

    .ios-list-item {
      display: flex;
      justify-content: space-between;
      align-items: center;
      padding: 12px 0;
      border-bottom: 1px solid var(--ios-separator);
    }

    .ios-list-item:last-child {
      border-bottom: none;
    }

    .meal-time {
      color: var(--ios-secondary);
      font-size: 0.8rem;
    }

    .meal-calories {
      font-weight: 600;
    }

    .water {
      display: flex;
      gap: 10px;
      align-items: baseline;
    }

    .tip {
      margin: 0;
      color: var(--ios-secondary);
    }

    .notice {
      background: #fff4e5;
      border-radius: 12px;
      padding: 12px 14px;
    }

    #add-meal-button {
      width: 100%;
      border: none;
      border-radius: 14px;
      padding: 16px;
      font-size: 1rem;
      font-weight: 600;
      color: white;
      background: var(--ios-accent);
    }

    #add-meal-button:disabled {
      opacity: 0.6;
    }
  </style>
</head>
<body{{BODY_STYLE}}>
  <main>
    <header>
      <h1 id="welcome-message">{{WELCOME}}</h1>
      <p id="greeting" class="subtitle">{{GREETING}}</p>
      <p id="date-display" class="subtitle">{{DATE}}</p>
    </header>

    {{NOTICES}}

    <section class="ios-card summary">
      <div class="circular-progress" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow="{{PERCENT}}" style="background: {{RING}}">
        <div class="inner" id="progress-percent">{{PERCENT_LABEL}}</div>
      </div>
      <div class="numbers">
        <div class="label">Спожито / Ціль</div>
        <div class="value"><span id="calories-consumed">{{CONSUMED}}</span> / <span id="calories-target">{{TARGET}}</span></div>
        <div class="progress-remaining" style="color: {{REMAINING_COLOR}}">{{REMAINING}}</div>
      </div>
    </section>

    {{WATER}}

    <section class="ios-card">
      <ul id="meals-list" class="ios-list">{{MEALS}}</ul>
    </section>

    <section class="ios-card">
      <p id="daily-comment">{{COMMENT}}</p>
      {{TIP}}
    </section>

    <form id="capture-form" method="post" action="{{CAPTURE_ACTION}}">
      <button id="add-meal-button" type="submit"{{CAPTURE_DISABLED}}>{{CAPTURE_LABEL}}</button>
    </form>
  </main>
</body>
</html>
"#;
