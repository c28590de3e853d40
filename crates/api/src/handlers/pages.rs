//! Chart pages and their script.
//!
//! Pages share one layout; the body's `data-chart` attribute tells the
//! script which `/api/v1/<chart>/{user_id}` endpoint to draw.

use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

const LAYOUT: &str = include_str!("../../templates/layout.html");
const PRESENCE_JS: &str = include_str!("../../static/js/presence.js");

/// A chart page: its URL slug (also the API endpoint name) and title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPage {
    pub chart: &'static str,
    pub title: &'static str,
}

pub const PRESENCE_WEEKDAY: ChartPage = ChartPage {
    chart: "presence_weekday",
    title: "Presence by weekday",
};

pub const MEAN_TIME_WEEKDAY: ChartPage = ChartPage {
    chart: "mean_time_weekday",
    title: "Presence mean time by weekday",
};

pub const PRESENCE_START_END: ChartPage = ChartPage {
    chart: "presence_start_end",
    title: "Presence start-end weekday",
};

pub const CHART_PAGES: [ChartPage; 3] = [PRESENCE_WEEKDAY, MEAN_TIME_WEEKDAY, PRESENCE_START_END];

/// Fill the layout for `page`, marking its nav link active.
pub fn render(page: ChartPage) -> String {
    let mut html = LAYOUT
        .replace("{{title}}", page.title)
        .replace("{{chart}}", page.chart);
    for other in CHART_PAGES {
        let class = if other == page { "active" } else { "" };
        html = html.replace(&format!("{{{{active_{}}}}}", other.chart), class);
    }
    html
}

/// GET / -- 302 to the weekday totals page, the front page.
pub async fn index() -> impl IntoResponse {
    (StatusCode::FOUND, [(LOCATION, "/presence_weekday")])
}

pub async fn presence_weekday() -> Html<String> {
    Html(render(PRESENCE_WEEKDAY))
}

pub async fn mean_time_weekday() -> Html<String> {
    Html(render(MEAN_TIME_WEEKDAY))
}

pub async fn presence_start_end() -> Html<String> {
    Html(render(PRESENCE_START_END))
}

/// GET /static/js/presence.js
pub async fn presence_js() -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/javascript")], PRESENCE_JS)
}
