//! Page controller: serves the HTML shell and its script, both compiled in.

use axum::http::header;
use axum::response::{Html, IntoResponse};

const RECORDS_HTML: &str = include_str!("../../../../static/records.html");
const RECORDS_SCRIPT: &str = include_str!("../../../../static/script.js");

pub struct PageController;

impl PageController {
    pub async fn index() -> Html<&'static str> {
        Html(RECORDS_HTML)
    }

    pub async fn script() -> impl IntoResponse {
        (
            [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
            RECORDS_SCRIPT,
        )
    }
}
