//! Shared harness for the end-to-end suites
//!
//! Every suite drives the simulated calculator through the same session
//! and page-object stack the smoke binary uses against a live endpoint.

use std::sync::Arc;

use calcdriver::config::Config;
use calcdriver::pages::{ScientificCalculatorPage, StandardCalculatorPage};
use calcdriver::session::CalculatorSession;
use calcdriver::sim::SimCalculator;

pub async fn setup_session() -> CalculatorSession {
    let config = Config {
        app: "sim-calculator".to_string(),
        ..Config::default()
    };
    CalculatorSession::setup(&config, Arc::new(SimCalculator::new()))
        .await
        .expect("session setup")
}

/// Standard-mode page against a fresh session, window sized for the
/// memory/history panels and the display cleared.
#[allow(dead_code)]
pub async fn standard_page() -> (CalculatorSession, StandardCalculatorPage) {
    let session = setup_session().await;
    let page = StandardCalculatorPage::new(session.clone());

    page.memory
        .resize_window_to_display_memory_label()
        .await
        .expect("resize");
    page.app.ensure_focus().await.expect("focus");
    page.ensure_standard_mode().await.expect("standard mode");
    page.ensure_result_text_is_zero().await.expect("cleared display");

    (session, page)
}

/// Scientific-mode page against a fresh session, angle mode reset to
/// degrees and the display cleared.
#[allow(dead_code)]
pub async fn scientific_page() -> (CalculatorSession, ScientificCalculatorPage) {
    let session = setup_session().await;
    let page = ScientificCalculatorPage::new(session.clone());

    page.navigate_to_scientific().await.expect("scientific mode");
    page.operators
        .set_angle_mode(calcdriver::pages::AngleMode::Degrees)
        .await
        .expect("degrees");
    if page.result_text().await.expect("display") != "0" {
        page.clear_all().await.expect("clear");
    }

    (session, page)
}
