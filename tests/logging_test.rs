mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::helpers::*;
use loan_gateway::core::app_state::AppState;
use loan_gateway::core::http::server::build_app;
use loan_gateway::domain::identity::FixedClock;
use log::{Level, LevelFilter, Log, Metadata, Record};
use serde_json::json;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

struct CapturingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.target().starts_with("loan_gateway") {
            self.records
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};

fn warnings() -> Vec<String> {
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, message)| message.clone())
        .collect()
}

// Single test in this binary: the logger is process-wide.
#[tokio::test]
async fn each_rejection_is_warned_once_without_full_personal_code() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let state = AppState::with_clock(app_config(eligibility_config()), Arc::new(FixedClock(today())));
    let cases = [
        json!({ "personalCode": personal_code_aged(30), "loanAmount": 1999, "loanPeriod": 24 }),
        json!({ "personalCode": "38507300338", "loanAmount": 5000, "loanPeriod": 24 }),
        json!({ "personalCode": personal_code_aged(76), "loanAmount": 5000, "loanPeriod": 24 }),
        json!({ "personalCode": "38507300337", "loanAmount": "lots" }),
    ];

    for (index, body) in cases.iter().enumerate() {
        let request = Request::builder()
            .method("POST")
            .uri("/v1/loan/validate")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = build_app(state.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(warnings().len(), index + 1, "warnings so far: {:?}", warnings());
    }

    assert!(warnings()
        .iter()
        .all(|message| !message.contains("38507300338") && !message.contains("38507300337")));
}
