use httpmock::prelude::*;
use plan_form::domain::model::{text, FormInput, PlanSlot};
use plan_form::{FormController, GenerateOutcome, HttpBackend, PageView, Settings};
use std::sync::Arc;
use std::time::Duration;

fn form(theme: &str, faculty: &str, length: &str) -> FormInput {
    FormInput {
        theme: theme.to_string(),
        faculty: faculty.to_string(),
        length: length.to_string(),
    }
}

fn controller_for(server: &MockServer, view: &PageView) -> FormController<HttpBackend, PageView> {
    let settings = Settings::with_base_url(&server.base_url());
    FormController::new(HttpBackend::new(&settings), view.clone())
}

#[tokio::test]
async fn test_missing_faculty_alerts_without_network_call() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/structure");
        then.status(200).json_body(serde_json::json!({}));
    });

    let view = PageView::with_form(form("anything", "", "100"));
    let controller = controller_for(&server, &view);

    let outcome = controller.submit_generation().await;

    assert!(matches!(outcome, GenerateOutcome::Rejected(_)));
    assert_eq!(view.alerts(), vec![text::MISSING_INPUT_ALERT.to_string()]);
    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_whitespace_theme_and_zero_length_are_rejected() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/structure");
        then.status(200).json_body(serde_json::json!({}));
    });

    for input in [form("   ", "science", "500"), form("x", "science", "0")] {
        let view = PageView::with_form(input);
        let controller = controller_for(&server, &view);
        assert!(matches!(
            controller.submit_generation().await,
            GenerateOutcome::Rejected(_)
        ));
        assert_eq!(view.alerts().len(), 1);
    }

    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_missing_plan_renders_failure_placeholder() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/structure")
            .header("content-type", "application/json")
            .json_body(serde_json::json!({"text": "x", "faculty": "science", "length": 500}));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"plan1": "A", "plan2": "B"}));
    });

    let view = PageView::with_form(form("x", "science", "500"));
    let controller = controller_for(&server, &view);

    let outcome = controller.submit_generation().await;

    api_mock.assert();
    assert!(matches!(outcome, GenerateOutcome::Rendered { .. }));
    assert_eq!(view.plan(PlanSlot::First), "A");
    assert_eq!(view.plan(PlanSlot::Second), "B");
    assert_eq!(view.plan(PlanSlot::Third), text::GENERATION_FAILED);
}

#[tokio::test]
async fn test_theme_is_trimmed_before_sending() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/structure")
            .json_body(serde_json::json!({"text": "環境問題", "faculty": "mixed", "length": 1000}));
        then.status(200)
            .json_body(serde_json::json!({"plan1": "1", "plan2": "2", "plan3": "3"}));
    });

    let view = PageView::with_form(form("  環境問題\n", "mixed", " 1000"));
    let controller = controller_for(&server, &view);

    controller.submit_generation().await;

    api_mock.assert();
    assert_eq!(view.plan(PlanSlot::Third), "3");
}

#[tokio::test]
async fn test_http_500_renders_error_state() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/structure");
        then.status(500).body("server error");
    });

    let view = PageView::with_form(form("x", "humanities", "1000"));
    let controller = controller_for(&server, &view);

    let outcome = controller.submit_generation().await;

    api_mock.assert();
    assert!(matches!(outcome, GenerateOutcome::Failed(_)));
    let first = view.plan(PlanSlot::First);
    assert!(first.starts_with(text::ERROR_PREFIX));
    assert!(first.contains("500"));
    assert!(first.contains("server error"));
    assert_eq!(view.plan(PlanSlot::Second), text::ERROR_LABEL);
    assert_eq!(view.plan(PlanSlot::Third), text::ERROR_LABEL);
}

#[tokio::test]
async fn test_malformed_json_is_handled_like_http_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/structure");
        then.status(200).body("<html>oops</html>");
    });

    let view = PageView::with_form(form("x", "humanities", "1000"));
    let controller = controller_for(&server, &view);

    let outcome = controller.submit_generation().await;

    assert!(matches!(outcome, GenerateOutcome::Failed(_)));
    assert!(view.plan(PlanSlot::First).starts_with(text::ERROR_PREFIX));
    assert_eq!(view.plan(PlanSlot::Second), text::ERROR_LABEL);
}

#[tokio::test]
async fn test_connection_failure_renders_error_state() {
    let view = PageView::with_form(form("x", "science", "2000"));
    let settings = Settings::with_base_url("http://127.0.0.1:1");
    let controller = FormController::new(HttpBackend::new(&settings), view.clone());

    let outcome = controller.submit_generation().await;

    assert!(matches!(outcome, GenerateOutcome::Failed(_)));
    assert!(view.plan(PlanSlot::First).starts_with(text::ERROR_PREFIX));
    assert_eq!(view.plan(PlanSlot::Third), text::ERROR_LABEL);
    assert!(!controller.is_generating());
}

#[tokio::test]
async fn test_second_trigger_while_pending_is_ignored() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/structure");
        then.status(200)
            .delay(Duration::from_millis(500))
            .json_body(serde_json::json!({"plan1": "A", "plan2": "B", "plan3": "C"}));
    });

    let view = PageView::with_form(form("x", "science", "500"));
    let controller = Arc::new(controller_for(&server, &view));

    let first = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.submit_generation().await })
    };

    while !controller.is_generating() {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let second = controller.submit_generation().await;
    assert!(matches!(second, GenerateOutcome::Busy));
    assert_eq!(view.plan(PlanSlot::First), text::GENERATING);

    let first = first.await.unwrap();
    assert!(matches!(first, GenerateOutcome::Rendered { .. }));
    assert_eq!(view.plan(PlanSlot::First), "A");
    api_mock.assert_hits(1);

    // 完成後可以再次送出
    assert!(matches!(
        controller.submit_generation().await,
        GenerateOutcome::Rendered { .. }
    ));
    api_mock.assert_hits(2);
}
