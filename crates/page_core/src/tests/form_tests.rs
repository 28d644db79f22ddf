use super::*;
use crate::fakes::{
    field_values, fields, FakeButton, FakeForm, FakeStatus, FakeTransport, Journal, Reply,
    SharedFields,
};

const GENERIC: &str = "发送失败，请稍后重试";
const SUCCESS: &str = "发送成功，我们会尽快联系您！";

fn contact_fields() -> SharedFields {
    fields(&[
        ("name", "Li Lei"),
        ("email", "lilei@example.com"),
        ("message", "想了解一下合作方式"),
    ])
}

fn controller(transport: FakeTransport, form_fields: SharedFields, journal: &Journal) -> FormController {
    FormController::new(
        Some(Box::new(FakeForm {
            fields: form_fields,
            journal: journal.clone(),
        })),
        Some(Box::new(FakeButton {
            name: "submit",
            journal: journal.clone(),
        })),
        Some(Box::new(FakeStatus {
            journal: journal.clone(),
        })),
        Arc::new(transport),
    )
}

async fn submit_with(reply: Reply) -> (Option<SubmitResult>, FormController, Journal, SharedFields) {
    let journal = Journal::default();
    let form_fields = contact_fields();
    let mut controller = controller(
        FakeTransport::new(reply, journal.clone()),
        form_fields.clone(),
        &journal,
    );
    let mut event = SubmitEvent::new();
    let result = controller.on_submit(&mut event).await;
    assert!(event.default_prevented());
    (result, controller, journal, form_fields)
}

#[tokio::test]
async fn accepted_submission_resets_form_and_reports_success() {
    let (result, controller, journal, form_fields) =
        submit_with(Reply::Respond(200, r#"{"ok":true}"#)).await;

    assert_eq!(result, Some(SubmitResult::Success));
    assert_eq!(controller.state(), &UiState::Succeeded);
    assert_eq!(
        journal.entries(),
        vec![
            "submit:disabled=true".to_string(),
            "status:text=发送中...".to_string(),
            "transport:post".to_string(),
            "status:class=toast success".to_string(),
            format!("status:text={SUCCESS}"),
            "form:reset".to_string(),
            "submit:disabled=false".to_string(),
        ]
    );
    assert!(field_values(&form_fields).iter().all(String::is_empty));
}

#[tokio::test]
async fn non_success_status_fails_even_when_body_acknowledges() {
    let (result, controller, journal, form_fields) =
        submit_with(Reply::Respond(500, r#"{"ok":true}"#)).await;

    assert_eq!(result, Some(SubmitResult::Failure(GENERIC.to_string())));
    assert_eq!(controller.state(), &UiState::Failed(GENERIC.to_string()));
    assert!(journal.contains("status:class=toast error"));
    assert!(!journal.contains("form:reset"));
    assert_eq!(field_values(&form_fields)[0], "Li Lei");
}

#[tokio::test]
async fn server_error_field_is_shown_verbatim() {
    let (result, _, journal, _) =
        submit_with(Reply::Respond(400, r#"{"ok":false,"error":"邮箱格式不正确"}"#)).await;

    assert_eq!(result, Some(SubmitResult::Failure("邮箱格式不正确".into())));
    assert!(journal.contains("status:text=邮箱格式不正确"));
}

#[tokio::test]
async fn message_field_is_used_when_error_is_absent() {
    let (result, _, _, _) =
        submit_with(Reply::Respond(200, r#"{"ok":false,"message":"稍后再试"}"#)).await;

    assert_eq!(result, Some(SubmitResult::Failure("稍后再试".into())));
}

#[tokio::test]
async fn truthy_but_non_boolean_acknowledgement_is_a_failure() {
    for body in [r#"{"ok":1}"#, r#"{"ok":"true"}"#, r#"{"status":"queued"}"#] {
        let (result, _, journal, _) = submit_with(Reply::Respond(200, body)).await;
        assert_eq!(result, Some(SubmitResult::Failure(GENERIC.into())), "{body}");
        assert!(!journal.contains("form:reset"), "{body}");
    }
}

#[tokio::test]
async fn malformed_body_degrades_to_generic_failure() {
    let (result, _, journal, _) = submit_with(Reply::Respond(200, "<html>oops</html>")).await;

    assert_eq!(result, Some(SubmitResult::Failure(GENERIC.into())));
    assert_eq!(journal.count("submit:disabled=false"), 1);
}

#[tokio::test]
async fn transport_error_still_reenables_submit_exactly_once() {
    let (result, controller, journal, _) = submit_with(Reply::Fail).await;

    assert_eq!(result, Some(SubmitResult::Failure(GENERIC.into())));
    assert_eq!(controller.state(), &UiState::Failed(GENERIC.into()));
    assert_eq!(journal.count("submit:disabled=true"), 1);
    assert_eq!(journal.count("submit:disabled=false"), 1);
    assert_eq!(
        journal.entries().last().map(String::as_str),
        Some("submit:disabled=false")
    );
}

#[tokio::test]
async fn panicking_transport_is_contained() {
    let (result, controller, journal, _) = submit_with(Reply::Panic).await;

    assert_eq!(result, Some(SubmitResult::Failure(GENERIC.into())));
    assert!(controller.state().accepts_input());
    assert_eq!(journal.count("submit:disabled=false"), 1);
}

#[tokio::test]
async fn missing_form_only_prevents_default() {
    let journal = Journal::default();
    let transport = FakeTransport::new(Reply::Respond(200, r#"{"ok":true}"#), journal.clone());
    let mut controller = FormController::new(
        None,
        Some(Box::new(FakeButton {
            name: "submit",
            journal: journal.clone(),
        })),
        Some(Box::new(FakeStatus {
            journal: journal.clone(),
        })),
        Arc::new(transport),
    );

    let mut event = SubmitEvent::new();
    assert_eq!(controller.on_submit(&mut event).await, None);
    assert!(event.default_prevented());
    assert!(!controller.is_bound());
    assert!(journal.entries().is_empty());
    assert_eq!(controller.state(), &UiState::Idle);
}

#[tokio::test]
async fn edits_during_flight_do_not_reach_the_request() {
    let journal = Journal::default();
    let form_fields = contact_fields();
    let mut transport = FakeTransport::new(Reply::Respond(503, "{}"), journal.clone());
    transport.edit_during_flight = Some(form_fields.clone());
    let seen = transport.seen.clone();

    let mut controller = controller(transport, form_fields.clone(), &journal);
    controller.on_submit(&mut SubmitEvent::new()).await;

    let seen = seen.lock().expect("seen");
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].get("name"), Some("Li Lei"));
    assert_eq!(seen[0].get("email"), Some("lilei@example.com"));
    assert_eq!(field_values(&form_fields)[0], "Li Lei (edited)");
}

#[tokio::test]
async fn works_without_button_or_status_region() {
    let journal = Journal::default();
    let form_fields = contact_fields();
    let mut controller = FormController::new(
        Some(Box::new(FakeForm {
            fields: form_fields.clone(),
            journal: journal.clone(),
        })),
        None,
        None,
        Arc::new(FakeTransport::new(
            Reply::Respond(201, r#"{"ok":true,"message":"saved"}"#),
            journal.clone(),
        )),
    );

    let result = controller.on_submit(&mut SubmitEvent::new()).await;
    assert_eq!(result, Some(SubmitResult::Success));
    assert_eq!(journal.entries(), vec!["transport:post", "form:reset"]);
}

#[tokio::test]
async fn resubmitting_after_failure_issues_a_new_request() {
    let journal = Journal::default();
    let transport = FakeTransport::new(Reply::Respond(502, ""), journal.clone());
    let seen = transport.seen.clone();
    let mut controller = controller(transport, contact_fields(), &journal);

    controller.on_submit(&mut SubmitEvent::new()).await;
    controller.on_submit(&mut SubmitEvent::new()).await;

    assert_eq!(seen.lock().expect("seen").len(), 2);
    assert_eq!(journal.count("transport:post"), 2);
    assert_eq!(journal.count("submit:disabled=false"), 2);
}

#[test]
fn classify_requires_success_status_and_literal_true() {
    assert_eq!(
        classify_response(&TransportResponse::new(204, r#"{"ok":true}"#)),
        SubmitResult::Success
    );
    assert_eq!(
        classify_response(&TransportResponse::new(302, r#"{"ok":true}"#)),
        SubmitResult::Failure(GENERIC.into())
    );
    assert_eq!(
        classify_response(&TransportResponse::new(200, r#"{"ok":false}"#)),
        SubmitResult::Failure(GENERIC.into())
    );
}
