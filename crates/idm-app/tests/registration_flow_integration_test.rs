//! Registration view wired to the real adapters against a mock backend.

use std::sync::Arc;
use std::time::Duration;

use mockito::Matcher;
use tokio::sync::broadcast;

use idm_app::{AdminUserRegistrationView, IgnoredReason, RegistrationViewDeps, SubmitEvent, SubmitOutcome};
use idm_core::{ConsoleEvent, MessageKey};
use idm_infra::{BroadcastEventBus, HttpUserDelegate, RuleSet, RuleValidator, TeraTemplateRenderer};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn build_view(base_url: String) -> (AdminUserRegistrationView, broadcast::Receiver<ConsoleEvent>) {
    let bus = Arc::new(BroadcastEventBus::default());
    let events = bus.subscribe();
    let view = AdminUserRegistrationView::new(
        "registration",
        RegistrationViewDeps {
            validator: Arc::new(RuleValidator::new(RuleSet::admin_registration(8))),
            user_delegate: Arc::new(
                HttpUserDelegate::new(base_url, Duration::from_secs(5)).unwrap(),
            ),
            event_bus: bus,
            renderer: Arc::new(TeraTemplateRenderer::new().unwrap()),
        },
    );
    (view, events)
}

fn fill(view: &AdminUserRegistrationView, email: &str) {
    view.set_field("email", email);
    view.set_field("password", "secret-password");
    view.set_field("passwordConfirm", "secret-password");
    view.set_field("terms", "on");
}

#[tokio::test]
async fn registers_user_end_to_end() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/managed/user")
        .match_query(Matcher::UrlEncoded("_action".into(), "create".into()))
        .match_body(Matcher::PartialJson(serde_json::json!({
            "userName": "new.user@example.com",
            "securityQuestion": 1
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"_id":"1","_rev":"0"}"#)
        .expect(1)
        .create_async()
        .await;

    let (view, mut events) = build_view(server.url());
    view.render().unwrap();
    fill(&view, "New.User@example.com");

    let outcome = view.on_submit(&mut SubmitEvent::new()).await;

    assert!(outcome.is_registered());
    mock.assert_async().await;
    match events.try_recv().unwrap() {
        ConsoleEvent::UserSuccessfullyRegistered { user, self_registration } => {
            assert_eq!(user.user_name, "new.user@example.com");
            assert!(!self_registration);
        }
        other => panic!("unexpected event: {other:?}"),
    }
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn duplicate_user_shows_message_and_allows_retry() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/managed/user")
        .match_query(Matcher::Any)
        .with_status(409)
        .with_body(r#"{"error":409,"reason":"Conflict","message":"exists"}"#)
        .expect(2)
        .create_async()
        .await;

    let (view, mut events) = build_view(server.url());
    view.render().unwrap();
    fill(&view, "taken@example.com");

    let first = view.on_submit(&mut SubmitEvent::new()).await;
    let second = view.on_submit(&mut SubmitEvent::new()).await;

    assert_eq!(first, SubmitOutcome::Failed(MessageKey::UserAlreadyExists));
    assert_eq!(second, SubmitOutcome::Failed(MessageKey::UserAlreadyExists));
    mock.assert_async().await;
    assert_eq!(
        events.try_recv().unwrap(),
        ConsoleEvent::DisplayMessageRequest(MessageKey::UserAlreadyExists)
    );
    assert!(!view.is_locked());
}

#[tokio::test]
async fn rule_violations_block_submission() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/managed/user")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let (view, mut events) = build_view(server.url());
    view.render().unwrap();
    view.render().unwrap();
    fill(&view, "new.user@example.com");
    view.clear_field("terms");

    assert!(!view.on_validate());
    let outcome = view.on_submit(&mut SubmitEvent::new()).await;

    assert_eq!(outcome, SubmitOutcome::Ignored(IgnoredReason::InvalidForm));
    mock.assert_async().await;
    assert!(events.try_recv().is_err());
    assert!(!view.is_locked());
}
