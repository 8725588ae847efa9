//! Advisor Integration Tests
//!
//! Drives the whole dashboard state through key events with tokio's clock
//! paused, so the reply delay is observed exactly:
//! - Question appears immediately, reply after the delay
//! - Blank questions never reach the advisor
//! - Second question refused while the first is pending
//! - Backend failure unblocks the chat and raises an error toast
//! - No reply is applied after teardown

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::KeyCode;
use tokio::sync::mpsc::error::TryRecvError;

use crate::core::advisor::{ChatRole, ResponderState, DEFAULT_REPLIES};
use crate::tests::common::{
    app_with, ask, key, services_with, settle, simulated_advisor, FailingAdvisor, REPLY_DELAY,
};
use crate::tui::events::{AppEvent, NotificationLevel};
use crate::tui::views::advisor::AdvisorViewState;

#[tokio::test(start_paused = true)]
async fn test_balance_question_round_trip() {
    let mut app = app_with(simulated_advisor());
    let initial = app.advisor.session().len();

    ask(&mut app, "What's my balance?");
    let session = app.advisor.session();
    assert_eq!(session.len(), initial + 1);
    assert_eq!(session.messages().last().unwrap().content, "What's my balance?");
    assert_eq!(session.state(), ResponderState::AwaitingReply);

    // Just before the deadline: still waiting
    settle(&mut app, REPLY_DELAY - Duration::from_millis(100)).await;
    assert_eq!(app.advisor.session().len(), initial + 1);
    assert!(app.advisor.is_awaiting());

    settle(&mut app, Duration::from_millis(200)).await;
    let session = app.advisor.session();
    assert_eq!(session.len(), initial + 2);
    let last = session.messages().last().unwrap();
    assert_eq!(last.role, ChatRole::Assistant);
    assert!(DEFAULT_REPLIES.contains(&last.content.as_str()));
    assert_eq!(session.state(), ResponderState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_blank_question_starts_nothing() {
    let mut app = app_with(simulated_advisor());
    let initial = app.advisor.session().len();

    ask(&mut app, "   ");
    assert_eq!(app.advisor.session().len(), initial);
    assert!(!app.advisor.is_awaiting());

    settle(&mut app, REPLY_DELAY * 2).await;
    assert_eq!(app.advisor.session().len(), initial);
}

#[tokio::test(start_paused = true)]
async fn test_blank_question_sends_no_reply_event() {
    let (services, mut rx) = services_with(simulated_advisor());
    let mut view = AdvisorViewState::new();
    view.handle_input(&key(KeyCode::Char('i')), &services);
    for c in "   ".chars() {
        view.handle_input(&key(KeyCode::Char(c)), &services);
    }
    view.handle_input(&key(KeyCode::Enter), &services);
    assert!(!view.is_awaiting());

    tokio::time::sleep(REPLY_DELAY * 2).await;
    tokio::task::yield_now().await;
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));

    // The same channel does see a reply once a real question is sent
    view.handle_input(&key(KeyCode::Char('x')), &services);
    view.handle_input(&key(KeyCode::Enter), &services);
    tokio::time::sleep(REPLY_DELAY * 2).await;
    tokio::task::yield_now().await;
    assert!(matches!(rx.try_recv(), Ok(AppEvent::AdvisorReply(_))));
}

#[tokio::test(start_paused = true)]
async fn test_second_question_refused_while_pending() {
    let mut app = app_with(simulated_advisor());
    let initial = app.advisor.session().len();

    ask(&mut app, "first");
    ask(&mut app, "second");
    assert_eq!(app.advisor.session().len(), initial + 1);
    assert_eq!(app.advisor.input_text(), "second");

    settle(&mut app, REPLY_DELAY * 3).await;
    assert_eq!(app.advisor.session().len(), initial + 2);

    // Now idle again: the kept text can be sent
    ask(&mut app, "");
    assert_eq!(app.advisor.session().len(), initial + 3);
    assert_eq!(app.advisor.session().messages().last().unwrap().content, "second");
}

#[tokio::test(start_paused = true)]
async fn test_backend_failure_notifies() {
    let mut app = app_with(Arc::new(FailingAdvisor));
    let initial = app.advisor.session().len();

    ask(&mut app, "anyone there?");
    settle(&mut app, Duration::from_millis(10)).await;

    assert!(!app.advisor.is_awaiting());
    assert_eq!(app.advisor.session().len(), initial + 1);
    assert!(app
        .notifications
        .iter()
        .any(|n| n.level == NotificationLevel::Error && n.message.contains("connection refused")));
}

#[tokio::test(start_paused = true)]
async fn test_teardown_suppresses_reply() {
    let (services, mut rx) = services_with(simulated_advisor());
    let mut view = AdvisorViewState::new();
    view.handle_input(&key(KeyCode::Char('i')), &services);
    for c in "hello".chars() {
        view.handle_input(&key(KeyCode::Char(c)), &services);
    }
    view.handle_input(&key(KeyCode::Enter), &services);
    assert!(view.is_awaiting());

    drop(view);
    tokio::time::sleep(REPLY_DELAY * 2).await;
    tokio::task::yield_now().await;
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test(start_paused = true)]
async fn test_stray_reply_ignored() {
    let mut app = app_with(simulated_advisor());
    let initial = app.advisor.session().len();

    app.handle_event(AppEvent::AdvisorReply("unsolicited".to_string()));
    assert_eq!(app.advisor.session().len(), initial);
    assert!(!app.advisor.is_awaiting());
}
