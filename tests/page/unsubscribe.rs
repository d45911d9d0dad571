use claims::{assert_none, assert_some};

use littlebites_web::notify::Severity;
use littlebites_web::page::UiEvent;
use littlebites_web::subscription::UNSUBSCRIBED_MESSAGE;

use crate::helpers::spawn_page;

#[tokio::test(start_paused = true)]
async fn an_unsubscribe_parameter_removes_the_subscriber_on_load() {
    let mut tp = spawn_page();
    tp.subscribers.add("user@example.com").unwrap();

    tp.page
        .handle(UiEvent::PageLoad {
            query: "?unsubscribe=user%40example.com".to_string(),
        })
        .await;

    assert!(!tp.subscribers.contains("user@example.com"));
    let toast = assert_some!(tp.model.toast());
    assert_eq!(toast.text, UNSUBSCRIBED_MESSAGE);
    assert_eq!(toast.severity, Severity::Info);
}

#[tokio::test(start_paused = true)]
async fn unsubscribing_an_unknown_address_still_confirms() {
    let mut tp = spawn_page();

    tp.page
        .handle(UiEvent::PageLoad {
            query: "?unsubscribe=stranger%40example.com".to_string(),
        })
        .await;

    let toast = assert_some!(tp.model.toast());
    assert_eq!(toast.text, UNSUBSCRIBED_MESSAGE);
    assert_eq!(tp.subscribers.count(), 0);
}

#[tokio::test(start_paused = true)]
async fn a_load_without_the_parameter_is_quiet() {
    let mut tp = spawn_page();
    tp.subscribers.add("user@example.com").unwrap();

    tp.page
        .handle(UiEvent::PageLoad {
            query: "?utm_source=mail&utm_campaign=spring".to_string(),
        })
        .await;

    assert_none!(tp.model.toast());
    assert!(tp.subscribers.contains("user@example.com"));
}
