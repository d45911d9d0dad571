use std::time::Duration;

use claims::{assert_none, assert_some};

use littlebites_web::notify::{Scope, Severity};
use littlebites_web::page::{UiEvent, LIVE_CHAT_MESSAGE, SOCIAL_LINKS_MESSAGE};

use crate::helpers::spawn_page;

#[tokio::test(start_paused = true)]
async fn a_new_toast_replaces_the_one_on_screen() {
    let mut tp = spawn_page();

    tp.page.handle(UiEvent::LiveChatRequested).await;
    tp.page
        .handle(UiEvent::SocialLinkFollowed { href: None })
        .await;

    let toast = assert_some!(tp.model.toast());
    assert_eq!(toast.text, SOCIAL_LINKS_MESSAGE);
    assert_eq!(toast.severity, Severity::Info);
}

#[tokio::test(start_paused = true)]
async fn toasts_dismiss_themselves_after_five_seconds() {
    let mut tp = spawn_page();

    tp.page.handle(UiEvent::LiveChatRequested).await;
    assert_some!(tp.model.toast());

    // Let the spawned timer register its sleep before the clock moves;
    // `advance` only wakes sleeps that have already been polled.
    tokio::task::yield_now().await;
    tokio::time::advance(Duration::from_millis(4_999)).await;
    assert_some!(tp.model.toast());
    tokio::time::advance(Duration::from_millis(2)).await;
    // One more scheduling round so the woken timer task actually runs.
    tokio::task::yield_now().await;
    assert_none!(tp.model.toast());
}

#[tokio::test(start_paused = true)]
async fn a_dismiss_event_closes_the_toast_early() {
    let mut tp = spawn_page();

    tp.page.handle(UiEvent::LiveChatRequested).await;
    tp.page
        .handle(UiEvent::NotificationDismissed {
            scope: Scope::Global,
        })
        .await;

    assert_none!(tp.model.toast());
    // The cancelled timer must not fire against a later toast.
    tp.page
        .handle(UiEvent::SocialLinkFollowed { href: None })
        .await;
    tokio::time::advance(Duration::from_secs(4)).await;
    assert_some!(tp.model.toast());
}

#[tokio::test(start_paused = true)]
async fn a_toast_does_not_displace_an_inline_message() {
    let mut tp = spawn_page();

    // Empty submit leaves an inline error on the newsletter form.
    tp.page
        .handle(UiEvent::Submit {
            form: "newsletter-form".to_string(),
        })
        .await;
    tp.page.handle(UiEvent::LiveChatRequested).await;

    let toast = assert_some!(tp.model.toast());
    assert_eq!(toast.text, LIVE_CHAT_MESSAGE);
    assert_some!(tp.model.inline_message("newsletter-form"));
}

#[tokio::test(start_paused = true)]
async fn a_real_social_href_opens_without_a_toast() {
    let mut tp = spawn_page();

    tp.page
        .handle(UiEvent::SocialLinkFollowed {
            href: Some("https://instagram.com/littlebites".to_string()),
        })
        .await;

    assert_none!(tp.model.toast());
}

#[tokio::test(start_paused = true)]
async fn a_placeholder_social_href_toasts() {
    let mut tp = spawn_page();

    tp.page
        .handle(UiEvent::SocialLinkFollowed {
            href: Some("#".to_string()),
        })
        .await;

    let toast = assert_some!(tp.model.toast());
    assert_eq!(toast.text, SOCIAL_LINKS_MESSAGE);
}
