use claims::{assert_none, assert_some};

use littlebites_web::notify::Severity;
use littlebites_web::page::UiEvent;
use littlebites_web::widgets::LOADED_MESSAGE;

use crate::helpers::spawn_page;

#[tokio::test(start_paused = true)]
async fn the_page_starts_with_every_card_visible() {
    let tp = spawn_page();

    assert_eq!(tp.model.active_filter().as_deref(), Some("all"));
    assert_eq!(tp.model.visible_cards().len(), 6);
}

#[tokio::test(start_paused = true)]
async fn filtering_shows_only_the_matching_cards() {
    let mut tp = spawn_page();

    tp.page
        .handle(UiEvent::FilterSelected {
            tag: "snacks".to_string(),
        })
        .await;

    assert_eq!(tp.model.active_filter().as_deref(), Some("snacks"));
    assert_eq!(
        tp.model.visible_cards(),
        vec!["product-snacks-1".to_string(), "product-snacks-2".to_string()]
    );

    tp.page
        .handle(UiEvent::FilterSelected {
            tag: "all".to_string(),
        })
        .await;
    assert_eq!(tp.model.visible_cards().len(), 6);
}

#[tokio::test(start_paused = true)]
async fn opening_a_second_faq_item_closes_the_first() {
    let mut tp = spawn_page();

    tp.page
        .handle(UiEvent::AccordionToggled {
            item: "faq-shipping".to_string(),
        })
        .await;
    assert_eq!(
        tp.model.open_accordion_item().as_deref(),
        Some("faq-shipping")
    );

    tp.page
        .handle(UiEvent::AccordionToggled {
            item: "faq-allergens".to_string(),
        })
        .await;
    assert_eq!(
        tp.model.open_accordion_item().as_deref(),
        Some("faq-allergens")
    );

    tp.page
        .handle(UiEvent::AccordionToggled {
            item: "faq-allergens".to_string(),
        })
        .await;
    assert_none!(tp.model.open_accordion_item());
}

#[tokio::test(start_paused = true)]
async fn the_scroll_top_button_tracks_the_threshold() {
    let mut tp = spawn_page();

    tp.page.handle(UiEvent::Scrolled { offset: 500 }).await;
    assert!(tp.model.scroll_top_visible());

    tp.page.handle(UiEvent::Scrolled { offset: 100 }).await;
    assert!(!tp.model.scroll_top_visible());
}

#[tokio::test(start_paused = true)]
async fn following_a_nav_link_closes_the_mobile_menu() {
    let mut tp = spawn_page();

    tp.page.handle(UiEvent::NavToggled).await;
    assert!(tp.model.nav_open());

    tp.page.handle(UiEvent::NavLinkFollowed).await;
    assert!(!tp.model.nav_open());
}

#[tokio::test(start_paused = true)]
async fn load_more_finishes_with_a_success_toast() {
    let mut tp = spawn_page();

    tp.page
        .handle(UiEvent::LoadMoreClicked {
            button: "load-more-posts".to_string(),
        })
        .await;

    let toast = assert_some!(tp.model.toast());
    assert_eq!(toast.text, LOADED_MESSAGE);
    assert_eq!(toast.severity, Severity::Success);
    assert!(!tp.model.control("load-more-posts").disabled);
}

#[tokio::test(start_paused = true)]
async fn the_store_locator_reports_the_canned_result() {
    let mut tp = spawn_page();
    tp.model.type_into("store-locator", "location", "Portland, OR");

    tp.page
        .handle(UiEvent::Submit {
            form: "store-locator".to_string(),
        })
        .await;

    let toast = assert_some!(tp.model.toast());
    assert_eq!(toast.text, "Found 12 stores near \"Portland, OR\"");
    assert_eq!(toast.severity, Severity::Success);
}

#[tokio::test(start_paused = true)]
async fn the_store_locator_asks_for_input_when_empty() {
    let mut tp = spawn_page();

    tp.page
        .handle(UiEvent::Submit {
            form: "store-locator".to_string(),
        })
        .await;

    let toast = assert_some!(tp.model.toast());
    assert_eq!(toast.severity, Severity::Info);
}

#[tokio::test(start_paused = true)]
async fn star_hover_and_selection_drive_the_highlight() {
    let mut tp = spawn_page();

    tp.page
        .handle(UiEvent::StarHovered {
            rating: "testimonial-rating".to_string(),
            index: 3,
        })
        .await;
    assert_eq!(tp.model.highlighted_stars("testimonial-rating"), 4);

    tp.page
        .handle(UiEvent::StarLeft {
            rating: "testimonial-rating".to_string(),
        })
        .await;
    assert_eq!(tp.model.highlighted_stars("testimonial-rating"), 0);

    tp.page
        .handle(UiEvent::StarSelected {
            rating: "testimonial-rating".to_string(),
            index: 2,
        })
        .await;
    tp.page
        .handle(UiEvent::StarLeft {
            rating: "testimonial-rating".to_string(),
        })
        .await;
    assert_eq!(tp.model.highlighted_stars("testimonial-rating"), 3);
}
