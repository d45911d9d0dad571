use claims::{assert_none, assert_some, assert_some_eq};

use littlebites_web::forms::{INVALID_EMAIL_MESSAGE, REQUIRED_FIELD_MESSAGE, SENT_MESSAGE};
use littlebites_web::notify::Severity;
use littlebites_web::page::UiEvent;
use littlebites_web::surface::RenderSurface;

use crate::helpers::spawn_page;

#[tokio::test(start_paused = true)]
async fn an_empty_contact_form_flags_every_required_field() {
    let mut tp = spawn_page();

    tp.page
        .handle(UiEvent::Submit {
            form: "contact-form".to_string(),
        })
        .await;

    assert_some_eq!(
        tp.model.field_error("contact-form", "name"),
        REQUIRED_FIELD_MESSAGE.to_string()
    );
    assert_some_eq!(
        tp.model.field_error("contact-form", "email"),
        REQUIRED_FIELD_MESSAGE.to_string()
    );
    // "subject" is optional in the markup.
    assert_none!(tp.model.field_error("contact-form", "subject"));
    assert_some_eq!(
        tp.model.field_error("contact-form", "message"),
        REQUIRED_FIELD_MESSAGE.to_string()
    );
    assert_none!(tp.model.inline_message("contact-form"));
}

#[tokio::test(start_paused = true)]
async fn a_bad_address_only_flags_the_email_field() {
    let mut tp = spawn_page();
    tp.model.type_into("contact-form", "name", "Ursula");
    tp.model.type_into("contact-form", "email", "ursula@nodot");
    tp.model.type_into("contact-form", "message", "hello");

    tp.page
        .handle(UiEvent::Submit {
            form: "contact-form".to_string(),
        })
        .await;

    assert_some_eq!(
        tp.model.field_error("contact-form", "email"),
        INVALID_EMAIL_MESSAGE.to_string()
    );
    assert_none!(tp.model.field_error("contact-form", "name"));
    assert_none!(tp.model.inline_message("contact-form"));
}

#[tokio::test(start_paused = true)]
async fn a_valid_submission_clears_the_form_and_confirms_inline() {
    let mut tp = spawn_page();
    tp.model.type_into("contact-form", "name", "Ursula");
    tp.model.type_into("contact-form", "email", "ursula@domain.com");
    tp.model.type_into("contact-form", "message", "hello");

    tp.page
        .handle(UiEvent::Submit {
            form: "contact-form".to_string(),
        })
        .await;

    let message = assert_some!(tp.model.inline_message("contact-form"));
    assert_eq!(message.text, SENT_MESSAGE);
    assert_eq!(message.severity, Severity::Success);
    assert_none!(tp.model.field_value("contact-form", "message"));
}

#[tokio::test(start_paused = true)]
async fn a_fixed_field_sheds_its_error_on_resubmit() {
    let mut tp = spawn_page();

    tp.page
        .handle(UiEvent::Submit {
            form: "contact-form".to_string(),
        })
        .await;
    assert_some!(tp.model.field_error("contact-form", "name"));

    tp.model.type_into("contact-form", "name", "Ursula");
    tp.page
        .handle(UiEvent::Submit {
            form: "contact-form".to_string(),
        })
        .await;

    assert_none!(tp.model.field_error("contact-form", "name"));
    assert_some!(tp.model.field_error("contact-form", "email"));
}
