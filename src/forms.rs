use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::SubscriberEmail;
use crate::notify::{Notifier, Scope, Severity};
use crate::surface::RenderSurface;

pub const REQUIRED_FIELD_MESSAGE: &str = "This field is required";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const SENT_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
}

/// One input of a form, as declared by the page markup (`required`
/// attribute, `email` input type).
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn required_text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Text,
            required: true,
        }
    }

    pub fn required_email(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Email,
            required: true,
        }
    }

    pub fn optional_text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Text,
            required: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormSpec {
    pub id: String,
    pub fields: Vec<FieldSpec>,
}

impl FormSpec {
    pub fn new(id: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

/// Generic submit handling for plain forms (contact, reviews): per-field
/// errors for missing required inputs and malformed email addresses, a
/// scoped success message once everything passes. Field errors are cleared
/// as soon as the field passes on a later attempt.
pub struct FormValidator {
    forms: HashMap<String, FormSpec>,
    notifier: Notifier,
    surface: Arc<dyn RenderSurface>,
}

impl FormValidator {
    pub fn new(forms: Vec<FormSpec>, notifier: Notifier, surface: Arc<dyn RenderSurface>) -> Self {
        Self {
            forms: forms.into_iter().map(|f| (f.id.clone(), f)).collect(),
            notifier,
            surface,
        }
    }

    #[tracing::instrument(name = "Validating a form submission", skip(self))]
    pub fn handle_submit(&self, form_id: &str) {
        let Some(spec) = self.forms.get(form_id) else {
            tracing::debug!("Submit for a form this page does not have.");
            return;
        };
        let mut is_valid = true;
        for field in &spec.fields {
            let value = self
                .surface
                .field_value(form_id, &field.name)
                .unwrap_or_default();
            let trimmed = value.trim();
            if field.required && trimmed.is_empty() {
                is_valid = false;
                self.surface
                    .set_field_error(form_id, &field.name, REQUIRED_FIELD_MESSAGE);
                continue;
            }
            if field.kind == FieldKind::Email
                && !trimmed.is_empty()
                && SubscriberEmail::parse(value.clone()).is_err()
            {
                is_valid = false;
                self.surface
                    .set_field_error(form_id, &field.name, INVALID_EMAIL_MESSAGE);
                continue;
            }
            self.surface.clear_field_error(form_id, &field.name);
        }
        if is_valid {
            self.surface.reset_form(form_id);
            self.notifier
                .emit(Scope::form(form_id), SENT_MESSAGE, Severity::Success);
        }
    }
}
