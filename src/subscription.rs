use std::sync::Arc;
use std::time::Duration;

use time::OffsetDateTime;

use crate::domain::{Frequency, Preferences, SubscriberEmail, Topic};
use crate::notify::{Notifier, Scope, Severity};
use crate::storage::StorageError;
use crate::store::{PreferenceStore, SubscriberStore};
use crate::surface::RenderSurface;

pub const SUBSCRIBING_LABEL: &str = "Subscribing...";
pub const SUBSCRIBED_MESSAGE: &str =
    "Thank you for subscribing! Check your email for confirmation.";
pub const UNSUBSCRIBED_MESSAGE: &str = "You have been unsubscribed from our newsletter.";
pub const PREFERENCES_SAVED_MESSAGE: &str = "Newsletter preferences saved successfully!";

/// Everything that can stop a subscription attempt. None of these are
/// fatal: each one resolves into a message scoped to the submitting form.
pub enum SubscribeError {
    MissingEmail,
    InvalidEmail(String),
    AlreadySubscribed,
    Storage(StorageError),
}

impl SubscribeError {
    fn severity(&self) -> Severity {
        match self {
            SubscribeError::AlreadySubscribed => Severity::Info,
            _ => Severity::Error,
        }
    }
}

impl std::fmt::Display for SubscribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscribeError::MissingEmail => write!(f, "Please enter your email address"),
            SubscribeError::InvalidEmail(_) => write!(f, "Please enter a valid email address"),
            SubscribeError::AlreadySubscribed => {
                write!(f, "You are already subscribed to our newsletter!")
            }
            SubscribeError::Storage(_) => {
                write!(f, "Something went wrong. Please try again later.")
            }
        }
    }
}

impl std::error::Error for SubscribeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            // &str does not implement `Error` - we consider it the root cause
            SubscribeError::MissingEmail => None,
            SubscribeError::InvalidEmail(_) => None,
            SubscribeError::AlreadySubscribed => None,
            SubscribeError::Storage(e) => Some(e),
        }
    }
}

impl std::fmt::Debug for SubscribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// The newsletter signup flow: validate, consult the store, fake the
/// network round-trip, confirm. The only suspension point is the
/// wall-clock delay standing in for the backend call.
pub struct NewsletterFlow {
    subscribers: SubscriberStore,
    preferences: PreferenceStore,
    notifier: Notifier,
    surface: Arc<dyn RenderSurface>,
    submit_delay: Duration,
}

impl NewsletterFlow {
    pub fn new(
        subscribers: SubscriberStore,
        preferences: PreferenceStore,
        notifier: Notifier,
        surface: Arc<dyn RenderSurface>,
        submit_delay: Duration,
    ) -> Self {
        Self {
            subscribers,
            preferences,
            notifier,
            surface,
            submit_delay,
        }
    }

    #[tracing::instrument(name = "Handling a newsletter submission", skip(self))]
    pub async fn handle_submit(&self, form_id: &str) {
        match self.validate(form_id) {
            Ok(email) => self.submit(form_id, email).await,
            Err(rejection) => {
                tracing::info!(
                    rejection = ?rejection,
                    "Submission rejected without touching the store."
                );
                self.notifier.emit(
                    Scope::form(form_id),
                    &rejection.to_string(),
                    rejection.severity(),
                );
            }
        }
    }

    fn validate(&self, form_id: &str) -> Result<SubscriberEmail, SubscribeError> {
        let raw = self
            .surface
            .field_value(form_id, "email")
            .unwrap_or_default();
        if raw.trim().is_empty() {
            return Err(SubscribeError::MissingEmail);
        }
        let email = SubscriberEmail::parse(raw).map_err(SubscribeError::InvalidEmail)?;
        if self.subscribers.contains(email.as_ref()) {
            return Err(SubscribeError::AlreadySubscribed);
        }
        Ok(email)
    }

    #[tracing::instrument(
        name = "Adding a new subscriber",
        skip(self, email),
        fields(subscriber_email = %email)
    )]
    async fn submit(&self, form_id: &str, email: SubscriberEmail) {
        self.surface.set_control_busy(form_id, SUBSCRIBING_LABEL);
        // Simulated network latency; the fake backend cannot fail past this
        // point except at the storage write.
        tokio::time::sleep(self.submit_delay).await;
        let outcome = self.subscribers.add(email.as_ref());
        self.surface.reset_form(form_id);
        self.surface.restore_control(form_id);
        match outcome {
            Ok(()) => {
                self.notifier
                    .emit(Scope::form(form_id), SUBSCRIBED_MESSAGE, Severity::Success);
                tracing::info!(
                    subscriber_email = %email,
                    source = form_id,
                    timestamp = ?OffsetDateTime::now_utc(),
                    "Newsletter subscription tracked."
                );
            }
            Err(e) => {
                tracing::error!(
                    error.message = %e,
                    error.cause_chain = ?e,
                    "Failed to persist the new subscriber."
                );
                let failure = SubscribeError::Storage(e);
                self.notifier.emit(
                    Scope::form(form_id),
                    &failure.to_string(),
                    failure.severity(),
                );
            }
        }
    }

    /// Page-load hook: an `unsubscribe` query parameter triggers the
    /// removal path before any user interaction.
    #[tracing::instrument(name = "Processing page-load parameters", skip(self, query))]
    pub fn handle_page_load(&self, query: &str) {
        if let Some(email) = query_param(query, "unsubscribe") {
            self.unsubscribe(&email);
        }
    }

    #[tracing::instrument(name = "Unsubscribing", skip(self), fields(subscriber_email = %email))]
    fn unsubscribe(&self, email: &str) {
        match self.subscribers.remove(email) {
            Ok(()) => {
                self.notifier
                    .emit(Scope::Global, UNSUBSCRIBED_MESSAGE, Severity::Info)
            }
            Err(e) => {
                tracing::error!(
                    error.message = %e,
                    error.cause_chain = ?e,
                    "Failed to remove the subscriber."
                );
                let failure = SubscribeError::Storage(e);
                self.notifier
                    .emit(Scope::Global, &failure.to_string(), failure.severity());
            }
        }
    }

    /// Overwrites the whole preference record. Values arrive as the raw
    /// strings carried by the dialog's inputs; unknown ones are dropped.
    #[tracing::instrument(name = "Saving newsletter preferences", skip(self))]
    pub fn save_preferences(&self, topics: &[String], frequency: &str) {
        let topics: Vec<Topic> = topics
            .iter()
            .filter_map(|raw| match raw.parse() {
                Ok(topic) => Some(topic),
                Err(_) => {
                    tracing::debug!(value = %raw, "Ignoring unknown topic.");
                    None
                }
            })
            .collect();
        let frequency = frequency.parse().unwrap_or_else(|_| {
            tracing::debug!(value = %frequency, "Unknown frequency, falling back to the default.");
            Frequency::default()
        });
        let preferences = Preferences { topics, frequency };
        match self.preferences.save(&preferences) {
            Ok(()) => {
                self.notifier
                    .emit(Scope::Global, PREFERENCES_SAVED_MESSAGE, Severity::Success)
            }
            Err(e) => {
                tracing::error!(
                    error.message = %e,
                    error.cause_chain = ?e,
                    "Failed to persist the preferences."
                );
                let failure = SubscribeError::Storage(e);
                self.notifier
                    .emit(Scope::Global, &failure.to_string(), failure.severity());
            }
        }
    }
}

/// Extracts one percent-decoded value from a raw query string. `+` is
/// treated as a space, matching `URLSearchParams`.
pub(crate) fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (percent_decode(key) == name).then(|| percent_decode(value))
        })
}

fn percent_decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw,
    }
}

pub(crate) fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
