use std::collections::HashSet;
use std::time::Duration;

use crate::domain::LocationQuery;
use crate::notify::{Notifier, Scope, Severity};
use crate::surface::RenderSurface;

pub const LOADING_LABEL: &str = "Loading...";
pub const LOADED_MESSAGE: &str = "More content loaded successfully!";
pub const SEARCHING_LABEL: &str = "Searching...";
pub const EMPTY_LOCATION_MESSAGE: &str = "Please enter a location to search";
pub const INVALID_LOCATION_MESSAGE: &str = "Please enter a valid location to search";

pub fn found_stores_message(location: &LocationQuery) -> String {
    format!("Found 12 stores near \"{location}\"")
}

/// "Load more" buttons: fake a fetch, then celebrate. The button is
/// disabled with a busy label for the duration of the fake latency.
pub struct LoadMore {
    buttons: HashSet<String>,
    delay: Duration,
}

impl LoadMore {
    pub fn new(buttons: impl IntoIterator<Item = String>, delay: Duration) -> Self {
        Self {
            buttons: buttons.into_iter().collect(),
            delay,
        }
    }

    #[tracing::instrument(name = "Loading more content", skip(self, surface, notifier))]
    pub async fn activate(&self, button: &str, surface: &dyn RenderSurface, notifier: &Notifier) {
        if !self.buttons.contains(button) {
            tracing::debug!(button, "Click for a button this page does not have.");
            return;
        }
        surface.set_control_busy(button, LOADING_LABEL);
        tokio::time::sleep(self.delay).await;
        surface.restore_control(button);
        notifier.emit(Scope::Global, LOADED_MESSAGE, Severity::Success);
    }
}

/// Store locator: validates the search term, fakes the lookup, reports a
/// canned result. There is no store database behind it.
pub struct StoreLocator {
    form: String,
    field: String,
    delay: Duration,
}

impl StoreLocator {
    pub fn new(form: impl Into<String>, field: impl Into<String>, delay: Duration) -> Self {
        Self {
            form: form.into(),
            field: field.into(),
            delay,
        }
    }

    pub fn form_id(&self) -> &str {
        &self.form
    }

    #[tracing::instrument(name = "Searching for stores", skip(self, surface, notifier))]
    pub async fn search(&self, surface: &dyn RenderSurface, notifier: &Notifier) {
        let raw = surface
            .field_value(&self.form, &self.field)
            .unwrap_or_default();
        if LocationQuery::is_empty_input(&raw) {
            notifier.emit(Scope::Global, EMPTY_LOCATION_MESSAGE, Severity::Info);
            return;
        }
        let location = match LocationQuery::parse(raw) {
            Ok(location) => location,
            Err(e) => {
                tracing::debug!(error.message = %e, "Rejecting the locator input.");
                notifier.emit(Scope::Global, INVALID_LOCATION_MESSAGE, Severity::Error);
                return;
            }
        };
        surface.set_control_busy(&self.form, SEARCHING_LABEL);
        tokio::time::sleep(self.delay).await;
        surface.restore_control(&self.form);
        notifier.emit(
            Scope::Global,
            &found_stores_message(&location),
            Severity::Success,
        );
    }
}
