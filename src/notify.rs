use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use strum::Display;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::surface::RenderSurface;

/// Severity of a notification; selects the icon and style class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "check-circle",
            Severity::Error => "exclamation-circle",
            Severity::Info => "info-circle",
        }
    }
}

/// Where a notification is anchored: the single global toast slot, or the
/// inline slot owned by one specific form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    Global,
    Form(String),
}

impl Scope {
    pub fn form(id: impl Into<String>) -> Self {
        Scope::Form(id.into())
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::Global => f.write_str("global"),
            Scope::Form(id) => f.write_str(id),
        }
    }
}

/// A rendered, transient message. The id ties the mounted element to its
/// auto-dismiss timer so a stale timer can never remove a successor.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub text: String,
    pub severity: Severity,
    pub created_at: OffsetDateTime,
}

impl Notification {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            severity,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn icon(&self) -> &'static str {
        self.severity.icon()
    }

    pub fn style_class(&self) -> String {
        format!("notification-{}", self.severity)
    }
}

struct Slot {
    id: Uuid,
    timer: tokio::task::JoinHandle<()>,
}

/// Single-slot notification emitter. Each scope holds at most one live
/// notification: emitting into an occupied slot removes the predecessor
/// and cancels its pending auto-dismiss first.
#[derive(Clone)]
pub struct Notifier {
    surface: Arc<dyn RenderSurface>,
    slots: Arc<Mutex<HashMap<Scope, Slot>>>,
    dismiss_after: Duration,
}

impl Notifier {
    pub fn new(surface: Arc<dyn RenderSurface>, dismiss_after: Duration) -> Self {
        Self {
            surface,
            slots: Arc::new(Mutex::new(HashMap::new())),
            dismiss_after,
        }
    }

    #[tracing::instrument(skip(self, text), fields(scope = %scope, severity = %severity))]
    pub fn emit(&self, scope: Scope, text: &str, severity: Severity) {
        let notification = Notification::new(text, severity);
        let id = notification.id;
        let mut slots = self.slots.lock().expect("notification slots lock poisoned");
        if let Some(previous) = slots.remove(&scope) {
            previous.timer.abort();
            self.surface.clear_notification(&scope);
        }
        self.surface.mount_notification(&scope, &notification);
        let timer = tokio::spawn(auto_dismiss(
            scope.clone(),
            id,
            Arc::clone(&self.slots),
            Arc::clone(&self.surface),
            self.dismiss_after,
        ));
        slots.insert(scope, Slot { id, timer });
    }

    /// Explicit close via the dismiss button: remove now, cancel the timer.
    pub fn dismiss(&self, scope: &Scope) {
        let mut slots = self.slots.lock().expect("notification slots lock poisoned");
        if let Some(slot) = slots.remove(scope) {
            slot.timer.abort();
            self.surface.clear_notification(scope);
        }
    }
}

async fn auto_dismiss(
    scope: Scope,
    id: Uuid,
    slots: Arc<Mutex<HashMap<Scope, Slot>>>,
    surface: Arc<dyn RenderSurface>,
    after: Duration,
) {
    tokio::time::sleep(after).await;
    let mut slots = slots.lock().expect("notification slots lock poisoned");
    // The slot may have been handed to a successor while we slept.
    let still_ours = slots.get(&scope).map(|slot| slot.id) == Some(id);
    if still_ours {
        slots.remove(&scope);
        surface.clear_notification(&scope);
    }
}
