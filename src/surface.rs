use std::collections::HashMap;
use std::sync::Mutex;

use crate::notify::{Notification, Scope};

/// The rendering seam between the interaction logic and whatever actually
/// draws the page. Handlers never touch a real DOM; they describe the
/// mutation and the surface applies it. Targeting an anchor the page does
/// not have degrades to a silent no-op.
pub trait RenderSurface: Send + Sync {
    fn mount_notification(&self, scope: &Scope, notification: &Notification);
    fn clear_notification(&self, scope: &Scope);

    fn field_value(&self, form: &str, field: &str) -> Option<String>;
    fn set_field_error(&self, form: &str, field: &str, message: &str);
    fn clear_field_error(&self, form: &str, field: &str);
    fn reset_form(&self, form: &str);

    fn set_control_busy(&self, form: &str, label: &str);
    fn restore_control(&self, form: &str);

    fn set_card_visible(&self, card: &str, visible: bool);
    fn set_active_filter(&self, tag: &str);
    fn set_accordion_open(&self, item: &str, open: bool);
    fn set_stars_highlighted(&self, rating: &str, count: usize);
    fn set_scroll_top_visible(&self, visible: bool);
    fn set_nav_open(&self, open: bool);
}

/// Submit-control state as rendered: `busy_label` is `Some` while the
/// control shows a busy indicator, `None` when it shows its markup label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlView {
    pub busy_label: Option<String>,
    pub disabled: bool,
}

#[derive(Default)]
struct PageInner {
    toast: Option<Notification>,
    inline: HashMap<String, Notification>,
    fields: HashMap<(String, String), String>,
    field_errors: HashMap<(String, String), String>,
    controls: HashMap<String, ControlView>,
    cards: HashMap<String, bool>,
    active_filter: Option<String>,
    open_accordion_item: Option<String>,
    stars: HashMap<String, usize>,
    scroll_top_visible: bool,
    nav_open: bool,
}

/// Headless page model: the crate's own `RenderSurface`, a queryable
/// snapshot of what a browser would be showing. The binary renders onto it
/// and logs every mutation; tests assert against it.
#[derive(Default)]
pub struct PageModel {
    inner: Mutex<PageInner>,
}

impl PageModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates the user typing into an input, the one page mutation that
    /// originates outside the interaction logic.
    pub fn type_into(&self, form: &str, field: &str, value: &str) {
        let mut inner = self.lock();
        inner
            .fields
            .insert((form.to_string(), field.to_string()), value.to_string());
    }

    pub fn toast(&self) -> Option<Notification> {
        self.lock().toast.clone()
    }

    pub fn inline_message(&self, form: &str) -> Option<Notification> {
        self.lock().inline.get(form).cloned()
    }

    pub fn field_error(&self, form: &str, field: &str) -> Option<String> {
        self.lock()
            .field_errors
            .get(&(form.to_string(), field.to_string()))
            .cloned()
    }

    pub fn control(&self, form: &str) -> ControlView {
        self.lock().controls.get(form).cloned().unwrap_or_default()
    }

    pub fn visible_cards(&self) -> Vec<String> {
        let inner = self.lock();
        let mut cards: Vec<String> = inner
            .cards
            .iter()
            .filter(|(_, visible)| **visible)
            .map(|(id, _)| id.clone())
            .collect();
        cards.sort();
        cards
    }

    pub fn active_filter(&self) -> Option<String> {
        self.lock().active_filter.clone()
    }

    pub fn open_accordion_item(&self) -> Option<String> {
        self.lock().open_accordion_item.clone()
    }

    pub fn highlighted_stars(&self, rating: &str) -> usize {
        self.lock().stars.get(rating).copied().unwrap_or(0)
    }

    pub fn scroll_top_visible(&self) -> bool {
        self.lock().scroll_top_visible
    }

    pub fn nav_open(&self) -> bool {
        self.lock().nav_open
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PageInner> {
        self.inner.lock().expect("page model lock poisoned")
    }
}

impl RenderSurface for PageModel {
    fn mount_notification(&self, scope: &Scope, notification: &Notification) {
        tracing::info!(
            scope = %scope,
            severity = %notification.severity,
            icon = %notification.icon(),
            text = %notification.text,
            "Notification rendered."
        );
        let mut inner = self.lock();
        match scope {
            Scope::Global => inner.toast = Some(notification.clone()),
            Scope::Form(form) => {
                inner.inline.insert(form.clone(), notification.clone());
            }
        }
    }

    fn clear_notification(&self, scope: &Scope) {
        tracing::info!(scope = %scope, "Notification removed.");
        let mut inner = self.lock();
        match scope {
            Scope::Global => inner.toast = None,
            Scope::Form(form) => {
                inner.inline.remove(form);
            }
        }
    }

    fn field_value(&self, form: &str, field: &str) -> Option<String> {
        let inner = self.lock();
        let value = inner.fields.get(&(form.to_string(), field.to_string()));
        if value.is_none() {
            tracing::debug!(form, field, "No value for field anchor.");
        }
        value.cloned()
    }

    fn set_field_error(&self, form: &str, field: &str, message: &str) {
        tracing::debug!(form, field, message, "Field error shown.");
        let mut inner = self.lock();
        inner
            .field_errors
            .insert((form.to_string(), field.to_string()), message.to_string());
    }

    fn clear_field_error(&self, form: &str, field: &str) {
        let mut inner = self.lock();
        inner
            .field_errors
            .remove(&(form.to_string(), field.to_string()));
    }

    fn reset_form(&self, form: &str) {
        tracing::debug!(form, "Form fields cleared.");
        let mut inner = self.lock();
        inner.fields.retain(|(f, _), _| f != form);
    }

    fn set_control_busy(&self, form: &str, label: &str) {
        tracing::debug!(form, label, "Submit control busy.");
        let mut inner = self.lock();
        inner.controls.insert(
            form.to_string(),
            ControlView {
                busy_label: Some(label.to_string()),
                disabled: true,
            },
        );
    }

    fn restore_control(&self, form: &str) {
        tracing::debug!(form, "Submit control restored.");
        let mut inner = self.lock();
        inner.controls.insert(form.to_string(), ControlView::default());
    }

    fn set_card_visible(&self, card: &str, visible: bool) {
        let mut inner = self.lock();
        inner.cards.insert(card.to_string(), visible);
    }

    fn set_active_filter(&self, tag: &str) {
        let mut inner = self.lock();
        inner.active_filter = Some(tag.to_string());
    }

    fn set_accordion_open(&self, item: &str, open: bool) {
        let mut inner = self.lock();
        if open {
            inner.open_accordion_item = Some(item.to_string());
        } else if inner.open_accordion_item.as_deref() == Some(item) {
            inner.open_accordion_item = None;
        }
    }

    fn set_stars_highlighted(&self, rating: &str, count: usize) {
        let mut inner = self.lock();
        inner.stars.insert(rating.to_string(), count);
    }

    fn set_scroll_top_visible(&self, visible: bool) {
        let mut inner = self.lock();
        inner.scroll_top_visible = visible;
    }

    fn set_nav_open(&self, open: bool) {
        let mut inner = self.lock();
        inner.nav_open = open;
    }
}
