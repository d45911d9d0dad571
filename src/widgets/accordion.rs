use std::collections::HashSet;

use crate::surface::RenderSurface;

/// FAQ accordion with an exclusivity rule: at most one item open; opening
/// an item closes the previous one; clicking the open item closes it.
pub struct Accordion {
    items: HashSet<String>,
    open: Option<String>,
}

impl Accordion {
    pub fn new(items: impl IntoIterator<Item = String>) -> Self {
        Self {
            items: items.into_iter().collect(),
            open: None,
        }
    }

    pub fn toggle(&mut self, item: &str, surface: &dyn RenderSurface) {
        if !self.items.contains(item) {
            tracing::debug!(item, "Toggle for an accordion item this page does not have.");
            return;
        }
        let was_open = self.open.as_deref() == Some(item);
        if let Some(previous) = self.open.take() {
            surface.set_accordion_open(&previous, false);
        }
        if !was_open {
            self.open = Some(item.to_string());
            surface.set_accordion_open(item, true);
        }
    }

    pub fn open_item(&self) -> Option<&str> {
        self.open.as_deref()
    }
}
