use crate::surface::RenderSurface;

/// "Back to top" control: visible once the page is scrolled past the
/// threshold, hidden again above it.
pub struct ScrollTop {
    threshold: u32,
    visible: bool,
}

impl ScrollTop {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    pub fn on_scroll(&mut self, offset: u32, surface: &dyn RenderSurface) {
        let visible = offset > self.threshold;
        if visible != self.visible {
            self.visible = visible;
            surface.set_scroll_top_visible(visible);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
