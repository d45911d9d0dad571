use crate::surface::RenderSurface;

/// Mobile navigation state: the hamburger toggles it, following any nav
/// link closes it.
#[derive(Default)]
pub struct NavToggle {
    open: bool,
}

impl NavToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, surface: &dyn RenderSurface) {
        self.open = !self.open;
        surface.set_nav_open(self.open);
    }

    pub fn close(&mut self, surface: &dyn RenderSurface) {
        if self.open {
            self.open = false;
            surface.set_nav_open(false);
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
