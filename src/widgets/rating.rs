use crate::surface::RenderSurface;

/// Star-rating input: hovering star `i` highlights stars `0..=i`, leaving
/// falls back to the committed selection, clicking commits.
pub struct RatingInput {
    id: String,
    stars: usize,
    selected: Option<usize>,
}

impl RatingInput {
    pub fn new(id: impl Into<String>, stars: usize) -> Self {
        Self {
            id: id.into(),
            stars,
            selected: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn hover(&self, index: usize, surface: &dyn RenderSurface) {
        if index < self.stars {
            surface.set_stars_highlighted(&self.id, index + 1);
        }
    }

    pub fn leave(&self, surface: &dyn RenderSurface) {
        let committed = self.selected.map(|index| index + 1).unwrap_or(0);
        surface.set_stars_highlighted(&self.id, committed);
    }

    pub fn select(&mut self, index: usize, surface: &dyn RenderSurface) {
        if index < self.stars {
            self.selected = Some(index);
            surface.set_stars_highlighted(&self.id, index + 1);
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}
