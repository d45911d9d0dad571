use crate::surface::RenderSurface;

pub const SHOW_ALL_TAG: &str = "all";

/// A filterable card, identified by the tag its markup carries.
#[derive(Debug, Clone)]
pub struct Card {
    pub id: String,
    pub category: String,
}

impl Card {
    pub fn new(id: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
        }
    }
}

/// Category filtering for product/blog card grids: one active filter
/// button, each card shown iff the filter is "all" or matches its category.
pub struct CardFilter {
    cards: Vec<Card>,
    active: String,
}

impl CardFilter {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            active: SHOW_ALL_TAG.to_string(),
        }
    }

    pub fn apply(&mut self, tag: &str, surface: &dyn RenderSurface) {
        self.active = tag.to_string();
        surface.set_active_filter(tag);
        for card in &self.cards {
            let visible = tag == SHOW_ALL_TAG || card.category == tag;
            surface.set_card_visible(&card.id, visible);
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }
}
