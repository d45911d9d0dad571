use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::configuration::Settings;
use crate::forms::{FieldSpec, FormSpec, FormValidator};
use crate::notify::{Notifier, Scope, Severity};
use crate::storage::Storage;
use crate::store::{PreferenceStore, SubscriberStore};
use crate::subscription::NewsletterFlow;
use crate::surface::RenderSurface;
use crate::widgets::{
    Accordion, Card, CardFilter, LoadMore, NavToggle, RatingInput, ScrollTop, StoreLocator,
    SHOW_ALL_TAG,
};

pub const LIVE_CHAT_MESSAGE: &str =
    "Live chat feature coming soon! Please use our contact form or call us directly.";
pub const SOCIAL_LINKS_MESSAGE: &str = "Social media links coming soon!";

/// One user interaction, as delivered by whatever hosts the page. Handlers
/// run to completion in arrival order; there is no preemption inside a
/// single event.
#[derive(Debug, Clone)]
pub enum UiEvent {
    PageLoad { query: String },
    Submit { form: String },
    FilterSelected { tag: String },
    AccordionToggled { item: String },
    StarHovered { rating: String, index: usize },
    StarLeft { rating: String },
    StarSelected { rating: String, index: usize },
    Scrolled { offset: u32 },
    NavToggled,
    NavLinkFollowed,
    LoadMoreClicked { button: String },
    PreferencesSaved { topics: Vec<String>, frequency: String },
    LiveChatRequested,
    SocialLinkFollowed { href: Option<String> },
    NotificationDismissed { scope: Scope },
}

/// The interactive hooks a page exposes: which forms exist, which cards
/// can be filtered, which FAQ items fold. This is the DOM contract the
/// engine consumes; the markup itself is outside the crate.
pub struct PageLayout {
    pub newsletter_forms: Vec<String>,
    pub forms: Vec<FormSpec>,
    pub cards: Vec<Card>,
    pub faq_items: Vec<String>,
    pub ratings: Vec<(String, usize)>,
    pub load_more_buttons: Vec<String>,
    pub locator_form: String,
    pub locator_field: String,
}

impl PageLayout {
    /// The hooks present across the Little Bites pages.
    pub fn little_bites() -> Self {
        Self {
            newsletter_forms: vec![
                "newsletter-form".to_string(),
                "blog-newsletter-form".to_string(),
            ],
            forms: vec![FormSpec::new(
                "contact-form",
                vec![
                    FieldSpec::required_text("name"),
                    FieldSpec::required_email("email"),
                    FieldSpec::optional_text("subject"),
                    FieldSpec::required_text("message"),
                ],
            )],
            cards: vec![
                Card::new("product-purees-1", "purees"),
                Card::new("product-purees-2", "purees"),
                Card::new("product-snacks-1", "snacks"),
                Card::new("product-snacks-2", "snacks"),
                Card::new("product-meals-1", "meals"),
                Card::new("product-cereals-1", "cereals"),
            ],
            faq_items: vec![
                "faq-shipping".to_string(),
                "faq-ingredients".to_string(),
                "faq-storage".to_string(),
                "faq-allergens".to_string(),
            ],
            ratings: vec![("testimonial-rating".to_string(), 5)],
            load_more_buttons: vec!["load-more".to_string(), "load-more-posts".to_string()],
            locator_form: "store-locator".to_string(),
            locator_field: "location".to_string(),
        }
    }
}

/// All interactive behavior of one page, wired to an injected storage and
/// rendering surface.
pub struct Page {
    surface: Arc<dyn RenderSurface>,
    notifier: Notifier,
    newsletter: NewsletterFlow,
    validator: FormValidator,
    newsletter_forms: HashSet<String>,
    nav: NavToggle,
    filter: CardFilter,
    accordion: Accordion,
    ratings: HashMap<String, RatingInput>,
    scroll_top: ScrollTop,
    load_more: LoadMore,
    locator: StoreLocator,
}

impl Page {
    pub fn build(
        settings: &Settings,
        layout: PageLayout,
        storage: Arc<dyn Storage>,
        surface: Arc<dyn RenderSurface>,
    ) -> Page {
        let notifier = Notifier::new(
            Arc::clone(&surface),
            settings.timings.notification_dismiss(),
        );
        let subscribers = SubscriberStore::new(
            Arc::clone(&storage),
            settings.storage.subscribers_key.clone(),
        );
        let preferences =
            PreferenceStore::new(storage, settings.storage.preferences_key.clone());
        let newsletter = NewsletterFlow::new(
            subscribers,
            preferences,
            notifier.clone(),
            Arc::clone(&surface),
            settings.timings.subscribe_delay(),
        );
        let validator =
            FormValidator::new(layout.forms, notifier.clone(), Arc::clone(&surface));
        let mut filter = CardFilter::new(layout.cards);
        // Initial render state: every card visible, "all" active.
        filter.apply(SHOW_ALL_TAG, surface.as_ref());
        let ratings = layout
            .ratings
            .into_iter()
            .map(|(id, stars)| (id.clone(), RatingInput::new(id, stars)))
            .collect();
        Page {
            notifier,
            newsletter,
            validator,
            newsletter_forms: layout.newsletter_forms.into_iter().collect(),
            nav: NavToggle::new(),
            filter,
            accordion: Accordion::new(layout.faq_items),
            ratings,
            scroll_top: ScrollTop::new(settings.timings.scroll_top_threshold_px),
            load_more: LoadMore::new(
                layout.load_more_buttons,
                settings.timings.load_more_delay(),
            ),
            locator: StoreLocator::new(
                layout.locator_form,
                layout.locator_field,
                settings.timings.locator_delay(),
            ),
            surface,
        }
    }

    pub async fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::PageLoad { query } => self.newsletter.handle_page_load(&query),
            UiEvent::Submit { form } => {
                if self.newsletter_forms.contains(&form) {
                    self.newsletter.handle_submit(&form).await;
                } else if form == self.locator.form_id() {
                    self.locator
                        .search(self.surface.as_ref(), &self.notifier)
                        .await;
                } else {
                    self.validator.handle_submit(&form);
                }
            }
            UiEvent::FilterSelected { tag } => self.filter.apply(&tag, self.surface.as_ref()),
            UiEvent::AccordionToggled { item } => {
                self.accordion.toggle(&item, self.surface.as_ref())
            }
            UiEvent::StarHovered { rating, index } => {
                if let Some(input) = self.ratings.get(&rating) {
                    input.hover(index, self.surface.as_ref());
                } else {
                    tracing::debug!(rating, "Hover for a rating this page does not have.");
                }
            }
            UiEvent::StarLeft { rating } => {
                if let Some(input) = self.ratings.get(&rating) {
                    input.leave(self.surface.as_ref());
                }
            }
            UiEvent::StarSelected { rating, index } => {
                if let Some(input) = self.ratings.get_mut(&rating) {
                    input.select(index, self.surface.as_ref());
                }
            }
            UiEvent::Scrolled { offset } => {
                self.scroll_top.on_scroll(offset, self.surface.as_ref())
            }
            UiEvent::NavToggled => self.nav.toggle(self.surface.as_ref()),
            UiEvent::NavLinkFollowed => self.nav.close(self.surface.as_ref()),
            UiEvent::LoadMoreClicked { button } => {
                self.load_more
                    .activate(&button, self.surface.as_ref(), &self.notifier)
                    .await;
            }
            UiEvent::PreferencesSaved { topics, frequency } => {
                self.newsletter.save_preferences(&topics, &frequency)
            }
            UiEvent::LiveChatRequested => {
                self.notifier
                    .emit(Scope::Global, LIVE_CHAT_MESSAGE, Severity::Info)
            }
            UiEvent::SocialLinkFollowed { href } => match href.as_deref() {
                Some(href) if !href.is_empty() && href != "#" => {
                    tracing::info!(href, "Opening a social link in a new tab.");
                }
                _ => self
                    .notifier
                    .emit(Scope::Global, SOCIAL_LINKS_MESSAGE, Severity::Info),
            },
            UiEvent::NotificationDismissed { scope } => self.notifier.dismiss(&scope),
        }
    }
}
