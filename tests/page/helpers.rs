use std::sync::Arc;

use once_cell::sync::Lazy;

use littlebites_web::configuration::{Settings, StorageSettings, TimingSettings};
use littlebites_web::page::{Page, PageLayout};
use littlebites_web::storage::InMemoryStorage;
use littlebites_web::store::{PreferenceStore, SubscriberStore};
use littlebites_web::surface::PageModel;
use littlebites_web::telemetry::{get_subscriber, init_subscriber};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

/// A fully wired page over in-memory storage, plus independent handles on
/// the stores and the rendered model for assertions.
pub struct TestPage {
    pub page: Page,
    pub model: Arc<PageModel>,
    pub storage: Arc<InMemoryStorage>,
    pub subscribers: SubscriberStore,
    pub preferences: PreferenceStore,
}

pub fn test_settings() -> Settings {
    Settings {
        storage: StorageSettings {
            file: "unused-in-tests.json".to_string(),
            subscribers_key: "littlebites_subscribers".to_string(),
            preferences_key: "littlebites_newsletter_preferences".to_string(),
        },
        timings: TimingSettings {
            subscribe_delay_ms: 2_000,
            locator_delay_ms: 2_000,
            load_more_delay_ms: 1_500,
            notification_dismiss_ms: 5_000,
            scroll_top_threshold_px: 300,
        },
    }
}

pub fn spawn_page() -> TestPage {
    Lazy::force(&TRACING);

    let settings = test_settings();
    let storage = Arc::new(InMemoryStorage::default());
    let model = Arc::new(PageModel::new());
    let page = Page::build(
        &settings,
        PageLayout::little_bites(),
        storage.clone(),
        model.clone(),
    );
    let subscribers = SubscriberStore::new(
        storage.clone(),
        settings.storage.subscribers_key.clone(),
    );
    let preferences = PreferenceStore::new(
        storage.clone(),
        settings.storage.preferences_key.clone(),
    );

    TestPage {
        page,
        model,
        storage,
        subscribers,
        preferences,
    }
}
