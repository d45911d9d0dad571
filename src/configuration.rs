use std::time::Duration;

use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub storage: StorageSettings,
    pub timings: TimingSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct StorageSettings {
    /// File standing in for the browser's local storage.
    pub file: String,
    pub subscribers_key: String,
    pub preferences_key: String,
}

/// Artificial latency and UI timing knobs. The delays simulate network
/// round-trips; there is no real backend behind any of them.
#[derive(serde::Deserialize, Clone)]
pub struct TimingSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub subscribe_delay_ms: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub locator_delay_ms: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub load_more_delay_ms: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub notification_dismiss_ms: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub scroll_top_threshold_px: u32,
}

impl TimingSettings {
    pub fn subscribe_delay(&self) -> Duration {
        Duration::from_millis(self.subscribe_delay_ms)
    }

    pub fn locator_delay(&self) -> Duration {
        Duration::from_millis(self.locator_delay_ms)
    }

    pub fn load_more_delay(&self) -> Duration {
        Duration::from_millis(self.load_more_delay_ms)
    }

    pub fn notification_dismiss(&self) -> Duration {
        Duration::from_millis(self.notification_dismiss_ms)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::new(
            "configuration.yaml",
            config::FileFormat::Yaml,
        ))
        .build()?;
    settings.try_deserialize::<Settings>()
}
