use strum::{Display, EnumString};

/// Newsletter topics a subscriber can opt into. The set is fixed by the
/// preferences dialog markup.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, serde::Serialize, serde::Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    ProductUpdates,
    ParentingTips,
    Recipes,
    Promotions,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Display,
    EnumString,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    #[default]
    Weekly,
    Biweekly,
    Monthly,
}

/// The whole preference record is overwritten on every save; there is no
/// per-field patching and no history.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Preferences {
    pub topics: Vec<Topic>,
    pub frequency: Frequency,
}
