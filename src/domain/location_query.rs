use unicode_segmentation::UnicodeSegmentation;

/// A store-locator search term, trimmed and sanity-checked.
#[derive(Debug, Clone)]
pub struct LocationQuery(String);

impl LocationQuery {
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim();
        let is_empty = trimmed.is_empty();
        let is_too_long = trimmed.graphemes(true).count() > 256;
        let forbidden_characters = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
        let contains_forbidden_characters =
            trimmed.chars().any(|g| forbidden_characters.contains(&g));
        if is_empty || is_too_long || contains_forbidden_characters {
            Err(format!("{} is not a valid location query.", s))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn is_empty_input(s: &str) -> bool {
        s.trim().is_empty()
    }
}

impl AsRef<str> for LocationQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
