/// Canonical form used as the membership key for the subscriber list:
/// surrounding whitespace stripped, everything lower-cased.
pub fn normalize_email(s: &str) -> String {
    s.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    /// Returns `Ok(SubscriberEmail)` holding the normalized address if the
    /// input looks like `localpart@domain.tld`, `Err(String)` otherwise.
    ///
    /// The check is deliberately shallow: at least one non-whitespace,
    /// non-`@` run before the `@`, one after it containing a literal dot
    /// with a non-empty tail, and no whitespace anywhere. Deliverability is
    /// not our problem; the address is only ever a key in a local list.
    pub fn parse(s: String) -> Result<SubscriberEmail, String> {
        let normalized = normalize_email(&s);
        if is_valid_shape(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(format!("{} is not a valid subscriber email.", s))
        }
    }
}

fn is_valid_shape(s: &str) -> bool {
    if s.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    // A dot somewhere inside the domain, with at least one character on
    // either side of it.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SubscriberEmail> for String {
    fn from(val: SubscriberEmail) -> Self {
        val.0
    }
}

impl std::fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // We just forward to the Display implementation of
        // the wrapped String.
        self.0.fmt(f)
    }
}
