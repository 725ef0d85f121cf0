//! Free-text street matcher.

/// Case-insensitive literal substring matcher over street names.
///
/// An empty query matches everything. Otherwise both sides are folded to
/// Unicode uppercase and the query must appear as a substring of the street
/// name. Characters such as `.` or `*` have no special meaning.
///
/// # Examples
///
/// ```
/// use collection_server::view::StreetMatcher;
///
/// let m = StreetMatcher::new("alfar");
/// assert!(m.matches("Alfareros"));
/// assert!(!m.matches("Hidalgo"));
///
/// assert!(StreetMatcher::new("").matches("anything"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreetMatcher {
    /// Uppercased query; `None` when the query is empty.
    needle: Option<String>,
}

impl StreetMatcher {
    /// Build a matcher from user input.
    pub fn new(text: &str) -> Self {
        let needle = (!text.is_empty()).then(|| text.to_uppercase());
        Self { needle }
    }

    /// Whether the matcher filters anything at all.
    pub fn is_active(&self) -> bool {
        self.needle.is_some()
    }

    /// Whether a street name passes the matcher.
    pub fn matches(&self, street_name: &str) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => street_name.to_uppercase().contains(needle.as_str()),
        }
    }
}
