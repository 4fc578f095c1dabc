//! Case-insensitive substring predicate over node names.

/// Matches node names that contain the needle, ignoring case.
///
/// The input text is used verbatim (no trimming), so `" a"` only matches
/// names that contain a space followed by an `a`. The empty predicate
/// matches every name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePredicate {
    text: String,
    needle: String,
}

impl NamePredicate {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            needle: text.to_lowercase(),
        }
    }

    /// The predicate as typed by the user.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, name: &str) -> bool {
        self.needle.is_empty() || name.to_lowercase().contains(&self.needle)
    }
}

impl From<&str> for NamePredicate {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
