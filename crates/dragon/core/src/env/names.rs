//! Display-name normalization used by offspring name synthesis.

/// Normalizes a name fragment (capitalization, length).
pub trait NameFormatter: Send + Sync {
    fn format(&self, fragment: &str) -> String;
}

/// Upper-cases the first character and lower-cases the rest, optionally
/// truncating to `max_chars` characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TitleCaseFormatter {
    pub max_chars: Option<usize>,
}

impl TitleCaseFormatter {
    pub const fn new() -> Self {
        Self { max_chars: None }
    }

    pub const fn with_max_chars(max_chars: usize) -> Self {
        Self {
            max_chars: Some(max_chars),
        }
    }
}

impl NameFormatter for TitleCaseFormatter {
    fn format(&self, fragment: &str) -> String {
        let limit = self.max_chars.unwrap_or(usize::MAX);
        let mut formatted = String::with_capacity(fragment.len());
        for (index, ch) in fragment.chars().take(limit).enumerate() {
            if index == 0 {
                formatted.extend(ch.to_uppercase());
            } else {
                formatted.extend(ch.to_lowercase());
            }
        }
        formatted
    }
}
