//! Language model and lookup helpers.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};

/// A language the backend can translate from or to.
///
/// Loaded once at startup; identity is the `code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub code: String,
    pub name: String,
}

impl Language {
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Removes later entries whose code was already seen, keeping the first occurrence.
#[must_use]
pub fn dedup_by_code(languages: Vec<Language>) -> Vec<Language> {
    let mut seen = std::collections::HashSet::new();
    languages
        .into_iter()
        .filter(|language| seen.insert(language.code.clone()))
        .collect()
}

/// Resolves user input to a language code.
///
/// Exact code matches win (case-insensitive), then exact names, then the best
/// fuzzy match on the language name. Returns `None` when nothing matches.
///
/// # Examples
///
/// ```
/// use translaterm::domain::{resolve_language, Language};
///
/// let languages = vec![Language::new("en", "English"), Language::new("es", "Spanish")];
/// assert_eq!(resolve_language(&languages, "ES"), Some("es"));
/// assert_eq!(resolve_language(&languages, "span"), Some("es"));
/// assert_eq!(resolve_language(&languages, "klingon"), None);
/// ```
#[must_use]
pub fn resolve_language<'a>(languages: &'a [Language], query: &str) -> Option<&'a str> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    if let Some(language) = languages
        .iter()
        .find(|l| l.code.eq_ignore_ascii_case(query) || l.name.eq_ignore_ascii_case(query))
    {
        return Some(language.code.as_str());
    }

    let matcher = SkimMatcherV2::default();
    let needle = query.to_lowercase();
    languages
        .iter()
        .filter_map(|l| {
            matcher
                .fuzzy_match(&l.name.to_lowercase(), &needle)
                .map(|score| (score, l))
        })
        .max_by_key(|(score, _)| *score)
        .map(|(_, l)| l.code.as_str())
}
