//! Word sourcing.
//!
//! Candidate words come from a pluggable backend:
//! - Remote: the Korean dictionary service, over HTTP
//! - Builtin: a fixed embedded list, used as the fallback
//! - Fixed: an in-memory list for tests and offline word sets
//!
//! [`WordProvider`] wraps a backend and absorbs its failures: any error or
//! shortfall from the primary source degrades to the builtin list with a
//! logged warning, so generation always receives a usable word set for a
//! feasible configuration.

use std::time::Duration;

use log::warn;

use crate::rng::Prng;

/// Result type for word-source operations.
pub type WordSourceResult<T> = Result<T, WordSourceError>;

/// Errors a word-source backend can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSourceError {
    /// Network/connection error
    Network(String),
    /// The service answered with something other than the expected XML
    InvalidResponse(String),
    /// Fewer eligible words than requested
    TooFewWords { wanted: usize, got: usize },
}

impl std::fmt::Display for WordSourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(e) => write!(f, "network error: {}", e),
            Self::InvalidResponse(e) => write!(f, "invalid response: {}", e),
            Self::TooFewWords { wanted, got } => {
                write!(f, "only {} of {} requested words are eligible", got, wanted)
            }
        }
    }
}

impl std::error::Error for WordSourceError {}

/// A backend that can supply candidate words.
pub trait WordSource {
    /// Return at least `count` distinct words, each at most `max_len`
    /// characters long.
    fn fetch_words(&self, count: usize, max_len: usize) -> WordSourceResult<Vec<String>>;

    /// Get backend name for diagnostics
    fn source_name(&self) -> &'static str;
}

// ==================== Remote Dictionary Backend ====================

/// Timeout applied to the dictionary lookup. Generation itself has no
/// deadline; this is the only externally bounded call.
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// How many entries to ask the service for per lookup.
const FETCH_BATCH: &str = "100";

const DEFAULT_API_URL: &str = "https://krdict.korean.go.kr/api/search";

/// Remote dictionary lookup over HTTP.
///
/// The service answers with an XML document whose `<item><word>` entries
/// hold the candidate words, sorted by popularity.
pub struct DictionaryApi {
    agent: ureq::Agent,
    base_url: String,
    api_key: String,
}

impl DictionaryApi {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(FETCH_TIMEOUT).build(),
            base_url,
            api_key,
        }
    }

    /// Configure from `WORDSEARCH_API_URL` / `WORDSEARCH_API_KEY`.
    /// Returns `None` when no key is set; the key is never embedded.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("WORDSEARCH_API_KEY").ok()?;
        let base_url = std::env::var("WORDSEARCH_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Some(Self::new(base_url, api_key))
    }
}

impl WordSource for DictionaryApi {
    fn fetch_words(&self, count: usize, max_len: usize) -> WordSourceResult<Vec<String>> {
        let response = self
            .agent
            .get(&self.base_url)
            .query("key", &self.api_key)
            .query("part", "word")
            .query("sort", "popular")
            .query("num", FETCH_BATCH)
            .call()
            .map_err(|e| WordSourceError::Network(e.to_string()))?;

        let body = response
            .into_string()
            .map_err(|e| WordSourceError::Network(e.to_string()))?;

        let words = parse_word_entries(&body, max_len)?;
        if words.len() < count {
            return Err(WordSourceError::TooFewWords {
                wanted: count,
                got: words.len(),
            });
        }
        Ok(words)
    }

    fn source_name(&self) -> &'static str {
        "dictionary service"
    }
}

/// Pull the word fields out of the service's XML payload, keeping only
/// distinct entries within the length limit.
fn parse_word_entries(xml: &str, max_len: usize) -> WordSourceResult<Vec<String>> {
    let doc = roxmltree::Document::parse(xml)
        .map_err(|e| WordSourceError::InvalidResponse(e.to_string()))?;

    let mut words: Vec<String> = Vec::new();
    for item in doc.descendants().filter(|n| n.has_tag_name("item")) {
        let text = item
            .children()
            .find(|n| n.has_tag_name("word"))
            .and_then(|n| n.text())
            .map(str::trim)
            .unwrap_or("");
        if text.is_empty() || text.chars().count() > max_len {
            continue;
        }
        if !words.iter().any(|w| w == text) {
            words.push(text.to_string());
        }
    }
    Ok(words)
}

// ==================== Builtin Fallback Backend ====================

/// Fallback word list, used whenever a primary source fails or comes up
/// short. Every entry is at most three characters.
pub const BUILTIN_WORDS: [&str; 12] = [
    "사과", "바나나", "딸기", "포도", "키위", "망고", "오렌지", "레몬", "수박", "참외", "자두",
    "복숭아",
];

/// The embedded fallback list as a word source.
pub struct BuiltinWords;

impl WordSource for BuiltinWords {
    fn fetch_words(&self, count: usize, max_len: usize) -> WordSourceResult<Vec<String>> {
        let words: Vec<String> = BUILTIN_WORDS
            .iter()
            .filter(|w| w.chars().count() <= max_len)
            .map(|w| w.to_string())
            .collect();
        if words.len() < count {
            return Err(WordSourceError::TooFewWords {
                wanted: count,
                got: words.len(),
            });
        }
        Ok(words)
    }

    fn source_name(&self) -> &'static str {
        "builtin list"
    }
}

// ==================== Fixed Backend ====================

/// In-memory source with a caller-supplied list, for tests and for
/// running against a known word set without any lookup.
pub struct FixedWords {
    words: Vec<String>,
}

impl FixedWords {
    pub fn new(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl WordSource for FixedWords {
    fn fetch_words(&self, count: usize, max_len: usize) -> WordSourceResult<Vec<String>> {
        let mut words: Vec<String> = Vec::new();
        for word in &self.words {
            if word.is_empty() || word.chars().count() > max_len {
                continue;
            }
            if !words.contains(word) {
                words.push(word.clone());
            }
        }
        if words.len() < count {
            return Err(WordSourceError::TooFewWords {
                wanted: count,
                got: words.len(),
            });
        }
        Ok(words)
    }

    fn source_name(&self) -> &'static str {
        "fixed list"
    }
}

// ==================== Provider ====================

/// Supplies word sets to the generator, absorbing source failures.
///
/// The only error that escapes is the infeasible case where even the
/// builtin list cannot satisfy the request; everything else degrades to
/// the fallback with a warning.
pub struct WordProvider {
    primary: Option<Box<dyn WordSource>>,
}

impl WordProvider {
    pub fn new(primary: Box<dyn WordSource>) -> Self {
        Self {
            primary: Some(primary),
        }
    }

    /// A provider that goes straight to the builtin list.
    pub fn builtin_only() -> Self {
        Self { primary: None }
    }

    /// Use the dictionary service when an API key is configured in the
    /// environment, the builtin list otherwise.
    pub fn from_env() -> Self {
        match DictionaryApi::from_env() {
            Some(api) => Self::new(Box::new(api)),
            None => {
                log::info!("no dictionary API key configured, using the builtin word list");
                Self::builtin_only()
            }
        }
    }

    /// A uniform random sample of exactly `count` distinct words, each at
    /// most `max_len` characters, drawn without replacement with the
    /// caller's PRNG so that seeded runs stay reproducible.
    pub fn pick(&self, count: usize, max_len: usize, rng: &mut Prng) -> WordSourceResult<Vec<String>> {
        if let Some(primary) = &self.primary {
            match primary.fetch_words(count, max_len) {
                Ok(pool) => return Ok(sample(pool, count, rng)),
                Err(err) => warn!(
                    "word lookup via {} failed ({}), falling back to the builtin list",
                    primary.source_name(),
                    err
                ),
            }
        }
        let pool = BuiltinWords.fetch_words(count, max_len)?;
        Ok(sample(pool, count, rng))
    }
}

fn sample(mut pool: Vec<String>, count: usize, rng: &mut Prng) -> Vec<String> {
    rng.shuffle(&mut pool);
    pool.truncate(count);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    impl WordSource for FailingSource {
        fn fetch_words(&self, _count: usize, _max_len: usize) -> WordSourceResult<Vec<String>> {
            Err(WordSourceError::Network("connection refused".into()))
        }

        fn source_name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn builtin_filters_by_length() {
        let words = BuiltinWords.fetch_words(3, 2).unwrap();
        assert!(words.iter().all(|w| w.chars().count() <= 2));
        assert!(words.contains(&"사과".to_string()));
        assert!(!words.contains(&"바나나".to_string()));
    }

    #[test]
    fn builtin_reports_shortfall() {
        let err = BuiltinWords.fetch_words(100, 3).unwrap_err();
        assert_eq!(
            err,
            WordSourceError::TooFewWords {
                wanted: 100,
                got: 12
            }
        );
    }

    #[test]
    fn provider_samples_exactly_count_distinct_words() {
        let provider = WordProvider::builtin_only();
        let mut rng = Prng::with_seed(3);
        let words = provider.pick(5, 3, &mut rng).unwrap();
        assert_eq!(words.len(), 5);
        for (i, word) in words.iter().enumerate() {
            assert!(!words[i + 1..].contains(word), "duplicate {:?}", word);
        }
    }

    #[test]
    fn provider_absorbs_primary_failure() {
        let provider = WordProvider::new(Box::new(FailingSource));
        let mut rng = Prng::with_seed(3);
        let words = provider.pick(3, 3, &mut rng).unwrap();
        assert_eq!(words.len(), 3);
        for word in &words {
            assert!(BUILTIN_WORDS.contains(&word.as_str()));
        }
    }

    #[test]
    fn provider_prefers_a_working_primary() {
        let provider = WordProvider::new(Box::new(FixedWords::new(&["하나", "둘", "셋"])));
        let mut rng = Prng::with_seed(9);
        let words = provider.pick(3, 2, &mut rng).unwrap();
        let mut sorted = words.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["둘", "셋", "하나"]);
    }

    #[test]
    fn provider_seeded_picks_repeat() {
        let provider = WordProvider::builtin_only();
        let mut a = Prng::with_seed(21);
        let mut b = Prng::with_seed(21);
        assert_eq!(
            provider.pick(4, 3, &mut a).unwrap(),
            provider.pick(4, 3, &mut b).unwrap()
        );
    }

    #[test]
    fn parse_extracts_eligible_distinct_words() {
        let xml = "<channel>\
            <item><word>사과</word></item>\
            <item><word>바나나</word></item>\
            <item><word>사과</word></item>\
            <item><word>고구마튀김</word></item>\
            <item><other>포도</other></item>\
            </channel>";
        let words = parse_word_entries(xml, 3).unwrap();
        assert_eq!(words, vec!["사과", "바나나"]);
    }

    #[test]
    fn parse_rejects_malformed_xml() {
        let err = parse_word_entries("<channel><item>", 3).unwrap_err();
        assert!(matches!(err, WordSourceError::InvalidResponse(_)));
    }
}
