//! Extraction engine.
//!
//! Owns a suffix trie built once from a rule list and reused across
//! calls. The trie sits behind an `Arc` so a reload builds a fresh trie
//! and swaps the reference; in-flight extractions keep reading the trie
//! they started with. Successful extractions are memoized in an LRU
//! cache keyed by url and per-call flags.

use std::num::NonZeroUsize;
use std::sync::Arc;

use log::debug;
use lru::LruCache;
use parking_lot::{Mutex, RwLock};

use crate::error::Result;
use crate::extract::extract_url;
use crate::matcher::SuffixTrie;
use crate::psl;
use crate::types::{CacheKey, ExtractOptions, ExtractResult, SuffixRules};

/// URL extraction engine with a shared suffix trie and result cache.
///
/// ## Example
///
/// ```
/// use domain_extract_r::{ExtractOptions, TldExtractor};
///
/// let extractor = TldExtractor::with_builtin_rules(ExtractOptions::default());
/// let result = extractor.extract("https://maps.google.com").unwrap();
/// assert_eq!(result.registered_domain, "google.com");
/// ```
pub struct TldExtractor {
    trie: RwLock<Arc<SuffixTrie>>,
    options: ExtractOptions,
    cache: Mutex<LruCache<CacheKey, ExtractResult>>,
}

impl TldExtractor {
    /// Create an engine from a rule list.
    ///
    /// `options.include_private_suffixes` selects the active rule set;
    /// the trie is built here and only replaced by [`reload`](Self::reload).
    pub fn new(rules: &SuffixRules, options: ExtractOptions) -> Self {
        let trie = SuffixTrie::build(&rules.merged(options.include_private_suffixes));
        let cache_size =
            NonZeroUsize::new(options.cache_size).unwrap_or(NonZeroUsize::new(1).unwrap());
        Self {
            trie: RwLock::new(Arc::new(trie)),
            options,
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// Create an engine from the built-in fallback rule list.
    pub fn with_builtin_rules(options: ExtractOptions) -> Self {
        Self::new(psl::builtin_rules(), options)
    }

    /// Extract with the engine's default options.
    pub fn extract(&self, url: &str) -> Result<ExtractResult> {
        self.extract_with(url, &self.options)
    }

    /// Extract with per-call options.
    pub fn extract_with(&self, url: &str, options: &ExtractOptions) -> Result<ExtractResult> {
        let key = CacheKey::from_request(url, options);
        if let Some(hit) = self.cache.lock().get(&key) {
            return Ok(hit.clone());
        }

        // Arc clone keeps this call on one trie across a concurrent reload
        let trie = self.trie.read().clone();
        let result = extract_url(url, &trie, options)?;

        self.cache.lock().put(key, result.clone());
        Ok(result)
    }

    /// Rebuild the trie from a refreshed rule list and swap it in.
    ///
    /// The cache is cleared so stale splits cannot outlive the old rules.
    pub fn reload(&self, rules: &SuffixRules) {
        let trie = Arc::new(SuffixTrie::build(
            &rules.merged(self.options.include_private_suffixes),
        ));
        *self.trie.write() = trie;
        self.cache.lock().clear();
        debug!("suffix trie reloaded from {} rules", rules.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HostType;

    fn rules() -> SuffixRules {
        SuffixRules::new(
            vec!["com".to_string(), "co.uk".to_string()],
            vec!["blogspot.com".to_string()],
        )
    }

    #[test]
    fn test_extract_with_defaults() {
        let extractor = TldExtractor::new(&rules(), ExtractOptions::default());
        let result = extractor.extract("https://www.example.co.uk").unwrap();
        assert_eq!(result.sub_domain, "www");
        assert_eq!(result.domain, "example");
        assert_eq!(result.suffix, "co.uk");
    }

    #[test]
    fn test_private_suffix_toggle() {
        let with_private = TldExtractor::new(&rules(), ExtractOptions::default());
        let result = with_private.extract("https://google.blogspot.com").unwrap();
        assert_eq!(result.domain, "google");
        assert_eq!(result.suffix, "blogspot.com");
        assert_eq!(result.sub_domain, "");

        let without_private = TldExtractor::new(
            &rules(),
            ExtractOptions::default().with_private_suffixes(false),
        );
        let result = without_private
            .extract("https://google.blogspot.com")
            .unwrap();
        assert_eq!(result.sub_domain, "google");
        assert_eq!(result.domain, "blogspot");
        assert_eq!(result.suffix, "com");
    }

    #[test]
    fn test_cache_returns_equal_results() {
        let extractor = TldExtractor::new(&rules(), ExtractOptions::default());
        let url = "https://maps.google.com/path";
        let first = extractor.extract(url).unwrap();
        let second = extractor.extract(url).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_per_call_options_bypass_defaults() {
        let extractor = TldExtractor::new(&rules(), ExtractOptions::default());
        let url = "https://maps.google.com";
        assert_eq!(extractor.extract(url).unwrap().sub_domain, "maps");

        let ignored = extractor
            .extract_with(url, &ExtractOptions::default().with_ignore_sub_domains(true))
            .unwrap();
        assert_eq!(ignored.sub_domain, "");
        assert_eq!(ignored.domain, "google");
    }

    #[test]
    fn test_reload_swaps_rules() {
        let extractor = TldExtractor::new(&rules(), ExtractOptions::default());
        assert_eq!(extractor.extract("https://example.dev").unwrap().suffix, "");

        let refreshed = SuffixRules::new(vec!["dev".to_string()], vec![]);
        extractor.reload(&refreshed);
        let result = extractor.extract("https://example.dev").unwrap();
        assert_eq!(result.suffix, "dev");
        assert_eq!(result.domain, "example");
    }

    #[test]
    fn test_concurrent_extraction() {
        let extractor = Arc::new(TldExtractor::new(&rules(), ExtractOptions::default()));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let extractor = extractor.clone();
                std::thread::spawn(move || {
                    let url = format!("https://host{}.example.com", i);
                    let result = extractor.extract(&url).unwrap();
                    assert_eq!(result.host_type, HostType::HostName);
                    assert_eq!(result.domain, "example");
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn test_zero_cache_size_is_clamped() {
        let extractor =
            TldExtractor::new(&rules(), ExtractOptions::default().with_cache_size(0));
        assert!(extractor.extract("https://example.com").is_ok());
    }
}
