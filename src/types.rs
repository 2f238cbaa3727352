use serde::Serialize;

/// Default LRU cache size for extraction results
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Classification of the host portion of a URL
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum HostType {
    /// No host was present in the input
    #[default]
    None,
    /// A domain name (possibly with subdomain and public suffix)
    HostName,
    /// A dotted-decimal IPv4 literal
    Ipv4,
    /// A bracketed IPv6 literal
    Ipv6,
}

/// Structural components extracted from a URL-like string.
///
/// Empty strings mean the component was absent. For IP literals the
/// address is reported in both `domain` and `registered_domain`, with
/// `suffix` and `sub_domain` always empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractResult {
    /// Scheme including its trailing slashes (e.g. "https://"), verbatim
    pub scheme: String,
    /// Everything before the host-delimiting '@', verbatim
    pub user_info: String,
    /// Labels left of the registered domain
    pub sub_domain: String,
    /// The registrable label immediately left of the suffix
    pub domain: String,
    /// The matched public suffix (possibly multi-label, e.g. "co.uk")
    pub suffix: String,
    /// `domain` joined to `suffix` by the separator that preceded the suffix
    pub registered_domain: String,
    /// Decimal port digits, verbatim
    pub port: String,
    /// Everything after the first path/query/fragment delimiter
    pub path: String,
    /// Host classification
    pub host_type: HostType,
}

/// Extraction configuration.
///
/// `ignore_sub_domains` and `convert_to_punycode` apply per extraction
/// call; `include_private_suffixes` selects the rule set at trie build
/// time and `cache_size` bounds the engine's result cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Suppress subdomain extraction (everything left of the domain is dropped)
    pub ignore_sub_domains: bool,
    /// Convert the host to ASCII-compatible encoding before suffix matching
    pub convert_to_punycode: bool,
    /// Merge private PSL rules into the active rule set
    pub include_private_suffixes: bool,
    /// LRU cache size for extraction results
    pub cache_size: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            ignore_sub_domains: false,
            convert_to_punycode: false,
            include_private_suffixes: true,
            cache_size: DEFAULT_CACHE_SIZE,
        }
    }
}

impl ExtractOptions {
    /// Create options with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress subdomain extraction.
    pub fn with_ignore_sub_domains(mut self, ignore: bool) -> Self {
        self.ignore_sub_domains = ignore;
        self
    }

    /// Convert hosts to punycode (ACE) before matching.
    pub fn with_convert_to_punycode(mut self, convert: bool) -> Self {
        self.convert_to_punycode = convert;
        self
    }

    /// Include private PSL rules when building the trie.
    pub fn with_private_suffixes(mut self, include: bool) -> Self {
        self.include_private_suffixes = include;
        self
    }

    /// Set the result cache size.
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }
}

/// Suffix rule list split into the two PSL partitions.
///
/// Rule strings follow the PSL textual grammar: a dot-separated label
/// sequence, optionally prefixed with `*.` (wildcard) or `!` (exception).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixRules {
    /// Public (ICANN) rules
    pub icann: Vec<String>,
    /// Private domain rules
    pub private: Vec<String>,
}

impl SuffixRules {
    /// Create a rule list from the two partitions.
    pub fn new(icann: Vec<String>, private: Vec<String>) -> Self {
        Self { icann, private }
    }

    /// The active rule sequence: ICANN rules, optionally followed by the
    /// private partition.
    pub fn merged(&self, include_private: bool) -> Vec<&str> {
        let mut rules: Vec<&str> = self.icann.iter().map(String::as_str).collect();
        if include_private {
            rules.extend(self.private.iter().map(String::as_str));
        }
        rules
    }

    /// Total number of rules across both partitions.
    pub fn len(&self) -> usize {
        self.icann.len() + self.private.len()
    }

    /// Check if both partitions are empty.
    pub fn is_empty(&self) -> bool {
        self.icann.is_empty() && self.private.is_empty()
    }
}

/// Cache key for the extraction result LRU cache
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct CacheKey {
    pub url: String,
    pub ignore_sub_domains: bool,
    pub convert_to_punycode: bool,
}

impl CacheKey {
    pub fn from_request(url: &str, options: &ExtractOptions) -> Self {
        Self {
            url: url.to_string(),
            ignore_sub_domains: options.ignore_sub_domains,
            convert_to_punycode: options.convert_to_punycode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = ExtractOptions::new()
            .with_ignore_sub_domains(true)
            .with_convert_to_punycode(true)
            .with_private_suffixes(false)
            .with_cache_size(16);
        assert!(options.ignore_sub_domains);
        assert!(options.convert_to_punycode);
        assert!(!options.include_private_suffixes);
        assert_eq!(options.cache_size, 16);
    }

    #[test]
    fn test_options_defaults() {
        let options = ExtractOptions::default();
        assert!(!options.ignore_sub_domains);
        assert!(!options.convert_to_punycode);
        assert!(options.include_private_suffixes);
        assert_eq!(options.cache_size, DEFAULT_CACHE_SIZE);
    }

    #[test]
    fn test_merged_respects_private_flag() {
        let rules = SuffixRules::new(
            vec!["com".to_string(), "co.uk".to_string()],
            vec!["blogspot.com".to_string()],
        );
        assert_eq!(rules.merged(false), vec!["com", "co.uk"]);
        assert_eq!(rules.merged(true), vec!["com", "co.uk", "blogspot.com"]);
        assert_eq!(rules.len(), 3);
        assert!(!rules.is_empty());
    }

    #[test]
    fn test_cache_key_distinguishes_flags() {
        let url = "https://example.com";
        let a = CacheKey::from_request(url, &ExtractOptions::default());
        let b = CacheKey::from_request(
            url,
            &ExtractOptions::default().with_ignore_sub_domains(true),
        );
        assert_ne!(a, b);
    }

    #[test]
    fn test_default_result_is_empty() {
        let result = ExtractResult::default();
        assert_eq!(result.host_type, HostType::None);
        assert!(result.domain.is_empty());
        assert!(result.registered_domain.is_empty());
    }
}
