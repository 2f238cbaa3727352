//! Domain Extract - A high-performance URL and public-suffix extraction engine for Rust
//!
//! This library splits URL-like strings into their structural components
//! and classifies the host, with support for:
//! - Scheme, user-info, port and path delimiting without full URL parsing
//! - Public Suffix List matching via a compressed trie (wildcard and
//!   exception rules included)
//! - Subdomain / domain / suffix / registered-domain splitting
//! - IPv4 and bracketed IPv6 literal hosts
//! - Internationalized label separators and punycode (ACE) conversion
//! - LRU caching and atomic rule-list reloads for high throughput
//!
//! # Example
//!
//! ```rust
//! use domain_extract_r::{ExtractOptions, HostType, TldExtractor};
//!
//! // Build one engine from a rule list, reuse it for every URL
//! let extractor = TldExtractor::with_builtin_rules(ExtractOptions::default());
//!
//! let result = extractor
//!     .extract("https://maps.google.com:8080/a/long/path/?query=42")
//!     .unwrap();
//! assert_eq!(result.scheme, "https://");
//! assert_eq!(result.sub_domain, "maps");
//! assert_eq!(result.domain, "google");
//! assert_eq!(result.suffix, "com");
//! assert_eq!(result.registered_domain, "google.com");
//! assert_eq!(result.port, "8080");
//! assert_eq!(result.path, "a/long/path/?query=42");
//!
//! // IP literals never go through the suffix trie
//! let result = extractor.extract("https://127.0.0.1:5000").unwrap();
//! assert_eq!(result.host_type, HostType::Ipv4);
//! assert_eq!(result.registered_domain, "127.0.0.1");
//! ```
//!
//! # Rule Lists
//!
//! Rules follow the PSL textual grammar:
//!
//! ```text
//! // comment
//! com
//! co.uk
//! *.ck
//! !www.ck
//! // ===BEGIN PRIVATE DOMAINS===
//! blogspot.com
//! ```
//!
//! Load a full list with [`psl::parse_rules`] or
//! [`psl::parse_rules_from_file`], or start from the built-in fallback
//! via [`TldExtractor::with_builtin_rules`]. Fetching and caching the
//! PSL file itself is left to the caller.

pub mod engine;
pub mod error;
pub mod extract;
pub mod ip;
pub mod labels;
pub mod matcher;
pub mod psl;
pub mod types;

// Re-export commonly used items
pub use engine::TldExtractor;
pub use error::{ExtractError, ExtractErrorKind, Result};
pub use extract::extract_url;
pub use ip::{is_ipv4, is_ipv6};
pub use matcher::{SuffixTrie, SuffixWalker, WalkStep};
pub use psl::{builtin_rules, parse_rules, parse_rules_from_file};
pub use types::{ExtractOptions, ExtractResult, HostType, SuffixRules, DEFAULT_CACHE_SIZE};
