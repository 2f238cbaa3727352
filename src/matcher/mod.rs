//! Public-suffix matching module.
//!
//! A compressed trie compiled once from PSL rule strings, walked right to
//! left one label at a time to find the longest matching suffix, with
//! wildcard (`*.tld`) and exception (`!label.tld`) override semantics.
//!
//! ## Example
//!
//! ```
//! use domain_extract_r::matcher::{SuffixTrie, WalkStep};
//!
//! let trie = SuffixTrie::build(&["com", "co.uk"]);
//! let mut walker = trie.walker();
//!
//! assert!(matches!(walker.advance("com"), WalkStep::Consumed));
//! assert!(matches!(walker.advance("google"), WalkStep::Stopped));
//! assert_eq!(walker.matched(), 1);
//! ```

mod trie;

pub use trie::{SuffixTrie, SuffixWalker, WalkStep};
