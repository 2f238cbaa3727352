//! Public Suffix List rule loading.
//!
//! Parses the PSL textual grammar from an in-memory string or a local
//! file: blank lines and `//` comments are skipped, and the
//! `===BEGIN PRIVATE DOMAINS===` marker toggles subsequent rules into the
//! private partition. Network retrieval, on-disk caching and refresh
//! scheduling are the caller's concern.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use once_cell::sync::Lazy;

use crate::types::SuffixRules;

const PRIVATE_BEGIN_MARKER: &str = "===BEGIN PRIVATE DOMAINS===";
const PRIVATE_END_MARKER: &str = "===END PRIVATE DOMAINS===";

/// Parse PSL text into its ICANN and private partitions.
///
/// Rule lines are kept verbatim, including `*.` and `!` prefixes; anything
/// after the first whitespace on a line is ignored.
pub fn parse_rules(text: &str) -> SuffixRules {
    let mut icann = Vec::new();
    let mut private = Vec::new();
    let mut in_private = false;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(comment) = line.strip_prefix("//") {
            if comment.contains(PRIVATE_BEGIN_MARKER) {
                in_private = true;
            } else if comment.contains(PRIVATE_END_MARKER) {
                in_private = false;
            }
            continue;
        }
        // A rule is the first whitespace-separated token on the line
        let rule = match line.split_whitespace().next() {
            Some(rule) => rule.to_string(),
            None => continue,
        };
        if in_private {
            private.push(rule);
        } else {
            icann.push(rule);
        }
    }

    debug!(
        "parsed suffix rules: {} icann, {} private",
        icann.len(),
        private.len()
    );
    SuffixRules::new(icann, private)
}

/// Parse PSL rules from a local file.
pub fn parse_rules_from_file(path: impl AsRef<Path>) -> io::Result<SuffixRules> {
    let text = fs::read_to_string(path.as_ref())?;
    Ok(parse_rules(&text))
}

/// ICANN portion of the built-in fallback rule list
const BUILTIN_ICANN: &[&str] = &[
    "ac",
    "ac.uk",
    "at",
    "au",
    "be",
    "biz",
    "br",
    "ca",
    "ch",
    "*.ck",
    "!www.ck",
    "cn",
    "co",
    "co.in",
    "co.jp",
    "co.kr",
    "co.uk",
    "co.za",
    "com",
    "com.ar",
    "com.au",
    "com.br",
    "com.cn",
    "com.mx",
    "cz",
    "de",
    "dk",
    "edu",
    "es",
    "eu",
    "fi",
    "fr",
    "gov",
    "gov.uk",
    "id",
    "in",
    "info",
    "int",
    "io",
    "it",
    "jp",
    "kr",
    "me",
    "mil",
    "mx",
    "ne.jp",
    "net",
    "nl",
    "no",
    "org",
    "org.uk",
    "pl",
    "pt",
    "ru",
    "se",
    "tv",
    "uk",
    "us",
    "xn--fiqs8s",
    "xn--p1ai",
    "中国",
    "рф",
];

/// Private portion of the built-in fallback rule list
const BUILTIN_PRIVATE: &[&str] = &[
    "amazonaws.com",
    "appspot.com",
    "blogspot.com",
    "cloudfront.net",
    "fastly.net",
    "github.io",
    "gitlab.io",
    "herokuapp.com",
    "netlify.app",
    "pages.dev",
    "vercel.app",
];

static BUILTIN: Lazy<SuffixRules> = Lazy::new(|| {
    SuffixRules::new(
        BUILTIN_ICANN.iter().map(|r| r.to_string()).collect(),
        BUILTIN_PRIVATE.iter().map(|r| r.to_string()).collect(),
    )
});

/// Built-in fallback rule list, used when no PSL file is available.
pub fn builtin_rules() -> &'static SuffixRules {
    &BUILTIN
}
