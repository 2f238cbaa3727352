use std::collections::HashMap;

use log::warn;

use crate::labels::is_label_separator;

/// One node of the compressed suffix trie.
///
/// Children are keyed by label, with two sentinel forms: `"*"` matches any
/// single label, `"!label"` carves that label out of a sibling wildcard.
/// The root carries no label and is never terminal.
#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<String, TrieNode>,
    is_terminal: bool,
}

/// Suffix trie compiled once from PSL rule strings.
///
/// Immutable after `build`; any number of walks may run concurrently
/// against a shared trie since traversal only reads.
#[derive(Debug, Default)]
pub struct SuffixTrie {
    root: TrieNode,
}

impl SuffixTrie {
    /// Compile a trie from rule strings.
    ///
    /// Each rule is split on the label separators and inserted with its
    /// labels reversed, rightmost label closest to the root. Non-ASCII
    /// rules are additionally inserted in their ACE form; a rule whose
    /// conversion fails is skipped, not fatal to the build.
    pub fn build<S: AsRef<str>>(rules: &[S]) -> Self {
        let mut trie = Self::default();
        for rule in rules {
            let rule = rule.as_ref().trim();
            if rule.is_empty() {
                continue;
            }
            let rule = rule.to_lowercase();
            if rule.is_ascii() {
                trie.insert(&rule);
                continue;
            }
            match ascii_form(&rule) {
                Ok(ascii) => {
                    trie.insert(&rule);
                    if let Some(ascii) = ascii {
                        trie.insert(&ascii);
                    }
                }
                Err(err) => {
                    warn!("skipping suffix rule {:?}: {}", rule, err);
                }
            }
        }
        trie.fix_childless_terminals();
        trie
    }

    /// Check if the trie holds no rules.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    fn insert(&mut self, rule: &str) {
        let mut node = &mut self.root;
        for label in rule.split(is_label_separator).rev() {
            node = node.children.entry(label.to_string()).or_default();
        }
        node.is_terminal = true;
    }

    /// Give each top-level terminal node that is still childless a single
    /// empty-label continuation, so single-label and multi-label terminal
    /// rules look the same to the walk.
    fn fix_childless_terminals(&mut self) {
        for node in self.root.children.values_mut() {
            if node.is_terminal && node.children.is_empty() {
                node.children.insert(String::new(), TrieNode::default());
            }
        }
    }

    /// Start a longest-suffix walk from the root.
    pub fn walker(&self) -> SuffixWalker<'_> {
        SuffixWalker {
            node: &self.root,
            matched: 0,
            active: true,
        }
    }
}

/// ACE form of a rule, preserving a `*.` or `!` prefix.
///
/// Ok(None) means the ACE form equals the input; Err means the rule has
/// labels IDNA cannot convert.
fn ascii_form(rule: &str) -> Result<Option<String>, idna::Errors> {
    let (prefix, body) = if let Some(rest) = rule.strip_prefix("*.") {
        ("*.", rest)
    } else if let Some(rest) = rule.strip_prefix('!') {
        ("!", rest)
    } else {
        ("", rule)
    };
    let ascii = idna::domain_to_ascii(body)?;
    if ascii != body {
        Ok(Some(format!("{}{}", prefix, ascii)))
    } else {
        Ok(None)
    }
}

/// Outcome of feeding one label to a [`SuffixWalker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStep {
    /// Label is part of the suffix; deeper matching is still possible
    Consumed,
    /// Label is part of the suffix; the walk is complete
    ConsumedFinal,
    /// Label is not part of the suffix; the walk is complete
    Stopped,
}

/// Incremental longest-suffix walk.
///
/// The caller feeds hostname labels right to left; the walker reports per
/// label whether it extends the matched suffix. Wildcard children match
/// any label unless a sibling exception names the actual label, in which
/// case the exception wins and the label stays outside the suffix. A
/// wildcard level always completes the walk.
pub struct SuffixWalker<'a> {
    node: &'a TrieNode,
    matched: usize,
    active: bool,
}

impl SuffixWalker<'_> {
    /// Feed the next label (right to left).
    pub fn advance(&mut self, label: &str) -> WalkStep {
        if !self.active {
            return WalkStep::Stopped;
        }
        if self.node.children.contains_key("*") {
            self.active = false;
            if self.node.children.contains_key(format!("!{}", label).as_str()) {
                return WalkStep::Stopped;
            }
            self.matched += 1;
            return WalkStep::ConsumedFinal;
        }
        match self.node.children.get(label) {
            Some(child) => {
                self.matched += 1;
                self.node = child;
                if child.children.is_empty() {
                    self.active = false;
                    WalkStep::ConsumedFinal
                } else {
                    WalkStep::Consumed
                }
            }
            None => {
                self.active = false;
                WalkStep::Stopped
            }
        }
    }

    /// Number of labels matched so far.
    pub fn matched(&self) -> usize {
        self.matched
    }

    /// True while the walk has matched at least one label and may still
    /// consume more.
    pub fn in_progress(&self) -> bool {
        self.active && self.matched > 0
    }
}
