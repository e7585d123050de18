#![forbid(unsafe_code)]

//! Generalized suffix tree over tagged code-point sequences.
//!
//! The tree indexes every suffix of every input sequence simultaneously and
//! answers one question: what is the longest substring common to all of
//! them? With a single input sequence the same query yields the longest
//! *repeated* substring instead.
//!
//! # Design
//!
//! Nodes live in a single growable arena and reference their children by
//! integer index only — insertion appends to the arena and may reallocate
//! it, so no node reference is ever held across a mutation. Each input
//! sequence is terminated by a per-sequence [`Symbol::Terminator`] that
//! compares unequal to every real character and to terminators of other
//! sequences, which stops suffixes of one sequence from silently continuing
//! into the next.
//!
//! Construction inserts suffixes naively, one walk from the root per
//! starting offset: O(n²) over the total symbol count in the worst case.
//! That is deliberate — inputs are short UI strings, and the simple
//! insertion order is load-bearing: ties between equally long common
//! substrings resolve to the first candidate in insertion order, and
//! callers rely on that determinism.

use std::fmt::{self, Write as _};
use std::ops::Range;

use rustc_hash::FxHashSet;

// ---------------------------------------------------------------------------
// Symbol
// ---------------------------------------------------------------------------

/// One element of the concatenated symbol array: a real character or a
/// per-sequence terminator.
///
/// Equality is by code-point *value* for characters (position and owning
/// sequence are ignored) and by owning sequence for terminators; a character
/// never equals a terminator.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Symbol {
    /// A real code point, tagged with the index of the sequence it came from.
    Char {
        /// The code-point value.
        value: u32,
        /// Index of the owning input sequence.
        source: usize,
    },
    /// End marker for one input sequence.
    Terminator {
        /// Index of the owning input sequence.
        source: usize,
    },
}

impl Symbol {
    #[inline]
    fn source(self) -> usize {
        match self {
            Self::Char { source, .. } | Self::Terminator { source } => source,
        }
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Char { value: a, .. }, Self::Char { value: b, .. }) => a == b,
            (Self::Terminator { source: a }, Self::Terminator { source: b }) => a == b,
            _ => false,
        }
    }
}

impl Eq for Symbol {}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Char { value, .. } => {
                f.write_char(char::from_u32(value).unwrap_or('\u{FFFD}'))
            }
            Self::Terminator { source } => write!(f, "({source})"),
        }
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// One arena node: an edge label as a half-open range over the shared symbol
/// array, child arena indices, and the set of sequences whose suffixes pass
/// through this node.
#[derive(Debug, Clone, Default)]
struct Node {
    label: Range<usize>,
    children: Vec<usize>,
    owners: FxHashSet<usize>,
}

// ---------------------------------------------------------------------------
// SuffixTree
// ---------------------------------------------------------------------------

/// Generalized suffix tree over multiple code-point sequences.
///
/// Built once, queried once, discarded; the tree is never mutated after
/// construction.
pub struct SuffixTree {
    symbols: Vec<Symbol>,
    nodes: Vec<Node>,
    string_count: usize,
}

impl SuffixTree {
    /// Build a tree over `sequences`.
    ///
    /// The global symbol array concatenates each sequence's characters,
    /// tagged with the sequence index, followed by that sequence's
    /// terminator. Every suffix of the array is then inserted left to right.
    #[must_use]
    pub fn build(sequences: &[Vec<u32>]) -> Self {
        let total: usize = sequences.iter().map(|s| s.len() + 1).sum();
        let mut symbols = Vec::with_capacity(total);
        for (source, seq) in sequences.iter().enumerate() {
            for &value in seq {
                symbols.push(Symbol::Char { value, source });
            }
            symbols.push(Symbol::Terminator { source });
        }

        let mut tree = Self {
            symbols,
            nodes: vec![Node::default()],
            string_count: sequences.len(),
        };
        for start in 0..tree.symbols.len() {
            tree.add_suffix(start);
        }
        tree
    }

    fn push_node(&mut self, label: Range<usize>) -> usize {
        self.nodes.push(Node {
            label,
            children: Vec::new(),
            owners: FxHashSet::default(),
        });
        self.nodes.len() - 1
    }

    /// Insert the suffix of the global symbol array starting at `start`.
    fn add_suffix(&mut self, start: usize) {
        let end = self.symbols.len();
        let mut suffix = start;
        let mut node_idx = 0;

        while suffix < end {
            let head = self.symbols[suffix];

            // Scan the current node's children for one whose edge starts
            // with the suffix head.
            let mut matched = None;
            for (slot, &child) in self.nodes[node_idx].children.iter().enumerate() {
                if self.symbols[self.nodes[child].label.start] == head {
                    matched = Some((slot, child));
                    break;
                }
            }

            let Some((slot, child_idx)) = matched else {
                // No match: the whole remaining suffix becomes a new leaf.
                let leaf = self.push_node(suffix..end);
                let source = head.source();
                self.nodes[node_idx].children.push(leaf);
                self.nodes[node_idx].owners.insert(source);
                self.nodes[leaf].owners.insert(source);
                return;
            };

            // Walk the matched edge in lockstep with the suffix. A mismatch
            // is guaranteed before the suffix runs out: the array's final
            // symbol is the last sequence's terminator, which occurs exactly
            // once and so cannot match any earlier edge position.
            let label = self.nodes[child_idx].label.clone();
            let mut split_at = None;
            for (offset, pos) in label.clone().enumerate() {
                match self.symbols.get(suffix + offset) {
                    Some(sym) if *sym == self.symbols[pos] => {}
                    _ => {
                        split_at = Some((offset, pos));
                        break;
                    }
                }
            }

            match split_at {
                Some((offset, pos)) => {
                    // Split the edge at the mismatch: a new intermediate node
                    // keeps the matched prefix, the original child keeps the
                    // remainder and is re-parented under it.
                    let inter = self.push_node(label.start..pos);
                    self.nodes[inter].children.push(child_idx);
                    self.nodes[child_idx].label = pos..label.end;
                    self.nodes[node_idx].children[slot] = inter;

                    let child_owners = self.nodes[child_idx].owners.clone();
                    self.nodes[inter].owners.extend(child_owners);
                    let split_source = self.symbols[pos].source();
                    self.nodes[child_idx].owners.insert(split_source);

                    // The next loop iteration finds no matching child under
                    // the intermediate and appends the suffix remainder as a
                    // fresh leaf, marking both with the suffix's sequence.
                    suffix += offset;
                    node_idx = inter;
                }
                None => {
                    // Edge fully consumed: record the suffix's sequence on
                    // the child and continue one level deeper.
                    self.nodes[child_idx].owners.insert(head.source());
                    suffix += label.len();
                    node_idx = child_idx;
                }
            }
        }
    }

    /// Whether a node can contribute to the longest common substring: its
    /// suffixes must cover every input sequence and it must be internal —
    /// leaves are single suffix tails, not shared text.
    fn is_candidate(&self, idx: usize) -> bool {
        let node = &self.nodes[idx];
        node.owners.len() == self.string_count && !node.children.is_empty()
    }

    /// The longest substring common to all input sequences.
    ///
    /// With one input sequence this is the longest substring that repeats
    /// within it. With no common substring at all, the result is empty.
    /// Ties between equally long candidates resolve to the first child in
    /// insertion order — deterministic, but dependent on input order.
    #[must_use]
    pub fn longest_common_substring(&self) -> Vec<u32> {
        // Post-order over an explicit stack: best[i] is node i's edge length
        // plus the best total strictly below it, or 0 for non-candidates
        // (whose subtrees are pruned entirely).
        let mut best = vec![0usize; self.nodes.len()];
        let mut stack = vec![(0usize, 0usize)];
        while let Some((idx, cursor)) = stack.pop() {
            if !self.is_candidate(idx) {
                continue;
            }
            let node = &self.nodes[idx];
            if cursor < node.children.len() {
                stack.push((idx, cursor + 1));
                stack.push((node.children[cursor], 0));
            } else {
                let below = node.children.iter().map(|&c| best[c]).max().unwrap_or(0);
                best[idx] = node.label.len() + below;
            }
        }

        if !self.is_candidate(0) {
            return Vec::new();
        }

        // Reconstruct root-down along first-in-insertion-order maxima.
        let mut result = Vec::new();
        let mut idx = 0;
        loop {
            for pos in self.nodes[idx].label.clone() {
                match self.symbols[pos] {
                    Symbol::Char { value, .. } => result.push(value),
                    Symbol::Terminator { .. } => {
                        tracing::warn!(
                            "terminator inside a common-substring path; discarding result"
                        );
                        return Vec::new();
                    }
                }
            }
            let children = &self.nodes[idx].children;
            let max = children.iter().map(|&c| best[c]).max().unwrap_or(0);
            if max == 0 {
                break;
            }
            let Some(&next) = children.iter().find(|&&c| best[c] == max) else {
                break;
            };
            idx = next;
        }
        result
    }

    /// Human-readable indented dump of the tree, for debugging.
    ///
    /// One line per node: a box-drawing glyph, the edge label (terminators
    /// shown as `(index)`), and the sorted owner set.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_node(0, "", &mut out);
        out
    }

    fn render_node(&self, idx: usize, indent: &str, out: &mut String) {
        let node = &self.nodes[idx];
        out.push(if node.children.is_empty() { '╴' } else { '┬' });
        out.push(' ');
        for pos in node.label.clone() {
            let _ = write!(out, "{}", self.symbols[pos]);
        }
        let mut owners: Vec<usize> = node.owners.iter().copied().collect();
        owners.sort_unstable();
        let _ = writeln!(out, " {owners:?}");

        for (i, &child) in node.children.iter().enumerate() {
            let last = i + 1 == node.children.len();
            out.push_str(indent);
            out.push_str(if last { "└─" } else { "├─" });
            let child_indent = if last {
                format!("{indent}  ")
            } else {
                format!("{indent}│ ")
            };
            self.render_node(child, &child_indent, out);
        }
    }
}

impl fmt::Display for SuffixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
