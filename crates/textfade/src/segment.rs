#![forbid(unsafe_code)]

//! Recursive segmentation of parallel sequences into literal and divergent
//! spans.
//!
//! Given N decoded code-point sequences, the splitter finds the longest
//! substring common to all of them, cuts every sequence at its leftmost
//! occurrence, and recurses on the left and right remainders. The result is
//! an ordered, alternating list of [`Segment::Literal`] spans (identical
//! across all inputs, reproduced exactly) and [`Segment::Divergent`] spans
//! (requiring per-character blending).
//!
//! Common substrings shorter than two code points are too noisy to treat as
//! shared text; they stay inside divergent spans. A fresh suffix tree is
//! built at every recursion level and discarded immediately after its one
//! query.
//!
//! # Invariants
//!
//! 1. Lossless partition: reassembling each input from the segments in
//!    order — literal text once, plus that input's divergent spans —
//!    reconstructs the input exactly.
//! 2. Recursion depth is explicitly bounded; at the bound the remaining
//!    sequences are emitted as a single divergent span instead of risking
//!    stack exhaustion on adversarial nesting.

use crate::suffix_tree::SuffixTree;

/// Common substrings shorter than this stay inside divergent spans.
const MIN_SPLIT_LEN: usize = 2;

/// Hard bound on split recursion. Each level strips at least
/// `MIN_SPLIT_LEN` code points from the recursed side, so only inputs with
/// 128+ nested shared chunks ever reach it; they degrade to one divergent
/// span.
const MAX_SPLIT_DEPTH: usize = 64;

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

/// A contiguous aligned span across all input sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text identical across every input; safe to reproduce verbatim.
    Literal(Vec<u32>),
    /// Per-input spans that differ and need per-character blending.
    Divergent(Vec<Vec<u32>>),
}

/// Partition `sequences` into an ordered list of literal and divergent
/// segments.
#[must_use]
pub fn split(sequences: &[Vec<u32>]) -> Vec<Segment> {
    let mut out = Vec::new();
    split_into(sequences.to_vec(), 0, &mut out);
    out
}

fn split_into(sequences: Vec<Vec<u32>>, depth: usize, out: &mut Vec<Segment>) {
    let tree = SuffixTree::build(&sequences);
    let lcs = tree.longest_common_substring();
    tracing::trace!(depth, lcs_len = lcs.len(), "split step");

    if lcs.len() < MIN_SPLIT_LEN || depth >= MAX_SPLIT_DEPTH {
        out.push(Segment::Divergent(sequences));
        return;
    }

    let Some(positions) = occurrence_positions(&sequences, &lcs) else {
        // The common substring occurs in every sequence by construction;
        // reaching here means the tree broke its contract.
        tracing::warn!("common substring missing from an input; emitting divergent span");
        out.push(Segment::Divergent(sequences));
        return;
    };

    let mut lefts = Vec::with_capacity(sequences.len());
    let mut rights = Vec::with_capacity(sequences.len());
    for (seq, &at) in sequences.iter().zip(&positions) {
        lefts.push(seq[..at].to_vec());
        rights.push(seq[at + lcs.len()..].to_vec());
    }

    split_into(lefts, depth + 1, out);
    out.push(Segment::Literal(lcs));
    split_into(rights, depth + 1, out);
}

/// Leftmost occurrence of `needle` in each sequence, or `None` if any
/// sequence lacks it.
fn occurrence_positions(sequences: &[Vec<u32>], needle: &[u32]) -> Option<Vec<usize>> {
    sequences
        .iter()
        .map(|seq| find_subsequence(seq, needle))
        .collect()
}

/// Leftmost exact-match position of `needle` inside `haystack`.
fn find_subsequence(haystack: &[u32], needle: &[u32]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn to_points(s: &str) -> Vec<u32> {
        s.chars().map(u32::from).collect()
    }

    fn split_strs(strings: &[&str]) -> Vec<Segment> {
        let sequences: Vec<Vec<u32>> = strings.iter().map(|s| to_points(s)).collect();
        split(&sequences)
    }

    /// Rebuild input `index` from the segment list.
    fn reassemble(segments: &[Segment], index: usize) -> Vec<u32> {
        let mut out = Vec::new();
        for segment in segments {
            match segment {
                Segment::Literal(text) => out.extend_from_slice(text),
                Segment::Divergent(spans) => out.extend_from_slice(&spans[index]),
            }
        }
        out
    }

    #[test]
    fn shared_middle_becomes_literal() {
        let segments = split_strs(&["xabcda", "y7abc1"]);
        assert!(
            segments.contains(&Segment::Literal(to_points("abc"))),
            "expected a literal 'abc' segment in {segments:?}"
        );
    }

    #[test]
    fn partition_is_lossless() {
        let inputs = [
            "Press {0} to continue",
            "Appuyez sur {0} pour continuer",
            "Premi {0} per continuare",
            "Presiona {0} para continuar",
        ];
        let sequences: Vec<Vec<u32>> = inputs.iter().map(|s| to_points(s)).collect();
        let segments = split(&sequences);
        for (index, seq) in sequences.iter().enumerate() {
            assert_eq!(&reassemble(&segments, index), seq, "input {index} lost data");
        }
    }

    #[test]
    fn no_common_text_is_one_divergent_span() {
        let segments = split_strs(&["abcd", "wxyz"]);
        assert_eq!(
            segments,
            vec![Segment::Divergent(vec![to_points("abcd"), to_points("wxyz")])]
        );
    }

    #[test]
    fn short_common_substrings_are_noise() {
        // "e" is shared but below the length-2 threshold.
        let segments = split_strs(&["e", "er"]);
        assert_eq!(
            segments,
            vec![Segment::Divergent(vec![to_points("e"), to_points("er")])]
        );
    }

    #[test]
    fn identical_inputs_split_around_one_literal() {
        let segments = split_strs(&["same", "same"]);
        assert_eq!(
            segments,
            vec![
                Segment::Divergent(vec![vec![], vec![]]),
                Segment::Literal(to_points("same")),
                Segment::Divergent(vec![vec![], vec![]]),
            ]
        );
    }

    #[test]
    fn segments_alternate_around_literals() {
        let segments = split_strs(&["The UMBRELLA corp", "De UMBRELLA dienst"]);
        // Every literal is at least MIN_SPLIT_LEN long.
        for segment in &segments {
            if let Segment::Literal(text) = segment {
                assert!(text.len() >= MIN_SPLIT_LEN, "undersized literal {text:?}");
            }
        }
        // And the shared middle got found.
        assert!(
            segments.iter().any(|s| matches!(s, Segment::Literal(text) if text.len() >= 8)),
            "expected the shared ' UMBRELLA ' run in {segments:?}"
        );
    }

    #[test]
    fn empty_input_list() {
        let segments = split(&[]);
        assert_eq!(segments, vec![Segment::Divergent(vec![])]);
    }

    #[test]
    fn single_input_splits_on_repeats() {
        // One sequence: the tree reports its longest repeated substring, so
        // the splitter still cuts around it. Reassembly must stay lossless.
        let sequences = vec![to_points("banana")];
        let segments = split(&sequences);
        assert_eq!(reassemble(&segments, 0), sequences[0]);
    }
}
