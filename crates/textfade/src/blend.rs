#![forbid(unsafe_code)]

//! Unicode-block-aware weighted blending of divergent spans.
//!
//! A divergent span is N aligned code-point sequences plus N weights. The
//! blender produces one output sequence whose length is the weighted mean of
//! the input lengths, blending the aligned candidates at each position into
//! a single code point.
//!
//! # Design
//!
//! Averaging raw code-point integers would jump between unrelated scripts —
//! the midpoint of a Latin letter and a CJK ideograph is garbage from a
//! block nobody asked for. Instead, each position blends on a virtual axis
//! made of only the Unicode blocks the candidates actually touch,
//! concatenated in sorted order. Every candidate maps to a running offset on
//! that axis, the offsets are averaged with the caller's weights, and the
//! result maps back through the same axis to a concrete code point. The
//! output therefore always lands inside a block one of the candidates came
//! from, keeping intermediate frames in a visually coherent script region.
//!
//! Positions that cannot be blended (no candidate has a known block, or the
//! axis walk lands on a non-scalar such as a surrogate) degrade to U+FFFD
//! rather than failing the span; see `blend_segment`.

use smallvec::SmallVec;
use textfade_unicode::blocks::{BlockRange, find_block};

/// Pad code point for positions beyond a shorter sequence's end: ASCII
/// digit zero.
const PADDING_CODEPOINT: u32 = 0x30;

/// Stand-in for positions that cannot be blended.
const REPLACEMENT_CODEPOINT: u32 = 0xFFFD;

/// Blend one divergent span into a single code-point sequence.
///
/// Degenerate inputs produce an empty result: no sequences, a
/// sequence/weight count mismatch, or all-empty sequences. If every
/// sequence is identical no blending is needed and the first is returned
/// unchanged, whatever the weights.
///
/// Otherwise the output length is `round(Σ wᵢ·lenᵢ)` and each position
/// blends one candidate per input — the code point at that position, or the
/// padding code point for inputs that are too short. Unblendable positions
/// degrade to U+FFFD; the span never fails as a whole.
#[must_use]
pub fn blend_segment(sequences: &[Vec<u32>], weights: &[f64]) -> Vec<u32> {
    if sequences.is_empty() || sequences.len() != weights.len() {
        return Vec::new();
    }
    if sequences.iter().all(|seq| seq.is_empty()) {
        return Vec::new();
    }
    if sequences.windows(2).all(|pair| pair[0] == pair[1]) {
        return sequences[0].clone();
    }

    let weighted_len: f64 = sequences
        .iter()
        .zip(weights)
        .map(|(seq, &w)| w * seq.len() as f64)
        .sum();
    let target = weighted_len.round() as usize;

    let mut out = Vec::with_capacity(target);
    for i in 0..target {
        let candidates: SmallVec<[u32; 8]> = sequences
            .iter()
            .map(|seq| seq.get(i).copied().unwrap_or(PADDING_CODEPOINT))
            .collect();
        let blended = blend_char(&candidates, weights)
            .filter(|&cp| char::from_u32(cp).is_some())
            .unwrap_or(REPLACEMENT_CODEPOINT);
        out.push(blended);
    }
    out
}

/// Blend one group of aligned candidate code points into a single code
/// point, using block geometry.
///
/// `candidates` and `weights` are parallel. Candidates with no known
/// Unicode block are skipped; their weight contributes nothing. Returns
/// `None` when no candidate has a block, or when the blended offset cannot
/// be placed back inside the touched blocks.
#[must_use]
pub fn blend_char(candidates: &[u32], weights: &[f64]) -> Option<u32> {
    // Distinct blocks touched by this candidate group, in ascending order.
    let mut touched: SmallVec<[BlockRange; 8]> = SmallVec::new();
    for &cp in candidates {
        if let Some(block) = find_block(cp) {
            if !touched.contains(&block) {
                touched.push(block);
            }
        }
    }
    if touched.is_empty() {
        return None;
    }
    touched.sort_unstable();

    // Each candidate's position on the concatenated-block axis: the sizes
    // of all touched blocks sorting before its own, plus its offset within
    // its own block.
    let mut placed: SmallVec<[(u64, f64); 8]> = SmallVec::new();
    for (&cp, &weight) in candidates.iter().zip(weights) {
        let Some(block) = find_block(cp) else { continue };
        let mut running = 0u64;
        for b in &touched {
            if *b == block {
                running += u64::from(cp - b.start);
                break;
            }
            running += u64::from(b.len());
        }
        placed.push((running, weight));
    }

    // Normalize to the minimum candidate, average, then shift back so the
    // walk below starts from the axis origin. Without the shift a single
    // candidate would "blend" to its block's first code point.
    let min = placed.iter().map(|&(run, _)| run).min()?;
    let mean: f64 = placed
        .iter()
        .map(|&(run, weight)| weight * (run - min) as f64)
        .sum();
    let target = mean.round() as u64 + min;

    // Walk the touched blocks, consuming sizes until the target lands.
    let mut remaining = target;
    for block in &touched {
        let len = u64::from(block.len());
        if remaining < len {
            return Some(block.start + remaining as u32);
        }
        remaining -= len;
    }
    None
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

    #[test]
    fn same_block_midpoint() {
        // 'a' and 'c' both live in Basic Latin; the midpoint is 'b'.
        assert_eq!(blend_char(&[0x61, 0x63], &[0.5, 0.5]), Some(0x62));
    }

    #[test]
    fn full_weight_on_one_candidate_returns_it() {
        assert_eq!(blend_char(&[0x61, 0x7A], &[1.0, 0.0]), Some(0x61));
        assert_eq!(blend_char(&[0x61, 0x7A], &[0.0, 1.0]), Some(0x7A));
    }

    #[test]
    fn single_candidate_is_identity() {
        for cp in [0x41, 0x44F, 0x3042, 0x1F600] {
            assert_eq!(blend_char(&[cp], &[1.0]), Some(cp));
        }
    }

    #[test]
    fn cross_block_blend_stays_in_touched_blocks() {
        // 'a' (Basic Latin) and 'я' (Cyrillic): the result must come from
        // one of those two blocks, not the unrelated space between them.
        let blended = blend_char(&[u32::from('a'), u32::from('я')], &[0.5, 0.5]).unwrap();
        let block = find_block(blended).unwrap();
        assert!(
            block.start == 0x0000 || block.start == 0x0400,
            "blend {blended:#x} landed in foreign block {block:?}"
        );
    }

    #[test]
    fn no_known_block_yields_none() {
        // 0x2FE5 sits in an unassigned gap.
        assert_eq!(blend_char(&[0x2FE5], &[1.0]), None);
        // A blockless candidate is skipped, not fatal.
        assert_eq!(blend_char(&[0x2FE5, 0x61], &[0.5, 0.5]), Some(0x61));
    }

    #[test]
    fn segment_degenerate_inputs() {
        assert_eq!(blend_segment(&[], &[]), Vec::<u32>::new());
        // Count mismatch between sequences and weights.
        assert_eq!(blend_segment(&[to_points("ab")], &[0.5, 0.5]), Vec::<u32>::new());
        // All-empty sequences.
        assert_eq!(blend_segment(&[vec![], vec![]], &[0.5, 0.5]), Vec::<u32>::new());
    }

    #[test]
    fn identical_sequences_pass_through() {
        let seqs = vec![to_points("héllo"), to_points("héllo"), to_points("héllo")];
        // Weights are irrelevant when nothing differs.
        assert_eq!(blend_segment(&seqs, &[0.2, 0.3, 0.5]), to_points("héllo"));
        assert_eq!(blend_segment(&seqs, &[0.0, 0.0, 0.0]), to_points("héllo"));
    }

    #[test]
    fn output_length_is_weighted_mean() {
        let seqs = vec![to_points("abcd"), to_points("uvwxyz")];
        assert_eq!(blend_segment(&seqs, &[0.5, 0.5]).len(), 5);
        assert_eq!(blend_segment(&seqs, &[1.0, 0.0]).len(), 4);
        assert_eq!(blend_segment(&seqs, &[0.0, 1.0]).len(), 6);
    }

    #[test]
    fn short_sequences_pad_with_digit_zero() {
        // Position 1 of the second sequence is past its end, so the
        // candidates there are 'b' and the '0' pad; full weight on the
        // second sequence surfaces the pad itself.
        let seqs = vec![to_points("ab"), to_points("x")];
        let out = blend_segment(&seqs, &[0.0, 1.0]);
        assert_eq!(out.len(), 1);
        let out = blend_segment(&seqs, &[0.25, 0.75]);
        assert_eq!(out.len(), 1);

        let seqs = vec![to_points("ab"), to_points("cd")];
        let out = blend_segment(&seqs, &[0.0, 1.0]);
        assert_eq!(out, to_points("cd"));
    }

    #[test]
    fn blend_output_is_always_scalar() {
        // Surrogate blocks are real table entries, so the axis walk can land
        // on a non-scalar; the segment-level policy replaces it with U+FFFD.
        let seqs = vec![vec![0xD800_u32], vec![0xD900_u32]];
        let out = blend_segment(&seqs, &[0.5, 0.5]);
        assert_eq!(out, vec![REPLACEMENT_CODEPOINT]);
        for cp in out {
            assert!(char::from_u32(cp).is_some(), "non-scalar {cp:#x} escaped");
        }
    }
}
