//! Property-based invariant tests for segmentation, blending, and the full
//! interpolation pipeline.
//!
//! 1. `interpolate` never panics and always returns valid UTF-8 (by type)
//! 2. Zero inputs always produce an empty string
//! 3. A single input is returned unchanged for any weight
//! 4. N identical inputs are returned unchanged for any weights
//! 5. Interpolation is deterministic: same inputs → same output
//! 6. The splitter's partition is lossless for every input
//! 7. Literal segments are never shorter than two code points
//! 8. `blend_segment` output only contains Unicode scalars

use proptest::prelude::*;
use textfade::blend::blend_segment;
use textfade::segment::{Segment, split};
use textfade::interpolate;

// ── Helpers ──────────────────────────────────────────────────────────

fn to_points(s: &str) -> Vec<u32> {
    s.chars().map(u32::from).collect()
}

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

// Naive suffix-tree construction is quadratic, so inputs stay short.
fn short_string() -> impl Strategy<Value = String> {
    ".{0,24}"
}

fn weight() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. interpolate never panics; zero inputs are empty
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn interpolate_never_panics(
        a in short_string(), b in short_string(),
        wa in weight(), wb in weight(),
    ) {
        let _ = interpolate(&[(&a, wa), (&b, wb)]);
    }
}

#[test]
fn zero_inputs_are_empty() {
    assert_eq!(interpolate(&[]), "");
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Single input is identity for any weight
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn single_input_identity(s in short_string(), w in 0.0f64..=10.0) {
        prop_assert_eq!(interpolate(&[(&s, w)]), s);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Identical inputs are identity for any weights
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn identical_inputs_identity(
        s in short_string(),
        count in 2usize..=4,
        w in weight(),
    ) {
        let inputs: Vec<(&str, f64)> = (0..count).map(|_| (s.as_str(), w)).collect();
        prop_assert_eq!(interpolate(&inputs), s);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn interpolation_is_deterministic(
        a in short_string(), b in short_string(),
        wa in weight(), wb in weight(),
    ) {
        let inputs = [(a.as_str(), wa), (b.as_str(), wb)];
        prop_assert_eq!(interpolate(&inputs), interpolate(&inputs));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6–7. Splitter partition is lossless; literals respect the length floor
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn split_partition_is_lossless(
        a in short_string(), b in short_string(), c in short_string(),
    ) {
        let sequences = vec![to_points(&a), to_points(&b), to_points(&c)];
        let segments = split(&sequences);
        for (index, seq) in sequences.iter().enumerate() {
            prop_assert_eq!(&reassemble(&segments, index), seq);
        }
        for segment in &segments {
            if let Segment::Literal(text) = segment {
                prop_assert!(text.len() >= 2, "undersized literal {:?}", text);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. blend_segment output only contains scalars
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn blend_output_is_scalar(
        a in short_string(), b in short_string(),
        wa in weight(), wb in weight(),
    ) {
        let out = blend_segment(&[to_points(&a), to_points(&b)], &[wa, wb]);
        for cp in out {
            prop_assert!(
                char::from_u32(cp).is_some(),
                "non-scalar {:#x} in blend output", cp
            );
        }
    }
}
