#![forbid(unsafe_code)]

//! Top-level orchestration: decode → split → blend → encode.
//!
//! The engine takes an ordered list of (UTF-8 string, weight) pairs and
//! produces one interpolated display string. Input order matters — the
//! splitter's leftmost-occurrence cuts and the suffix tree's insertion-order
//! tie-breaks both depend on it — so pairs are never reordered, and
//! reordering the caller's list may legitimately change the output.
//!
//! Weights are trusted as given: the caller guarantees they are
//! non-negative and meaningfully normalized. The engine never re-normalizes.
//!
//! All failures surface as values, never panics: [`try_interpolate`] returns
//! a structured error, and [`interpolate`] collapses any failure into an
//! empty string, because a partially interpolated string would misrepresent
//! every position past the failure point.

use textfade_unicode::codec::{self, CodecError};

use crate::blend::blend_segment;
use crate::segment::{Segment, split};

use std::fmt;

// ---------------------------------------------------------------------------
// InterpolateError
// ---------------------------------------------------------------------------

/// Errors from a full interpolation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolateError {
    /// An input string failed UTF-8 decoding. The whole call fails because
    /// code-point positions across strings are meaningless past the
    /// corruption point.
    Decode {
        /// Index of the offending input pair.
        input: usize,
        /// The codec failure.
        source: CodecError,
    },
    /// The assembled result contained a value the encoder rejects. Only
    /// reachable when a non-scalar slipped in through permissively decoded
    /// byte input.
    Encode(CodecError),
}

impl fmt::Display for InterpolateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { input, source } => {
                write!(f, "input {input} is not valid UTF-8: {source}")
            }
            Self::Encode(source) => write!(f, "result not encodable: {source}"),
        }
    }
}

impl std::error::Error for InterpolateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } | Self::Encode(source) => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Interpolation
// ---------------------------------------------------------------------------

/// Blend N weighted strings into one interpolated display string.
///
/// Zero inputs produce an empty string; a single input is returned
/// unchanged regardless of its weight. Any internal failure also produces
/// an empty string — see [`try_interpolate`] for the structured-error
/// surface.
#[must_use]
pub fn interpolate(inputs: &[(&str, f64)]) -> String {
    let byte_inputs: Vec<(&[u8], f64)> = inputs
        .iter()
        .map(|&(text, weight)| (text.as_bytes(), weight))
        .collect();
    try_interpolate(&byte_inputs).unwrap_or_default()
}

/// Byte-level interpolation surface.
///
/// Identical to [`interpolate`] but accepts raw bytes, so malformed UTF-8
/// is representable and reported as [`InterpolateError::Decode`] instead of
/// being silently impossible.
pub fn try_interpolate(inputs: &[(&[u8], f64)]) -> Result<String, InterpolateError> {
    if inputs.is_empty() {
        return Ok(String::new());
    }

    let mut decoded = Vec::with_capacity(inputs.len());
    let mut weights = Vec::with_capacity(inputs.len());
    for (index, &(bytes, weight)) in inputs.iter().enumerate() {
        let points = codec::decode(bytes)
            .map_err(|source| InterpolateError::Decode { input: index, source })?;
        decoded.push(points);
        weights.push(weight);
    }

    if decoded.len() == 1 {
        return encode_result(&decoded[0]);
    }

    let segments = split(&decoded);
    tracing::debug!(
        inputs = inputs.len(),
        segments = segments.len(),
        "assembling interpolated string"
    );

    let mut points = Vec::new();
    for segment in &segments {
        match segment {
            Segment::Literal(text) => points.extend_from_slice(text),
            Segment::Divergent(spans) => points.extend(blend_segment(spans, &weights)),
        }
    }
    encode_result(&points)
}

fn encode_result(points: &[u32]) -> Result<String, InterpolateError> {
    let bytes = codec::encode(points).map_err(InterpolateError::Encode)?;
    // `codec::encode` only emits well-formed UTF-8.
    Ok(String::from_utf8(bytes).unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
