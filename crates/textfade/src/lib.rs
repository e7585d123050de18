#![forbid(unsafe_code)]

//! Weighted interpolation between localized strings.
//!
//! Given N translations of the same message and a weight per translation,
//! TextFade produces a single intermediate string: text common to every
//! translation is reproduced verbatim, and the parts that differ are
//! blended per code point inside the Unicode blocks the inputs actually
//! use. Animating the weights from one corner of the simplex to another
//! yields a morph between languages that keeps shared substance (numbers,
//! placeholders, proper names) readable throughout.
//!
//! # Pipeline
//!
//! 1. [`engine::try_interpolate`] decodes each input to code points
//!    (`textfade_unicode::codec`).
//! 2. [`segment::split`] partitions the sequences into literal and
//!    divergent spans using a generalized [`suffix_tree::SuffixTree`].
//! 3. [`blend::blend_segment`] collapses each divergent span with
//!    block-geometry weighted averaging.
//! 4. The assembled code points are re-encoded to UTF-8.
//!
//! The convenience entry point is [`interpolate`]; it never fails, mapping
//! any internal error to an empty string.

pub mod blend;
pub mod engine;
pub mod segment;
pub mod suffix_tree;

pub use blend::{blend_char, blend_segment};
pub use engine::{InterpolateError, interpolate, try_interpolate};
pub use segment::{Segment, split};
pub use suffix_tree::SuffixTree;

pub use textfade_unicode as unicode;
