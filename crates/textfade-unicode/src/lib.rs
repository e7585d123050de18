#![forbid(unsafe_code)]

//! UTF-8 codec and Unicode block tables for TextFade.
//!
//! This crate is the leaf of the TextFade workspace: byte-level UTF-8
//! decoding/encoding at code-point granularity, plus the static table of
//! Unicode block ranges with sorted-lookup access.
//!
//! # Role in TextFade
//! The blending pipeline in the `textfade` crate aligns decoded code-point
//! sequences across multiple strings, so decoding here is all-or-nothing:
//! one malformed sequence fails the whole scan rather than producing output
//! that would misalign downstream. The block table gives the blender a
//! script-coherent coordinate space to interpolate in.
//!
//! # How it fits in the system
//! No dependencies and no state; everything is a pure function over slices,
//! keeping this layer reusable and testable on its own.

pub mod blocks;
pub mod codec;

mod block_data;

pub use blocks::{BLOCKS, BlockRange, find_block};
pub use codec::{CodecError, decode, decode_at, encode, encode_into, encoded_len, lead_byte_len, utf8_len};
