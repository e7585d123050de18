#![forbid(unsafe_code)]

//! UTF-8 ⇄ code-point conversion and byte-length calculus.
//!
//! All functions operate on raw byte slices rather than `&str`, so malformed
//! input is representable and the failure paths can actually be exercised.
//! Decoding is strict in the whole-input sense: the first bad byte fails the
//! entire scan, because downstream consumers align decoded positions across
//! multiple strings and a partial decode would silently misalign them.
//!
//! # Invariants
//!
//! 1. `decode` followed by `encode` reproduces the original bytes for any
//!    valid UTF-8 input.
//! 2. `encode_into` only ever emits well-formed UTF-8: it rejects surrogates
//!    and values above U+10FFFF before writing anything.
//! 3. Lead bytes ≥ 0xF5 are rejected per RFC 3629 (they would encode code
//!    points beyond U+10FFFF).
//!
//! Overlong encodings are accepted by the decoder (as the relaxed original
//! scheme did) and re-encode canonically, so they are the one class of input
//! the round-trip does not preserve byte-for-byte.

use std::fmt;

/// Highest valid Unicode scalar value.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

// ---------------------------------------------------------------------------
// CodecError
// ---------------------------------------------------------------------------

/// Errors from UTF-8 decoding or encoding.
///
/// Each variant carries enough position information to report *where* in the
/// input the scan failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// A continuation byte (`10xxxxxx`) appeared in lead position.
    InvalidLeadByte {
        /// The offending byte.
        byte: u8,
        /// Byte offset in the input.
        offset: usize,
    },
    /// A lead byte ≥ 0xF5, which would encode beyond U+10FFFF (RFC 3629).
    BeyondUnicodeRange {
        /// The offending byte.
        byte: u8,
        /// Byte offset in the input.
        offset: usize,
    },
    /// A continuation position did not hold a `10xxxxxx` byte.
    InvalidContinuation {
        /// The offending byte.
        byte: u8,
        /// Byte offset in the input.
        offset: usize,
    },
    /// The input ended before the sequence announced by the lead byte.
    Truncated {
        /// Byte offset of the sequence start.
        offset: usize,
    },
    /// A value that is not a Unicode scalar (surrogate or > U+10FFFF) was
    /// passed to the encoder.
    InvalidScalar {
        /// The offending value.
        value: u32,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLeadByte { byte, offset } => {
                write!(f, "continuation byte {byte:#04x} in lead position at offset {offset}")
            }
            Self::BeyondUnicodeRange { byte, offset } => {
                write!(f, "lead byte {byte:#04x} at offset {offset} encodes beyond U+10FFFF")
            }
            Self::InvalidContinuation { byte, offset } => {
                write!(f, "byte {byte:#04x} at offset {offset} is not a continuation byte")
            }
            Self::Truncated { offset } => {
                write!(f, "input ends inside the sequence starting at offset {offset}")
            }
            Self::InvalidScalar { value } => {
                write!(f, "value {value:#x} is not a Unicode scalar")
            }
        }
    }
}

impl std::error::Error for CodecError {}

// ---------------------------------------------------------------------------
// Byte-length calculus
// ---------------------------------------------------------------------------

/// Expected sequence length from a lead byte, by counting leading set bits.
///
/// Zero leading bits is plain ASCII (length 1). Exactly one leading bit marks
/// a continuation byte, which is not a valid lead byte, so `None`. Two or
/// more leading bits announce a sequence of that many bytes.
#[inline]
#[must_use]
pub const fn lead_byte_len(byte: u8) -> Option<usize> {
    match byte.leading_ones() {
        0 => Some(1),
        1 => None,
        n => Some(n as usize),
    }
}

/// Number of bytes needed to encode `cp` in UTF-8.
///
/// Standard threshold table: 1 byte through U+007F, 2 through U+07FF,
/// 3 through U+FFFF, 4 above. Values beyond U+10FFFF are not encodable but
/// still report 4 here; [`encode_into`] is where they are rejected.
#[inline]
#[must_use]
pub const fn encoded_len(cp: u32) -> usize {
    match cp {
        0..=0x7F => 1,
        0x80..=0x7FF => 2,
        0x800..=0xFFFF => 3,
        _ => 4,
    }
}

/// Code-point count of `bytes`, by lead-byte scanning only.
///
/// Continuation bytes are skipped wholesale based on the announced sequence
/// length; they are *not* individually validated. Returns `None` on the
/// first byte that cannot be a lead byte, failing the whole scan.
#[must_use]
pub fn utf8_len(bytes: &[u8]) -> Option<usize> {
    let mut count = 0;
    let mut offset = 0;
    while offset < bytes.len() {
        offset += lead_byte_len(bytes[offset])?;
        count += 1;
    }
    Some(count)
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decode one scalar at `offset`, returning it and the bytes consumed.
pub fn decode_at(bytes: &[u8], offset: usize) -> Result<(u32, usize), CodecError> {
    let lead = *bytes.get(offset).ok_or(CodecError::Truncated { offset })?;
    let len = lead_byte_len(lead).ok_or(CodecError::InvalidLeadByte { byte: lead, offset })?;
    if lead >= 0xF5 {
        return Err(CodecError::BeyondUnicodeRange { byte: lead, offset });
    }
    if len == 1 {
        return Ok((u32::from(lead), 1));
    }
    if offset + len > bytes.len() {
        return Err(CodecError::Truncated { offset });
    }

    // Lead byte payload: everything below the length prefix and its stop bit.
    let mut cp = u32::from(lead & (0x7F >> len));
    for i in 1..len {
        let byte = bytes[offset + i];
        if byte & 0xC0 != 0x80 {
            return Err(CodecError::InvalidContinuation { byte, offset: offset + i });
        }
        cp = (cp << 6) | u32::from(byte & 0x3F);
    }
    Ok((cp, len))
}

/// Decode an entire byte string into code points.
///
/// The first malformed sequence aborts the whole scan with its error; no
/// partial output is produced.
pub fn decode(bytes: &[u8]) -> Result<Vec<u32>, CodecError> {
    let mut points = Vec::with_capacity(bytes.len());
    let mut offset = 0;
    while offset < bytes.len() {
        let (cp, consumed) = decode_at(bytes, offset)?;
        points.push(cp);
        offset += consumed;
    }
    Ok(points)
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Append the UTF-8 encoding of `cp` to `out`.
///
/// Emits the lead byte with its length-dependent prefix, then one
/// `10xxxxxx` continuation byte per remaining 6-bit group, most significant
/// group first. Rejects surrogates and values above U+10FFFF.
pub fn encode_into(cp: u32, out: &mut Vec<u8>) -> Result<(), CodecError> {
    if cp > MAX_CODEPOINT || (0xD800..=0xDFFF).contains(&cp) {
        return Err(CodecError::InvalidScalar { value: cp });
    }
    let len = encoded_len(cp);
    if len == 1 {
        out.push(cp as u8);
        return Ok(());
    }
    let prefix: u8 = match len {
        2 => 0xC0,
        3 => 0xE0,
        _ => 0xF0,
    };
    out.push(prefix | (cp >> (6 * (len - 1))) as u8);
    for i in 1..len {
        out.push(0x80 | ((cp >> (6 * (len - 1 - i))) & 0x3F) as u8);
    }
    Ok(())
}

/// Encode a code-point sequence into UTF-8 bytes.
pub fn encode(points: &[u32]) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::with_capacity(points.len());
    for &cp in points {
        encode_into(cp, &mut out)?;
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
