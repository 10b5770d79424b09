//! The two conversion engines shared by the encoding variants.
//!
//! Both directions follow the same discipline: work one sequence at a time,
//! never produce output for a sequence that ends up rejected, and never move
//! the input cursor past the first byte/unit of a sequence that could not be
//! finished. The per-call check order on the decode side is: end of input,
//! lead validity, incomplete tail, output room, target representability,
//! full validation. Room is probed before the representability verdict, so
//! an exhausted output buffer reports [`Outcome::Partial`] even when the
//! pending sequence would have been rejected by a narrower target.
//!
//! [`Outcome::Partial`]: crate::Outcome::Partial

use core::fmt;

use crate::sequence;
use crate::status::{ConversionState, Status};

pub(crate) const SURROGATE_LO: u32 = 0xD800;
pub(crate) const SURROGATE_HI: u32 = 0xDFFF;
pub(crate) const LOW_SURROGATE_LO: u32 = 0xDC00;
pub(crate) const SCALAR_MAX: u32 = 0x10_FFFF;

pub(crate) fn is_surrogate(value: u32) -> bool {
    (SURROGATE_LO..=SURROGATE_HI).contains(&value)
}

pub(crate) fn is_high_surrogate(value: u32) -> bool {
    (SURROGATE_LO..LOW_SURROGATE_LO).contains(&value)
}

pub(crate) fn is_low_surrogate(value: u32) -> bool {
    (LOW_SURROGATE_LO..=SURROGATE_HI).contains(&value)
}

/// One scalar's worth of input pulled from a fixed-width source.
pub(crate) enum Pulled {
    /// A complete scalar occupying `units` input units.
    Scalar { value: u32, units: usize },
    /// A valid prefix (high surrogate) cut off by the end of input.
    Pending,
    /// A unit or pairing the encoding rejects.
    Invalid,
}

/// Variant-specific unit behavior backing the shared engines.
pub(crate) trait Units {
    type Unit: Copy;

    /// Output units needed for a decoded sequence of `seq_len` bytes, or
    /// `None` when the target cannot represent any code point of that
    /// length.
    fn units_for(seq_len: usize) -> Option<usize>;

    /// Write the scalar at the front of `dst`, returning the unit count.
    fn put(value: u32, dst: &mut [Self::Unit]) -> usize;

    /// Read one scalar starting at `src[at]`.
    fn pull(src: &[Self::Unit], at: usize) -> Pulled;
}

pub(crate) fn decode_loop<V: Units>(src: &[u8], dst: &mut [V::Unit]) -> Status {
    let mut read = 0;
    let mut written = 0;
    loop {
        if read == src.len() {
            return Status::complete(read, written);
        }
        let Some(lead) = sequence::lead(src[read]) else {
            return Status::error(read, written);
        };
        if src.len() - read < lead.len {
            return if lead.tail_plausible(&src[read + 1..]) {
                Status::partial(read, written)
            } else {
                Status::error(read, written)
            };
        }
        let needed = V::units_for(lead.len);
        if dst.len() - written < needed.unwrap_or(1) {
            return Status::partial(read, written);
        }
        let Some(units) = needed else {
            return Status::error(read, written);
        };
        let Some(value) = lead.decode(&src[read..read + lead.len]) else {
            return Status::error(read, written);
        };
        let put = V::put(value, &mut dst[written..]);
        debug_assert_eq!(put, units);
        written += put;
        read += lead.len;
    }
}

pub(crate) fn encode_loop<V: Units>(src: &[V::Unit], dst: &mut [u8]) -> Status {
    let mut read = 0;
    let mut written = 0;
    loop {
        if read == src.len() {
            return Status::complete(read, written);
        }
        let (value, units) = match V::pull(src, read) {
            Pulled::Scalar { value, units } => (value, units),
            Pulled::Pending => return Status::partial(read, written),
            Pulled::Invalid => return Status::error(read, written),
        };
        let len = sequence::encoded_len(value);
        if dst.len() - written < len {
            return Status::partial(read, written);
        }
        sequence::put(value, &mut dst[written..written + len]);
        read += units;
        written += len;
    }
}

/// A fixed-width Unicode encoding that can be transcoded to and from UTF-8.
///
/// Implemented by the three variants [`Utf16`], [`Utf32`] and [`Ucs2`]. Both
/// operations convert as much as the two buffers allow and report a
/// [`Status`]: the outcome classification plus exact cursors into both
/// slices. A caller drives a whole conversion by looping, re-invoking with
/// the unconsumed input and fresh output room after every
/// [`Outcome::Partial`], until [`Outcome::Complete`].
///
/// Guarantees, for every call:
///
/// - `read` and `written` never exceed the respective slice lengths, and
///   nothing at or beyond them is touched.
/// - Output holds only whole characters; a surrogate pair is never split
///   across calls in either direction.
/// - After [`Outcome::Error`], `read` is the exact offset of the first
///   byte/unit of the offending sequence, and output produced for earlier
///   sequences is intact.
///
/// [`Utf16`]: crate::Utf16
/// [`Utf32`]: crate::Utf32
/// [`Ucs2`]: crate::Ucs2
/// [`Outcome::Partial`]: crate::Outcome::Partial
/// [`Outcome::Complete`]: crate::Outcome::Complete
/// [`Outcome::Error`]: crate::Outcome::Error
pub trait WideEncoding {
    /// The fixed-width code unit of this encoding.
    type Unit: Copy + Eq + Ord + fmt::Debug + Default + Into<u32>;

    /// Decode UTF-8 bytes from `src` into code units in `dst`.
    ///
    /// An incomplete trailing sequence reports [`Outcome::Partial`] with the
    /// cursor left at the sequence start; whether that truncation is
    /// tolerable is the caller's call.
    ///
    /// [`Outcome::Partial`]: crate::Outcome::Partial
    fn decode(&self, state: &mut ConversionState, src: &[u8], dst: &mut [Self::Unit]) -> Status;

    /// Encode code units from `src` into UTF-8 bytes in `dst`.
    fn encode(&self, state: &mut ConversionState, src: &[Self::Unit], dst: &mut [u8]) -> Status;

    /// Output length in units that can never overflow when decoding
    /// `byte_len` input bytes in one call.
    fn max_units(&self, byte_len: usize) -> usize;

    /// Output length in bytes that can never overflow when encoding
    /// `unit_len` input units in one call.
    fn max_bytes(&self, unit_len: usize) -> usize;
}
