use bstr::BString;
use thiserror::Error;

/// Failure of a whole-input conversion.
///
/// The incremental engines report progress through [`Status`] alone; this
/// richer type is produced by the buffered adapters, which treat their input
/// as the entire stream and therefore turn a trailing
/// [`Partial`](crate::Outcome::Partial) into [`Incomplete`].
///
/// [`Status`]: crate::Status
/// [`Incomplete`]: ConvertError::Incomplete
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A byte sequence UTF-8 does not allow, or one whose code point the
    /// target encoding cannot represent. Holds the offending bytes, lead
    /// byte first.
    #[error("malformed sequence {bytes:?} at byte {offset}")]
    MalformedBytes {
        /// Offset of the sequence's first byte in the input.
        offset: usize,
        /// The offending bytes, at most one sequence's worth.
        bytes: BString,
    },

    /// A lone or misordered surrogate, or a unit above U+10FFFF.
    #[error("invalid code unit {unit:#06x} at index {offset}")]
    InvalidUnit {
        /// Offset of the offending unit in the input.
        offset: usize,
        /// The unit's value.
        unit: u32,
    },

    /// The input ends inside a sequence or surrogate pair.
    #[error("input truncated mid-character at offset {offset}")]
    Incomplete {
        /// Offset of the first byte/unit of the truncated character.
        offset: usize,
    },
}
