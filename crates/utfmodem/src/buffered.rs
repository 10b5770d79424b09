//! Whole-input conveniences over the incremental interface.
//!
//! These treat the given slice as the complete stream: the output buffer is
//! sized with the worst-case queries so an output-full stop cannot happen,
//! which leaves a [`Partial`](crate::Outcome::Partial) outcome meaning
//! exactly "truncated input".

use alloc::{vec, vec::Vec};

use bstr::BString;

use crate::codec::WideEncoding;
use crate::error::ConvertError;
use crate::sequence;
use crate::status::{ConversionState, Outcome};

/// Decode an entire UTF-8 input into a freshly allocated unit buffer.
///
/// # Errors
///
/// [`ConvertError::MalformedBytes`] for input the encoding rejects,
/// [`ConvertError::Incomplete`] when the input ends mid-sequence.
pub fn decode_all<E: WideEncoding>(
    encoding: &E,
    src: &[u8],
) -> Result<Vec<E::Unit>, ConvertError> {
    let mut state = ConversionState::new();
    let mut dst = vec![E::Unit::default(); encoding.max_units(src.len())];
    let status = encoding.decode(&mut state, src, &mut dst);
    match status.outcome {
        Outcome::Complete => {
            dst.truncate(status.written);
            Ok(dst)
        }
        Outcome::Partial => Err(ConvertError::Incomplete { offset: status.read }),
        Outcome::Error => Err(ConvertError::MalformedBytes {
            offset: status.read,
            bytes: offending_bytes(&src[status.read..]),
        }),
    }
}

/// Encode an entire unit slice into a freshly allocated UTF-8 buffer.
///
/// # Errors
///
/// [`ConvertError::InvalidUnit`] for a unit or pairing the encoding rejects,
/// [`ConvertError::Incomplete`] when the input ends on a lone high
/// surrogate.
pub fn encode_all<E: WideEncoding>(
    encoding: &E,
    src: &[E::Unit],
) -> Result<Vec<u8>, ConvertError> {
    let mut state = ConversionState::new();
    let mut dst = vec![0u8; encoding.max_bytes(src.len())];
    let status = encoding.encode(&mut state, src, &mut dst);
    match status.outcome {
        Outcome::Complete => {
            dst.truncate(status.written);
            Ok(dst)
        }
        Outcome::Partial => Err(ConvertError::Incomplete { offset: status.read }),
        Outcome::Error => Err(ConvertError::InvalidUnit {
            offset: status.read,
            unit: src[status.read].into(),
        }),
    }
}

/// At most one sequence's worth of bytes starting at the error offset.
fn offending_bytes(rest: &[u8]) -> BString {
    let take = sequence::lead(rest[0]).map_or(1, |lead| lead.len.min(rest.len()));
    BString::from(&rest[..take])
}
