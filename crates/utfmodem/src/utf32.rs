use crate::codec::{self, Pulled, Units, WideEncoding};
use crate::status::{ConversionState, Status};

/// UTF-32: one unit per code point.
///
/// Encoding rejects any unit in the surrogate range or above U+10FFFF;
/// decoding can produce neither, so a decoded buffer is always a valid
/// scalar sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf32;

impl Units for Utf32 {
    type Unit = u32;

    fn units_for(_seq_len: usize) -> Option<usize> {
        Some(1)
    }

    fn put(value: u32, dst: &mut [u32]) -> usize {
        dst[0] = value;
        1
    }

    fn pull(src: &[u32], at: usize) -> Pulled {
        let unit = src[at];
        if codec::is_surrogate(unit) || unit > codec::SCALAR_MAX {
            Pulled::Invalid
        } else {
            Pulled::Scalar { value: unit, units: 1 }
        }
    }
}

impl WideEncoding for Utf32 {
    type Unit = u32;

    fn decode(&self, _state: &mut ConversionState, src: &[u8], dst: &mut [u32]) -> Status {
        codec::decode_loop::<Utf32>(src, dst)
    }

    fn encode(&self, _state: &mut ConversionState, src: &[u32], dst: &mut [u8]) -> Status {
        codec::encode_loop::<Utf32>(src, dst)
    }

    fn max_units(&self, byte_len: usize) -> usize {
        byte_len
    }

    fn max_bytes(&self, unit_len: usize) -> usize {
        unit_len * 4
    }
}
