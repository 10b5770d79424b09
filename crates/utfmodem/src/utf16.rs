use crate::codec::{self, Pulled, Units, WideEncoding};
use crate::status::{ConversionState, Status};

/// UTF-16: one unit per BMP code point, a surrogate pair for the rest.
///
/// Decoding writes a pair only when both units fit; encoding consumes a pair
/// only when both units are present and correctly ordered, so a high
/// surrogate at the very end of input reports
/// [`Outcome::Partial`](crate::Outcome::Partial) with nothing consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf16;

impl Units for Utf16 {
    type Unit = u16;

    fn units_for(seq_len: usize) -> Option<usize> {
        // Every valid four-byte sequence decodes outside the BMP.
        Some(if seq_len == 4 { 2 } else { 1 })
    }

    fn put(value: u32, dst: &mut [u16]) -> usize {
        if let Some(supplementary) = value.checked_sub(0x10000) {
            dst[0] = (codec::SURROGATE_LO + (supplementary >> 10)) as u16;
            dst[1] = (codec::LOW_SURROGATE_LO + (supplementary & 0x3FF)) as u16;
            2
        } else {
            dst[0] = value as u16;
            1
        }
    }

    fn pull(src: &[u16], at: usize) -> Pulled {
        let unit = u32::from(src[at]);
        if codec::is_high_surrogate(unit) {
            match src.get(at + 1) {
                None => Pulled::Pending,
                Some(&next) if codec::is_low_surrogate(u32::from(next)) => Pulled::Scalar {
                    value: 0x10000
                        + ((unit - codec::SURROGATE_LO) << 10)
                        + (u32::from(next) - codec::LOW_SURROGATE_LO),
                    units: 2,
                },
                Some(_) => Pulled::Invalid,
            }
        } else if codec::is_low_surrogate(unit) {
            Pulled::Invalid
        } else {
            Pulled::Scalar { value: unit, units: 1 }
        }
    }
}

impl WideEncoding for Utf16 {
    type Unit = u16;

    fn decode(&self, _state: &mut ConversionState, src: &[u8], dst: &mut [u16]) -> Status {
        codec::decode_loop::<Utf16>(src, dst)
    }

    fn encode(&self, _state: &mut ConversionState, src: &[u16], dst: &mut [u8]) -> Status {
        codec::encode_loop::<Utf16>(src, dst)
    }

    fn max_units(&self, byte_len: usize) -> usize {
        // ASCII is the worst case at one unit per byte; longer sequences
        // produce at most two units from three or four bytes.
        byte_len
    }

    fn max_bytes(&self, unit_len: usize) -> usize {
        // A lone BMP unit can cost three bytes; a pair costs four for two.
        unit_len * 3
    }
}
