use crate::codec::{self, Pulled, Units, WideEncoding};
use crate::status::{ConversionState, Status};

/// UCS-2: UTF-16 restricted to the Basic Multilingual Plane.
///
/// No surrogate pairs on either side. Decoding a complete four-byte
/// sequence (always a supplementary-plane code point) is an
/// error at the sequence start; a four-byte sequence still incomplete at the
/// end of input is reported [`Partial`](crate::Outcome::Partial), since
/// representability is judged only on complete sequences. Encoding rejects
/// any surrogate unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ucs2;

impl Units for Ucs2 {
    type Unit = u16;

    fn units_for(seq_len: usize) -> Option<usize> {
        if seq_len == 4 { None } else { Some(1) }
    }

    fn put(value: u32, dst: &mut [u16]) -> usize {
        debug_assert!(value < 0x10000);
        dst[0] = value as u16;
        1
    }

    fn pull(src: &[u16], at: usize) -> Pulled {
        let unit = u32::from(src[at]);
        if codec::is_surrogate(unit) {
            Pulled::Invalid
        } else {
            Pulled::Scalar { value: unit, units: 1 }
        }
    }
}

impl WideEncoding for Ucs2 {
    type Unit = u16;

    fn decode(&self, _state: &mut ConversionState, src: &[u8], dst: &mut [u16]) -> Status {
        codec::decode_loop::<Ucs2>(src, dst)
    }

    fn encode(&self, _state: &mut ConversionState, src: &[u16], dst: &mut [u8]) -> Status {
        codec::encode_loop::<Ucs2>(src, dst)
    }

    fn max_units(&self, byte_len: usize) -> usize {
        byte_len
    }

    fn max_bytes(&self, unit_len: usize) -> usize {
        unit_len * 3
    }
}
