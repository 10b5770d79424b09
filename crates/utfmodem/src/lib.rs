//! An incremental, resumable transcoder between UTF-8 and the fixed-width
//! Unicode encodings: UTF-16, UTF-32, and UCS-2 (UTF-16 restricted to the
//! Basic Multilingual Plane).
//!
//! The crate exposes exactly two operations, [`WideEncoding::decode`] and
//! [`WideEncoding::encode`], over caller-owned input and output slices.
//! Each call converts as much as fits, then reports an [`Outcome`] together
//! with exact cursors into both buffers, so a caller can resume a conversion
//! interrupted by a full output buffer or an incomplete trailing sequence:
//!
//! ```
//! use utfmodem::{ConversionState, Outcome, Utf16, WideEncoding};
//!
//! let bytes = "caf\u{E9}".as_bytes(); // 5 bytes, 4 characters
//! let mut state = ConversionState::new();
//! let mut units = [0u16; 2];
//!
//! // Only two units of room: the call stops early and says where.
//! let status = Utf16.decode(&mut state, bytes, &mut units);
//! assert_eq!(status.outcome, Outcome::Partial);
//! assert_eq!((status.read, status.written), (2, 2));
//! assert_eq!(units, [u16::from(b'c'), u16::from(b'a')]);
//!
//! // Resume from the reported cursors.
//! let status = Utf16.decode(&mut state, &bytes[2..], &mut units);
//! assert_eq!(status.outcome, Outcome::Complete);
//! assert_eq!((status.read, status.written), (3, 2));
//! assert_eq!(units, [u16::from(b'f'), 0x00E9]);
//! ```
//!
//! Errors are reported at sequence granularity: output is never produced for
//! a rejected sequence, and `read` always points at its first byte or unit.
//! The engines are allocation-free; the default `buffered` feature adds
//! whole-input conveniences ([`decode_all`], [`encode_all`]) on top.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod codec;
mod error;
mod sequence;
mod status;
mod ucs2;
mod utf16;
mod utf32;

#[cfg(feature = "buffered")]
mod buffered;

#[cfg(test)]
mod tests;

pub use codec::WideEncoding;
pub use error::ConvertError;
pub use status::{ConversionState, Outcome, Status};
pub use ucs2::Ucs2;
pub use utf16::Utf16;
pub use utf32::Utf32;

#[cfg(feature = "buffered")]
pub use buffered::{decode_all, encode_all};
