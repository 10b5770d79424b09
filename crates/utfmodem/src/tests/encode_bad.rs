use crate::{
    ConversionState, ConvertError, Outcome, Status, Ucs2, Utf16, Utf32, WideEncoding, encode_all,
};

fn encode16(src: &[u16], cap: usize) -> Status {
    let mut state = ConversionState::new();
    let mut dst = [0u8; 32];
    Utf16.encode(&mut state, src, &mut dst[..cap])
}

// A high surrogate at the end of input is a valid prefix, merely incomplete:
// nothing is consumed and nothing is written.
#[test]
fn trailing_high_surrogate_is_partial() {
    let status = encode16(&[0xD800], 16);
    assert_eq!(status, Status { outcome: Outcome::Partial, read: 0, written: 0 });

    let status = encode16(&[0x0041, 0xDBFF], 16);
    assert_eq!(status, Status { outcome: Outcome::Partial, read: 1, written: 1 });
}

#[test]
fn misordered_and_lone_surrogates_are_errors() {
    // High surrogate followed by anything but a low surrogate.
    let status = encode16(&[0xD800, 0x0062], 16);
    assert_eq!(status, Status { outcome: Outcome::Error, read: 0, written: 0 });
    let status = encode16(&[0xD800, 0xD800], 16);
    assert_eq!(status, Status { outcome: Outcome::Error, read: 0, written: 0 });
    // A low surrogate can never lead.
    let status = encode16(&[0xDC00], 16);
    assert_eq!(status, Status { outcome: Outcome::Error, read: 0, written: 0 });
    let status = encode16(&[0x0041, 0xDFFF, 0x0042], 16);
    assert_eq!(status, Status { outcome: Outcome::Error, read: 1, written: 1 });
}

#[test]
fn utf32_rejects_surrogates_and_out_of_range_values() {
    for unit in [0xD800u32, 0xDFFF, 0x11_0000, 0xFFFF_FFFF] {
        let mut state = ConversionState::new();
        let mut dst = [0u8; 8];
        let status = Utf32.encode(&mut state, &[unit], &mut dst);
        assert_eq!(status, Status { outcome: Outcome::Error, read: 0, written: 0 }, "{unit:#x}");
    }
}

// Output already produced for valid input stays put; the cursor names the
// offending unit.
#[test]
fn utf32_error_after_valid_prefix() {
    let mut state = ConversionState::new();
    let mut dst = [0u8; 8];
    let status = Utf32.encode(&mut state, &[0x10_FFFF, 0xFFFF_FFFF], &mut dst);
    assert_eq!(status, Status { outcome: Outcome::Error, read: 1, written: 4 });
    assert_eq!(&dst[..4], b"\xF4\x8F\xBF\xBF");
}

#[test]
fn ucs2_rejects_every_surrogate_unit() {
    for unit in [0xD800u16, 0xDBFF, 0xDC00, 0xDFFF] {
        let mut state = ConversionState::new();
        let mut dst = [0u8; 8];
        let status = Ucs2.encode(&mut state, &[unit], &mut dst);
        assert_eq!(status, Status { outcome: Outcome::Error, read: 0, written: 0 }, "{unit:#x}");
    }
}

#[test]
fn output_room_is_checked_before_consuming() {
    // Four bytes of room short by one: the pair is not consumed.
    let status = encode16(&[0xDBFF, 0xDFFF], 3);
    assert_eq!(status, Status { outcome: Outcome::Partial, read: 0, written: 0 });
    // Three-byte character against two bytes of room.
    let status = encode16(&[0xAAAA], 2);
    assert_eq!(status, Status { outcome: Outcome::Partial, read: 0, written: 0 });
    // Zero-length output is legal.
    let status = encode16(&[0x0041], 0);
    assert_eq!(status, Status { outcome: Outcome::Partial, read: 0, written: 0 });
}

#[test]
fn encode_all_reports_offset_and_unit() {
    let err = encode_all(&Utf16, &[0x0041, 0xDC00]).unwrap_err();
    assert_eq!(err, ConvertError::InvalidUnit { offset: 1, unit: 0xDC00 });

    let err = encode_all(&Utf16, &[0x0041, 0xD801]).unwrap_err();
    assert_eq!(err, ConvertError::Incomplete { offset: 1 });

    let err = encode_all(&Utf32, &[0x11_0000]).unwrap_err();
    assert_eq!(err, ConvertError::InvalidUnit { offset: 0, unit: 0x11_0000 });
}
