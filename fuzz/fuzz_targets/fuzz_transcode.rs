#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utfmodem::{ConversionState, Outcome, Status, Ucs2, Utf16, Utf32, WideEncoding};

#[derive(Arbitrary, Debug)]
struct Input {
    bytes: Vec<u8>,
    units: Vec<u16>,
    split: usize,
    cap: u8,
}

fuzz_target!(|input: Input| {
    decode_invariants(&Utf16, &input);
    decode_invariants(&Utf32, &input);
    decode_invariants(&Ucs2, &input);
    encode_invariants(&input);
});

fn checked<E: WideEncoding>(
    encoding: &E,
    src: &[u8],
    cap: usize,
) -> (Status, Vec<E::Unit>) {
    let mut state = ConversionState::new();
    let mut dst = vec![E::Unit::default(); cap];
    let status = encoding.decode(&mut state, src, &mut dst);
    assert!(status.read <= src.len());
    assert!(status.written <= cap);
    if status.outcome == Outcome::Complete {
        assert_eq!(status.read, src.len());
    }
    dst.truncate(status.written);
    (status, dst)
}

/// Cursor bounds, error locality, and split-resumption equivalence.
fn decode_invariants<E: WideEncoding>(encoding: &E, input: &Input) {
    let bytes = &input.bytes;
    let cap = usize::from(input.cap);
    let (status, produced) = checked(encoding, bytes, cap);

    if status.outcome == Outcome::Error {
        // The reported offset must reproduce the error in isolation.
        let (retry, _) = checked(encoding, &bytes[status.read..], cap.max(4));
        assert_eq!(retry.outcome, Outcome::Error);
        assert_eq!(retry.read, 0);
    }

    // Splitting the input at an arbitrary point and resuming from the
    // returned cursors converges on the same output prefix.
    if status.outcome != Outcome::Error && !bytes.is_empty() {
        let split = input.split % bytes.len();
        let mut state = ConversionState::new();
        let mut dst = vec![E::Unit::default(); cap];
        let first = encoding.decode(&mut state, &bytes[..split], &mut dst);
        if first.outcome != Outcome::Error {
            let second =
                encoding.decode(&mut state, &bytes[first.read..], &mut dst[first.written..]);
            dst.truncate(first.written + second.written);
            assert_eq!(dst, produced);
        }
    }
}

fn encode_invariants(input: &Input) {
    let units = &input.units;
    let cap = usize::from(input.cap);
    let mut state = ConversionState::new();
    let mut dst = vec![0u8; cap];
    let status = Utf16.encode(&mut state, units, &mut dst);
    assert!(status.read <= units.len());
    assert!(status.written <= cap);
    if status.outcome == Outcome::Complete {
        assert_eq!(status.read, units.len());
    }
    // Whatever was produced is itself valid UTF-8 of whole characters.
    let round = std::str::from_utf8(&dst[..status.written]).unwrap();
    let reencoded: Vec<u16> = round.encode_utf16().collect();
    assert_eq!(&units[..status.read], reencoded.as_slice());
}
