//! Feed a byte stream through the decoder in small pieces, the way input
//! arrives from a socket or a file read loop.

use utfmodem::{ConversionState, Outcome, Utf16, WideEncoding};

fn main() {
    let text = "stream \u{448}\u{AAAA}\u{10AAAA} done";
    let bytes = text.as_bytes();

    let mut state = ConversionState::new();
    let mut units = Vec::new();
    let mut consumed = 0;

    // Input arrives three bytes at a time; output space is four units.
    let mut fed = 0;
    while consumed < bytes.len() {
        fed = (fed + 3).min(bytes.len()).max(consumed + 1);
        let mut chunk = [0u16; 4];
        let status = Utf16.decode(&mut state, &bytes[consumed..fed], &mut chunk);
        units.extend_from_slice(&chunk[..status.written]);
        consumed += status.read;
        println!(
            "fed {fed:>2} bytes, consumed {consumed:>2}, {:>2} units so far ({:?})",
            units.len(),
            status.outcome
        );
        assert_ne!(status.outcome, Outcome::Error);
    }

    assert_eq!(units, text.encode_utf16().collect::<Vec<u16>>());
    println!("round trip ok: {}", String::from_utf16(&units).unwrap() == text);
}
