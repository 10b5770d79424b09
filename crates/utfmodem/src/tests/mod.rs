#[cfg(feature = "buffered")]
mod encode_bad;
