/// Classification of a single conversion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// All input was consumed and transformed.
    Complete,
    /// The call stopped early with everything consumed so far well-formed:
    /// either the input ended inside a sequence or surrogate pair, or the
    /// output buffer had no room for the next unit(s). Supplying more input
    /// or output from the reported cursors resumes the conversion.
    Partial,
    /// A malformed sequence, an invalid code unit, or a code point the
    /// target cannot represent. `read` points at its first byte or unit.
    Error,
}

/// Cursor report for one conversion call.
///
/// `read` and `written` count code units consumed from the input slice and
/// produced into the output slice. Both are valid offsets into the
/// respective slices regardless of the outcome; output produced before an
/// error is preserved, never rolled back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Status {
    /// Why the call returned.
    pub outcome: Outcome,
    /// Input units consumed.
    pub read: usize,
    /// Output units produced.
    pub written: usize,
}

impl Status {
    pub(crate) const fn complete(read: usize, written: usize) -> Self {
        Status {
            outcome: Outcome::Complete,
            read,
            written,
        }
    }

    pub(crate) const fn partial(read: usize, written: usize) -> Self {
        Status {
            outcome: Outcome::Partial,
            read,
            written,
        }
    }

    pub(crate) const fn error(read: usize, written: usize) -> Self {
        Status {
            outcome: Outcome::Error,
            read,
            written,
        }
    }
}

/// Resumption token threaded through successive calls of one conversion.
///
/// UTF-8 and the fixed-width encodings here carry no shift state between
/// code point boundaries, and a call that stops mid-sequence leaves its
/// cursor at the sequence start rather than banking the prefix, so the
/// token is zero-sized. It stays in the call signature to keep the
/// resumption contract explicit and the signature uniform with codecs that
/// do need state.
///
/// After an [`Outcome::Error`] the token is undefined; [`reset`] it (or
/// construct a fresh one) before starting an independent conversion.
///
/// [`reset`]: ConversionState::reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionState(());

impl ConversionState {
    /// A fresh token: no partial sequence pending.
    pub const fn new() -> Self {
        ConversionState(())
    }

    /// Restore the initial state.
    pub fn reset(&mut self) {
        *self = ConversionState::new();
    }
}
