//! Error types reported by the wire codec.

use std::fmt;
use thiserror::Error;

/// Wire section being processed when a codec call failed.
///
/// Carried by [`WireError`] so that a propagated failure names the stage
/// that aborted the outer operation, down to the failing period index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// The NUL-terminated title text.
    Title,
    /// The period block at the given array index.
    Period(usize),
    /// The trailing selection flag.
    Selected,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => f.write_str("title"),
            Self::Period(index) => write!(f, "period {index}"),
            Self::Selected => f.write_str("selected flag"),
        }
    }
}

/// Errors reported by encode and decode operations.
///
/// These cover everything the unframed format allows a codec to detect:
/// spans too small for the section being moved, a title with no terminator
/// in bounds, and decoded title bytes that are not valid UTF-8. A
/// mismatched but well-terminated source decodes without error; see the
/// module documentation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WireError {
    /// The destination span cannot hold the section being written.
    #[error(
        "destination full while encoding {section}: needed {needed} bytes, {remaining} remaining"
    )]
    DestinationFull {
        /// Section that did not fit.
        section: Section,
        /// Bytes the section required.
        needed: usize,
        /// Bytes left in the destination span.
        remaining: usize,
    },
    /// The source span ended before the section was fully read.
    #[error(
        "source exhausted while decoding {section}: needed {needed} bytes, {remaining} remaining"
    )]
    SourceExhausted {
        /// Section that was being read.
        section: Section,
        /// Bytes the section required.
        needed: usize,
        /// Bytes left in the source span.
        remaining: usize,
    },
    /// No NUL terminator was found for the title.
    #[error("title terminator not found in the {searched} bytes remaining")]
    UnterminatedTitle {
        /// Bytes searched before giving up, i.e. the rest of the span.
        searched: usize,
    },
    /// The decoded title bytes are not valid UTF-8.
    #[error("decoded title is not valid UTF-8")]
    TitleNotUtf8(#[from] std::str::Utf8Error),
}
