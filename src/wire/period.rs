//! Wire codec for [`Period`] values.

use super::{ReadCursor, Section, WireError, WriteCursor};
use crate::domain::{Period, Timestamp};

/// Width in bytes of one timestamp field on the wire.
pub const TIMESTAMP_WIRE_SIZE: usize = size_of::<i64>();

/// Width in bytes of one encoded period.
pub const PERIOD_WIRE_SIZE: usize = 2 * TIMESTAMP_WIRE_SIZE;

/// Encodes one period into `dest`, returning the number of bytes written.
///
/// The two timestamps are written consecutively in native byte order.
///
/// # Errors
///
/// Returns [`WireError::DestinationFull`] when `dest` holds fewer than
/// [`PERIOD_WIRE_SIZE`] bytes.
pub fn encode_period(period: &Period, dest: &mut [u8]) -> Result<usize, WireError> {
    let mut out = WriteCursor::new(dest);
    encode_period_at(period, Section::Period(0), &mut out)?;
    Ok(out.written())
}

/// Encodes `periods` back to back into `dest` with no separators or
/// padding, returning the number of bytes written.
///
/// Encoding stops at the first element that does not fit; the error names
/// that element's index.
///
/// # Errors
///
/// Returns [`WireError::DestinationFull`] for the first period that does
/// not fit.
pub fn encode_periods(periods: &[Period], dest: &mut [u8]) -> Result<usize, WireError> {
    let mut out = WriteCursor::new(dest);
    encode_periods_at(periods, &mut out)?;
    Ok(out.written())
}

/// Decodes one period from the start of `src`.
///
/// # Errors
///
/// Returns [`WireError::SourceExhausted`] when `src` holds fewer than
/// [`PERIOD_WIRE_SIZE`] bytes.
pub fn decode_period(src: &[u8]) -> Result<Period, WireError> {
    let mut input = ReadCursor::new(src);
    decode_period_at(Section::Period(0), &mut input)
}

/// Decodes `N` consecutive periods from the start of `src`.
///
/// Decoding stops at the first element that cannot be read; the error names
/// that element's index.
///
/// # Errors
///
/// Returns [`WireError::SourceExhausted`] for the first period that cannot
/// be fully read.
pub fn decode_periods<const N: usize>(src: &[u8]) -> Result<[Period; N], WireError> {
    let mut input = ReadCursor::new(src);
    decode_periods_at(&mut input)
}

/// Encodes one period at the cursor position, attributing failures to
/// `section`.
pub(super) fn encode_period_at(
    period: &Period,
    section: Section,
    out: &mut WriteCursor<'_>,
) -> Result<(), WireError> {
    out.put(section, &period.start().as_secs().to_ne_bytes())?;
    out.put(section, &period.end().as_secs().to_ne_bytes())
}

/// Encodes a period sequence at the cursor position.
pub(super) fn encode_periods_at(
    periods: &[Period],
    out: &mut WriteCursor<'_>,
) -> Result<(), WireError> {
    for (index, period) in periods.iter().enumerate() {
        encode_period_at(period, Section::Period(index), out)?;
    }
    Ok(())
}

/// Decodes one period at the cursor position, attributing failures to
/// `section`.
pub(super) fn decode_period_at(
    section: Section,
    input: &mut ReadCursor<'_>,
) -> Result<Period, WireError> {
    let start = i64::from_ne_bytes(input.take_array::<TIMESTAMP_WIRE_SIZE>(section)?);
    let end = i64::from_ne_bytes(input.take_array::<TIMESTAMP_WIRE_SIZE>(section)?);
    Ok(Period::new(
        Timestamp::from_secs(start),
        Timestamp::from_secs(end),
    ))
}

/// Decodes a fixed-width period sequence at the cursor position.
pub(super) fn decode_periods_at<const N: usize>(
    input: &mut ReadCursor<'_>,
) -> Result<[Period; N], WireError> {
    let mut periods = [Period::default(); N];
    for (index, slot) in periods.iter_mut().enumerate() {
        *slot = decode_period_at(Section::Period(index), input)?;
    }
    Ok(periods)
}
