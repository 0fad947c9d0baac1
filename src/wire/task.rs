//! Wire codec for [`Task`] records.

use super::period::{decode_periods_at, encode_periods_at};
use super::{PERIOD_WIRE_SIZE, ReadCursor, Section, WireError, WriteCursor};
use crate::domain::{TASK_PERIOD_COUNT, Task, Title};

/// Width in bytes of the encoded selection flag.
pub const FLAG_WIRE_SIZE: usize = size_of::<bool>();

/// Exact number of bytes [`encode_task`] writes for `task`.
#[must_use]
pub fn encoded_task_len(task: &Task) -> usize {
    task.title().len() + 1 + TASK_PERIOD_COUNT * PERIOD_WIRE_SIZE + FLAG_WIRE_SIZE
}

/// Encodes `task` into `dest`, returning the number of bytes written.
///
/// Sections are written in declaration order: the title bytes with their
/// NUL terminator, the period array, then the flag. No delimiters are
/// introduced between sections; their boundaries are implicit in the
/// terminator and the fixed trailing widths.
///
/// # Errors
///
/// Returns [`WireError::DestinationFull`] naming the section that did not
/// fit. The destination holds a partially written record in that case;
/// nothing is rolled back.
pub fn encode_task(task: &Task, dest: &mut [u8]) -> Result<usize, WireError> {
    let mut out = WriteCursor::new(dest);
    out.put(Section::Title, task.title().as_str().as_bytes())?;
    out.put(Section::Title, &[0])?;
    encode_periods_at(task.periods(), &mut out)?;
    out.put(Section::Selected, &[u8::from(task.selected())])?;
    Ok(out.written())
}

/// Decodes a task from the start of `src`, returning it together with the
/// number of bytes consumed.
///
/// # Errors
///
/// Propagates the same errors as [`decode_task_into`].
pub fn decode_task(src: &[u8]) -> Result<(Task, usize), WireError> {
    let mut task = Task::default();
    let consumed = decode_task_into(&mut task, src)?;
    Ok((task, consumed))
}

/// Decodes from `src` into an existing record, replacing every field.
///
/// The title is measured via its terminator and rebuilt at exactly the
/// incoming length; assigning it drops the destination's previous
/// allocation, so repeated decodes into the same record never leak. The
/// period array and flag are then read over the destination's fields.
///
/// # Errors
///
/// Returns [`WireError::UnterminatedTitle`] when no NUL byte is in bounds,
/// [`WireError::TitleNotUtf8`] for non-UTF-8 title bytes, and
/// [`WireError::SourceExhausted`] naming the period index or flag section
/// that could not be read. On error the destination may hold a mix of old
/// and new fields; nothing is rolled back.
pub fn decode_task_into(dest: &mut Task, src: &[u8]) -> Result<usize, WireError> {
    let mut input = ReadCursor::new(src);
    let text = std::str::from_utf8(input.take_until_nul()?)?;
    dest.set_title(Title::from_nul_free(text));
    dest.set_periods(decode_periods_at::<TASK_PERIOD_COUNT>(&mut input)?);
    let flag = input.take_array::<FLAG_WIRE_SIZE>(Section::Selected)?;
    dest.set_selected(flag != [0u8; FLAG_WIRE_SIZE]);
    Ok(input.consumed())
}
