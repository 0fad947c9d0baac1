//! Wire codec for task records.
//!
//! The format is a fixed layout with a single variable-length field:
//!
//! ```text
//! title bytes ++ 0x00
//! ++ period[0] (start: i64 native-endian, end: i64 native-endian)
//! ++ period[1] (start, end likewise)
//! ++ selected  (1 byte, 0 = false, nonzero = true)
//! ```
//!
//! Timestamps are written in native width and byte order with no
//! normalization, so encode and decode must run on compatible
//! architectures. Section boundaries are implicit: the title's NUL
//! terminator delimits the variable section and the fixed widths of the
//! period block and flag locate the rest.
//!
//! # Limitations
//!
//! Nothing frames the record: no length prefix, magic number, version tag,
//! or checksum. A source span that was not produced by a matching encoder —
//! a different period count, timestamp width, or flag width — cannot be
//! detected beyond an exhausted span or a missing title terminator, and may
//! decode without error into garbage values. Callers that persist or
//! transmit this layout must guarantee its provenance out of band.

mod cursor;
mod error;
mod period;
mod task;

pub use cursor::{ReadCursor, WriteCursor};
pub use error::{Section, WireError};
pub use period::{
    PERIOD_WIRE_SIZE, TIMESTAMP_WIRE_SIZE, decode_period, decode_periods, encode_period,
    encode_periods,
};
pub use task::{FLAG_WIRE_SIZE, decode_task, decode_task_into, encode_task, encoded_task_len};
